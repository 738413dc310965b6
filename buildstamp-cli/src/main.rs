use anyhow::Context;
use buildstamp_cli::config::{self, ConfigMerger, OutputFormat};
use buildstamp_cli::render::{render_json, render_md, render_text};
use buildstamp_types::{BuildRecord, Field, RecordReport, ToolInfo};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "buildstamp",
    version,
    about = "Print the build provenance stamped into this binary."
)]
struct Cli {
    /// Config file (default: ./buildstamp.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the whole build record.
    Show(ShowArgs),
    /// Print the raw value of a single field.
    Field(FieldArgs),
}

#[derive(Debug, Parser)]
struct ShowArgs {
    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Hide a field (repeatable; extends the config file list).
    #[arg(long)]
    redact: Vec<Field>,
}

#[derive(Debug, Parser)]
struct FieldArgs {
    /// One of timestamp, hostname, user, revision, status.
    field: Field,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let record = buildstamp_registry::init().context("initialize build record")?;

    let cli = Cli::parse();
    let file_config = config::load_or_default(&Utf8PathBuf::from("."), cli.config.as_deref())
        .context("load buildstamp.toml config")?;

    match cli.cmd {
        Command::Show(args) => cmd_show(record, ConfigMerger::new(file_config), args),
        Command::Field(args) => cmd_field(record, ConfigMerger::new(file_config), args),
    }
}

fn cmd_show(record: &BuildRecord, merger: ConfigMerger, args: ShowArgs) -> anyhow::Result<()> {
    let merged = merger.merge_show_args(args.format, &args.redact);
    debug!(
        "merged config: format={:?}, redact={:?}",
        merged.format, merged.redact
    );

    let shown = record.redacted(&merged.redact);
    let out = match merged.format {
        OutputFormat::Text => render_text(&shown),
        OutputFormat::Markdown => render_md(&shown),
        OutputFormat::Json => render_json(&RecordReport::new(tool_info(), shown))?,
    };
    write_stdout(&out)
}

fn cmd_field(record: &BuildRecord, merger: ConfigMerger, args: FieldArgs) -> anyhow::Result<()> {
    let merged = merger.merge_show_args(None, &[]);
    let shown = record.redacted(&merged.redact);
    write_stdout(&format!("{}\n", shown.value_of(args.field)))
}

fn write_stdout(s: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(s.as_bytes()).context("write stdout")?;
    stdout.flush().context("flush stdout")
}

fn tool_info() -> ToolInfo {
    ToolInfo {
        name: "buildstamp".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}
