#![no_main]

//! Fuzz target for stamp assembly.
//!
//! Feeds arbitrary variable sets into `Stamp::from_vars` and checks that an
//! accepted stamp lands in a fresh registry unchanged.

use arbitrary::Arbitrary;
use buildstamp_registry::{Stamp, SystemBuildInfo};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Vars {
    timestamp: Option<String>,
    host: Option<String>,
    user: Option<String>,
    revision: Option<String>,
    status: Option<String>,
}

fuzz_target!(|vars: Vars| {
    let lookup = |key: &str| match key {
        "BUILD_TIMESTAMP" => vars.timestamp.clone(),
        "BUILD_HOST" => vars.host.clone(),
        "BUILD_USER" => vars.user.clone(),
        "BUILD_SCM_REVISION" => vars.revision.clone(),
        "BUILD_SCM_STATUS" => vars.status.clone(),
        _ => None,
    };

    let Ok(stamp) = Stamp::from_vars(lookup) else {
        return;
    };

    let registry = SystemBuildInfo::new();
    stamp.apply(&registry).expect("fresh registry accepts writes");
    assert_eq!(registry.get_info(), &stamp.into_record());
});
