#![no_main]

//! Fuzz target for tolerant build record JSON parsing.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Should never panic.
    let _ = serde_json::from_str::<buildstamp_types::RecordReport>(s);

    if let Ok(record) = serde_json::from_str::<buildstamp_types::BuildRecord>(s) {
        // Whatever parsed must serialize back to the same record.
        let again = serde_json::to_string(&record).expect("serialize record");
        let back: buildstamp_types::BuildRecord =
            serde_json::from_str(&again).expect("reparse record");
        assert_eq!(back, record);
    }
});
