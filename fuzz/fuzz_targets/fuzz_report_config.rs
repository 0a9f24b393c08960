//! Fuzz target for report configuration parsing.
//!
//! Tests that `--config` JSON handling never panics on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wm_report::ReportConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = ReportConfig::from_json(text);
    }
});
