//! Fuzz target for record timestamp parsing.
//!
//! Workbook timestamp cells arrive as free text in many layouts; parsing
//! must reject anything it does not understand without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wm_core::timestamp::{from_excel_serial, parse_timestamp};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_timestamp(text);
    }
    if data.len() == 8 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(data);
        let _ = from_excel_serial(f64::from_le_bytes(bytes));
    }
});
