#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use microtopo::{resolve, validate_document, ValidationOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parse, validate and resolve must never panic
        if let Ok(document) = microtopo::parse_str(content, Path::new("fuzz.odm.yaml")) {
            let _ = validate_document(&document, &ValidationOptions::new());
            let _ = resolve(&document.topology);
        }
    }
});
