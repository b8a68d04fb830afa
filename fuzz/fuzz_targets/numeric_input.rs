#![no_main]

use carbon_footprint::config::ValidationConfig;
use carbon_footprint::normalize::{normalize, parse_numeric_input};
use carbon_footprint::profile::Field;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Sanitizing and normalizing free text must never panic
        let value = parse_numeric_input(input);
        assert!(value >= 0.0);
        for field in Field::ALL {
            let _ = normalize(value, field, &ValidationConfig::default());
        }
    }
});
