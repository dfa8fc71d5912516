#![no_main]

use eyefilter::config::SettingValue;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeMap;

fuzz_target!(|data: &[u8]| {
    // Arbitrary settings documents must parse or fail, never panic
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(raw) = serde_json::from_str::<BTreeMap<String, serde_json::Value>>(s) {
            for value in raw.into_values().filter_map(SettingValue::from_json) {
                let _ = value.as_positive_minutes();
                let _ = value.to_string();
            }
        }
    }
});
