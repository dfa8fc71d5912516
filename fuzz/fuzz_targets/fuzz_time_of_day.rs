#![no_main]

use chrono::Timelike;
use eyefilter::schedule::parse_time_of_day;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(time) = parse_time_of_day("day_start", s) {
            // Accepted values always have minute precision
            assert_eq!(time.second(), 0);
            assert_eq!(time.nanosecond(), 0);
        }
    }
});
