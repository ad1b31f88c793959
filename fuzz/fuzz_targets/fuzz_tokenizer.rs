#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Every word must start with a non-digit and respect the length bounds
    for word in bookdex::utils::tokenize(data, 3) {
        let len = word.chars().count();
        assert!((3..=bookdex::utils::MAX_WORD_LENGTH).contains(&len));
        assert!(!word.starts_with(|c: char| c.is_numeric()));
    }
});
