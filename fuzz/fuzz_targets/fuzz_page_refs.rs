#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Anything the parser accepts must format back to the same string
    if let Ok(books) = bookdex::output::parse_page_refs(data) {
        assert_eq!(bookdex::output::format_page_refs(&books), data);
    }
});
