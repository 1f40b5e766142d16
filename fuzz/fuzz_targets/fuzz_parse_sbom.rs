#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the lenient document extraction entry point.
///
/// Arbitrary UTF-8 is handed to `parse_sbom_str`; any outcome other than a
/// panic is acceptable.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_index::parsers::parse_sbom_str(s);
    }
});
