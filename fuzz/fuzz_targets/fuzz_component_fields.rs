#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_index::parsers::{CycloneDxParser, SbomParser};
use sbom_index::pipeline::flatten_sbom;
use std::path::Path;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz component and license extraction.
///
/// Input is spliced into a `components` entry and into a `licenses` list so
/// most runs get past the top-level shape checks.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if s.len() >= MAX_WRAPPED_INPUT_LEN {
        return;
    }

    let parser = CycloneDxParser::new();
    let root = Path::new("/sboms");
    let path = root.join("fuzz/bom.json");

    let as_component = format!(r#"{{"components":[{s}]}}"#);
    if let Ok(sbom) = parser.parse_str(&as_component) {
        let _ = flatten_sbom(sbom, &path, root);
    }

    let as_licenses = format!(r#"{{"components":[{{"name":"x","licenses":[{s}]}}]}}"#);
    if let Ok(sbom) = parser.parse_str(&as_licenses) {
        let _ = flatten_sbom(sbom, &path, root);
    }
});
