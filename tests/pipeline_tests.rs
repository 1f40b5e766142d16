//! Pipeline and CLI integration tests.
//!
//! These tests run the full discover → extract → aggregate → write pipeline
//! over the fixture SBOM tree and check the written index.

use sbom_index::cli::run_index;
use sbom_index::pipeline::{self, find_sbom_files};
use sbom_index::{ComponentRecord, IndexConfig, IndexError};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_root() -> PathBuf {
    Path::new(FIXTURES_DIR).join("sboms")
}

fn index_fixtures(output: &Path) -> pipeline::RunSummary {
    let config = IndexConfig::new(fixture_root(), output).with_quiet(true);
    pipeline::run(&config).expect("indexing fixtures should succeed")
}

fn read_index(path: &Path) -> Vec<ComponentRecord> {
    let content = fs::read_to_string(path).expect("read index");
    serde_json::from_str(&content).expect("index is a JSON array of records")
}

// ============================================================================
// Discovery
// ============================================================================

mod discovery {
    use super::*;

    #[test]
    fn finds_only_json_files() {
        let root = fixture_root();
        let files = find_sbom_files(&root).expect("discover");
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(&root).expect("under root").to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("billing/bom.cdx.json"),
                PathBuf::from("broken/malformed.json"),
                PathBuf::from("broken/wrong-shape.json"),
                PathBuf::from("minimal.json"),
                PathBuf::from("teams/alpha/sbom.json"),
            ]
        );
    }
}

// ============================================================================
// Full runs
// ============================================================================

mod full_run {
    use super::*;

    #[test]
    fn summary_counts_files_and_records() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let summary = index_fixtures(&dir.path().join("components.json"));

        assert_eq!(summary.files_found, 5);
        assert_eq!(summary.files_skipped, 2);
        assert_eq!(summary.records_written, 6);
        assert!(summary.output_changed);
    }

    #[test]
    fn index_matches_expected_document() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");
        index_fixtures(&output);

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&output).expect("read")).expect("json");
        let expected = json!([
            {
                "project_name": "billing",
                "project_version": "2.1.0",
                "project_group": "com.acme",
                "sbom_path": "billing/bom.cdx.json",
                "component_name": "anyhow",
                "component_version": "1.0.86",
                "component_group": "",
                "component_type": "library",
                "purl": "pkg:cargo/anyhow@1.0.86",
                "licenses": []
            },
            {
                "project_name": "billing",
                "project_version": "2.1.0",
                "project_group": "com.acme",
                "sbom_path": "billing/bom.cdx.json",
                "component_name": "serde",
                "component_version": "1.0.150",
                "component_group": "serde-rs",
                "component_type": "library",
                "purl": "pkg:cargo/serde@1.0.150",
                "licenses": []
            },
            {
                "project_name": "billing",
                "project_version": "2.1.0",
                "project_group": "com.acme",
                "sbom_path": "billing/bom.cdx.json",
                "component_name": "serde",
                "component_version": "1.0.204",
                "component_group": "",
                "component_type": "library",
                "purl": "pkg:cargo/serde@1.0.204",
                "licenses": ["MIT", "Apache-2.0"]
            },
            {
                "project_name": "minimal",
                "project_version": "",
                "project_group": "",
                "sbom_path": "minimal.json",
                "component_name": "",
                "component_version": "",
                "component_group": "",
                "component_type": "",
                "purl": "",
                "licenses": []
            },
            {
                "project_name": "teams/alpha/sbom",
                "project_version": "0.3.0",
                "project_group": "",
                "sbom_path": "teams/alpha/sbom.json",
                "component_name": "lodash",
                "component_version": "4.17.21",
                "component_group": "",
                "component_type": "library",
                "purl": "pkg:npm/lodash@4.17.21",
                "licenses": ["MIT", "Apache License 2.0"]
            },
            {
                "project_name": "teams/alpha/sbom",
                "project_version": "0.3.0",
                "project_group": "",
                "sbom_path": "teams/alpha/sbom.json",
                "component_name": "react",
                "component_version": "18.2.0",
                "component_group": "",
                "component_type": "library",
                "purl": "pkg:npm/react@18.2.0",
                "licenses": ["MIT"]
            }
        ]);

        assert_eq!(written, expected);
    }

    #[test]
    fn every_record_has_the_full_key_set() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");
        index_fixtures(&output);

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&output).expect("read")).expect("json");
        for record in written.as_array().expect("array") {
            let keys: Vec<&str> = record
                .as_object()
                .expect("object")
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(keys.len(), 10, "{record}");
            assert!(record["licenses"].is_array());
        }
    }

    #[test]
    fn records_are_sorted_and_paths_use_forward_slashes() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");
        index_fixtures(&output);

        let records = read_index(&output);
        assert!(records
            .windows(2)
            .all(|pair| pair[0].sort_key() <= pair[1].sort_key()));
        assert!(records.iter().all(|r| !r.sbom_path.contains('\\')));
        assert!(records.iter().all(|r| !Path::new(&r.sbom_path).is_absolute()));
    }

    #[test]
    fn output_is_pretty_printed_without_trailing_newline() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");
        index_fixtures(&output);

        let content = fs::read_to_string(&output).expect("read");
        assert!(content.starts_with("[\n  {\n    \"project_name\": "));
        assert!(content.ends_with("\n]"));
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        index_fixtures(&first);
        index_fixtures(&second);

        assert_eq!(
            fs::read(&first).expect("read first"),
            fs::read(&second).expect("read second")
        );

        let again = index_fixtures(&first);
        assert!(!again.output_changed);
    }

    #[test]
    fn nested_output_directories_are_created() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("data").join("index").join("components.json");
        index_fixtures(&output);
        assert_eq!(read_index(&output).len(), 6);
    }
}

// ============================================================================
// Edge cases
// ============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn empty_root_writes_empty_array() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("sboms");
        fs::create_dir_all(&root).expect("create root");
        let output = dir.path().join("data/components.json");

        let summary = pipeline::run(&IndexConfig::new(&root, &output)).expect("run");
        assert_eq!(summary.files_found, 0);
        assert_eq!(fs::read_to_string(&output).expect("read"), "[]");
    }

    #[test]
    fn all_files_malformed_writes_empty_array() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("sboms");
        fs::create_dir_all(&root).expect("create root");
        fs::write(root.join("a.json"), "not json").expect("write");
        fs::write(root.join("b.json"), "[1, 2, 3]").expect("write");
        let output = dir.path().join("out.json");

        let summary = pipeline::run(&IndexConfig::new(&root, &output)).expect("run");
        assert_eq!(summary.files_skipped, 2);
        assert_eq!(fs::read_to_string(&output).expect("read"), "[]");
    }

    #[test]
    fn missing_root_fails_without_touching_output() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");
        fs::write(&output, "[\"stale\"]").expect("write stale");

        let err = pipeline::run(&IndexConfig::new(dir.path().join("nope"), &output)).unwrap_err();
        assert!(matches!(err, IndexError::MissingRoot { .. }), "{err:?}");
        assert_eq!(fs::read_to_string(&output).expect("read"), "[\"stale\"]");
    }

    #[test]
    fn root_that_is_a_file_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("sboms");
        fs::write(&file, "{}").expect("write");

        let err =
            pipeline::run(&IndexConfig::new(&file, dir.path().join("out.json"))).unwrap_err();
        assert!(matches!(err, IndexError::RootNotDirectory { .. }), "{err:?}");
    }

    #[test]
    fn declared_project_name_wins_over_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path().join("sboms");
        fs::create_dir_all(root.join("deep/dir")).expect("create dirs");
        fs::write(
            root.join("deep/dir/x.json"),
            r#"{"metadata":{"component":{"name":"declared"}},"components":[{"name":"c"}]}"#,
        )
        .expect("write");
        fs::write(
            root.join("deep/dir/y.json"),
            r#"{"metadata":{"component":{"name":""}},"components":[{"name":"c"}]}"#,
        )
        .expect("write");
        let output = dir.path().join("out.json");

        pipeline::run(&IndexConfig::new(&root, &output)).expect("run");
        let names: Vec<String> = read_index(&output)
            .into_iter()
            .map(|r| r.project_name)
            .collect();
        assert_eq!(names, vec!["declared", "deep/dir/y"]);
    }
}

// ============================================================================
// CLI handler
// ============================================================================

mod cli_handler {
    use super::*;
    use sbom_index::AppConfig;

    #[test]
    fn run_index_reports_summary() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let output = dir.path().join("components.json");

        let config = AppConfig::builder()
            .sbom_root(fixture_root())
            .output_file(&output)
            .quiet(true)
            .build();
        let summary = run_index(&config, dir.path()).expect("run");
        assert_eq!(summary.output_file, output);
        assert_eq!(summary.records_written, read_index(&output).len());
    }

    #[test]
    fn run_index_missing_root_is_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = AppConfig::builder()
            .sbom_root("missing")
            .output_file("out.json")
            .build();
        assert!(run_index(&config, dir.path()).is_err());
    }

    #[test]
    fn empty_sbom_root_is_rejected_before_walking() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("node_modules/pkg")).expect("create dirs");
        fs::write(
            dir.path().join("node_modules/pkg/package.json"),
            r#"{"components": [{"name": "stray"}]}"#,
        )
        .expect("write stray json");

        let config = AppConfig::builder()
            .sbom_root("")
            .output_file("components.json")
            .build();
        let err = run_index(&config, dir.path()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<IndexError>(),
            Some(IndexError::Validation(_))
        ));
        assert!(!dir.path().join("components.json").exists());
    }
}
