//! Shared helpers for driving the `featcat` binary in integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the bundled specification fixture.
pub fn fixture_spec() -> PathBuf {
    manifest_dir().join("tests/data/feature_spec.md")
}

/// Run `featcat` with `args` from `cwd` and capture its output.
pub fn run_featcat(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_featcat"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run featcat")
}

pub fn read_catalog(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("read catalog");
    serde_json::from_str(&content).expect("parse catalog JSON")
}

/// Assert the structural invariants every emitted record must satisfy.
pub fn assert_catalog_invariants(catalog: &serde_json::Value) {
    let features = catalog.as_array().expect("catalog array");
    for (index, feature) in features.iter().enumerate() {
        let object = feature.as_object().expect("feature object");
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["category", "description", "passes", "steps"],
            "feature {index} keys"
        );

        let category = feature["category"].as_str().expect("category string");
        assert!(
            ["functional", "ui", "integration", "security", "performance"].contains(&category),
            "feature {index} has unknown category {category}"
        );

        let description = feature["description"].as_str().expect("description");
        assert!(!description.trim().is_empty(), "feature {index} description");

        let steps = feature["steps"].as_array().expect("steps array");
        assert!(
            (3..=7).contains(&steps.len()),
            "feature {index} has {} steps",
            steps.len()
        );
        for step in steps {
            let step = step.as_str().expect("step string");
            assert!(!step.trim().is_empty(), "feature {index} has an empty step");
        }

        assert_eq!(feature["passes"], serde_json::Value::Bool(false));
    }
}
