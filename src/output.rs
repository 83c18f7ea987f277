//! Catalog JSON output.
//!
//! The file is staged as `.{name}.tmp` next to the destination and renamed
//! into place so a failed run never leaves a partial catalog behind.
use crate::catalog::FeatureRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize records as a JSON array with two-space indentation.
pub fn render_catalog_json(features: &[FeatureRecord]) -> Result<String> {
    serde_json::to_string_pretty(features).context("serialize feature catalog")
}

pub fn write_catalog(path: &Path, features: &[FeatureRecord]) -> Result<()> {
    let text = render_catalog_json(features)?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("features.json");
    let tmp_path = parent.join(format!(".{file_name}.tmp"));
    let published = fs::write(&tmp_path, text.as_bytes())
        .with_context(|| format!("write staged output for {}", path.display()))
        .and_then(|()| {
            fs::rename(&tmp_path, path).with_context(|| format!("publish {}", path.display()))
        });
    if published.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Category;

    fn sample() -> Vec<FeatureRecord> {
        vec![FeatureRecord {
            category: Category::Ui,
            description: "Zeigt die Übersicht.".to_string(),
            steps: vec![
                "Navigate to Übersicht feature".to_string(),
                "Test Übersicht functionality".to_string(),
                "Verify Übersicht works as expected".to_string(),
            ],
            passes: false,
        }]
    }

    #[test]
    fn renders_two_space_indent_and_raw_unicode() {
        let json = render_catalog_json(&sample()).expect("render");
        assert!(json.starts_with("[\n  {\n    \"category\": \"ui\",\n"));
        assert!(json.contains("Übersicht"));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\"passes\": false"));
    }

    #[test]
    fn keys_appear_in_record_order() {
        let json = render_catalog_json(&sample()).expect("render");
        let category = json.find("\"category\"").expect("category");
        let description = json.find("\"description\"").expect("description");
        let steps = json.find("\"steps\"").expect("steps");
        let passes = json.find("\"passes\"").expect("passes");
        assert!(category < description && description < steps && steps < passes);
    }

    #[test]
    fn write_catalog_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("features.json");
        std::fs::write(&path, "stale").expect("seed file");
        write_catalog(&path, &sample()).expect("write");
        let written = std::fs::read_to_string(&path).expect("read back");
        let parsed: Vec<FeatureRecord> = serde_json::from_str(&written).expect("parse");
        assert_eq!(parsed, sample());
        assert_eq!(written, render_catalog_json(&sample()).expect("render"));
        assert!(!dir.path().join(".features.json.tmp").exists());
    }

    #[test]
    fn write_catalog_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out/nested/features.json");
        write_catalog(&path, &sample()).expect("write");
        assert!(path.is_file());
    }

    #[cfg(unix)]
    #[test]
    fn written_catalog_follows_umask_like_plain_writes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = dir.path().join("features.json");
        let plain = dir.path().join("plain.json");
        write_catalog(&catalog, &[]).expect("write catalog");
        std::fs::write(&plain, "[]").expect("write plain");

        let mode = |path: &Path| {
            std::fs::metadata(path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777
        };
        assert_eq!(mode(&catalog), mode(&plain));
    }
}
