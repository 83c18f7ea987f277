//! Feature catalog extraction from a markdown specification document.
//!
//! The pipeline runs in one forward pass: sections, feature spans, category,
//! steps, and finally invariant checks over the assembled records.

use anyhow::Result;
use std::collections::BTreeMap;

mod classify;
mod compile;
pub(crate) mod model;
mod sections;
mod steps;
mod text;
mod validate;

use classify::classify;
use compile::CompiledPatterns;
pub use model::FeatureRecord;
use sections::{feature_spans, split_sections};
use steps::synthesize_steps;
use text::summarize_description;
use validate::{category_counts, validate_records};

/// Validated records ready for the output writer.
pub struct Catalog {
    pub features: Vec<FeatureRecord>,
    pub counts: BTreeMap<&'static str, usize>,
}

/// Extract unvalidated feature records from `document` in document order.
pub fn extract_features(document: &str, skip_sections: &[String]) -> Result<Vec<FeatureRecord>> {
    let patterns = CompiledPatterns::new()?;
    let mut features = Vec::new();

    for section in split_sections(document, skip_sections) {
        for span in feature_spans(&section, &patterns) {
            let description = summarize_description(span.description, &patterns);
            if description.is_empty() {
                tracing::warn!(
                    id = span.id,
                    title = span.title,
                    "description is empty after cleanup; skipping"
                );
                continue;
            }
            let classification = classify(span.section_title, span.title, span.description);
            tracing::debug!(
                id = span.id,
                title = span.title,
                category = %classification.category,
                rule = classification.rule.unwrap_or("default"),
                "classified feature"
            );
            features.push(FeatureRecord {
                category: classification.category,
                description,
                steps: synthesize_steps(span.content, span.title, &patterns),
                passes: false,
            });
        }
    }

    Ok(features)
}

/// Validate extracted records and attach per-category counts.
pub fn emit_catalog(features: Vec<FeatureRecord>) -> Result<Catalog> {
    validate_records(&features)?;
    let counts = category_counts(&features);
    Ok(Catalog { features, counts })
}

/// Full pipeline: extraction followed by validation.
pub fn build_catalog(document: &str, skip_sections: &[String]) -> Result<Catalog> {
    let features = extract_features(document, skip_sections)?;
    emit_catalog(features)
}
