use super::model::FeatureRecord;
use super::steps::{MAX_STEPS, MIN_STEPS};
use std::collections::BTreeMap;
use std::fmt;

/// Structural invariant broken by an assembled record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyDescription,
    StepCount(usize),
    EmptyStep(usize),
    AlreadyPassing,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyDescription => f.write_str("description is empty"),
            Violation::StepCount(count) => write!(
                f,
                "has {count} steps, expected between {MIN_STEPS} and {MAX_STEPS}"
            ),
            Violation::EmptyStep(step) => write!(f, "step {step} is empty"),
            Violation::AlreadyPassing => f.write_str("passes must be false"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError {
    pub index: usize,
    pub violation: Violation,
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature {} {}", self.index, self.violation)
    }
}

impl std::error::Error for InvariantError {}

/// Check every record and stop at the first broken invariant.
///
/// Category membership is carried by the `Category` type itself.
pub fn validate_records(records: &[FeatureRecord]) -> Result<(), InvariantError> {
    for (index, record) in records.iter().enumerate() {
        if let Some(violation) = record_violation(record) {
            return Err(InvariantError { index, violation });
        }
    }
    Ok(())
}

fn record_violation(record: &FeatureRecord) -> Option<Violation> {
    if record.description.trim().is_empty() {
        return Some(Violation::EmptyDescription);
    }
    if !(MIN_STEPS..=MAX_STEPS).contains(&record.steps.len()) {
        return Some(Violation::StepCount(record.steps.len()));
    }
    if let Some(step) = record.steps.iter().position(|step| step.trim().is_empty()) {
        return Some(Violation::EmptyStep(step));
    }
    if record.passes {
        return Some(Violation::AlreadyPassing);
    }
    None
}

/// Feature counts keyed by category name, in alphabetical order.
pub fn category_counts(records: &[FeatureRecord]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }
    counts
}
