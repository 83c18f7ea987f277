use super::compile::CompiledPatterns;
use super::text::clean_markup;
use crate::util::{find_nearest_boundary, truncate_chars};
use regex::Regex;

pub(crate) const MIN_STEPS: usize = 3;
pub(crate) const MAX_STEPS: usize = 7;
const MAX_USER_ACTIONS: usize = 3;
const MAX_UI_STATES: usize = 2;
const DETAIL_MAX_CHARS: usize = 80;
const BLOCK_BREAKS: &[&str] = &["####", "\n###"];
const ACTION_VERBS: &[&str] = &[
    "Navigate", "Click", "Select", "Enter", "View", "Check", "Verify",
];

type Extractor = fn(&str, &CompiledPatterns) -> Vec<String>;

/// Extractors in the order their steps appear in a feature.
const EXTRACTORS: [Extractor; 3] = [user_action_steps, ui_state_steps, feedback_steps];

/// Build the verification steps for one feature span.
pub(crate) fn synthesize_steps(
    content: &str,
    feature_name: &str,
    patterns: &CompiledPatterns,
) -> Vec<String> {
    let candidates = EXTRACTORS
        .iter()
        .flat_map(|extract| extract(content, patterns))
        .collect();
    normalize_steps(candidates, feature_name)
}

/// Enforce the step floor and ceiling with generic fallback steps.
pub(crate) fn normalize_steps(mut steps: Vec<String>, feature_name: &str) -> Vec<String> {
    if steps.len() < MIN_STEPS {
        steps.insert(0, format!("Navigate to {feature_name} feature"));
        if steps.len() <= MIN_STEPS {
            steps.push(format!("Test {feature_name} functionality"));
        }
    }
    steps.truncate(MAX_STEPS);
    while steps.len() < MIN_STEPS {
        steps.push(format!("Verify {feature_name} works as expected"));
    }
    steps
}

/// Body of the `#### <heading>` block, up to the next block or subsection.
fn block_body<'a>(content: &'a str, heading: &Regex) -> Option<&'a str> {
    let found = heading.find(content)?;
    let end = find_nearest_boundary(content, found.end(), BLOCK_BREAKS);
    Some(&content[found.end()..end])
}

fn user_action_steps(content: &str, patterns: &CompiledPatterns) -> Vec<String> {
    let Some(body) = block_body(content, &patterns.user_actions_heading) else {
        return Vec::new();
    };
    patterns
        .bullet_line
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .take(MAX_USER_ACTIONS)
        .map(|item| {
            let action = clean_markup(item.as_str());
            if ACTION_VERBS.iter().any(|verb| action.starts_with(verb)) {
                action
            } else {
                format!("Execute action: {action}")
            }
        })
        .collect()
}

fn ui_state_steps(content: &str, patterns: &CompiledPatterns) -> Vec<String> {
    let Some(body) = block_body(content, &patterns.ui_states_heading) else {
        return Vec::new();
    };
    patterns
        .state_bullet_line
        .captures_iter(body)
        .filter_map(|caps| Some((caps.get(1)?, caps.get(2)?)))
        .take(MAX_UI_STATES)
        .map(|(state, detail)| {
            let state = clean_markup(state.as_str());
            let detail = clean_markup(detail.as_str());
            format!(
                "Verify {state} displays: {}",
                truncate_chars(&detail, DETAIL_MAX_CHARS)
            )
        })
        .collect()
}

fn feedback_steps(content: &str, patterns: &CompiledPatterns) -> Vec<String> {
    let Some(body) = block_body(content, &patterns.feedback_heading) else {
        return Vec::new();
    };
    patterns
        .quoted_bullet_line
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .take(1)
        .map(|message| {
            format!(
                "Confirm message appears: \"{}\"",
                truncate_chars(message.as_str(), DETAIL_MAX_CHARS)
            )
        })
        .collect()
}
