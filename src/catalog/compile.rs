use anyhow::{anyhow, Result};
use regex::{Regex, RegexBuilder};

const SUBSECTION_HEADER: &str =
    r"(?m)^###[ \t]+([0-9.]+)[ \t]+([^\n]+?)[ \t]*\n\*\*Description:\*\*[ \t]*";
const USER_ACTIONS_HEADING: &str = r"####\s*User Actions[ \t]*\n";
const UI_STATES_HEADING: &str = r"####\s*UI States[ \t]*\n";
const FEEDBACK_HEADING: &str = r"####\s*Feedback Messages[ \t]*\n";
const BULLET_LINE: &str = r"(?m)^[ \t]*[-*][ \t]+(.+)$";
const STATE_BULLET_LINE: &str = r"(?m)^[ \t]*[-*][ \t]+\*\*([^:*]+)\*\*[: \t]*(.+)$";
const QUOTED_BULLET_LINE: &str = r#"(?m)^[ \t]*[-*][ \t]+"([^"]+)""#;
const SENTENCE_BREAK: &str = r"[.!?]\s+";

/// Regexes used across one extraction run, compiled up front.
pub(crate) struct CompiledPatterns {
    pub(crate) subsection_header: Regex,
    pub(crate) user_actions_heading: Regex,
    pub(crate) ui_states_heading: Regex,
    pub(crate) feedback_heading: Regex,
    pub(crate) bullet_line: Regex,
    pub(crate) state_bullet_line: Regex,
    pub(crate) quoted_bullet_line: Regex,
    pub(crate) sentence_break: Regex,
}

impl CompiledPatterns {
    pub(crate) fn new() -> Result<Self> {
        Ok(Self {
            subsection_header: compile_regex(SUBSECTION_HEADER, true)?,
            user_actions_heading: compile_regex(USER_ACTIONS_HEADING, false)?,
            ui_states_heading: compile_regex(UI_STATES_HEADING, false)?,
            feedback_heading: compile_regex(FEEDBACK_HEADING, false)?,
            bullet_line: compile_regex(BULLET_LINE, true)?,
            state_bullet_line: compile_regex(STATE_BULLET_LINE, true)?,
            quoted_bullet_line: compile_regex(QUOTED_BULLET_LINE, true)?,
            sentence_break: compile_regex(SENTENCE_BREAK, true)?,
        })
    }
}

fn compile_regex(pattern: &str, case_sensitive: bool) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|err| anyhow!("invalid regex: {pattern}: {err}"))?;
    Ok(regex)
}
