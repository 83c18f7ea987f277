use super::compile::CompiledPatterns;

const MAX_SENTENCES: usize = 2;

/// Trim and drop bold and inline-code markers.
pub(crate) fn clean_markup(text: &str) -> String {
    text.trim().replace("**", "").replace('`', "")
}

/// Clean a raw description and cap it at two sentences.
pub(crate) fn summarize_description(raw: &str, patterns: &CompiledPatterns) -> String {
    let cleaned = clean_markup(raw);
    let sentences: Vec<&str> = patterns.sentence_break.split(&cleaned).collect();
    if sentences.len() <= MAX_SENTENCES {
        return cleaned;
    }
    format!("{}.", sentences[..MAX_SENTENCES].join(". "))
}
