use super::compile::CompiledPatterns;
use super::model::{FeatureSpan, Section};
use crate::util::{find_first_boundary, find_nearest_boundary};

const SECTION_HEADING: &str = "# ";
const SECTION_BREAK: &str = "\n# ";
const DESCRIPTION_BREAKS: &[&str] = &["\n####", "\n###", "\n##"];
const SPAN_BREAKS: &[&str] = &["\n### ", "\n## "];

/// Split a document into its top-level `# ` sections, dropping front matter
/// and any section whose title is a known meta-label.
pub(crate) fn split_sections<'a>(document: &'a str, skip_titles: &[String]) -> Vec<Section<'a>> {
    let mut sections = Vec::new();
    let mut heading = if document.starts_with(SECTION_HEADING) {
        Some(0)
    } else {
        document.find(SECTION_BREAK).map(|pos| pos + 1)
    };

    while let Some(start) = heading {
        let content_start = start + SECTION_HEADING.len();
        let end = find_first_boundary(document, content_start, &[SECTION_BREAK]);
        let block = &document[content_start..end];
        let (title, body) = block.split_once('\n').unwrap_or((block, ""));
        let title = title.trim();

        if is_skipped_title(title, skip_titles) {
            tracing::debug!(title, "skipping meta section");
        } else {
            sections.push(Section { title, body });
        }

        heading = (end < document.len()).then_some(end + 1);
    }

    sections
}

fn is_skipped_title(title: &str, skip_titles: &[String]) -> bool {
    let normalized = title.trim().to_lowercase();
    skip_titles
        .iter()
        .any(|skip| skip.trim().to_lowercase() == normalized)
}

/// Collect the numbered feature subsections of one section in document order.
pub(crate) fn feature_spans<'a>(
    section: &Section<'a>,
    patterns: &CompiledPatterns,
) -> Vec<FeatureSpan<'a>> {
    let body = section.body;
    let mut spans = Vec::new();

    for caps in patterns.subsection_header.captures_iter(body) {
        let (Some(header), Some(id), Some(title)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let description_end = find_nearest_boundary(body, header.end(), DESCRIPTION_BREAKS);
        let description = body[header.end()..description_end].trim();
        if description.is_empty() {
            tracing::warn!(
                section = section.title,
                id = id.as_str(),
                "subsection has an empty description; skipping"
            );
            continue;
        }
        let span_end = find_first_boundary(body, description_end, SPAN_BREAKS);

        spans.push(FeatureSpan {
            section_title: section.title,
            id: id.as_str(),
            title: title.as_str().trim(),
            description,
            content: &body[header.start()..span_end],
        });
    }

    if spans.is_empty() {
        tracing::debug!(section = section.title, "section has no feature subsections");
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip_defaults() -> Vec<String> {
        vec![
            "clockify feature specification".to_string(),
            "table of contents".to_string(),
        ]
    }

    #[test]
    fn splits_top_level_sections_and_drops_front_matter() {
        let doc = "preamble\n# One\nbody one\n## Sub\n# Two\nbody two";
        let sections = split_sections(doc, &[]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "One");
        assert_eq!(sections[0].body, "body one\n## Sub");
        assert_eq!(sections[1].title, "Two");
        assert_eq!(sections[1].body, "body two");
    }

    #[test]
    fn heading_on_first_line_opens_a_section() {
        let sections = split_sections("# Only\ntext\n", &[]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Only");
    }

    #[test]
    fn skips_meta_sections_in_any_case() {
        let doc = "# CLOCKIFY Feature Specification\nbanner\n#  table OF contents \n### 1.1 A\n**Description:** B.\n# Real\n";
        let sections = split_sections(doc, &skip_defaults());
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Real"]);
    }

    #[test]
    fn extracts_spans_with_descriptions_and_extent() {
        let patterns = CompiledPatterns::new().expect("compile patterns");
        let body = "intro\n### 1.1 First Feature\n**Description:** Does one thing.\n#### User Actions\n- Click go\n### 1.2 Second\n**Description:** Does another.\n## Notes\ntrailing";
        let section = Section {
            title: "Core",
            body,
        };
        let spans = feature_spans(&section, &patterns);
        assert_eq!(spans.len(), 2);

        assert_eq!(spans[0].id, "1.1");
        assert_eq!(spans[0].title, "First Feature");
        assert_eq!(spans[0].description, "Does one thing.");
        assert!(spans[0].content.starts_with("### 1.1 First Feature"));
        assert!(spans[0].content.ends_with("- Click go"));

        assert_eq!(spans[1].id, "1.2");
        assert_eq!(spans[1].description, "Does another.");
        assert!(spans[1].content.ends_with("Does another."));
        assert!(!spans[1].content.contains("Notes"));
    }

    #[test]
    fn span_runs_to_section_end_without_boundaries() {
        let patterns = CompiledPatterns::new().expect("compile patterns");
        let section = Section {
            title: "Core",
            body: "### 3 Export\n**Description:** Export data.\n#### Feedback Messages\n- \"Done\"\n",
        };
        let spans = feature_spans(&section, &patterns);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, section.body);
    }

    #[test]
    fn keeps_duplicate_ids_and_multiline_descriptions() {
        let patterns = CompiledPatterns::new().expect("compile patterns");
        let section = Section {
            title: "Core",
            body: "### 1.1 A\n**Description:** Line one\ncontinues here.\n### 1.1 B\n**Description:** Other.",
        };
        let spans = feature_spans(&section, &patterns);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].description, "Line one\ncontinues here.");
        assert_eq!(spans[1].title, "B");
    }

    #[test]
    fn section_without_subsections_yields_nothing() {
        let patterns = CompiledPatterns::new().expect("compile patterns");
        let section = Section {
            title: "Overview",
            body: "Just prose.\n### Not numbered\nStill prose.",
        };
        assert!(feature_spans(&section, &patterns).is_empty());
    }

    #[test]
    fn empty_description_is_not_a_feature() {
        let patterns = CompiledPatterns::new().expect("compile patterns");
        let section = Section {
            title: "Core",
            body: "### 1.1 Empty\n**Description:**\n### 1.2 Full\n**Description:** Has text.",
        };
        let spans = feature_spans(&section, &patterns);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].id, "1.2");
    }
}
