//! Keyword rule table that assigns each feature a category.
//!
//! Rules are evaluated top to bottom and the first hit wins. Every keyword is a
//! lowercase substring matched against the lowercased field, so `pin` also
//! fires on `shipping`.
use super::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Section,
    Subsection,
    Description,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum Signal {
    AllOf(&'static [&'static str]),
    AnyOf(&'static [&'static str]),
    AnyOfUnless {
        any: &'static [&'static str],
        unless: &'static [&'static str],
    },
}

impl Signal {
    fn is_match(&self, text: &str) -> bool {
        let contains = |keyword: &&str| text.contains(*keyword);
        match self {
            Signal::AllOf(keywords) => keywords.iter().all(contains),
            Signal::AnyOf(keywords) => keywords.iter().any(contains),
            Signal::AnyOfUnless { any, unless } => {
                any.iter().any(contains) && !unless.iter().any(contains)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    pub(crate) name: &'static str,
    pub(crate) category: Category,
    field: Field,
    signal: Signal,
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "integration:section",
        category: Category::Integration,
        field: Field::Section,
        signal: Signal::AllOf(&["integration", "api"]),
    },
    // Workspace and SSO administration reads like an integration but belongs
    // with the security rules below.
    Rule {
        name: "integration:subsection",
        category: Category::Integration,
        field: Field::Subsection,
        signal: Signal::AnyOfUnless {
            any: &["api", "webhook", "zapier", "integration"],
            unless: &["workspace", "sso", "owner", "admin"],
        },
    },
    Rule {
        name: "integration:description",
        category: Category::Integration,
        field: Field::Description,
        signal: Signal::AnyOf(&["api", "webhook", "third-party", "programmatic access"]),
    },
    Rule {
        name: "security:section",
        category: Category::Security,
        field: Field::Section,
        signal: Signal::AnyOf(&["role", "permission", "security", "authentication"]),
    },
    Rule {
        name: "security:subsection",
        category: Category::Security,
        field: Field::Subsection,
        signal: Signal::AnyOf(&[
            "role",
            "permission",
            "auth",
            "pin",
            "access control",
            "security",
            "owner",
            "admin",
            "manager",
            "user group",
            "invite",
            "deactivate",
        ]),
    },
    Rule {
        name: "security:description",
        category: Category::Security,
        field: Field::Description,
        signal: Signal::AnyOf(&[
            "authentication",
            "authorization",
            "permission",
            "access",
            "role",
            "security",
            "pin",
            "password",
        ]),
    },
    Rule {
        name: "performance:subsection",
        category: Category::Performance,
        field: Field::Subsection,
        signal: Signal::AnyOf(&["offline", "sync", "cache", "performance"]),
    },
    Rule {
        name: "performance:description",
        category: Category::Performance,
        field: Field::Description,
        signal: Signal::AnyOf(&["offline", "sync", "cache", "performance", "optimization"]),
    },
    Rule {
        name: "ui:subsection",
        category: Category::Ui,
        field: Field::Subsection,
        signal: Signal::AnyOf(&[
            "view",
            "dashboard",
            "interface",
            "layout",
            "calendar",
            "timesheet",
            "customization",
            "design",
        ]),
    },
    Rule {
        name: "ui:description",
        category: Category::Ui,
        field: Field::Description,
        signal: Signal::AnyOf(&[
            "visual",
            "display",
            "view",
            "interface",
            "layout",
            "dashboard",
            "widget",
        ]),
    },
];

/// Outcome of classification; `rule` is `None` when the default applied.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Classification {
    pub(crate) category: Category,
    pub(crate) rule: Option<&'static str>,
}

struct LoweredText {
    section: String,
    subsection: String,
    description: String,
}

impl LoweredText {
    fn field(&self, field: Field) -> &str {
        match field {
            Field::Section => &self.section,
            Field::Subsection => &self.subsection,
            Field::Description => &self.description,
        }
    }
}

pub(crate) fn classify(section: &str, subsection: &str, description: &str) -> Classification {
    classify_with(RULES, section, subsection, description)
}

pub(crate) fn classify_with(
    rules: &[Rule],
    section: &str,
    subsection: &str,
    description: &str,
) -> Classification {
    let text = LoweredText {
        section: section.to_lowercase(),
        subsection: subsection.to_lowercase(),
        description: description.to_lowercase(),
    };

    rules
        .iter()
        .find(|rule| rule.signal.is_match(text.field(rule.field)))
        .map(|rule| Classification {
            category: rule.category,
            rule: Some(rule.name),
        })
        .unwrap_or(Classification {
            category: Category::Functional,
            rule: None,
        })
}
