//! Ordered type-classification table. First matching rule wins.
//!
//! Adding a new activity type means adding a row here; `classify` never
//! needs to change.

use crate::graph::{DetailRow, NodeCategory};
use crate::options::ExtractOptions;
use crate::parse::ActivityRecord;

use super::details;

#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Case-sensitive equality with the discriminator.
    Exact(&'static str),
    /// Case-insensitive substring of the discriminator.
    Contains(&'static str),
}

impl Pattern {
    pub fn matches(&self, type_name: &str) -> bool {
        match self {
            Pattern::Exact(expected) => type_name == *expected,
            Pattern::Contains(needle) => type_name.to_ascii_lowercase().contains(needle),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Subtitle {
    /// The category's default subtitle.
    Category,
    /// Computed from the raw discriminator.
    Derived(fn(&str) -> &'static str),
}

pub type DetailExtractor = fn(&ActivityRecord<'_>, &ExtractOptions) -> Vec<DetailRow>;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub patterns: &'static [Pattern],
    pub category: NodeCategory,
    pub subtitle: Subtitle,
    pub details: DetailExtractor,
}

impl Rule {
    pub fn matches(&self, type_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(type_name))
    }

    pub fn subtitle_for(&self, type_name: &str) -> String {
        match self.subtitle {
            Subtitle::Category => self.category.default_subtitle().to_string(),
            Subtitle::Derived(derive) => derive(type_name).to_string(),
        }
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        patterns: &[
            Pattern::Exact("start"),
            Pattern::Exact("event"),
            Pattern::Exact("NewPhoneContact"),
        ],
        category: NodeCategory::Start,
        subtitle: Subtitle::Category,
        details: details::event,
    },
    Rule {
        patterns: &[Pattern::Exact("disconnect-contact")],
        category: NodeCategory::End,
        subtitle: Subtitle::Category,
        details: details::none,
    },
    Rule {
        patterns: &[Pattern::Exact("set-variable"), Pattern::Exact("parse-activity")],
        category: NodeCategory::SetVariable,
        subtitle: Subtitle::Category,
        details: details::first_update,
    },
    Rule {
        patterns: &[
            Pattern::Exact("ivr-menu"),
            Pattern::Exact("case-statement"),
            Pattern::Exact("enum-gateway"),
            Pattern::Exact("condition-activity"),
        ],
        category: NodeCategory::Decision,
        subtitle: Subtitle::Category,
        details: details::branching,
    },
    Rule {
        patterns: &[
            Pattern::Exact("play-message"),
            Pattern::Exact("queue-contact"),
            Pattern::Contains("feedback"),
        ],
        category: NodeCategory::PlayOrQueueAction,
        subtitle: Subtitle::Derived(action_subtitle),
        details: details::message,
    },
];

fn action_subtitle(type_name: &str) -> &'static str {
    let lowered = type_name.to_ascii_lowercase();
    if lowered.contains("feedback") {
        "Survey"
    } else if lowered.contains("queue") {
        "Queue"
    } else {
        NodeCategory::PlayOrQueueAction.default_subtitle()
    }
}

pub fn find_rule(type_name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matches(type_name))
}
