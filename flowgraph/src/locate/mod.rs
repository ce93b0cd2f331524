//! Schema discovery: find the activities and links collections in a flow
//! export regardless of which historical key layout it uses.
//!
//! Each layout is a named strategy tried in priority order; the first
//! strategy yielding a non-empty collection wins. Activities and links are
//! located independently, and layout hints come from a third, optional
//! sub-tree (see [`layout`]).

pub mod layout;

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ExtractError;
use crate::graph::Position;
use crate::parse::{ActivityRecord, LinkRecord, collection_items, lookup};

// =============================================================================
// STRATEGY TABLES
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub enum ActivitySource {
    /// Array, or id-keyed object whose values are the records.
    Path(&'static [&'static str]),
    /// The document itself is an array of records.
    RootArray,
}

#[derive(Debug, Clone, Copy)]
pub struct ActivityStrategy {
    pub name: &'static str,
    pub source: ActivitySource,
}

#[derive(Debug, Clone, Copy)]
pub enum LinkSource {
    /// Collection at a fixed key-path.
    Path(&'static [&'static str]),
    /// A per-activity field, flattened in activity order.
    Nested(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct LinkStrategy {
    pub name: &'static str,
    pub source: LinkSource,
}

pub const ACTIVITY_STRATEGIES: &[ActivityStrategy] = &[
    ActivityStrategy {
        name: "process.activities",
        source: ActivitySource::Path(&["process", "activities"]),
    },
    ActivityStrategy {
        name: "steps",
        source: ActivitySource::Path(&["steps"]),
    },
    ActivityStrategy {
        name: "nodes",
        source: ActivitySource::Path(&["nodes"]),
    },
    ActivityStrategy {
        name: "graph.nodes",
        source: ActivitySource::Path(&["graph", "nodes"]),
    },
    ActivityStrategy {
        name: "graph.steps",
        source: ActivitySource::Path(&["graph", "steps"]),
    },
    ActivityStrategy {
        name: "flow.steps",
        source: ActivitySource::Path(&["flow", "steps"]),
    },
    ActivityStrategy {
        name: "[]",
        source: ActivitySource::RootArray,
    },
];

pub const LINK_STRATEGIES: &[LinkStrategy] = &[
    LinkStrategy {
        name: "process.links",
        source: LinkSource::Path(&["process", "links"]),
    },
    LinkStrategy {
        name: "activities[].transitions",
        source: LinkSource::Nested("transitions"),
    },
    LinkStrategy {
        name: "activities[].links",
        source: LinkSource::Nested("links"),
    },
    LinkStrategy {
        name: "activities[].connections",
        source: LinkSource::Nested("connections"),
    },
    LinkStrategy {
        name: "links",
        source: LinkSource::Path(&["links"]),
    },
    LinkStrategy {
        name: "edges",
        source: LinkSource::Path(&["edges"]),
    },
    LinkStrategy {
        name: "graph.links",
        source: LinkSource::Path(&["graph", "links"]),
    },
    LinkStrategy {
        name: "graph.edges",
        source: LinkSource::Path(&["graph", "edges"]),
    },
    LinkStrategy {
        name: "flow.links",
        source: LinkSource::Path(&["flow", "links"]),
    },
];

impl ActivityStrategy {
    /// `None` when the shape is absent; `Some(vec![])` when present but empty.
    pub fn find<'a>(&self, doc: &'a Value) -> Option<Vec<ActivityRecord<'a>>> {
        let items = match self.source {
            ActivitySource::Path(path) => lookup(doc, path).and_then(collection_items)?,
            ActivitySource::RootArray => match doc {
                Value::Array(items) => items.iter().collect(),
                _ => return None,
            },
        };
        Some(items.into_iter().map(ActivityRecord::new).collect())
    }
}

impl LinkStrategy {
    pub fn find<'a>(
        &self,
        doc: &'a Value,
        activities: &[ActivityRecord<'a>],
    ) -> Option<Vec<LinkRecord<'a>>> {
        match self.source {
            LinkSource::Path(path) => {
                let items = lookup(doc, path).and_then(collection_items)?;
                Some(items.into_iter().map(LinkRecord::new).collect())
            }
            LinkSource::Nested(field) => {
                let mut links = Vec::new();
                let mut present = false;
                for activity in activities {
                    let Some(items) = activity.raw().get(field).and_then(collection_items) else {
                        continue;
                    };
                    present = true;
                    let owner = activity.id();
                    links.extend(
                        items
                            .into_iter()
                            .map(|raw| LinkRecord::owned_by(raw, owner.clone())),
                    );
                }
                present.then_some(links)
            }
        }
    }
}

// =============================================================================
// LOCATOR
// =============================================================================

/// Raw collections recovered from one document.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub activities: Vec<ActivityRecord<'a>>,
    pub links: Vec<LinkRecord<'a>>,
    pub layout: HashMap<String, Position>,
    pub activity_strategy: &'static str,
    pub link_strategy: Option<&'static str>,
}

pub fn locate(doc: &Value) -> Result<Located<'_>, ExtractError> {
    let (activity_strategy, activities) =
        locate_activities(doc).ok_or(ExtractError::SchemaNotRecognized)?;

    let (link_strategy, links) = match locate_links(doc, &activities) {
        Some((name, links)) => (Some(name), links),
        None => (None, Vec::new()),
    };

    log::debug!(
        "located {} activities via '{}' and {} links via '{}'",
        activities.len(),
        activity_strategy,
        links.len(),
        link_strategy.unwrap_or("-"),
    );

    Ok(Located {
        activities,
        links,
        layout: layout::locate_layout(doc),
        activity_strategy,
        link_strategy,
    })
}

/// First non-empty candidate; otherwise the first candidate that exists but is empty.
fn locate_activities(doc: &Value) -> Option<(&'static str, Vec<ActivityRecord<'_>>)> {
    let mut empty_match = None;
    for strategy in ACTIVITY_STRATEGIES {
        match strategy.find(doc) {
            Some(found) if !found.is_empty() => return Some((strategy.name, found)),
            Some(found) => {
                empty_match.get_or_insert((strategy.name, found));
            }
            None => {}
        }
    }
    empty_match
}

fn locate_links<'a>(
    doc: &'a Value,
    activities: &[ActivityRecord<'a>],
) -> Option<(&'static str, Vec<LinkRecord<'a>>)> {
    LINK_STRATEGIES.iter().find_map(|strategy| {
        strategy
            .find(doc, activities)
            .filter(|links| !links.is_empty())
            .map(|links| (strategy.name, links))
    })
}
