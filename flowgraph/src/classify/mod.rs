//! Activity classification: raw type discriminator → category, subtitle, detail rows.
//!
//! Total over all inputs. Unknown or missing types fall through to
//! [`NodeCategory::Generic`] with the raw type as subtitle.

pub mod details;
pub mod table;

use crate::graph::{DetailRow, NodeCategory};
use crate::options::ExtractOptions;
use crate::parse::ActivityRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The discriminator the rules were matched against.
    pub node_type: String,
    pub category: NodeCategory,
    pub subtitle: String,
    pub detail_rows: Vec<DetailRow>,
}

pub fn classify(act: &ActivityRecord<'_>, opts: &ExtractOptions) -> Classification {
    let type_name = act.type_name().unwrap_or(opts.default_type.as_str());

    match table::find_rule(type_name) {
        Some(rule) => {
            log::trace!("activity type '{}' classified as {}", type_name, rule.category);
            Classification {
                node_type: type_name.to_string(),
                category: rule.category,
                subtitle: rule.subtitle_for(type_name),
                detail_rows: (rule.details)(act, opts),
            }
        }
        None => {
            log::trace!("activity type '{}' has no rule, using generic", type_name);
            Classification {
                node_type: type_name.to_string(),
                category: NodeCategory::Generic,
                subtitle: type_name.to_string(),
                detail_rows: Vec::new(),
            }
        }
    }
}
