//! Caller-tunable extraction settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_FLOW_NAME: &str = "Untitled flow";
pub const DEFAULT_ACTIVITY_TYPE: &str = "action";
pub const DEFAULT_MESSAGE_PREVIEW_CHARS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Flow name used when the document carries no top-level `name`,
    /// typically the uploaded file name.
    pub default_name: String,
    /// Discriminator assumed for activities that carry no type at all.
    pub default_type: String,
    /// Visible characters kept in a `Msg=` detail row before truncation.
    pub message_preview_chars: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            default_name: DEFAULT_FLOW_NAME.into(),
            default_type: DEFAULT_ACTIVITY_TYPE.into(),
            message_preview_chars: DEFAULT_MESSAGE_PREVIEW_CHARS,
        }
    }
}

impl ExtractOptions {
    pub fn named(default_name: impl Into<String>) -> Self {
        ExtractOptions {
            default_name: default_name.into(),
            ..Default::default()
        }
    }
}
