use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static ISSUE_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[A-Z]+-[0-9]+$").unwrap());

/// The work item a test run is attached to.
///
/// Identifiers shaped like a Jira issue key (`PROJECT-123`) target an issue;
/// anything else is treated as a folder identifier in the service hierarchy.
/// The discriminant is computed here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetRef {
    Issue { key: String },
    Folder { identifier: String },
}

impl AssetRef {
    pub fn classify(identifier: &str) -> Self {
        if ISSUE_KEY.is_match(identifier) {
            AssetRef::Issue {
                key: identifier.to_string(),
            }
        } else {
            AssetRef::Folder {
                identifier: identifier.to_string(),
            }
        }
    }
}
