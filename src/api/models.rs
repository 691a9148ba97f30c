// src/api/models.rs
// =============================================================================
// Records exchanged with the directory backend.
//
// The backend speaks camelCase JSON. We are lenient when reading it (missing
// or null fields get defaults, a non-array `category` counts as no categories)
// because a single malformed entry should not break the whole listing.
// =============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One directory entry (an MCP server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    #[serde(default, deserialize_with = "lenient_categories")]
    pub category: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_open_source: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Agent {
    /// The link the README is looked up from: `github` when set, else `website`
    pub fn source_reference(&self) -> &str {
        match self.github.as_deref() {
            Some(github) if !github.is_empty() => github,
            _ => &self.website,
        }
    }

    /// The primary outbound link: `website`, else `github`
    pub fn website_link(&self) -> Option<&str> {
        non_empty(Some(self.website.as_str())).or_else(|| non_empty(self.github.as_deref()))
    }

    /// Twitter handle without a leading '@'
    pub fn twitter_handle(&self) -> Option<&str> {
        non_empty(self.twitter.as_deref().map(|h| h.trim_start_matches('@')))
    }
}

/// Either an image URL or a generated initials badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    Url(String),
    Initials(InitialsLogo),
}

impl Logo {
    // Broken URLs leak into the data as "undefined" / "null" strings
    pub fn is_usable(&self) -> bool {
        match self {
            Logo::Url(url) => {
                !url.trim().is_empty() && !url.contains("undefined") && !url.contains("null")
            }
            Logo::Initials(_) => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialsLogo {
    #[serde(rename = "type", default = "initials_kind")]
    pub kind: String,
    pub initials: String,
    pub color: String,
}

fn initials_kind() -> String {
    "initials".to_string()
}

/// Body of `POST /api/submit-agent`.
///
/// `category` and `features` stay comma-separated strings; the backend
/// splits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    pub website: String,
    pub description: String,
    pub git_repo: String,
    pub logo: String,
    pub category: String,
    pub pricing: String,
    pub features: String,
}

/// Whatever the backend says after accepting a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub message: Option<String>,
}

// Error payload of the backend: { "message": "..." }
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// Some backends hand out numeric ids
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    })
}
