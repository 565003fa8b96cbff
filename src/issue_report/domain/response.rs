//! Payload model for a SonarQube `api/issues/search` response
//!
//! Every display field is optional. An explicit `null` is treated the same
//! as a missing key, and accessors substitute the documented default instead
//! of failing. Display fields accept any JSON scalar; non-string values are
//! shown as their JSON text.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Placeholder shown for any issue attribute the payload omits
pub const UNKNOWN_VALUE: &str = "?";

/// Top-level search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssuesResponse {
    pub issues: Option<Vec<Issue>>,
    pub components: Option<Vec<Component>>,
    pub total: Option<u64>,
}

impl IssuesResponse {
    pub fn issues(&self) -> &[Issue] {
        self.issues.as_deref().unwrap_or(&[])
    }

    pub fn components(&self) -> &[Component] {
        self.components.as_deref().unwrap_or(&[])
    }

    /// Reported total, falling back to the number of issues in this page
    pub fn total(&self) -> u64 {
        self.total.unwrap_or(self.issues().len() as u64)
    }

    /// Splits the response into its owned issues and components
    pub fn into_parts(self) -> (Vec<Issue>, Vec<Component>, u64) {
        let total = self.total();
        (
            self.issues.unwrap_or_default(),
            self.components.unwrap_or_default(),
            total,
        )
    }
}

/// A single static-analysis finding
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    pub component: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub line: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub rule: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub severity: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "display_text")]
    pub issue_type: Option<String>,
    /// Only the first element of `impacts` is decoded; the rest are skipped unread.
    #[serde(rename = "impacts", default, deserialize_with = "first_impact")]
    pub primary_impact: Option<Impact>,
}

impl Issue {
    /// Key into the component table; empty when the issue names no component
    pub fn component_key(&self) -> &str {
        self.component.as_deref().unwrap_or("")
    }

    pub fn line_display(&self) -> &str {
        self.line.as_deref().unwrap_or(UNKNOWN_VALUE)
    }

    pub fn rule(&self) -> &str {
        self.rule.as_deref().unwrap_or(UNKNOWN_VALUE)
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(UNKNOWN_VALUE)
    }

    /// First impact, if the issue carries any
    pub fn primary_impact(&self) -> Option<&Impact> {
        self.primary_impact.as_ref()
    }

    /// Impact severity, or the legacy issue severity when there are no impacts
    pub fn impact_severity(&self) -> &str {
        match self.primary_impact() {
            Some(impact) => impact.severity.as_deref().unwrap_or(UNKNOWN_VALUE),
            None => self.severity.as_deref().unwrap_or(UNKNOWN_VALUE),
        }
    }

    /// Software quality, or the legacy issue type when there are no impacts
    pub fn software_quality(&self) -> &str {
        match self.primary_impact() {
            Some(impact) => impact.software_quality.as_deref().unwrap_or(UNKNOWN_VALUE),
            None => self.issue_type.as_deref().unwrap_or(UNKNOWN_VALUE),
        }
    }
}

/// Clean-code impact attached to an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Impact {
    #[serde(default, deserialize_with = "display_text")]
    pub severity: Option<String>,
    #[serde(rename = "softwareQuality", default, deserialize_with = "display_text")]
    pub software_quality: Option<String>,
}

/// File or module metadata referenced by issues
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Component {
    pub key: String,
    pub path: Option<String>,
    #[serde(rename = "longName")]
    pub long_name: Option<String>,
}

/// Reads any JSON value as display text: strings verbatim, `null` as absent,
/// everything else as compact JSON.
fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Decodes the first element of an `impacts` array. An empty array yields
/// no impact, matching an absent key.
fn first_impact<'de, D>(deserializer: D) -> Result<Option<Impact>, D::Error>
where
    D: Deserializer<'de>,
{
    let impacts = Option::<Vec<Value>>::deserialize(deserializer)?;
    match impacts.and_then(|values| values.into_iter().next()) {
        Some(first) => Impact::deserialize(first)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
