//! Submission types

use serde::{Deserialize, Serialize};

use super::code::CODE_LENGTH;

/// Session store key the assembled code is written under before submission
pub const OTP_SESSION_KEY: &str = "OTP";

/// A validated, complete code of exactly [`CODE_LENGTH`] digits.
///
/// Only constructed by `SubmissionGate::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledCode(String);

impl AssembledCode {
    pub(crate) fn new(code: String) -> Self {
        debug_assert_eq!(code.len(), CODE_LENGTH);
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Form payload handed to the submission collaborator.
///
/// One field per cell keyed by its 1-based position (`"1"`..`"6"`), followed by
/// a marker field with value `"true"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionForm {
    fields: Vec<(String, String)>,
}

impl SubmissionForm {
    /// Build the payload for `code` with the given marker field name
    pub fn from_code(code: &AssembledCode, marker_field: &str) -> Self {
        let mut fields: Vec<(String, String)> = code
            .as_str()
            .chars()
            .enumerate()
            .map(|(i, ch)| ((i + 1).to_string(), ch.to_string()))
            .collect();
        fields.push((marker_field.to_string(), "true".to_string()));
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the field named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// What the submission collaborator observed about the response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Final location when the response was redirected
    pub redirected_to: Option<String>,
}

impl SubmitResponse {
    pub fn redirected(location: impl Into<String>) -> Self {
        Self {
            redirected_to: Some(location.into()),
        }
    }

    pub fn not_redirected() -> Self {
        Self::default()
    }
}

/// Where the host should go after a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location")]
pub enum Navigation {
    /// The response was redirected to this location
    Redirect(String),
    /// Fixed fallback route used when no redirect happened
    Fallback(String),
}

impl Navigation {
    pub fn location(&self) -> &str {
        match self {
            Self::Redirect(loc) | Self::Fallback(loc) => loc,
        }
    }
}
