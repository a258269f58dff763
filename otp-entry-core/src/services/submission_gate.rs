//! Submission gate
//!
//! Validates completeness before handing the assembled code to the
//! submission collaborator, and maps the response to a navigation target.

use std::sync::Arc;

use crate::error::{CoreResult, OtpError};
use crate::traits::{CodeSubmitter, SessionStore};
use crate::types::{
    AssembledCode, CodeState, Navigation, SubmissionForm, CODE_LENGTH, OTP_SESSION_KEY,
};

/// Marker field sent alongside the digits when none is configured
pub const DEFAULT_MARKER_FIELD: &str = "codeSubmitted";

/// Route used when the response was not redirected and none is configured
pub const DEFAULT_FALLBACK_ROUTE: &str = "/loading";

/// Submission gate
pub struct SubmissionGate {
    submitter: Arc<dyn CodeSubmitter>,
    session_store: Option<Arc<dyn SessionStore>>,
    marker_field: String,
    fallback_route: String,
}

impl SubmissionGate {
    /// Create a gate with the default marker field and fallback route
    #[must_use]
    pub fn new(submitter: Arc<dyn CodeSubmitter>) -> Self {
        Self {
            submitter,
            session_store: None,
            marker_field: DEFAULT_MARKER_FIELD.to_string(),
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
        }
    }

    /// Write the code to `store` before each submission
    #[must_use]
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    #[must_use]
    pub fn with_marker_field(mut self, marker_field: impl Into<String>) -> Self {
        self.marker_field = marker_field.into();
        self
    }

    #[must_use]
    pub fn with_fallback_route(mut self, fallback_route: impl Into<String>) -> Self {
        self.fallback_route = fallback_route.into();
        self
    }

    /// Check that every cell is filled and the code has full length
    pub fn validate(state: &CodeState) -> CoreResult<AssembledCode> {
        let code = state.to_code();
        if !state.is_complete() || code.len() != CODE_LENGTH {
            return Err(OtpError::IncompleteCode {
                filled: state.filled_count(),
                required: CODE_LENGTH,
            });
        }
        Ok(AssembledCode::new(code))
    }

    /// Validate `state` and submit it
    ///
    /// Flow: validate -> write session store (best effort) -> submit -> map response
    ///
    /// Nothing is sent when validation fails. Transport failures are logged and
    /// returned; the caller decides whether to offer a retry.
    pub async fn try_submit(&self, state: &CodeState) -> CoreResult<Navigation> {
        let code = Self::validate(state)?;

        if let Some(store) = &self.session_store {
            if let Err(e) = store.put(OTP_SESSION_KEY, code.as_str()).await {
                log::warn!("Failed to store code in session, continuing: {e}");
            }
        }

        let form = SubmissionForm::from_code(&code, &self.marker_field);
        log::info!("Submitting {CODE_LENGTH}-digit code");

        let response = self.submitter.submit(&form).await.map_err(|e| {
            log::log!(e.log_level(), "Code submission failed: {e}");
            e
        })?;

        let navigation = match response.redirected_to {
            Some(location) => {
                log::info!("Submission redirected to {location}");
                Navigation::Redirect(location)
            }
            None => {
                log::info!("Submission not redirected, using {}", self.fallback_route);
                Navigation::Fallback(self.fallback_route.clone())
            }
        };

        Ok(navigation)
    }
}
