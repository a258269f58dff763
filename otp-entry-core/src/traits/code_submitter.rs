//! Submission collaborator abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{SubmissionForm, SubmitResponse};

/// Code submission Trait
///
/// Platform implementations:
/// - TUI: `HttpCodeSubmitter` (reqwest, multipart form POST)
/// - Tests: `MockSubmitter`
#[async_trait]
pub trait CodeSubmitter: Send + Sync {
    /// Deliver the assembled code
    ///
    /// # Arguments
    /// * `form` - one field per cell plus the submitted marker
    ///
    /// # Returns
    /// * `Ok(response)` - request completed; `redirected_to` set when the server redirected
    /// * `Err(OtpError::Transport)` - request could not be completed
    async fn submit(&self, form: &SubmissionForm) -> CoreResult<SubmitResponse>;
}
