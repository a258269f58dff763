//! OTP Entry Core Library
//!
//! Provides the platform-independent controller behind a multi-cell
//! one-time-passcode input, including:
//! - Code state (`CodeState`, fixed number of single-digit cells)
//! - Digit distribution for typed, pasted and autofilled input
//! - Focus navigation state machine (`navigate`, `OtpController`)
//! - Submission gate (completeness check, session store, submitter hand-off)
//!
//! Rendering, text lookup, transport and storage are abstracted through
//! traits so that terminal, desktop and web frontends can inject their own
//! implementations.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreResult, OtpError};
pub use services::{
    distribute, navigate, Distribution, OtpController, SubmissionGate, DEFAULT_FALLBACK_ROUTE,
    DEFAULT_MARKER_FIELD,
};
pub use traits::{CodeSubmitter, InMemorySessionStore, SessionStore};
pub use types::{
    AssembledCode, Cell, CodeState, ControllerState, Digit, FocusTarget, Navigation, OtpEvent,
    SubmissionForm, SubmitResponse, Transition, CODE_LENGTH, OTP_SESSION_KEY,
};
