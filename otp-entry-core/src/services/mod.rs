//! Controller logic services

mod distribution;
mod navigation;
mod submission_gate;

pub use distribution::{distribute, normalize, Distribution};
pub use navigation::{navigate, OtpController};
pub use submission_gate::{SubmissionGate, DEFAULT_FALLBACK_ROUTE, DEFAULT_MARKER_FIELD};
