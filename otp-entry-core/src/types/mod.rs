//! Core type definitions

mod code;
mod event;
mod focus;
mod submission;

pub use code::{Cell, CodeState, Digit, CODE_LENGTH};
pub use event::{OtpEvent, Transition};
pub use focus::{ControllerState, FocusTarget};
pub use submission::{AssembledCode, Navigation, SubmissionForm, SubmitResponse, OTP_SESSION_KEY};
