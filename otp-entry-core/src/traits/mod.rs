//! Collaborator abstraction trait definitions

mod code_submitter;
mod session_store;

pub use code_submitter::CodeSubmitter;
pub use session_store::{InMemorySessionStore, SessionStore};
