//! Input events and state transitions

use super::focus::ControllerState;

/// Host-delivered input event, addressed to the cell it happened on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpEvent {
    /// The widget became interactive
    Mount,

    /// Cell `index` now holds `text` after an edit (one key, predictive text,
    /// platform autofill into a single cell, or deletion leaving it empty)
    Type { index: usize, text: String },

    /// Backspace pressed on cell `index`
    Backspace { index: usize },

    /// Left arrow pressed on cell `index`
    ArrowLeft { index: usize },

    /// Right arrow pressed on cell `index`
    ArrowRight { index: usize },

    /// Cell `index` gained focus (pointer click, tab order)
    FocusGained { index: usize },

    /// Clipboard text pasted into cell `index`
    Paste { index: usize, text: String },

    /// Externally delivered code, always written from the first cell
    Autofill { text: String },
}

/// Result of applying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// New snapshot (equal to the previous one for no-op events)
    pub state: ControllerState,
    /// The host must not run its own default handling (e.g. raw paste insertion)
    pub default_prevented: bool,
}

impl Transition {
    pub(crate) fn to(state: ControllerState) -> Self {
        Self {
            state,
            default_prevented: false,
        }
    }

    pub(crate) fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}
