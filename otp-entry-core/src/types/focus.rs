//! Focus target and controller snapshot

use super::code::{CodeState, CODE_LENGTH};

/// Index of the cell that receives keyboard input, always within `0..CODE_LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord)]
pub struct FocusTarget(usize);

impl FocusTarget {
    /// Clamp `index` to the last valid cell
    pub fn new(index: usize) -> Self {
        Self(index.min(CodeState::last_index()))
    }

    pub const fn first() -> Self {
        Self(0)
    }

    pub const fn last() -> Self {
        Self(CODE_LENGTH - 1)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Cell to the left, `None` at the first cell
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }

    /// Cell to the right, `None` at the last cell
    pub fn next(self) -> Option<Self> {
        if self.0 < CodeState::last_index() {
            Some(Self(self.0 + 1))
        } else {
            None
        }
    }
}

/// Immutable controller snapshot: cells, focus and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerState {
    /// Cell values
    pub code: CodeState,
    /// Cell receiving input
    pub focus: FocusTarget,
    /// Cell whose content is selected for replace-on-next-keystroke
    pub selection: Option<FocusTarget>,
}

impl ControllerState {
    /// Blank cells, focus on the first cell, nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the focused cell content is currently selected
    pub fn focused_cell_selected(&self) -> bool {
        self.selection == Some(self.focus)
    }
}
