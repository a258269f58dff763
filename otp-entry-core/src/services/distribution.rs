//! Digit distribution across consecutive cells

use crate::types::{CodeState, Digit, FocusTarget, CODE_LENGTH};

/// Outcome of a distribution that wrote at least one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    /// Snapshot after writing
    pub state: CodeState,
    /// Cell right after the last one written, clamped to the last cell
    pub focus: FocusTarget,
    /// Number of cells written
    pub written: usize,
}

/// Keep only ASCII digits, in order
pub fn normalize(raw: &str) -> Vec<Digit> {
    raw.chars().filter_map(Digit::from_char).collect()
}

/// Write the digits of `raw` into successive cells starting at `start`.
///
/// Non-digit characters are dropped first. Digits that would land past the
/// last cell are discarded. Returns `None` when `raw` holds no digit at all,
/// in which case state and focus stay as they were.
///
/// # Panics
/// When `start >= CODE_LENGTH`.
pub fn distribute(state: &CodeState, start: usize, raw: &str) -> Option<Distribution> {
    assert!(
        start < CODE_LENGTH,
        "cell index {start} out of range 0..{CODE_LENGTH}"
    );

    let digits = normalize(raw);
    if digits.is_empty() {
        return None;
    }

    let mut next = *state;
    let mut cursor = start;
    for digit in &digits {
        if cursor >= CODE_LENGTH {
            break;
        }
        next = next.set(cursor, *digit);
        cursor += 1;
    }

    let written = cursor - start;
    if written < digits.len() {
        log::debug!(
            "Distribution from cell {start} truncated: {} of {} digits discarded",
            digits.len() - written,
            digits.len()
        );
    }

    Some(Distribution {
        state: next,
        focus: FocusTarget::new(cursor),
        written,
    })
}
