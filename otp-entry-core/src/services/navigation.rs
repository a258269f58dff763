//! Focus navigation state machine
//!
//! `navigate` is a pure function from (snapshot, event) to the next snapshot.
//! `OtpController` owns the current snapshot and replaces it wholesale after
//! every event.

use crate::types::{CodeState, ControllerState, FocusTarget, OtpEvent, Transition, CODE_LENGTH};

use super::distribution::distribute;

/// Compute the snapshot that follows `event`
///
/// # Panics
/// When the event addresses a cell index `>= CODE_LENGTH`.
pub fn navigate(current: &ControllerState, event: &OtpEvent) -> Transition {
    let code = current.code;

    match event {
        OtpEvent::Mount => Transition::to(land(code, FocusTarget::first())),

        OtpEvent::Type { index, text } => {
            let index = cell(*index);
            match distribute(&code, index.index(), text) {
                Some(d) => Transition::to(land(d.state, d.focus)),
                // 编辑后没有剩下数字：清空该格，焦点不动
                None => Transition::to(land(code.clear(index.index()), current.focus)),
            }
        }

        OtpEvent::Backspace { index } => {
            let index = cell(*index);
            let (code, focus) = match index.prev() {
                Some(prev) if code.get(index.index()).is_empty() => {
                    (code.clear(prev.index()), prev)
                }
                _ => (code.clear(index.index()), index),
            };
            Transition::to(land(code, focus))
        }

        OtpEvent::ArrowLeft { index } => move_focus(current, cell(*index).prev()),

        OtpEvent::ArrowRight { index } => move_focus(current, cell(*index).next()),

        OtpEvent::FocusGained { index } => Transition::to(land(code, cell(*index))),

        OtpEvent::Paste { index, text } => {
            distribute_into(current, &code, cell(*index).index(), text).prevent_default()
        }

        OtpEvent::Autofill { text } => distribute_into(current, &code, 0, text),
    }
}

/// Snapshot with focus on `focus`; a non-empty focused cell is selected
fn land(code: CodeState, focus: FocusTarget) -> ControllerState {
    let selection = (!code.get(focus.index()).is_empty()).then_some(focus);
    ControllerState {
        code,
        focus,
        selection,
    }
}

fn cell(index: usize) -> FocusTarget {
    assert!(
        index < CODE_LENGTH,
        "cell index {index} out of range 0..{CODE_LENGTH}"
    );
    FocusTarget::new(index)
}

fn move_focus(current: &ControllerState, target: Option<FocusTarget>) -> Transition {
    match target {
        Some(focus) => Transition::to(land(current.code, focus)),
        None => Transition::to(*current),
    }
}

fn distribute_into(
    current: &ControllerState,
    code: &CodeState,
    start: usize,
    text: &str,
) -> Transition {
    match distribute(code, start, text) {
        Some(d) => Transition::to(land(d.state, d.focus)),
        None => {
            log::debug!("Ignoring input without digits at cell {start}");
            Transition::to(*current)
        }
    }
}

/// Owns the current controller snapshot
#[derive(Debug, Clone, Default)]
pub struct OtpController {
    state: ControllerState,
}

impl OtpController {
    /// Blank cells; call [`OtpController::mount`] once the host is interactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the first cell
    pub fn mount(&mut self) -> Transition {
        self.dispatch(&OtpEvent::Mount)
    }

    /// Apply `event`, replacing the stored snapshot
    pub fn dispatch(&mut self, event: &OtpEvent) -> Transition {
        let transition = navigate(&self.state, event);
        log::trace!(
            "{event:?}: focus {} -> {}, filled {}",
            self.state.focus.index(),
            transition.state.focus.index(),
            transition.state.code.filled_count()
        );
        self.state = transition.state;
        transition
    }

    /// Current snapshot (copied; later events do not affect it)
    pub fn snapshot(&self) -> ControllerState {
        self.state
    }

    pub fn code(&self) -> CodeState {
        self.state.code
    }

    pub fn focus(&self) -> FocusTarget {
        self.state.focus
    }

    /// Blank every cell and refocus the first one
    pub fn reset(&mut self) {
        self.state = ControllerState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Digit;

    fn state_with(code: &str, focus: usize) -> ControllerState {
        let mut s = CodeState::new();
        for (i, ch) in code.chars().enumerate() {
            if let Some(d) = Digit::from_char(ch) {
                s = s.set(i, d);
            }
        }
        ControllerState {
            code: s,
            focus: FocusTarget::new(focus),
            selection: None,
        }
    }

    fn typed(index: usize, text: &str) -> OtpEvent {
        OtpEvent::Type {
            index,
            text: text.to_string(),
        }
    }

    #[test]
    fn mount_focuses_first_cell() {
        let t = navigate(&state_with("", 4), &OtpEvent::Mount);
        assert_eq!(t.state.focus, FocusTarget::first());
        assert!(!t.default_prevented);
    }

    #[test]
    fn typing_digits_advances_focus() {
        let mut c = OtpController::new();
        c.mount();
        for (k, ch) in "482913".chars().enumerate() {
            let index = c.focus().index();
            c.dispatch(&typed(index, &ch.to_string()));
            assert_eq!(c.focus().index(), (k + 1).min(5));
        }
        assert_eq!(c.code().to_code(), "482913");
    }

    #[test]
    fn typing_on_last_cell_keeps_focus() {
        let t = navigate(&state_with("12345", 5), &typed(5, "6"));
        assert_eq!(t.state.focus.index(), 5);
        assert!(t.state.code.is_complete());
    }

    #[test]
    fn typing_several_digits_distributes() {
        let t = navigate(&state_with("", 0), &typed(0, "654321"));
        assert_eq!(t.state.code.to_code(), "654321");
        assert_eq!(t.state.focus.index(), 5);
    }

    #[test]
    fn typed_deletion_clears_without_moving() {
        let t = navigate(&state_with("123", 1), &typed(1, ""));
        assert!(t.state.code.get(1).is_empty());
        assert_eq!(t.state.code.to_code(), "13");
        assert_eq!(t.state.focus.index(), 1);
    }

    #[test]
    fn typed_non_digit_leaves_cell_empty() {
        let t = navigate(&state_with("123", 2), &typed(2, "x"));
        assert!(t.state.code.get(2).is_empty());
        assert_eq!(t.state.focus.index(), 2);
    }

    #[test]
    fn backspace_on_filled_cell_clears_it_in_place() {
        let t = navigate(&state_with("123", 2), &OtpEvent::Backspace { index: 2 });
        assert_eq!(t.state.code.to_code(), "12");
        assert_eq!(t.state.focus.index(), 2);
    }

    #[test]
    fn backspace_on_empty_cell_walks_left() {
        let t = navigate(&state_with("123", 3), &OtpEvent::Backspace { index: 3 });
        assert_eq!(t.state.code.to_code(), "12");
        assert!(t.state.code.get(2).is_empty());
        assert_eq!(t.state.focus.index(), 2);
    }

    #[test]
    fn held_backspace_empties_the_row() {
        let mut c = OtpController::new();
        c.dispatch(&OtpEvent::Autofill {
            text: "123456".into(),
        });
        // 第一次只清空最后一格，之后每次向左删除一格
        for _ in 0..6 {
            let index = c.focus().index();
            c.dispatch(&OtpEvent::Backspace { index });
        }
        assert_eq!(c.code().to_code(), "");
        assert_eq!(c.focus().index(), 0);
    }

    #[test]
    fn backspace_on_empty_first_cell_stays() {
        let t = navigate(&state_with("", 0), &OtpEvent::Backspace { index: 0 });
        assert_eq!(t.state.focus.index(), 0);
        assert_eq!(t.state.code, CodeState::new());
    }

    #[test]
    fn arrows_move_within_range() {
        let s = state_with("12", 2);
        assert_eq!(
            navigate(&s, &OtpEvent::ArrowLeft { index: 2 }).state.focus.index(),
            1
        );
        assert_eq!(
            navigate(&s, &OtpEvent::ArrowRight { index: 2 }).state.focus.index(),
            3
        );
        assert_eq!(navigate(&s, &OtpEvent::ArrowRight { index: 2 }).state.code, s.code);
    }

    #[test]
    fn arrows_at_edges_are_no_ops() {
        let first = state_with("1", 0);
        assert_eq!(navigate(&first, &OtpEvent::ArrowLeft { index: 0 }).state, first);

        let last = state_with("123456", 5);
        assert_eq!(navigate(&last, &OtpEvent::ArrowRight { index: 5 }).state, last);
    }

    #[test]
    fn focus_gained_selects_existing_content() {
        let t = navigate(&state_with("123", 0), &OtpEvent::FocusGained { index: 1 });
        assert_eq!(t.state.focus.index(), 1);
        assert_eq!(t.state.selection, Some(FocusTarget::new(1)));
        assert!(t.state.focused_cell_selected());
        assert_eq!(t.state.code.to_code(), "123");
    }

    #[test]
    fn arrow_onto_filled_cell_selects_it() {
        let s = state_with("123", 3);
        let t = navigate(&s, &OtpEvent::ArrowLeft { index: 3 });
        assert_eq!(t.state.focus.index(), 2);
        assert!(t.state.focused_cell_selected());

        let t = navigate(&t.state, &OtpEvent::ArrowRight { index: 2 });
        assert_eq!(t.state.focus.index(), 3);
        assert_eq!(t.state.selection, None);
    }

    #[test]
    fn auto_advance_onto_filled_cell_selects_it() {
        let t = navigate(&state_with("1_3", 1), &typed(1, "2"));
        assert_eq!(t.state.code.to_code(), "123");
        assert_eq!(t.state.focus.index(), 2);
        assert!(t.state.focused_cell_selected());

        let t = navigate(&state_with("1", 1), &typed(1, "2"));
        assert_eq!(t.state.focus.index(), 2);
        assert_eq!(t.state.selection, None);
    }

    #[test]
    fn focus_gained_on_empty_cell_selects_nothing() {
        let t = navigate(&state_with("1", 0), &OtpEvent::FocusGained { index: 4 });
        assert_eq!(t.state.focus.index(), 4);
        assert_eq!(t.state.selection, None);
    }

    #[test]
    fn typing_over_selection_replaces_digit() {
        let mut c = OtpController::new();
        c.dispatch(&OtpEvent::Autofill {
            text: "111111".into(),
        });
        c.dispatch(&OtpEvent::FocusGained { index: 2 });
        c.dispatch(&typed(2, "7"));
        assert_eq!(c.code().to_code(), "117111");
        assert_eq!(c.focus().index(), 3);
        // 自动前进到的格子有内容，同样被选中
        assert_eq!(c.snapshot().selection, Some(FocusTarget::new(3)));
    }

    #[test]
    fn paste_distributes_and_prevents_default() {
        let t = navigate(
            &state_with("", 0),
            &OtpEvent::Paste {
                index: 0,
                text: "12a3-45".into(),
            },
        );
        assert_eq!(t.state.code.to_code(), "12345");
        assert!(t.state.code.get(5).is_empty());
        assert_eq!(t.state.focus.index(), 5);
        assert!(t.default_prevented);
    }

    #[test]
    fn non_numeric_paste_changes_nothing() {
        let s = state_with("12", 2);
        let t = navigate(
            &s,
            &OtpEvent::Paste {
                index: 2,
                text: "code: n/a".into(),
            },
        );
        assert_eq!(t.state, s);
        assert!(t.default_prevented);
    }

    #[test]
    fn autofill_starts_at_first_cell() {
        let t = navigate(
            &state_with("", 3),
            &OtpEvent::Autofill {
                text: "Your code is 246810".into(),
            },
        );
        assert_eq!(t.state.code.to_code(), "246810");
        assert_eq!(t.state.focus.index(), 5);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_events() {
        let mut c = OtpController::new();
        c.dispatch(&typed(0, "1"));
        let snap = c.snapshot();
        c.dispatch(&typed(1, "2"));
        assert_eq!(snap.code.to_code(), "1");
        assert_eq!(c.code().to_code(), "12");
    }

    #[test]
    fn reset_blanks_every_cell() {
        let mut c = OtpController::new();
        c.dispatch(&OtpEvent::Autofill {
            text: "999999".into(),
        });
        c.reset();
        assert_eq!(c.snapshot(), ControllerState::new());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn event_for_missing_cell_panics() {
        let _ = navigate(&ControllerState::new(), &OtpEvent::ArrowLeft { index: 6 });
    }
}
