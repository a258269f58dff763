//! Cell and code state types

use std::fmt;

/// Number of cells in a code. Fixed for the lifetime of a widget.
pub const CODE_LENGTH: usize = 6;

/// A single ASCII digit (`'0'..='9'`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Build a digit from a character, `None` for anything but `'0'..='9'`
    pub fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_digit() {
            // is_ascii_digit guarantees the char fits in one byte
            Some(Self(ch as u8))
        } else {
            None
        }
    }

    /// Character representation
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One input slot: empty or exactly one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell(Option<Digit>);

impl Cell {
    /// Empty cell
    pub const EMPTY: Cell = Cell(None);

    /// Cell holding `digit`
    pub fn filled(digit: Digit) -> Self {
        Self(Some(digit))
    }

    pub fn is_empty(self) -> bool {
        self.0.is_none()
    }

    pub fn as_char(self) -> Option<char> {
        self.0.map(Digit::as_char)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => write!(f, "{d}"),
            None => Ok(()),
        }
    }
}

/// Ordered sequence of exactly [`CODE_LENGTH`] cells.
///
/// Every mutation returns a new snapshot and leaves the receiver untouched,
/// so a reader holding an older snapshot never observes a half-applied edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeState {
    cells: [Cell; CODE_LENGTH],
}

impl CodeState {
    /// All cells blank
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last cell
    pub const fn last_index() -> usize {
        CODE_LENGTH - 1
    }

    /// Value of cell `index`
    ///
    /// # Panics
    /// When `index >= CODE_LENGTH`.
    pub fn get(&self, index: usize) -> Cell {
        assert_in_range(index);
        self.cells[index]
    }

    /// Snapshot with cell `index` set to `digit`
    ///
    /// # Panics
    /// When `index >= CODE_LENGTH`.
    #[must_use]
    pub fn set(&self, index: usize, digit: Digit) -> Self {
        assert_in_range(index);
        let mut cells = self.cells;
        cells[index] = Cell::filled(digit);
        Self { cells }
    }

    /// Snapshot with cell `index` emptied
    ///
    /// # Panics
    /// When `index >= CODE_LENGTH`.
    #[must_use]
    pub fn clear(&self, index: usize) -> Self {
        assert_in_range(index);
        let mut cells = self.cells;
        cells[index] = Cell::EMPTY;
        Self { cells }
    }

    /// Every cell holds a digit
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Concatenation of cell values in order (empty cells contribute nothing)
    pub fn to_code(&self) -> String {
        self.cells.iter().filter_map(|c| c.as_char()).collect()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

fn assert_in_range(index: usize) {
    assert!(
        index < CODE_LENGTH,
        "cell index {index} out of range 0..{CODE_LENGTH}"
    );
}
