use crate::grid::Position;
use crate::input::Direction;

/// Logical grid dimensions passed through the game as a named type.
///
/// The grid is toroidal: every coordinate is wrapped into
/// `[0, width) x [0, height)` after movement.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns a grid size, or `None` when either axis is zero.
    #[must_use]
    pub fn non_empty(width: u16, height: u16) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, rounding towards the origin.
    #[must_use]
    pub fn center(self) -> Position {
        Position::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// Fixed simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 250;

/// How long the input thread blocks waiting for an event before it
/// re-checks its stop flag.
pub const INPUT_POLL_INTERVAL_MS: u64 = 20;

/// Direction used until the first directional key arrives.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Glyph written at the snake head cell.
pub const GLYPH_SNAKE_HEAD: u8 = b'Q';

/// Glyph written at every body segment cell.
pub const GLYPH_SNAKE_BODY: u8 = b'@';

/// Glyph written at the food cell.
pub const GLYPH_FOOD: u8 = b'8';

/// Glyph for empty cells of a fresh frame.
pub const GLYPH_BLANK: u8 = b' ';
