use crate::config::GridSize;

/// Grid position (or single-step velocity) in logical cell coordinates.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: self.x.rem_euclid(i32::from(bounds.width)),
            y: self.y.rem_euclid(i32::from(bounds.height)),
        }
    }

    /// Moves by `delta` and wraps the result around the torus.
    ///
    /// The result is always inside `bounds`, even when `self` is not (which
    /// happens after the terminal shrinks under a running game).
    #[must_use]
    pub fn step(self, delta: Position, bounds: GridSize) -> Self {
        Self {
            x: self.x.saturating_add(delta.x),
            y: self.y.saturating_add(delta.y),
        }
        .wrapped(bounds)
    }

    /// Row-major offset of this cell in a flat `width * height` buffer.
    ///
    /// Returns `None` for cells outside `bounds`.
    #[must_use]
    pub fn linear_index(self, bounds: GridSize) -> Option<usize> {
        if !self.is_within_bounds(bounds) {
            return None;
        }

        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        Some(y * usize::from(bounds.width) + x)
    }
}
