use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::config::{GLYPH_BLANK, GridSize};
use crate::grid::Position;

/// One tick's worth of glyphs, one byte per grid cell in row-major order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FrameBuffer {
    bounds: GridSize,
    cells: Vec<u8>,
}

impl FrameBuffer {
    /// Allocates a blank frame covering `bounds`.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self {
            bounds,
            cells: vec![GLYPH_BLANK; bounds.total_cells()],
        }
    }

    /// Writes `glyph` at `position`. Cells outside the frame are skipped.
    pub fn plot(&mut self, position: Position, glyph: u8) {
        if let Some(cell) = position
            .linear_index(self.bounds)
            .and_then(|index| self.cells.get_mut(index))
        {
            *cell = glyph;
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Bytes sent to the terminal: every cell but the last, so the cursor
    /// never lands past the bottom-right corner and scrolls the screen.
    #[must_use]
    pub fn visible_bytes(&self) -> &[u8] {
        let end = self.cells.len().saturating_sub(1);
        &self.cells[..end]
    }
}

/// Clears the screen, homes the cursor and writes the frame in one flush.
pub fn render<W: Write>(frame: &FrameBuffer, out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.write_all(frame.visible_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use crate::config::{GLYPH_BLANK, GLYPH_FOOD, GridSize};
    use crate::grid::Position;

    use super::{render, FrameBuffer};

    const BOUNDS: GridSize = GridSize {
        width: 3,
        height: 2,
    };

    #[test]
    fn new_frame_is_blank() {
        let frame = FrameBuffer::new(BOUNDS);

        assert_eq!(frame.cells().len(), 6);
        assert!(frame.cells().iter().all(|cell| *cell == GLYPH_BLANK));
    }

    #[test]
    fn plot_uses_row_major_index() {
        let mut frame = FrameBuffer::new(BOUNDS);

        frame.plot(Position::new(1, 1), GLYPH_FOOD);

        assert_eq!(frame.cells()[4], GLYPH_FOOD);
    }

    #[test]
    fn plot_outside_frame_is_ignored() {
        let mut frame = FrameBuffer::new(BOUNDS);

        frame.plot(Position::new(3, 0), GLYPH_FOOD);
        frame.plot(Position::new(0, 2), GLYPH_FOOD);
        frame.plot(Position::new(-1, 0), GLYPH_FOOD);

        assert_eq!(frame, FrameBuffer::new(BOUNDS));
    }

    #[test]
    fn render_omits_final_cell() {
        let mut frame = FrameBuffer::new(BOUNDS);
        frame.plot(Position::new(0, 0), b'x');
        frame.plot(Position::new(2, 1), b'z');
        let mut out = Vec::new();

        render(&frame, &mut out).expect("rendering into memory should succeed");

        assert!(out.ends_with(b"x    "));
        assert!(!out.contains(&b'z'));
    }

    #[test]
    fn render_clears_and_homes_before_writing() {
        let frame = FrameBuffer::new(BOUNDS);
        let mut out = Vec::new();

        render(&frame, &mut out).expect("rendering into memory should succeed");

        let escapes = String::from_utf8_lossy(&out);
        assert!(escapes.starts_with("\x1b[2J"));
        assert!(escapes.contains("\x1b[1;1H"));
    }
}
