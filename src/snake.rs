use crate::collision::Positioned;
use crate::config::{GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize};
use crate::frame::FrameBuffer;
use crate::grid::Position;

/// One trailing body cell and its own step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub velocity: Position,
}

impl Segment {
    #[must_use]
    pub fn new(position: Position, velocity: Position) -> Self {
        Self { position, velocity }
    }

    /// Creates a resting segment at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self::new(position, Position::default())
    }
}

impl Positioned for Segment {
    fn position(&self) -> Position {
        self.position
    }
}

/// The player-controlled actor: a head plus an ordered chain of segments.
///
/// `body[0]` directly follows the head and the last element is the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    position: Position,
    velocity: Position,
    body: Vec<Segment>,
}

impl Snake {
    /// Creates a resting snake with its head at `start`, followed by
    /// `segments` in order.
    #[must_use]
    pub fn new(start: Position, segments: Vec<Segment>) -> Self {
        Self {
            position: start,
            velocity: Position::default(),
            body: segments,
        }
    }

    /// Advances one tick and reports whether the head ran into the body.
    ///
    /// The head steps by `velocity` with toroidal wrap, then every segment
    /// takes the cell its predecessor held before this call and keeps its
    /// own step. Each segment is checked against the new head as soon as it has been
    /// shifted; on a hit the call returns `true` at once and leaves the
    /// rest of the chain unshifted.
    ///
    /// With `grow` set and no collision, a new tail is appended on the cell
    /// the old tail just vacated, keeping the old tail's step.
    pub fn advance(&mut self, velocity: Position, bounds: GridSize, grow: bool) -> bool {
        let mut vacated = Segment::new(self.position, self.velocity);

        self.velocity = velocity;
        self.position = self.position.step(velocity, bounds);
        let head = self.position;

        for segment in &mut self.body {
            let previous = *segment;
            segment.position = vacated.position;
            vacated = previous;

            if segment.position == head {
                return true;
            }
        }

        if grow {
            self.body.push(vacated);
        }

        false
    }

    /// Writes the head glyph, then one body glyph per segment in chain
    /// order. Later writes win where cells coincide.
    pub fn draw(&self, frame: &mut FrameBuffer) {
        frame.plot(self.position, GLYPH_SNAKE_HEAD);
        for segment in &self.body {
            frame.plot(segment.position, GLYPH_SNAKE_BODY);
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.position
    }

    /// Returns the step applied on the last tick.
    #[must_use]
    pub fn velocity(&self) -> Position {
        self.velocity
    }

    /// Returns the body chain from the segment behind the head to the tail.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.body
    }

    /// Iterates over every occupied cell, head first.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.position).chain(self.body.iter().map(|segment| segment.position))
    }

    /// Returns true if the head or any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.cells().any(|cell| cell == position)
    }

    /// Returns the actor size: the head plus every segment.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.body.len()
    }

    /// Always false; a snake has at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Positioned for Snake {
    fn position(&self) -> Position {
        self.position
    }
}
