use std::collections::HashSet;

use rand::Rng;

use crate::collision::Positioned;
use crate::config::{GLYPH_FOOD, GridSize};
use crate::frame::FrameBuffer;
use crate::grid::Position;
use crate::snake::Snake;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell the snake does not occupy.
    ///
    /// Samples cells until one falls outside the snake. This never returns
    /// if the snake covers every cell of `bounds`.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Self {
        let occupied: HashSet<Position> = snake.cells().collect();

        loop {
            let candidate = Position::new(
                rng.gen_range(0..i32::from(bounds.width)),
                rng.gen_range(0..i32::from(bounds.height)),
            );
            if !occupied.contains(&candidate) {
                return Self::new(candidate);
            }
        }
    }

    pub fn draw(&self, frame: &mut FrameBuffer) {
        frame.plot(self.position, GLYPH_FOOD);
    }
}

impl Positioned for Food {
    fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::config::{GLYPH_FOOD, GridSize};
    use crate::frame::FrameBuffer;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::{Segment, Snake};

    use super::Food;

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::new(
            Position::new(2, 0),
            vec![Segment::at(Position::new(1, 0)), Segment::at(Position::new(0, 0))],
        );

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, bounds, &snake);
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn food_avoids_random_snakes() {
        let mut rng = StdRng::seed_from_u64(1234);
        let directions = [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ];

        for _ in 0..1000 {
            let bounds = GridSize {
                width: rng.gen_range(4..=12),
                height: rng.gen_range(4..=12),
            };
            let start = Position::new(
                rng.gen_range(0..i32::from(bounds.width)),
                rng.gen_range(0..i32::from(bounds.height)),
            );
            let mut snake = Snake::new(
                start,
                vec![Segment::at(start.step(Direction::Left.velocity(), bounds))],
            );
            // At most 8 cells on at least 16, so a free cell always exists.
            for _ in 0..rng.gen_range(0..=6) {
                let direction = directions[rng.gen_range(0..directions.len())];
                if snake.advance(direction.velocity(), bounds, true) {
                    break;
                }
            }

            let food = Food::spawn(&mut rng, bounds, &snake);
            assert!(!snake.occupies(food.position), "{food:?} on {snake:?}");
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let snake = Snake::new(
            Position::new(0, 0),
            vec![Segment::at(Position::new(1, 0)), Segment::at(Position::new(1, 1))],
        );

        let food = Food::spawn(&mut rng, bounds, &snake);

        assert_eq!(food.position, Position::new(0, 1));
    }

    #[test]
    fn draw_marks_food_cell() {
        let bounds = GridSize {
            width: 3,
            height: 3,
        };
        let mut frame = FrameBuffer::new(bounds);

        Food::new(Position::new(2, 2)).draw(&mut frame);

        assert_eq!(frame.cells()[8], GLYPH_FOOD);
    }
}
