use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::collision::collides;
use crate::config::{GridSize, INITIAL_DIRECTION};
use crate::food::Food;
use crate::frame::FrameBuffer;
use crate::grid::Position;
use crate::input::{Direction, GameInput};
use crate::snake::{Segment, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Result of one simulation tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Tick {
    /// The composited frame to render before sleeping.
    Frame(FrameBuffer),
    /// The game ended; `score` is the final snake size.
    GameOver { score: usize },
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub status: GameStatus,
    pub last_direction: Direction,
    pub tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a state whose food placement draws from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible games.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let start = bounds.center();
        let tail = Position::new(start.x - 1, start.y).wrapped(bounds);
        let snake = Snake::new(start, vec![Segment::at(tail)]);
        let food = Food::spawn(&mut rng, bounds, &snake);

        info!(
            "new game on {}x{} grid, head at {start:?}, food at {:?}",
            bounds.width, bounds.height, food.position
        );

        Self {
            snake,
            food,
            status: GameStatus::Running,
            last_direction: INITIAL_DIRECTION,
            tick_count: 0,
            rng,
        }
    }

    /// Advances the simulation by one tick on a grid of size `bounds`.
    ///
    /// Food is checked against the head before it moves; a hit grows the
    /// snake on this tick's move and places new food. Food is drawn first
    /// and the snake over it.
    pub fn tick(&mut self, bounds: GridSize, input: Option<GameInput>) -> Tick {
        if self.status == GameStatus::GameOver {
            return self.game_over();
        }

        match input {
            Some(GameInput::Direction(direction)) => self.last_direction = direction,
            Some(GameInput::Quit) => {
                info!("quit requested at size {}", self.snake.len());
                return self.finish();
            }
            None => {}
        }

        self.tick_count += 1;

        if !self.food.position.is_within_bounds(bounds) {
            self.food = Food::spawn(&mut self.rng, bounds, &self.snake);
            debug!("food left the shrunk grid, respawned at {:?}", self.food.position);
        }

        let grow = collides(&self.snake, &self.food);
        if grow {
            self.food = Food::spawn(&mut self.rng, bounds, &self.snake);
            debug!(
                "food eaten at tick {}, respawned at {:?}",
                self.tick_count, self.food.position
            );
        }

        let mut frame = FrameBuffer::new(bounds);
        self.food.draw(&mut frame);

        if self.snake.advance(self.last_direction.velocity(), bounds, grow) {
            info!(
                "snake hit itself at {:?} on tick {}",
                self.snake.head(),
                self.tick_count
            );
            return self.finish();
        }

        self.snake.draw(&mut frame);
        Tick::Frame(frame)
    }

    /// Final score: the snake size.
    #[must_use]
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    fn finish(&mut self) -> Tick {
        self.status = GameStatus::GameOver;
        self.game_over()
    }

    fn game_over(&self) -> Tick {
        Tick::GameOver {
            score: self.score(),
        }
    }
}
