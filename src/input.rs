use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error, info};

use crate::config::INPUT_POLL_INTERVAL_MS;
use crate::error::{Error, Result};
use crate::grid::Position;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the single-step velocity for this direction.
    ///
    /// `y` grows downwards, matching terminal rows.
    #[must_use]
    pub fn velocity(self) -> Position {
        match self {
            Self::Up => Position::new(0, -1),
            Self::Down => Position::new(0, 1),
            Self::Left => Position::new(-1, 0),
            Self::Right => Position::new(1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Quit,
}

/// Decodes one key event. Returns `None` for keys the game ignores.
#[must_use]
pub fn decode_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(GameInput::Quit);
    }

    let direction = match key.code {
        KeyCode::Char('a' | 'A') | KeyCode::Left => Direction::Left,
        KeyCode::Char('d' | 'D') | KeyCode::Right => Direction::Right,
        KeyCode::Char('w' | 'W') | KeyCode::Up => Direction::Up,
        KeyCode::Char('s' | 'S') | KeyCode::Down => Direction::Down,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => return Some(GameInput::Quit),
        _ => return None,
    };

    Some(GameInput::Direction(direction))
}

#[derive(Debug, Default)]
struct Slot {
    key: Option<GameInput>,
    failure: Option<io::Error>,
}

/// Latest recognized key, written by the input thread and read once per tick.
///
/// Only the most recent key is kept; nothing is queued.
#[derive(Debug, Clone, Default)]
pub struct LatestKey {
    slot: Arc<Mutex<Slot>>,
}

impl LatestKey {
    /// Overwrites the held key.
    pub fn store(&self, key: GameInput) {
        self.lock().key = Some(key);
    }

    /// Returns the held key without clearing it.
    ///
    /// A failure recorded by the input thread is returned once as
    /// [`Error::Input`].
    pub fn sample(&self) -> Result<Option<GameInput>> {
        let mut slot = self.lock();
        if let Some(failure) = slot.failure.take() {
            return Err(Error::Input(failure));
        }

        Ok(slot.key)
    }

    fn fail(&self, failure: io::Error) {
        self.lock().failure = Some(failure);
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Background thread that reads terminal key events into a [`LatestKey`].
pub struct InputPoller {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl InputPoller {
    /// Starts polling. The terminal must already be in raw mode.
    pub fn spawn(latest: LatestKey) -> Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("input".into())
            .spawn(move || {
                info!("input thread started");
                if let Err(failure) = poll_keys(&latest, &thread_stop) {
                    error!("input thread failed: {failure}");
                    latest.fail(failure);
                }
                info!("input thread stopped");
            })?;

        Ok(Self { stop, handle })
    }

    /// Asks the thread to stop and waits for it.
    pub fn stop(self) -> Result<()> {
        self.stop.store(true, Ordering::Relaxed);
        self.handle.join().map_err(|_| Error::InputThreadPanicked)
    }
}

fn poll_keys(latest: &LatestKey, stop: &AtomicBool) -> io::Result<()> {
    let timeout = Duration::from_millis(INPUT_POLL_INTERVAL_MS);

    while !stop.load(Ordering::Relaxed) {
        if !event::poll(timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if let Some(input) = decode_key(key) {
                debug!("key {input:?}");
                latest.store(input);
            }
        }
    }

    Ok(())
}
