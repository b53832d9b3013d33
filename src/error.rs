use std::io;

use thiserror::Error;

/// Fatal failures of the terminal or input collaborators.
///
/// Self-collision is not an error; it is reported as a game-over tick.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("reading keyboard input failed: {0}")]
    Input(#[source] io::Error),

    #[error("input thread panicked")]
    InputThreadPanicked,

    #[error("terminal has no drawable cells ({width}x{height})")]
    EmptyTerminal { width: u16, height: u16 },
}

pub type Result<T> = std::result::Result<T, Error>;
