pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod frame;
pub mod game;
pub mod grid;
pub mod input;
pub mod snake;
pub mod terminal_runtime;

pub use error::{Error, Result};
