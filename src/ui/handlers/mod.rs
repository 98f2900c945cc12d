//! Handlers for keyboard and mouse input and for game state transitions.

mod game_handler;
mod input_handler;

pub use game_handler::GameHandler;
pub use input_handler::InputHandler;
