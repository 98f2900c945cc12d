pub mod args;
pub mod color;
pub mod config;
pub mod error;
pub mod flash;
pub mod help;
pub mod history;
pub mod logging;
pub mod round;
pub mod session;
pub mod ui;

pub use color::HexColor;
pub use error::GameError;
pub use session::{GuessOutcome, Rules, Session};
