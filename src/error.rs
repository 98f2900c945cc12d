use thiserror::Error;

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid hex color {0:?}: expected six hex digits")]
    InvalidColor(String),

    #[error("option count {0} is out of range (expected 2..=9)")]
    InvalidOptionCount(usize),

    #[error("no unused color found after {attempts} attempts")]
    ColorSpaceExhausted { attempts: usize },

    #[error("the game is over; restart to keep playing")]
    GameOver,

    #[error("invalid round: {0}")]
    InvalidRound(&'static str),
}
