use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Position is outside the board")]
    OutOfBounds,
    #[error("Mines have already been placed on this board")]
    AlreadyInitialized,
    #[error("Mines have not been placed yet")]
    MinesNotPlaced,
    #[error("Mine layout does not fit the board")]
    InvalidLayout,
}

pub type Result<T> = core::result::Result<T, GameError>;
