use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid allocation failed")]
    OutOfMemory,
    #[error("Coordinates outside the grid")]
    OutOfBounds,
    #[error("Bomb count incompatible with grid size")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
