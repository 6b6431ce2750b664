use thiserror::Error;

use crate::unit::Unit;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("Unknown unit {0:?}, expected kg or lbs.")]
    InvalidUnit(String),
    #[error("Unknown rounding mode {0:?}, expected nearest, up or down.")]
    InvalidRoundingMode(String),
    #[error("Invalid plate {0:?}, expected WEIGHTxPAIRS such as 25x4.")]
    InvalidPlate(String),
    #[error("No {0} plates available.")]
    NoPlates(Unit),
}
