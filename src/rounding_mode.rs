use std::{fmt::Display, str::FromStr};

use crate::setup_error::SetupError;

/// How a converted weight is snapped onto the grid of loadable weights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    #[default]
    Nearest,
    Up,
    Down,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 3] = [
        RoundingMode::Nearest,
        RoundingMode::Up,
        RoundingMode::Down,
    ];
}

impl Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Nearest => write!(f, "nearest"),
            RoundingMode::Up => write!(f, "up"),
            RoundingMode::Down => write!(f, "down"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(RoundingMode::Nearest),
            "up" => Ok(RoundingMode::Up),
            "down" => Ok(RoundingMode::Down),
            _ => Err(SetupError::InvalidRoundingMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_mode() {
        for mode in RoundingMode::ALL {
            assert_eq!(mode.to_string().parse::<RoundingMode>(), Ok(mode));
        }
        assert_eq!(" Up ".parse::<RoundingMode>(), Ok(RoundingMode::Up));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert_eq!(
            "sideways".parse::<RoundingMode>(),
            Err(SetupError::InvalidRoundingMode("sideways".to_string()))
        );
    }

    #[test]
    fn defaults_to_nearest() {
        assert_eq!(RoundingMode::default(), RoundingMode::Nearest);
    }
}
