use std::{fmt::Display, str::FromStr};

use crate::{
    setup_error::SetupError,
    units::{kg_to_lbs, lbs_to_kg},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    Kg,
    Lbs,
}

impl Unit {
    #[must_use]
    pub fn other(self) -> Unit {
        match self {
            Unit::Kg => Unit::Lbs,
            Unit::Lbs => Unit::Kg,
        }
    }

    /// Converts a weight expressed in this unit into the other unit.
    #[must_use]
    pub fn convert(self, weight: f64) -> f64 {
        match self {
            Unit::Kg => kg_to_lbs(weight),
            Unit::Lbs => lbs_to_kg(weight),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kg => write!(f, "kg"),
            Unit::Lbs => write!(f, "lbs"),
        }
    }
}

impl FromStr for Unit {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" => Ok(Unit::Kg),
            "lb" | "lbs" => Ok(Unit::Lbs),
            _ => Err(SetupError::InvalidUnit(s.to_string())),
        }
    }
}
