use std::{fmt::Display, str::FromStr};

use crate::setup_error::SetupError;

/// A kind of plate and how many matched pairs of it are on hand.
///
/// One plate of each pair goes on either side of the bar, so `pairs` is also
/// the number of these plates a single side can take.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Plate {
    weight: f64,
    pairs: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: f64, pairs: u32) -> Self {
        Plate { weight, pairs }
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[must_use]
    pub fn pairs(&self) -> u32 {
        self.pairs
    }

    #[must_use]
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Vec<Plate> {
        pairs
            .iter()
            .map(|&(weight, pairs)| Plate::new(weight, pairs))
            .collect()
    }

    /// The plates with at least one pair on hand, order preserved.
    #[must_use]
    pub fn available(plates: &[Plate]) -> Vec<Plate> {
        plates.iter().copied().filter(|p| p.pairs > 0).collect()
    }

    /// Weight of the last available plate, the smallest one in an inventory
    /// sorted heaviest first.
    #[must_use]
    pub fn smallest(plates: &[Plate]) -> Option<f64> {
        plates.iter().rev().find(|p| p.pairs > 0).map(Plate::weight)
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.weight, self.pairs)
    }
}

impl FromStr for Plate {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SetupError::InvalidPlate(s.to_string());

        let (weight, pairs) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let weight = weight.trim().parse::<f64>().map_err(|_| invalid())?;
        let pairs = pairs.trim().parse::<u32>().map_err(|_| invalid())?;

        if !weight.is_finite() || weight <= 0.0 {
            return Err(invalid());
        }

        Ok(Plate::new(weight, pairs))
    }
}
