use std::fmt::Display;

use itertools::Itertools;
use tracing::debug;

use crate::{
    plate::Plate,
    units::{display_precision, to_fixed},
};

/// One element of a bar load, read from the sleeve outwards.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadEntry {
    Plate(f64),
    /// Weight left over after the inventory ran out, three fraction digits.
    Remainder(String),
}

/// The plates for one side of the bar, heaviest first, and whatever weight
/// they could not cover.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BarLoad {
    plates: Vec<f64>,
    remainder: Option<String>,
}

impl BarLoad {
    #[must_use]
    pub fn plates(&self) -> &[f64] {
        &self.plates
    }

    #[must_use]
    pub fn remainder(&self) -> Option<&str> {
        self.remainder.as_deref()
    }

    #[must_use]
    pub fn remainder_weight(&self) -> Option<f64> {
        self.remainder.as_deref().and_then(|r| r.parse().ok())
    }

    /// Plates first, then the remainder if there is one.
    pub fn entries(&self) -> impl Iterator<Item = LoadEntry> + '_ {
        self.plates
            .iter()
            .copied()
            .map(LoadEntry::Plate)
            .chain(self.remainder.clone().map(LoadEntry::Remainder))
    }

    /// Total weight of the plates on one side.
    #[must_use]
    pub fn side_weight(&self) -> f64 {
        self.plates.iter().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len() + usize::from(self.remainder.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for BarLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.plates.is_empty(), &self.remainder) {
            (true, None) => write!(f, "no plates"),
            (true, Some(remainder)) => write!(f, "{remainder} remainder"),
            (false, None) => write!(f, "{}", self.plates.iter().join(", ")),
            (false, Some(remainder)) => {
                write!(f, "{} + {remainder} remainder", self.plates.iter().join(", "))
            }
        }
    }
}

/// Works out the plates for one side of the bar to reach `weight` in total.
///
/// `plates` must be sorted heaviest first. Plates are taken greedily in that
/// order without backtracking, so a combination that would have matched
/// exactly can be missed and reported as a remainder instead. Collars are left
/// off when `weight` is lighter than the bar with collars on.
#[must_use]
pub fn weight_to_bar_load(
    weight: f64,
    plates: &[Plate],
    bar_weight: f64,
    collar_weight: f64,
) -> BarLoad {
    let collar_weight = if weight < bar_weight + collar_weight * 2.0 {
        if collar_weight != 0.0 {
            debug!(
                weight,
                bar_weight,
                collar_weight,
                "load lighter than bar and collars, leaving collars off"
            );
        }
        0.0
    } else {
        collar_weight
    };

    // Converted collar weights carry float noise; cut it at display precision.
    let baseline = display_precision(bar_weight + collar_weight * 2.0);
    let mut side_weight = (weight - baseline) / 2.0;

    let mut load = Vec::new();
    for plate in plates {
        let mut pairs = plate.pairs();
        while plate.weight() <= side_weight && pairs > 0 {
            load.push(plate.weight());
            side_weight -= plate.weight();
            pairs -= 1;
        }
    }

    let remainder = (side_weight > 0.0).then(|| to_fixed(side_weight, 3));
    if let Some(remainder) = &remainder {
        debug!(weight, remainder = remainder.as_str(), "plates ran out before the target");
    }

    BarLoad {
        plates: load,
        remainder,
    }
}
