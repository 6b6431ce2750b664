use tracing::warn;

use crate::{
    bar_load::{BarLoad, weight_to_bar_load},
    plate::Plate,
    rounding_mode::RoundingMode,
    setup_error::SetupError,
    unit::Unit,
    units::plate_round,
};

const KG_BAR: f64 = 20.0;
const LBS_BAR: f64 = 45.0;
const KG_COLLAR: f64 = 2.5;
const UNKNOWN_COLLAR: f64 = 5.51;

/// Everything needed to load a bar: the target, the equipment, and how to
/// present the same target in the other unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Setup {
    pub total_weight: f64,
    pub unit: Unit,
    pub rounding: RoundingMode,
    pub bar_weight: f64,
    pub collar_weight: f64,
    pub plates_kg: Vec<Plate>,
    pub plates_lbs: Vec<Plate>,
}

/// The target expressed in the other unit, snapped to what its plates can
/// load.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub unit: Unit,
    /// Straight conversion of the target, before rounding.
    pub weight: f64,
    pub rounded: f64,
    pub load: BarLoad,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            total_weight: 0.0,
            unit: Unit::Kg,
            rounding: RoundingMode::Nearest,
            bar_weight: KG_BAR,
            collar_weight: KG_COLLAR,
            plates_kg: Plate::from_pairs(&[
                (50.0, 0),
                (25.0, 8),
                (20.0, 1),
                (15.0, 1),
                (10.0, 1),
                (5.0, 1),
                (2.5, 1),
                (1.25, 1),
            ]),
            plates_lbs: Plate::from_pairs(&[
                (45.0, 8),
                (35.0, 0),
                (25.0, 1),
                (10.0, 1),
                (5.0, 1),
                (2.5, 1),
            ]),
        }
    }
}

impl Setup {
    /// Default equipment for lifters working in `unit`: a 20 kg bar with
    /// 2.5 kg collars, or a 45 lb bar without collars.
    #[must_use]
    pub fn for_unit(unit: Unit) -> Self {
        match unit {
            Unit::Kg => Setup::default(),
            Unit::Lbs => Setup {
                unit,
                bar_weight: LBS_BAR,
                collar_weight: 0.0,
                ..Setup::default()
            },
        }
    }

    /// A zero target means there is nothing to load.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_weight == 0.0
    }

    #[must_use]
    pub fn inventory(&self, unit: Unit) -> &[Plate] {
        match unit {
            Unit::Kg => &self.plates_kg,
            Unit::Lbs => &self.plates_lbs,
        }
    }

    #[must_use]
    pub fn plates(&self, unit: Unit) -> Vec<Plate> {
        Plate::available(self.inventory(unit))
    }

    /// Weight of the smallest plate with a pair on hand in `unit`.
    ///
    /// # Errors
    /// If no plate in the `unit` inventory has a pair on hand.
    pub fn smallest_plate(&self, unit: Unit) -> Result<f64, SetupError> {
        Plate::smallest(self.inventory(unit)).ok_or_else(|| {
            warn!(%unit, "no plates available");
            SetupError::NoPlates(unit)
        })
    }

    #[must_use]
    pub fn primary(&self) -> BarLoad {
        weight_to_bar_load(
            self.total_weight,
            &self.plates(self.unit),
            self.bar_weight,
            self.collar_weight,
        )
    }

    /// The bar in the other unit. A 20 kg bar and a 45 lb bar stand in for
    /// each other; any other bar is converted as is.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn converted_bar_weight(&self) -> f64 {
        match self.unit {
            Unit::Kg if self.bar_weight == KG_BAR => LBS_BAR,
            Unit::Lbs if self.bar_weight == LBS_BAR => KG_BAR,
            unit => unit.convert(self.bar_weight),
        }
    }

    /// Collars in the other unit: none in pounds, standard 2.5 kg collars
    /// in kilograms when collars are in use. A collar weight that is neither
    /// zero nor positive maps to 5.51.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn converted_collar_weight(&self) -> f64 {
        match self.unit.other() {
            Unit::Lbs => 0.0,
            Unit::Kg if self.collar_weight == 0.0 => 0.0,
            Unit::Kg if self.collar_weight > 0.0 => KG_COLLAR,
            Unit::Kg => UNKNOWN_COLLAR,
        }
    }

    /// The target in the other unit, rounded to its plates, with its load.
    ///
    /// # Errors
    /// If the other unit's inventory has no plates to round against.
    pub fn converted(&self) -> Result<Conversion, SetupError> {
        let unit = self.unit.other();
        let weight = self.unit.convert(self.total_weight);
        let rounded = plate_round(weight, self.smallest_plate(unit)?, self.rounding);

        let load = weight_to_bar_load(
            rounded,
            &self.plates(unit),
            self.converted_bar_weight(),
            self.converted_collar_weight(),
        );

        Ok(Conversion {
            unit,
            weight,
            rounded,
            load,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(total_weight: f64, unit: Unit) -> Setup {
        Setup {
            total_weight,
            ..Setup::for_unit(unit)
        }
    }

    #[test]
    fn primary_uses_available_plates_only() {
        let load = setup(100.0, Unit::Kg).primary();
        assert_eq!(load.plates(), &[25.0, 10.0, 2.5]);
        assert_eq!(load.remainder(), None);
    }

    #[test]
    fn kg_target_converts_to_lbs() {
        let conversion = setup(100.0, Unit::Kg).converted().unwrap();
        assert_eq!(conversion.unit, Unit::Lbs);
        assert!((conversion.weight - 220.462_262).abs() < 1e-9);
        assert_eq!(conversion.rounded, 220.0);
        assert_eq!(conversion.load.plates(), &[45.0, 25.0, 10.0, 5.0, 2.5]);
        assert_eq!(conversion.load.remainder(), None);
    }

    #[test]
    fn lbs_target_converts_to_kg() {
        let conversion = setup(225.0, Unit::Lbs).converted().unwrap();
        assert_eq!(conversion.unit, Unit::Kg);
        assert_eq!(conversion.rounded, 102.5);
        assert_eq!(conversion.load.plates(), &[25.0, 15.0, 1.25]);
    }

    #[test]
    fn lbs_collars_become_kg_collars() {
        let conversion = Setup {
            collar_weight: 5.0,
            ..setup(225.0, Unit::Lbs)
        }
        .converted()
        .unwrap();
        assert_eq!(conversion.load.plates(), &[25.0, 10.0, 2.5, 1.25]);
    }

    #[test]
    fn rounding_mode_applies_to_conversion() {
        let up = Setup {
            rounding: RoundingMode::Up,
            ..setup(100.0, Unit::Kg)
        };
        let down = Setup {
            rounding: RoundingMode::Down,
            ..setup(100.0, Unit::Kg)
        };
        assert_eq!(up.converted().unwrap().rounded, 225.0);
        assert_eq!(down.converted().unwrap().rounded, 220.0);
    }

    #[test]
    fn standard_bars_swap_between_units() {
        assert_eq!(setup(100.0, Unit::Kg).converted_bar_weight(), 45.0);
        assert_eq!(setup(100.0, Unit::Lbs).converted_bar_weight(), 20.0);

        let womens = Setup {
            bar_weight: 15.0,
            ..setup(100.0, Unit::Kg)
        };
        assert!((womens.converted_bar_weight() - 33.069_339_3).abs() < 1e-6);
    }

    #[test]
    fn collars_only_carry_into_kg() {
        assert_eq!(setup(100.0, Unit::Kg).converted_collar_weight(), 0.0);
        assert_eq!(setup(100.0, Unit::Lbs).converted_collar_weight(), 0.0);
        let collared = Setup {
            collar_weight: 5.0,
            ..setup(100.0, Unit::Lbs)
        };
        assert_eq!(collared.converted_collar_weight(), 2.5);
    }

    #[test]
    fn negative_collar_into_kg_falls_back() {
        let odd = Setup {
            collar_weight: -1.0,
            ..setup(100.0, Unit::Lbs)
        };
        assert_eq!(odd.converted_collar_weight(), 5.51);

        let odd_kg = Setup {
            collar_weight: -1.0,
            ..setup(100.0, Unit::Kg)
        };
        assert_eq!(odd_kg.converted_collar_weight(), 0.0);
    }

    #[test]
    fn missing_plates_in_other_unit_is_an_error() {
        let bare = Setup {
            plates_lbs: Plate::from_pairs(&[(45.0, 0)]),
            ..setup(100.0, Unit::Kg)
        };
        assert_eq!(bare.converted(), Err(SetupError::NoPlates(Unit::Lbs)));
        assert!(bare.plates(Unit::Lbs).is_empty());
    }

    #[test]
    fn smallest_plate_per_unit() {
        let setup = Setup::default();
        assert_eq!(setup.smallest_plate(Unit::Kg), Ok(1.25));
        assert_eq!(setup.smallest_plate(Unit::Lbs), Ok(2.5));
    }

    #[test]
    fn zero_target_is_empty() {
        assert!(Setup::default().is_empty());
        assert!(!setup(60.0, Unit::Kg).is_empty());
    }
}
