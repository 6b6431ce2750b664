use crate::bar_load::{BarLoad, weight_to_bar_load};
use crate::plate::Plate;
use crate::rounding_mode::RoundingMode;
use crate::units::{display_weight, kg_to_lbs, lbs_to_kg, plate_round};

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Plate;
        type BarLoad;

        #[swift_bridge(init)]
        fn new(weight: f64, pairs: u32) -> Plate;

        fn kg_to_lbs(kg: f64) -> f64;
        fn lbs_to_kg(lbs: f64) -> f64;
        fn display_weight(weight: f64) -> String;
        fn round_to_plates(weight: f64, smallest_plate: f64, mode: &str) -> Option<f64>;
        fn bar_load(
            weight: f64,
            plates: Vec<Plate>,
            bar_weight: f64,
            collar_weight: f64,
        ) -> BarLoad;

        fn plate_weights(self: &BarLoad) -> Vec<f64>;
        fn remainder_text(self: &BarLoad) -> Option<String>;
    }
}

/// `None` when `mode` is not a rounding mode name.
fn round_to_plates(weight: f64, smallest_plate: f64, mode: &str) -> Option<f64> {
    let mode = mode.parse::<RoundingMode>().ok()?;
    Some(plate_round(weight, smallest_plate, mode))
}

fn bar_load(weight: f64, plates: Vec<Plate>, bar_weight: f64, collar_weight: f64) -> BarLoad {
    weight_to_bar_load(weight, &plates, bar_weight, collar_weight)
}

impl BarLoad {
    fn plate_weights(&self) -> Vec<f64> {
        self.plates().to_vec()
    }

    fn remainder_text(&self) -> Option<String> {
        self.remainder().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_plates_parses_mode() {
        assert_eq!(round_to_plates(103.0, 2.5, "nearest"), Some(105.0));
        assert_eq!(round_to_plates(101.0, 2.5, "down"), Some(100.0));
        assert_eq!(round_to_plates(103.0, 2.5, "closest"), None);
    }

    #[test]
    fn bar_load_exposes_plates_and_remainder() {
        let load = bar_load(100.0, vec![Plate::new(20.0, 1)], 20.0, 2.5);
        assert_eq!(load.plate_weights(), vec![20.0]);
        assert_eq!(load.remainder_text(), Some("17.500".to_string()));
    }
}
