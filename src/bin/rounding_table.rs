use barload_rs::{rounding_mode::RoundingMode, units::plate_round};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let smallest_plate = args.next().map_or(Ok(1.25), |a| a.parse::<f64>())?;
    let from = args.next().map_or(Ok(95.0), |a| a.parse::<f64>())?;
    let to = args.next().map_or(Ok(110.0), |a| a.parse::<f64>())?;

    anyhow::ensure!(smallest_plate > 0.0, "smallest plate must be positive");

    println!("=== plate_round with {smallest_plate} plates ===\n");
    println!(
        "{:>8} {}",
        "weight",
        RoundingMode::ALL.iter().map(|m| format!("{m:>8}")).join(" ")
    );

    let mut weight = from;
    while weight <= to {
        let rounded = RoundingMode::ALL
            .iter()
            .map(|&mode| format!("{:>8}", plate_round(weight, smallest_plate, mode)))
            .join(" ");
        println!("{weight:>8} {rounded}");
        weight += 0.5;
    }

    Ok(())
}
