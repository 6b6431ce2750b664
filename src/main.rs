use barload_rs::{
    bar_load::BarLoad, plate::Plate, rounding_mode::RoundingMode, setup::Setup, unit::Unit,
    units::display_weight,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::ParseError};

const DEFAULT_LOG: &str = "barload=info,barload_rs=info";

/// Work out which plates go on each side of a barbell.
#[derive(Parser)]
#[command(name = "barload")]
struct Args {
    /// Total weight to lift, bar and collars included.
    weight: f64,

    #[arg(
        short,
        long,
        default_value_t = Unit::Kg,
        value_parser = clap::value_parser!(Unit)
    )]
    unit: Unit,

    /// How the weight is rounded when shown in the other unit.
    #[arg(
        short,
        long,
        default_value_t = RoundingMode::Nearest,
        value_parser = clap::value_parser!(RoundingMode)
    )]
    rounding: RoundingMode,

    /// Bar weight. Defaults to 20 for kg and 45 for lbs.
    #[arg(short, long)]
    bar: Option<f64>,

    /// Weight of one collar. Defaults to 2.5 for kg and none for lbs.
    #[arg(short, long)]
    collar: Option<f64>,

    #[arg(long, conflicts_with = "collar")]
    no_collars: bool,

    /// Kilogram plates, heaviest first, as WEIGHTxPAIRS.
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(Plate))]
    kg_plates: Vec<Plate>,

    /// Pound plates, heaviest first, as WEIGHTxPAIRS.
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(Plate))]
    lbs_plates: Vec<Plate>,
}

impl Args {
    fn setup(self) -> Setup {
        let defaults = Setup::for_unit(self.unit);

        let collar_weight = match (self.no_collars, self.collar) {
            (true, _) => 0.0,
            (false, Some(collar)) => collar,
            (false, None) => defaults.collar_weight,
        };

        Setup {
            total_weight: self.weight,
            rounding: self.rounding,
            bar_weight: self.bar.unwrap_or(defaults.bar_weight),
            collar_weight,
            plates_kg: match self.kg_plates.is_empty() {
                true => defaults.plates_kg.clone(),
                false => self.kg_plates,
            },
            plates_lbs: match self.lbs_plates.is_empty() {
                true => defaults.plates_lbs.clone(),
                false => self.lbs_plates,
            },
            ..defaults
        }
    }
}

fn print_load(load: &BarLoad) {
    println!("  per side: {load}");
}

/// Directives from `RUST_LOG` when set, otherwise info for this crate.
fn log_filter(directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => EnvFilter::try_new(DEFAULT_LOG),
    }
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref())?)
        .with_writer(std::io::stderr)
        .init();

    let setup = Args::parse().setup();

    if setup.is_empty() {
        info!("nothing to load");
        return Ok(());
    }

    println!("{}{}", display_weight(setup.total_weight), setup.unit);
    println!(
        "  bar {}{}, collars {}{}",
        display_weight(setup.bar_weight),
        setup.unit,
        display_weight(setup.collar_weight),
        setup.unit
    );
    print_load(&setup.primary());

    let conversion = setup.converted()?;
    println!("{}{}", display_weight(conversion.weight), conversion.unit);
    println!(
        "  bar {}{}, collars {}{}",
        display_weight(setup.converted_bar_weight()),
        conversion.unit,
        display_weight(setup.converted_collar_weight()),
        conversion.unit
    );
    print_load(&conversion.load);
    println!(
        "  Rounded {}: {}{}",
        setup.rounding,
        display_weight(conversion.rounded),
        conversion.unit
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_keeps_env_directives() {
        let filter = log_filter(Some("barload_rs=debug")).unwrap().to_string();
        assert!(filter.contains("barload_rs=debug"), "{filter}");
        assert!(!filter.contains("barload_rs=info"), "{filter}");
    }

    #[test]
    fn log_filter_defaults_when_unset() {
        for directives in [None, Some(""), Some("  ")] {
            let filter = log_filter(directives).unwrap().to_string();
            assert!(filter.contains("barload_rs=info"), "{filter}");
            assert!(filter.contains("barload=info"), "{filter}");
        }
    }

    #[test]
    fn log_filter_rejects_bad_directives() {
        assert!(log_filter(Some("barload_rs=loud")).is_err());
    }
}
