use clap::{Parser, ValueEnum};
use footprint_core::{RawNumber, RawUserInput};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Estimate a daily carbon footprint from a few lifestyle inputs
///
/// Numeric values that cannot be read are treated as zero.
#[derive(Parser, Debug)]
#[command(name = "footprint")]
#[command(about = "Estimate a daily carbon footprint from a few lifestyle inputs")]
pub struct Args {
    /// Daily commute distance (km)
    #[arg(long)]
    pub commute_distance: Option<String>,

    /// Vehicle used for the commute: car, bus, bike or motorcycle
    #[arg(long)]
    pub vehicle: Option<String>,

    /// Meat consumption: high, medium, low or none
    #[arg(long)]
    pub meat: Option<String>,

    /// Share of locally sourced food (0-100)
    #[arg(long)]
    pub local_food: Option<String>,

    /// Electricity usage (kWh per month)
    #[arg(long)]
    pub electricity: Option<String>,

    /// Home heating: naturalGas, electric or renewable
    #[arg(long)]
    pub heating: Option<String>,

    /// Hours spent flying per year
    #[arg(long)]
    pub flight_hours: Option<String>,

    /// Shopping habits: high, medium or low
    #[arg(long)]
    pub shopping: Option<String>,

    /// TOML file with input values; command line flags take precedence
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// TOML file overriding emission coefficients
    #[arg(short, long)]
    pub coefficients: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pause before calculating (milliseconds)
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

impl Args {
    /// Form values given on the command line.
    pub fn flag_input(&self) -> RawUserInput {
        let number = |value: &Option<String>| value.clone().map(RawNumber::Text);

        RawUserInput {
            commute_distance: number(&self.commute_distance),
            vehicle_type: self.vehicle.clone(),
            meat_consumption: self.meat.clone(),
            local_food: number(&self.local_food),
            electricity_usage: number(&self.electricity),
            heating_type: self.heating.clone(),
            flight_hours: number(&self.flight_hours),
            shopping_habits: self.shopping.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_become_raw_input() {
        let args = Args::try_parse_from([
            "footprint",
            "--commute-distance",
            "20km",
            "--vehicle",
            "bus",
            "--local-food",
            "40",
            "--heating",
            "naturalGas",
        ])
        .unwrap();

        let raw = args.flag_input();

        assert_eq!(raw.commute_distance, Some(RawNumber::from("20km")));
        assert_eq!(raw.vehicle_type.as_deref(), Some("bus"));
        assert_eq!(raw.local_food, Some(RawNumber::from("40")));
        assert_eq!(raw.heating_type.as_deref(), Some("naturalGas"));
        assert_eq!(raw.meat_consumption, None);
        assert_eq!(raw.flight_hours, None);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["footprint"]).unwrap();

        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.delay_ms, 0);
        assert_eq!(args.flag_input(), RawUserInput::default());
    }

    #[test]
    fn test_json_format() {
        let args = Args::try_parse_from(["footprint", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
    }
}
