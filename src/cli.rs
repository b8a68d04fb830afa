//! CLI argument parsing for carbon-footprint

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::normalize::PercentagePolicy;
use crate::profile::Field;

/// Output format for footprint results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "carbon-footprint")]
#[command(version)]
#[command(about = "Estimate a household's annual carbon footprint", long_about = None)]
pub struct Cli {
    /// Load answers from a TOML profile file (flags override file values)
    #[arg(short = 'p', long = "profile", value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Annual miles driven
    #[arg(long = "car-mileage", value_name = "MILES", allow_hyphen_values = true)]
    pub car_mileage: Option<f64>,

    /// Car fuel efficiency in miles per gallon
    #[arg(long = "car-efficiency", value_name = "MPG", allow_hyphen_values = true)]
    pub car_efficiency: Option<f64>,

    /// Annual miles on public transit
    #[arg(long = "public-transport", value_name = "MILES", allow_hyphen_values = true)]
    pub public_transport: Option<f64>,

    /// Monthly electricity usage in kWh
    #[arg(long = "electricity", value_name = "KWH", allow_hyphen_values = true)]
    pub electricity_usage: Option<f64>,

    /// Percentage of electricity from renewable sources
    #[arg(long = "renewable", value_name = "PERCENT", allow_hyphen_values = true)]
    pub renewable_percentage: Option<f64>,

    /// Meat servings per week
    #[arg(long = "meat", value_name = "SERVINGS", allow_hyphen_values = true)]
    pub meat_consumption: Option<f64>,

    /// Percentage of purchased food that is wasted
    #[arg(long = "food-waste", value_name = "PERCENT", allow_hyphen_values = true)]
    pub food_waste: Option<f64>,

    /// How to correct a percentage above 100
    #[arg(long = "percentage-policy", value_enum, default_value = "reset")]
    pub percentage_policy: PercentagePolicy,

    /// Reject values outside the questionnaire slider ranges
    #[arg(long = "strict-bounds")]
    pub strict_bounds: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Raw values given on the command line, in questionnaire order
    ///
    /// Signs are kept so that negative answers reach normalization and are
    /// clamped (or rejected, for efficiency) there.
    pub fn field_values(&self) -> Vec<(Field, f64)> {
        let values = [
            (Field::CarMileage, self.car_mileage),
            (Field::CarEfficiency, self.car_efficiency),
            (Field::PublicTransport, self.public_transport),
            (Field::ElectricityUsage, self.electricity_usage),
            (Field::RenewablePercentage, self.renewable_percentage),
            (Field::MeatConsumption, self.meat_consumption),
            (Field::FoodWaste, self.food_waste),
        ];
        values
            .into_iter()
            .filter_map(|(field, value)| value.map(|raw| (field, raw)))
            .collect()
    }
}
