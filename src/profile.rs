//! Questionnaire input records
//!
//! A [`CarbonProfile`] holds one complete questionnaire response: six
//! user-supplied quantities grouped by footprint category. Values stored here
//! are expected to have passed through [`crate::normalize`] first.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::Step;

/// Transportation answers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportationInput {
    /// Annual miles driven
    pub car_mileage: f64,
    /// Miles per gallon, must be > 0
    pub car_efficiency: f64,
    /// Annual miles on public transit
    pub public_transport: f64,
}

impl Default for TransportationInput {
    fn default() -> Self {
        Self {
            car_mileage: 5000.0,
            car_efficiency: 25.0,
            public_transport: 1000.0,
        }
    }
}

/// Home energy answers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeEnergyInput {
    /// Monthly kWh
    pub electricity_usage: f64,
    /// Share of electricity from renewable sources, 0-100
    pub renewable_percentage: f64,
}

impl Default for HomeEnergyInput {
    fn default() -> Self {
        Self {
            electricity_usage: 300.0,
            renewable_percentage: 20.0,
        }
    }
}

/// Food answers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodInput {
    /// Meat servings per week
    pub meat_consumption: f64,
    /// Percentage of purchased food that is wasted, 0-100
    pub food_waste: f64,
}

impl Default for FoodInput {
    fn default() -> Self {
        Self {
            meat_consumption: 3.0,
            food_waste: 15.0,
        }
    }
}

/// One complete questionnaire response
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonProfile {
    pub transportation: TransportationInput,
    pub home_energy: HomeEnergyInput,
    pub food: FoodInput,
}

impl CarbonProfile {
    /// Read a single field
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::CarMileage => self.transportation.car_mileage,
            Field::CarEfficiency => self.transportation.car_efficiency,
            Field::PublicTransport => self.transportation.public_transport,
            Field::ElectricityUsage => self.home_energy.electricity_usage,
            Field::RenewablePercentage => self.home_energy.renewable_percentage,
            Field::MeatConsumption => self.food.meat_consumption,
            Field::FoodWaste => self.food.food_waste,
        }
    }

    /// Overwrite a single field with an already-normalized value
    pub fn set(&mut self, field: Field, value: f64) {
        let slot = match field {
            Field::CarMileage => &mut self.transportation.car_mileage,
            Field::CarEfficiency => &mut self.transportation.car_efficiency,
            Field::PublicTransport => &mut self.transportation.public_transport,
            Field::ElectricityUsage => &mut self.home_energy.electricity_usage,
            Field::RenewablePercentage => &mut self.home_energy.renewable_percentage,
            Field::MeatConsumption => &mut self.food.meat_consumption,
            Field::FoodWaste => &mut self.food.food_waste,
        };
        *slot = value;
    }
}

/// How a field's raw value is normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative amount
    Quantity,
    /// Non-negative, at most 100
    Percentage,
    /// Strictly positive
    Efficiency,
}

/// Slider range used by the form layer for a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Identifies one of the questionnaire inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    CarMileage,
    CarEfficiency,
    PublicTransport,
    ElectricityUsage,
    RenewablePercentage,
    MeatConsumption,
    FoodWaste,
}

impl Field {
    /// All fields in questionnaire order
    pub const ALL: [Field; 7] = [
        Field::CarMileage,
        Field::CarEfficiency,
        Field::PublicTransport,
        Field::ElectricityUsage,
        Field::RenewablePercentage,
        Field::MeatConsumption,
        Field::FoodWaste,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::CarEfficiency => FieldKind::Efficiency,
            Field::RenewablePercentage | Field::FoodWaste => FieldKind::Percentage,
            _ => FieldKind::Quantity,
        }
    }

    /// The questionnaire step that collects this field
    pub fn step(self) -> Step {
        match self {
            Field::CarMileage | Field::CarEfficiency | Field::PublicTransport => {
                Step::Transportation
            }
            Field::ElectricityUsage | Field::RenewablePercentage => Step::HomeEnergy,
            Field::MeatConsumption | Field::FoodWaste => Step::Food,
        }
    }

    pub fn slider_bounds(self) -> SliderBounds {
        let (min, max, step) = match self {
            Field::CarMileage => (0.0, 50_000.0, 100.0),
            Field::CarEfficiency => (10.0, 60.0, 1.0),
            Field::PublicTransport => (0.0, 10_000.0, 100.0),
            Field::ElectricityUsage => (0.0, 1_000.0, 10.0),
            Field::RenewablePercentage => (0.0, 100.0, 5.0),
            Field::MeatConsumption => (0.0, 21.0, 1.0),
            Field::FoodWaste => (0.0, 50.0, 1.0),
        };
        SliderBounds { min, max, step }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::CarMileage => "car_mileage",
            Field::CarEfficiency => "car_efficiency",
            Field::PublicTransport => "public_transport",
            Field::ElectricityUsage => "electricity_usage",
            Field::RenewablePercentage => "renewable_percentage",
            Field::MeatConsumption => "meat_consumption",
            Field::FoodWaste => "food_waste",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_questionnaire_defaults() {
        let profile = CarbonProfile::default();
        assert_eq!(profile.transportation.car_mileage, 5000.0);
        assert_eq!(profile.transportation.car_efficiency, 25.0);
        assert_eq!(profile.transportation.public_transport, 1000.0);
        assert_eq!(profile.home_energy.electricity_usage, 300.0);
        assert_eq!(profile.home_energy.renewable_percentage, 20.0);
        assert_eq!(profile.food.meat_consumption, 3.0);
        assert_eq!(profile.food.food_waste, 15.0);
    }

    #[test]
    fn test_get_set_every_field() {
        let mut profile = CarbonProfile::default();
        for (i, field) in Field::ALL.iter().enumerate() {
            let value = 11.0 + i as f64;
            profile.set(*field, value);
            assert_eq!(profile.get(*field), value);
        }
    }

    #[test]
    fn test_set_touches_only_one_field() {
        let mut profile = CarbonProfile::default();
        profile.set(Field::FoodWaste, 40.0);
        assert_eq!(profile.food.food_waste, 40.0);
        assert_eq!(profile.food.meat_consumption, 3.0);
        assert_eq!(profile.home_energy, HomeEnergyInput::default());
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(Field::CarEfficiency.kind(), FieldKind::Efficiency);
        assert_eq!(Field::RenewablePercentage.kind(), FieldKind::Percentage);
        assert_eq!(Field::FoodWaste.kind(), FieldKind::Percentage);
        assert_eq!(Field::CarMileage.kind(), FieldKind::Quantity);
        assert_eq!(Field::MeatConsumption.kind(), FieldKind::Quantity);
    }

    #[test]
    fn test_field_steps() {
        assert_eq!(Field::PublicTransport.step(), Step::Transportation);
        assert_eq!(Field::RenewablePercentage.step(), Step::HomeEnergy);
        assert_eq!(Field::FoodWaste.step(), Step::Food);
    }

    #[test]
    fn test_efficiency_slider_bounds() {
        let bounds = Field::CarEfficiency.slider_bounds();
        assert!(bounds.contains(10.0));
        assert!(bounds.contains(60.0));
        assert!(!bounds.contains(9.9));
        assert!(!bounds.contains(61.0));
    }

    #[test]
    fn test_partial_toml_section_uses_defaults() {
        let profile: CarbonProfile = toml::from_str("[food]\nmeat_consumption = 7\n").unwrap();
        assert_eq!(profile.food.meat_consumption, 7.0);
        assert_eq!(profile.food.food_waste, 15.0);
        assert_eq!(profile.transportation, TransportationInput::default());
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::RenewablePercentage.to_string(), "renewable_percentage");
    }
}
