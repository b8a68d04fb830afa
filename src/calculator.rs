//! Footprint calculation
//!
//! All arithmetic is plain f64; nothing is rounded here. Rounding to two
//! decimals is a presentation concern (see [`crate::text_output`]).

use crate::constants::{
    CAR_EMISSIONS_KG_PER_GALLON, ELECTRICITY_KG_PER_KWH, FOOD_WASTE_FACTOR, KG_PER_TON,
    MEAT_KG_PER_SERVING, MONTHS_PER_YEAR, PUBLIC_TRANSPORT_KG_PER_MILE, WEEKS_PER_YEAR,
};
use crate::error::{FootprintError, Result};
use crate::profile::{CarbonProfile, Field, FoodInput, HomeEnergyInput, TransportationInput};
use crate::result::FootprintResult;

/// Annual transportation emissions, tons CO2e
pub fn transportation_tons(input: &TransportationInput) -> f64 {
    let gallons_burned = input.car_mileage / input.car_efficiency;
    let car_kg = gallons_burned * CAR_EMISSIONS_KG_PER_GALLON;
    let transit_kg = input.public_transport * PUBLIC_TRANSPORT_KG_PER_MILE;
    (car_kg + transit_kg) / KG_PER_TON
}

/// Annual home electricity emissions, tons CO2e
pub fn home_energy_tons(input: &HomeEnergyInput) -> f64 {
    let annual_kg = input.electricity_usage
        * MONTHS_PER_YEAR
        * ELECTRICITY_KG_PER_KWH
        * (1.0 - input.renewable_percentage / 100.0);
    annual_kg / KG_PER_TON
}

/// Annual food emissions (meat plus waste uplift), tons CO2e
pub fn food_tons(input: &FoodInput) -> f64 {
    let meat_kg = input.meat_consumption * WEEKS_PER_YEAR * MEAT_KG_PER_SERVING;
    let waste_uplift_kg = meat_kg * input.food_waste * FOOD_WASTE_FACTOR;
    (meat_kg + waste_uplift_kg) / KG_PER_TON
}

/// Compute the annual footprint of a profile
///
/// Pure and deterministic. Requires `car_efficiency > 0` and every other
/// field non-negative; no check is made here. Callers accepting unchecked
/// input should use [`try_compute_footprint`].
///
/// # Example
/// ```
/// use carbon_footprint::calculator::compute_footprint;
/// use carbon_footprint::profile::CarbonProfile;
///
/// let result = compute_footprint(&CarbonProfile::default());
/// assert!((result.transportation - 1.918).abs() < 1e-9);
/// ```
pub fn compute_footprint(profile: &CarbonProfile) -> FootprintResult {
    let transportation = transportation_tons(&profile.transportation);
    let home_energy = home_energy_tons(&profile.home_energy);
    let food = food_tons(&profile.food);
    FootprintResult::from_subtotals(transportation, home_energy, food)
}

/// Compute the footprint after checking the calculator's preconditions
///
/// # Errors
/// - [`FootprintError::InvalidEfficiency`] if `car_efficiency` is not a positive finite number
/// - [`FootprintError::NonFiniteInput`] if any other field is NaN or infinite
pub fn try_compute_footprint(profile: &CarbonProfile) -> Result<FootprintResult> {
    let efficiency = profile.transportation.car_efficiency;
    if !(efficiency.is_finite() && efficiency > 0.0) {
        return Err(FootprintError::InvalidEfficiency(efficiency));
    }

    if let Some(field) = Field::ALL
        .into_iter()
        .find(|field| !profile.get(*field).is_finite())
    {
        return Err(FootprintError::NonFiniteInput { field });
    }

    let result = compute_footprint(profile);
    tracing::debug!(
        "Computed footprint: transportation={:.4}t home_energy={:.4}t food={:.4}t total={:.4}t",
        result.transportation,
        result.home_energy,
        result.food,
        result.total
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn zero_profile() -> CarbonProfile {
        CarbonProfile {
            transportation: TransportationInput {
                car_mileage: 0.0,
                car_efficiency: 25.0,
                public_transport: 0.0,
            },
            home_energy: HomeEnergyInput {
                electricity_usage: 0.0,
                renewable_percentage: 0.0,
            },
            food: FoodInput {
                meat_consumption: 0.0,
                food_waste: 0.0,
            },
        }
    }

    #[test]
    fn test_default_profile_golden_values() {
        let result = compute_footprint(&CarbonProfile::default());
        assert!((result.transportation - 1.918).abs() < TOLERANCE);
        assert!((result.home_energy - 1.152).abs() < TOLERANCE);
        assert!((result.food - 0.5382).abs() < TOLERANCE);
        assert!((result.total - 3.6082).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_profile_total_is_exactly_zero() {
        let result = compute_footprint(&zero_profile());
        assert_eq!(result.total, 0.0);
        assert_eq!(result.transportation, 0.0);
        assert_eq!(result.home_energy, 0.0);
        assert_eq!(result.food, 0.0);
    }

    #[test]
    fn test_transportation_car_only() {
        let input = TransportationInput {
            car_mileage: 1000.0,
            car_efficiency: 10.0,
            public_transport: 0.0,
        };
        // 100 gallons * 8.89 kg
        assert!((transportation_tons(&input) - 0.889).abs() < TOLERANCE);
    }

    #[test]
    fn test_transportation_transit_only() {
        let input = TransportationInput {
            car_mileage: 0.0,
            car_efficiency: 30.0,
            public_transport: 10_000.0,
        };
        assert!((transportation_tons(&input) - 1.4).abs() < TOLERANCE);
    }

    #[test]
    fn test_fully_renewable_home_is_zero() {
        let input = HomeEnergyInput {
            electricity_usage: 800.0,
            renewable_percentage: 100.0,
        };
        assert_eq!(home_energy_tons(&input), 0.0);
    }

    #[test]
    fn test_home_energy_no_renewables() {
        let input = HomeEnergyInput {
            electricity_usage: 1000.0,
            renewable_percentage: 0.0,
        };
        // 12000 kWh * 0.4 kg
        assert!((home_energy_tons(&input) - 4.8).abs() < TOLERANCE);
    }

    #[test]
    fn test_food_waste_uplift() {
        let no_waste = FoodInput {
            meat_consumption: 7.0,
            food_waste: 0.0,
        };
        let half_waste = FoodInput {
            meat_consumption: 7.0,
            food_waste: 50.0,
        };
        // 7 * 52 * 3 = 1092 kg
        assert!((food_tons(&no_waste) - 1.092).abs() < TOLERANCE);
        assert!((food_tons(&half_waste) - 1.638).abs() < TOLERANCE);
    }

    #[test]
    fn test_food_waste_without_meat_is_zero() {
        let input = FoodInput {
            meat_consumption: 0.0,
            food_waste: 50.0,
        };
        assert_eq!(food_tons(&input), 0.0);
    }

    #[test]
    fn test_compute_is_bit_identical_across_calls() {
        let profile = CarbonProfile::default();
        let first = compute_footprint(&profile);
        let second = compute_footprint(&profile);
        assert_eq!(first.total.to_bits(), second.total.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_try_compute_rejects_zero_efficiency() {
        let mut profile = CarbonProfile::default();
        profile.set(Field::CarEfficiency, 0.0);
        assert_eq!(
            try_compute_footprint(&profile).unwrap_err(),
            FootprintError::InvalidEfficiency(0.0)
        );
    }

    #[test]
    fn test_try_compute_rejects_negative_efficiency() {
        let mut profile = CarbonProfile::default();
        profile.set(Field::CarEfficiency, -12.0);
        assert!(try_compute_footprint(&profile).is_err());
    }

    #[test]
    fn test_try_compute_rejects_nan_field() {
        let mut profile = CarbonProfile::default();
        profile.set(Field::FoodWaste, f64::NAN);
        assert_eq!(
            try_compute_footprint(&profile).unwrap_err(),
            FootprintError::NonFiniteInput {
                field: Field::FoodWaste
            }
        );
    }

    #[test]
    fn test_try_compute_matches_unguarded() {
        let profile = CarbonProfile::default();
        assert_eq!(
            try_compute_footprint(&profile).unwrap(),
            compute_footprint(&profile)
        );
    }

    #[test]
    fn test_unguarded_zero_efficiency_is_non_finite() {
        let mut profile = CarbonProfile::default();
        profile.set(Field::CarEfficiency, 0.0);
        assert!(!compute_footprint(&profile).total.is_finite());
    }
}
