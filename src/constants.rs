//! Emission factors, unit conversions and impact thresholds.
//!
//! These values are fixed for compatibility with previously published results.

/// kg CO2 emitted per gallon of gasoline burned.
pub const CAR_EMISSIONS_KG_PER_GALLON: f64 = 8.89;

/// kg CO2 per mile travelled on public transit.
pub const PUBLIC_TRANSPORT_KG_PER_MILE: f64 = 0.14;

/// kg CO2 per kWh of grid electricity.
pub const ELECTRICITY_KG_PER_KWH: f64 = 0.40;

/// kg CO2 per serving of meat.
pub const MEAT_KG_PER_SERVING: f64 = 3.00;

/// Each percentage point of food waste adds 1% of meat emissions.
pub const FOOD_WASTE_FACTOR: f64 = 0.01;

pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const KG_PER_TON: f64 = 1000.0;

/// Totals below this many tons are rated "Low".
pub const LOW_IMPACT_MAX_TONS: f64 = 5.0;

/// Totals below this many tons (and at least [`LOW_IMPACT_MAX_TONS`]) are rated "Moderate".
pub const MODERATE_IMPACT_MAX_TONS: f64 = 10.0;

/// Reference annual footprint of an average American, tons CO2e.
pub const AVERAGE_AMERICAN_TONS: f64 = 16.0;

/// Upper bound accepted for percentage-kind fields.
pub const MAX_PERCENTAGE: f64 = 100.0;
