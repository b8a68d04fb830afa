//! Carbon Footprint - household carbon footprint estimator
//!
//! This library estimates the annual CO2-equivalent emissions of a household
//! from seven questionnaire answers spread over three categories (transportation,
//! home energy, food), with input normalization, a guarded calculator, and
//! text/JSON/CSV renderers.
//!
//! ```
//! use carbon_footprint::profile::Field;
//! use carbon_footprint::result::ImpactLevel;
//! use carbon_footprint::session::Session;
//!
//! let mut session = Session::default();
//! session.set(Field::MeatConsumption, 10.0)?;
//! let result = session.calculate()?;
//! assert_eq!(result.impact_level(), ImpactLevel::Low);
//! # Ok::<(), carbon_footprint::error::FootprintError>(())
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod normalize;
pub mod profile;
pub mod result;
pub mod session;
pub mod text_output;

pub use calculator::{compute_footprint, try_compute_footprint};
pub use error::{FootprintError, Result};
pub use profile::CarbonProfile;
pub use result::FootprintResult;
