//! Validation settings and TOML profile files
//!
//! A profile file mirrors the questionnaire sections:
//!
//! ```toml
//! [transportation]
//! car_mileage = 8000
//! car_efficiency = 32
//! public_transport = 500
//!
//! [home_energy]
//! electricity_usage = 450
//! renewable_percentage = 40
//!
//! [food]
//! meat_consumption = 5
//! food_waste = 10
//! ```
//!
//! Missing sections or keys fall back to the questionnaire defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FootprintError, Result};
use crate::normalize::{normalize_profile, Notice, PercentagePolicy};
use crate::profile::CarbonProfile;

/// Settings applied whenever a raw value is accepted into a profile
///
/// # Example
/// ```
/// use carbon_footprint::config::ValidationConfig;
/// use carbon_footprint::normalize::PercentagePolicy;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.percentage_policy, PercentagePolicy::ResetToZero);
/// assert!(!config.strict_bounds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Correction applied to a percentage above 100
    pub percentage_policy: PercentagePolicy,

    /// Reject values outside each field's slider range instead of accepting them
    ///
    /// Default: false (only non-negativity and the percentage rule apply)
    pub strict_bounds: bool,
}

impl ValidationConfig {
    /// Configuration that mirrors the reference questionnaire exactly
    pub fn reference() -> Self {
        Self::default()
    }

    /// Configuration for unrestricted input: clamp percentages and enforce slider ranges
    pub fn strict() -> Self {
        Self {
            percentage_policy: PercentagePolicy::ClampToMax,
            strict_bounds: true,
        }
    }
}

/// A profile loaded from disk after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub profile: CarbonProfile,
    pub notices: Vec<Notice>,
}

/// Parse a profile from TOML text and normalize every field
pub fn parse_profile(content: &str, config: &ValidationConfig) -> Result<LoadedProfile> {
    let raw: CarbonProfile =
        toml::from_str(content).map_err(|e| FootprintError::ProfileParse(e.to_string()))?;
    let (profile, notices) = normalize_profile(&raw, config)?;
    Ok(LoadedProfile { profile, notices })
}

/// Load a profile from a TOML file
///
/// # Errors
/// Returns error if the file can't be read, isn't valid TOML, or contains a
/// value normalization rejects (e.g. `car_efficiency = 0`).
pub fn load_profile<P: AsRef<Path>>(path: P, config: &ValidationConfig) -> Result<LoadedProfile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FootprintError::ProfileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    tracing::debug!("Loaded profile file {}", path.display());
    parse_profile(&content, config)
}
