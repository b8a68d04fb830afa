//! Input normalization applied when a value is accepted into a profile
//!
//! Rules, in order:
//! - non-finite input is rejected
//! - every value is clamped to be non-negative
//! - car efficiency must then be strictly positive
//! - a percentage above 100 is corrected per [`PercentagePolicy`] and reported
//!   through a [`Notice`] rather than an error
//! - with strict bounds enabled, the result must lie within the field's slider range

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::config::ValidationConfig;
use crate::constants::MAX_PERCENTAGE;
use crate::error::{FootprintError, Result};
use crate::profile::{CarbonProfile, Field, FieldKind};

/// What to do with a percentage above 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PercentagePolicy {
    /// Replace the value with 0 (matches the reference questionnaire)
    #[default]
    #[value(name = "reset")]
    ResetToZero,
    /// Replace the value with 100
    #[value(name = "clamp")]
    ClampToMax,
}

/// Non-fatal, user-facing notice raised during normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    PercentageOutOfRange {
        field: Field,
        raw: f64,
        corrected: f64,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PercentageOutOfRange {
                field, corrected, ..
            } => write!(
                f,
                "Invalid percentage for {}: the maximum allowed is 100%. Value has been set to {}.",
                field, corrected
            ),
        }
    }
}

/// A value ready to be stored, plus any notice the caller should surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    pub value: f64,
    pub notice: Option<Notice>,
}

/// Normalize a raw value for `field`
///
/// # Example
/// ```
/// use carbon_footprint::config::ValidationConfig;
/// use carbon_footprint::normalize::normalize;
/// use carbon_footprint::profile::Field;
///
/// let n = normalize(150.0, Field::RenewablePercentage, &ValidationConfig::default()).unwrap();
/// assert_eq!(n.value, 0.0);
/// assert!(n.notice.is_some());
/// ```
pub fn normalize(raw: f64, field: Field, config: &ValidationConfig) -> Result<Normalized> {
    if !raw.is_finite() {
        return Err(FootprintError::NonFiniteInput { field });
    }

    let mut value = raw.max(0.0);
    if value != raw {
        tracing::debug!("Clamped negative {} ({}) to 0", field, raw);
    }

    let mut notice = None;
    match field.kind() {
        FieldKind::Efficiency => {
            if value <= 0.0 {
                return Err(FootprintError::InvalidEfficiency(raw));
            }
        }
        FieldKind::Percentage => {
            if value > MAX_PERCENTAGE {
                let corrected = match config.percentage_policy {
                    PercentagePolicy::ResetToZero => 0.0,
                    PercentagePolicy::ClampToMax => MAX_PERCENTAGE,
                };
                tracing::warn!(
                    "Percentage {} for {} exceeds 100, using {}",
                    raw,
                    field,
                    corrected
                );
                value = corrected;
                notice = Some(Notice::PercentageOutOfRange {
                    field,
                    raw,
                    corrected,
                });
            }
        }
        FieldKind::Quantity => {}
    }

    if config.strict_bounds {
        let bounds = field.slider_bounds();
        if !bounds.contains(value) {
            return Err(FootprintError::OutOfBounds {
                field,
                value,
                min: bounds.min,
                max: bounds.max,
            });
        }
    }

    Ok(Normalized { value, notice })
}

/// Normalize every field of `raw`, collecting notices in questionnaire order
pub fn normalize_profile(
    raw: &CarbonProfile,
    config: &ValidationConfig,
) -> Result<(CarbonProfile, Vec<Notice>)> {
    let mut profile = *raw;
    let mut notices = Vec::new();
    for field in Field::ALL {
        let normalized = normalize(raw.get(field), field, config)?;
        profile.set(field, normalized.value);
        notices.extend(normalized.notice);
    }
    Ok((profile, notices))
}

fn non_numeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"))
}

/// Parse free-text numeric input the way the questionnaire text boxes do
///
/// Everything except digits and the first decimal point is discarded, so the
/// result is never negative. Empty input reads as 0. An absurdly long digit
/// string parses to infinity, which [`normalize`] then rejects.
///
/// # Example
/// ```
/// use carbon_footprint::normalize::parse_numeric_input;
///
/// assert_eq!(parse_numeric_input("1,250 miles"), 1250.0);
/// assert_eq!(parse_numeric_input("007.5.1"), 7.51);
/// assert_eq!(parse_numeric_input(""), 0.0);
/// ```
pub fn parse_numeric_input(text: &str) -> f64 {
    let stripped = non_numeric().replace_all(text, "");

    let mut sanitized = match stripped.find('.') {
        Some(first) => {
            let (head, tail) = stripped.split_at(first + 1);
            format!("{}{}", head, tail.replace('.', ""))
        }
        None => stripped.into_owned(),
    };

    if sanitized != "0" && !sanitized.is_empty() {
        sanitized = sanitized.trim_start_matches('0').to_string();
        if sanitized.starts_with('.') {
            sanitized.insert(0, '0');
        }
    }

    if sanitized.is_empty() {
        sanitized.push('0');
    }

    // Only digits and at most one '.' remain, always led by a digit
    sanitized.parse::<f64>().unwrap_or(0.0)
}
