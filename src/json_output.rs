//! JSON output format for footprint results

use serde::{Deserialize, Serialize};

use crate::normalize::Notice;
use crate::profile::CarbonProfile;
use crate::result::{CategoryShare, FootprintResult, ImpactLevel};

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Inputs the result was computed from, after normalization
    pub profile: CarbonProfile,
    /// Unrounded subtotals and total, tons CO2e per year
    pub result: FootprintResult,
    pub impact_level: ImpactLevel,
    /// Share of the total per category
    pub shares: Vec<CategoryShare>,
    /// Notices raised while accepting input
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notices: Vec<JsonNotice>,
}

/// A notice with its human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonNotice {
    #[serde(flatten)]
    pub notice: Notice,
    pub message: String,
}

impl JsonOutput {
    pub fn new(profile: CarbonProfile, result: FootprintResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "carbon-footprint-json-v1".to_string(),
            profile,
            impact_level: result.impact_level(),
            shares: result.shares(),
            result,
            notices: Vec::new(),
        }
    }

    pub fn add_notice(&mut self, notice: Notice) {
        self.notices.push(JsonNotice {
            message: notice.to_string(),
            notice,
        });
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
