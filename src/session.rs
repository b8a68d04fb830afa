//! One questionnaire session
//!
//! The session owns its profile and threads it through the three steps
//! (transportation, home energy, food) into the calculator. It holds no
//! global state; callers create, mutate and drop it explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::try_compute_footprint;
use crate::config::ValidationConfig;
use crate::error::Result;
use crate::normalize::{normalize, Notice};
use crate::profile::{CarbonProfile, Field};
use crate::result::FootprintResult;

/// Questionnaire step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Transportation,
    HomeEnergy,
    Food,
}

impl Step {
    pub fn next(self) -> Step {
        match self {
            Step::Transportation => Step::HomeEnergy,
            Step::HomeEnergy | Step::Food => Step::Food,
        }
    }

    pub fn previous(self) -> Step {
        match self {
            Step::Transportation | Step::HomeEnergy => Step::Transportation,
            Step::Food => Step::HomeEnergy,
        }
    }

    /// Fields collected on this step
    pub fn fields(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| f.step() == self)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Step::Transportation => "Transportation",
            Step::HomeEnergy => "Home Energy",
            Step::Food => "Food",
        };
        f.write_str(label)
    }
}

/// Questionnaire state for a single user
#[derive(Debug, Clone)]
pub struct Session {
    config: ValidationConfig,
    profile: CarbonProfile,
    step: Step,
    result: Option<FootprintResult>,
    notices: Vec<Notice>,
}

impl Session {
    /// Start a session at the default profile
    pub fn new(config: ValidationConfig) -> Self {
        Self::with_profile(config, CarbonProfile::default())
    }

    /// Start a session from an already-normalized profile
    pub fn with_profile(config: ValidationConfig, profile: CarbonProfile) -> Self {
        Self {
            config,
            profile,
            step: Step::Transportation,
            result: None,
            notices: Vec::new(),
        }
    }

    pub fn profile(&self) -> &CarbonProfile {
        &self.profile
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Most recent calculation, if any
    pub fn result(&self) -> Option<&FootprintResult> {
        self.result.as_ref()
    }

    /// Notices raised since the session started or was last reset
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Normalize and store one answer
    ///
    /// Returns the notice raised for this value, if any. On error the profile
    /// is left unchanged.
    pub fn set(&mut self, field: Field, raw: f64) -> Result<Option<Notice>> {
        let normalized = normalize(raw, field, &self.config)?;
        self.profile.set(field, normalized.value);
        if let Some(notice) = normalized.notice {
            self.notices.push(notice);
        }
        Ok(normalized.notice)
    }

    pub fn next(&mut self) -> Step {
        self.step = self.step.next();
        self.step
    }

    pub fn back(&mut self) -> Step {
        self.step = self.step.previous();
        self.step
    }

    /// Calculate the footprint of the current profile and keep it
    pub fn calculate(&mut self) -> Result<FootprintResult> {
        let result = try_compute_footprint(&self.profile)?;
        self.result = Some(result);
        Ok(result)
    }

    /// Discard the profile and result, returning to the first step with defaults
    pub fn reset(&mut self) {
        tracing::debug!("Session reset to defaults");
        self.profile = CarbonProfile::default();
        self.step = Step::Transportation;
        self.result = None;
        self.notices.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
