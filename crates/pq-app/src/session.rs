//! Control session: slider state owned by a front end.
//!
//! The session holds what the user has set (rating, control positions, preset
//! choice). Everything shown is recomputed from it by [`ControlSession::evaluate`],
//! which must be called again after any mutation.

use pq_controls::{control_position_for, derive_operating_point, ControlPosition};
use pq_core::{LimitViolation, MachineLimits, OperatingPoint};
use pq_project::AppConfig;

use crate::chart::{ChartGeometry, DEFAULT_PF_ANNOTATIONS};
use crate::error::AppResult;
use crate::readout::Readout;
use crate::scenarios::{find_scenario, scenario_list, Scenario};

/// Range offered by the rating slider (MVA).
pub const RATING_RANGE_MVA: (f64, f64) = (10.0, 100.0);

#[derive(Debug, Clone)]
pub struct ControlSession {
    config: AppConfig,
    pub rating_mva: f64,
    pub position: ControlPosition,
    selected_preset: Option<String>,
}

/// Result of one pass over the control-to-display pipeline.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub limits: MachineLimits,
    pub point: OperatingPoint,
    pub violations: Vec<LimitViolation>,
    pub readout: Readout,
}

impl Evaluation {
    pub fn messages(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.message()).collect()
    }

    pub fn chart(&self) -> ChartGeometry {
        ChartGeometry::new(&self.limits, &self.point, &DEFAULT_PF_ANNOTATIONS)
    }
}

impl ControlSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            rating_mva: config.s_rated_mva,
            config,
            position: ControlPosition::default(),
            selected_preset: None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replace the configuration, e.g. after opening another file.
    ///
    /// The rating follows the new file; control positions are kept.
    pub fn set_config(&mut self, config: AppConfig) {
        self.rating_mva = config.s_rated_mva;
        self.config = config;
        self.selected_preset = None;
    }

    /// Configured machine with the session's rating.
    pub fn limits(&self) -> MachineLimits {
        self.config.with_rating(self.rating_mva).limits()
    }

    pub fn scenarios(&self) -> Vec<Scenario> {
        scenario_list(&self.limits())
    }

    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    pub fn selected_scenario(&self) -> Option<Scenario> {
        let name = self.selected_preset.as_deref()?;
        find_scenario(&self.limits(), name).ok()
    }

    /// Switch preset. Picking a different preset moves both controls to its
    /// operating point; picking the current one again leaves them alone so
    /// manual adjustments survive. Returns whether the controls moved.
    pub fn select_preset(&mut self, name: Option<&str>) -> AppResult<bool> {
        if name == self.selected_preset.as_deref() {
            return Ok(false);
        }

        let Some(name) = name else {
            self.selected_preset = None;
            return Ok(false);
        };

        let limits = self.limits();
        let scenario = find_scenario(&limits, name)?;
        self.position = control_position_for(&scenario.operating_point, &limits);
        self.selected_preset = Some(scenario.name);
        tracing::debug!(
            preset = name,
            governor = self.position.governor_percent,
            excitation = self.position.excitation_percent,
            "preset applied"
        );
        Ok(true)
    }

    /// Change the apparent power rating; the rest of the machine is unchanged.
    pub fn set_rating(&mut self, rating_mva: f64) -> AppResult<()> {
        self.limits().with_rating(rating_mva).validate()?;
        self.rating_mva = rating_mva;
        Ok(())
    }

    pub fn evaluate(&self) -> Evaluation {
        let limits = self.limits();
        let (point, violations) = derive_operating_point(
            self.position.governor_percent,
            self.position.excitation_percent,
            &limits,
        );
        Evaluation {
            readout: Readout::from_point(&point, &limits),
            limits,
            point,
            violations,
        }
    }
}

impl Default for ControlSession {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
