//! Shared application service layer for the P/Q teaching tool.
//!
//! Both the CLI and the GUI go through this crate: it owns the preset
//! catalog, the control session, the numeric readout and the chart geometry,
//! so front ends only collect input and draw.

pub mod chart;
pub mod error;
pub mod readout;
pub mod scenarios;
pub mod session;

// Re-export key types for convenience
pub use chart::{pf_ray, rating_arc, ChartGeometry, PfRay, DEFAULT_PF_ANNOTATIONS};
pub use error::{AppError, AppResult};
pub use readout::{Readout, HINTS, SIGN_CONVENTION, UNDEFINED};
pub use scenarios::{
    capacitive_support, find_scenario, nominal_pf_085_lag, scenario_list, voltage_support,
    Scenario,
};
pub use session::{ControlSession, Evaluation, RATING_RANGE_MVA};
