//! pq-core: machine capability geometry for the P/Q teaching tool.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI angle type + conversions)
//! - limits (capability region and its projections)
//! - operating_point (P/Q point, derived readings, clamp orchestration)
//! - error (shared error types)

pub mod error;
pub mod limits;
pub mod numeric;
pub mod operating_point;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use limits::MachineLimits;
pub use numeric::*;
pub use operating_point::{LimitViolation, OperatingPoint};
pub use units::*;
