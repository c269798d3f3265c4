//! Mapping between the teaching controls and machine quantities.
//!
//! Two virtual controls drive the operating point:
//! - **Governor** (mechanical power input) sets active power P
//! - **Excitation** (field current) sets reactive power Q
//!
//! Both controls are percentages in `[0, 100]`. Out-of-range percentages are
//! clamped silently; that is an input-range guard, not a physics violation.
//! Response is instantaneous and memoryless: there are no actuator dynamics.

pub mod mapping;
pub mod power_factor;
pub mod range;

pub use mapping::{
    control_position_for, derive_operating_point, excitation_to_q, governor_to_p,
    p_to_governor, q_to_excitation, ControlPosition,
};
pub use power_factor::q_for_power_factor;
pub use range::ControllerRange;
