//! Numeric readout of an operating point for tables and tooltips.

use pq_core::{MachineLimits, OperatingPoint};

/// Placeholder for a reading that is undefined at the origin.
pub const UNDEFINED: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub p_mw: f64,
    pub q_mvar: f64,
    pub s_mva: f64,
    pub power_factor: Option<f64>,
    pub angle_deg: Option<f64>,
    pub stator_current_pu: f64,
}

impl Readout {
    pub fn from_point(point: &OperatingPoint, limits: &MachineLimits) -> Self {
        Self {
            p_mw: point.p_mw,
            q_mvar: point.q_mvar,
            s_mva: point.apparent_power(),
            power_factor: point.power_factor(),
            angle_deg: point.angle_degrees(),
            stator_current_pu: point.stator_current_pu(limits),
        }
    }

    pub fn pf_text(&self) -> String {
        self.power_factor
            .map(|pf| format!("{pf:+.3}"))
            .unwrap_or_else(|| UNDEFINED.to_string())
    }

    pub fn angle_text(&self) -> String {
        self.angle_deg
            .map(|phi| format!("{phi:+.1}"))
            .unwrap_or_else(|| UNDEFINED.to_string())
    }

    /// (quantity, value) rows for the numerics table.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("P (MW)", format!("{:.2}", self.p_mw)),
            ("Q (MVAr)", format!("{:.2}", self.q_mvar)),
            ("S (MVA)", format!("{:.2}", self.s_mva)),
            ("PF", self.pf_text()),
            ("ϕ (deg)", self.angle_text()),
            ("I_stator (pu)", format!("{:.3}", self.stator_current_pu)),
        ]
    }

    /// Hover text for the operating-point marker.
    pub fn tooltip(&self) -> String {
        let angle = match self.angle_deg {
            Some(phi) => format!("ϕ = {phi:+.1}°"),
            None => format!("ϕ = {UNDEFINED}"),
        };
        [
            format!("P = {:.2} MW", self.p_mw),
            format!("Q = {:.2} MVAr", self.q_mvar),
            format!("S = {:.2} MVA", self.s_mva),
            format!("PF = {}", self.pf_text()),
            angle,
        ]
        .join("\n")
    }
}

/// Guidance shown next to the chart.
pub const HINTS: [&str; 3] = [
    "Governor ↑ → P ↑ (vertical move)",
    "Excitation ↑ → Q ↑ (horizontal move)",
    "PF ray angle ϕ = atan2(Q, P) (non-standard axes)",
];

/// Shown under the chart.
pub const SIGN_CONVENTION: &str = "Sign convention: +Q = lagging/inductive • −Q = leading/capacitive";
