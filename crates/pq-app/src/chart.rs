//! Capability chart geometry.
//!
//! The chart uses Q on the horizontal axis and P on the vertical axis, so
//! every point here is `[q, p]`. Only the upper half plane (P >= 0) is drawn.

use pq_core::{MachineLimits, OperatingPoint};

/// PF rays annotated on the chart by default.
pub const DEFAULT_PF_ANNOTATIONS: [f64; 3] = [0.8, -0.8, 1.0];

/// Unity PF would be a vertical ray; annotations stop just short of it.
const PF_RAY_CEILING: f64 = 0.999;

/// Rating half circle from `+Q` through the P axis to `-Q`.
pub fn rating_arc(s_rating: f64, samples: usize) -> Vec<[f64; 2]> {
    let samples = samples.max(2);
    (0..samples)
        .map(|i| {
            let theta = std::f64::consts::PI * i as f64 / (samples - 1) as f64;
            [s_rating * theta.cos(), s_rating * theta.sin()]
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PfRay {
    pub pf: f64,
    /// Ray end on the rating circle.
    pub end: [f64; 2],
    pub label: String,
}

impl PfRay {
    /// Where to place the label, slightly inside the circle.
    pub fn label_anchor(&self) -> [f64; 2] {
        [self.end[0] * 0.92, self.end[1] * 0.92]
    }
}

pub fn pf_ray(s_rating: f64, pf: f64) -> PfRay {
    let clamped = pf.clamp(-PF_RAY_CEILING, PF_RAY_CEILING);
    let angle = clamped.abs().acos();
    let sign = if clamped >= 0.0 { 1.0 } else { -1.0 };
    PfRay {
        pf,
        end: [s_rating * angle.sin() * sign, s_rating * clamped.abs()],
        label: format!("PF {pf:+.2}"),
    }
}

/// Everything a front end needs to draw the capability chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub s_rating: f64,
    pub arc: Vec<[f64; 2]>,
    pub pf_rays: Vec<PfRay>,
    /// Shaded `Q > 0` half of the chart.
    pub lagging_region: [[f64; 2]; 4],
    /// Shaded `Q < 0` half of the chart.
    pub leading_region: [[f64; 2]; 4],
    pub operating_ray: [[f64; 2]; 2],
    pub operating_point: [f64; 2],
}

impl ChartGeometry {
    pub const ARC_SAMPLES: usize = 181;

    pub fn new(limits: &MachineLimits, point: &OperatingPoint, annotations: &[f64]) -> Self {
        let s = limits.s_rated_mva;
        let marker = [point.q_mvar, point.p_mw];
        Self {
            s_rating: s,
            arc: rating_arc(s, Self::ARC_SAMPLES),
            pf_rays: annotations.iter().map(|&pf| pf_ray(s, pf)).collect(),
            lagging_region: [[0.0, 0.0], [s, 0.0], [s, s], [0.0, s]],
            leading_region: [[-s, 0.0], [0.0, 0.0], [0.0, s], [-s, s]],
            operating_ray: [[0.0, 0.0], marker],
            operating_point: marker,
        }
    }

    /// Axis extents as `(q_min, q_max, p_min, p_max)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (-self.s_rating, self.s_rating, 0.0, self.s_rating)
    }
}
