// pq-core/src/units.rs

use uom::si::f64::Angle as UomAngle;

pub type Angle = UomAngle;

#[inline]
pub fn radians(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn to_degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}
