use crate::kind::Spherical;
use crate::{Point, Representation};

/// `(azimuth, polar, r)` in radians, the polar angle measured from +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SphericalRepresentation {
    point: Point<3, Spherical>,
}

impl SphericalRepresentation {
    pub const fn new(azimuth: f64, polar: f64, r: f64) -> Self {
        Self {
            point: Point::new([azimuth, polar, r]),
        }
    }

    pub fn azimuth(&self) -> f64 {
        self.point[0]
    }

    pub fn polar(&self) -> f64 {
        self.point[1]
    }

    pub fn r(&self) -> f64 {
        self.point[2]
    }
}

impl Representation for SphericalRepresentation {
    type Point = Point<3, Spherical>;

    fn point(&self) -> Self::Point {
        self.point
    }

    fn from_point(point: Self::Point) -> Self {
        Self { point }
    }
}

impl From<Point<3, Spherical>> for SphericalRepresentation {
    fn from(point: Point<3, Spherical>) -> Self {
        Self { point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, QUARTER_PI};
    use crate::Vector3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_cartesian() {
        let s = SphericalRepresentation::from_cartesian(&Vector3::new(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(s.azimuth(), HALF_PI, epsilon = 1e-15);
        assert_abs_diff_eq!(s.polar(), QUARTER_PI, epsilon = 1e-15);
        assert_abs_diff_eq!(s.r(), 2.0_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_stored_angles_are_not_wrapped() {
        let s = SphericalRepresentation::new(-7.0, 4.0, 1.0);
        assert_eq!(s.azimuth(), -7.0);
        assert_eq!(s.polar(), 4.0);
    }
}
