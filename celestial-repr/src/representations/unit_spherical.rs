use crate::kind::UnitSpherical;
use crate::{Point, Representation};

/// `(lon, lat)` in radians: a direction on the unit sphere.
///
/// Two-dimensional storage. Its cartesian form always has unit length, and
/// building one from a cartesian tuple keeps only the direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UnitSphericalRepresentation {
    point: Point<2, UnitSpherical>,
}

impl UnitSphericalRepresentation {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            point: Point::new([lon, lat]),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point[0]
    }

    pub fn lat(&self) -> f64 {
        self.point[1]
    }
}

impl Representation for UnitSphericalRepresentation {
    type Point = Point<2, UnitSpherical>;

    fn point(&self) -> Self::Point {
        self.point
    }

    fn from_point(point: Self::Point) -> Self {
        Self { point }
    }
}

impl From<Point<2, UnitSpherical>> for UnitSphericalRepresentation {
    fn from(point: Point<2, UnitSpherical>) -> Self {
        Self { point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::representations::CartesianRepresentation;
    use crate::VectorAlgebra;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_two_dimensional_storage() {
        let u = UnitSphericalRepresentation::new(0.25, -0.5);
        assert_eq!(u.dimension(), 2);
        assert_eq!(u.point().coords(), [0.25, -0.5]);
    }

    #[test]
    fn test_result_discards_length() {
        let a = CartesianRepresentation::new(0.0, 0.0, 3.0);
        let b = CartesianRepresentation::new(0.0, 0.0, 4.0);
        let dir = a.sum::<UnitSphericalRepresentation, _>(&b);

        assert_abs_diff_eq!(dir.lat(), HALF_PI, epsilon = 1e-15);
        assert_eq!(dir.magnitude(), 1.0);
    }
}
