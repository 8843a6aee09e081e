use crate::kind::Cylindrical;
use crate::{Point, Representation};

/// `(rho, phi, z)`: radial distance from the Z axis, azimuth in radians, height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CylindricalRepresentation {
    point: Point<3, Cylindrical>,
}

impl CylindricalRepresentation {
    pub const fn new(rho: f64, phi: f64, z: f64) -> Self {
        Self {
            point: Point::new([rho, phi, z]),
        }
    }

    pub fn rho(&self) -> f64 {
        self.point[0]
    }

    pub fn phi(&self) -> f64 {
        self.point[1]
    }

    pub fn z(&self) -> f64 {
        self.point[2]
    }
}

impl Representation for CylindricalRepresentation {
    type Point = Point<3, Cylindrical>;

    fn point(&self) -> Self::Point {
        self.point
    }

    fn from_point(point: Self::Point) -> Self {
        Self { point }
    }
}

impl From<Point<3, Cylindrical>> for CylindricalRepresentation {
    fn from(point: Point<3, Cylindrical>) -> Self {
        Self { point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::CartesianRepresentation;
    use crate::VectorAlgebra;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_in_cartesian_space() {
        // opposite sides of the axis: the raw tuples would average to phi = π/2
        let a = CylindricalRepresentation::new(1.0, 0.0, 2.0);
        let b = CylindricalRepresentation::new(1.0, std::f64::consts::PI, 4.0);
        let m = a.mean::<CartesianRepresentation, _>(&b);

        assert_abs_diff_eq!(m.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(m.y(), 0.0, epsilon = 1e-15);
        assert_eq!(m.z(), 3.0);
    }

    #[test]
    fn test_magnitude() {
        let c = CylindricalRepresentation::new(3.0, 1.1, 4.0);
        assert_abs_diff_eq!(c.magnitude(), 5.0, epsilon = 1e-14);
    }
}
