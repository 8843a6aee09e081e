use crate::kind::Cartesian;
use crate::{Point, Representation, Vector3};

/// `(x, y, z)`: already in canonical form, so both transforms are the identity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CartesianRepresentation {
    point: Point<3, Cartesian>,
}

impl CartesianRepresentation {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            point: Point::new([x, y, z]),
        }
    }

    pub fn x(&self) -> f64 {
        self.point[0]
    }

    pub fn y(&self) -> f64 {
        self.point[1]
    }

    pub fn z(&self) -> f64 {
        self.point[2]
    }
}

impl Representation for CartesianRepresentation {
    type Point = Point<3, Cartesian>;

    fn point(&self) -> Self::Point {
        self.point
    }

    fn from_point(point: Self::Point) -> Self {
        Self { point }
    }
}

impl From<Point<3, Cartesian>> for CartesianRepresentation {
    fn from(point: Point<3, Cartesian>) -> Self {
        Self { point }
    }
}

impl From<Vector3> for CartesianRepresentation {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
