use crate::kind::SphericalEquatorial;
use crate::{Point, Representation};

/// `(lon, lat, distance)` in radians, latitude measured from the XY plane.
///
/// The usual layout for RA/Dec or ecliptic longitude/latitude with a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SphericalEquatorialRepresentation {
    point: Point<3, SphericalEquatorial>,
}

impl SphericalEquatorialRepresentation {
    pub const fn new(lon: f64, lat: f64, distance: f64) -> Self {
        Self {
            point: Point::new([lon, lat, distance]),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point[0]
    }

    pub fn lat(&self) -> f64 {
        self.point[1]
    }

    pub fn distance(&self) -> f64 {
        self.point[2]
    }
}

impl Representation for SphericalEquatorialRepresentation {
    type Point = Point<3, SphericalEquatorial>;

    fn point(&self) -> Self::Point {
        self.point
    }

    fn from_point(point: Self::Point) -> Self {
        Self { point }
    }
}

impl From<Point<3, SphericalEquatorial>> for SphericalEquatorialRepresentation {
    fn from(point: Point<3, SphericalEquatorial>) -> Self {
        Self { point }
    }
}
