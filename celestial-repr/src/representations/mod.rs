//! Concrete representations.
//!
//! Each type owns one [`Point`] and implements [`Representation`]. They differ
//! only in which kind marker tags the point and in their named accessors.
//!
//! | Type | Stored tuple |
//! |------|--------------|
//! | [`CartesianRepresentation`] | `(x, y, z)` |
//! | [`SphericalRepresentation`] | `(azimuth, polar, r)` |
//! | [`SphericalEquatorialRepresentation`] | `(lon, lat, distance)` |
//! | [`UnitSphericalRepresentation`] | `(lon, lat)` |
//! | [`CylindricalRepresentation`] | `(rho, phi, z)` |
//!
//! Every type also accepts every other type's point through `From`, which is
//! what [`to_representation`](crate::VectorAlgebra::to_representation) relies on.
//! A type's own point is taken as-is; a foreign point goes through the target's
//! inverse transform.

mod cartesian;
mod cylindrical;
mod spherical;
mod spherical_equatorial;
mod unit_spherical;

pub use cartesian::CartesianRepresentation;
pub use cylindrical::CylindricalRepresentation;
pub use spherical::SphericalRepresentation;
pub use spherical_equatorial::SphericalEquatorialRepresentation;
pub use unit_spherical::UnitSphericalRepresentation;

use crate::bridge::CartesianPoint;
use crate::kind::{Cartesian, Cylindrical, Spherical, SphericalEquatorial, UnitSpherical};
use crate::{Point, Representation};

macro_rules! from_foreign_points {
    ($target:ty: $($point:ty),+ $(,)?) => {
        $(
            impl From<$point> for $target {
                fn from(point: $point) -> Self {
                    <$target as Representation>::from_point(point.convert())
                }
            }
        )+
    };
}

from_foreign_points!(CartesianRepresentation:
    Point<3, Spherical>,
    Point<3, SphericalEquatorial>,
    Point<2, UnitSpherical>,
    Point<3, Cylindrical>,
);
from_foreign_points!(SphericalRepresentation:
    Point<3, Cartesian>,
    Point<3, SphericalEquatorial>,
    Point<2, UnitSpherical>,
    Point<3, Cylindrical>,
);
from_foreign_points!(SphericalEquatorialRepresentation:
    Point<3, Cartesian>,
    Point<3, Spherical>,
    Point<2, UnitSpherical>,
    Point<3, Cylindrical>,
);
from_foreign_points!(UnitSphericalRepresentation:
    Point<3, Cartesian>,
    Point<3, Spherical>,
    Point<3, SphericalEquatorial>,
    Point<3, Cylindrical>,
);
from_foreign_points!(CylindricalRepresentation:
    Point<3, Cartesian>,
    Point<3, Spherical>,
    Point<3, SphericalEquatorial>,
    Point<2, UnitSpherical>,
);
