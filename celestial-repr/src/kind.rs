//! Coordinate-system tags.
//!
//! Two views of the same set of systems:
//!
//! - [`CoordinateSystem`]: a run-time enum, used in error messages and by
//!   [`DynRepresentation`](crate::DynRepresentation) where the system is only known
//!   from data.
//! - Zero-sized kind markers ([`Cartesian`], [`Spherical`], ...): used as the `K`
//!   parameter of [`Point`](crate::Point) so the system is part of the type.
//!
//! | System | Components (radians, lengths) | Dimension |
//! |--------|-------------------------------|-----------|
//! | `cartesian` | `(x, y, z)` | 3 |
//! | `spherical` | `(azimuth, polar, r)`, polar angle from +Z | 3 |
//! | `spherical_equatorial` | `(lon, lat, distance)`, latitude from the XY plane | 3 |
//! | `unit_spherical` | `(lon, lat)` on the unit sphere | 2 |
//! | `cylindrical` | `(rho, phi, z)` | 3 |

use crate::{ReprError, ReprResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoordinateSystem {
    Cartesian,
    Spherical,
    SphericalEquatorial,
    UnitSpherical,
    Cylindrical,
}

impl CoordinateSystem {
    pub const ALL: [CoordinateSystem; 5] = [
        Self::Cartesian,
        Self::Spherical,
        Self::SphericalEquatorial,
        Self::UnitSpherical,
        Self::Cylindrical,
    ];

    /// Number of components a point in this system stores.
    pub const fn dimension(self) -> usize {
        match self {
            Self::UnitSpherical => 2,
            Self::Cartesian | Self::Spherical | Self::SphericalEquatorial | Self::Cylindrical => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Spherical => "spherical",
            Self::SphericalEquatorial => "spherical_equatorial",
            Self::UnitSpherical => "unit_spherical",
            Self::Cylindrical => "cylindrical",
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoordinateSystem {
    type Err = ReprError;

    fn from_str(s: &str) -> ReprResult<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|system| system.name() == normalized)
            .ok_or_else(|| ReprError::unknown_system(s))
    }
}

/// Type-level tag for a coordinate system.
pub trait CoordinateKind:
    Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static
{
    const SYSTEM: CoordinateSystem;
}

macro_rules! coordinate_kind {
    ($(#[$doc:meta])* $name:ident => $system:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl CoordinateKind for $name {
            const SYSTEM: CoordinateSystem = CoordinateSystem::$system;
        }
    };
}

coordinate_kind!(
    /// `(x, y, z)`.
    Cartesian => Cartesian
);
coordinate_kind!(
    /// `(azimuth, polar, r)` with the polar angle measured from +Z.
    Spherical => Spherical
);
coordinate_kind!(
    /// `(lon, lat, distance)` with latitude measured from the XY plane.
    SphericalEquatorial => SphericalEquatorial
);
coordinate_kind!(
    /// `(lon, lat)`: a direction with no distance.
    UnitSpherical => UnitSpherical
);
coordinate_kind!(
    /// `(rho, phi, z)`.
    Cylindrical => Cylindrical
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(CoordinateSystem::Cartesian.dimension(), 3);
        assert_eq!(CoordinateSystem::UnitSpherical.dimension(), 2);
        assert_eq!(CoordinateSystem::Cylindrical.dimension(), 3);
    }

    #[test]
    fn test_name_roundtrip() {
        for system in CoordinateSystem::ALL {
            let parsed: CoordinateSystem = system.to_string().parse().unwrap();
            assert_eq!(parsed, system);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(
            "Spherical-Equatorial".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::SphericalEquatorial
        );
        assert_eq!(
            " unit spherical ".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::UnitSpherical
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "galactic".parse::<CoordinateSystem>().unwrap_err();
        assert_eq!(err, ReprError::unknown_system("galactic"));
    }

    #[test]
    fn test_marker_systems() {
        assert_eq!(Cartesian::SYSTEM, CoordinateSystem::Cartesian);
        assert_eq!(Spherical::SYSTEM, CoordinateSystem::Spherical);
        assert_eq!(SphericalEquatorial::SYSTEM, CoordinateSystem::SphericalEquatorial);
        assert_eq!(UnitSpherical::SYSTEM, CoordinateSystem::UnitSpherical);
        assert_eq!(Cylindrical::SYSTEM, CoordinateSystem::Cylindrical);
    }
}
