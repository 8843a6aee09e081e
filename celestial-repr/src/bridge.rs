//! Conversions between each coordinate system and the canonical cartesian tuple.
//!
//! Every kind marker implements [`CartesianBridge<N>`] for the dimension its points
//! carry. The forward direction flattens a tuple into a [`Vector3`]; the inverse
//! rebuilds a tuple from one. [`CartesianPoint`] lifts both onto [`Point`] so
//! generic code never names the kind.
//!
//! ```
//! use celestial_repr::bridge::CartesianPoint;
//! use celestial_repr::kind::SphericalEquatorial;
//! use celestial_repr::{Point, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // lon = 90°, lat = 0°, distance = 2
//! let p: Point<3, SphericalEquatorial> = Point::new([FRAC_PI_2, 0.0, 2.0]);
//! let v = p.to_cartesian();
//! assert!(v.x.abs() < 1e-15);
//! assert!((v.y - 2.0).abs() < 1e-15);
//! assert_eq!(v.z, 0.0);
//! ```
//!
//! # Degenerate inputs
//!
//! Inverse transforms use `atan2` and return zero for any angle that is
//! undefined at the origin or on the polar axis. No angle is wrapped or
//! clamped: a forward transform accepts whatever the caller stored.

use crate::kind::{
    Cartesian, CoordinateKind, Cylindrical, Spherical, SphericalEquatorial, UnitSpherical,
};
use crate::point::{Point, PointStore};
use crate::Vector3;

/// Forward and inverse cartesian transforms for one coordinate system.
pub trait CartesianBridge<const N: usize>: CoordinateKind {
    fn to_cartesian(coords: &[f64; N]) -> Vector3;

    fn from_cartesian(cartesian: &Vector3) -> [f64; N];
}

/// A stored point that can be flattened into, and rebuilt from, cartesian form.
pub trait CartesianPoint: PointStore {
    fn to_cartesian(&self) -> Vector3;

    fn from_cartesian(cartesian: &Vector3) -> Self;

    /// Re-expresses this point in another system by way of cartesian form.
    fn convert<P: CartesianPoint>(&self) -> P {
        P::from_cartesian(&self.to_cartesian())
    }
}

impl<const N: usize, K: CartesianBridge<N>> CartesianPoint for Point<N, K> {
    #[inline]
    fn to_cartesian(&self) -> Vector3 {
        K::to_cartesian(&self.coords())
    }

    #[inline]
    fn from_cartesian(cartesian: &Vector3) -> Self {
        Point::new(K::from_cartesian(cartesian))
    }
}

/// Azimuth of the projection onto the XY plane, zero on the Z axis.
#[inline]
fn azimuth(v: &Vector3) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        0.0
    } else {
        libm::atan2(v.y, v.x)
    }
}

/// Elevation above the XY plane, zero at the origin.
#[inline]
fn elevation(v: &Vector3) -> f64 {
    if v.z == 0.0 {
        0.0
    } else {
        libm::atan2(v.z, libm::hypot(v.x, v.y))
    }
}

impl CartesianBridge<3> for Cartesian {
    #[inline]
    fn to_cartesian(coords: &[f64; 3]) -> Vector3 {
        Vector3::from_array(*coords)
    }

    #[inline]
    fn from_cartesian(cartesian: &Vector3) -> [f64; 3] {
        cartesian.to_array()
    }
}

impl CartesianBridge<3> for Spherical {
    fn to_cartesian(&[az, polar, r]: &[f64; 3]) -> Vector3 {
        let (sin_az, cos_az) = libm::sincos(az);
        let (sin_pol, cos_pol) = libm::sincos(polar);
        Vector3::new(r * sin_pol * cos_az, r * sin_pol * sin_az, r * cos_pol)
    }

    fn from_cartesian(cartesian: &Vector3) -> [f64; 3] {
        let r = cartesian.magnitude();
        let polar = if r == 0.0 {
            0.0
        } else {
            libm::atan2(libm::hypot(cartesian.x, cartesian.y), cartesian.z)
        };
        [azimuth(cartesian), polar, r]
    }
}

impl CartesianBridge<3> for SphericalEquatorial {
    fn to_cartesian(&[lon, lat, distance]: &[f64; 3]) -> Vector3 {
        <UnitSpherical as CartesianBridge<2>>::to_cartesian(&[lon, lat]) * distance
    }

    fn from_cartesian(cartesian: &Vector3) -> [f64; 3] {
        [azimuth(cartesian), elevation(cartesian), cartesian.magnitude()]
    }
}

impl CartesianBridge<2> for UnitSpherical {
    fn to_cartesian(&[lon, lat]: &[f64; 2]) -> Vector3 {
        let (sin_lon, cos_lon) = libm::sincos(lon);
        let (sin_lat, cos_lat) = libm::sincos(lat);
        Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Keeps only the direction; the norm of `cartesian` is dropped.
    fn from_cartesian(cartesian: &Vector3) -> [f64; 2] {
        [azimuth(cartesian), elevation(cartesian)]
    }
}

impl CartesianBridge<3> for Cylindrical {
    fn to_cartesian(&[rho, phi, z]: &[f64; 3]) -> Vector3 {
        let (sin_phi, cos_phi) = libm::sincos(phi);
        Vector3::new(rho * cos_phi, rho * sin_phi, z)
    }

    fn from_cartesian(cartesian: &Vector3) -> [f64; 3] {
        [
            libm::hypot(cartesian.x, cartesian.y),
            azimuth(cartesian),
            cartesian.z,
        ]
    }
}
