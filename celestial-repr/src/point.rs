//! Fixed-dimension coordinate storage.
//!
//! A [`Point<N, K>`](Point) holds exactly `N` components in the coordinate system
//! named by the kind marker `K`. The arity is part of the type:
//!
//! ```
//! use celestial_repr::kind::Cylindrical;
//! use celestial_repr::Point;
//!
//! let p: Point<3, Cylindrical> = Point::new([2.0, 0.5, -1.0]);
//! assert_eq!(p.coords(), [2.0, 0.5, -1.0]);
//! ```
//!
//! ```compile_fail
//! use celestial_repr::kind::Cylindrical;
//! use celestial_repr::Point;
//!
//! // four components for a three-dimensional point
//! let p: Point<3, Cylindrical> = Point::new([2.0, 0.5, -1.0, 4.0]);
//! ```
//!
//! Values read from files or user input go through [`Point::from_slice`], which
//! checks the arity when the point is built.

use crate::kind::{CoordinateKind, CoordinateSystem};
use crate::{MathErrorKind, ReprError, ReprResult};
use std::marker::PhantomData;

/// Read-only access to a stored coordinate tuple.
///
/// Implemented by [`Point`]; representations expose their storage through it.
pub trait PointStore: Copy {
    const DIMENSION: usize;
    type Kind: CoordinateKind;

    fn as_slice(&self) -> &[f64];

    /// Builds a point from runtime data, rejecting the wrong number of components.
    fn from_slice(values: &[f64]) -> ReprResult<Self>;

    fn system(&self) -> CoordinateSystem {
        Self::Kind::SYSTEM
    }
}

/// `N` coordinates tagged with the system `K`.
///
/// Immutable once built: there are no setters, and every conversion returns a
/// new point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "[f64; N]: serde::Serialize",
            deserialize = "[f64; N]: serde::Deserialize<'de>"
        )
    )
)]
pub struct Point<const N: usize, K> {
    coords: [f64; N],
    #[cfg_attr(feature = "serde", serde(skip))]
    kind: PhantomData<K>,
}

impl<const N: usize, K: CoordinateKind> Point<N, K> {
    pub const DIMENSION: usize = N;

    #[inline]
    pub const fn new(coords: [f64; N]) -> Self {
        Self {
            coords,
            kind: PhantomData,
        }
    }

    pub fn from_slice(values: &[f64]) -> ReprResult<Self> {
        let coords: [f64; N] = values
            .try_into()
            .map_err(|_| ReprError::dimension_mismatch(K::SYSTEM, N, values.len()))?;
        Ok(Self::new(coords))
    }

    /// Returns the stored coordinates unchanged.
    #[inline]
    pub fn coords(&self) -> [f64; N] {
        self.coords
    }

    pub fn get(&self, index: usize) -> ReprResult<f64> {
        self.coords.get(index).copied().ok_or_else(|| {
            ReprError::math_error(
                "Point::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (dimension {})", index, N),
            )
        })
    }

    #[inline]
    pub fn system(&self) -> CoordinateSystem {
        K::SYSTEM
    }
}

impl<const N: usize, K: CoordinateKind> PointStore for Point<N, K> {
    const DIMENSION: usize = N;
    type Kind = K;

    fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    fn from_slice(values: &[f64]) -> ReprResult<Self> {
        Point::from_slice(values)
    }
}

impl<const N: usize, K: CoordinateKind> From<[f64; N]> for Point<N, K> {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize, K> std::ops::Index<usize> for Point<N, K> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{Cartesian, UnitSpherical};

    #[test]
    fn test_point_returns_coords_unchanged() {
        let p: Point<3, Cartesian> = Point::new([1.0, -2.0, 3.5]);
        assert_eq!(p.coords(), [1.0, -2.0, 3.5]);
        assert_eq!(p.as_slice(), &[1.0, -2.0, 3.5]);
        assert_eq!(p[1], -2.0);
        assert_eq!(Point::<3, Cartesian>::DIMENSION, 3);
        assert_eq!(p.system(), CoordinateSystem::Cartesian);
    }

    #[test]
    fn test_from_slice_checks_arity() {
        let p = Point::<2, UnitSpherical>::from_slice(&[0.1, 0.2]).unwrap();
        assert_eq!(p.coords(), [0.1, 0.2]);

        let err = Point::<2, UnitSpherical>::from_slice(&[0.1, 0.2, 1.0]).unwrap_err();
        assert_eq!(
            err,
            ReprError::dimension_mismatch(CoordinateSystem::UnitSpherical, 2, 3)
        );

        let err = <Point<3, Cartesian> as PointStore>::from_slice(&[]).unwrap_err();
        assert!(err.is_type_constraint());
    }

    #[test]
    fn test_get_out_of_range() {
        let p: Point<2, UnitSpherical> = [0.5, 0.25].into();
        assert_eq!(p.get(1).unwrap(), 0.25);

        let err = p.get(2).unwrap_err();
        assert!(err.to_string().contains("index 2 out of bounds (dimension 2)"));
    }

    #[test]
    fn test_points_are_values() {
        let a: Point<3, Cartesian> = Point::new([1.0, 2.0, 3.0]);
        let b = a;
        assert_eq!(a, b);
    }
}
