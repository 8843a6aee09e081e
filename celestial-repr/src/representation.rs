//! The representation capability.
//!
//! A type takes part in vector algebra only if it implements [`Representation`]:
//! it exposes its stored [`Point`](crate::Point) and can be rebuilt from one.
//! Everything else, including conversion from a cartesian tuple, follows from
//! the point's [`CartesianPoint`] implementation.
//!
//! The check happens at compile time. Operands and requested return types of
//! every [`VectorAlgebra`](crate::VectorAlgebra) operation are bounded on this
//! trait, so a non-representation never reaches numeric code:
//!
//! ```compile_fail
//! use celestial_repr::{CartesianRepresentation, VectorAlgebra};
//!
//! let a = CartesianRepresentation::new(1.0, 0.0, 0.0);
//! // a bare array is not a representation
//! let d = a.dot(&[0.0, 1.0, 0.0]);
//! ```
//!
//! ```compile_fail
//! use celestial_repr::{CartesianRepresentation, Vector3, VectorAlgebra};
//!
//! let a = CartesianRepresentation::new(1.0, 0.0, 0.0);
//! let b = CartesianRepresentation::new(0.0, 1.0, 0.0);
//! // the canonical tuple is not a representation either
//! let c: Vector3 = a.cross::<Vector3, _>(&b);
//! ```
//!
//! # Implementing
//!
//! A concrete representation owns a point and supplies two functions:
//!
//! ```
//! use celestial_repr::kind::Cylindrical;
//! use celestial_repr::{Point, Representation};
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Column(Point<3, Cylindrical>);
//!
//! impl Representation for Column {
//!     type Point = Point<3, Cylindrical>;
//!
//!     fn point(&self) -> Self::Point {
//!         self.0
//!     }
//!
//!     fn from_point(point: Self::Point) -> Self {
//!         Column(point)
//!     }
//! }
//!
//! let c = Column(Point::new([1.0, 0.0, 2.0]));
//! assert_eq!(c.to_cartesian().z, 2.0);
//! ```

use crate::bridge::CartesianPoint;
use crate::kind::{CoordinateKind, CoordinateSystem};
use crate::point::PointStore;
use crate::Vector3;

/// A coordinate-system-specific encoding of a point or vector.
pub trait Representation: Sized {
    type Point: CartesianPoint;

    /// Returns the stored coordinates.
    fn point(&self) -> Self::Point;

    /// Wraps a point already expressed in this representation's system.
    fn from_point(point: Self::Point) -> Self;

    /// Builds this representation from a cartesian tuple (the inverse transform).
    fn from_cartesian(cartesian: &Vector3) -> Self {
        Self::from_point(Self::Point::from_cartesian(cartesian))
    }

    /// Flattens this representation into the canonical cartesian tuple.
    fn to_cartesian(&self) -> Vector3 {
        self.point().to_cartesian()
    }

    fn dimension(&self) -> usize {
        <Self::Point as PointStore>::DIMENSION
    }

    fn system(&self) -> CoordinateSystem {
        <<Self::Point as PointStore>::Kind as CoordinateKind>::SYSTEM
    }
}

/// Flattens any representation into cartesian form.
///
/// Free-function spelling of [`Representation::to_cartesian`].
#[inline]
pub fn to_cartesian<R: Representation>(rep: &R) -> Vector3 {
    rep.to_cartesian()
}
