//! Coordinate-agnostic vector algebra for astronomical representations.
//!
//! `celestial-repr` lets cartesian, spherical, cylindrical and other coordinate
//! encodings share one set of vector operations. Every operand is flattened to a
//! canonical cartesian tuple, the arithmetic happens there, and the result is
//! rebuilt in whichever representation the caller asks for.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`point`] | [`Point`]: fixed-dimension coordinate storage tagged with its system |
//! | [`kind`] | [`CoordinateSystem`] run-time tag and the type-level kind markers |
//! | [`bridge`] | Per-system transforms to and from cartesian form |
//! | [`representation`] | The [`Representation`] capability trait |
//! | [`algebra`] | [`VectorAlgebra`]: cross, dot, unit vector, sum, mean, magnitude, ... |
//! | [`representations`] | Concrete cartesian, spherical, spherical-equatorial, unit-spherical and cylindrical types |
//! | [`dynamic`] | [`DynRepresentation`] for systems chosen at run time |
//! | [`vector`] | [`Vector3`], the canonical cartesian tuple |
//! | [`errors`] | [`ReprError`] and [`ReprResult`] |
//!
//! # Example
//!
//! ```
//! use celestial_repr::{
//!     CartesianRepresentation, SphericalEquatorialRepresentation, Representation, VectorAlgebra,
//! };
//!
//! let a = CartesianRepresentation::new(3.0, 4.0, 0.0);
//! assert_eq!(a.magnitude(), 5.0);
//!
//! let u: CartesianRepresentation = a.unit_vector();
//! assert_eq!(u.point().coords(), [0.6, 0.8, 0.0]);
//!
//! // same direction, expressed as longitude/latitude/distance
//! let eq: SphericalEquatorialRepresentation = a.unit_vector();
//! assert_eq!(eq.lat(), 0.0);
//! assert!((eq.distance() - 1.0).abs() < 1e-15);
//! ```
//!
//! # Design Notes
//!
//! - **Compile-time constraint**: operands and return types are bounded on
//!   [`Representation`]. A non-representation is rejected by the compiler, so no
//!   numeric work can start on one. [`DynRepresentation`] performs the same check
//!   at run time for data whose system is not known statically.
//!
//! - **Values, not objects**: every representation is `Copy` (the dynamic one is
//!   `Clone`) and no operation mutates its inputs. Everything is `Send + Sync`.
//!
//! - **Radians, no wrapping**: angles are stored as given and produced by `atan2`.
//!   Unit conversion and frame changes belong to higher layers.
//!
//! - **Zero magnitude**: [`VectorAlgebra::unit_vector`] divides by zero and yields
//!   NaN; use [`VectorAlgebra::try_unit_vector`] for a checked result.

pub mod algebra;
pub mod bridge;
pub mod constants;
pub mod dynamic;
pub mod errors;
pub mod kind;
pub mod point;
pub mod representation;
pub mod representations;
pub mod vector;

pub use algebra::VectorAlgebra;
pub use bridge::{CartesianBridge, CartesianPoint};
pub use dynamic::DynRepresentation;
pub use errors::{MathErrorKind, ReprError, ReprResult};
pub use kind::{CoordinateKind, CoordinateSystem};
pub use point::{Point, PointStore};
pub use representation::{to_cartesian, Representation};
pub use representations::{
    CartesianRepresentation, CylindricalRepresentation, SphericalEquatorialRepresentation,
    SphericalRepresentation, UnitSphericalRepresentation,
};
pub use vector::Vector3;
