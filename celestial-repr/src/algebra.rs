//! Coordinate-agnostic vector algebra.
//!
//! [`VectorAlgebra`] is implemented for every [`Representation`]. Each operation
//! flattens its operands to cartesian form, computes there, and hands the result
//! to the requested return type's inverse transform. Operands and return type
//! may all be different systems:
//!
//! ```
//! use celestial_repr::{
//!     CartesianRepresentation, CylindricalRepresentation, SphericalEquatorialRepresentation,
//!     VectorAlgebra,
//! };
//! use std::f64::consts::FRAC_PI_2;
//!
//! let a = CartesianRepresentation::new(1.0, 0.0, 0.0);
//! // (rho, phi, z) = unit vector along +Y
//! let b = CylindricalRepresentation::new(1.0, FRAC_PI_2, 0.0);
//!
//! let c = a.cross::<SphericalEquatorialRepresentation, _>(&b);
//! // +Z: latitude 90°, distance 1
//! assert!((c.lat() - FRAC_PI_2).abs() < 1e-15);
//! assert!((c.distance() - 1.0).abs() < 1e-15);
//!
//! assert!(a.dot(&b).abs() < 1e-15);
//! assert_eq!(a.magnitude(), 1.0);
//! ```
//!
//! # Zero magnitude
//!
//! [`unit_vector`](VectorAlgebra::unit_vector) does not guard against the zero
//! vector; it divides by zero and the result carries NaN. Check
//! `magnitude() > 0.0` first, or call
//! [`try_unit_vector`](VectorAlgebra::try_unit_vector).

use crate::representation::Representation;
use crate::{MathErrorKind, ReprError, ReprResult};

/// Vector operations over any pair of representations.
pub trait VectorAlgebra: Representation {
    /// Cross product, returned as `R`.
    fn cross<R: Representation, O: Representation>(&self, other: &O) -> R {
        R::from_cartesian(&self.to_cartesian().cross(&other.to_cartesian()))
    }

    fn dot<O: Representation>(&self, other: &O) -> f64 {
        self.to_cartesian().dot(&other.to_cartesian())
    }

    /// This vector scaled to unit length, returned as `R`.
    ///
    /// Unguarded: a zero-magnitude vector produces NaN components.
    fn unit_vector<R: Representation>(&self) -> R {
        let mag = self.magnitude();
        if mag == 0.0 {
            tracing::debug!(
                system = %self.system(),
                "unit vector requested for a zero-magnitude vector"
            );
        }
        R::from_cartesian(&(self.to_cartesian() / mag))
    }

    /// Like [`unit_vector`](Self::unit_vector), but refuses zero magnitude.
    fn try_unit_vector<R: Representation>(&self) -> ReprResult<R> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(ReprError::math_error(
                "unit_vector",
                MathErrorKind::DivisionByZero,
                "vector has zero magnitude",
            ));
        }
        Ok(R::from_cartesian(&(self.to_cartesian() / mag)))
    }

    /// Rebuilds `R` from the stored point, without a cartesian round trip when
    /// `R` shares this representation's system.
    fn to_representation<R>(&self) -> R
    where
        R: Representation + From<Self::Point>,
    {
        R::from(self.point())
    }

    fn sum<R: Representation, O: Representation>(&self, other: &O) -> R {
        R::from_cartesian(&(self.to_cartesian() + other.to_cartesian()))
    }

    /// `self - other`, component-wise in cartesian space.
    fn difference<R: Representation, O: Representation>(&self, other: &O) -> R {
        R::from_cartesian(&(self.to_cartesian() - other.to_cartesian()))
    }

    /// Component-wise average of the two cartesian tuples.
    fn mean<R: Representation, O: Representation>(&self, other: &O) -> R {
        R::from_cartesian(&self.to_cartesian().midpoint(&other.to_cartesian()))
    }

    /// Euclidean norm of the cartesian form, never of the raw stored tuple.
    fn magnitude(&self) -> f64 {
        self.to_cartesian().magnitude()
    }

    fn magnitude_squared(&self) -> f64 {
        self.to_cartesian().magnitude_squared()
    }

    /// Angle between the two vectors in radians, `[0, π]`.
    fn angular_separation<O: Representation>(&self, other: &O) -> f64 {
        self.to_cartesian().angle_to(&other.to_cartesian())
    }
}

impl<T: Representation> VectorAlgebra for T {}
