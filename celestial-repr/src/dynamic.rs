//! Representations whose coordinate system is only known at run time.
//!
//! Catalog rows, configuration files and wire messages carry a system tag next to
//! a list of numbers. [`DynRepresentation`] holds such a pair after checking that
//! the number of components matches the system, so every value that exists is a
//! well-formed representation.
//!
//! Because the type cannot be checked by the compiler, the operations here check
//! their operand on the first call instead: the `other` argument is taken as
//! `&dyn Any` and must be a [`DynRepresentation`] or one of the concrete
//! representation types. Anything else fails with
//! [`ReprError::TypeConstraint`] before any arithmetic runs.
//!
//! When the operand's type is known, the `*_typed` variants
//! ([`dot_typed`](DynRepresentation::dot_typed) and friends) accept any
//! [`Representation`], including ones defined outside this crate.
//!
//! ```
//! use celestial_repr::{CoordinateSystem, DynRepresentation, Vector3};
//!
//! let a = DynRepresentation::parse("cartesian", &[1.0, 0.0, 0.0])?;
//! let b = DynRepresentation::parse("unit_spherical", &[std::f64::consts::FRAC_PI_2, 0.0])?;
//!
//! let c = a.cross(&b, CoordinateSystem::Cartesian)?;
//! assert!((c.coords()[2] - 1.0).abs() < 1e-15);
//!
//! // a bare vector is not a representation
//! let err = a.dot(&Vector3::y_axis()).unwrap_err();
//! assert!(err.is_type_constraint());
//! # Ok::<(), celestial_repr::ReprError>(())
//! ```

use crate::bridge::CartesianBridge;
use crate::kind::{
    Cartesian, CoordinateKind, CoordinateSystem, Cylindrical, Spherical, SphericalEquatorial,
    UnitSpherical,
};
use crate::representations::{
    CartesianRepresentation, CylindricalRepresentation, SphericalEquatorialRepresentation,
    SphericalRepresentation, UnitSphericalRepresentation,
};
use crate::{MathErrorKind, PointStore, ReprError, ReprResult, Representation, Vector3};
use std::any::Any;

/// A coordinate tuple tagged with a run-time [`CoordinateSystem`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DynRepresentation {
    system: CoordinateSystem,
    coords: Vec<f64>,
}

impl DynRepresentation {
    /// Checks `coords` against the dimension of `system`.
    pub fn new(system: CoordinateSystem, coords: impl Into<Vec<f64>>) -> ReprResult<Self> {
        let coords = coords.into();
        if coords.len() != system.dimension() {
            tracing::debug!(
                %system,
                expected = system.dimension(),
                found = coords.len(),
                "rejected coordinate tuple"
            );
            return Err(ReprError::dimension_mismatch(
                system,
                system.dimension(),
                coords.len(),
            ));
        }
        Ok(Self { system, coords })
    }

    /// Parses the system name, then behaves like [`new`](Self::new).
    pub fn parse(system: &str, coords: &[f64]) -> ReprResult<Self> {
        Self::new(system.parse()?, coords)
    }

    /// Snapshot of a statically typed representation.
    ///
    /// The point's arity is checked against its system like any other input,
    /// since `PointStore` implementations outside this crate may disagree.
    pub fn from_typed<R: Representation>(rep: &R) -> ReprResult<Self> {
        Self::new(rep.system(), rep.point().as_slice())
    }

    /// Runtime capability check.
    ///
    /// Accepts a `DynRepresentation` or one of this crate's concrete
    /// representation types and rejects everything else. A representation
    /// defined elsewhere cannot be recognized through `Any`; pass it to the
    /// `*_typed` operations instead.
    pub fn from_any(value: &dyn Any) -> ReprResult<Self> {
        if let Some(rep) = value.downcast_ref::<DynRepresentation>() {
            return Ok(rep.clone());
        }
        if let Some(rep) = value.downcast_ref::<CartesianRepresentation>() {
            return Self::from_typed(rep);
        }
        if let Some(rep) = value.downcast_ref::<SphericalRepresentation>() {
            return Self::from_typed(rep);
        }
        if let Some(rep) = value.downcast_ref::<SphericalEquatorialRepresentation>() {
            return Self::from_typed(rep);
        }
        if let Some(rep) = value.downcast_ref::<UnitSphericalRepresentation>() {
            return Self::from_typed(rep);
        }
        if let Some(rep) = value.downcast_ref::<CylindricalRepresentation>() {
            return Self::from_typed(rep);
        }
        tracing::debug!("rejected operand that is not a representation");
        Err(ReprError::type_constraint(
            "DynRepresentation::from_any",
            "a representation",
            "a value with no representation capability",
        ))
    }

    /// Converts into the statically typed `R`, which must use the same system.
    ///
    /// The stored tuple is reused as-is; no cartesian round trip happens.
    pub fn to_typed<R: Representation>(&self) -> ReprResult<R> {
        let expected = <<R::Point as PointStore>::Kind as CoordinateKind>::SYSTEM;
        if expected != self.system {
            tracing::debug!(%expected, found = %self.system, "rejected return type");
            return Err(ReprError::type_constraint(
                "DynRepresentation::to_typed",
                expected.name(),
                self.system.name(),
            ));
        }
        Ok(R::from_point(<R::Point as PointStore>::from_slice(&self.coords)?))
    }

    /// Builds a representation in `system` from a cartesian tuple.
    pub fn from_cartesian(system: CoordinateSystem, cartesian: &Vector3) -> Self {
        let coords = match system {
            CoordinateSystem::Cartesian => {
                <Cartesian as CartesianBridge<3>>::from_cartesian(cartesian).to_vec()
            }
            CoordinateSystem::Spherical => {
                <Spherical as CartesianBridge<3>>::from_cartesian(cartesian).to_vec()
            }
            CoordinateSystem::SphericalEquatorial => {
                <SphericalEquatorial as CartesianBridge<3>>::from_cartesian(cartesian).to_vec()
            }
            CoordinateSystem::UnitSpherical => {
                <UnitSpherical as CartesianBridge<2>>::from_cartesian(cartesian).to_vec()
            }
            CoordinateSystem::Cylindrical => {
                <Cylindrical as CartesianBridge<3>>::from_cartesian(cartesian).to_vec()
            }
        };
        Self { system, coords }
    }

    pub fn to_cartesian(&self) -> Vector3 {
        match self.system {
            CoordinateSystem::Cartesian => {
                <Cartesian as CartesianBridge<3>>::to_cartesian(&self.fixed())
            }
            CoordinateSystem::Spherical => {
                <Spherical as CartesianBridge<3>>::to_cartesian(&self.fixed())
            }
            CoordinateSystem::SphericalEquatorial => {
                <SphericalEquatorial as CartesianBridge<3>>::to_cartesian(&self.fixed())
            }
            CoordinateSystem::UnitSpherical => {
                <UnitSpherical as CartesianBridge<2>>::to_cartesian(&self.fixed())
            }
            CoordinateSystem::Cylindrical => {
                <Cylindrical as CartesianBridge<3>>::to_cartesian(&self.fixed())
            }
        }
    }

    pub fn system(&self) -> CoordinateSystem {
        self.system
    }

    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns the stored coordinates unchanged.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    pub fn cross(&self, other: &dyn Any, target: CoordinateSystem) -> ReprResult<Self> {
        let other = Self::from_any(other)?;
        let result = self.to_cartesian().cross(&other.to_cartesian());
        Ok(Self::from_cartesian(target, &result))
    }

    pub fn dot(&self, other: &dyn Any) -> ReprResult<f64> {
        let other = Self::from_any(other)?;
        Ok(self.to_cartesian().dot(&other.to_cartesian()))
    }

    /// Unguarded like [`VectorAlgebra::unit_vector`](crate::VectorAlgebra::unit_vector):
    /// zero magnitude yields NaN.
    pub fn unit_vector(&self, target: CoordinateSystem) -> Self {
        Self::from_cartesian(target, &self.to_cartesian().normalize())
    }

    pub fn try_unit_vector(&self, target: CoordinateSystem) -> ReprResult<Self> {
        let unit = self.to_cartesian().try_normalize().map_err(|_| {
            ReprError::math_error(
                "unit_vector",
                MathErrorKind::DivisionByZero,
                "vector has zero magnitude",
            )
        })?;
        Ok(Self::from_cartesian(target, &unit))
    }

    /// Re-expresses the stored tuple in `target`. Same system returns a copy.
    pub fn to_representation(&self, target: CoordinateSystem) -> Self {
        if target == self.system {
            return self.clone();
        }
        Self::from_cartesian(target, &self.to_cartesian())
    }

    pub fn sum(&self, other: &dyn Any, target: CoordinateSystem) -> ReprResult<Self> {
        let other = Self::from_any(other)?;
        let result = self.to_cartesian() + other.to_cartesian();
        Ok(Self::from_cartesian(target, &result))
    }

    pub fn difference(&self, other: &dyn Any, target: CoordinateSystem) -> ReprResult<Self> {
        let other = Self::from_any(other)?;
        let result = self.to_cartesian() - other.to_cartesian();
        Ok(Self::from_cartesian(target, &result))
    }

    pub fn mean(&self, other: &dyn Any, target: CoordinateSystem) -> ReprResult<Self> {
        let other = Self::from_any(other)?;
        let result = self.to_cartesian().midpoint(&other.to_cartesian());
        Ok(Self::from_cartesian(target, &result))
    }

    pub fn magnitude(&self) -> f64 {
        self.to_cartesian().magnitude()
    }

    pub fn angular_separation(&self, other: &dyn Any) -> ReprResult<f64> {
        let other = Self::from_any(other)?;
        Ok(self.to_cartesian().angle_to(&other.to_cartesian()))
    }

    pub fn cross_typed<O: Representation>(
        &self,
        other: &O,
        target: CoordinateSystem,
    ) -> ReprResult<Self> {
        self.cross(&Self::from_typed(other)?, target)
    }

    pub fn dot_typed<O: Representation>(&self, other: &O) -> ReprResult<f64> {
        self.dot(&Self::from_typed(other)?)
    }

    pub fn sum_typed<O: Representation>(
        &self,
        other: &O,
        target: CoordinateSystem,
    ) -> ReprResult<Self> {
        self.sum(&Self::from_typed(other)?, target)
    }

    pub fn difference_typed<O: Representation>(
        &self,
        other: &O,
        target: CoordinateSystem,
    ) -> ReprResult<Self> {
        self.difference(&Self::from_typed(other)?, target)
    }

    pub fn mean_typed<O: Representation>(
        &self,
        other: &O,
        target: CoordinateSystem,
    ) -> ReprResult<Self> {
        self.mean(&Self::from_typed(other)?, target)
    }

    pub fn angular_separation_typed<O: Representation>(&self, other: &O) -> ReprResult<f64> {
        self.angular_separation(&Self::from_typed(other)?)
    }

    /// Copies the stored tuple into a fixed-size array.
    ///
    /// Every constructor keeps `coords.len()` equal to the system's dimension, so
    /// `N` always matches here.
    fn fixed<const N: usize>(&self) -> [f64; N] {
        std::array::from_fn(|i| self.coords[i])
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DynRepresentation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            system: CoordinateSystem,
            coords: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.system, raw.coords).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;
    use crate::{CartesianPoint, Point};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_checks_arity() {
        assert!(DynRepresentation::new(CoordinateSystem::UnitSpherical, [0.1, 0.2]).is_ok());

        let err = DynRepresentation::new(CoordinateSystem::Cartesian, vec![1.0, 2.0, 3.0, 4.0])
            .unwrap_err();
        assert_eq!(
            err,
            ReprError::dimension_mismatch(CoordinateSystem::Cartesian, 3, 4)
        );
    }

    #[test]
    fn test_parse_unknown_system() {
        let err = DynRepresentation::parse("galactic", &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ReprError::UnknownSystem { .. }));
        assert!(err.is_type_constraint());
    }

    #[test]
    fn test_dot_rejects_non_representation() {
        let a = DynRepresentation::new(CoordinateSystem::Cartesian, [1.0, 0.0, 0.0]).unwrap();

        for other in [
            &Vector3::x_axis() as &dyn Any,
            &[1.0_f64, 0.0, 0.0] as &dyn Any,
            &"cartesian" as &dyn Any,
        ] {
            let err = a.dot(other).unwrap_err();
            assert!(matches!(err, ReprError::TypeConstraint { .. }));
        }
    }

    #[test]
    fn test_operands_mix_dynamic_and_typed() {
        let a = DynRepresentation::new(CoordinateSystem::Cartesian, [3.0, 4.0, 0.0]).unwrap();
        let b = CartesianRepresentation::new(1.0, 1.0, 1.0);

        assert_eq!(a.dot(&b).unwrap(), 7.0);
        assert_eq!(a.magnitude(), 5.0);

        let sum = a.sum(&b, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(sum.coords(), &[4.0, 5.0, 1.0]);

        let mean = a.mean(&b, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(mean.coords(), &[2.0, 2.5, 0.5]);

        let diff = a.difference(&b, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(diff.coords(), &[2.0, 3.0, -1.0]);
    }

    #[test]
    fn test_unit_vector_targets() {
        let a = DynRepresentation::new(CoordinateSystem::Cartesian, [3.0, 4.0, 0.0]).unwrap();
        let u = a.unit_vector(CoordinateSystem::Cartesian);
        assert_eq!(u.coords(), &[0.6, 0.8, 0.0]);

        let zero = DynRepresentation::new(CoordinateSystem::Cartesian, [0.0; 3]).unwrap();
        assert!(zero.unit_vector(CoordinateSystem::Cartesian).coords()[0].is_nan());
        assert!(zero.try_unit_vector(CoordinateSystem::Cartesian).is_err());
    }

    #[test]
    fn test_to_representation_same_system_is_exact() {
        let a = DynRepresentation::new(CoordinateSystem::Spherical, [9.0, -1.0, 2.0]).unwrap();
        assert_eq!(a.to_representation(CoordinateSystem::Spherical), a);

        let cyl = a.to_representation(CoordinateSystem::Cylindrical);
        assert_eq!(cyl.system(), CoordinateSystem::Cylindrical);
        assert_abs_diff_eq!(cyl.magnitude(), 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_typed_roundtrip() {
        let typed = SphericalEquatorialRepresentation::new(0.5, HALF_PI / 3.0, 8.0);
        let dynamic = DynRepresentation::from_typed(&typed).unwrap();
        assert_eq!(dynamic.system(), CoordinateSystem::SphericalEquatorial);
        assert_eq!(dynamic.dimension(), 3);

        let back: SphericalEquatorialRepresentation = dynamic.to_typed().unwrap();
        assert_eq!(back, typed);
    }

    #[test]
    fn test_to_typed_rejects_other_system() {
        let dynamic = DynRepresentation::new(CoordinateSystem::Cylindrical, [1.0, 0.0, 0.0]).unwrap();
        let err = dynamic.to_typed::<CartesianRepresentation>().unwrap_err();
        assert_eq!(
            err,
            ReprError::type_constraint("DynRepresentation::to_typed", "cartesian", "cylindrical")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_arity() {
        let json = r#"{"system":"unit_spherical","coords":[0.5,0.25]}"#;
        let rep: DynRepresentation = serde_json::from_str(json).unwrap();
        assert_eq!(rep.coords(), &[0.5, 0.25]);
        assert_eq!(serde_json::to_string(&rep).unwrap(), json);

        let bad = r#"{"system":"cartesian","coords":[1.0,2.0]}"#;
        let err = serde_json::from_str::<DynRepresentation>(bad).unwrap_err();
        assert!(err.to_string().contains("Dimension mismatch"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_typed_is_transparent() {
        let c = CartesianRepresentation::new(1.0, 2.0, 3.0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "[1.0,2.0,3.0]");

        let back: CartesianRepresentation = serde_json::from_str("[1.0,2.0,3.0]").unwrap();
        assert_eq!(back, c);
    }

    /// A representation defined outside the built-in set.
    #[derive(Debug, Clone, Copy)]
    struct Offset(Point<3, Cartesian>);

    impl Representation for Offset {
        type Point = Point<3, Cartesian>;

        fn point(&self) -> Self::Point {
            self.0
        }

        fn from_point(point: Self::Point) -> Self {
            Offset(point)
        }
    }

    /// Two components tagged as cartesian, which needs three.
    #[derive(Debug, Clone, Copy)]
    struct Flat([f64; 2]);

    impl PointStore for Flat {
        const DIMENSION: usize = 2;
        type Kind = Cartesian;

        fn as_slice(&self) -> &[f64] {
            &self.0
        }

        fn from_slice(values: &[f64]) -> ReprResult<Self> {
            match values {
                [x, y] => Ok(Flat([*x, *y])),
                _ => Err(ReprError::dimension_mismatch(
                    CoordinateSystem::Cartesian,
                    2,
                    values.len(),
                )),
            }
        }
    }

    impl CartesianPoint for Flat {
        fn to_cartesian(&self) -> Vector3 {
            Vector3::new(self.0[0], self.0[1], 0.0)
        }

        fn from_cartesian(cartesian: &Vector3) -> Self {
            Flat([cartesian.x, cartesian.y])
        }
    }

    #[derive(Debug, Clone, Copy)]
    struct Sheet(Flat);

    impl Representation for Sheet {
        type Point = Flat;

        fn point(&self) -> Self::Point {
            self.0
        }

        fn from_point(point: Self::Point) -> Self {
            Sheet(point)
        }
    }

    #[test]
    fn test_typed_operands_accept_external_representation() {
        use crate::VectorAlgebra;

        let a = CartesianRepresentation::new(1.0, 0.0, 0.0);
        let p = Offset(Point::new([1.0, 2.0, 0.0]));
        let d = DynRepresentation::from_typed(&a).unwrap();

        assert_eq!(d.dot_typed(&p).unwrap(), a.dot(&p));
        assert_eq!(d.dot_typed(&p).unwrap(), 1.0);

        let cross = d.cross_typed(&p, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(cross.coords(), &[0.0, 0.0, 2.0]);

        let sum = d.sum_typed(&p, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(sum.coords(), &[2.0, 2.0, 0.0]);

        let diff = d.difference_typed(&p, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(diff.coords(), &[0.0, -2.0, 0.0]);

        let mean = d.mean_typed(&p, CoordinateSystem::Cartesian).unwrap();
        assert_eq!(mean.coords(), &[1.0, 1.0, 0.0]);

        assert_abs_diff_eq!(
            d.angular_separation_typed(&p).unwrap(),
            a.angular_separation(&p),
            epsilon = 1e-15
        );

        // unknown to the `Any` fallback
        assert!(d.dot(&p).unwrap_err().is_type_constraint());
    }

    #[test]
    fn test_from_typed_rejects_arity_disagreeing_with_system() {
        let sheet = Sheet(Flat([1.0, 0.0]));

        let err = DynRepresentation::from_typed(&sheet).unwrap_err();
        assert_eq!(
            err,
            ReprError::dimension_mismatch(CoordinateSystem::Cartesian, 3, 2)
        );

        let d = DynRepresentation::new(CoordinateSystem::Cartesian, [1.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            d.dot_typed(&sheet),
            Err(ReprError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_from_any_accepts_every_concrete_type() {
        let values: [Box<dyn Any>; 5] = [
            Box::new(CartesianRepresentation::new(1.0, 0.0, 0.0)),
            Box::new(SphericalRepresentation::new(0.0, HALF_PI, 1.0)),
            Box::new(SphericalEquatorialRepresentation::new(0.0, 0.0, 1.0)),
            Box::new(UnitSphericalRepresentation::new(0.0, 0.0)),
            Box::new(CylindricalRepresentation::new(1.0, 0.0, 0.0)),
        ];
        for value in &values {
            let rep = DynRepresentation::from_any(value.as_ref()).unwrap();
            assert_abs_diff_eq!(rep.to_cartesian().x, 1.0, epsilon = 1e-15);
        }
    }
}
