//! The canonical 3-D cartesian tuple.
//!
//! Every representation, whatever its coordinate system, can be flattened into a
//! [`Vector3`]. Vector algebra is only well defined here: the raw components of a
//! spherical or cylindrical tuple mix angles and lengths and cannot be added or
//! squared directly.
//!
//! ```
//! use celestial_repr::Vector3;
//!
//! let a = Vector3::x_axis();
//! let b = Vector3::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
//! ```
//!
//! `Vector3` is a plain value. Operators return new vectors and nothing mutates
//! in place.
use crate::{MathErrorKind, ReprError, ReprResult};
use std::fmt;

/// A cartesian `(x, y, z)` triple.
///
/// Components are public for direct reads. The axes carry no frame meaning of
/// their own; they are whatever the producing representation's transform says.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. Use `v[i]` for panicking access.
    pub fn get(&self, index: usize) -> ReprResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(ReprError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Returns the Euclidean norm `√(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Divides every component by the magnitude.
    ///
    /// Unguarded: the zero vector yields NaN components. Use
    /// [`try_normalize`](Self::try_normalize) when the input may be zero.
    ///
    /// ```
    /// use celestial_repr::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    /// assert!(Vector3::zeros().normalize().x.is_nan());
    /// ```
    #[inline]
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    /// Like [`normalize`](Self::normalize), but refuses the zero vector.
    pub fn try_normalize(&self) -> ReprResult<Self> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(ReprError::math_error(
                "Vector3::try_normalize",
                MathErrorKind::DivisionByZero,
                "cannot normalize a zero-magnitude vector",
            ));
        }
        Ok(*self / mag)
    }

    /// Computes the dot product.
    ///
    /// ```
    /// use celestial_repr::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Component-wise average of two vectors.
    #[inline]
    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other) / 2.0
    }

    /// Angle between two vectors in radians, `[0, π]`.
    ///
    /// Uses `atan2(|a×b|, a·b)`, which stays accurate for nearly parallel and
    /// nearly antiparallel inputs where `acos` of the dot product does not.
    pub fn angle_to(&self, other: &Self) -> f64 {
        libm::atan2(self.cross(other).magnitude(), self.dot(other))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
