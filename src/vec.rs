//! 2D vector value type shared by the chain and the boids.

use crate::error::PhysicsError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;
use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

/// 2D vector. Plain value: copy it, pass it, return it.
///
/// Every binary operator comes in three forms: vector-vector (component-wise),
/// vector-scalar (broadcast) and scalar-vector. Division and remainder follow
/// native float semantics, so dividing by a zero component yields `inf`/`NaN`
/// rather than an error.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Vector with both components set to `value`.
    pub fn splat(value: F) -> Self { Vec2 { x: value, y: value } }

    /// Vector with both components NaN. Returned by queries that found nothing.
    pub fn nan() -> Self { Self::splat(F::nan()) }

    /// `true` if either component is NaN.
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Read an axis by index (0 = x, 1 = y).
    pub fn component(&self, index: usize) -> Result<F, PhysicsError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(PhysicsError::AxisOutOfRange { index }),
        }
    }

    /// Write an axis by index (0 = x, 1 = y).
    pub fn set_component(&mut self, index: usize, value: F) -> Result<(), PhysicsError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(PhysicsError::AxisOutOfRange { index }),
        }
        Ok(())
    }

    /// Iterate over `x` then `y`.
    pub fn iter(self) -> core::array::IntoIter<F, 2> {
        [self.x, self.y].into_iter()
    }

    /// Clamp each component into the box `[min, max]`, in place.
    pub fn clamp(&mut self, min: Self, max: Self) -> &mut Self {
        self.x = self.x.clamp(min.x, max.x);
        self.y = self.y.clamp(min.y, max.y);
        self
    }

    /// Clamp both components into `[min, max]`, in place.
    pub fn clamp_scalar(&mut self, min: F, max: F) -> &mut Self {
        self.x = self.x.clamp(min, max);
        self.y = self.y.clamp(min, max);
        self
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction. The zero vector maps to itself.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            Self::zero()
        } else {
            self / len
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Linear interpolation between self and other.
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Point at `t` on the quadratic Bézier from `self` to `end` bent by `control`.
    pub fn quadratic_bezier(self, control: Self, end: Self, t: F) -> Self {
        let a = self.lerp(control, t);
        let b = control.lerp(end, t);
        a.lerp(b, t)
    }
}

impl<F: Float> fmt::Display for Vec2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

// --------------------------------------------------------------------------
// Arithmetic
// --------------------------------------------------------------------------

macro_rules! vec2_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<F: Float> $Op for Vec2<F> {
            type Output = Self;
            fn $op(self, rhs: Self) -> Self {
                let f = |$a: F, $b: F| $body;
                Vec2 { x: f(self.x, rhs.x), y: f(self.y, rhs.y) }
            }
        }

        impl<F: Float> $Op<F> for Vec2<F> {
            type Output = Self;
            fn $op(self, rhs: F) -> Self {
                let f = |$a: F, $b: F| $body;
                Vec2 { x: f(self.x, rhs), y: f(self.y, rhs) }
            }
        }

        impl<F: Float> $OpAssign for Vec2<F> {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl<F: Float> $OpAssign<F> for Vec2<F> {
            fn $op_assign(&mut self, rhs: F) {
                *self = $Op::$op(*self, rhs);
            }
        }
    };
}

vec2_binop!(Add, add, AddAssign, add_assign, |a, b| a + b);
vec2_binop!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);
vec2_binop!(Mul, mul, MulAssign, mul_assign, |a, b| a * b);
vec2_binop!(Div, div, DivAssign, div_assign, |a, b| a / b);
vec2_binop!(Rem, rem, RemAssign, rem_assign, |a, b| a.fmod(b));

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

// Scalar on the left: `2.0 * v`, `1.0 - v`. Orphan rules need concrete floats.
macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl Add<Vec2<$t>> for $t {
            type Output = Vec2<$t>;
            fn add(self, rhs: Vec2<$t>) -> Vec2<$t> { Vec2::new(self + rhs.x, self + rhs.y) }
        }

        impl Sub<Vec2<$t>> for $t {
            type Output = Vec2<$t>;
            fn sub(self, rhs: Vec2<$t>) -> Vec2<$t> { Vec2::new(self - rhs.x, self - rhs.y) }
        }

        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;
            fn mul(self, rhs: Vec2<$t>) -> Vec2<$t> { Vec2::new(self * rhs.x, self * rhs.y) }
        }

        impl Div<Vec2<$t>> for $t {
            type Output = Vec2<$t>;
            fn div(self, rhs: Vec2<$t>) -> Vec2<$t> { Vec2::new(self / rhs.x, self / rhs.y) }
        }
    )*};
}

scalar_lhs_ops!(f32, f64);

// --------------------------------------------------------------------------
// Indexing, iteration, conversions
// --------------------------------------------------------------------------

impl<F: Float> Index<usize> for Vec2<F> {
    type Output = F;

    /// Panics for any index other than 0 or 1, like an array would.
    fn index(&self, index: usize) -> &F {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl<F: Float> IndexMut<usize> for Vec2<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {index}"),
        }
    }
}

impl<F: Float> IntoIterator for Vec2<F> {
    type Item = F;
    type IntoIter = core::array::IntoIter<F, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<F: Float> From<[F; 2]> for Vec2<F> {
    fn from([x, y]: [F; 2]) -> Self { Vec2 { x, y } }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self { Vec2 { x, y } }
}

impl<F: Float> From<Vec2<F>> for [F; 2] {
    fn from(v: Vec2<F>) -> Self { [v.x, v.y] }
}

impl<F: Float> TryFrom<&[F]> for Vec2<F> {
    type Error = PhysicsError;

    fn try_from(values: &[F]) -> Result<Self, Self::Error> {
        match values {
            [x, y] => Ok(Vec2 { x: *x, y: *y }),
            _ => Err(PhysicsError::InvalidComponentCount { len: values.len() }),
        }
    }
}

impl<F: Float> TryFrom<AllocVec<F>> for Vec2<F> {
    type Error = PhysicsError;

    fn try_from(values: AllocVec<F>) -> Result<Self, Self::Error> {
        Self::try_from(values.as_slice())
    }
}
