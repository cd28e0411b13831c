use std::fmt;

use approx::RelativeEq;
use num::{Float, FromPrimitive};

/// The real number types the solver is generic over.
///
/// Blanket-implemented for any float-like type that supports conversion from
/// primitives and relative comparison, which in practice means `f32` and `f64`.
pub trait RealScalar:
    Float + FromPrimitive + RelativeEq<Epsilon = Self> + fmt::Debug + fmt::Display
{
}

impl<T> RealScalar for T where
    T: Float + FromPrimitive + RelativeEq<Epsilon = T> + fmt::Debug + fmt::Display
{
}
