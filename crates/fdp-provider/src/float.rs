use std::ops::{Add, Div, Mul, Sub};

use crate::integral::Integral;

/// Floating-point types the provider can decode.
///
/// Each float is paired with an unsigned integral of matching width. A
/// probability is that integral read from the back of the buffer divided by
/// its maximum value, so `f32` consumes 4 bytes and `f64` consumes 8.
pub trait FloatingPoint:
    Copy
    + PartialOrd
    + std::fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Unsigned integral backing [`FuzzedDataProvider::consume_probability`].
    ///
    /// [`FuzzedDataProvider::consume_probability`]: crate::FuzzedDataProvider::consume_probability
    type Integral: Integral;

    const ZERO: Self;
    const TWO: Self;

    /// Most negative finite value.
    const LOWEST: Self;

    /// Largest finite value.
    const MAX: Self;

    /// Round an integral reading to the nearest representable float.
    fn from_integral(value: Self::Integral) -> Self;
}

impl FloatingPoint for f32 {
    type Integral = u32;

    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;
    const LOWEST: Self = f32::MIN;
    const MAX: Self = f32::MAX;

    #[allow(clippy::cast_precision_loss)]
    fn from_integral(value: u32) -> Self {
        value as f32
    }
}

impl FloatingPoint for f64 {
    type Integral = u64;

    const ZERO: Self = 0.0;
    const TWO: Self = 2.0;
    const LOWEST: Self = f64::MIN;
    const MAX: Self = f64::MAX;

    #[allow(clippy::cast_precision_loss)]
    fn from_integral(value: u64) -> Self {
        value as f64
    }
}
