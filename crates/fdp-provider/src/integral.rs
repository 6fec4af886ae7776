/// Integer types the provider can decode from the back of the buffer.
///
/// Every implementor fits in 64 bits. Values travel through a `u64`
/// accumulator: signed values are sign-extended on the way in and
/// truncated on the way out, so `min + accumulator` computed with
/// wrapping arithmetic lands on the right value of `Self` for both
/// signed and unsigned types.
///
/// ```text
/// ┌───────────┬──────┬──────────────────────────┐
/// │ Type      │ BITS │ Bytes read at full range │
/// ├───────────┼──────┼──────────────────────────┤
/// │ u8 / i8   │ 8    │ 1                        │
/// │ u16 / i16 │ 16   │ 2                        │
/// │ u32 / i32 │ 32   │ 4                        │
/// │ u64 / i64 │ 64   │ 8                        │
/// │ usize     │ ptr  │ 4 or 8                   │
/// └───────────┴──────┴──────────────────────────┘
/// ```
pub trait Integral: Copy + PartialOrd + std::fmt::Debug {
    /// Width of the type in bits.
    const BITS: u32;

    /// Smallest representable value.
    const MIN: Self;

    /// Largest representable value.
    const MAX: Self;

    /// Widen to the `u64` accumulator domain (sign-extending signed types).
    fn to_u64_wrapping(self) -> u64;

    /// Narrow from the `u64` accumulator domain, keeping the low `BITS` bits.
    fn from_u64_wrapping(value: u64) -> Self;
}

// `as` casts are the point here: i64 -> u64 reinterprets the two's
// complement bits and u64 -> iN truncates, which is exactly the wrapping
// behaviour the accumulator needs.
macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Integral for $ty {
                const BITS: u32 = <$ty>::BITS;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[allow(
                    clippy::cast_sign_loss,
                    clippy::cast_possible_wrap,
                    clippy::cast_possible_truncation,
                    clippy::cast_lossless
                )]
                fn to_u64_wrapping(self) -> u64 {
                    self as i128 as u64
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_u64_wrapping(value: u64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
