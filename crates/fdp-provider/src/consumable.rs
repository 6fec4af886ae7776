use crate::provider::FuzzedDataProvider;

/// Types with a canonical decoding rule, used by
/// [`FuzzedDataProvider::consume`].
///
/// | Type                  | Rule                              |
/// |-----------------------|-----------------------------------|
/// | integers (`u8`..`isize`) | `consume_integral::<T>()`      |
/// | `bool`                | `consume_bool()`                  |
/// | `f32`, `f64`          | `consume_floating_point::<F>()`   |
pub trait Consumable: Sized {
    fn consume_from(provider: &mut FuzzedDataProvider<'_>) -> Self;
}

macro_rules! consumable_integral {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Consumable for $ty {
                fn consume_from(provider: &mut FuzzedDataProvider<'_>) -> Self {
                    provider.consume_integral()
                }
            }
        )*
    };
}

consumable_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Consumable for bool {
    fn consume_from(provider: &mut FuzzedDataProvider<'_>) -> Self {
        provider.consume_bool()
    }
}

impl Consumable for f32 {
    fn consume_from(provider: &mut FuzzedDataProvider<'_>) -> Self {
        provider.consume_floating_point()
    }
}

impl Consumable for f64 {
    fn consume_from(provider: &mut FuzzedDataProvider<'_>) -> Self {
        provider.consume_floating_point()
    }
}
