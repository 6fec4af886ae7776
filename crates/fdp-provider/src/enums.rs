/// Fieldless enums whose variants are numbered contiguously from zero.
///
/// [`FuzzedDataProvider::consume_enum`] draws an ordinal in
/// `0..=MAX_ORDINAL` and maps it back through [`FuzzEnum::from_ordinal`].
/// Implement it by hand or with [`fuzz_enum!`](crate::fuzz_enum).
///
/// [`FuzzedDataProvider::consume_enum`]: crate::FuzzedDataProvider::consume_enum
pub trait FuzzEnum: Sized {
    /// Ordinal of the last variant.
    const MAX_ORDINAL: u32;

    /// Map an ordinal in `0..=MAX_ORDINAL` to its variant.
    ///
    /// The provider never passes an ordinal above `MAX_ORDINAL`.
    fn from_ordinal(ordinal: u32) -> Self;
}

/// Implement [`FuzzEnum`] for a fieldless enum.
///
/// Variants must be listed in ordinal order, first variant at 0. The last
/// listed variant also serves as the fallback arm of `from_ordinal`.
///
/// ```
/// use fdp_provider::{fuzz_enum, FuzzEnum, FuzzedDataProvider};
///
/// #[derive(Debug, PartialEq, Eq)]
/// enum Op {
///     Read,
///     Write,
///     Flush,
/// }
///
/// fuzz_enum!(Op { Read, Write, Flush });
///
/// assert_eq!(Op::MAX_ORDINAL, 2);
/// let mut fdp = FuzzedDataProvider::new(&[0x04]);
/// assert_eq!(fdp.consume_enum::<Op>(), Op::Write); // 4 % 3 == 1
/// ```
#[macro_export]
macro_rules! fuzz_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::FuzzEnum for $name {
            const MAX_ORDINAL: u32 = {
                let variants: &[&str] = &[$(stringify!($variant)),+];
                #[allow(clippy::cast_possible_truncation)]
                let max = (variants.len() - 1) as u32;
                max
            };

            fn from_ordinal(ordinal: u32) -> Self {
                const VARIANTS: &[$name] = &[$($name::$variant),+];
                let index = usize::try_from(ordinal)
                    .unwrap_or(usize::MAX)
                    .min(VARIANTS.len() - 1);
                match VARIANTS[index] {
                    $($name::$variant => $name::$variant,)+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Low,
        Mid,
        High,
    }

    fuzz_enum!(Level { Low, Mid, High });

    #[test]
    fn max_ordinal_counts_from_zero() {
        assert_eq!(Level::MAX_ORDINAL, 2);
    }

    #[test]
    fn ordinals_map_in_declaration_order() {
        assert_eq!(Level::from_ordinal(0), Level::Low);
        assert_eq!(Level::from_ordinal(1), Level::Mid);
        assert_eq!(Level::from_ordinal(2), Level::High);
    }

    #[test]
    fn out_of_range_ordinal_saturates_to_last() {
        assert_eq!(Level::from_ordinal(99), Level::High);
    }
}
