use crate::consumable::Consumable;
use crate::element::ByteElement;
use crate::enums::FuzzEnum;
use crate::float::FloatingPoint;
use crate::integral::Integral;
use crate::raw_string::RawString;

/// Escape byte for [`FuzzedDataProvider::consume_random_length_string`].
const BACKSLASH: u8 = b'\\';

/// Turns one fuzzer-supplied byte buffer into typed values.
///
/// The unconsumed region `[front, back)` shrinks from both ends. Blob
/// operations (bytes, strings) take from the front; scalar operations
/// (integers, floats, bools, enums, picks) take from the back. Keeping the
/// two apart means a mutation that grows or shrinks a blob does not shift
/// the bytes every later scalar is decoded from.
///
/// ```text
///  data: [ b0 b1 b2 ............................ bN-2 bN-1 ]
///          ^front ->                           <- back^
///          consume_bytes(..)            consume_integral(..)
/// ```
///
/// Every operation is total. Running out of data truncates blobs and
/// zero-extends scalars; nothing ever returns an error. Callers that care
/// whether entropy ran out check [`remaining_bytes`](Self::remaining_bytes).
#[derive(Clone, Debug)]
pub struct FuzzedDataProvider<'a> {
    data: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> FuzzedDataProvider<'a> {
    /// Borrow `data` for decoding. Nothing is copied.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            front: 0,
            back: data.len(),
        }
    }

    // ── Status ──────────────────────────────────────────────────────────────

    /// Bytes not yet consumed by either end.
    pub fn remaining_bytes(&self) -> usize {
        self.back - self.front
    }

    pub fn is_exhausted(&self) -> bool {
        self.front == self.back
    }

    /// Bytes taken so far by front (blob) operations.
    pub fn consumed_front(&self) -> usize {
        self.front
    }

    /// Bytes taken so far by back (scalar) operations.
    pub fn consumed_back(&self) -> usize {
        self.data.len() - self.back
    }

    // ── Front (blob) operations ─────────────────────────────────────────────

    /// Take up to `n` bytes from the front; the slice is shorter when less
    /// remains.
    fn take_front(&mut self, n: usize) -> &'a [u8] {
        let n = n.min(self.remaining_bytes());
        let taken = &self.data[self.front..self.front + n];
        self.front += n;
        taken
    }

    /// Consume `min(n, remaining_bytes())` bytes from the front.
    pub fn consume_bytes(&mut self, n: usize) -> Vec<u8> {
        self.take_front(n).to_vec()
    }

    /// Like [`consume_bytes`](Self::consume_bytes), reinterpreting each byte
    /// as `E`.
    pub fn consume_bytes_as<E: ByteElement>(&mut self, n: usize) -> Vec<E> {
        self.take_front(n).iter().map(|&b| E::from_byte(b)).collect()
    }

    /// Consume up to `n` bytes and append `terminator`. The terminator does
    /// not come from the buffer.
    pub fn consume_bytes_with_terminator(&mut self, n: usize, terminator: u8) -> Vec<u8> {
        let taken = self.take_front(n);
        let mut out = Vec::with_capacity(taken.len() + 1);
        out.extend_from_slice(taken);
        out.push(terminator);
        out
    }

    /// Consume up to `n` bytes as an unvalidated string.
    pub fn consume_bytes_as_string(&mut self, n: usize) -> RawString {
        RawString::from(self.take_front(n))
    }

    /// Copy up to `n` bytes into the start of `destination` and return how
    /// many were copied.
    ///
    /// The count is also capped by `destination.len()`; bytes of
    /// `destination` past the count are left as they were.
    pub fn consume_data(&mut self, destination: &mut [u8], n: usize) -> usize {
        let taken = self.take_front(n.min(destination.len()));
        destination[..taken.len()].copy_from_slice(taken);
        taken.len()
    }

    /// Consume everything between the cursors. Bytes already taken from
    /// the back are not included.
    pub fn consume_remaining_bytes(&mut self) -> Vec<u8> {
        self.consume_bytes(self.remaining_bytes())
    }

    pub fn consume_remaining_bytes_as_string(&mut self) -> RawString {
        self.consume_bytes_as_string(self.remaining_bytes())
    }

    /// [`consume_random_length_string_max`](Self::consume_random_length_string_max)
    /// bounded only by the data that remains.
    pub fn consume_random_length_string(&mut self) -> RawString {
        self.consume_random_length_string_max(self.remaining_bytes())
    }

    /// Read a self-delimiting string of at most `max_length` bytes from the
    /// front.
    ///
    /// A backslash escapes the byte after it: `\\` yields one literal
    /// backslash, while a backslash followed by anything else (or by the end
    /// of the data) terminates the string. Both bytes of a terminator are
    /// consumed and neither is part of the result. Reaching `max_length` or
    /// the end of the data also ends the string.
    pub fn consume_random_length_string_max(&mut self, max_length: usize) -> RawString {
        let mut out = RawString::with_capacity(max_length.min(self.remaining_bytes()));
        while out.len() < max_length && !self.is_exhausted() {
            let byte = self.data[self.front];
            self.front += 1;
            if byte == BACKSLASH {
                if self.is_exhausted() {
                    break;
                }
                let escaped = self.data[self.front];
                self.front += 1;
                if escaped != BACKSLASH {
                    break;
                }
            }
            out.push(byte);
        }
        out
    }

    // ── Back (scalar) operations ────────────────────────────────────────────

    /// Decode an integer in `[min, max]` from the back of the buffer.
    ///
    /// Reads just enough bytes to cover `max - min` (none when they are
    /// equal), big-endian from the back, then reduces the reading modulo
    /// `max - min + 1`. The reduction is slightly biased for spans that are
    /// not a power of two; that mapping is part of the decoding contract and
    /// must not change. When the data runs out the reading is simply
    /// shorter, so an exhausted provider returns `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn consume_integral_in_range<T: Integral>(&mut self, min: T, max: T) -> T {
        assert!(min <= max, "consume_integral_in_range: min {min:?} > max {max:?}");

        let min_bits = min.to_u64_wrapping();
        let range = max.to_u64_wrapping().wrapping_sub(min_bits);

        let mut result: u64 = 0;
        let mut offset: u32 = 0;
        while offset < T::BITS && (range >> offset) > 0 && !self.is_exhausted() {
            self.back -= 1;
            result = (result << 8) | u64::from(self.data[self.back]);
            offset += 8;
        }

        // range + 1 would overflow for the full u64/i64 span.
        if range != u64::MAX {
            result %= range + 1;
        }

        T::from_u64_wrapping(min_bits.wrapping_add(result))
    }

    /// Decode an integer over the full range of `T`.
    ///
    /// An exhausted provider returns `T::MIN` (so `0` for unsigned types and
    /// the most negative value for signed ones).
    pub fn consume_integral<T: Integral>(&mut self) -> T {
        self.consume_integral_in_range(T::MIN, T::MAX)
    }

    /// Lowest bit of one byte from the back; `false` once exhausted.
    pub fn consume_bool(&mut self) -> bool {
        self.consume_integral::<u8>() & 1 == 1
    }

    /// A value in `[0, 1]` built from 4 (`f32`) or 8 (`f64`) bytes; `0` once
    /// exhausted.
    pub fn consume_probability<F: FloatingPoint>(&mut self) -> F {
        let reading = F::from_integral(self.consume_integral::<F::Integral>());
        reading / F::from_integral(<F::Integral as Integral>::MAX)
    }

    /// Decode a float in `[min, max]`.
    ///
    /// `min == max` returns `min` without consuming anything. When
    /// `max - min` is not representable (a span crossing zero wider than
    /// `F::MAX`), one bool picks the lower or upper half of the interval
    /// before the probability is drawn, so no intermediate value overflows.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN.
    pub fn consume_floating_point_in_range<F: FloatingPoint>(&mut self, min: F, max: F) -> F {
        assert!(min <= max, "consume_floating_point_in_range: min {min:?} > max {max:?}");

        if min == max {
            return min;
        }

        let mut result = min;
        let range;
        if max > F::ZERO && min < F::ZERO && max > min + F::MAX {
            range = max / F::TWO - min / F::TWO;
            if self.consume_bool() {
                result = result + range;
            }
        } else {
            range = max - min;
        }

        let value = result + range * self.consume_probability::<F>();
        // Rounding in the interpolation can land one ulp past the bound.
        if value > max { max } else { value }
    }

    /// Decode a float anywhere in the finite range of `F`.
    pub fn consume_floating_point<F: FloatingPoint>(&mut self) -> F {
        self.consume_floating_point_in_range(F::LOWEST, F::MAX)
    }

    /// Pick one element of `values`, indexed by
    /// `consume_integral_in_range(0, len - 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn pick_value_in_array<T: Clone>(&mut self, values: &[T]) -> T {
        assert!(!values.is_empty(), "pick_value_in_array: empty slice");
        let index = self.consume_integral_in_range(0, values.len() - 1);
        values[index].clone()
    }

    /// Decode a variant of `E` from its ordinal in `0..=E::MAX_ORDINAL`.
    pub fn consume_enum<E: FuzzEnum>(&mut self) -> E {
        E::from_ordinal(self.consume_integral_in_range(0, E::MAX_ORDINAL))
    }

    /// Decode a `T` with its canonical rule (see [`Consumable`]).
    pub fn consume<T: Consumable>(&mut self) -> T {
        T::consume_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_provider_spans_whole_buffer() {
        let data = [1, 2, 3, 4];
        let fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.remaining_bytes(), 4);
        assert_eq!(fdp.consumed_front(), 0);
        assert_eq!(fdp.consumed_back(), 0);
        assert!(!fdp.is_exhausted());
    }

    #[test]
    fn empty_buffer_is_exhausted_from_the_start() {
        let mut fdp = FuzzedDataProvider::new(&[]);
        assert!(fdp.is_exhausted());
        assert!(fdp.consume_bytes(8).is_empty());
        assert_eq!(fdp.consume_integral::<i32>(), i32::MIN);
        assert!(!fdp.consume_bool());
    }

    #[test]
    fn front_and_back_do_not_overlap() {
        let data = [0xAA, 0xBB, 0xCC];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral::<u8>(), 0xCC);
        assert_eq!(fdp.consume_remaining_bytes(), vec![0xAA, 0xBB]);
        assert_eq!(fdp.consumed_back(), 1);
        assert_eq!(fdp.consumed_front(), 2);
    }

    #[test]
    fn bytes_are_truncated_to_what_remains() {
        let data = [1, 2, 3];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_bytes(2), vec![1, 2]);
        assert_eq!(fdp.consume_bytes(10), vec![3]);
        assert!(fdp.consume_bytes(10).is_empty());
    }

    #[test]
    fn terminator_is_appended_even_when_exhausted() {
        let mut fdp = FuzzedDataProvider::new(&[]);
        assert_eq!(fdp.consume_bytes_with_terminator(4, 0xEE), vec![0xEE]);
        assert_eq!(fdp.remaining_bytes(), 0);
    }

    #[test]
    fn consume_data_respects_destination_length() {
        let data = [9, 8, 7, 6, 5];
        let mut fdp = FuzzedDataProvider::new(&data);
        let mut dest = [0u8; 3];
        assert_eq!(fdp.consume_data(&mut dest, 10), 3);
        assert_eq!(dest, [9, 8, 7]);
        assert_eq!(fdp.consume_data(&mut dest, 1), 1);
        assert_eq!(dest, [6, 8, 7]);
        assert_eq!(fdp.remaining_bytes(), 1);
    }

    #[test]
    fn random_length_string_unescapes_double_backslash() {
        let data = *b"ab\\\\cd";
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_random_length_string(), "ab\\cd");
        assert!(fdp.is_exhausted());
    }

    #[test]
    fn random_length_string_stops_at_escape_pair() {
        let data = *b"ab\\xcd";
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_random_length_string(), "ab");
        assert_eq!(fdp.consume_random_length_string(), "cd");
    }

    #[test]
    fn random_length_string_drops_trailing_backslash() {
        let data = *b"ab\\";
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_random_length_string(), "ab");
        assert!(fdp.is_exhausted());
    }

    #[test]
    fn random_length_string_honours_max_length() {
        let data = *b"\\\\\\\\xyz";
        let mut fdp = FuzzedDataProvider::new(&data);
        // Each escaped backslash counts as one output byte.
        assert_eq!(fdp.consume_random_length_string_max(1), "\\");
        assert_eq!(fdp.consume_random_length_string_max(2), "\\x");
        assert_eq!(fdp.remaining_bytes(), 2);
    }

    #[test]
    fn integral_reads_big_endian_from_the_back() {
        let data = [0x00, 0x12, 0x34];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral::<u16>(), 0x3412);
        assert_eq!(fdp.remaining_bytes(), 1);
    }

    #[test]
    fn integral_zero_extends_on_short_data() {
        let data = [0x01, 0x02];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral::<u32>(), 0x0201);
        assert!(fdp.is_exhausted());
    }

    #[test]
    fn degenerate_range_consumes_nothing() {
        let data = [0xFF];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral_in_range(7u16, 7), 7);
        assert_eq!(fdp.consume_floating_point_in_range(2.5f64, 2.5), 2.5);
        assert_eq!(fdp.remaining_bytes(), 1);
    }

    #[test]
    fn range_reduction_is_modulo_span() {
        let data = [200];
        let mut fdp = FuzzedDataProvider::new(&data);
        // 200 % 11 == 2
        assert_eq!(fdp.consume_integral_in_range(-5i8, 5), -3);
    }

    #[test]
    fn full_u64_range_skips_reduction() {
        let data = [0xFF; 8];
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral::<u64>(), u64::MAX);
        let mut fdp = FuzzedDataProvider::new(&data);
        assert_eq!(fdp.consume_integral::<i64>(), i64::MAX);
    }

    #[test]
    #[should_panic(expected = "min")]
    fn inverted_integral_range_panics() {
        let mut fdp = FuzzedDataProvider::new(&[0]);
        let _ = fdp.consume_integral_in_range(3u8, 2);
    }

    #[test]
    #[should_panic(expected = "empty slice")]
    fn picking_from_empty_slice_panics() {
        let mut fdp = FuzzedDataProvider::new(&[0]);
        let _: u8 = fdp.pick_value_in_array(&[]);
    }

    #[test]
    fn probability_bounds() {
        let mut fdp = FuzzedDataProvider::new(&[0xFF; 4]);
        assert_eq!(fdp.consume_probability::<f32>(), 1.0);
        assert_eq!(fdp.consume_probability::<f32>(), 0.0);
    }

    #[test]
    fn wide_float_range_splits_on_bool() {
        // Last byte 0x01 -> upper half; then an all-zero probability.
        let data = [0, 0, 0, 0, 0, 0, 0, 0, 0x01];
        let mut fdp = FuzzedDataProvider::new(&data);
        let v: f64 = fdp.consume_floating_point();
        assert_eq!(v, 0.0);
        assert!(fdp.is_exhausted());
    }

    #[test]
    fn float_result_never_exceeds_max() {
        let mut fdp = FuzzedDataProvider::new(&[0xFF; 8]);
        let v = fdp.consume_floating_point_in_range(-13.37f64, 31.337);
        assert!(v <= 31.337);
    }
}
