#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use fdp_provider::FuzzedDataProvider;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Bytes(u16),
    Terminated(u16, u8),
    Str(u16),
    RandomString(u16),
    Remaining,
    Integral { lo: i64, hi: i64 },
    Unsigned { lo: u32, hi: u32 },
    Bool,
    Probability,
    FloatRange { lo: f64, hi: f64 },
    FullFloat,
    Pick(u8),
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    ops: Vec<FuzzOp>,
    payload: Vec<u8>,
}

// Fuzz target: arbitrary call sequences against one provider.
//
// Neither cursor may move backwards, and after every call the two cursors
// plus the remaining count must add up to the payload length. Scalar
// results must stay inside their ranges and front reads must match the
// payload.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut u) else {
        return;
    };

    let payload = &input.payload;
    let mut fdp = FuzzedDataProvider::new(payload);

    for op in input.ops.iter().take(64) {
        let front = fdp.consumed_front();
        let back = fdp.consumed_back();
        let before = fdp.remaining_bytes();

        match *op {
            FuzzOp::Bytes(n) => {
                let bytes = fdp.consume_bytes(usize::from(n));
                assert_eq!(bytes, payload[front..front + bytes.len()]);
            }
            FuzzOp::Terminated(n, t) => {
                let bytes = fdp.consume_bytes_with_terminator(usize::from(n), t);
                assert_eq!(bytes.last(), Some(&t));
            }
            FuzzOp::Str(n) => {
                let s = fdp.consume_bytes_as_string(usize::from(n));
                assert_eq!(s.as_bytes(), &payload[front..front + s.len()]);
            }
            FuzzOp::RandomString(max) => {
                let s = fdp.consume_random_length_string_max(usize::from(max));
                assert!(s.len() <= usize::from(max));
            }
            FuzzOp::Remaining => {
                assert_eq!(fdp.consume_remaining_bytes().len(), before);
            }
            FuzzOp::Integral { lo, hi } => {
                let (lo, hi) = (lo.min(hi), lo.max(hi));
                let v = fdp.consume_integral_in_range(lo, hi);
                assert!(lo <= v && v <= hi);
            }
            FuzzOp::Unsigned { lo, hi } => {
                let (lo, hi) = (lo.min(hi), lo.max(hi));
                let v = fdp.consume_integral_in_range(lo, hi);
                assert!(lo <= v && v <= hi);
            }
            FuzzOp::Bool => {
                fdp.consume_bool();
            }
            FuzzOp::Probability => {
                let p = fdp.consume_probability::<f64>();
                assert!((0.0..=1.0).contains(&p));
            }
            FuzzOp::FloatRange { lo, hi } => {
                if !lo.is_finite() || !hi.is_finite() {
                    continue;
                }
                let (lo, hi) = (lo.min(hi), lo.max(hi));
                let v = fdp.consume_floating_point_in_range(lo, hi);
                assert!(lo <= v && v <= hi, "{v} outside {lo}..={hi}");
            }
            FuzzOp::FullFloat => {
                assert!(fdp.consume_floating_point::<f64>().is_finite());
            }
            FuzzOp::Pick(n) => {
                let values: Vec<u8> = (0..=n).collect();
                let v = fdp.pick_value_in_array(&values);
                assert!(v <= n);
            }
        }

        assert!(fdp.remaining_bytes() <= before);
        assert!(fdp.consumed_front() >= front);
        assert!(fdp.consumed_back() >= back);
        assert_eq!(
            fdp.consumed_front() + fdp.consumed_back() + fdp.remaining_bytes(),
            payload.len()
        );
    }
});
