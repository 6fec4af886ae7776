#![no_main]

use fdp_provider::FuzzedDataProvider;
use libfuzzer_sys::fuzz_target;

// Fuzz target: consume_random_length_string over raw input.
//
// The first byte is the length cap. Every string must respect it, only
// front bytes may be consumed, and the loop must terminate once the input
// runs dry.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, rest)) = data.split_first() else {
        return;
    };
    let max = usize::from(cap);

    let mut fdp = FuzzedDataProvider::new(rest);
    let mut rounds = 0usize;
    while !fdp.is_exhausted() {
        let before = fdp.remaining_bytes();
        let s = fdp.consume_random_length_string_max(max);
        assert!(s.len() <= max);
        assert_eq!(fdp.consumed_back(), 0);
        if max > 0 {
            // Either a byte was emitted or a terminator pair was eaten.
            assert!(fdp.remaining_bytes() < before);
        } else {
            break;
        }
        rounds += 1;
        assert!(rounds <= rest.len());
    }
});
