#![no_main]

use fdp_recipe::Recipe;
use libfuzzer_sys::fuzz_target;

// Fuzz target: recipe text parsing.
//
// Input format:
//   bytes up to the first NUL: recipe text (must be UTF-8)
//   bytes after it: the fuzz input to replay the recipe over
//
// Parsing must never panic. A recipe that parses must print back to text
// that parses to the same steps, and replaying it must account for every
// input byte.
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let Ok(text) = std::str::from_utf8(&data[..split]) else {
        return;
    };
    let input = data.get(split + 1..).unwrap_or(&[]);

    let Ok(recipe) = Recipe::parse(text) else {
        return;
    };

    let printed = recipe
        .steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let reparsed = Recipe::parse(&printed).expect("printed recipe must parse");
    assert_eq!(reparsed, recipe);

    let trace = recipe.replay_bytes(input);
    assert_eq!(trace.entries.len(), recipe.steps.len());
    let consumed = trace.entries.last().map_or(0, |e| e.front + e.back);
    assert_eq!(consumed + trace.remaining, input.len());
});
