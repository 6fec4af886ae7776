/// Implementation of `fdp inspect`.
///
/// Shows where a harness would start reading: the first bytes (blob
/// operations), the last bytes (scalar operations, listed from the end
/// backwards), and a few canonical scalar readings taken from the back.
///
/// # Output format
///
/// ```text
/// Input: crash-1234 (1024 bytes)
/// Front window (first 16 bytes, read order):
///   0000  8a 19 0d 44 37 0d 38 5e 9b aa f3 da aa 88 f2 9b  ...D7.8^........
/// Back window (last 16 bytes, read order):
///   03ff  4a 29 3d cf 16 39 73 43 3d d6 54 fd 4d 11 3a 1f  J)=..9sC=.T.M.:.
/// Back readings (each from a fresh provider):
///   bool  false
///   u8    74
///   u32   1244216783
///   i64   -3879501644362583229
///   prob  0.28969179445105003
/// ```
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use fdp_provider::FuzzedDataProvider;

use crate::InspectArgs;

/// Run the `fdp inspect` command.
///
/// # Errors
///
/// Returns an error if the input file cannot be read.
pub fn run(args: &InspectArgs) -> Result<()> {
    let data =
        fs::read(&args.input).with_context(|| format!("cannot read {}", args.input.display()))?;
    tracing::debug!(path = %args.input.display(), len = data.len(), "loaded fuzz input");

    print!(
        "{}",
        inspect(&args.input.display().to_string(), &data, args.bytes)
    );
    Ok(())
}

/// Build the full `inspect` report for `data`, labelled with `name`.
pub(crate) fn inspect(name: &str, data: &[u8], window: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input: {name} ({} bytes)", data.len());
    if data.is_empty() {
        let _ = writeln!(
            out,
            "(empty: every provider call returns its empty or minimum value)"
        );
        return out;
    }

    let window = window.min(data.len());

    let _ = writeln!(out, "Front window (first {window} bytes, read order):");
    write_rows(&mut out, &data[..window], 0, 1);

    // Scalars read backwards from the end, so show the bytes in that order.
    let back: Vec<u8> = data.iter().rev().take(window).copied().collect();
    let _ = writeln!(out, "Back window (last {window} bytes, read order):");
    write_rows(&mut out, &back, data.len() - 1, -1);

    let _ = writeln!(out, "Back readings (each from a fresh provider):");
    let _ = writeln!(out, "  bool  {}", FuzzedDataProvider::new(data).consume_bool());
    let _ = writeln!(out, "  u8    {}", FuzzedDataProvider::new(data).consume_integral::<u8>());
    let _ = writeln!(out, "  u32   {}", FuzzedDataProvider::new(data).consume_integral::<u32>());
    let _ = writeln!(out, "  i64   {}", FuzzedDataProvider::new(data).consume_integral::<i64>());
    let _ = writeln!(
        out,
        "  prob  {:?}",
        FuzzedDataProvider::new(data).consume_probability::<f64>()
    );
    out
}

/// Write 16-byte hex rows. `start` is the buffer offset of the first byte
/// and `step` the direction offsets move in (`1` forward, `-1` backward).
#[allow(clippy::cast_possible_wrap)]
fn write_rows(out: &mut String, bytes: &[u8], start: usize, step: isize) {
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = start.saturating_add_signed(step * (i as isize) * 16);
        let hex = chunk
            .iter()
            .map(|b| hex::encode([*b]))
            .collect::<Vec<_>>()
            .join(" ");
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        let _ = writeln!(out, "  {offset:04x}  {hex:<47}  {ascii}");
    }
}
