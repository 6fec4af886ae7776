use std::str::FromStr;

use fdp_provider::FuzzedDataProvider;
use serde::Serialize;

use crate::error::RecipeError;
use crate::step::{FloatKind, IntKind, Step};
use crate::value::Value;

/// An ordered list of provider calls.
///
/// Text form: steps separated by whitespace or commas, `#` comments to end
/// of line.
///
/// ```text
/// # header, then a length-bounded name and the rest as payload
/// u8 bool i32:-5..=5
/// rstr:16, rest
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub steps: Vec<Step>,
}

/// One replayed step: what ran, what it produced, and where the cursors
/// stood afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TraceEntry {
    pub step: String,
    pub value: Value,
    /// Bytes consumed from the front so far.
    pub front: usize,
    /// Bytes consumed from the back so far.
    pub back: usize,
}

/// The outcome of replaying a [`Recipe`] over one input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trace {
    pub entries: Vec<TraceEntry>,
    pub remaining: usize,
}

impl Recipe {
    /// Parse a recipe from its text form.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::Empty`] if no steps remain after stripping
    /// comments, or the first per-step error encountered.
    pub fn parse(text: &str) -> Result<Self, RecipeError> {
        let steps = text
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
            .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|token| !token.is_empty())
            .enumerate()
            .map(|(idx, token)| Step::parse(idx, token))
            .collect::<Result<Vec<_>, _>>()?;

        if steps.is_empty() {
            return Err(RecipeError::Empty);
        }
        Ok(Self { steps })
    }

    /// Run every step against `provider`, in order.
    pub fn replay(&self, provider: &mut FuzzedDataProvider<'_>) -> Trace {
        let entries = self
            .steps
            .iter()
            .map(|step| {
                let value = run_step(step, provider);
                TraceEntry {
                    step: step.to_string(),
                    value,
                    front: provider.consumed_front(),
                    back: provider.consumed_back(),
                }
            })
            .collect();

        Trace {
            entries,
            remaining: provider.remaining_bytes(),
        }
    }

    /// Convenience wrapper: replay over a fresh provider for `data`.
    pub fn replay_bytes(&self, data: &[u8]) -> Trace {
        self.replay(&mut FuzzedDataProvider::new(data))
    }
}

impl FromStr for Recipe {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn run_step(step: &Step, fdp: &mut FuzzedDataProvider<'_>) -> Value {
    match step {
        Step::Integral { kind, range } => run_integral(*kind, *range, fdp),
        Step::Bool => Value::Bool(fdp.consume_bool()),
        Step::Float { kind, range } => run_float(*kind, *range, fdp),
        Step::Probability(FloatKind::F32) => Value::F32(fdp.consume_probability()),
        Step::Probability(FloatKind::F64) => Value::F64(fdp.consume_probability()),
        Step::Bytes {
            len,
            terminator: None,
        } => Value::Bytes(fdp.consume_bytes(*len)),
        Step::Bytes {
            len,
            terminator: Some(t),
        } => Value::Bytes(fdp.consume_bytes_with_terminator(*len, *t)),
        Step::Str { len } => Value::Text(fdp.consume_bytes_as_string(*len).into_bytes()),
        Step::RandomString { max: None } => {
            Value::Text(fdp.consume_random_length_string().into_bytes())
        }
        Step::RandomString { max: Some(max) } => {
            Value::Text(fdp.consume_random_length_string_max(*max).into_bytes())
        }
        Step::Rest => Value::Bytes(fdp.consume_remaining_bytes()),
        Step::RestStr => Value::Text(fdp.consume_remaining_bytes_as_string().into_bytes()),
        Step::Pick(items) => Value::Text(fdp.pick_value_in_array(items).into_bytes()),
    }
}

// Range bounds were checked against the kind's limits at parse time, so the
// conversions below cannot hit their fallbacks.
fn run_integral(kind: IntKind, range: Option<(i128, i128)>, fdp: &mut FuzzedDataProvider<'_>) -> Value {
    macro_rules! run {
        ($ty:ty, $variant:ident, $wide:ty) => {{
            let v: $ty = match range {
                Some((lo, hi)) => fdp.consume_integral_in_range(
                    <$ty>::try_from(lo).unwrap_or(<$ty>::MIN),
                    <$ty>::try_from(hi).unwrap_or(<$ty>::MAX),
                ),
                None => fdp.consume_integral(),
            };
            Value::$variant(<$wide>::try_from(v).unwrap_or(<$wide>::MAX))
        }};
    }

    match kind {
        IntKind::U8 => run!(u8, Unsigned, u64),
        IntKind::U16 => run!(u16, Unsigned, u64),
        IntKind::U32 => run!(u32, Unsigned, u64),
        IntKind::U64 => run!(u64, Unsigned, u64),
        IntKind::Usize => run!(usize, Unsigned, u64),
        IntKind::I8 => run!(i8, Signed, i64),
        IntKind::I16 => run!(i16, Signed, i64),
        IntKind::I32 => run!(i32, Signed, i64),
        IntKind::I64 => run!(i64, Signed, i64),
        IntKind::Isize => run!(isize, Signed, i64),
    }
}

fn run_float(kind: FloatKind, range: Option<(f64, f64)>, fdp: &mut FuzzedDataProvider<'_>) -> Value {
    match (kind, range) {
        (FloatKind::F32, None) => Value::F32(fdp.consume_floating_point()),
        (FloatKind::F64, None) => Value::F64(fdp.consume_floating_point()),
        #[allow(clippy::cast_possible_truncation)]
        (FloatKind::F32, Some((lo, hi))) => {
            Value::F32(fdp.consume_floating_point_in_range(lo as f32, hi as f32))
        }
        (FloatKind::F64, Some((lo, hi))) => Value::F64(fdp.consume_floating_point_in_range(lo, hi)),
    }
}
