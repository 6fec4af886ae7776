use std::fmt;

use crate::error::RecipeError;

/// Integer types a recipe step can decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntKind {
    U8,
    U16,
    U32,
    U64,
    Usize,
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl IntKind {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "usize" => Self::Usize,
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "isize" => Self::Isize,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
        }
    }

    /// Inclusive bounds of the type, widened so every kind shares one domain.
    fn bounds(self) -> (i128, i128) {
        match self {
            Self::U8 => (0, u8::MAX.into()),
            Self::U16 => (0, u16::MAX.into()),
            Self::U32 => (0, u32::MAX.into()),
            Self::U64 => (0, u64::MAX.into()),
            Self::Usize => (0, usize::MAX as i128),
            Self::I8 => (i8::MIN.into(), i8::MAX.into()),
            Self::I16 => (i16::MIN.into(), i16::MAX.into()),
            Self::I32 => (i32::MIN.into(), i32::MAX.into()),
            Self::I64 => (i64::MIN.into(), i64::MAX.into()),
            Self::Isize => (isize::MIN as i128, isize::MAX as i128),
        }
    }
}

/// Floating-point types a recipe step can decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// One provider call in a recipe.
///
/// The `Display` impl writes the step back in recipe syntax, so
/// `step.to_string().parse()` yields the same step.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// `u8`, `i32:-5..=5`, ...
    Integral {
        kind: IntKind,
        range: Option<(i128, i128)>,
    },
    /// `bool`
    Bool,
    /// `f64`, `f32:0.5..=2`, ...
    Float {
        kind: FloatKind,
        range: Option<(f64, f64)>,
    },
    /// `prob32`, `prob64`
    Probability(FloatKind),
    /// `bytes:<n>` or `bytes:<n>+<terminator>`
    Bytes { len: usize, terminator: Option<u8> },
    /// `str:<n>`
    Str { len: usize },
    /// `rstr` or `rstr:<max>`
    RandomString { max: Option<usize> },
    /// `rest`
    Rest,
    /// `rest_str`
    RestStr,
    /// `pick:<a>|<b>|...`
    Pick(Vec<String>),
}

impl Step {
    /// Parse one token; `step` is its index, used for error context.
    ///
    /// # Errors
    ///
    /// Returns the matching [`RecipeError`] variant for an unknown kind, a
    /// missing or unexpected argument, a bad number, range or terminator, or
    /// an empty pick list.
    pub fn parse(step: usize, token: &str) -> Result<Self, RecipeError> {
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };
        let ctx = Ctx { step, token };

        if let Some(kind) = IntKind::from_name(name) {
            let range = arg.map(|arg| ctx.int_range(kind, arg)).transpose()?;
            return Ok(Self::Integral { kind, range });
        }

        match name {
            "bool" => ctx.no_arg(arg, Self::Bool),
            "f32" | "f64" => {
                let kind = if name == "f32" {
                    FloatKind::F32
                } else {
                    FloatKind::F64
                };
                let range = arg.map(|arg| ctx.float_range(kind, arg)).transpose()?;
                Ok(Self::Float { kind, range })
            }
            "prob32" => ctx.no_arg(arg, Self::Probability(FloatKind::F32)),
            "prob64" => ctx.no_arg(arg, Self::Probability(FloatKind::F64)),
            "bytes" => {
                let arg = ctx.required(arg)?;
                match arg.split_once('+') {
                    Some((len, term)) => Ok(Self::Bytes {
                        len: ctx.length(len)?,
                        terminator: Some(ctx.terminator(term)?),
                    }),
                    None => Ok(Self::Bytes {
                        len: ctx.length(arg)?,
                        terminator: None,
                    }),
                }
            }
            "str" => Ok(Self::Str {
                len: ctx.length(ctx.required(arg)?)?,
            }),
            "rstr" => Ok(Self::RandomString {
                max: arg.map(|arg| ctx.length(arg)).transpose()?,
            }),
            "rest" => ctx.no_arg(arg, Self::Rest),
            "rest_str" => ctx.no_arg(arg, Self::RestStr),
            "pick" => {
                let arg = ctx.required(arg)?;
                if arg.is_empty() {
                    return Err(RecipeError::EmptyPick {
                        step,
                        token: token.to_string(),
                    });
                }
                Ok(Self::Pick(arg.split('|').map(str::to_string).collect()))
            }
            _ => Err(RecipeError::UnknownStep {
                step,
                token: token.to_string(),
            }),
        }
    }
}

/// Position of the token being parsed, threaded into every error.
struct Ctx<'t> {
    step: usize,
    token: &'t str,
}

impl Ctx<'_> {
    fn no_arg(&self, arg: Option<&str>, step: Step) -> Result<Step, RecipeError> {
        match arg {
            None => Ok(step),
            Some(_) => Err(RecipeError::UnexpectedArgument {
                step: self.step,
                token: self.token.to_string(),
            }),
        }
    }

    fn required<'a>(&self, arg: Option<&'a str>) -> Result<&'a str, RecipeError> {
        arg.ok_or_else(|| RecipeError::MissingArgument {
            step: self.step,
            token: self.token.to_string(),
        })
    }

    fn invalid_number(&self, text: &str) -> RecipeError {
        RecipeError::InvalidNumber {
            step: self.step,
            token: self.token.to_string(),
            text: text.to_string(),
        }
    }

    fn split_range<'a>(&self, arg: &'a str) -> Result<(&'a str, &'a str), RecipeError> {
        arg.split_once("..=").ok_or_else(|| RecipeError::MalformedRange {
            step: self.step,
            token: self.token.to_string(),
        })
    }

    fn inverted(&self) -> RecipeError {
        RecipeError::InvertedRange {
            step: self.step,
            token: self.token.to_string(),
        }
    }

    fn length(&self, text: &str) -> Result<usize, RecipeError> {
        parse_unsigned(text)
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| self.invalid_number(text))
    }

    fn terminator(&self, text: &str) -> Result<u8, RecipeError> {
        parse_unsigned(text)
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| RecipeError::InvalidTerminator {
                step: self.step,
                token: self.token.to_string(),
            })
    }

    fn int_range(&self, kind: IntKind, arg: &str) -> Result<(i128, i128), RecipeError> {
        let (lo_text, hi_text) = self.split_range(arg)?;
        let (min, max) = kind.bounds();
        let parse = |text: &str| {
            text.trim()
                .parse::<i128>()
                .ok()
                .filter(|v| (min..=max).contains(v))
                .ok_or_else(|| self.invalid_number(text))
        };
        let lo = parse(lo_text)?;
        let hi = parse(hi_text)?;
        if lo > hi {
            return Err(self.inverted());
        }
        Ok((lo, hi))
    }

    fn float_range(&self, kind: FloatKind, arg: &str) -> Result<(f64, f64), RecipeError> {
        let (lo_text, hi_text) = self.split_range(arg)?;
        let parse = |text: &str| {
            let value = text
                .trim()
                .parse::<f64>()
                .map_err(|_| self.invalid_number(text))?;
            // Bounds must stay finite at the step's own precision.
            let finite = match kind {
                #[allow(clippy::cast_possible_truncation)]
                FloatKind::F32 => (value as f32).is_finite(),
                FloatKind::F64 => value.is_finite(),
            };
            if finite {
                Ok(value)
            } else {
                Err(self.invalid_number(text))
            }
        };
        let lo = parse(lo_text)?;
        let hi = parse(hi_text)?;
        if lo > hi {
            return Err(self.inverted());
        }
        Ok((lo, hi))
    }
}

/// Decimal or `0x`-prefixed hexadecimal.
fn parse_unsigned(text: &str) -> Option<u64> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integral { kind, range } => {
                f.write_str(kind.name())?;
                if let Some((lo, hi)) = range {
                    write!(f, ":{lo}..={hi}")?;
                }
                Ok(())
            }
            Self::Bool => f.write_str("bool"),
            Self::Float { kind, range } => {
                f.write_str(kind.name())?;
                if let Some((lo, hi)) = range {
                    write!(f, ":{lo}..={hi}")?;
                }
                Ok(())
            }
            Self::Probability(FloatKind::F32) => f.write_str("prob32"),
            Self::Probability(FloatKind::F64) => f.write_str("prob64"),
            Self::Bytes { len, terminator } => {
                write!(f, "bytes:{len}")?;
                if let Some(t) = terminator {
                    write!(f, "+0x{t:02X}")?;
                }
                Ok(())
            }
            Self::Str { len } => write!(f, "str:{len}"),
            Self::RandomString { max: None } => f.write_str("rstr"),
            Self::RandomString { max: Some(max) } => write!(f, "rstr:{max}"),
            Self::Rest => f.write_str("rest"),
            Self::RestStr => f.write_str("rest_str"),
            Self::Pick(items) => write!(f, "pick:{}", items.join("|")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integrals() {
        assert_eq!(
            Step::parse(0, "i32").unwrap(),
            Step::Integral {
                kind: IntKind::I32,
                range: None
            }
        );
        assert_eq!(
            Step::parse(0, "usize").unwrap(),
            Step::Integral {
                kind: IntKind::Usize,
                range: None
            }
        );
    }

    #[test]
    fn parses_integral_ranges() {
        assert_eq!(
            Step::parse(0, "i8:-100..=100").unwrap(),
            Step::Integral {
                kind: IntKind::I8,
                range: Some((-100, 100))
            }
        );
    }

    #[test]
    fn rejects_out_of_type_bounds() {
        let err = Step::parse(3, "u8:0..=256").unwrap_err();
        assert!(matches!(
            err,
            RecipeError::InvalidNumber { step: 3, ref text, .. } if text == "256"
        ));
        assert!(matches!(
            Step::parse(0, "u16:-1..=5"),
            Err(RecipeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn rejects_inverted_and_malformed_ranges() {
        assert!(matches!(
            Step::parse(0, "i32:5..=1"),
            Err(RecipeError::InvertedRange { .. })
        ));
        assert!(matches!(
            Step::parse(0, "i32:1..5"),
            Err(RecipeError::MalformedRange { .. })
        ));
        assert!(matches!(
            Step::parse(0, "f64:2.0..=1.0"),
            Err(RecipeError::InvertedRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_float_bounds() {
        assert!(matches!(
            Step::parse(0, "f64:-inf..=0"),
            Err(RecipeError::InvalidNumber { .. })
        ));
        // Finite as f64 but overflows f32.
        assert!(matches!(
            Step::parse(0, "f32:0..=1e39"),
            Err(RecipeError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parses_blob_steps() {
        assert_eq!(
            Step::parse(0, "bytes:16").unwrap(),
            Step::Bytes {
                len: 16,
                terminator: None
            }
        );
        assert_eq!(
            Step::parse(0, "bytes:4+0x00").unwrap(),
            Step::Bytes {
                len: 4,
                terminator: Some(0)
            }
        );
        assert_eq!(Step::parse(0, "str:0x10").unwrap(), Step::Str { len: 16 });
        assert_eq!(
            Step::parse(0, "rstr").unwrap(),
            Step::RandomString { max: None }
        );
        assert_eq!(
            Step::parse(0, "rstr:8").unwrap(),
            Step::RandomString { max: Some(8) }
        );
    }

    #[test]
    fn argument_arity_is_checked() {
        assert!(matches!(
            Step::parse(0, "bytes"),
            Err(RecipeError::MissingArgument { .. })
        ));
        assert!(matches!(
            Step::parse(0, "bool:1"),
            Err(RecipeError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            Step::parse(0, "bytes:4+300"),
            Err(RecipeError::InvalidTerminator { .. })
        ));
    }

    #[test]
    fn parses_pick_lists() {
        assert_eq!(
            Step::parse(0, "pick:GET|PUT|").unwrap(),
            Step::Pick(vec!["GET".into(), "PUT".into(), String::new()])
        );
        assert!(matches!(
            Step::parse(0, "pick:"),
            Err(RecipeError::EmptyPick { .. })
        ));
    }

    #[test]
    fn unknown_kind_is_reported_with_token() {
        let err = Step::parse(7, "u128").unwrap_err();
        assert_eq!(err.to_string(), "step 7: unknown step kind \"u128\"");
    }

    #[test]
    fn display_is_parseable() {
        for token in [
            "u64",
            "i16:-3..=9",
            "bool",
            "f32",
            "f64:-1.5..=2",
            "prob64",
            "bytes:3",
            "bytes:3+0x0A",
            "str:5",
            "rstr",
            "rstr:4",
            "rest",
            "rest_str",
            "pick:a|b",
        ] {
            let step = Step::parse(0, token).unwrap();
            assert_eq!(step.to_string(), token);
            assert_eq!(Step::parse(0, &step.to_string()).unwrap(), step);
        }
    }
}
