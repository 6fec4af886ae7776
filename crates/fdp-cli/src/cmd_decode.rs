/// Implementation of `fdp decode`.
///
/// Reads the input file, parses the recipe (inline or from a file), replays
/// it over a fresh provider and prints the rendered trace.
///
/// # Output format (text)
///
/// ```text
/// #0   i32:10..=30      front=0     back=1     = 21
/// #1   rstr             front=7     back=1     = "hello"
/// #2   rest             front=11    back=1     = [4] 0badf00d
/// remaining: 0
/// ```
use std::fs;

use anyhow::{Context, Result};
use fdp_provider::FuzzedDataProvider;
use fdp_recipe::{OutputMode, Recipe, RenderConfig, Trace, render};

use crate::DecodeArgs;

/// Run the `fdp decode` command.
///
/// # Errors
///
/// Returns an error if the input or recipe file cannot be read, or if the
/// recipe does not parse.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let data =
        fs::read(&args.input).with_context(|| format!("cannot read {}", args.input.display()))?;
    tracing::debug!(path = %args.input.display(), len = data.len(), "loaded fuzz input");

    let recipe_text = match (&args.recipe, &args.recipe_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("cannot read recipe {}", path.display()))?,
        (None, None) => anyhow::bail!("either --recipe or --recipe-file is required"),
    };

    let config = RenderConfig {
        mode: if args.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        show_cursors: !args.hide_cursors,
        max_blob_bytes: args.max_blob,
    };
    print!("{}", decode(&data, &recipe_text, &config)?);

    Ok(())
}

/// Parse `recipe_text`, replay it over `data` and render the trace.
///
/// JSON output gets a trailing newline so it ends like the text form.
///
/// # Errors
///
/// Returns an error if the recipe does not parse or the trace cannot be
/// rendered.
pub(crate) fn decode(data: &[u8], recipe_text: &str, config: &RenderConfig) -> Result<String> {
    let recipe = Recipe::parse(recipe_text).context("invalid recipe")?;
    tracing::debug!(steps = recipe.steps.len(), "parsed recipe");

    let mut provider = FuzzedDataProvider::new(data);
    let trace = recipe.replay(&mut provider);
    tracing::info!(
        steps = trace.entries.len(),
        front = provider.consumed_front(),
        back = provider.consumed_back(),
        remaining = trace.remaining,
        "replay finished"
    );
    if let Some(idx) = exhausted_before_last_step(&trace, data.len()) {
        tracing::warn!(
            step = idx,
            "input exhausted early; later steps decoded empty or minimum values"
        );
    }

    let mut rendered = render(&trace, config).context("failed to render trace")?;
    if config.mode == OutputMode::Json {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Index of the step that used up the last input byte, if more steps ran
/// after it.
fn exhausted_before_last_step(trace: &Trace, len: usize) -> Option<usize> {
    let idx = trace
        .entries
        .iter()
        .position(|e| e.front + e.back == len)?;
    (idx + 1 < trace.entries.len()).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_without_cursors() -> RenderConfig {
        RenderConfig {
            show_cursors: false,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn decode_renders_each_step() {
        let out = decode(&[0x8A, 0x19, 0x4A], "u8 bytes:2", &text_without_cursors()).unwrap();
        assert_eq!(
            out,
            "#0   u8               = 74\n#1   bytes:2          = [2] 8a19\nremaining: 0\n"
        );
    }

    #[test]
    fn recipe_file_comments_are_accepted() {
        let recipe = "# header byte\nu8\n\n# payload\nbytes:2 # two bytes\n";
        let out = decode(&[0x8A, 0x19, 0x4A], recipe, &text_without_cursors()).unwrap();
        assert!(out.starts_with("#0   u8               = 74\n"));
    }

    #[test]
    fn json_output_ends_with_newline() {
        let config = RenderConfig {
            mode: OutputMode::Json,
            ..RenderConfig::default()
        };
        let out = decode(&[0x01], "bool", &config).unwrap();
        assert!(out.starts_with('{'));
        assert!(out.ends_with("}\n"));
    }

    #[test]
    fn invalid_recipe_error_chain() {
        let err = decode(&[], "u8 nope", &RenderConfig::default()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid recipe: step 1: unknown step kind \"nope\""
        );
    }

    #[test]
    fn early_exhaustion_is_detected() {
        let recipe = Recipe::parse("u16 bool u8").unwrap();
        let trace = recipe.replay_bytes(&[0x01, 0x02]);
        assert_eq!(exhausted_before_last_step(&trace, 2), Some(0));

        let trace = recipe.replay_bytes(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(exhausted_before_last_step(&trace, 4), None);
    }

    #[test]
    fn exhaustion_on_the_last_step_is_not_early() {
        let recipe = Recipe::parse("u8 rest").unwrap();
        let trace = recipe.replay_bytes(&[0x01, 0x02, 0x03]);
        assert_eq!(exhausted_before_last_step(&trace, 3), None);
    }
}
