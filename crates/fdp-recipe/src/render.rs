use std::fmt::Write as _;

use crate::config::{OutputMode, RenderConfig};
use crate::error::RecipeError;
use crate::recipe::Trace;

/// Render a trace according to `config`.
///
/// Text mode prints one line per step:
///
/// ```text
/// #0   u8               front=0     back=1     = 74
/// #1   bytes:2          front=2     back=1     = [2] 8a19
/// remaining: 1021
/// ```
///
/// # Errors
///
/// Returns [`RecipeError::Json`] if JSON serialization fails.
pub fn render(trace: &Trace, config: &RenderConfig) -> Result<String, RecipeError> {
    match config.mode {
        OutputMode::Text => Ok(render_text(trace, config)),
        OutputMode::Json => Ok(serde_json::to_string_pretty(trace)?),
    }
}

fn render_text(trace: &Trace, config: &RenderConfig) -> String {
    let mut out = String::new();
    for (idx, entry) in trace.entries.iter().enumerate() {
        let _ = write!(out, "#{idx:<3} {:<16}", entry.step);
        if config.show_cursors {
            let _ = write!(out, " front={:<5} back={:<5}", entry.front, entry.back);
        }
        let _ = writeln!(
            out,
            " = {}",
            entry.value.display_truncated(config.max_blob_bytes)
        );
    }
    let _ = writeln!(out, "remaining: {}", trace.remaining);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;

    #[test]
    fn text_without_cursors() {
        let trace = Recipe::parse("u8 bytes:2").unwrap().replay_bytes(&[0x8A, 0x19, 0x4A]);
        let config = RenderConfig {
            show_cursors: false,
            ..RenderConfig::default()
        };
        let out = render(&trace, &config).unwrap();
        assert_eq!(
            out,
            "#0   u8               = 74\n#1   bytes:2          = [2] 8a19\nremaining: 0\n"
        );
    }

    #[test]
    fn json_round_trips_through_serde_value() {
        let trace = Recipe::parse("bool").unwrap().replay_bytes(&[0x01]);
        let config = RenderConfig {
            mode: OutputMode::Json,
            ..RenderConfig::default()
        };
        let out = render(&trace, &config).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["remaining"], 0);
        assert_eq!(doc["entries"][0]["step"], "bool");
        assert_eq!(doc["entries"][0]["value"]["type"], "bool");
        assert_eq!(doc["entries"][0]["value"]["value"], true);
        assert_eq!(doc["entries"][0]["back"], 1);
    }
}
