/// Configuration for rendering a replay [`Trace`](crate::Trace).
///
/// ```text
/// ┌────────────────┬───────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                           │
/// ├────────────────┼───────────────────────────────────────────────────┤
/// │ mode           │ Human-readable text lines or a JSON document      │
/// │ show_cursors   │ Text mode: print front/back consumption per step  │
/// │ max_blob_bytes │ Text mode: truncate byte blobs and strings        │
/// └────────────────┴───────────────────────────────────────────────────┘
/// ```
///
/// JSON output is never truncated and always includes the cursors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    pub mode: OutputMode,
    pub show_cursors: bool,
    pub max_blob_bytes: usize,
}

impl Default for RenderConfig {
    /// Text mode with cursors shown and blobs cut at 32 bytes.
    fn default() -> Self {
        Self {
            mode: OutputMode::Text,
            show_cursors: true,
            max_blob_bytes: 32,
        }
    }
}

/// Output formats for a rendered trace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One aligned line per step, then a `remaining:` footer.
    #[default]
    Text,
    /// Pretty-printed JSON: `{"entries": [...], "remaining": n}`.
    Json,
}
