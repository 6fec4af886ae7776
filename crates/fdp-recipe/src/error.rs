/// Errors raised while parsing a recipe or rendering its trace.
///
/// Replaying a parsed recipe cannot fail: the provider is total. Every
/// parse variant carries the 0-based `step` index and the offending `token`
/// so a long recipe can be fixed without counting by hand.
#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    /// The recipe contained no steps after comments were stripped.
    #[error("recipe contains no steps")]
    Empty,

    /// The step name is not one the recipe language knows.
    #[error("step {step}: unknown step kind {token:?}")]
    UnknownStep { step: usize, token: String },

    /// The step requires an argument (`bytes:<n>`, `str:<n>`, `pick:<a>|..`).
    #[error("step {step}: {token:?} requires an argument")]
    MissingArgument { step: usize, token: String },

    /// The step takes no argument (`bool`, `rest`, `prob32`, ...).
    #[error("step {step}: {token:?} does not take an argument")]
    UnexpectedArgument { step: usize, token: String },

    /// A number did not parse, or does not fit the step's type.
    #[error("step {step}: invalid number {text:?} in {token:?}")]
    InvalidNumber {
        step: usize,
        token: String,
        text: String,
    },

    /// A range argument was not of the form `<min>..=<max>`.
    #[error("step {step}: malformed range {token:?}, expected <min>..=<max>")]
    MalformedRange { step: usize, token: String },

    /// A range argument had `min > max`.
    #[error("step {step}: range in {token:?} has min greater than max")]
    InvertedRange { step: usize, token: String },

    /// A `bytes:<n>+<t>` terminator was not a single byte value.
    #[error("step {step}: terminator in {token:?} must be a byte (0..=255 or 0x00..=0xFF)")]
    InvalidTerminator { step: usize, token: String },

    /// A `pick:` step listed no candidates.
    #[error("step {step}: pick list in {token:?} is empty")]
    EmptyPick { step: usize, token: String },

    /// JSON serialization of a trace failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
