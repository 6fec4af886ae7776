/// FDP command-line tool: look at fuzz inputs the way a
/// `FuzzedDataProvider`-based harness sees them.
///
/// # Command overview
///
/// ```text
/// fdp <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Replay a recipe of provider calls over an input file
///   inspect    Summarise the front and back windows of an input file
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log at debug level (RUST_LOG overrides)
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (unreadable file, invalid recipe, ...) |
///
/// Results go to stdout; logs and errors go to stderr.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_decode;
mod cmd_inspect;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The FDP (Fuzzed Data Provider) command-line tool.
#[derive(Parser)]
#[command(name = "fdp", version, about = "Fuzzed Data Provider CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Replay a recipe of provider calls over an input file.
    Decode(DecodeArgs),
    /// Summarise the front and back windows of an input file.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `fdp decode`.
///
/// The recipe lists the provider calls a harness makes, in order (see
/// `fdp_recipe::Recipe` for the syntax). Each step's value and the cursor
/// positions after it are printed.
///
/// ```text
/// ┌─────────────────┬───────────────────────────────────────────────────┐
/// │ Flag            │ Effect                                            │
/// ├─────────────────┼───────────────────────────────────────────────────┤
/// │ --recipe TEXT   │ Recipe given inline                               │
/// │ --recipe-file P │ Recipe read from a file (`#` comments allowed)    │
/// │ --json          │ Emit a JSON document instead of text lines        │
/// │ --hide-cursors  │ Text mode: omit front/back columns                │
/// │ --max-blob N    │ Text mode: truncate blobs after N bytes (def. 32) │
/// └─────────────────┴───────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// Path to the fuzz input file.
    pub input: PathBuf,

    /// Recipe text, e.g. `"u8 i32:0..=9 rstr rest"`.
    #[arg(short, long, conflicts_with = "recipe_file", required_unless_present = "recipe_file")]
    pub recipe: Option<String>,

    /// File containing the recipe.
    #[arg(long)]
    pub recipe_file: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Omit the front/back cursor columns in text output.
    #[arg(long)]
    pub hide_cursors: bool,

    /// Truncate byte blobs and strings after this many bytes in text output.
    #[arg(long, default_value_t = 32)]
    pub max_blob: usize,
}

/// Arguments for `fdp inspect`.
///
/// Prints the input size, hex dumps of the first and last `--bytes` bytes
/// (where blob and scalar operations start reading), and the first few
/// scalar readings a harness would get from the back.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Path to the fuzz input file.
    pub input: PathBuf,

    /// Size of the front and back windows to dump.
    #[arg(long, default_value_t = 32)]
    pub bytes: usize,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
