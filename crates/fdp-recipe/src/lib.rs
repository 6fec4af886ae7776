//! Replay fuzz inputs through a textual recipe of provider calls.
//!
//! A crashing fuzz input is an opaque byte file; the harness that consumed
//! it is a sequence of [`FuzzedDataProvider`](fdp_provider::FuzzedDataProvider)
//! calls. Writing that sequence down as a [`Recipe`] and replaying it shows
//! exactly which typed values the harness saw, and where in the input each
//! one came from.
//!
//! ```
//! use fdp_recipe::{Recipe, RenderConfig, render};
//!
//! let recipe: Recipe = "i32:10..=30 rstr".parse().unwrap();
//! let trace = recipe.replay_bytes(b"ok\\.J");
//!
//! assert_eq!(trace.entries[0].value.to_string(), "21");
//! assert_eq!(trace.entries[1].value.to_string(), "\"ok\"");
//! assert_eq!(trace.remaining, 0);
//! # let _ = render(&trace, &RenderConfig::default()).unwrap();
//! ```

#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod recipe;
pub mod render;
pub mod step;
pub mod value;

pub use config::{OutputMode, RenderConfig};
pub use error::RecipeError;
pub use recipe::{Recipe, Trace, TraceEntry};
pub use render::render;
pub use step::{FloatKind, IntKind, Step};
pub use value::Value;
