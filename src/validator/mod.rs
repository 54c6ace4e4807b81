//! Environment validation engine.
//!
//! - [`evaluate`] checks an environment map against a [`Schema`](crate::schema::Schema)
//! - [`ValidationResult`] holds the verdict, per-key errors and warnings,
//!   and extra keys found in strict mode

pub mod evaluator;
pub mod result;

pub use evaluator::{evaluate, EvaluateOptions};
pub use result::ValidationResult;
