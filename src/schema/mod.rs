//! Schema model, type inference and skeleton generation.
//!
//! - Rule definitions in [`rule`]
//! - Loosely-typed default/allowed values in [`value`]
//! - Raw value type inference in [`guess`]
//! - Schema skeleton generation in [`generate`]

pub mod generate;
pub mod guess;
pub mod rule;
pub mod value;

pub use generate::{generate_schema, render_schema, SchemaFormat};
pub use guess::guess_type;
pub use rule::{RuleType, Schema, SchemaRule};
pub use value::{format_value_list, SchemaValue};
