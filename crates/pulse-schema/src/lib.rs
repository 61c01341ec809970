//! # pulse-schema
//!
//! JSON Schema registry and validation for Pulse.
//!
//! Wire types are defined in `pulse-core` with `#[derive(JsonSchema)]`. This
//! crate collects their schemas under stable names, validates arbitrary JSON
//! against them, and exports them for external tooling (`pulse schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
