//! Aisle Oracle - Untrusted route-proposal capability
//!
//! The proposal mechanism is modeled as a fallible capability trait:
//! - [`RouteOracle`] takes the layout text plus item descriptors and
//!   returns a raw candidate ordering, or an [`OracleError`]
//! - [`OpenAiOracle`] talks to an OpenAI-compatible chat endpoint
//! - [`ScriptedOracle`] is the deterministic double for tests
//!
//! Nothing here validates a proposal semantically. The adapter cannot
//! see the parsed grid, so trust cannot leak into it; every structural
//! guarantee lives with the consumer.

pub mod error;
pub mod openai;
pub mod oracle;
mod prompt;
pub mod scripted;

pub use error::OracleError;
pub use openai::{OpenAiOracle, OracleConfig};
pub use oracle::{ItemDescriptor, RouteOracle};
pub use scripted::ScriptedOracle;
