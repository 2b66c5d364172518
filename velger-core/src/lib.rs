//! # velger-core
//!
//! Core contracts for the Velger extension dispatch framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugin and filter implementations that don't need the full `velger-std`
//! machinery.
//!
//! # Two Mechanisms
//!
//! Velger decouples "what should run" from "what triggered it" with two
//! cooperating mechanisms:
//!
//! ## Plugin dispatch ([`PluginService`])
//!
//! Call sites invoke behavior by *capability and context* rather than by
//! concrete type. Every dispatchable unit implements [`PluginService`] and
//! declares, through `supports`, whether it can handle a specific
//! [`PluginContext`] instance. A registry holds the implementations of one
//! contract; the dispatch engine (in `velger-std`) selects the first or all
//! matching implementations and invokes them uniformly.
//!
//! - **Capability-based**: matching is a predicate over the whole context,
//!   not just its category tag
//! - **Ordered**: registration order is the only tie-break
//! - **Fail-fast**: an empty match set is a typed error, never a silent skip
//!
//! ## Pipeline execution ([`PipelineFilter`])
//!
//! An ordered chain of independent filter units processes a mutable context
//! in sequence. Each filter returns [`FilterResult`], so a unit can halt the
//! chain early without reaching into the chain mechanics.
//!
//! # Error Types
//!
//! - [`ExtensionError`] - Top-level error type
//! - [`DispatchError`] - Dispatch-engine errors (no match, action failure)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod kind;
mod pipeline;
mod plugin;

// Re-exports
pub use error::{BoxError, DispatchError, ExtensionError};
pub use kind::ExtensionKind;
pub use pipeline::{FilterResult, FilterSelector, PipelineContext, PipelineFilter};
pub use plugin::{PluginContext, PluginService};
