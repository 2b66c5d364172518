//! # velger-std
//!
//! Standard implementations for the Velger extension dispatch framework.
//!
//! This crate provides:
//! - **Plugin dispatch**: [`PluginRegistry`], [`PluginExecutor`]
//! - **Pipeline execution**: [`PipelineGenerator`], [`FilterChain`]
//! - **Standard filters**: Logging
//! - **Standard selectors**: SelectAll, NameSelector
//! - **Testing utilities**: [`testing`]
//!
//! [`PluginRegistry`]: plugin::PluginRegistry
//! [`PluginExecutor`]: plugin::PluginExecutor
//! [`PipelineGenerator`]: pipeline::PipelineGenerator
//! [`FilterChain`]: pipeline::FilterChain

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use velger_core;

// Modules
pub mod filters;
pub mod pipeline;
pub mod plugin;
pub mod selectors;
pub mod testing;
