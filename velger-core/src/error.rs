//! Error types for Velger.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`ExtensionError`] - Top-level error type for all Velger operations
//! - [`DispatchError`] - Errors from the plugin dispatch engine
//!
//! Failures inside caller-supplied actions, transforms, and filters pass
//! through this layer unchanged. The core performs no retry, wrapping, or
//! suppression anywhere: a missing registration or a misbehaving filter
//! must surface at the call site.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Velger operations.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// An error occurred during plugin dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A filter failed while a pipeline chain was running.
    #[error("filter error")]
    Filter(#[source] BoxError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during plugin dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No registered implementation of the contract supported the context.
    ///
    /// Carries the contract's type name and the context's extension kind
    /// for diagnostics. Callers must either guarantee coverage or catch
    /// this error; there is no default fallback.
    #[error("no matching plugin for contract `{contract}` (extension kind {kind})")]
    NoMatch {
        /// Type name of the requested contract.
        contract: &'static str,
        /// `Debug` rendering of the context's extension kind.
        kind: String,
    },

    /// A caller-supplied action or transform failed.
    #[error(transparent)]
    Action(BoxError),
}

// Convenience conversions
impl From<BoxError> for ExtensionError {
    fn from(err: BoxError) -> Self {
        ExtensionError::Custom(err)
    }
}

impl From<BoxError> for DispatchError {
    fn from(err: BoxError) -> Self {
        DispatchError::Action(err)
    }
}
