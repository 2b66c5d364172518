//! # velger - Capability-Based Extension Dispatch
//!
//! `velger` decouples "what should run" from "what triggered it": call sites
//! invoke behavior by *capability and context* instead of by concrete type,
//! and ordered chains of independent filters process a request with
//! early-exit control.
//!
//! ## Quick Start (Plugin Dispatch)
//!
//! ```rust,ignore
//! use velger::{PluginExecutor, PluginRegistryBuilder, PluginService};
//!
//! // Define a contract and register implementations
//! trait PayPlugin: PluginService<PayContext> { ... }
//!
//! let registry = PluginRegistryBuilder::new()
//!     .register(Arc::new(AliPay) as Arc<dyn PayPlugin>)
//!     .register(Arc::new(WechatPay) as Arc<dyn PayPlugin>)
//!     .build();
//!
//! let executor = PluginExecutor::new(registry);
//! executor.execute(&context, |plugin| Ok(plugin.pay(100)))?;
//! ```
//!
//! ## Quick Start (Pipeline)
//!
//! ```rust,ignore
//! use velger::{ChainOutcome, PipelineGenerator, selectors::SelectAll};
//!
//! let mut generator = PipelineGenerator::new();
//! generator.append_filter(LogFilter);
//! generator.append_filter(AuthFilter);
//! let outcome = generator.run(&mut context, &SelectAll)?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use velger_core::{
    // Error types
    BoxError,
    DispatchError,
    ExtensionError,
    // Kind tags
    ExtensionKind,
    // Pipeline contracts
    FilterResult,
    FilterSelector,
    PipelineContext,
    PipelineFilter,
    // Plugin contracts
    PluginContext,
    PluginService,
};

// Plugin dispatch
pub use velger_std::plugin::{PluginExecutor, PluginRegistry, PluginRegistryBuilder};

// Pipeline execution
pub use velger_std::pipeline::{ChainOutcome, FilterChain, PipelineGenerator};

/// Standard filter implementations.
pub mod filters {
    #![allow(clippy::wildcard_imports)]
    pub use velger_std::filters::*;
}

/// Standard selector implementations.
pub mod selectors {
    #![allow(clippy::wildcard_imports)]
    pub use velger_std::selectors::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use velger_std::testing::*;
}

/// Prelude module - common imports for Velger.
///
/// # Usage
///
/// ```rust,ignore
/// use velger::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        // Pipeline
        ChainOutcome,
        DispatchError,
        ExtensionKind,
        FilterResult,
        FilterSelector,
        PipelineContext,
        PipelineFilter,
        PipelineGenerator,
        // Plugin dispatch
        PluginContext,
        PluginExecutor,
        PluginRegistryBuilder,
        PluginService,
    };
}
