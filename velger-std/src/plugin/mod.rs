//! Plugin dispatch: registry and executor.
//!
//! A [`PluginRegistry`] is the externally populated, ordered store of
//! implementations of one contract. A [`PluginExecutor`] queries it on
//! every call, retains the implementations whose `supports` accepts the
//! context, and invokes them, first match or fan-out, fire-and-forget or
//! value-returning.

mod executor;
mod registry;

pub use executor::PluginExecutor;
pub use registry::{PluginRegistry, PluginRegistryBuilder};
