//! # Plugin Contracts
//!
//! The matching protocol for capability-based dispatch: a context declares
//! its [`ExtensionKind`]; a service declares, via [`supports`], whether it
//! can handle a *specific* context instance. Because `supports` receives the
//! whole context, both coarse dispatch (by kind) and fine-grained dispatch
//! (by any context field) work through a single mechanism.
//!
//! Contracts are ordinary subtraits:
//!
//! ```rust,ignore
//! struct PayContext { channel: &'static str }
//!
//! impl PluginContext for PayContext {
//!     type Kind = &'static str;
//!     fn plugin_kind(&self) -> Self::Kind { "pay" }
//! }
//!
//! trait PayPlugin: PluginService<PayContext> {
//!     fn pay(&self, amount: u64) -> Receipt;
//! }
//! ```
//!
//! A registry of `dyn PayPlugin` then segments implementations by contract
//! at registration time, so dispatch never needs runtime type inspection.
//!
//! [`supports`]: PluginService::supports

use crate::kind::ExtensionKind;

/// A context value describing what kind of operation is being dispatched.
///
/// Constructed by the caller immediately before a dispatch call, not
/// retained, and not mutated after construction. Implementors extend it
/// with whatever fields their `supports` predicates need.
pub trait PluginContext: Send + Sync + 'static {
    /// The category tag type carried by this context.
    type Kind: ExtensionKind;

    /// The category of operation this context describes.
    fn plugin_kind(&self) -> Self::Kind;
}

/// The capability contract every dispatchable unit implements.
///
/// Implementations are long-lived values owned by a registry; the dispatch
/// engine never constructs or destroys them. `supports` must be cheap and
/// side-effect free: it runs against every registered implementation on
/// every dispatch call.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PluginService<{C}>`",
    label = "missing `PluginService` implementation",
    note = "Plugins must implement `supports` for the specific context type `{C}`."
)]
pub trait PluginService<C: PluginContext>: Send + Sync + 'static {
    /// Whether this implementation can handle the given context.
    fn supports(&self, context: &C) -> bool;
}
