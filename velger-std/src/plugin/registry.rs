//! Ordered registry of contract implementations.

use std::sync::Arc;

/// A registry of implementations of one plugin contract.
///
/// `S` is usually a trait object type (`dyn PayPlugin`), segmenting the
/// registry by contract at registration time. Iteration order is
/// registration order, which is the only tie-break the dispatch engine
/// applies.
///
/// The registry is immutable once built. Dispatch shares it across callers
/// without locking; populate it fully before the first dispatch call.
pub struct PluginRegistry<S: ?Sized> {
    plugins: Vec<Arc<S>>,
}

impl<S: ?Sized> PluginRegistry<S> {
    /// Iterate over all registered implementations, in registration order.
    pub fn plugins(&self) -> impl Iterator<Item = &Arc<S>> {
        self.plugins.iter()
    }

    /// Number of registered implementations.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// Builder for constructing a [`PluginRegistry`].
pub struct PluginRegistryBuilder<S: ?Sized> {
    plugins: Vec<Arc<S>>,
}

impl<S: ?Sized> Default for PluginRegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> PluginRegistryBuilder<S> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Register an implementation. Order of registration is preserved.
    pub fn register(mut self, plugin: Arc<S>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Build the registry.
    pub fn build(self) -> PluginRegistry<S> {
        PluginRegistry {
            plugins: self.plugins,
        }
    }
}
