//! The dispatch engine.

use crate::plugin::registry::PluginRegistry;
use std::sync::Arc;
use velger_core::{BoxError, DispatchError, PluginContext, PluginService};

/// Selects and invokes registered implementations of one contract.
///
/// All four operations share the same selection algorithm: scan the
/// registry in registration order and retain the implementations whose
/// `supports(context)` returns true. Single-match operations take the
/// first survivor; fan-out operations take them all, in order. The scan is
/// linear and uncached, which is fine for small registries that are static
/// after startup.
///
/// An empty survivor set fails immediately with
/// [`DispatchError::NoMatch`]; there is no silent no-op and no default
/// fallback. Callers that want "maybe nothing handles this" semantics
/// should query [`select_services`] themselves before dispatching.
///
/// Errors from caller-supplied actions propagate unchanged; in fan-out
/// operations the first error aborts the remaining invocations.
///
/// [`select_services`]: PluginExecutor::select_services
pub struct PluginExecutor<S: ?Sized> {
    registry: PluginRegistry<S>,
}

impl<S: ?Sized> PluginExecutor<S> {
    /// Create an executor over the given registry.
    pub fn new(registry: PluginRegistry<S>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &PluginRegistry<S> {
        &self.registry
    }

    /// First registered implementation whose `supports` accepts the context.
    pub fn select_service<C>(&self, context: &C) -> Option<&Arc<S>>
    where
        S: PluginService<C>,
        C: PluginContext,
    {
        self.registry.plugins().find(|plugin| plugin.supports(context))
    }

    /// Every implementation whose `supports` accepts the context, in
    /// registration order.
    pub fn select_services<C>(&self, context: &C) -> Vec<&Arc<S>>
    where
        S: PluginService<C>,
        C: PluginContext,
    {
        let services: Vec<&Arc<S>> = self
            .registry
            .plugins()
            .filter(|plugin| plugin.supports(context))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(
            contract = std::any::type_name::<S>(),
            kind = ?context.plugin_kind(),
            matched = services.len(),
            "selected plugins"
        );
        services
    }

    /// Invoke `action` on the first matching implementation.
    pub fn execute<C, F>(&self, context: &C, action: F) -> Result<(), DispatchError>
    where
        S: PluginService<C>,
        C: PluginContext,
        F: FnOnce(&S) -> Result<(), BoxError>,
    {
        let service = self
            .select_service(context)
            .ok_or_else(|| Self::no_match(context))?;
        action(service.as_ref()).map_err(DispatchError::Action)
    }

    /// Invoke `action` on every matching implementation, in registry order.
    ///
    /// The first action error aborts the remaining invocations.
    pub fn execute_all<C, F>(&self, context: &C, mut action: F) -> Result<(), DispatchError>
    where
        S: PluginService<C>,
        C: PluginContext,
        F: FnMut(&S) -> Result<(), BoxError>,
    {
        let services = self.select_services(context);
        if services.is_empty() {
            return Err(Self::no_match(context));
        }
        for service in services {
            action(service.as_ref()).map_err(DispatchError::Action)?;
        }
        Ok(())
    }

    /// Apply `transform` to the first matching implementation and return
    /// its result.
    pub fn submit<C, F, R>(&self, context: &C, transform: F) -> Result<R, DispatchError>
    where
        S: PluginService<C>,
        C: PluginContext,
        F: FnOnce(&S) -> Result<R, BoxError>,
    {
        let service = self
            .select_service(context)
            .ok_or_else(|| Self::no_match(context))?;
        transform(service.as_ref()).map_err(DispatchError::Action)
    }

    /// Apply `transform` to every matching implementation, collecting
    /// results in match order.
    ///
    /// The first transform error aborts the remaining invocations; there is
    /// no partial-result aggregation.
    pub fn submit_all<C, F, R>(&self, context: &C, mut transform: F) -> Result<Vec<R>, DispatchError>
    where
        S: PluginService<C>,
        C: PluginContext,
        F: FnMut(&S) -> Result<R, BoxError>,
    {
        let services = self.select_services(context);
        if services.is_empty() {
            return Err(Self::no_match(context));
        }
        let mut results = Vec::with_capacity(services.len());
        for service in services {
            results.push(transform(service.as_ref()).map_err(DispatchError::Action)?);
        }
        Ok(results)
    }

    fn no_match<C>(context: &C) -> DispatchError
    where
        S: PluginService<C>,
        C: PluginContext,
    {
        DispatchError::NoMatch {
            contract: std::any::type_name::<S>(),
            kind: format!("{:?}", context.plugin_kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::registry::PluginRegistryBuilder;
    use crate::testing::{KindPlugin, TagContext};

    fn executor(kinds: &[&'static str]) -> PluginExecutor<dyn PluginService<TagContext<&'static str>>> {
        let mut builder = PluginRegistryBuilder::new();
        for kind in kinds {
            builder = builder.register(Arc::new(KindPlugin::new(*kind))
                as Arc<dyn PluginService<TagContext<&'static str>>>);
        }
        PluginExecutor::new(builder.build())
    }

    #[test]
    fn select_service_takes_first_in_registration_order() {
        let executor = executor(&["a", "b", "a"]);
        let context = TagContext::new("a");

        let first = executor.select_service(&context);
        let all = executor.select_services(&context);

        assert_eq!(all.len(), 2);
        assert!(Arc::ptr_eq(first.unwrap(), all[0]));
    }

    #[test]
    fn no_match_names_contract_and_kind() {
        let executor = executor(&["a"]);
        let context = TagContext::new("z");

        let err = executor.execute(&context, |_| Ok(())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PluginService"), "got: {message}");
        assert!(message.contains("\"z\""), "got: {message}");
    }
}
