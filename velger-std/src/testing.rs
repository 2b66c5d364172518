//! Testing utilities for Velger.
//!
//! This module provides utilities to make testing plugins, filters, and
//! chains easier.
//!
//! # Features
//!
//! - [`TagContext`]: a minimal context carrying only a kind tag
//! - [`KindPlugin`]: a plugin supporting contexts of exactly one kind
//! - [`RecordingFilter`]: a filter that records its invocations
//! - [`FailingFilter`]: a filter that always errors

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use velger_core::{
    BoxError, ExtensionKind, FilterResult, FilterSelector, PipelineContext, PipelineFilter,
    PluginContext, PluginService,
};

// ============================================================================
// Tag Context
// ============================================================================

/// A minimal context that carries nothing beyond its kind tag.
///
/// Implements both [`PluginContext`] and [`PipelineContext`], so one type
/// covers dispatch and pipeline tests.
#[derive(Debug, Clone, Copy)]
pub struct TagContext<K: ExtensionKind> {
    kind: K,
}

impl<K: ExtensionKind> TagContext<K> {
    /// Create a context with the given kind.
    pub fn new(kind: K) -> Self {
        Self { kind }
    }
}

impl<K: ExtensionKind> PluginContext for TagContext<K> {
    type Kind = K;

    fn plugin_kind(&self) -> K {
        self.kind
    }
}

impl<K: ExtensionKind> PipelineContext for TagContext<K> {
    type Kind = K;

    fn pipeline_kind(&self) -> K {
        self.kind
    }
}

// ============================================================================
// Kind Plugin
// ============================================================================

/// A plugin that supports contexts of exactly one kind.
///
/// Counts how often it is hit, so tests can assert which plugins a dispatch
/// actually touched.
///
/// # Example
///
/// ```rust,ignore
/// let plugin = Arc::new(KindPlugin::new(OrderKind::Create));
/// let registry = PluginRegistryBuilder::new().register(plugin.clone()).build();
/// // ... dispatch ...
/// assert_eq!(plugin.hits(), 1);
/// ```
pub struct KindPlugin<K: ExtensionKind> {
    kind: K,
    hits: AtomicUsize,
}

impl<K: ExtensionKind> KindPlugin<K> {
    /// Create a plugin supporting the given kind.
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            hits: AtomicUsize::new(0),
        }
    }

    /// Record one invocation.
    pub fn touch(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// How often [`touch`] was called.
    ///
    /// [`touch`]: KindPlugin::touch
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl<K: ExtensionKind> PluginService<TagContext<K>> for KindPlugin<K> {
    fn supports(&self, context: &TagContext<K>) -> bool {
        context.plugin_kind() == self.kind
    }
}

// ============================================================================
// Recording Filter
// ============================================================================

/// A filter that appends its name to a shared log on every invocation.
///
/// Useful for verifying execution order and halt behavior.
///
/// # Example
///
/// ```rust,ignore
/// let log = Arc::new(Mutex::new(Vec::new()));
/// generator.append_filter(RecordingFilter::new("auth", log.clone()));
/// generator.run(&mut context, &SelectAll)?;
/// assert_eq!(*log.lock().unwrap(), vec!["auth"]);
/// ```
pub struct RecordingFilter {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    result: FilterResult,
}

impl RecordingFilter {
    /// Create a recording filter that returns `Continue`.
    pub fn new(name: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self::with_result(name, log, FilterResult::Continue)
    }

    /// Create a recording filter that returns a specific result.
    pub fn with_result(
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
        result: FilterResult,
    ) -> Self {
        Self { name, log, result }
    }
}

impl<C: PipelineContext> PipelineFilter<C> for RecordingFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(
        &self,
        _context: &mut C,
        _selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        self.log.lock().unwrap().push(self.name);
        Ok(self.result)
    }
}

// ============================================================================
// Failing Filter
// ============================================================================

/// A filter that always fails with the given message.
pub struct FailingFilter {
    name: &'static str,
    message: &'static str,
}

impl FailingFilter {
    /// Create a failing filter.
    pub fn new(name: &'static str, message: &'static str) -> Self {
        Self { name, message }
    }
}

impl<C: PipelineContext> PipelineFilter<C> for FailingFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(
        &self,
        _context: &mut C,
        _selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        Err(self.message.into())
    }
}
