#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use velger::{
    BoxError, ExtensionKind, FilterResult, FilterSelector, PipelineContext, PipelineFilter,
    PluginContext, PluginService,
};

// ============================================================================
// Test Kinds and Contexts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Pay,
    Order,
}

impl ExtensionKind for TestKind {}

pub struct PayContext {
    pub channel: &'static str,
    pub amount: u64,
}

impl PluginContext for PayContext {
    type Kind = TestKind;

    fn plugin_kind(&self) -> TestKind {
        TestKind::Pay
    }
}

pub struct RequestContext {
    pub authenticated: bool,
    pub handled: bool,
}

impl RequestContext {
    pub fn new(authenticated: bool) -> Self {
        Self {
            authenticated,
            handled: false,
        }
    }
}

impl PipelineContext for RequestContext {
    type Kind = TestKind;

    fn pipeline_kind(&self) -> TestKind {
        TestKind::Order
    }
}

// ============================================================================
// Payment Contract and Plugins
// ============================================================================

pub trait PayPlugin: PluginService<PayContext> {
    fn pay(&self, amount: u64) -> String;
}

/// Pays through one channel, or through any channel when `channel` is None.
pub struct ChannelPay {
    pub name: &'static str,
    pub channel: Option<&'static str>,
}

impl PluginService<PayContext> for ChannelPay {
    fn supports(&self, context: &PayContext) -> bool {
        self.channel.is_none_or(|channel| channel == context.channel)
    }
}

impl PayPlugin for ChannelPay {
    fn pay(&self, amount: u64) -> String {
        format!("{}:{}", self.name, amount)
    }
}

/// Supports only payments at or above a minimum amount.
pub struct ThresholdPay {
    pub name: &'static str,
    pub min_amount: u64,
}

impl PluginService<PayContext> for ThresholdPay {
    fn supports(&self, context: &PayContext) -> bool {
        context.amount >= self.min_amount
    }
}

impl PayPlugin for ThresholdPay {
    fn pay(&self, amount: u64) -> String {
        format!("{}:{}", self.name, amount)
    }
}

// ============================================================================
// Pipeline Filters
// ============================================================================

/// Records itself, then halts the chain on unauthenticated contexts.
pub struct AuthFilter {
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

impl PipelineFilter<RequestContext> for AuthFilter {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn apply(
        &self,
        context: &mut RequestContext,
        _selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        self.log.lock().unwrap().push("auth");
        if context.authenticated {
            Ok(FilterResult::Continue)
        } else {
            Ok(FilterResult::Halt)
        }
    }
}

/// Records itself and marks the context as handled.
pub struct BusinessFilter {
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

impl PipelineFilter<RequestContext> for BusinessFilter {
    fn name(&self) -> &'static str {
        "business"
    }

    fn apply(
        &self,
        context: &mut RequestContext,
        _selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        self.log.lock().unwrap().push("business");
        context.handled = true;
        Ok(FilterResult::Continue)
    }
}

/// Runs only when the selector matches its name; always continues.
pub struct SelectorGatedFilter {
    pub name: &'static str,
    pub log: Arc<Mutex<Vec<&'static str>>>,
}

impl PipelineFilter<RequestContext> for SelectorGatedFilter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(
        &self,
        _context: &mut RequestContext,
        selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        if selector.matches(self.name) {
            self.log.lock().unwrap().push(self.name);
        }
        Ok(FilterResult::Continue)
    }
}
