//! # Pipeline Contracts
//!
//! A pipeline is an ordered chain of independent filter units run in
//! sequence against a mutable context. Each filter returns a
//! [`FilterResult`], so a unit can halt the chain early without knowing
//! anything about chain mechanics.
//!
//! A [`FilterSelector`] is threaded to every filter alongside the context,
//! so per-step applicability logic ("only run if X") can live outside the
//! filter itself. The core never consults the selector; it only guarantees
//! every step receives it unchanged.
//!
//! Chain assembly and walking live in `velger-std`.

use crate::error::BoxError;
use crate::kind::ExtensionKind;

/// A context value carried through one pipeline run.
///
/// Constructed once per run, mutated by filters as the chain executes, and
/// discarded when the chain finishes or halts. Concurrent walks must each
/// use their own context instance.
pub trait PipelineContext: Send + Sync + 'static {
    /// The category tag type carried by this context.
    type Kind: ExtensionKind;

    /// The category of operation this pipeline run belongs to.
    fn pipeline_kind(&self) -> Self::Kind;
}

/// Decides per-step whether a candidate filter applies.
///
/// The decision logic is entirely caller-defined; filters that want
/// selector gating call [`matches`] with their own name.
///
/// [`matches`]: FilterSelector::matches
pub trait FilterSelector: Send + Sync + 'static {
    /// Whether the filter with the given name should run.
    fn matches(&self, filter_name: &str) -> bool;
}

/// Result of a filter invocation indicating whether the chain proceeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterResult {
    /// The filter did its work; proceed to the next link.
    Continue,
    /// Stop the chain here; remaining links are never visited.
    Halt,
}

/// A unit of work in a pipeline chain.
///
/// Filters perform side effects and/or context mutation. An error aborts
/// the walk and propagates to the caller unchanged.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PipelineFilter<{C}>`",
    label = "missing `PipelineFilter` implementation",
    note = "Filters must implement `apply` for the specific context type `{C}`."
)]
pub trait PipelineFilter<C: PipelineContext>: Send + Sync + 'static {
    /// A stable name for this filter, addressable by a [`FilterSelector`].
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Run this filter against the context.
    fn apply(
        &self,
        context: &mut C,
        selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError>;
}

// Allow Box<dyn PipelineFilter> to be used where PipelineFilter is expected.
impl<C: PipelineContext> PipelineFilter<C> for Box<dyn PipelineFilter<C>> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn apply(
        &self,
        context: &mut C,
        selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        (**self).apply(context, selector)
    }
}
