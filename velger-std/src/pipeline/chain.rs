//! Chain links and the walk itself.

use velger_core::{BoxError, FilterResult, FilterSelector, PipelineContext, PipelineFilter};

/// Outcome of walking a filter chain.
///
/// Completion and early halt leave the same chain behind; this outcome is
/// how callers tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
    /// Every link ran and returned [`FilterResult::Continue`].
    Completed,
    /// A filter returned [`FilterResult::Halt`]; the links after it were
    /// never visited.
    Halted,
}

/// One link in a pipeline: a filter and the link that follows it.
///
/// Links form a strictly linear, finite, acyclic list. The generator owns
/// the head; each link owns its successor.
pub struct FilterChain<C: PipelineContext> {
    filter: Box<dyn PipelineFilter<C>>,
    pub(crate) next: Option<Box<FilterChain<C>>>,
}

impl<C: PipelineContext> FilterChain<C> {
    pub(crate) fn new(filter: Box<dyn PipelineFilter<C>>) -> Self {
        Self { filter, next: None }
    }

    /// The link after this one, if any.
    pub fn next(&self) -> Option<&FilterChain<C>> {
        self.next.as_deref()
    }

    /// The name of the filter wrapped by this link.
    pub fn filter_name(&self) -> &'static str {
        self.filter.name()
    }

    /// Walk the chain starting at this link.
    ///
    /// Each link applies its filter with `(context, selector)` and then
    /// either advances or stops: `Continue` with no next link completes the
    /// chain naturally, `Halt` stops it early. A filter error aborts the
    /// walk and propagates unchanged.
    pub fn run(
        &self,
        context: &mut C,
        selector: &dyn FilterSelector,
    ) -> Result<ChainOutcome, BoxError> {
        let mut link = Some(self);
        while let Some(current) = link {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                filter = current.filter.name(),
                kind = ?context.pipeline_kind(),
                "running pipeline filter"
            );
            match current.filter.apply(context, selector)? {
                FilterResult::Continue => link = current.next.as_deref(),
                FilterResult::Halt => return Ok(ChainOutcome::Halted),
            }
        }
        Ok(ChainOutcome::Completed)
    }
}
