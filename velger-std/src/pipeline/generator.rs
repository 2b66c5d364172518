//! Chain assembly.

use crate::pipeline::chain::{ChainOutcome, FilterChain};
use velger_core::{BoxError, FilterSelector, PipelineContext, PipelineFilter};

/// Assembles a filter chain and owns its head.
///
/// Filters are appended at the tail; the first append creates the head.
/// Appending after walks have started is supported but not thread-safe:
/// serialize assembly, then treat the chain as read-only.
pub struct PipelineGenerator<C: PipelineContext> {
    first: Option<Box<FilterChain<C>>>,
}

impl<C: PipelineContext> Default for PipelineGenerator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PipelineContext> PipelineGenerator<C> {
    /// Create a generator with an empty chain.
    pub fn new() -> Self {
        Self { first: None }
    }

    /// Append a filter at the tail of the chain.
    pub fn append_filter<F>(&mut self, filter: F)
    where
        F: PipelineFilter<C>,
    {
        let link = Box::new(FilterChain::new(Box::new(filter)));
        let mut slot = &mut self.first;
        while let Some(current) = slot {
            slot = &mut current.next;
        }
        *slot = Some(link);
    }

    /// The head of the chain; `None` if no filter has been appended.
    pub fn first_chain(&self) -> Option<&FilterChain<C>> {
        self.first.as_deref()
    }

    /// Whether the chain has no links.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Walk the whole chain from the head.
    ///
    /// An empty chain is a no-op that completes.
    pub fn run(
        &self,
        context: &mut C,
        selector: &dyn FilterSelector,
    ) -> Result<ChainOutcome, BoxError> {
        match &self.first {
            Some(chain) => chain.run(context, selector),
            None => Ok(ChainOutcome::Completed),
        }
    }
}
