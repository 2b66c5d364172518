//! Standard pipeline filters.

use velger_core::{BoxError, FilterResult, FilterSelector, PipelineContext, PipelineFilter};

/// A filter that logs each pipeline run for debugging/observation.
pub struct LoggingFilter;

impl<C: PipelineContext> PipelineFilter<C> for LoggingFilter {
    fn name(&self) -> &'static str {
        "logging"
    }

    fn apply(
        &self,
        context: &mut C,
        _selector: &dyn FilterSelector,
    ) -> Result<FilterResult, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(kind = ?context.pipeline_kind(), "pipeline event");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = context; // Suppress unused warning
        }
        Ok(FilterResult::Continue)
    }
}
