//! Pipeline execution: chain assembly and walking.
//!
//! A [`PipelineGenerator`] assembles an ordered, singly-linked chain of
//! [`FilterChain`] links, one per appended filter. Walking starts from the
//! head and proceeds strictly in append order; any filter can halt the
//! walk early by returning [`FilterResult::Halt`].
//!
//! Assembly is not synchronized. Build the chain fully, then treat it as
//! read-only; a finished chain may be walked from multiple threads as long
//! as each run uses its own context instance.
//!
//! [`FilterResult::Halt`]: velger_core::FilterResult::Halt

mod chain;
mod generator;

pub use chain::{ChainOutcome, FilterChain};
pub use generator::PipelineGenerator;
