//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::ExpansionResult;
pub use run_summary::ExpansionSummary;
