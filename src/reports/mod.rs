//! Human-readable views of an extracted repository and persistence of the results.

mod insights;
mod styling;
mod summary;
mod text;
mod writer;

pub use insights::write_insights;
pub use summary::write_summary;
pub use text::{format_number, generate_text};
pub use writer::{OutputWriter, SaveOutcome};
