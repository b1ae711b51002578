pub mod batch;
pub mod catalog;
pub mod merge;
pub mod parser;

pub use batch::{extract_batch, BatchOutcome, DocumentWarning, SourceDocument};
pub use merge::merge_max;
pub use parser::extract;
