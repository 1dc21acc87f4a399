//! Sequential batch processing over the configured file set

pub mod config;
pub mod driver;
pub mod report;

pub use config::{base_name, BatchConfig, DEFAULT_FILES, ID_COLUMN};
pub use driver::{run_batch, BatchRun};
pub use report::{BatchReport, FileOutcome, FileReport};
