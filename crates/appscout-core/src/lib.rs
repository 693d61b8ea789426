//! AppScout Core - App records, the accumulation workflow and CSV export.
//!
//! This crate holds everything the search page does that is not I/O: turning
//! raw catalog results into [`AppRecord`]s, the search workflow state machine,
//! the accumulated collection and its CSV serialization. It has no
//! dependencies on other AppScout crates.

pub mod collection;
pub mod error;
pub mod export;
pub mod record;
pub mod validation;
pub mod workflow;

// Re-exports for convenience
pub use collection::AccumulatedCollection;
pub use error::{CollectionError, ExportError, ValidationError, WorkflowError};
pub use export::{export_filename, to_csv, CSV_HEADERS};
pub use record::{AppRecord, CatalogResponse, UNKNOWN};
pub use validation::Validator;
pub use workflow::{SearchOutcome, SearchWorkflow, StatusMessage, WorkflowState};
