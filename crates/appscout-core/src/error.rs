use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Please enter an app name")]
    EmptyTerm,
}

#[derive(Error, Debug, PartialEq)]
pub enum CollectionError {
    #[error("No accumulated result at position {index} (collection has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Error, Debug, PartialEq)]
pub enum ExportError {
    #[error("No results to download")]
    NoResults,

    #[error("CSV error: {0}")]
    Csv(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum WorkflowError {
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
