//! Search workflow for one page session.
//!
//! ```text
//! Idle -> Searching -> PromptingContinue -> (Yes) Idle
//!                   \                    \-> (No)  FinalizingExport
//!                    \-> Idle (no matches or failure)
//! ```
//!
//! Accumulation happens on the way out of `PromptingContinue`, whichever
//! answer the user gives.

use crate::collection::AccumulatedCollection;
use crate::error::WorkflowError;
use crate::record::{AppRecord, CatalogResponse};
use crate::validation::Validator;

pub const NO_MATCHES_MESSAGE: &str = "No apps found matching that name";
pub const FAILURE_PREFIX: &str = "Error fetching app data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Searching,
    PromptingContinue,
    FinalizingExport,
}

impl WorkflowState {
    fn describe(self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Searching => "a search is in flight",
            WorkflowState::PromptingContinue => "waiting for an answer",
            WorkflowState::FinalizingExport => "finalizing the export",
        }
    }
}

/// What a catalog search produced.
///
/// No matches is an ordinary outcome, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<AppRecord>),
    Empty,
    Failed(String),
}

impl SearchOutcome {
    pub fn from_response(response: &CatalogResponse) -> Self {
        if response.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(response.records())
        }
    }
}

/// Inline message shown above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Informational, e.g. no matches.
    Notice(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Notice(text) | StatusMessage::Error(text) => text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchWorkflow {
    state: WorkflowState,
    current: Vec<AppRecord>,
    accumulated: AccumulatedCollection,
    message: Option<StatusMessage>,
}

impl SearchWorkflow {
    pub fn new() -> Self {
        Self::with_accumulated(AccumulatedCollection::new())
    }

    /// Resume an idle session that already holds accumulated results.
    pub fn with_accumulated(accumulated: AccumulatedCollection) -> Self {
        Self {
            state: WorkflowState::Idle,
            current: Vec::new(),
            accumulated,
            message: None,
        }
    }

    /// Resume a session that is showing `current` and asking whether to
    /// search for more.
    pub fn prompting(current: Vec<AppRecord>, accumulated: AccumulatedCollection) -> Self {
        Self {
            state: WorkflowState::PromptingContinue,
            current,
            accumulated,
            message: None,
        }
    }

    /// Start a search. Returns the trimmed term to send upstream.
    ///
    /// An empty term leaves the workflow idle with an error message and
    /// nothing should be sent.
    pub fn begin_search<'a>(&mut self, input: &'a str) -> Result<&'a str, WorkflowError> {
        if self.state == WorkflowState::Searching {
            return Err(self.invalid("start a search"));
        }

        let term = match Validator::validate_term(input) {
            Ok(term) => term,
            Err(e) => {
                self.message = Some(StatusMessage::Error(e.to_string()));
                return Err(WorkflowError::Validation(e));
            }
        };

        self.current.clear();
        self.message = None;
        self.state = WorkflowState::Searching;
        Ok(term)
    }

    /// Record the result of the in-flight search.
    pub fn finish_search(&mut self, outcome: SearchOutcome) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::Searching {
            return Err(self.invalid("finish a search"));
        }

        match outcome {
            SearchOutcome::Found(records) if !records.is_empty() => {
                self.current = records;
                self.state = WorkflowState::PromptingContinue;
            }
            SearchOutcome::Found(_) | SearchOutcome::Empty => {
                self.message = Some(StatusMessage::Notice(NO_MATCHES_MESSAGE.to_string()));
                self.state = WorkflowState::Idle;
            }
            SearchOutcome::Failed(reason) => {
                self.message = Some(StatusMessage::Error(format!("{FAILURE_PREFIX}: {reason}")));
                self.state = WorkflowState::Idle;
            }
        }
        Ok(())
    }

    /// "Yes": keep the current results and go back to searching.
    pub fn continue_searching(&mut self) -> Result<(), WorkflowError> {
        self.accumulate_current("search for more")?;
        self.state = WorkflowState::Idle;
        Ok(())
    }

    /// "No": keep the current results and move on to exporting.
    pub fn finish(&mut self) -> Result<(), WorkflowError> {
        self.accumulate_current("finish searching")?;
        self.state = WorkflowState::FinalizingExport;
        Ok(())
    }

    fn accumulate_current(&mut self, action: &'static str) -> Result<(), WorkflowError> {
        if self.state != WorkflowState::PromptingContinue {
            return Err(self.invalid(action));
        }
        self.accumulated.extend(self.current.drain(..));
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            action,
            state: self.state.describe(),
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn current(&self) -> &[AppRecord] {
        &self.current
    }

    pub fn accumulated(&self) -> &AccumulatedCollection {
        &self.accumulated
    }

    pub fn accumulated_mut(&mut self) -> &mut AccumulatedCollection {
        &mut self.accumulated
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn into_accumulated(self) -> AccumulatedCollection {
        self.accumulated
    }
}

impl Default for SearchWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
