use crate::error::ValidationError;

/// Validator for user input.
pub struct Validator;

impl Validator {
    /// Validate a search term and return it trimmed.
    /// Whitespace-only input counts as empty.
    pub fn validate_term(term: &str) -> Result<&str, ValidationError> {
        let term = term.trim();
        if term.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        Ok(term)
    }
}
