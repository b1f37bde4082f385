use serde::Serialize;
use thiserror::Error;

use crate::search::SearchField;

/// A validation failure tied to a single input field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field error found while validating one write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Messages reported for `field`, in the order they were found.
    pub fn for_field(&self, field: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search pattern {pattern:?}: {source}")]
    InvalidPattern {
        field: SearchField,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SearchError {
    /// The search field the rejected term was entered in.
    pub fn field(&self) -> SearchField {
        match self {
            SearchError::InvalidPattern { field, .. } => *field,
        }
    }

    /// Report the error against the form input it came from.
    pub fn to_validation_errors(&self) -> ValidationErrors {
        ValidationErrors(vec![FieldError::new(
            self.field().input_name(),
            "Enter a valid search term.",
        )])
    }
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown chart type: {0}")]
    UnknownType(String),

    #[error("Failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),
}
