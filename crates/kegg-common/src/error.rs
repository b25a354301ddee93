//! Error types for KEGG list parsing

use thiserror::Error;

use crate::types::Category;

/// Result type alias for KEGG operations
pub type Result<T> = std::result::Result<T, KeggError>;

/// Main error type for KEGG list parsing
///
/// Every line-level failure aborts the whole parse call. When raised from
/// the list orchestrator the failure is wrapped in [`KeggError::AtLine`];
/// use [`KeggError::innermost`] to match on the underlying kind.
#[derive(Error, Debug)]
pub enum KeggError {
    #[error("Malformed {category} line: {reason}")]
    MalformedLine { category: Category, reason: String },

    #[error("Invalid coordinate '{token}': {reason}")]
    NumericParse { token: String, reason: String },

    #[error("Unsupported list category: {0}")]
    UnsupportedCategory(String),

    #[error("Line {line_num}: {source}")]
    AtLine {
        line_num: usize,
        #[source]
        source: Box<KeggError>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl KeggError {
    pub fn malformed(category: Category, reason: impl Into<String>) -> Self {
        KeggError::MalformedLine {
            category,
            reason: reason.into(),
        }
    }

    pub fn numeric(token: impl Into<String>, reason: impl Into<String>) -> Self {
        KeggError::NumericParse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number to a line-level failure
    pub fn at_line(self, line_num: usize) -> Self {
        KeggError::AtLine {
            line_num,
            source: Box::new(self),
        }
    }

    /// The error with any line-number wrapping removed
    pub fn innermost(&self) -> &KeggError {
        match self {
            KeggError::AtLine { source, .. } => source.innermost(),
            other => other,
        }
    }

    /// Line number reported by the orchestrator, if any
    pub fn line_num(&self) -> Option<usize> {
        match self {
            KeggError::AtLine { line_num, .. } => Some(*line_num),
            _ => None,
        }
    }
}
