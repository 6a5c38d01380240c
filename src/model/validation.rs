//! Validation failures reported while building the model.

use std::fmt;

use crate::base::{SourceMap, describe};

// ============================================================================
// FAILURE TYPES
// ============================================================================

/// Severity of a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Warning,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warning => "warning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in otherwise well-formed source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationFailure {
    /// The builder or validator that reported the failure.
    pub validator_name: String,
    pub category: Category,
    pub message: String,
    pub source_map: Option<SourceMap>,
}

impl ValidationFailure {
    pub fn error(
        validator_name: impl Into<String>,
        message: impl Into<String>,
        source_map: Option<SourceMap>,
    ) -> Self {
        Self {
            validator_name: validator_name.into(),
            category: Category::Error,
            message: message.into(),
            source_map,
        }
    }

    pub fn warning(
        validator_name: impl Into<String>,
        message: impl Into<String>,
        source_map: Option<SourceMap>,
    ) -> Self {
        Self {
            validator_name: validator_name.into(),
            category: Category::Warning,
            message: message.into(),
            source_map,
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.category,
            self.validator_name,
            describe(self.source_map.as_ref()),
            self.message
        )
    }
}

// ============================================================================
// FAILURE COLLECTOR
// ============================================================================

/// Append-only list of failures shared by every builder of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Add an error-category failure.
    pub fn error(
        &mut self,
        validator_name: &str,
        message: impl Into<String>,
        source_map: Option<SourceMap>,
    ) {
        self.add(ValidationFailure::error(validator_name, message, source_map));
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.category == Category::Error)
            .count()
    }

    /// Get the number of warnings.
    pub fn warning_count(&self) -> usize {
        self.failures
            .iter()
            .filter(|f| f.category == Category::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Take all failures, leaving the collector empty.
    pub fn take(&mut self) -> Vec<ValidationFailure> {
        std::mem::take(&mut self.failures)
    }

    pub fn into_vec(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

impl<'a> IntoIterator for &'a ValidationFailures {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
