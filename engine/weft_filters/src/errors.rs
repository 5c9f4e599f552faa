//! Error types for filter registration and evaluation.
//!
//! `FilterErrorKind` provides typed error categories so the calling
//! evaluator can match on the condition instead of parsing message strings.
//! Factory functions (e.g. [`unknown_filter()`]) are the construction API.
//!
//! Non-error edge cases (empty input to `first`/`last`/`random`, an
//! out-of-range `get_digit` index, a zero-width `center`) are *not* errors:
//! those filters return a sentinel value instead, because the distinction is
//! visible to template authors.

use std::fmt;

use weft_value::Value;

/// Result of applying a filter.
pub type FilterResult = Result<Value, FilterError>;

/// Typed error category for filter failures.
///
/// Each variant carries the structured data of the condition, enabling
/// programmatic matching and machine-readable output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterErrorKind {
    /// A name was registered twice. Startup-time condition: the registry is
    /// append-only and populated before evaluation begins.
    DuplicateFilterName { name: String },

    /// Dispatch lookup miss at evaluation time.
    UnknownFilter { name: String },

    /// The filter requires a kind the input or parameter does not have
    /// (e.g. `date` on a non-datetime input, `pluralize` on a non-number).
    TypeMismatch {
        filter: &'static str,
        expected: String,
        got: String,
    },

    /// The parameter's comma-separated cardinality violates the filter's
    /// contract (e.g. `pluralize` with three suffixes).
    ArgumentCount {
        filter: &'static str,
        min: usize,
        max: usize,
        got: usize,
    },
}

impl fmt::Display for FilterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFilterName { name } => {
                write!(f, "filter '{name}' is already registered")
            }
            Self::UnknownFilter { name } => write!(f, "unknown filter: {name}"),
            Self::TypeMismatch {
                filter,
                expected,
                got,
            } => {
                write!(f, "filter '{filter}' expects {expected}, got {got}")
            }
            Self::ArgumentCount {
                filter,
                min,
                max,
                got,
            } => {
                if got > max {
                    write!(
                        f,
                        "filter '{filter}' accepts at most {max} comma-separated arguments, got {got}"
                    )
                } else {
                    write!(
                        f,
                        "filter '{filter}' requires at least {min} comma-separated arguments, got {got}"
                    )
                }
            }
        }
    }
}

/// Filter evaluation or registration error.
///
/// Always returned as a `Result`, never raised as a panic; the calling
/// evaluator decides whether to abort rendering or substitute an empty
/// value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterError {
    /// Structured error category.
    pub kind: FilterErrorKind,
}

impl FilterError {
    fn from_kind(kind: FilterErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for FilterError {}

// Factory functions

/// A filter name was registered twice.
pub fn duplicate_filter_name(name: impl Into<String>) -> FilterError {
    FilterError::from_kind(FilterErrorKind::DuplicateFilterName { name: name.into() })
}

/// No filter is registered under the requested name.
pub fn unknown_filter(name: impl Into<String>) -> FilterError {
    FilterError::from_kind(FilterErrorKind::UnknownFilter { name: name.into() })
}

/// The input or parameter has the wrong kind for the filter.
pub fn type_mismatch(
    filter: &'static str,
    expected: impl Into<String>,
    got: impl Into<String>,
) -> FilterError {
    FilterError::from_kind(FilterErrorKind::TypeMismatch {
        filter,
        expected: expected.into(),
        got: got.into(),
    })
}

/// The parameter's comma-separated cardinality is out of contract.
pub fn argument_count(filter: &'static str, min: usize, max: usize, got: usize) -> FilterError {
    FilterError::from_kind(FilterErrorKind::ArgumentCount {
        filter,
        min,
        max,
        got,
    })
}
