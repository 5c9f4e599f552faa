//! Filter registry and built-in filter catalogue for the weft template
//! engine.
//!
//! A filter is a pure function `(input, param) -> Result<Value, FilterError>`
//! applied when the evaluator renders a `value | filtername: param`
//! expression. This crate provides:
//!
//! - [`FilterRegistry`]: an explicit name-to-function table, populated during
//!   startup and read-only afterwards;
//! - the built-in catalogue (`escape`, `default`, `pluralize`, ...), grouped
//!   by concern under [`mod@builtins`];
//! - [`FilterError`]: the structured error surface (`UnknownFilter`,
//!   `DuplicateFilterName`, `TypeMismatch`, `ArgumentCount`).
//!
//! # Usage
//!
//! ```
//! use weft_filters::{FilterRegistry, Value};
//!
//! let registry = FilterRegistry::with_builtins();
//! let out = registry.apply("upper", &Value::string("hi"), None)?;
//! assert_eq!(out, Value::string("HI"));
//! # Ok::<(), weft_filters::FilterError>(())
//! ```
//!
//! # Lifecycle
//!
//! Registration happens through `&mut FilterRegistry` before the registry is
//! shared with the evaluator; lookups take `&self` and need no locking. There
//! is no unregistration.

pub mod builtins;
mod errors;
mod registry;

pub use errors::{
    argument_count, duplicate_filter_name, type_mismatch, unknown_filter, FilterError,
    FilterErrorKind, FilterResult,
};
pub use registry::{FilterFn, FilterRegistry};
pub use weft_value::{ObjectValue, Value};
