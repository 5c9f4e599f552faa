//! The opaque-object seam between the embedding evaluator and this crate.

use std::fmt;

/// Application data carried through the filter layer without interpretation.
///
/// The embedding evaluator wraps context objects this crate has no kind for
/// (structs, handles, ...) in [`Value::Object`](crate::Value::Object). The
/// filter layer only ever asks such objects for their textual form, so the
/// bound is deliberately minimal: displayable, debuggable, and shareable
/// across threads.
///
/// Opaque objects coerce conservatively: numeric conversion yields zero,
/// `len()` yields 0, and they are always truthy.
pub trait ObjectValue: fmt::Display + fmt::Debug + Send + Sync {}

impl<T> ObjectValue for T where T: fmt::Display + fmt::Debug + Send + Sync {}
