//! Dynamically-typed values for the weft template engine.
//!
//! Template data arrives with unknown static type: a context variable may be
//! a string, a number, a list, a timestamp, or an application object. This
//! crate wraps all of them in a single [`Value`] tagged union and defines the
//! coercion contract filters rely on: every conversion is total, and the few
//! operations that are only meaningful for some kinds (`len`, `index`) have
//! documented fallback behavior instead of failure.
//!
//! # Coercion rules
//!
//! - Numeric coercion of a non-numeric value yields zero, never an error.
//! - `len()` is defined for strings (character count) and lists (element
//!   count); every other kind reports 0.
//! - Truthiness: nil, zero numbers, and empty strings/lists are false;
//!   everything else is true.
//!
//! Values are logically immutable: filters never mutate their input, they
//! return a fresh `Value`. Heap-backed kinds use `Arc` internally so cloning
//! is cheap and values can cross threads freely.

mod object;
mod value;

pub use object::ObjectValue;
pub use value::Value;
