//! The `Value` tagged union and its coercion contract.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::object::ObjectValue;

/// One piece of template data of unknown static type.
///
/// Heap-backed kinds (`Str`, `List`, `Object`) use `Arc` so `Value` clones
/// are cheap; filters clone freely instead of borrowing across calls.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value. Renders as the empty string.
    #[default]
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(Arc<str>),
    /// Ordered sequence of values.
    List(Arc<[Value]>),
    /// Date/time value (naive, timezone handling is the evaluator's concern).
    DateTime(NaiveDateTime),
    /// Opaque application object supplied by the embedding evaluator.
    Object(Arc<dyn ObjectValue>),
}

// Factory methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Arc::from(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::from(items))
    }

    /// Create a date/time value.
    #[inline]
    pub fn datetime(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }

    /// Wrap an opaque application object.
    #[inline]
    pub fn object(obj: impl ObjectValue + 'static) -> Self {
        Value::Object(Arc::new(obj))
    }
}

// Coercion contract

impl Value {
    /// Truncating conversion to a signed integer.
    ///
    /// Strings parse as an integer, falling back to a truncated float parse;
    /// non-numeric values yield 0. Total, never fails.
    pub fn to_integer(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Float(f) => *f as i64,
            Value::Bool(b) => i64::from(*b),
            Value::Str(s) => parse_integer(s),
            _ => 0,
        }
    }

    /// Conversion to double precision. Integers widen exactly; non-numeric
    /// values yield 0.0. Total, never fails.
    pub fn to_float(&self) -> f64 {
        match self {
            Value::Float(f) => *f,
            Value::Int(n) => *n as f64,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Str(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// True for integer and float values.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// True for float values only.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// True for string values only.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// True for the nil value only.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// True for date/time values only.
    pub fn is_datetime(&self) -> bool {
        matches!(self, Value::DateTime(_))
    }

    /// Truthiness: nil, zero numbers, and empty strings/lists are false;
    /// everything else is true.
    pub fn is_true(&self) -> bool {
        match self {
            Value::Nil => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::DateTime(_) | Value::Object(_) => true,
        }
    }

    /// Length: character count for strings, element count for lists,
    /// 0 for every other kind (defined behavior, not an error).
    pub fn len(&self) -> usize {
        match self {
            Value::Str(s) => s.chars().count(),
            Value::List(items) => items.len(),
            _ => 0,
        }
    }

    /// True when `len()` is 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True only for list values, the one sliceable kind.
    pub fn can_slice(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Zero-based element access for list values.
    ///
    /// Out-of-range indices and non-list values yield `Nil`; callers that
    /// care bound-check via [`len()`](Self::len) first.
    pub fn index(&self, i: usize) -> Value {
        match self {
            Value::List(items) => items.get(i).cloned().unwrap_or(Value::Nil),
            _ => Value::Nil,
        }
    }

    /// Kind name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::DateTime(_) => "datetime",
            Value::Object(_) => "object",
        }
    }
}

fn parse_integer(s: &str) -> i64 {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        n
    } else if let Ok(f) = trimmed.parse::<f64>() {
        f as i64
    } else {
        0
    }
}

// Trait implementations

impl fmt::Display for Value {
    /// Canonical textual form: nil renders empty, numbers render in plain
    /// decimal (Rust's float `Display` never switches to exponents), strings
    /// pass through unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::Object(obj) => write!(f, "{obj}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            // Opaque objects compare by identity
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
