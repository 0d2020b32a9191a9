#![forbid(unsafe_code)]

//! Dynamic cell values.
//!
//! Column selectors extract a [`Value`] from each row. Behavior (how to
//! compare, format, and search a value) is keyed by the column's *type
//! name*, not by the variant carried here: a registered "currency" type
//! may carry `Float` payloads and still order and render its own way.

use std::fmt;

/// A cell value extracted from a row by a column selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text payload.
    Str(String),
    /// Integer payload.
    Int(i64),
    /// Floating-point payload.
    Float(f64),
    /// Boolean payload.
    Bool(bool),
    /// Absent / null-ish cell.
    Empty,
}

impl Value {
    /// Numeric coercion. `Int` and `Float` coerce directly; `Bool` maps
    /// to 0/1; `Str` and `Empty` do not coerce.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Str(_) | Self::Empty => None,
        }
    }

    /// Borrow the text payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the `Empty` value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// String coercion. This is the fallback text representation used for
/// search matching when a type descriptor supplies no `text` function,
/// and the fallback `format` for rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Self::Empty)
    }
}
