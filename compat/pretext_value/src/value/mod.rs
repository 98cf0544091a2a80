//! Runtime values for the pretext renderer.
//!
//! The shim renders a closed set of kinds. Anything outside that set is
//! carried as `Value::Other` with its pre-rendered canonical text, so the
//! renderer can pass it through untouched.
//!
//! Values are immutable inputs to rendering; nothing here mutates them.

use std::fmt;

use crate::canon;

/// A value to be rendered.
///
/// Container variants keep insertion order so rendered output is
/// deterministic (sets and mappings are stored as ordered element lists,
/// not hashed collections).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The null value.
    None,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Complex number value.
    Complex { re: f64, im: f64 },
    /// Byte-sequence: raw binary data, no character-set interpretation.
    Bytes(Vec<u8>),
    /// Character-sequence: decoded text.
    Str(String),
    /// Ordered sequence, bracketed `[...]`.
    List(Vec<Value>),
    /// Ordered sequence, parenthesized `(...)`.
    Tuple(Vec<Value>),
    /// Set of values, `{...}` (`set()` when empty).
    Set(Vec<Value>),
    /// Mapping from keys to values, `{k: v, ...}`.
    Dict(Vec<(Value, Value)>),
    /// Any other kind, carrying its canonical text verbatim.
    Other(String),
}

// Factory Methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(x: f64) -> Self {
        Value::Float(x)
    }

    /// Create a complex-number value.
    #[inline]
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex { re, im }
    }

    /// Create a byte-sequence value.
    ///
    /// ```text
    /// let b = Value::bytes(b"raw");
    /// let b2 = Value::bytes(vec![0x00, 0xff]);
    /// ```
    #[inline]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Create a character-sequence value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(items)
    }

    /// Create a set value. Element order is preserved in output.
    #[inline]
    pub fn set(items: Vec<Value>) -> Self {
        Value::Set(items)
    }

    /// Create a mapping value. Entry order is preserved in output.
    #[inline]
    pub fn dict(entries: Vec<(Value, Value)>) -> Self {
        Value::Dict(entries)
    }

    /// Create an opaque value from its pre-rendered canonical text.
    #[inline]
    pub fn other(text: impl Into<String>) -> Self {
        Value::Other(text.into())
    }

    /// Whether this is the null value (the display hook echoes nothing
    /// for it).
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Short kind name for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Complex { .. } => "complex",
            Value::Bytes(_) => "bytes",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Dict(_) => "dict",
            Value::Other(_) => "other",
        }
    }
}

/// `Display` is the host canonical rendering (see `canon`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", canon::repr(self))
    }
}
