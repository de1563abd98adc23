//! Dynamic value type for the pattern demonstrations.
//!
//! Several demonstrations match over heterogeneous sequences and
//! string-keyed mappings; [`Value`] is the enum that holds them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::collections::ValueMap;
use crate::error::{Error, Result};

/// Dynamic value for heterogeneous data.
///
/// Values are immutable once built. Sequences are plain vectors so that
/// `as_slice` exposes them to slice patterns; mappings use the
/// persistent [`ValueMap`].
#[derive(Clone)]
pub enum Value {
    /// The nil value (represents absence).
    Nil,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Heterogeneous sequence.
    Vec(Vec<Value>),
    /// String-keyed mapping.
    Map(ValueMap),
}

/// Flat kind descriptor for [`Value`] variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// The nil kind.
    Nil,
    /// Boolean kind.
    Bool,
    /// Integer kind.
    Int,
    /// Float kind.
    Float,
    /// String kind.
    String,
    /// Sequence kind.
    Vec,
    /// Mapping kind.
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Vec => "vec",
            Self::Map => "map",
        };
        write!(f, "{name}")
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Vec(_) => Kind::Vec,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns true if this value is truthy.
    ///
    /// Only `nil` and `false` are falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract the elements of a sequence.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::Vec(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Attempts to extract a map reference.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Extracts an integer, or fails with a kind mismatch.
    ///
    /// # Errors
    /// Returns an error if the value is not an integer.
    pub fn expect_int(&self) -> Result<i64> {
        self.as_int()
            .ok_or_else(|| Error::kind_mismatch(Kind::Int, self.kind()))
    }

    /// Extracts a string, or fails with a kind mismatch.
    ///
    /// # Errors
    /// Returns an error if the value is not a string.
    pub fn expect_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::kind_mismatch(Kind::String, self.kind()))
    }

    /// Extracts sequence elements, or fails with a kind mismatch.
    ///
    /// # Errors
    /// Returns an error if the value is not a sequence.
    pub fn expect_slice(&self) -> Result<&[Value]> {
        self.as_slice()
            .ok_or_else(|| Error::kind_mismatch(Kind::Vec, self.kind()))
    }

    /// Extracts a map, or fails with a kind mismatch.
    ///
    /// # Errors
    /// Returns an error if the value is not a map.
    pub fn expect_map(&self) -> Result<&ValueMap> {
        self.as_map()
            .ok_or_else(|| Error::kind_mismatch(Kind::Map, self.kind()))
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Vec(a), Self::Vec(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
            Self::Vec(v) => v.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vec(v) => write!(f, "{v:?}"),
            Self::Map(m) => write!(f, "{m:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Vec(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<ValueMap> for Value {
    fn from(m: ValueMap) -> Self {
        Self::Map(m)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Vec(v.into_iter().map(Into::into).collect())
    }
}
