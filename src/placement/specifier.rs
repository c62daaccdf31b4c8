//! Placement specifiers and their JSON decoding
//!
//! A specifier is written as an object keyed by its kind:
//!
//! - `{ "at": 2 }` places the record at index 2
//! - `{ "after": "a" }` places it right after the record identified by `a`
//! - `{ "before": "a" }` places it right before `a`
//!
//! A record's order attribute holds nothing, one specifier, or an array of
//! them. Declaration order matters: the first decidable specifier wins.
//! Only the first key of a specifier object is read; any others are ignored.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::error::SpecifierError;
use crate::record::identifier_text;

/// A single placement request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Specifier {
    /// Absolute index in the output
    At(#[serde(deserialize_with = "absolute_index")] i64),
    /// Immediately after the record with this identifier
    After(#[serde(deserialize_with = "anchor_target")] String),
    /// Immediately before the record with this identifier
    Before(#[serde(deserialize_with = "anchor_target")] String),
}

impl Specifier {
    pub fn at(index: i64) -> Self {
        Self::At(index)
    }

    pub fn after(target: impl Into<String>) -> Self {
        Self::After(target.into())
    }

    pub fn before(target: impl Into<String>) -> Self {
        Self::Before(target.into())
    }

    /// Decode a raw JSON specifier from its first key
    pub fn decode(raw: &Value) -> Result<Self, SpecifierError> {
        let (key, payload) = match raw {
            Value::Object(map) => map
                .iter()
                .next()
                .ok_or_else(|| SpecifierError::from_raw(raw))?,
            _ => return Err(SpecifierError::from_raw(raw)),
        };

        let mut single = Map::with_capacity(1);
        single.insert(key.clone(), payload.clone());
        Self::deserialize(&Value::Object(single)).map_err(|_| SpecifierError::invalid(key.as_str()))
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::At(index) => write!(f, "at {}", index),
            Self::After(target) => write!(f, "after {}", target),
            Self::Before(target) => write!(f, "before {}", target),
        }
    }
}

/// Whole numbers, including integral floats such as `2.0`
fn absolute_index<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let index = match Value::deserialize(deserializer)? {
        Value::Number(n) => integral(&n),
        _ => None,
    };
    index.ok_or_else(|| serde::de::Error::custom("index must be a whole number"))
}

/// The integer value of a JSON number, if it has one that fits `i64`
pub(crate) fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // i64::MAX is not representable as f64; the bound is exclusive
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Anchor targets accept the same identifier shapes as records do
fn anchor_target<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    identifier_text(&raw).ok_or_else(|| serde::de::Error::custom("anchor must be a string or number"))
}

/// Result of decoding one declared specifier
pub type Declared = Result<Specifier, SpecifierError>;

/// The specifiers a record declares, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderSpec {
    declared: Vec<Declared>,
}

impl OrderSpec {
    /// Normalize a raw order attribute.
    ///
    /// Absent and falsy values (`null`, `false`, `0`, `""`) yield no
    /// specifiers, an array is decoded element by element, and anything else
    /// is treated as a single specifier.
    pub fn from_value(raw: Option<&Value>) -> Self {
        let declared = match raw {
            None => Vec::new(),
            Some(value) if is_falsy(value) => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(Specifier::decode).collect(),
            Some(single) => vec![Specifier::decode(single)],
        };
        Self { declared }
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declared> {
        self.declared.iter()
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

impl From<Specifier> for OrderSpec {
    fn from(spec: Specifier) -> Self {
        Self {
            declared: vec![Ok(spec)],
        }
    }
}

impl From<Vec<Specifier>> for OrderSpec {
    fn from(specs: Vec<Specifier>) -> Self {
        specs.into_iter().collect()
    }
}

impl FromIterator<Specifier> for OrderSpec {
    fn from_iter<I: IntoIterator<Item = Specifier>>(iter: I) -> Self {
        Self {
            declared: iter.into_iter().map(Ok).collect(),
        }
    }
}

impl FromIterator<Declared> for OrderSpec {
    fn from_iter<I: IntoIterator<Item = Declared>>(iter: I) -> Self {
        Self {
            declared: iter.into_iter().collect(),
        }
    }
}
