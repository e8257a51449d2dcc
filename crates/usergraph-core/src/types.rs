//! Domain types for the `User` label and the HTTP request bodies.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The `age` property, stored exactly as the caller sent it.
///
/// Any JSON value is accepted. Scalars keep their JSON type across a
/// store/read cycle; lists, objects and integers outside the `i64` range
/// are carried as [`Age::Other`] and left for the database to accept or
/// reject.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Age {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Other(Value),
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Age::from)
    }
}

impl From<Value> for Age {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(b),
            Value::String(s) => Self::Text(s),
            Value::Number(n) => match (n.as_i64(), n.is_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, true) => n.as_f64().map_or(Self::Other(Value::Number(n)), Self::Float),
                // u64 above i64::MAX
                (None, false) => Self::Other(Value::Number(n)),
            },
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Age {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Age {
    fn from(n: i32) -> Self {
        Self::Integer(n.into())
    }
}

impl From<f64> for Age {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Age {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Age {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Age {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A `User` node as returned by the list and lookup endpoints.
///
/// Either property is `None` when the stored node does not carry it, and
/// is then omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl User {
    pub fn new(name: impl Into<String>, age: impl Into<Age>) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age.into()),
        }
    }
}

/// Body of `POST /users`. Missing or `null` fields create a node without
/// that property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        Self {
            name: new.name,
            age: new.age,
        }
    }
}

/// Body of `PUT /users/:name`. A missing or `null` age removes the property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
}
