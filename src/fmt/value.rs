//! Logging methods are variadic over loosely typed values. `Value` is the
//! displayable union they accept, `Args` the ordered sequence handed to sinks.

use super::inspect::inspect;
use serde::Serialize;
use std::fmt;

/// One loggable argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Written verbatim.
    Text(String),
    /// Pretty-printed with [`inspect`](super::inspect).
    Data(serde_json::Value),
    /// An error flattened to its message and `source()` chain.
    Error(String),
}

impl Value {
    /// Serializes any value; a failing `Serialize` impl degrades to a text placeholder.
    #[must_use]
    pub fn data<T: Serialize + ?Sized>(value: &T) -> Self {
        serde_json::to_value(value).map_or_else(
            |e| Self::Text(format!("[unserializable: {e}]")),
            Self::Data,
        )
    }

    /// Flattens an error and its causes into `outer: inner: root`.
    #[must_use]
    pub fn error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Error(message)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Error(s) => f.write_str(s),
            Self::Data(v) => f.write_str(&inspect(v)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Data(v)
    }
}

macro_rules! impl_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Data(serde_json::Value::from(v))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i32, i64, u32, u64, usize, f64);

/// Ordered arguments of one logging call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args(Vec<Value>);

impl Args {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Prepends the `[name]` tag as its own leading argument.
    #[must_use]
    pub fn tagged(mut self, name: &str) -> Self {
        self.0.insert(0, Value::Text(format!("[{name}]")));
        self
    }

    /// Arguments joined by a single space.
    #[must_use]
    pub fn line(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<&[Value]> for Args {
    fn from(values: &[Value]) -> Self {
        Self(values.to_vec())
    }
}

impl<const N: usize> From<[Value; N]> for Args {
    fn from(values: [Value; N]) -> Self {
        Self(values.into())
    }
}

impl From<Value> for Args {
    fn from(value: Value) -> Self {
        Self(vec![value])
    }
}

impl From<&str> for Args {
    fn from(s: &str) -> Self {
        Self(vec![Value::from(s)])
    }
}

impl From<String> for Args {
    fn from(s: String) -> Self {
        Self(vec![Value::from(s)])
    }
}

impl From<serde_json::Value> for Args {
    fn from(v: serde_json::Value) -> Self {
        Self(vec![Value::Data(v)])
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// Builds [`Args`] from heterogeneous values: `args!["loaded", 3, json!({"ok": true})]`.
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::from(vec![$($crate::Value::from($value)),+])
    };
}
