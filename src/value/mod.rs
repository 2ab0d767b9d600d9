mod object;
mod scalar;

use std::fmt;

use itertools::Itertools as _;

pub use self::{
    object::Object,
    scalar::{DefaultScalarValue, ScalarValue},
};

/// Serializable value returned from introspection resolution.
///
/// This is a JSON-like tree, shaped the way a GraphQL response is: `Null`,
/// a scalar, a list, or an ordered object.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum Value<S = DefaultScalarValue> {
    Null,
    Scalar(S),
    List(Vec<Value<S>>),
    Object(Object<S>),
}

impl<S> Value<S> {
    /// Constructs a null value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Constructs a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Constructs an object value.
    pub fn object(o: Object<S>) -> Self {
        Self::Object(o)
    }

    /// Constructs a scalar value.
    pub fn scalar<T>(s: T) -> Self
    where
        S: From<T>,
    {
        Self::Scalar(s.into())
    }

    /// Checks whether this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Views the underlying scalar value, if present.
    pub fn as_scalar(&self) -> Option<&S> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Views the underlying object value, if present.
    pub fn as_object_value(&self) -> Option<&Object<S>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl<S: ScalarValue> Value<S> {
    /// Views the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::as_str)
    }
}

/// Renders the value as a GraphQL literal, the way `__InputValue.defaultValue`
/// reports it.
impl<S: ScalarValue> fmt::Display for Value<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(s) => {
                if let Some(string) = s.as_str() {
                    write!(f, "\"{string}\"")
                } else {
                    write!(f, "{s}")
                }
            }
            Self::List(list) => write!(f, "[{}]", list.iter().format(", ")),
            Self::Object(obj) => write!(
                f,
                "{{{}}}",
                obj.iter().format_with(", ", |(k, v), g| g(&format_args!("{k}: {v}"))),
            ),
        }
    }
}

impl<S, T> From<Option<T>> for Value<S>
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<S: From<String>> From<&str> for Value<S> {
    fn from(s: &str) -> Self {
        Self::scalar(s.to_owned())
    }
}

impl<S: From<String>> From<String> for Value<S> {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl<S: From<bool>> From<bool> for Value<S> {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

impl<S: From<i32>> From<i32> for Value<S> {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}
