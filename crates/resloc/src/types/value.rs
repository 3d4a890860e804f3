use std::collections::{BTreeMap, HashMap};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// A scalar format argument.
///
/// # Example
///
/// ```
/// use resloc::Value;
///
/// let count: Value = 42.into();
/// let name: Value = "Alice".into();
/// assert_eq!(count.to_string(), "42");
/// assert_eq!(name.as_string(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// An unsigned integer above `i64::MAX`. Smaller unsigned values are
    /// stored as [`Value::Number`].
    Unsigned(u64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// A boolean value.
    Bool(bool),
}

impl Value {
    /// Get this value as a number, if it is one that fits an `i64`.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Unsigned(n) => i64::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            Value::Unsigned(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Unsigned(n), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// An object whose readable members can fill `{Name}` placeholders.
///
/// Usually implemented with `#[derive(Placeholders)]`; maps of displayable
/// values implement it too.
pub trait Placeholders {
    /// The string form of the member called `name`, if the object has one.
    fn placeholder(&self, name: &str) -> Option<String>;
}

impl<V: Display> Placeholders for HashMap<String, V> {
    fn placeholder(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> Placeholders for BTreeMap<String, V> {
    fn placeholder(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> Placeholders for HashMap<&str, V> {
    fn placeholder(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

/// One argument passed to the message formatter.
///
/// The kind of the *first* argument decides how a message is formatted:
/// scalars select positional `{0}` substitution, an object selects named
/// `{Name}` substitution.
///
/// # Example
///
/// ```
/// use resloc::{Arg, format};
/// use std::collections::HashMap;
///
/// assert_eq!(format("{0} items", &[5.into()]), "5 items");
///
/// let model = HashMap::from([("Count", 5)]);
/// assert_eq!(format("{Count} items", &[Arg::object(&model)]), "5 items");
/// ```
#[derive(Clone)]
pub enum Arg<'a> {
    /// A scalar value.
    Scalar(Value),
    /// A named-placeholder source object.
    Object(&'a dyn Placeholders),
}

impl<'a> Arg<'a> {
    /// Wrap a named-placeholder source object.
    pub fn object(source: &'a dyn Placeholders) -> Self {
        Arg::Object(source)
    }

    /// Returns true if this argument is a scalar.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Arg::Scalar(_))
    }
}

macro_rules! scalar_arg_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::Scalar(value.into())
                }
            }
        )+
    };
}

scalar_arg_from!(i32, i64, u32, u64, usize, f32, f64, bool, String, &str, Value);

impl Debug for Arg<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Arg::Scalar(value) => f.debug_tuple("Scalar").field(value).finish(),
            Arg::Object(_) => f.write_str("Object(..)"),
        }
    }
}
