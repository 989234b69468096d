//! Runtime values written into object slots.

use std::any::Any;
use std::fmt;

use crate::kind::ScalarKind;

/// A typed value ready to be assigned to a slot.
pub enum Value {
    String(String),
    Int32(i32),
    Int64(i64),
    Int16(i16),
    Int8(i8),
    Float32(f32),
    Float64(f64),
    Bool(bool),
    Char(char),
    /// A fully built nested record.
    Object(Box<dyn Any + Send>),
}

impl Value {
    /// Returns the scalar kind of this value, or `None` for objects.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        Some(match self {
            Self::String(_) => ScalarKind::String,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Int16(_) => ScalarKind::Int16,
            Self::Int8(_) => ScalarKind::Int8,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Char(_) => ScalarKind::Char,
            Self::Object(_) => return None,
        })
    }

    /// Name of the value's kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        self.scalar_kind().map_or("Object", |kind| kind.as_str())
    }

    /// Takes the nested record out of an object value.
    pub fn into_object<T: Any>(self) -> Result<T, Value> {
        match self {
            Self::Object(boxed) => match boxed.downcast::<T>() {
                Ok(inner) => Ok(*inner),
                Err(boxed) => Err(Self::Object(boxed)),
            },
            other => Err(other),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            Self::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            Self::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            Self::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            Self::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            Self::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
        }
    }
}

/// Scalars compare by value; objects never compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b,
            (Self::Float64(a), Self::Float64(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            _ => false,
        }
    }
}

/// Rust types that correspond to one of the nine scalar kinds.
pub trait ScalarType: Sized + Send + 'static {
    const KIND: ScalarKind;

    /// Extracts `Self` from a value of the matching kind.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! scalar_type {
    ($ty:ty, $variant:ident) => {
        impl ScalarType for $ty {
            const KIND: ScalarKind = ScalarKind::$variant;

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }
    };
}

scalar_type!(String, String);
scalar_type!(i32, Int32);
scalar_type!(i64, Int64);
scalar_type!(i16, Int16);
scalar_type!(i8, Int8);
scalar_type!(f32, Float32);
scalar_type!(f64, Float64);
scalar_type!(bool, Bool);
scalar_type!(char, Char);
