//! Value kinds recorded for each slot.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::reflect::{Reflect, TypeInfo};

/// The nine scalar kinds a raw token can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    String,
    Int32,
    Int64,
    Int16,
    Int8,
    Float32,
    Float64,
    Bool,
    Char,
}

impl ScalarKind {
    /// Returns the display name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Int16 => "Int16",
            Self::Int8 => "Int8",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Bool => "Bool",
            Self::Char => "Char",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A handle to a Rust type that may be stored in an object slot.
///
/// Handles created with [`TypeRef::of`] link back to the type's
/// [`TypeInfo`], which is what makes nested mapping possible. Handles created
/// with [`TypeRef::opaque`] only carry a name and identity.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
    info: Option<fn() -> TypeInfo>,
}

impl TypeRef {
    /// Handle for a type that describes itself through [`Reflect`].
    pub fn of<T: Reflect>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            info: Some(T::type_info as fn() -> TypeInfo),
        }
    }

    /// Handle for a type with no introspection data.
    pub fn opaque<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            info: None,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Enumerates the type's metadata, if the type exposes any.
    pub fn type_info(&self) -> Option<TypeInfo> {
        self.info.map(|info| info())
    }

    pub fn is_opaque(&self) -> bool {
        self.info.is_none()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}

/// The declared value type of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// One of the supported scalar kinds.
    Scalar(ScalarKind),
    /// Any other type: a nested record, or something the mapper cannot coerce.
    Object(TypeRef),
}

impl ValueKind {
    /// Human-readable kind name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalar(kind) => kind.as_str(),
            Self::Object(ty) => ty.name(),
        }
    }
}

impl From<ScalarKind> for ValueKind {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
