//! Type introspection for mappable records.
//!
//! Rust has no runtime reflection, so each target type describes itself once
//! through [`Reflect::type_info`]. The description mirrors what a reflective
//! runtime would expose: the type-level [`RecordMarker`], a construction path,
//! and every declared slot (data fields and setter-style methods) in
//! declaration order, each optionally carrying a [`ColumnMarker`].
//!
//! # Example
//!
//! ```
//! use linebind_model::{ColumnMarker, Reflect, TypeInfo};
//!
//! #[derive(Debug, Default)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Reflect for Point {
//!     fn type_info() -> TypeInfo {
//!         TypeInfo::of::<Point>()
//!             .mappable()
//!             .default_constructor()
//!             .field("x", ColumnMarker::at(0), |p: &mut Point, v: i32| p.x = v)
//!             .field("y", ColumnMarker::at(1), |p: &mut Point, v: i32| p.y = v)
//!             .build()
//!     }
//! }
//!
//! let info = Point::type_info();
//! assert!(info.is_mappable());
//! assert_eq!(info.slots.len(), 2);
//! ```

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::kind::{TypeRef, ValueKind};
use crate::value::{ScalarType, Value};

/// Produces a fresh, default-state instance of a type.
pub type Constructor = Arc<dyn Fn() -> Result<Box<dyn Any + Send>, String> + Send + Sync>;

/// Assigns a value to a data field of a type-erased receiver.
pub type FieldWriter = Arc<dyn Fn(&mut (dyn Any + Send), Value) -> Result<(), String> + Send + Sync>;

/// Invokes a method on a type-erased receiver with positional arguments.
pub type MethodInvoker =
    Arc<dyn Fn(&mut (dyn Any + Send), Vec<Value>) -> Result<(), String> + Send + Sync>;

/// Default token separator for a record.
pub const DEFAULT_SEPARATOR: char = ',';

/// Type-level marker; its presence makes a type mappable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMarker {
    pub separator: char,
}

impl Default for RecordMarker {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Per-slot marker binding a slot to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMarker {
    pub column_index: usize,
    /// The column holds a whole sub-record to be mapped recursively.
    pub nested: bool,
}

impl ColumnMarker {
    pub fn at(column_index: usize) -> Self {
        Self {
            column_index,
            nested: false,
        }
    }

    /// Marks the slot as holding a nested record.
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }
}

/// How a slot is reached on the receiver.
#[derive(Clone)]
pub enum Member {
    /// A data field with its declared type.
    Field {
        declared: ValueKind,
        write: FieldWriter,
    },
    /// A method with its declared parameter types.
    Method {
        params: Vec<ValueKind>,
        invoke: MethodInvoker,
    },
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { declared, .. } => {
                f.debug_struct("Field").field("declared", declared).finish()
            }
            Self::Method { params, .. } => f.debug_struct("Method").field("params", params).finish(),
        }
    }
}

/// One declared slot of a type.
#[derive(Debug, Clone)]
pub struct SlotInfo {
    pub name: &'static str,
    pub member: Member,
    pub marker: Option<ColumnMarker>,
}

/// Everything known about a type's shape.
#[derive(Clone)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
    pub marker: Option<RecordMarker>,
    /// Declared slots in declaration order.
    pub slots: Vec<SlotInfo>,
    pub constructor: Option<Constructor>,
}

impl TypeInfo {
    /// Starts describing `T`.
    pub fn of<T: Any + Send>() -> TypeInfoBuilder<T> {
        TypeInfoBuilder {
            info: TypeInfo {
                name: type_name::<T>(),
                id: TypeId::of::<T>(),
                marker: None,
                slots: Vec::new(),
                constructor: None,
            },
            _type: PhantomData,
        }
    }

    pub fn is_mappable(&self) -> bool {
        self.marker.is_some()
    }

    /// Creates a new instance through the declared construction path.
    pub fn instantiate(&self) -> Result<Box<dyn Any + Send>, String> {
        match &self.constructor {
            Some(construct) => construct(),
            None => Err("no default constructor".to_string()),
        }
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("marker", &self.marker)
            .field("slots", &self.slots)
            .field("constructible", &self.constructor.is_some())
            .finish()
    }
}

/// Types that can describe their own shape.
pub trait Reflect: Any + Send {
    fn type_info() -> TypeInfo;
}

/// Builder for a [`TypeInfo`].
pub struct TypeInfoBuilder<T> {
    info: TypeInfo,
    _type: PhantomData<fn() -> T>,
}

impl<T: Any + Send> TypeInfoBuilder<T> {
    /// Attaches the record marker with the default separator.
    pub fn mappable(mut self) -> Self {
        self.info.marker.get_or_insert_with(RecordMarker::default);
        self
    }

    /// Attaches the record marker with a custom separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.info.marker = Some(RecordMarker { separator });
        self
    }

    pub fn default_constructor(self) -> Self
    where
        T: Default,
    {
        self.constructor(|| Ok(T::default()))
    }

    /// Declares a fallible construction path.
    pub fn constructor<F>(mut self, construct: F) -> Self
    where
        F: Fn() -> Result<T, String> + Send + Sync + 'static,
    {
        let construct: Constructor = Arc::new(move || {
            construct().map(|value| Box::new(value) as Box<dyn Any + Send>)
        });
        self.info.constructor = Some(construct);
        self
    }

    /// Declares a marked scalar field.
    pub fn field<V, F>(self, name: &'static str, marker: ColumnMarker, write: F) -> Self
    where
        V: ScalarType,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.declare_field(name, Some(marker), V::KIND.into(), V::from_value, write)
    }

    /// Declares a scalar field that carries no column marker.
    pub fn unmarked_field<V, F>(self, name: &'static str, write: F) -> Self
    where
        V: ScalarType,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        self.declare_field(name, None, V::KIND.into(), V::from_value, write)
    }

    /// Declares a marked field holding another record type.
    pub fn record_field<V, F>(self, name: &'static str, marker: ColumnMarker, write: F) -> Self
    where
        V: Reflect,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let declared = ValueKind::Object(TypeRef::of::<V>());
        self.declare_field(name, Some(marker), declared, Value::into_object::<V>, write)
    }

    /// Declares a marked field of a type with no introspection data.
    pub fn opaque_field<V, F>(self, name: &'static str, marker: ColumnMarker, write: F) -> Self
    where
        V: Any + Send,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let declared = ValueKind::Object(TypeRef::opaque::<V>());
        self.declare_field(name, Some(marker), declared, Value::into_object::<V>, write)
    }

    /// Declares a marked single-parameter setter taking a scalar.
    pub fn setter<V, F>(self, name: &'static str, marker: ColumnMarker, set: F) -> Self
    where
        V: ScalarType,
        F: Fn(&mut T, V) -> Result<(), String> + Send + Sync + 'static,
    {
        self.declare_setter(name, marker, V::KIND.into(), V::from_value, set)
    }

    /// Declares a marked single-parameter setter taking another record type.
    pub fn record_setter<V, F>(self, name: &'static str, marker: ColumnMarker, set: F) -> Self
    where
        V: Reflect,
        F: Fn(&mut T, V) -> Result<(), String> + Send + Sync + 'static,
    {
        let declared = ValueKind::Object(TypeRef::of::<V>());
        self.declare_setter(name, marker, declared, Value::into_object::<V>, set)
    }

    /// Declares a method with an arbitrary parameter list.
    pub fn method<F>(
        mut self,
        name: &'static str,
        marker: Option<ColumnMarker>,
        params: Vec<ValueKind>,
        invoke: F,
    ) -> Self
    where
        F: Fn(&mut T, Vec<Value>) -> Result<(), String> + Send + Sync + 'static,
    {
        let invoke: MethodInvoker = Arc::new(
            move |receiver: &mut (dyn Any + Send), args: Vec<Value>| -> Result<(), String> {
                let receiver = downcast_receiver::<T>(receiver)?;
                invoke(receiver, args)
            },
        );
        self.info.slots.push(SlotInfo {
            name,
            member: Member::Method { params, invoke },
            marker,
        });
        self
    }

    pub fn build(self) -> TypeInfo {
        self.info
    }

    fn declare_field<V, F>(
        mut self,
        name: &'static str,
        marker: Option<ColumnMarker>,
        declared: ValueKind,
        extract: fn(Value) -> Result<V, Value>,
        write: F,
    ) -> Self
    where
        V: 'static,
        F: Fn(&mut T, V) + Send + Sync + 'static,
    {
        let write: FieldWriter = Arc::new(
            move |receiver: &mut (dyn Any + Send), value: Value| -> Result<(), String> {
                let receiver = downcast_receiver::<T>(receiver)?;
                let value = extract(value).map_err(|v| kind_mismatch(declared, &v))?;
                write(receiver, value);
                Ok(())
            },
        );
        self.info.slots.push(SlotInfo {
            name,
            member: Member::Field { declared, write },
            marker,
        });
        self
    }

    fn declare_setter<V, F>(
        self,
        name: &'static str,
        marker: ColumnMarker,
        declared: ValueKind,
        extract: fn(Value) -> Result<V, Value>,
        set: F,
    ) -> Self
    where
        V: 'static,
        F: Fn(&mut T, V) -> Result<(), String> + Send + Sync + 'static,
    {
        self.method(name, Some(marker), vec![declared], move |receiver, mut args| {
            if args.len() != 1 {
                return Err(format!("expected 1 argument, got {}", args.len()));
            }
            let arg = args.remove(0);
            let value = extract(arg).map_err(|v| kind_mismatch(declared, &v))?;
            set(receiver, value)
        })
    }
}

fn downcast_receiver<T: Any>(receiver: &mut (dyn Any + Send)) -> Result<&mut T, String> {
    receiver
        .downcast_mut::<T>()
        .ok_or_else(|| format!("receiver is not a {}", type_name::<T>()))
}

fn kind_mismatch(declared: ValueKind, got: &Value) -> String {
    format!("expected a {declared} value, got {}", got.kind_name())
}
