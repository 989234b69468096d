//! Core types for mapping delimited lines onto Rust values.
//!
//! - [`kind`]: scalar and object value kinds
//! - [`value`]: runtime values assigned to slots
//! - [`reflect`]: per-type introspection data ([`Reflect`], [`TypeInfo`])
//! - [`descriptor`]: resolved [`TypeDescriptor`]s shared by the mapper

#![deny(unsafe_code)]

pub mod descriptor;
pub mod kind;
pub mod reflect;
pub mod value;

pub use descriptor::{SlotDescriptor, SlotWriter, TypeDescriptor, WriteKind};
pub use kind::{ScalarKind, TypeRef, ValueKind};
pub use reflect::{
    ColumnMarker, Constructor, DEFAULT_SEPARATOR, FieldWriter, Member, MethodInvoker,
    RecordMarker, Reflect, SlotInfo, TypeInfo, TypeInfoBuilder,
};
pub use value::{ScalarType, Value};
