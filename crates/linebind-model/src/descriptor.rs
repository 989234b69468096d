//! Resolved, line-independent mapping descriptors.
//!
//! A [`TypeDescriptor`] is derived from a type's [`TypeInfo`](crate::TypeInfo)
//! once and then shared read-only. It holds only type-shape facts; whether a
//! column index fits a particular line is checked when that line is mapped.

use std::any::{Any, TypeId};
use std::fmt;

use crate::kind::ValueKind;
use crate::reflect::{ColumnMarker, Constructor, FieldWriter, MethodInvoker};
use crate::value::Value;

/// How a slot is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteKind {
    Field,
    Setter,
}

/// Type-erased write path for one slot.
#[derive(Clone)]
pub enum SlotWriter {
    Field(FieldWriter),
    Setter(MethodInvoker),
}

impl SlotWriter {
    pub fn kind(&self) -> WriteKind {
        match self {
            Self::Field(_) => WriteKind::Field,
            Self::Setter(_) => WriteKind::Setter,
        }
    }
}

/// Mapping of one slot to one column.
#[derive(Clone)]
pub struct SlotDescriptor {
    pub name: &'static str,
    pub column_index: usize,
    pub write_kind: WriteKind,
    pub nested: bool,
    pub value_kind: ValueKind,
    writer: SlotWriter,
}

impl SlotDescriptor {
    pub fn new(
        name: &'static str,
        marker: ColumnMarker,
        value_kind: ValueKind,
        writer: SlotWriter,
    ) -> Self {
        Self {
            name,
            column_index: marker.column_index,
            write_kind: writer.kind(),
            nested: marker.nested,
            value_kind,
            writer,
        }
    }

    /// Assigns `value` to this slot on `receiver`.
    ///
    /// Field slots are assigned directly; setter slots invoke the setter with
    /// `value` as its single argument.
    pub fn write(&self, receiver: &mut (dyn Any + Send), value: Value) -> Result<(), String> {
        match &self.writer {
            SlotWriter::Field(write) => write(receiver, value),
            SlotWriter::Setter(invoke) => invoke(receiver, vec![value]),
        }
    }
}

impl PartialEq for SlotDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.column_index == other.column_index
            && self.write_kind == other.write_kind
            && self.nested == other.nested
            && self.value_kind == other.value_kind
    }
}

impl fmt::Debug for SlotDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotDescriptor")
            .field("name", &self.name)
            .field("column_index", &self.column_index)
            .field("write_kind", &self.write_kind)
            .field("nested", &self.nested)
            .field("value_kind", &self.value_kind)
            .finish()
    }
}

/// Immutable description of how a line maps onto a type.
#[derive(Clone)]
pub struct TypeDescriptor {
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub separator: char,
    /// Slots in the order they are populated.
    pub slots: Vec<SlotDescriptor>,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    pub fn new(
        type_name: &'static str,
        type_id: TypeId,
        separator: char,
        slots: Vec<SlotDescriptor>,
        constructor: Option<Constructor>,
    ) -> Self {
        Self {
            type_name,
            type_id,
            separator,
            slots,
            constructor,
        }
    }

    /// Creates a fresh instance of the described type.
    pub fn instantiate(&self) -> Result<Box<dyn Any + Send>, String> {
        match &self.constructor {
            Some(construct) => construct(),
            None => Err("no default constructor".to_string()),
        }
    }

    pub fn slot(&self, name: &str) -> Option<&SlotDescriptor> {
        self.slots.iter().find(|slot| slot.name == name)
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
            && self.separator == other.separator
            && self.slots == other.slots
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_name)
            .field("separator", &self.separator)
            .field("slots", &self.slots)
            .finish()
    }
}
