//! Resolving types into memoized [`TypeDescriptor`]s.
//!
//! Descriptors depend only on a type's shape, so each one is built from the
//! type's [`TypeInfo`] at most once per cache and shared from then on.
//!
//! # Thread Safety
//!
//! [`DescriptorCache`] can be shared across threads. Concurrent first use of
//! the same type is serialized on a per-type init lock with a double check,
//! so the metadata is enumerated once and every caller receives the same
//! fully built descriptor. Other types are not blocked.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use linebind_model::{
    Member, Reflect, SlotDescriptor, SlotWriter, TypeDescriptor, TypeInfo, TypeRef, ValueKind,
};

use crate::error::{MapError, Result};

#[derive(Debug, Default)]
struct Entry {
    descriptor: OnceLock<Arc<TypeDescriptor>>,
    init: Mutex<()>,
}

/// Memoizing resolver from types to descriptors.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: RwLock<HashMap<TypeId, Arc<Entry>>>,
    enumerations: AtomicUsize,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the descriptor for `T`.
    pub fn resolve<T: Reflect>(&self) -> Result<Arc<TypeDescriptor>> {
        self.resolve_ref(TypeRef::of::<T>())
    }

    /// Resolves the descriptor for the type behind `ty`.
    ///
    /// Opaque handles and types without a record marker fail with
    /// [`MapError::Configuration`]. Failures are not cached.
    pub fn resolve_ref(&self, ty: TypeRef) -> Result<Arc<TypeDescriptor>> {
        let entry = self.entry(ty.id());
        if let Some(descriptor) = entry.descriptor.get() {
            return Ok(Arc::clone(descriptor));
        }

        let _guard = entry.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(descriptor) = entry.descriptor.get() {
            return Ok(Arc::clone(descriptor));
        }

        let info = ty.type_info().ok_or(MapError::Configuration {
            type_name: ty.name(),
        })?;
        self.enumerations.fetch_add(1, Ordering::Relaxed);
        let descriptor = Arc::new(describe(info)?);
        Ok(Arc::clone(entry.descriptor.get_or_init(|| descriptor)))
    }

    /// Resolves the record type a nested slot is declared with.
    pub fn resolve_kind(&self, kind: &ValueKind) -> Result<Arc<TypeDescriptor>> {
        match kind {
            ValueKind::Object(ty) => self.resolve_ref(*ty),
            ValueKind::Scalar(scalar) => Err(MapError::Configuration {
                type_name: scalar.as_str(),
            }),
        }
    }

    /// Returns true if a descriptor for `T` has been built.
    pub fn contains<T: 'static>(&self) -> bool {
        self.read_entries()
            .get(&TypeId::of::<T>())
            .is_some_and(|entry| entry.descriptor.get().is_some())
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.read_entries()
            .values()
            .filter(|entry| entry.descriptor.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times type metadata has been enumerated by this cache.
    pub fn enumerations(&self) -> usize {
        self.enumerations.load(Ordering::Relaxed)
    }

    /// Drops every cached descriptor.
    ///
    /// Descriptors already handed out stay valid.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn entry(&self, id: TypeId) -> Arc<Entry> {
        if let Some(entry) = self.read_entries().get(&id) {
            return Arc::clone(entry);
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(id).or_default())
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<TypeId, Arc<Entry>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds a descriptor from a type's metadata without caching.
///
/// Only marked slots are kept, in declaration order. A slot name declared
/// twice keeps its first declaration. Marked methods must take exactly one
/// parameter.
pub fn describe(info: TypeInfo) -> Result<TypeDescriptor> {
    let Some(marker) = info.marker else {
        return Err(MapError::Configuration {
            type_name: info.name,
        });
    };

    let mut seen = HashSet::new();
    let mut slots = Vec::with_capacity(info.slots.len());
    for slot in info.slots {
        let Some(column) = slot.marker else {
            continue;
        };
        if !seen.insert(slot.name) {
            tracing::warn!(
                type_name = info.name,
                slot = slot.name,
                "Slot declared more than once, keeping the first declaration"
            );
            continue;
        }
        let (value_kind, writer) = match slot.member {
            Member::Field { declared, write } => (declared, SlotWriter::Field(write)),
            Member::Method { params, invoke } => {
                let [param] = params.as_slice() else {
                    return Err(MapError::MethodArity {
                        type_name: info.name,
                        slot: slot.name,
                        arity: params.len(),
                    });
                };
                (*param, SlotWriter::Setter(invoke))
            }
        };
        slots.push(SlotDescriptor::new(slot.name, column, value_kind, writer));
    }

    tracing::debug!(
        type_name = info.name,
        slots = slots.len(),
        separator = %marker.separator,
        "Resolved type descriptor"
    );
    Ok(TypeDescriptor::new(
        info.name,
        info.id,
        marker.separator,
        slots,
        info.constructor,
    ))
}
