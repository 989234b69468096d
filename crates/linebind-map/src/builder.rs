//! Populating objects from tokens.

use std::any::Any;

use linebind_model::{SlotDescriptor, TypeDescriptor, Value, ValueKind};

use crate::coerce::coerce;
use crate::error::{MapError, Result};
use crate::options::MapperOptions;
use crate::resolve::DescriptorCache;

/// Deepest chain of nested records a single line may describe.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Instantiates a described type and fills its slots from one line's tokens.
///
/// Nested slots are resolved through the cache, re-tokenized with the nested
/// type's separator and built recursively, at most [`MAX_NESTING_DEPTH`]
/// levels deep. The first failing slot aborts the build; no partially
/// populated object is returned.
#[derive(Debug, Clone, Copy)]
pub struct ObjectBuilder<'a> {
    cache: &'a DescriptorCache,
    options: &'a MapperOptions,
}

impl<'a> ObjectBuilder<'a> {
    pub fn new(cache: &'a DescriptorCache, options: &'a MapperOptions) -> Self {
        Self { cache, options }
    }

    /// Builds one object from `tokens` according to `descriptor`.
    pub fn build(
        &self,
        tokens: &[String],
        descriptor: &TypeDescriptor,
    ) -> Result<Box<dyn Any + Send>> {
        self.build_at(tokens, descriptor, 0)
    }

    fn build_at(
        &self,
        tokens: &[String],
        descriptor: &TypeDescriptor,
        depth: usize,
    ) -> Result<Box<dyn Any + Send>> {
        if depth > MAX_NESTING_DEPTH {
            return Err(MapError::NestingTooDeep {
                type_name: descriptor.type_name,
                limit: MAX_NESTING_DEPTH,
            });
        }

        let mut object = descriptor
            .instantiate()
            .map_err(|reason| MapError::Instantiation {
                type_name: descriptor.type_name,
                reason,
            })?;

        for slot in &descriptor.slots {
            let value = self.slot_value(tokens, slot, depth)?;
            slot.write(object.as_mut(), value)
                .map_err(|reason| MapError::Access {
                    type_name: descriptor.type_name,
                    slot: slot.name,
                    reason,
                })?;
        }

        Ok(object)
    }

    fn slot_value(&self, tokens: &[String], slot: &SlotDescriptor, depth: usize) -> Result<Value> {
        let raw = tokens
            .get(slot.column_index)
            .ok_or(MapError::ColumnIndexOutOfRange {
                column_index: slot.column_index,
                token_count: tokens.len(),
            })?;

        if slot.nested {
            let nested = self.cache.resolve_kind(&slot.value_kind)?;
            let sub_tokens = self.options.tokenizer(nested.separator).tokenize(raw)?;
            let object = self.build_at(&sub_tokens, &nested, depth + 1)?;
            return Ok(Value::Object(object));
        }

        match slot.value_kind {
            ValueKind::Scalar(kind) => coerce(raw, kind),
            ValueKind::Object(_) => Err(MapError::TypeNotSupported {
                kind_name: slot.value_kind.name(),
                slot: slot.name,
            }),
        }
    }
}
