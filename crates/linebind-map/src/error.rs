//! Error types for line mapping.

use linebind_ingest::IngestError;
use linebind_model::ScalarKind;
use thiserror::Error;

/// Errors from mapping a line onto a type.
///
/// Every variant aborts the current line (and, for batches, the whole batch).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// The target type does not carry a record marker.
    #[error("type {type_name} is not mappable")]
    Configuration { type_name: &'static str },

    /// A quoted span was still open at the end of the line.
    #[error("unterminated quoted field starting at byte {offset}")]
    QuoteParse { offset: usize },

    /// A marked setter does not take exactly one parameter.
    #[error("setter '{slot}' of {type_name} takes {arity} parameters, expected exactly one")]
    MethodArity {
        type_name: &'static str,
        slot: &'static str,
        arity: usize,
    },

    /// A slot points past the last token of the line.
    #[error("column index {column_index} is out of range for a line with {token_count} tokens")]
    ColumnIndexOutOfRange {
        column_index: usize,
        token_count: usize,
    },

    /// A token could not be parsed as the slot's scalar kind.
    #[error("cannot parse {raw:?} as {kind}")]
    Format { raw: String, kind: ScalarKind },

    /// A non-nested slot has a declared type with no scalar coercion.
    #[error("{kind_name} type of slot '{slot}' is not supported")]
    TypeNotSupported {
        kind_name: &'static str,
        slot: &'static str,
    },

    /// The target type could not be constructed.
    #[error("cannot instantiate {type_name}: {reason}")]
    Instantiation {
        type_name: &'static str,
        reason: String,
    },

    /// A resolved slot rejected the write.
    #[error("cannot write slot '{slot}' of {type_name}: {reason}")]
    Access {
        type_name: &'static str,
        slot: &'static str,
        reason: String,
    },

    /// Nested records recursed past the depth limit.
    #[error("nesting of {type_name} exceeds {limit} levels")]
    NestingTooDeep { type_name: &'static str, limit: usize },

    /// The line source failed to produce the next line.
    #[error(transparent)]
    Source(#[from] IngestError),
}

impl MapError {
    /// Get the slot name associated with this error, if any.
    pub fn slot(&self) -> Option<&'static str> {
        match self {
            Self::MethodArity { slot, .. }
            | Self::TypeNotSupported { slot, .. }
            | Self::Access { slot, .. } => Some(*slot),
            _ => None,
        }
    }

    /// Get the type name associated with this error, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Configuration { type_name }
            | Self::MethodArity { type_name, .. }
            | Self::Instantiation { type_name, .. }
            | Self::Access { type_name, .. }
            | Self::NestingTooDeep { type_name, .. } => Some(*type_name),
            _ => None,
        }
    }
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MapError>;
