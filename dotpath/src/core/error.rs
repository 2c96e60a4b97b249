//! Error taxonomy for dot-notation access.

use std::fmt;

use thiserror::Error;

/// Which side of the accessor raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Get,
    Set,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Get => f.write_str("get"),
            Op::Set => f.write_str("set"),
        }
    }
}

/// Fieldless view of [`AccessError`], convenient for matching in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyPath,
    NonIntegerIndex,
    IndexOutOfRange,
    MissingKey,
    UnsupportedType,
    Deserialize,
}

/// Errors returned by [`Accessor`](crate::Accessor) and the default strategies.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The splitter produced no segments for `key`.
    #[error("no properties parsed from key: {key}")]
    EmptyPath { key: String },

    /// A sequence was addressed with a property that is not an integer.
    #[error("cannot {op} non-integer property '{property}' on an array")]
    NonIntegerIndex { op: Op, property: String },

    /// A sequence index was negative or past the permitted bound.
    #[error("cannot {op} out of range property '{property}' on an array (len: {len})")]
    IndexOutOfRange {
        op: Op,
        property: String,
        len: usize,
    },

    /// A mapping was read with a key it does not contain.
    #[error("cannot {op} non-existent property '{property}' on an object")]
    MissingKey { op: Op, property: String },

    /// The container at this step is neither a sequence nor a mapping.
    #[error("cannot {op} property '{property}' on type {found}")]
    UnsupportedType {
        op: Op,
        property: String,
        found: &'static str,
    },

    /// `get_as` found a value that does not deserialize into the requested type.
    #[error("deserialize value: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::EmptyPath { .. } => ErrorKind::EmptyPath,
            AccessError::NonIntegerIndex { .. } => ErrorKind::NonIntegerIndex,
            AccessError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            AccessError::MissingKey { .. } => ErrorKind::MissingKey,
            AccessError::UnsupportedType { .. } => ErrorKind::UnsupportedType,
            AccessError::Deserialize(_) => ErrorKind::Deserialize,
        }
    }

    /// True when the path itself could not be resolved, as opposed to a
    /// resolved value failing to deserialize.
    pub fn is_unresolved(&self) -> bool {
        !matches!(self, AccessError::Deserialize(_))
    }

    #[inline]
    pub(crate) fn non_integer(op: Op, property: &str) -> Self {
        AccessError::NonIntegerIndex {
            op,
            property: property.to_string(),
        }
    }

    #[inline]
    pub(crate) fn out_of_range(op: Op, property: &str, len: usize) -> Self {
        AccessError::IndexOutOfRange {
            op,
            property: property.to_string(),
            len,
        }
    }

    #[inline]
    pub(crate) fn missing_key(op: Op, property: &str) -> Self {
        AccessError::MissingKey {
            op,
            property: property.to_string(),
        }
    }

    #[inline]
    pub(crate) fn unsupported(op: Op, property: &str, found: &'static str) -> Self {
        AccessError::UnsupportedType {
            op,
            property: property.to_string(),
            found,
        }
    }
}
