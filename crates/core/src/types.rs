use thiserror::Error;

use crate::tag::FourCharCode;

/// Largest integer the PIPL numeric encoding accepts for values and ids.
///
/// Four bytes are written, but the host tooling only ever produced values that fit
/// in two hex-digit pairs, so anything wider is rejected rather than truncated.
pub const MAX_NUMERIC_VALUE: u32 = 0xFFFF;

/// Errors raised while loading the embedded property catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Catalog template is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid four-character code: {0:?}")]
    InvalidTag(String),

    #[error("Duplicate property key in catalog: {0}")]
    DuplicateKey(FourCharCode),

    #[error("Catalog template defines no properties")]
    Empty,

    #[error("Default id {id} for key {key} exceeds {max:#06x}")]
    IdOutOfRange { key: FourCharCode, id: u32, max: u32 },
}

/// Errors raised while assigning values to a property set.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("Value {value} for key {key} is out of range (max {max:#06x})")]
    OutOfRange {
        key: FourCharCode,
        value: u32,
        max: u32,
    },

    #[error("Key {0} is not defined in the property catalog")]
    UnknownKey(FourCharCode),

    #[error("Key {key} holds {expected} values")]
    KindMismatch {
        key: FourCharCode,
        expected: &'static str,
    },

    #[error("Property catalog has no definition for field '{0}'")]
    MissingField(&'static str),
}

/// Errors raised while serializing property sets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Property set {index} has no properties left for this platform")]
    EmptyPropertySet { index: usize },

    #[error("Value {value} for key {key} is too large (max {max:#06x})")]
    ValueTooLarge {
        key: FourCharCode,
        value: u32,
        max: u32,
    },

    #[error("{what} of {len} does not fit in four bytes")]
    LengthOverflow { what: &'static str, len: usize },
}

/// The main error type for PIPL generation
#[derive(Debug, Error)]
pub enum PiplError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogLoadError),

    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Result type alias for PIPL operations
pub type PiplResult<T> = Result<T, PiplError>;
