//! Error types for wasm-stellar

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Structural failures while reading XDR bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Fewer bytes remain than the field declares
    #[error("input too short: needed {needed} bytes, {remaining} remaining")]
    TooShort { needed: usize, remaining: usize },
    /// Boolean encoded as something other than 0 or 1
    #[error("invalid boolean value {0}")]
    InvalidBoolean(u32),
    /// Optional presence flag other than 0 or 1
    #[error("invalid optional presence flag {0}")]
    InvalidOptional(u32),
    /// Discriminant not mapped by a closed union
    #[error("unknown {type_name} discriminant {value}")]
    UnknownDiscriminant { type_name: &'static str, value: i32 },
    /// String payload is not UTF-8
    #[error("invalid utf-8 in string: {0}")]
    InvalidUtf8(String),
    /// Padding bytes after variable-length data were not zero
    #[error("non-zero padding bytes")]
    NonZeroPadding,
    /// Bytes left over after decoding a complete value
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    /// Variable-length field longer than its declared bound
    #[error("{type_name} length {actual} exceeds maximum {max}")]
    LengthExceeded {
        type_name: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Main error type for wasm-stellar operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmStellarError {
    /// XDR decode error
    #[error("XDR decode error: {0}")]
    Decode(#[from] DecodeError),
    /// Construction-time validation failure
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Malformed strkey address or seed
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Encoding failure (base64, encode-side bounds)
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// TxRep line did not match its expected path or value type
    #[error("TxRep error at `{path}`: {message}")]
    TxRep { path: String, message: String },
    /// Signing capability failure
    #[error("Signing error: {0}")]
    Signing(String),
    /// Generic string error
    #[error("{0}")]
    StringError(String),
}

impl WasmStellarError {
    pub fn txrep(path: &str, message: impl Into<String>) -> Self {
        WasmStellarError::TxRep {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl From<&str> for WasmStellarError {
    fn from(s: &str) -> Self {
        WasmStellarError::StringError(s.to_string())
    }
}

impl From<String> for WasmStellarError {
    fn from(s: String) -> Self {
        WasmStellarError::StringError(s)
    }
}

impl From<base64::DecodeError> for WasmStellarError {
    fn from(err: base64::DecodeError) -> Self {
        WasmStellarError::Encoding(format!("Invalid base64: {}", err))
    }
}

// Converts to JS Error with stack trace
impl From<WasmStellarError> for JsValue {
    fn from(err: WasmStellarError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
