//! wasm-stellar: WASM module for Stellar transaction operations
//!
//! This crate provides:
//! - XDR codec for envelopes, operations and smart-contract values
//! - Transaction assembly, signing and fee bumps
//! - TxRep (SEP-11) text rendering and parsing
//! - Transaction building from intents
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`, `src/xdr/`, `src/txrep/`, `src/builder/`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod builder;
pub mod error;
pub mod keypair;
pub mod network;
pub mod strkey;
pub mod transaction;
pub mod txrep;
pub mod wasm;
pub mod xdr;

// Re-export main types for convenience
pub use error::{DecodeError, WasmStellarError};
pub use keypair::{KeyPair, Signer};
pub use network::Network;
pub use transaction::{FeeBumpTransaction, Transaction, TransactionBuilder};
pub use txrep::{from_txrep, to_txrep};
pub use xdr::{TransactionEnvelope, XdrCodec};
