//! WASM bindings for wasm-stellar
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations.

pub mod builder;
pub mod keypair;
pub mod transaction;
pub mod txrep;
pub mod xdr;

// Re-export WASM types
pub use builder::BuilderNamespace;
pub use keypair::WasmKeypair;
pub use transaction::{WasmFeeBumpTransaction, WasmTransaction};
pub use txrep::TxRepNamespace;
pub use xdr::XdrNamespace;
