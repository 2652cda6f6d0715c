//! WASM bindings for ed25519 key pairs.

use crate::error::WasmStellarError;
use crate::keypair::{KeyPair, Signer};
use wasm_bindgen::prelude::*;

/// WASM wrapper for account key pairs.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmKeypair {
    inner: KeyPair,
}

#[wasm_bindgen]
impl WasmKeypair {
    /// Generate a new random keypair.
    #[wasm_bindgen]
    pub fn random() -> Result<WasmKeypair, JsValue> {
        Ok(WasmKeypair {
            inner: KeyPair::random()?,
        })
    }

    /// Create a keypair from an `S...` secret seed.
    #[wasm_bindgen(js_name = fromSecretSeed)]
    pub fn from_secret_seed(seed: &str) -> Result<WasmKeypair, JsValue> {
        Ok(WasmKeypair {
            inner: KeyPair::from_secret_seed(seed)?,
        })
    }

    /// Create a verify-only keypair from a `G...` account id.
    #[wasm_bindgen(js_name = fromAccountId)]
    pub fn from_account_id(account_id: &str) -> Result<WasmKeypair, JsValue> {
        Ok(WasmKeypair {
            inner: KeyPair::from_account_id(account_id)?,
        })
    }

    /// `G...` account id
    #[wasm_bindgen(getter, js_name = accountId)]
    pub fn account_id(&self) -> String {
        self.inner.account_id()
    }

    /// `S...` secret seed, if the private half is present
    #[wasm_bindgen(getter, js_name = secretSeed)]
    pub fn secret_seed(&self) -> Option<String> {
        self.inner.secret_seed()
    }

    /// Get the public key as a 32-byte Uint8Array.
    #[wasm_bindgen(getter, js_name = publicKey)]
    pub fn public_key(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.inner.public_key()[..])
    }

    #[wasm_bindgen(getter, js_name = canSign)]
    pub fn can_sign(&self) -> bool {
        self.inner.can_sign()
    }

    /// Sign a message and return the 64-byte ed25519 signature.
    #[wasm_bindgen]
    pub fn sign(&self, message: &[u8]) -> Result<js_sys::Uint8Array, JsValue> {
        let signature = self.inner.sign(message)?;
        Ok(js_sys::Uint8Array::from(&signature[..]))
    }

    #[wasm_bindgen]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<bool, JsValue> {
        let signature: [u8; 64] = signature.try_into().map_err(|_| {
            WasmStellarError::InvalidArgument(format!(
                "Signature must be 64 bytes, got {}",
                signature.len()
            ))
        })?;
        Ok(self.inner.verify(message, &signature))
    }
}

impl WasmKeypair {
    /// Get the inner KeyPair for internal Rust use.
    pub fn inner(&self) -> &KeyPair {
        &self.inner
    }
}
