//! Ed25519 key pairs and the signing capability used by transactions.
//!
//! Transactions and authorization entries sign through the [`Signer`] trait, so
//! callers can plug in hardware keys, remote signers or deterministic test
//! doubles. [`KeyPair`] is the in-process implementation backed by `ed25519-dalek`.

use crate::error::WasmStellarError;
use crate::strkey::{self, VersionByte};
use crate::xdr::account::DecoratedSignature;
use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};

/// Signing capability over raw message bytes
pub trait Signer {
    fn public_key(&self) -> [u8; 32];

    fn sign(&self, message: &[u8]) -> Result<[u8; 64], WasmStellarError>;

    /// Last 4 bytes of the public key
    fn hint(&self) -> [u8; 4] {
        let key = self.public_key();
        [key[28], key[29], key[30], key[31]]
    }

    fn sign_decorated(&self, message: &[u8]) -> Result<DecoratedSignature, WasmStellarError> {
        Ok(DecoratedSignature {
            hint: self.hint(),
            signature: self.sign(message)?.to_vec(),
        })
    }

    /// Signature for an ed25519 signed-payload signer.
    ///
    /// The hint is the key hint XOR the last 4 bytes of the payload, with
    /// shorter payloads zero-extended.
    fn sign_payload_decorated(
        &self,
        payload: &[u8],
    ) -> Result<DecoratedSignature, WasmStellarError> {
        let mut payload_hint = [0u8; 4];
        if payload.len() >= 4 {
            payload_hint.copy_from_slice(&payload[payload.len() - 4..]);
        } else {
            payload_hint[..payload.len()].copy_from_slice(payload);
        }
        let mut hint = self.hint();
        for (h, p) in hint.iter_mut().zip(payload_hint) {
            *h ^= p;
        }
        Ok(DecoratedSignature {
            hint,
            signature: self.sign(payload)?.to_vec(),
        })
    }
}

/// Ed25519 key pair; the private half is optional for verify-only keys
#[derive(Debug, Clone)]
pub struct KeyPair {
    verifying_key: VerifyingKey,
    signing_key: Option<SigningKey>,
}

impl KeyPair {
    /// Generate a key pair from the platform RNG
    pub fn random() -> Result<Self, WasmStellarError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)
            .map_err(|e| WasmStellarError::Signing(format!("Random seed unavailable: {}", e)))?;
        Ok(Self::from_secret_bytes(seed))
    }

    pub fn from_secret_bytes(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        KeyPair {
            verifying_key: signing_key.verifying_key(),
            signing_key: Some(signing_key),
        }
    }

    /// From an `S...` secret seed
    pub fn from_secret_seed(seed: &str) -> Result<Self, WasmStellarError> {
        Ok(Self::from_secret_bytes(strkey::decode_32(
            VersionByte::SecretSeed,
            seed,
        )?))
    }

    /// Verify-only key pair from raw public key bytes
    pub fn from_public_key(key: [u8; 32]) -> Result<Self, WasmStellarError> {
        let verifying_key = VerifyingKey::from_bytes(&key)
            .map_err(|e| WasmStellarError::Signing(format!("Invalid public key: {}", e)))?;
        Ok(KeyPair {
            verifying_key,
            signing_key: None,
        })
    }

    /// Verify-only key pair from a `G...` account id
    pub fn from_account_id(account_id: &str) -> Result<Self, WasmStellarError> {
        Self::from_public_key(strkey::decode_32(VersionByte::AccountId, account_id)?)
    }

    pub fn account_id(&self) -> String {
        strkey::encode(VersionByte::AccountId, self.verifying_key.as_bytes())
    }

    pub fn secret_seed(&self) -> Option<String> {
        self.signing_key
            .as_ref()
            .map(|key| strkey::encode(VersionByte::SecretSeed, key.as_bytes()))
    }

    pub fn can_sign(&self) -> bool {
        self.signing_key.is_some()
    }

    pub fn verify(&self, message: &[u8], signature: &[u8; 64]) -> bool {
        self.verifying_key
            .verify(message, &Signature::from_bytes(signature))
            .is_ok()
    }
}

impl Signer for KeyPair {
    fn public_key(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    fn sign(&self, message: &[u8]) -> Result<[u8; 64], WasmStellarError> {
        let key = self.signing_key.as_ref().ok_or_else(|| {
            WasmStellarError::Signing("Key pair has no secret key".to_string())
        })?;
        Ok(key.sign(message).to_bytes())
    }
}
