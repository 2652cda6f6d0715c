//! WASM bindings for Transaction and FeeBumpTransaction
//!
//! Thin wrappers around the core transactions with #[wasm_bindgen]. Networks
//! are passed as passphrases.

use crate::error::WasmStellarError;
use crate::network::Network;
use crate::transaction::{FeeBumpTransaction, Transaction};
use crate::txrep;
use crate::wasm::keypair::WasmKeypair;
use crate::xdr::account::{DecoratedSignature, MuxedAccount};
use crate::xdr::codec::XdrCodec;
use crate::xdr::soroban::{LedgerFootprint, SorobanAuthorizationEntry, SorobanTransactionData};
use wasm_bindgen::prelude::*;

/// WASM-exposed transaction wrapper
#[wasm_bindgen]
pub struct WasmTransaction {
    inner: Transaction,
}

#[wasm_bindgen]
impl WasmTransaction {
    /// Parse a base64 v0 or v1 transaction envelope, keeping its signatures
    #[wasm_bindgen(js_name = fromEnvelope)]
    pub fn from_envelope(envelope: &str) -> Result<WasmTransaction, JsValue> {
        Ok(WasmTransaction {
            inner: Transaction::from_envelope_xdr(envelope)?,
        })
    }

    /// Source account (`G...` or `M...`)
    #[wasm_bindgen(getter, js_name = sourceAccount)]
    pub fn source_account(&self) -> String {
        self.inner.source_account().address()
    }

    /// Total fee in stroops
    #[wasm_bindgen(getter)]
    pub fn fee(&self) -> u32 {
        self.inner.fee()
    }

    #[wasm_bindgen(getter, js_name = sequenceNumber)]
    pub fn sequence_number(&self) -> js_sys::BigInt {
        js_sys::BigInt::from(self.inner.seq_num())
    }

    #[wasm_bindgen(getter, js_name = operationCount)]
    pub fn operation_count(&self) -> u32 {
        self.inner.operations().len() as u32
    }

    #[wasm_bindgen(getter, js_name = signatureCount)]
    pub fn signature_count(&self) -> u32 {
        self.inner.signatures().len() as u32
    }

    /// Bytes that are hashed for signing on the given network
    #[wasm_bindgen(js_name = signatureBase)]
    pub fn signature_base(&self, passphrase: &str) -> Vec<u8> {
        self.inner.signature_base(&Network::new(passphrase))
    }

    /// Transaction hash on the given network
    #[wasm_bindgen]
    pub fn hash(&self, passphrase: &str) -> Vec<u8> {
        self.inner.hash(&Network::new(passphrase)).to_vec()
    }

    /// Sign for the given network and append the signature
    #[wasm_bindgen]
    pub fn sign(&mut self, keypair: &WasmKeypair, passphrase: &str) -> Result<(), JsValue> {
        self.inner
            .sign(keypair.inner(), &Network::new(passphrase))
            .map_err(|e| e.into())
    }

    /// Append an externally produced signature
    ///
    /// # Arguments
    /// * `hint` - 4-byte signature hint
    /// * `signature` - Signature bytes (at most 64)
    #[wasm_bindgen(js_name = addSignature)]
    pub fn add_signature(&mut self, hint: &[u8], signature: &[u8]) -> Result<(), JsValue> {
        self.inner
            .add_signature(decorated(hint, signature)?)
            .map_err(|e| e.into())
    }

    /// Attach base64 `SorobanTransactionData` XDR
    #[wasm_bindgen(js_name = setSorobanData)]
    pub fn set_soroban_data(&mut self, data: &str) -> Result<(), JsValue> {
        self.inner
            .set_soroban_transaction_data(SorobanTransactionData::from_xdr_base64(data)?);
        Ok(())
    }

    /// Add a resource fee on top of the current fee
    #[wasm_bindgen(js_name = addResourceFee)]
    pub fn add_resource_fee(&mut self, resource_fee: u32) -> Result<(), JsValue> {
        self.inner
            .add_resource_fee(resource_fee)
            .map_err(|e| e.into())
    }

    /// Replace the authorization entries (base64 XDR each) of the contract call.
    ///
    /// Returns false when the transaction has no invoke-host-function operation.
    #[wasm_bindgen(js_name = setSorobanAuth)]
    pub fn set_soroban_auth(&mut self, entries: Vec<String>) -> Result<bool, JsValue> {
        let auth = entries
            .iter()
            .map(|entry| SorobanAuthorizationEntry::from_xdr_base64(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.inner.set_soroban_auth(auth))
    }

    /// Set the footprint from base64 `LedgerFootprint` XDR.
    ///
    /// Returns false when the transaction has no smart-contract operation.
    #[wasm_bindgen(js_name = setFootprint)]
    pub fn set_footprint(&mut self, footprint: &str) -> Result<bool, JsValue> {
        Ok(self
            .inner
            .set_footprint(LedgerFootprint::from_xdr_base64(footprint)?))
    }

    /// Base64 XDR of the signed envelope
    #[wasm_bindgen(js_name = toEnvelope)]
    pub fn to_envelope(&self) -> String {
        self.inner.encoded_envelope()
    }

    /// Base64 XDR of the bare transaction body
    #[wasm_bindgen(js_name = toTransactionXdr)]
    pub fn to_transaction_xdr(&self) -> String {
        self.inner.encoded_v1_transaction()
    }

    #[wasm_bindgen(js_name = toTxRep)]
    pub fn to_txrep(&self) -> Result<String, JsValue> {
        txrep::envelope_to_txrep(&self.inner.to_envelope()).map_err(|e| e.into())
    }

    /// Wrap this signed transaction in a fee bump
    ///
    /// # Arguments
    /// * `fee_source` - Account paying the fee (`G...` or `M...`)
    /// * `fee` - Total fee in stroops
    #[wasm_bindgen(js_name = feeBump)]
    pub fn fee_bump(&self, fee_source: &str, fee: i64) -> Result<WasmFeeBumpTransaction, JsValue> {
        let fee_source = MuxedAccount::from_address(fee_source)?;
        Ok(WasmFeeBumpTransaction {
            inner: FeeBumpTransaction::build(fee_source, fee, &self.inner)?,
        })
    }
}

// Non-WASM methods for internal use
impl WasmTransaction {
    /// Create from core Transaction (for builder)
    pub fn from_inner(inner: Transaction) -> Self {
        WasmTransaction { inner }
    }

    pub fn inner(&self) -> &Transaction {
        &self.inner
    }
}

/// WASM-exposed fee bump wrapper
#[wasm_bindgen]
pub struct WasmFeeBumpTransaction {
    inner: FeeBumpTransaction,
}

#[wasm_bindgen]
impl WasmFeeBumpTransaction {
    /// Parse a base64 fee bump envelope
    #[wasm_bindgen(js_name = fromEnvelope)]
    pub fn from_envelope(envelope: &str) -> Result<WasmFeeBumpTransaction, JsValue> {
        Ok(WasmFeeBumpTransaction {
            inner: FeeBumpTransaction::from_envelope_xdr(envelope)?,
        })
    }

    #[wasm_bindgen(getter, js_name = feeSource)]
    pub fn fee_source(&self) -> String {
        self.inner.fee_source().address()
    }

    #[wasm_bindgen(getter)]
    pub fn fee(&self) -> js_sys::BigInt {
        js_sys::BigInt::from(self.inner.fee())
    }

    #[wasm_bindgen(getter, js_name = innerTransaction)]
    pub fn inner_transaction(&self) -> WasmTransaction {
        WasmTransaction::from_inner(self.inner.inner_transaction())
    }

    #[wasm_bindgen(getter, js_name = signatureCount)]
    pub fn signature_count(&self) -> u32 {
        self.inner.signatures().len() as u32
    }

    #[wasm_bindgen(js_name = signatureBase)]
    pub fn signature_base(&self, passphrase: &str) -> Vec<u8> {
        self.inner.signature_base(&Network::new(passphrase))
    }

    #[wasm_bindgen]
    pub fn hash(&self, passphrase: &str) -> Vec<u8> {
        self.inner.hash(&Network::new(passphrase)).to_vec()
    }

    #[wasm_bindgen]
    pub fn sign(&mut self, keypair: &WasmKeypair, passphrase: &str) -> Result<(), JsValue> {
        self.inner
            .sign(keypair.inner(), &Network::new(passphrase))
            .map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = addSignature)]
    pub fn add_signature(&mut self, hint: &[u8], signature: &[u8]) -> Result<(), JsValue> {
        self.inner
            .add_signature(decorated(hint, signature)?)
            .map_err(|e| e.into())
    }

    #[wasm_bindgen(js_name = toEnvelope)]
    pub fn to_envelope(&self) -> String {
        self.inner.encoded_envelope()
    }

    #[wasm_bindgen(js_name = toTxRep)]
    pub fn to_txrep(&self) -> Result<String, JsValue> {
        txrep::envelope_to_txrep(&self.inner.to_envelope()).map_err(|e| e.into())
    }
}

fn decorated(hint: &[u8], signature: &[u8]) -> Result<DecoratedSignature, WasmStellarError> {
    let hint: [u8; 4] = hint.try_into().map_err(|_| {
        WasmStellarError::InvalidArgument(format!("Hint must be 4 bytes, got {}", hint.len()))
    })?;
    Ok(DecoratedSignature {
        hint,
        signature: signature.to_vec(),
    })
}
