//! WASM bindings for envelope and XDR helpers

use crate::error::WasmStellarError;
use crate::network::Network;
use crate::strkey::{self, VersionByte};
use crate::transaction::{FeeBumpTransaction, Transaction};
use crate::wasm::keypair::WasmKeypair;
use crate::xdr::account::PublicKey;
use crate::xdr::codec::XdrCodec;
use crate::xdr::scval::ScAddress;
use crate::xdr::soroban::{contract_id, ContractIdPreimage, SorobanAuthorizationEntry};
use crate::xdr::transaction::{EnvelopeType, TransactionEnvelope};
use wasm_bindgen::prelude::*;

/// Namespace for XDR helpers
#[wasm_bindgen]
pub struct XdrNamespace;

#[wasm_bindgen]
impl XdrNamespace {
    /// Envelope type name (`ENVELOPE_TYPE_TX`, ...) of a base64 envelope
    #[wasm_bindgen(js_name = envelopeType)]
    pub fn envelope_type(envelope: &str) -> Result<String, JsValue> {
        let envelope = TransactionEnvelope::from_xdr_base64(envelope)?;
        Ok(envelope.envelope_type().name().to_string())
    }

    /// Hash of any base64 envelope (v0, v1 or fee bump) on the given network
    #[wasm_bindgen(js_name = transactionHash)]
    pub fn transaction_hash(envelope: &str, passphrase: &str) -> Result<Vec<u8>, JsValue> {
        let network = Network::new(passphrase);
        let kind = TransactionEnvelope::from_xdr_base64(envelope)?.envelope_type();
        let hash = match kind {
            EnvelopeType::TxFeeBump => {
                FeeBumpTransaction::from_envelope_xdr(envelope)?.hash(&network)
            }
            _ => Transaction::from_envelope_xdr(envelope)?.hash(&network),
        };
        Ok(hash.to_vec())
    }

    /// 32-byte network id for a passphrase
    #[wasm_bindgen(js_name = networkId)]
    pub fn network_id(passphrase: &str) -> Vec<u8> {
        Network::new(passphrase).id().to_vec()
    }

    #[wasm_bindgen(js_name = isValidAccountId)]
    pub fn is_valid_account_id(account_id: &str) -> bool {
        strkey::is_valid_account_id(account_id)
    }

    /// Sign base64 `SorobanAuthorizationEntry` XDR with address credentials
    ///
    /// # Returns
    /// The signed entry as base64 XDR
    #[wasm_bindgen(js_name = signAuthorizationEntry)]
    pub fn sign_authorization_entry(
        entry: &str,
        keypair: &WasmKeypair,
        passphrase: &str,
        expiration_ledger: u32,
    ) -> Result<String, JsValue> {
        let mut entry = SorobanAuthorizationEntry::from_xdr_base64(entry)?;
        entry.sign(keypair.inner(), &Network::new(passphrase), expiration_ledger)?;
        Ok(entry.to_xdr_base64())
    }

    /// `C...` address of the contract `deployer` creates with `salt`
    #[wasm_bindgen(js_name = contractAddress)]
    pub fn contract_address(
        deployer: &str,
        salt: &[u8],
        passphrase: &str,
    ) -> Result<String, JsValue> {
        let salt: [u8; 32] = salt.try_into().map_err(|_| {
            WasmStellarError::InvalidArgument(format!("Salt must be 32 bytes, got {}", salt.len()))
        })?;
        let preimage = ContractIdPreimage::FromAddress {
            address: ScAddress::Account(PublicKey::from_account_id(deployer)?),
            salt,
        };
        let id = contract_id(&preimage, &Network::new(passphrase));
        Ok(strkey::encode(VersionByte::Contract, &id))
    }
}
