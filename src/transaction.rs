//! Transaction assembly, hashing and signing
//!
//! [`Transaction`] owns a v1 transaction body plus the signatures collected so
//! far. Signatures are computed over the signature payload
//! (`network_id || ENVELOPE_TYPE_TX || tx`), never over the raw body, which binds
//! each one to a single network and envelope type.

use crate::error::WasmStellarError;
use crate::keypair::Signer;
use crate::network::Network;
use crate::xdr::account::{DecoratedSignature, MuxedAccount};
use crate::xdr::codec::XdrCodec;
use crate::xdr::operation::{Operation, OperationBody};
use crate::xdr::soroban::{ExtensionPoint, LedgerFootprint, SorobanAuthorizationEntry, SorobanTransactionData};
use crate::xdr::transaction::{
    FeeBumpInnerTx, FeeBumpTransaction as FeeBumpTransactionXdr, FeeBumpTransactionEnvelope,
    Memo, Preconditions, TaggedTransaction, Transaction as TransactionXdr, TransactionEnvelope,
    TransactionExt, TransactionSignaturePayload, TransactionV1Envelope, MAX_OPERATIONS,
    MAX_SIGNATURES,
};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Lowest accepted per-operation fee, in stroops
pub const MIN_BASE_FEE: u32 = 100;

/// A v1 transaction and its signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    tx: TransactionXdr,
    signatures: Vec<DecoratedSignature>,
}

impl Transaction {
    /// Build an unsigned transaction; the fee is `max_per_op_fee × operations.len()`
    pub fn build(
        source: MuxedAccount,
        seq_num: i64,
        cond: Preconditions,
        memo: Memo,
        operations: Vec<Operation>,
        max_per_op_fee: u32,
    ) -> Result<Self, WasmStellarError> {
        if operations.is_empty() {
            return Err(WasmStellarError::InvalidArgument(
                "At least one operation is required".to_string(),
            ));
        }
        if operations.len() > MAX_OPERATIONS as usize {
            return Err(WasmStellarError::InvalidArgument(format!(
                "At most {} operations are allowed, got {}",
                MAX_OPERATIONS,
                operations.len()
            )));
        }
        if max_per_op_fee < MIN_BASE_FEE {
            return Err(WasmStellarError::InvalidArgument(format!(
                "Base fee {} is below the minimum {}",
                max_per_op_fee, MIN_BASE_FEE
            )));
        }
        if let Memo::Text(text) = &memo {
            if text.len() > 28 {
                return Err(WasmStellarError::InvalidArgument(format!(
                    "Memo text must be at most 28 bytes, got {}",
                    text.len()
                )));
            }
        }
        let fee = max_per_op_fee
            .checked_mul(operations.len() as u32)
            .ok_or_else(|| WasmStellarError::InvalidArgument("Fee overflows u32".to_string()))?;

        debug!(operations = operations.len(), fee, "built transaction");
        Ok(Transaction {
            tx: TransactionXdr {
                source_account: source,
                fee,
                seq_num,
                cond,
                memo,
                operations,
                ext: TransactionExt::V0,
            },
            signatures: Vec::new(),
        })
    }

    /// Wrap a decoded transaction body without signatures
    pub fn from_xdr(tx: TransactionXdr) -> Self {
        Transaction {
            tx,
            signatures: Vec::new(),
        }
    }

    /// Parse a base64 v0 or v1 envelope; v0 bodies are lifted to v1
    pub fn from_envelope_xdr(envelope: &str) -> Result<Self, WasmStellarError> {
        match TransactionEnvelope::from_xdr_base64(envelope)? {
            TransactionEnvelope::Tx(env) => Ok(Transaction {
                tx: env.tx,
                signatures: env.signatures,
            }),
            TransactionEnvelope::TxV0(env) => Ok(Transaction {
                tx: env.tx.to_v1(),
                signatures: env.signatures,
            }),
            TransactionEnvelope::TxFeeBump(_) => Err(WasmStellarError::InvalidArgument(
                "Envelope is a fee bump; use FeeBumpTransaction".to_string(),
            )),
        }
    }

    pub fn tx(&self) -> &TransactionXdr {
        &self.tx
    }

    pub fn source_account(&self) -> &MuxedAccount {
        &self.tx.source_account
    }

    pub fn fee(&self) -> u32 {
        self.tx.fee
    }

    pub fn seq_num(&self) -> i64 {
        self.tx.seq_num
    }

    pub fn memo(&self) -> &Memo {
        &self.tx.memo
    }

    pub fn preconditions(&self) -> &Preconditions {
        &self.tx.cond
    }

    pub fn operations(&self) -> &[Operation] {
        &self.tx.operations
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }

    /// Bytes that are hashed for signing
    pub fn signature_base(&self, network: &Network) -> Vec<u8> {
        TransactionSignaturePayload {
            network_id: *network.id(),
            tagged_transaction: TaggedTransaction::Tx(self.tx.clone()),
        }
        .to_xdr()
    }

    pub fn hash(&self, network: &Network) -> [u8; 32] {
        Sha256::digest(self.signature_base(network)).into()
    }

    /// Sign for `network` and append the decorated signature
    pub fn sign(&mut self, signer: &dyn Signer, network: &Network) -> Result<(), WasmStellarError> {
        let hash = self.hash(network);
        let signature = signer.sign_decorated(&hash)?;
        debug!(hint = %hex::encode(signature.hint), "signed transaction");
        self.add_signature(signature)
    }

    /// Append an externally produced signature
    pub fn add_signature(&mut self, signature: DecoratedSignature) -> Result<(), WasmStellarError> {
        push_signature(&mut self.signatures, signature)
    }

    pub fn to_envelope(&self) -> TransactionEnvelope {
        TransactionEnvelope::Tx(self.to_v1_envelope())
    }

    pub fn to_v1_envelope(&self) -> TransactionV1Envelope {
        TransactionV1Envelope {
            tx: self.tx.clone(),
            signatures: self.signatures.clone(),
        }
    }

    /// Base64 XDR of the signed envelope
    pub fn encoded_envelope(&self) -> String {
        self.to_envelope().to_xdr_base64()
    }

    /// Base64 XDR of the bare transaction body
    pub fn encoded_v1_transaction(&self) -> String {
        self.tx.to_xdr_base64()
    }

    /// Attach smart-contract resource data (transaction ext v1)
    pub fn set_soroban_transaction_data(&mut self, data: SorobanTransactionData) {
        self.tx.ext = TransactionExt::V1(data);
    }

    /// Add a resource fee on top of the current fee
    pub fn add_resource_fee(&mut self, resource_fee: u32) -> Result<(), WasmStellarError> {
        self.tx.fee = self.tx.fee.checked_add(resource_fee).ok_or_else(|| {
            WasmStellarError::InvalidArgument("Fee overflows u32".to_string())
        })?;
        debug!(resource_fee, fee = self.tx.fee, "added resource fee");
        Ok(())
    }

    /// Replace the authorization entries of the invoke-host-function operation.
    ///
    /// Returns false when the transaction has no such operation.
    pub fn set_soroban_auth(&mut self, auth: Vec<SorobanAuthorizationEntry>) -> bool {
        for op in &mut self.tx.operations {
            if let OperationBody::InvokeHostFunction(invoke) = &mut op.body {
                invoke.auth = auth;
                return true;
            }
        }
        false
    }

    /// Set the footprint of a smart-contract transaction.
    ///
    /// Returns false when the transaction has no smart-contract operation.
    pub fn set_footprint(&mut self, footprint: LedgerFootprint) -> bool {
        let has_soroban_op = self.tx.operations.iter().any(|op| {
            matches!(
                op.body,
                OperationBody::InvokeHostFunction(_)
                    | OperationBody::BumpFootprintExpiration(_)
                    | OperationBody::RestoreFootprint(_)
            )
        });
        if !has_soroban_op {
            return false;
        }
        match &mut self.tx.ext {
            TransactionExt::V1(data) => data.resources.footprint = footprint,
            ext @ TransactionExt::V0 => {
                let mut data = SorobanTransactionData::default();
                data.resources.footprint = footprint;
                *ext = TransactionExt::V1(data);
            }
        }
        true
    }
}

/// A fee bump wrapping a signed v1 transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBumpTransaction {
    tx: FeeBumpTransactionXdr,
    signatures: Vec<DecoratedSignature>,
}

impl FeeBumpTransaction {
    /// Wrap `inner`, paying `fee` stroops in total from `fee_source`.
    ///
    /// `fee` must cover the inner operations plus the fee bump itself at the inner
    /// base fee: `fee >= (inner_ops + 1) × inner_fee / inner_ops`. It may never be
    /// below the inner transaction's own fee.
    pub fn build(
        fee_source: MuxedAccount,
        fee: i64,
        inner: &Transaction,
    ) -> Result<Self, WasmStellarError> {
        let op_count = inner.operations().len() as i64;
        if op_count == 0 {
            return Err(WasmStellarError::InvalidArgument(
                "Inner transaction has no operations".to_string(),
            ));
        }
        let base_fee = inner.fee() as i64 / op_count;
        let min_fee = (op_count + 1) * base_fee;
        if fee < min_fee {
            return Err(WasmStellarError::InvalidArgument(format!(
                "Fee bump fee {} is below the minimum {} ({} operations + 1 at base fee {})",
                fee, min_fee, op_count, base_fee
            )));
        }
        if fee < inner.fee() as i64 {
            return Err(WasmStellarError::InvalidArgument(format!(
                "Fee bump fee {} is below the inner transaction fee {}",
                fee,
                inner.fee()
            )));
        }

        debug!(fee, min_fee, "built fee bump transaction");
        Ok(FeeBumpTransaction {
            tx: FeeBumpTransactionXdr {
                fee_source,
                fee,
                inner_tx: FeeBumpInnerTx::Tx(inner.to_v1_envelope()),
                ext: ExtensionPoint::V0,
            },
            signatures: Vec::new(),
        })
    }

    pub fn from_envelope_xdr(envelope: &str) -> Result<Self, WasmStellarError> {
        match TransactionEnvelope::from_xdr_base64(envelope)? {
            TransactionEnvelope::TxFeeBump(env) => Ok(FeeBumpTransaction {
                tx: env.tx,
                signatures: env.signatures,
            }),
            _ => Err(WasmStellarError::InvalidArgument(
                "Envelope is not a fee bump".to_string(),
            )),
        }
    }

    pub fn tx(&self) -> &FeeBumpTransactionXdr {
        &self.tx
    }

    pub fn fee_source(&self) -> &MuxedAccount {
        &self.tx.fee_source
    }

    pub fn fee(&self) -> i64 {
        self.tx.fee
    }

    pub fn inner_transaction(&self) -> Transaction {
        let FeeBumpInnerTx::Tx(env) = &self.tx.inner_tx;
        Transaction {
            tx: env.tx.clone(),
            signatures: env.signatures.clone(),
        }
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }

    pub fn signature_base(&self, network: &Network) -> Vec<u8> {
        TransactionSignaturePayload {
            network_id: *network.id(),
            tagged_transaction: TaggedTransaction::FeeBump(self.tx.clone()),
        }
        .to_xdr()
    }

    pub fn hash(&self, network: &Network) -> [u8; 32] {
        Sha256::digest(self.signature_base(network)).into()
    }

    pub fn sign(&mut self, signer: &dyn Signer, network: &Network) -> Result<(), WasmStellarError> {
        let hash = self.hash(network);
        let signature = signer.sign_decorated(&hash)?;
        debug!(hint = %hex::encode(signature.hint), "signed fee bump transaction");
        self.add_signature(signature)
    }

    pub fn add_signature(&mut self, signature: DecoratedSignature) -> Result<(), WasmStellarError> {
        push_signature(&mut self.signatures, signature)
    }

    pub fn to_envelope(&self) -> TransactionEnvelope {
        TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
            tx: self.tx.clone(),
            signatures: self.signatures.clone(),
        })
    }

    pub fn encoded_envelope(&self) -> String {
        self.to_envelope().to_xdr_base64()
    }
}

fn push_signature(
    signatures: &mut Vec<DecoratedSignature>,
    signature: DecoratedSignature,
) -> Result<(), WasmStellarError> {
    if signatures.len() >= MAX_SIGNATURES as usize {
        return Err(WasmStellarError::InvalidArgument(format!(
            "At most {} signatures are allowed",
            MAX_SIGNATURES
        )));
    }
    if signature.signature.len() > 64 {
        return Err(WasmStellarError::InvalidArgument(format!(
            "Signature must be at most 64 bytes, got {}",
            signature.signature.len()
        )));
    }
    signatures.push(signature);
    Ok(())
}

/// Incremental builder over [`Transaction::build`]
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    source: MuxedAccount,
    seq_num: i64,
    base_fee: u32,
    memo: Memo,
    cond: Preconditions,
    operations: Vec<Operation>,
    soroban_data: Option<SorobanTransactionData>,
}

impl TransactionBuilder {
    pub fn new(source: MuxedAccount, seq_num: i64) -> Self {
        TransactionBuilder {
            source,
            seq_num,
            base_fee: MIN_BASE_FEE,
            memo: Memo::None,
            cond: Preconditions::None,
            operations: Vec::new(),
            soroban_data: None,
        }
    }

    pub fn base_fee(mut self, base_fee: u32) -> Self {
        self.base_fee = base_fee;
        self
    }

    pub fn memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    pub fn preconditions(mut self, cond: Preconditions) -> Self {
        self.cond = cond;
        self
    }

    pub fn operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn soroban_data(mut self, data: SorobanTransactionData) -> Self {
        self.soroban_data = Some(data);
        self
    }

    pub fn build(self) -> Result<Transaction, WasmStellarError> {
        let mut tx = Transaction::build(
            self.source,
            self.seq_num,
            self.cond,
            self.memo,
            self.operations,
            self.base_fee,
        )?;
        if let Some(data) = self.soroban_data {
            tx.set_soroban_transaction_data(data);
        }
        Ok(tx)
    }
}
