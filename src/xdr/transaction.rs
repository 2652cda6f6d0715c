//! Transactions, envelopes and signature payloads

use crate::error::DecodeError;
use crate::xdr::account::{DecoratedSignature, Hash, MuxedAccount, SignerKey};
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter};
use crate::xdr::operation::Operation;
use crate::xdr::soroban::{ExtensionPoint, SorobanTransactionData};

pub const MAX_OPERATIONS: u32 = 100;
pub const MAX_SIGNATURES: u32 = 20;
pub const MEMO_TEXT_LIMIT: u32 = 28;
pub const MAX_EXTRA_SIGNERS: u32 = 2;

xdr_enum! {
    pub enum EnvelopeType {
        TxV0 = 0 => "ENVELOPE_TYPE_TX_V0",
        Scp = 1 => "ENVELOPE_TYPE_SCP",
        Tx = 2 => "ENVELOPE_TYPE_TX",
        Auth = 3 => "ENVELOPE_TYPE_AUTH",
        ScpValue = 4 => "ENVELOPE_TYPE_SCPVALUE",
        TxFeeBump = 5 => "ENVELOPE_TYPE_TX_FEE_BUMP",
        OpId = 6 => "ENVELOPE_TYPE_OP_ID",
        PoolRevokeOpId = 7 => "ENVELOPE_TYPE_POOL_REVOKE_OP_ID",
        ContractId = 8 => "ENVELOPE_TYPE_CONTRACT_ID",
        SorobanAuthorization = 9 => "ENVELOPE_TYPE_SOROBAN_AUTHORIZATION",
    }
}

xdr_enum! {
    pub enum MemoType {
        None = 0 => "MEMO_NONE",
        Text = 1 => "MEMO_TEXT",
        Id = 2 => "MEMO_ID",
        Hash = 3 => "MEMO_HASH",
        Return = 4 => "MEMO_RETURN",
    }
}

xdr_enum! {
    pub enum PreconditionType {
        None = 0 => "PRECOND_NONE",
        Time = 1 => "PRECOND_TIME",
        V2 = 2 => "PRECOND_V2",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Memo {
    #[default]
    None,
    Text(String),
    Id(u64),
    Hash(Hash),
    Return(Hash),
}

impl Memo {
    pub fn memo_type(&self) -> MemoType {
        match self {
            Memo::None => MemoType::None,
            Memo::Text(_) => MemoType::Text,
            Memo::Id(_) => MemoType::Id,
            Memo::Hash(_) => MemoType::Hash,
            Memo::Return(_) => MemoType::Return,
        }
    }
}

impl XdrCodec for Memo {
    fn encode(&self, w: &mut XdrWriter) {
        self.memo_type().encode(w);
        match self {
            Memo::None => {}
            Memo::Text(text) => w.write_string(text),
            Memo::Id(id) => w.write_u64(*id),
            Memo::Hash(hash) | Memo::Return(hash) => w.write_fixed(hash),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match MemoType::decode(r)? {
            MemoType::None => Memo::None,
            MemoType::Text => Memo::Text(r.read_string(MEMO_TEXT_LIMIT)?),
            MemoType::Id => Memo::Id(r.read_u64()?),
            MemoType::Hash => Memo::Hash(r.read_fixed()?),
            MemoType::Return => Memo::Return(r.read_fixed()?),
        })
    }
}

/// Unix-second window; `max_time` 0 means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBounds {
    pub min_time: u64,
    pub max_time: u64,
}

impl XdrCodec for TimeBounds {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u64(self.min_time);
        w.write_u64(self.max_time);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(TimeBounds {
            min_time: r.read_u64()?,
            max_time: r.read_u64()?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerBounds {
    pub min_ledger: u32,
    pub max_ledger: u32,
}

impl XdrCodec for LedgerBounds {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u32(self.min_ledger);
        w.write_u32(self.max_ledger);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(LedgerBounds {
            min_ledger: r.read_u32()?,
            max_ledger: r.read_u32()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreconditionsV2 {
    pub time_bounds: Option<TimeBounds>,
    pub ledger_bounds: Option<LedgerBounds>,
    pub min_seq_num: Option<i64>,
    pub min_seq_age: u64,
    pub min_seq_ledger_gap: u32,
    pub extra_signers: Vec<SignerKey>,
}

impl XdrCodec for PreconditionsV2 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_optional(&self.time_bounds);
        w.write_optional(&self.ledger_bounds);
        w.write_optional(&self.min_seq_num);
        w.write_u64(self.min_seq_age);
        w.write_u32(self.min_seq_ledger_gap);
        w.write_array(&self.extra_signers);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(PreconditionsV2 {
            time_bounds: r.read_optional()?,
            ledger_bounds: r.read_optional()?,
            min_seq_num: r.read_optional()?,
            min_seq_age: r.read_u64()?,
            min_seq_ledger_gap: r.read_u32()?,
            extra_signers: r.read_array(MAX_EXTRA_SIGNERS)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preconditions {
    #[default]
    None,
    Time(TimeBounds),
    V2(PreconditionsV2),
}

impl Preconditions {
    pub fn precondition_type(&self) -> PreconditionType {
        match self {
            Preconditions::None => PreconditionType::None,
            Preconditions::Time(_) => PreconditionType::Time,
            Preconditions::V2(_) => PreconditionType::V2,
        }
    }

    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        match self {
            Preconditions::None => None,
            Preconditions::Time(bounds) => Some(bounds),
            Preconditions::V2(v2) => v2.time_bounds.as_ref(),
        }
    }
}

impl XdrCodec for Preconditions {
    fn encode(&self, w: &mut XdrWriter) {
        self.precondition_type().encode(w);
        match self {
            Preconditions::None => {}
            Preconditions::Time(bounds) => bounds.encode(w),
            Preconditions::V2(v2) => v2.encode(w),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match PreconditionType::decode(r)? {
            PreconditionType::None => Preconditions::None,
            PreconditionType::Time => Preconditions::Time(TimeBounds::decode(r)?),
            PreconditionType::V2 => Preconditions::V2(PreconditionsV2::decode(r)?),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TransactionExt {
    #[default]
    V0,
    V1(SorobanTransactionData),
}

impl XdrCodec for TransactionExt {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            TransactionExt::V0 => w.write_i32(0),
            TransactionExt::V1(data) => {
                w.write_i32(1);
                data.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match r.read_i32()? {
            0 => Ok(TransactionExt::V0),
            1 => Ok(TransactionExt::V1(SorobanTransactionData::decode(r)?)),
            value => Err(DecodeError::UnknownDiscriminant {
                type_name: "TransactionExt",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub source_account: MuxedAccount,
    pub fee: u32,
    pub seq_num: i64,
    pub cond: Preconditions,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: TransactionExt,
}

impl XdrCodec for Transaction {
    fn encode(&self, w: &mut XdrWriter) {
        self.source_account.encode(w);
        w.write_u32(self.fee);
        w.write_i64(self.seq_num);
        self.cond.encode(w);
        self.memo.encode(w);
        w.write_array(&self.operations);
        self.ext.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Transaction {
            source_account: MuxedAccount::decode(r)?,
            fee: r.read_u32()?,
            seq_num: r.read_i64()?,
            cond: Preconditions::decode(r)?,
            memo: Memo::decode(r)?,
            operations: r.read_array(MAX_OPERATIONS)?,
            ext: TransactionExt::decode(r)?,
        })
    }
}

/// Pre-protocol-13 transaction with a bare ed25519 source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionV0 {
    pub source_account_ed25519: [u8; 32],
    pub fee: u32,
    pub seq_num: i64,
    pub time_bounds: Option<TimeBounds>,
    pub memo: Memo,
    pub operations: Vec<Operation>,
    pub ext: ExtensionPoint,
}

impl TransactionV0 {
    /// Equivalent v1 transaction; signatures over either form verify the same
    pub fn to_v1(&self) -> Transaction {
        Transaction {
            source_account: MuxedAccount::Ed25519(self.source_account_ed25519),
            fee: self.fee,
            seq_num: self.seq_num,
            cond: match self.time_bounds {
                Some(bounds) => Preconditions::Time(bounds),
                None => Preconditions::None,
            },
            memo: self.memo.clone(),
            operations: self.operations.clone(),
            ext: TransactionExt::V0,
        }
    }
}

impl XdrCodec for TransactionV0 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(&self.source_account_ed25519);
        w.write_u32(self.fee);
        w.write_i64(self.seq_num);
        w.write_optional(&self.time_bounds);
        self.memo.encode(w);
        w.write_array(&self.operations);
        self.ext.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(TransactionV0 {
            source_account_ed25519: r.read_fixed()?,
            fee: r.read_u32()?,
            seq_num: r.read_i64()?,
            time_bounds: r.read_optional()?,
            memo: Memo::decode(r)?,
            operations: r.read_array(MAX_OPERATIONS)?,
            ext: ExtensionPoint::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionV0Envelope {
    pub tx: TransactionV0,
    pub signatures: Vec<DecoratedSignature>,
}

impl XdrCodec for TransactionV0Envelope {
    fn encode(&self, w: &mut XdrWriter) {
        self.tx.encode(w);
        w.write_array(&self.signatures);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(TransactionV0Envelope {
            tx: TransactionV0::decode(r)?,
            signatures: r.read_array(MAX_SIGNATURES)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionV1Envelope {
    pub tx: Transaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl XdrCodec for TransactionV1Envelope {
    fn encode(&self, w: &mut XdrWriter) {
        self.tx.encode(w);
        w.write_array(&self.signatures);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(TransactionV1Envelope {
            tx: Transaction::decode(r)?,
            signatures: r.read_array(MAX_SIGNATURES)?,
        })
    }
}

/// Inner transaction of a fee bump; only v1 envelopes can be wrapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeBumpInnerTx {
    Tx(TransactionV1Envelope),
}

impl XdrCodec for FeeBumpInnerTx {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            FeeBumpInnerTx::Tx(envelope) => {
                EnvelopeType::Tx.encode(w);
                envelope.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match EnvelopeType::decode(r)? {
            EnvelopeType::Tx => Ok(FeeBumpInnerTx::Tx(TransactionV1Envelope::decode(r)?)),
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "FeeBumpInnerTx",
                value: other.discriminant(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBumpTransaction {
    pub fee_source: MuxedAccount,
    pub fee: i64,
    pub inner_tx: FeeBumpInnerTx,
    pub ext: ExtensionPoint,
}

impl XdrCodec for FeeBumpTransaction {
    fn encode(&self, w: &mut XdrWriter) {
        self.fee_source.encode(w);
        w.write_i64(self.fee);
        self.inner_tx.encode(w);
        self.ext.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(FeeBumpTransaction {
            fee_source: MuxedAccount::decode(r)?,
            fee: r.read_i64()?,
            inner_tx: FeeBumpInnerTx::decode(r)?,
            ext: ExtensionPoint::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBumpTransactionEnvelope {
    pub tx: FeeBumpTransaction,
    pub signatures: Vec<DecoratedSignature>,
}

impl XdrCodec for FeeBumpTransactionEnvelope {
    fn encode(&self, w: &mut XdrWriter) {
        self.tx.encode(w);
        w.write_array(&self.signatures);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(FeeBumpTransactionEnvelope {
            tx: FeeBumpTransaction::decode(r)?,
            signatures: r.read_array(MAX_SIGNATURES)?,
        })
    }
}

/// Submittable unit: a transaction plus its signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionEnvelope {
    TxV0(TransactionV0Envelope),
    Tx(TransactionV1Envelope),
    TxFeeBump(FeeBumpTransactionEnvelope),
}

impl TransactionEnvelope {
    pub fn envelope_type(&self) -> EnvelopeType {
        match self {
            TransactionEnvelope::TxV0(_) => EnvelopeType::TxV0,
            TransactionEnvelope::Tx(_) => EnvelopeType::Tx,
            TransactionEnvelope::TxFeeBump(_) => EnvelopeType::TxFeeBump,
        }
    }

    pub fn signatures(&self) -> &[DecoratedSignature] {
        match self {
            TransactionEnvelope::TxV0(env) => &env.signatures,
            TransactionEnvelope::Tx(env) => &env.signatures,
            TransactionEnvelope::TxFeeBump(env) => &env.signatures,
        }
    }
}

impl XdrCodec for TransactionEnvelope {
    fn encode(&self, w: &mut XdrWriter) {
        self.envelope_type().encode(w);
        match self {
            TransactionEnvelope::TxV0(env) => env.encode(w),
            TransactionEnvelope::Tx(env) => env.encode(w),
            TransactionEnvelope::TxFeeBump(env) => env.encode(w),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match EnvelopeType::decode(r)? {
            EnvelopeType::TxV0 => Ok(TransactionEnvelope::TxV0(TransactionV0Envelope::decode(r)?)),
            EnvelopeType::Tx => Ok(TransactionEnvelope::Tx(TransactionV1Envelope::decode(r)?)),
            EnvelopeType::TxFeeBump => Ok(TransactionEnvelope::TxFeeBump(
                FeeBumpTransactionEnvelope::decode(r)?,
            )),
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "TransactionEnvelope",
                value: other.discriminant(),
            }),
        }
    }
}

/// Transaction tagged with its envelope type inside the signature payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedTransaction {
    Tx(Transaction),
    FeeBump(FeeBumpTransaction),
}

impl XdrCodec for TaggedTransaction {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            TaggedTransaction::Tx(tx) => {
                EnvelopeType::Tx.encode(w);
                tx.encode(w);
            }
            TaggedTransaction::FeeBump(tx) => {
                EnvelopeType::TxFeeBump.encode(w);
                tx.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match EnvelopeType::decode(r)? {
            EnvelopeType::Tx => Ok(TaggedTransaction::Tx(Transaction::decode(r)?)),
            EnvelopeType::TxFeeBump => {
                Ok(TaggedTransaction::FeeBump(FeeBumpTransaction::decode(r)?))
            }
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "TaggedTransaction",
                value: other.discriminant(),
            }),
        }
    }
}

/// What gets hashed and signed: network id followed by the tagged transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSignaturePayload {
    pub network_id: Hash,
    pub tagged_transaction: TaggedTransaction,
}

impl XdrCodec for TransactionSignaturePayload {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(&self.network_id);
        self.tagged_transaction.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(TransactionSignaturePayload {
            network_id: r.read_fixed()?,
            tagged_transaction: TaggedTransaction::decode(r)?,
        })
    }
}
