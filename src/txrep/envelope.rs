//! TxRep forms of transactions and envelopes

use crate::error::WasmStellarError;
use crate::strkey::{self, VersionByte};
use crate::xdr::account::{DecoratedSignature, MuxedAccount, SignerKey};
use crate::xdr::operation::Operation;
use crate::xdr::soroban::{ExtensionPoint, SorobanTransactionData};
use crate::xdr::transaction::{
    EnvelopeType, FeeBumpInnerTx, FeeBumpTransaction, FeeBumpTransactionEnvelope, LedgerBounds,
    Memo, MemoType, PreconditionType, Preconditions, PreconditionsV2, TimeBounds, Transaction,
    TransactionEnvelope, TransactionExt, TransactionV0, TransactionV0Envelope,
    TransactionV1Envelope, MAX_EXTRA_SIGNERS, MAX_OPERATIONS, MAX_SIGNATURES,
};

use super::reader::TxRepReader;
use super::writer::{child, TxRepWriter};
use super::{read_array, read_optional, write_array, write_optional, TxRepCodec};

impl TxRepCodec for TimeBounds {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.time(&child(path, "minTime"), self.min_time);
        w.time(&child(path, "maxTime"), self.max_time);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(TimeBounds {
            min_time: r.number(&child(path, "minTime"))?,
            max_time: r.number(&child(path, "maxTime"))?,
        })
    }
}

impl TxRepCodec for LedgerBounds {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "minLedger"), self.min_ledger);
        w.line(&child(path, "maxLedger"), self.max_ledger);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(LedgerBounds {
            min_ledger: r.number(&child(path, "minLedger"))?,
            max_ledger: r.number(&child(path, "maxLedger"))?,
        })
    }
}

impl TxRepCodec for Preconditions {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.precondition_type().name());
        match self {
            Preconditions::None => {}
            Preconditions::Time(bounds) => bounds.write_txrep(w, &child(path, "timeBounds")),
            Preconditions::V2(v2) => {
                let p = child(path, "v2");
                write_optional(w, &child(&p, "timeBounds"), &v2.time_bounds);
                write_optional(w, &child(&p, "ledgerBounds"), &v2.ledger_bounds);
                let min_seq = child(&p, "minSeqNum");
                w.present(&min_seq, v2.min_seq_num.is_some());
                if let Some(seq) = v2.min_seq_num {
                    w.line(&min_seq, seq);
                }
                w.line(&child(&p, "minSeqAge"), v2.min_seq_age);
                w.line(&child(&p, "minSeqLedgerGap"), v2.min_seq_ledger_gap);
                write_array(w, &child(&p, "extraSigners"), &v2.extra_signers);
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), PreconditionType::from_name)? {
            PreconditionType::None => Preconditions::None,
            PreconditionType::Time => {
                Preconditions::Time(TimeBounds::read_txrep(r, &child(path, "timeBounds"))?)
            }
            PreconditionType::V2 => {
                let p = child(path, "v2");
                let time_bounds = read_optional(r, &child(&p, "timeBounds"))?;
                let ledger_bounds = read_optional(r, &child(&p, "ledgerBounds"))?;
                let min_seq = child(&p, "minSeqNum");
                let min_seq_num = if r.present(&min_seq)? {
                    Some(r.number(&min_seq)?)
                } else {
                    None
                };
                Preconditions::V2(PreconditionsV2 {
                    time_bounds,
                    ledger_bounds,
                    min_seq_num,
                    min_seq_age: r.number(&child(&p, "minSeqAge"))?,
                    min_seq_ledger_gap: r.number(&child(&p, "minSeqLedgerGap"))?,
                    extra_signers: read_array::<SignerKey>(
                        r,
                        &child(&p, "extraSigners"),
                        MAX_EXTRA_SIGNERS,
                    )?,
                })
            }
        })
    }
}

impl TxRepCodec for Memo {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.memo_type().name());
        match self {
            Memo::None => {}
            Memo::Text(text) => w.string(&child(path, "text"), text),
            Memo::Id(id) => w.line(&child(path, "id"), id),
            Memo::Hash(hash) => w.hex(&child(path, "hash"), hash),
            Memo::Return(hash) => w.hex(&child(path, "retHash"), hash),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), MemoType::from_name)? {
            MemoType::None => Memo::None,
            MemoType::Text => Memo::Text(r.string(&child(path, "text"))?),
            MemoType::Id => Memo::Id(r.number(&child(path, "id"))?),
            MemoType::Hash => Memo::Hash(r.hex_fixed(&child(path, "hash"))?),
            MemoType::Return => Memo::Return(r.hex_fixed(&child(path, "retHash"))?),
        })
    }
}

/// Fields shared by the v0 and v1 layouts after the source account
fn write_memo_and_operations(
    w: &mut TxRepWriter,
    path: &str,
    memo: &Memo,
    operations: &[Operation],
) {
    memo.write_txrep(w, &child(path, "memo"));
    write_array(w, &child(path, "operations"), operations);
}

impl TxRepCodec for Transaction {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.source_account.write_txrep(w, &child(path, "sourceAccount"));
        w.line(&child(path, "fee"), self.fee);
        w.line(&child(path, "seqNum"), self.seq_num);
        self.cond.write_txrep(w, &child(path, "cond"));
        write_memo_and_operations(w, path, &self.memo, &self.operations);
        match &self.ext {
            TransactionExt::V0 => w.line(&child(path, "ext.v"), 0),
            TransactionExt::V1(data) => {
                w.line(&child(path, "ext.v"), 1);
                data.write_txrep(w, &child(path, "sorobanData"));
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let source_account = MuxedAccount::read_txrep(r, &child(path, "sourceAccount"))?;
        let fee = r.number(&child(path, "fee"))?;
        let seq_num = r.number(&child(path, "seqNum"))?;
        let cond = Preconditions::read_txrep(r, &child(path, "cond"))?;
        let memo = Memo::read_txrep(r, &child(path, "memo"))?;
        let operations = read_array(r, &child(path, "operations"), MAX_OPERATIONS)?;
        let ext_path = child(path, "ext.v");
        let ext = match r.number::<i32>(&ext_path)? {
            0 => TransactionExt::V0,
            1 => TransactionExt::V1(SorobanTransactionData::read_txrep(
                r,
                &child(path, "sorobanData"),
            )?),
            v => {
                return Err(WasmStellarError::txrep(
                    &ext_path,
                    format!("unsupported extension version {}", v),
                ))
            }
        };
        Ok(Transaction {
            source_account,
            fee,
            seq_num,
            cond,
            memo,
            operations,
            ext,
        })
    }
}

/// Pre-protocol-13 layout: bare ed25519 source and optional time bounds
impl TxRepCodec for TransactionV0 {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(
            &child(path, "sourceAccountEd25519"),
            strkey::encode(VersionByte::AccountId, &self.source_account_ed25519),
        );
        w.line(&child(path, "fee"), self.fee);
        w.line(&child(path, "seqNum"), self.seq_num);
        write_optional(w, &child(path, "timeBounds"), &self.time_bounds);
        write_memo_and_operations(w, path, &self.memo, &self.operations);
        self.ext.write_txrep(w, &child(path, "ext"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(TransactionV0 {
            source_account_ed25519: r.parsed(&child(path, "sourceAccountEd25519"), |value| {
                strkey::decode_32(VersionByte::AccountId, value)
            })?,
            fee: r.number(&child(path, "fee"))?,
            seq_num: r.number(&child(path, "seqNum"))?,
            time_bounds: read_optional(r, &child(path, "timeBounds"))?,
            memo: Memo::read_txrep(r, &child(path, "memo"))?,
            operations: read_array(r, &child(path, "operations"), MAX_OPERATIONS)?,
            ext: ExtensionPoint::read_txrep(r, &child(path, "ext"))?,
        })
    }
}

fn read_signatures(
    r: &mut TxRepReader,
    path: &str,
) -> Result<Vec<DecoratedSignature>, WasmStellarError> {
    read_array(r, &child(path, "signatures"), MAX_SIGNATURES)
}

impl TxRepCodec for TransactionV1Envelope {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.tx.write_txrep(w, &child(path, "tx"));
        write_array(w, &child(path, "signatures"), &self.signatures);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(TransactionV1Envelope {
            tx: Transaction::read_txrep(r, &child(path, "tx"))?,
            signatures: read_signatures(r, path)?,
        })
    }
}

impl TxRepCodec for TransactionV0Envelope {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.tx.write_txrep(w, &child(path, "tx"));
        write_array(w, &child(path, "signatures"), &self.signatures);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(TransactionV0Envelope {
            tx: TransactionV0::read_txrep(r, &child(path, "tx"))?,
            signatures: read_signatures(r, path)?,
        })
    }
}

impl TxRepCodec for FeeBumpTransaction {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.fee_source.write_txrep(w, &child(path, "feeSource"));
        w.line(&child(path, "fee"), self.fee);
        let inner = child(path, "innerTx");
        match &self.inner_tx {
            FeeBumpInnerTx::Tx(envelope) => {
                w.line(&child(&inner, "type"), EnvelopeType::Tx.name());
                envelope.write_txrep(w, &inner);
            }
        }
        self.ext.write_txrep(w, &child(path, "ext"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let fee_source = MuxedAccount::read_txrep(r, &child(path, "feeSource"))?;
        let fee = r.number(&child(path, "fee"))?;
        let inner = child(path, "innerTx");
        let inner_type_path = child(&inner, "type");
        let inner_tx = match r.named(&inner_type_path, EnvelopeType::from_name)? {
            EnvelopeType::Tx => FeeBumpInnerTx::Tx(TransactionV1Envelope::read_txrep(r, &inner)?),
            other => {
                return Err(WasmStellarError::txrep(
                    &inner_type_path,
                    format!("{} cannot be fee bumped", other.name()),
                ))
            }
        };
        Ok(FeeBumpTransaction {
            fee_source,
            fee,
            inner_tx,
            ext: ExtensionPoint::read_txrep(r, &child(path, "ext"))?,
        })
    }
}

impl TxRepCodec for FeeBumpTransactionEnvelope {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.tx.write_txrep(w, &child(path, "tx"));
        write_array(w, &child(path, "signatures"), &self.signatures);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(FeeBumpTransactionEnvelope {
            tx: FeeBumpTransaction::read_txrep(r, &child(path, "tx"))?,
            signatures: read_signatures(r, path)?,
        })
    }
}

/// Root of a document: `type`, then `tx.*` / `signatures.*` or `feeBump.*`
impl TxRepCodec for TransactionEnvelope {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.envelope_type().name());
        match self {
            TransactionEnvelope::TxV0(env) => env.write_txrep(w, path),
            TransactionEnvelope::Tx(env) => env.write_txrep(w, path),
            TransactionEnvelope::TxFeeBump(env) => env.write_txrep(w, &child(path, "feeBump")),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let type_path = child(path, "type");
        Ok(match r.named(&type_path, EnvelopeType::from_name)? {
            EnvelopeType::TxV0 => {
                TransactionEnvelope::TxV0(TransactionV0Envelope::read_txrep(r, path)?)
            }
            EnvelopeType::Tx => TransactionEnvelope::Tx(TransactionV1Envelope::read_txrep(r, path)?),
            EnvelopeType::TxFeeBump => TransactionEnvelope::TxFeeBump(
                FeeBumpTransactionEnvelope::read_txrep(r, &child(path, "feeBump"))?,
            ),
            other => {
                return Err(WasmStellarError::txrep(
                    &type_path,
                    format!("{} is not a transaction envelope", other.name()),
                ))
            }
        })
    }
}
