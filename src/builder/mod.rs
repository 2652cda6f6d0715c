//! Transaction building from intents
//!
//! Build transactions from high-level intent descriptions

pub mod types;

use crate::error::WasmStellarError;
use crate::strkey::{self, VersionByte};
use crate::transaction::{Transaction, TransactionBuilder};
use crate::xdr::account::{MuxedAccount, PublicKey};
use crate::xdr::asset::{Asset, ChangeTrustAsset};
use crate::xdr::codec::XdrCodec;
use crate::xdr::operation::{
    BumpSequenceOp, ChangeTrustOp, CreateAccountOp, ManageDataOp, Operation, OperationBody,
    PaymentOp,
};
use crate::xdr::scval::{ScAddress, ScVal};
use crate::xdr::soroban::{HostFunction, InvokeHostFunctionOp};
use crate::xdr::transaction::{Memo, Preconditions, TimeBounds};
use types::{BuildContext, MemoSpec, TransactionIntent};

/// Stroops per unit of any asset
const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Build a transaction from an intent
///
/// # Arguments
/// * `intent` - High-level description of the transaction
/// * `context` - Source, sequence number, fee and optional memo / time bounds
pub fn build_transaction(
    intent: TransactionIntent,
    context: BuildContext,
) -> Result<Transaction, WasmStellarError> {
    let source = MuxedAccount::from_address(&context.source)?;

    let mut operations = Vec::new();
    collect_operations(&intent, &mut operations)?;

    let mut builder =
        TransactionBuilder::new(source, context.sequence_number).base_fee(context.base_fee);
    if let Some(memo) = &context.memo {
        builder = builder.memo(build_memo(memo)?);
    }
    if let Some(bounds) = context.time_bounds {
        builder = builder.preconditions(Preconditions::Time(TimeBounds {
            min_time: bounds.min_time,
            max_time: bounds.max_time,
        }));
    }
    for operation in operations {
        builder = builder.operation(operation);
    }
    builder.build()
}

/// Flatten an intent (and any batch members) into operations
fn collect_operations(
    intent: &TransactionIntent,
    operations: &mut Vec<Operation>,
) -> Result<(), WasmStellarError> {
    let body = match intent {
        TransactionIntent::Batch { operations: intents } => {
            for intent in intents {
                collect_operations(intent, operations)?;
            }
            return Ok(());
        }
        TransactionIntent::Payment {
            destination,
            asset,
            amount,
        } => OperationBody::Payment(PaymentOp {
            destination: MuxedAccount::from_address(destination)?,
            asset: Asset::from_canonical(asset)?,
            amount: parse_positive_amount(amount)?,
        }),
        TransactionIntent::CreateAccount {
            destination,
            starting_balance,
        } => OperationBody::CreateAccount(CreateAccountOp {
            destination: PublicKey::from_account_id(destination)?,
            starting_balance: parse_positive_amount(starting_balance)?,
        }),
        TransactionIntent::ChangeTrust { asset, limit } => {
            let asset = Asset::from_canonical(asset)?;
            if asset == Asset::Native {
                return Err(WasmStellarError::InvalidArgument(
                    "Cannot change trust in the native asset".to_string(),
                ));
            }
            OperationBody::ChangeTrust(ChangeTrustOp {
                line: ChangeTrustAsset::from(asset),
                limit: match limit {
                    Some(limit) => parse_amount(limit)?,
                    None => i64::MAX,
                },
            })
        }
        TransactionIntent::ManageData { name, value } => {
            if name.is_empty() || name.len() > 64 {
                return Err(WasmStellarError::InvalidArgument(format!(
                    "Data name must be 1 to 64 bytes, got {}",
                    name.len()
                )));
            }
            let value = value.as_deref().map(decode_hex).transpose()?;
            if let Some(value) = &value {
                if value.len() > 64 {
                    return Err(WasmStellarError::InvalidArgument(format!(
                        "Data value must be at most 64 bytes, got {}",
                        value.len()
                    )));
                }
            }
            OperationBody::ManageData(ManageDataOp {
                data_name: name.clone(),
                data_value: value,
            })
        }
        TransactionIntent::AccountMerge { destination } => {
            OperationBody::AccountMerge(MuxedAccount::from_address(destination)?)
        }
        TransactionIntent::BumpSequence { bump_to } => {
            OperationBody::BumpSequence(BumpSequenceOp { bump_to: *bump_to })
        }
        TransactionIntent::InvokeContract {
            contract,
            function,
            args,
        } => {
            let contract = ScAddress::Contract(strkey::decode_32(VersionByte::Contract, contract)?);
            let args = args
                .iter()
                .map(|arg| ScVal::from_xdr_base64(arg))
                .collect::<Result<Vec<_>, _>>()?;
            OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::invoke_contract(contract, function, args),
                auth: Vec::new(),
            })
        }
    };
    operations.push(Operation {
        source_account: None,
        body,
    });
    Ok(())
}

fn build_memo(memo: &MemoSpec) -> Result<Memo, WasmStellarError> {
    Ok(match memo {
        MemoSpec::Text(text) => Memo::Text(text.clone()),
        MemoSpec::Id(id) => Memo::Id(*id),
        MemoSpec::Hash(hash) => Memo::Hash(decode_hash(hash)?),
        MemoSpec::Return(hash) => Memo::Return(decode_hash(hash)?),
    })
}

fn decode_hex(value: &str) -> Result<Vec<u8>, WasmStellarError> {
    hex::decode(value)
        .map_err(|e| WasmStellarError::InvalidArgument(format!("Invalid hex '{}': {}", value, e)))
}

fn decode_hash(value: &str) -> Result<[u8; 32], WasmStellarError> {
    let bytes = decode_hex(value)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        WasmStellarError::InvalidArgument(format!("Hash must be 32 bytes, got {}", bytes.len()))
    })
}

/// Decimal asset units to stroops: `"12.5"` -> `125000000`
pub fn parse_amount(amount: &str) -> Result<i64, WasmStellarError> {
    let invalid = || WasmStellarError::InvalidArgument(format!("Invalid amount '{}'", amount));

    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > 7 {
        return Err(WasmStellarError::InvalidArgument(format!(
            "Amount '{}' has more than 7 decimal places",
            amount
        )));
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        format!("{:0<7}", frac).parse().map_err(|_| invalid())?
    };
    whole
        .checked_mul(STROOPS_PER_UNIT)
        .and_then(|stroops| stroops.checked_add(frac))
        .ok_or_else(invalid)
}

fn parse_positive_amount(amount: &str) -> Result<i64, WasmStellarError> {
    match parse_amount(amount)? {
        0 => Err(WasmStellarError::InvalidArgument(format!(
            "Amount must be positive, got '{}'",
            amount
        ))),
        stroops => Ok(stroops),
    }
}
