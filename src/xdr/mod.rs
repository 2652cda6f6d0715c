//! Typed XDR model of the ledger protocol
//!
//! Each wire type implements [`XdrCodec`]; unions write a 4-byte signed
//! discriminant followed by the variant payload.

pub mod account;
pub mod asset;
pub mod codec;
pub mod ledger_key;
pub mod operation;
pub mod scval;
pub mod soroban;
pub mod transaction;

pub use account::{
    AccountId, DecoratedSignature, Hash, MuxedAccount, PublicKey, Signer, SignerKey,
};
pub use asset::{
    AlphaNum12, AlphaNum4, Asset, AssetCode, ChangeTrustAsset,
    LiquidityPoolConstantProductParameters, LiquidityPoolParameters, Price, TrustLineAsset,
};
pub use codec::{XdrCodec, XdrReader, XdrWriter};
pub use ledger_key::{ClaimableBalanceId, LedgerKey};
pub use operation::{Operation, OperationBody, OperationType};
pub use scval::{ScAddress, ScMapEntry, ScVal};
pub use soroban::{
    HostFunction, InvokeHostFunctionOp, LedgerFootprint, SorobanAuthorizationEntry,
    SorobanTransactionData,
};
pub use transaction::{
    FeeBumpTransactionEnvelope, Memo, Preconditions, TimeBounds, TransactionEnvelope,
    TransactionV1Envelope,
};
