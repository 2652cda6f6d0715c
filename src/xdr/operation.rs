//! Operations
//!
//! Every operation body is a variant of [`OperationBody`], keyed by
//! [`OperationType`]. The union is closed: an operation type this crate does not
//! know cannot be skipped safely, so decoding it fails.

use crate::error::DecodeError;
use crate::xdr::account::{AccountId, Hash, MuxedAccount, PublicKey, Signer, SignerKey};
use crate::xdr::asset::{Asset, AssetCode, ChangeTrustAsset, Price};
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter};
use crate::xdr::ledger_key::{ClaimableBalanceId, LedgerKey, DATA_NAME_LIMIT};
use crate::xdr::soroban::{BumpFootprintExpirationOp, InvokeHostFunctionOp, RestoreFootprintOp};

pub const MAX_PATH_LENGTH: u32 = 5;
pub const MAX_CLAIMANTS: u32 = 10;
pub const HOME_DOMAIN_LIMIT: u32 = 32;
pub const DATA_VALUE_LIMIT: u32 = 64;

xdr_enum! {
    pub enum OperationType {
        CreateAccount = 0 => "CREATE_ACCOUNT",
        Payment = 1 => "PAYMENT",
        PathPaymentStrictReceive = 2 => "PATH_PAYMENT_STRICT_RECEIVE",
        ManageSellOffer = 3 => "MANAGE_SELL_OFFER",
        CreatePassiveSellOffer = 4 => "CREATE_PASSIVE_SELL_OFFER",
        SetOptions = 5 => "SET_OPTIONS",
        ChangeTrust = 6 => "CHANGE_TRUST",
        AllowTrust = 7 => "ALLOW_TRUST",
        AccountMerge = 8 => "ACCOUNT_MERGE",
        Inflation = 9 => "INFLATION",
        ManageData = 10 => "MANAGE_DATA",
        BumpSequence = 11 => "BUMP_SEQUENCE",
        ManageBuyOffer = 12 => "MANAGE_BUY_OFFER",
        PathPaymentStrictSend = 13 => "PATH_PAYMENT_STRICT_SEND",
        CreateClaimableBalance = 14 => "CREATE_CLAIMABLE_BALANCE",
        ClaimClaimableBalance = 15 => "CLAIM_CLAIMABLE_BALANCE",
        BeginSponsoringFutureReserves = 16 => "BEGIN_SPONSORING_FUTURE_RESERVES",
        EndSponsoringFutureReserves = 17 => "END_SPONSORING_FUTURE_RESERVES",
        RevokeSponsorship = 18 => "REVOKE_SPONSORSHIP",
        Clawback = 19 => "CLAWBACK",
        ClawbackClaimableBalance = 20 => "CLAWBACK_CLAIMABLE_BALANCE",
        SetTrustLineFlags = 21 => "SET_TRUST_LINE_FLAGS",
        LiquidityPoolDeposit = 22 => "LIQUIDITY_POOL_DEPOSIT",
        LiquidityPoolWithdraw = 23 => "LIQUIDITY_POOL_WITHDRAW",
        InvokeHostFunction = 24 => "INVOKE_HOST_FUNCTION",
        BumpFootprintExpiration = 25 => "BUMP_FOOTPRINT_EXPIRATION",
        RestoreFootprint = 26 => "RESTORE_FOOTPRINT",
    }
}

xdr_enum! {
    pub enum ClaimPredicateType {
        Unconditional = 0 => "CLAIM_PREDICATE_UNCONDITIONAL",
        And = 1 => "CLAIM_PREDICATE_AND",
        Or = 2 => "CLAIM_PREDICATE_OR",
        Not = 3 => "CLAIM_PREDICATE_NOT",
        BeforeAbsoluteTime = 4 => "CLAIM_PREDICATE_BEFORE_ABSOLUTE_TIME",
        BeforeRelativeTime = 5 => "CLAIM_PREDICATE_BEFORE_RELATIVE_TIME",
    }
}

xdr_enum! {
    pub enum ClaimantType {
        V0 = 0 => "CLAIMANT_TYPE_V0",
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipType {
        LedgerEntry = 0 => "REVOKE_SPONSORSHIP_LEDGER_ENTRY",
        Signer = 1 => "REVOKE_SPONSORSHIP_SIGNER",
    }
}

/// Implements `XdrCodec` for a plain struct by encoding its fields in order.
macro_rules! xdr_struct {
    ($name:ident { $($field:ident: $ty:ty),+ $(,)? }) => {
        impl XdrCodec for $name {
            fn encode(&self, w: &mut XdrWriter) {
                $(self.$field.encode(w);)+
            }

            fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
                Ok($name {
                    $($field: <$ty>::decode(r)?,)+
                })
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

xdr_struct!(CreateAccountOp {
    destination: PublicKey,
    starting_balance: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

xdr_struct!(PaymentOp {
    destination: MuxedAccount,
    asset: Asset,
    amount: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    pub path: Vec<Asset>,
}

impl XdrCodec for PathPaymentStrictReceiveOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.send_asset.encode(w);
        w.write_i64(self.send_max);
        self.destination.encode(w);
        self.dest_asset.encode(w);
        w.write_i64(self.dest_amount);
        w.write_array(&self.path);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(PathPaymentStrictReceiveOp {
            send_asset: Asset::decode(r)?,
            send_max: r.read_i64()?,
            destination: MuxedAccount::decode(r)?,
            dest_asset: Asset::decode(r)?,
            dest_amount: r.read_i64()?,
            path: r.read_array(MAX_PATH_LENGTH)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPaymentStrictSendOp {
    pub send_asset: Asset,
    pub send_amount: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_min: i64,
    pub path: Vec<Asset>,
}

impl XdrCodec for PathPaymentStrictSendOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.send_asset.encode(w);
        w.write_i64(self.send_amount);
        self.destination.encode(w);
        self.dest_asset.encode(w);
        w.write_i64(self.dest_min);
        w.write_array(&self.path);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(PathPaymentStrictSendOp {
            send_asset: Asset::decode(r)?,
            send_amount: r.read_i64()?,
            destination: MuxedAccount::decode(r)?,
            dest_asset: Asset::decode(r)?,
            dest_min: r.read_i64()?,
            path: r.read_array(MAX_PATH_LENGTH)?,
        })
    }
}

/// Offer id 0 creates a new offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

xdr_struct!(ManageSellOfferOp {
    selling: Asset,
    buying: Asset,
    amount: i64,
    price: Price,
    offer_id: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

xdr_struct!(ManageBuyOfferOp {
    selling: Asset,
    buying: Asset,
    buy_amount: i64,
    price: Price,
    offer_id: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

xdr_struct!(CreatePassiveSellOfferOp {
    selling: Asset,
    buying: Asset,
    amount: i64,
    price: Price,
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptionsOp {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

impl XdrCodec for SetOptionsOp {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_optional(&self.inflation_dest);
        w.write_optional(&self.clear_flags);
        w.write_optional(&self.set_flags);
        w.write_optional(&self.master_weight);
        w.write_optional(&self.low_threshold);
        w.write_optional(&self.med_threshold);
        w.write_optional(&self.high_threshold);
        match &self.home_domain {
            Some(domain) => {
                w.write_u32(1);
                w.write_string(domain);
            }
            None => w.write_u32(0),
        }
        w.write_optional(&self.signer);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(SetOptionsOp {
            inflation_dest: r.read_optional()?,
            clear_flags: r.read_optional()?,
            set_flags: r.read_optional()?,
            master_weight: r.read_optional()?,
            low_threshold: r.read_optional()?,
            med_threshold: r.read_optional()?,
            high_threshold: r.read_optional()?,
            home_domain: if r.read_presence()? {
                Some(r.read_string(HOME_DOMAIN_LIMIT)?)
            } else {
                None
            },
            signer: r.read_optional()?,
        })
    }
}

/// Limit 0 removes the trustline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTrustOp {
    pub line: ChangeTrustAsset,
    pub limit: i64,
}

xdr_struct!(ChangeTrustOp {
    line: ChangeTrustAsset,
    limit: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset: AssetCode,
    pub authorize: u32,
}

xdr_struct!(AllowTrustOp {
    trustor: PublicKey,
    asset: AssetCode,
    authorize: u32,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManageDataOp {
    pub data_name: String,
    /// `None` deletes the entry
    pub data_value: Option<Vec<u8>>,
}

impl XdrCodec for ManageDataOp {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_string(&self.data_name);
        match &self.data_value {
            Some(value) => {
                w.write_u32(1);
                w.write_var_opaque(value);
            }
            None => w.write_u32(0),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(ManageDataOp {
            data_name: r.read_string(DATA_NAME_LIMIT)?,
            data_value: if r.read_presence()? {
                Some(r.read_var_opaque(DATA_VALUE_LIMIT)?)
            } else {
                None
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

xdr_struct!(BumpSequenceOp { bump_to: i64 });

/// Claim condition tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimPredicate {
    Unconditional,
    And(Vec<ClaimPredicate>),
    Or(Vec<ClaimPredicate>),
    Not(Option<Box<ClaimPredicate>>),
    /// Unix seconds
    BeforeAbsoluteTime(i64),
    /// Seconds since the close of the ledger that created the balance
    BeforeRelativeTime(i64),
}

impl ClaimPredicate {
    pub fn predicate_type(&self) -> ClaimPredicateType {
        match self {
            ClaimPredicate::Unconditional => ClaimPredicateType::Unconditional,
            ClaimPredicate::And(_) => ClaimPredicateType::And,
            ClaimPredicate::Or(_) => ClaimPredicateType::Or,
            ClaimPredicate::Not(_) => ClaimPredicateType::Not,
            ClaimPredicate::BeforeAbsoluteTime(_) => ClaimPredicateType::BeforeAbsoluteTime,
            ClaimPredicate::BeforeRelativeTime(_) => ClaimPredicateType::BeforeRelativeTime,
        }
    }
}

impl XdrCodec for ClaimPredicate {
    fn encode(&self, w: &mut XdrWriter) {
        self.predicate_type().encode(w);
        match self {
            ClaimPredicate::Unconditional => {}
            ClaimPredicate::And(predicates) | ClaimPredicate::Or(predicates) => {
                w.write_array(predicates)
            }
            ClaimPredicate::Not(predicate) => w.write_optional(predicate),
            ClaimPredicate::BeforeAbsoluteTime(t) | ClaimPredicate::BeforeRelativeTime(t) => {
                w.write_i64(*t)
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match ClaimPredicateType::decode(r)? {
            ClaimPredicateType::Unconditional => ClaimPredicate::Unconditional,
            ClaimPredicateType::And => ClaimPredicate::And(r.read_array(2)?),
            ClaimPredicateType::Or => ClaimPredicate::Or(r.read_array(2)?),
            ClaimPredicateType::Not => ClaimPredicate::Not(r.read_optional()?),
            ClaimPredicateType::BeforeAbsoluteTime => {
                ClaimPredicate::BeforeAbsoluteTime(r.read_i64()?)
            }
            ClaimPredicateType::BeforeRelativeTime => {
                ClaimPredicate::BeforeRelativeTime(r.read_i64()?)
            }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claimant {
    V0 {
        destination: AccountId,
        predicate: ClaimPredicate,
    },
}

impl XdrCodec for Claimant {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            Claimant::V0 {
                destination,
                predicate,
            } => {
                ClaimantType::V0.encode(w);
                destination.encode(w);
                predicate.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match ClaimantType::decode(r)? {
            ClaimantType::V0 => Ok(Claimant::V0 {
                destination: PublicKey::decode(r)?,
                predicate: ClaimPredicate::decode(r)?,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClaimableBalanceOp {
    pub asset: Asset,
    pub amount: i64,
    pub claimants: Vec<Claimant>,
}

impl XdrCodec for CreateClaimableBalanceOp {
    fn encode(&self, w: &mut XdrWriter) {
        self.asset.encode(w);
        w.write_i64(self.amount);
        w.write_array(&self.claimants);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(CreateClaimableBalanceOp {
            asset: Asset::decode(r)?,
            amount: r.read_i64()?,
            claimants: r.read_array(MAX_CLAIMANTS)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

xdr_struct!(ClaimClaimableBalanceOp {
    balance_id: ClaimableBalanceId,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeginSponsoringFutureReservesOp {
    pub sponsored_id: AccountId,
}

xdr_struct!(BeginSponsoringFutureReservesOp {
    sponsored_id: PublicKey,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevokeSponsorshipOp {
    LedgerEntry(LedgerKey),
    Signer {
        account_id: AccountId,
        signer_key: SignerKey,
    },
}

impl XdrCodec for RevokeSponsorshipOp {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            RevokeSponsorshipOp::LedgerEntry(key) => {
                RevokeSponsorshipType::LedgerEntry.encode(w);
                key.encode(w);
            }
            RevokeSponsorshipOp::Signer {
                account_id,
                signer_key,
            } => {
                RevokeSponsorshipType::Signer.encode(w);
                account_id.encode(w);
                signer_key.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match RevokeSponsorshipType::decode(r)? {
            RevokeSponsorshipType::LedgerEntry => {
                RevokeSponsorshipOp::LedgerEntry(LedgerKey::decode(r)?)
            }
            RevokeSponsorshipType::Signer => RevokeSponsorshipOp::Signer {
                account_id: PublicKey::decode(r)?,
                signer_key: SignerKey::decode(r)?,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClawbackOp {
    pub asset: Asset,
    pub from: MuxedAccount,
    pub amount: i64,
}

xdr_struct!(ClawbackOp {
    asset: Asset,
    from: MuxedAccount,
    amount: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClawbackClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

xdr_struct!(ClawbackClaimableBalanceOp {
    balance_id: ClaimableBalanceId,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTrustLineFlagsOp {
    pub trustor: AccountId,
    pub asset: Asset,
    pub clear_flags: u32,
    pub set_flags: u32,
}

xdr_struct!(SetTrustLineFlagsOp {
    trustor: PublicKey,
    asset: Asset,
    clear_flags: u32,
    set_flags: u32,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityPoolDepositOp {
    pub liquidity_pool_id: Hash,
    pub max_amount_a: i64,
    pub max_amount_b: i64,
    pub min_price: Price,
    pub max_price: Price,
}

xdr_struct!(LiquidityPoolDepositOp {
    liquidity_pool_id: Hash,
    max_amount_a: i64,
    max_amount_b: i64,
    min_price: Price,
    max_price: Price,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityPoolWithdrawOp {
    pub liquidity_pool_id: Hash,
    pub amount: i64,
    pub min_amount_a: i64,
    pub min_amount_b: i64,
}

xdr_struct!(LiquidityPoolWithdrawOp {
    liquidity_pool_id: Hash,
    amount: i64,
    min_amount_a: i64,
    min_amount_b: i64,
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    ManageSellOffer(ManageSellOfferOp),
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    AccountMerge(MuxedAccount),
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
    ManageBuyOffer(ManageBuyOfferOp),
    PathPaymentStrictSend(PathPaymentStrictSendOp),
    CreateClaimableBalance(CreateClaimableBalanceOp),
    ClaimClaimableBalance(ClaimClaimableBalanceOp),
    BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp),
    EndSponsoringFutureReserves,
    RevokeSponsorship(RevokeSponsorshipOp),
    Clawback(ClawbackOp),
    ClawbackClaimableBalance(ClawbackClaimableBalanceOp),
    SetTrustLineFlags(SetTrustLineFlagsOp),
    LiquidityPoolDeposit(LiquidityPoolDepositOp),
    LiquidityPoolWithdraw(LiquidityPoolWithdrawOp),
    InvokeHostFunction(InvokeHostFunctionOp),
    BumpFootprintExpiration(BumpFootprintExpirationOp),
    RestoreFootprint(RestoreFootprintOp),
}

impl OperationBody {
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationBody::CreateAccount(_) => OperationType::CreateAccount,
            OperationBody::Payment(_) => OperationType::Payment,
            OperationBody::PathPaymentStrictReceive(_) => OperationType::PathPaymentStrictReceive,
            OperationBody::ManageSellOffer(_) => OperationType::ManageSellOffer,
            OperationBody::CreatePassiveSellOffer(_) => OperationType::CreatePassiveSellOffer,
            OperationBody::SetOptions(_) => OperationType::SetOptions,
            OperationBody::ChangeTrust(_) => OperationType::ChangeTrust,
            OperationBody::AllowTrust(_) => OperationType::AllowTrust,
            OperationBody::AccountMerge(_) => OperationType::AccountMerge,
            OperationBody::Inflation => OperationType::Inflation,
            OperationBody::ManageData(_) => OperationType::ManageData,
            OperationBody::BumpSequence(_) => OperationType::BumpSequence,
            OperationBody::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            OperationBody::PathPaymentStrictSend(_) => OperationType::PathPaymentStrictSend,
            OperationBody::CreateClaimableBalance(_) => OperationType::CreateClaimableBalance,
            OperationBody::ClaimClaimableBalance(_) => OperationType::ClaimClaimableBalance,
            OperationBody::BeginSponsoringFutureReserves(_) => {
                OperationType::BeginSponsoringFutureReserves
            }
            OperationBody::EndSponsoringFutureReserves => {
                OperationType::EndSponsoringFutureReserves
            }
            OperationBody::RevokeSponsorship(_) => OperationType::RevokeSponsorship,
            OperationBody::Clawback(_) => OperationType::Clawback,
            OperationBody::ClawbackClaimableBalance(_) => OperationType::ClawbackClaimableBalance,
            OperationBody::SetTrustLineFlags(_) => OperationType::SetTrustLineFlags,
            OperationBody::LiquidityPoolDeposit(_) => OperationType::LiquidityPoolDeposit,
            OperationBody::LiquidityPoolWithdraw(_) => OperationType::LiquidityPoolWithdraw,
            OperationBody::InvokeHostFunction(_) => OperationType::InvokeHostFunction,
            OperationBody::BumpFootprintExpiration(_) => OperationType::BumpFootprintExpiration,
            OperationBody::RestoreFootprint(_) => OperationType::RestoreFootprint,
        }
    }
}

impl XdrCodec for OperationBody {
    fn encode(&self, w: &mut XdrWriter) {
        self.operation_type().encode(w);
        match self {
            OperationBody::CreateAccount(op) => op.encode(w),
            OperationBody::Payment(op) => op.encode(w),
            OperationBody::PathPaymentStrictReceive(op) => op.encode(w),
            OperationBody::ManageSellOffer(op) => op.encode(w),
            OperationBody::CreatePassiveSellOffer(op) => op.encode(w),
            OperationBody::SetOptions(op) => op.encode(w),
            OperationBody::ChangeTrust(op) => op.encode(w),
            OperationBody::AllowTrust(op) => op.encode(w),
            OperationBody::AccountMerge(destination) => destination.encode(w),
            OperationBody::Inflation | OperationBody::EndSponsoringFutureReserves => {}
            OperationBody::ManageData(op) => op.encode(w),
            OperationBody::BumpSequence(op) => op.encode(w),
            OperationBody::ManageBuyOffer(op) => op.encode(w),
            OperationBody::PathPaymentStrictSend(op) => op.encode(w),
            OperationBody::CreateClaimableBalance(op) => op.encode(w),
            OperationBody::ClaimClaimableBalance(op) => op.encode(w),
            OperationBody::BeginSponsoringFutureReserves(op) => op.encode(w),
            OperationBody::RevokeSponsorship(op) => op.encode(w),
            OperationBody::Clawback(op) => op.encode(w),
            OperationBody::ClawbackClaimableBalance(op) => op.encode(w),
            OperationBody::SetTrustLineFlags(op) => op.encode(w),
            OperationBody::LiquidityPoolDeposit(op) => op.encode(w),
            OperationBody::LiquidityPoolWithdraw(op) => op.encode(w),
            OperationBody::InvokeHostFunction(op) => op.encode(w),
            OperationBody::BumpFootprintExpiration(op) => op.encode(w),
            OperationBody::RestoreFootprint(op) => op.encode(w),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match OperationType::decode(r)? {
            OperationType::CreateAccount => OperationBody::CreateAccount(XdrCodec::decode(r)?),
            OperationType::Payment => OperationBody::Payment(XdrCodec::decode(r)?),
            OperationType::PathPaymentStrictReceive => {
                OperationBody::PathPaymentStrictReceive(XdrCodec::decode(r)?)
            }
            OperationType::ManageSellOffer => {
                OperationBody::ManageSellOffer(XdrCodec::decode(r)?)
            }
            OperationType::CreatePassiveSellOffer => {
                OperationBody::CreatePassiveSellOffer(XdrCodec::decode(r)?)
            }
            OperationType::SetOptions => OperationBody::SetOptions(XdrCodec::decode(r)?),
            OperationType::ChangeTrust => OperationBody::ChangeTrust(XdrCodec::decode(r)?),
            OperationType::AllowTrust => OperationBody::AllowTrust(XdrCodec::decode(r)?),
            OperationType::AccountMerge => OperationBody::AccountMerge(XdrCodec::decode(r)?),
            OperationType::Inflation => OperationBody::Inflation,
            OperationType::ManageData => OperationBody::ManageData(XdrCodec::decode(r)?),
            OperationType::BumpSequence => OperationBody::BumpSequence(XdrCodec::decode(r)?),
            OperationType::ManageBuyOffer => OperationBody::ManageBuyOffer(XdrCodec::decode(r)?),
            OperationType::PathPaymentStrictSend => {
                OperationBody::PathPaymentStrictSend(XdrCodec::decode(r)?)
            }
            OperationType::CreateClaimableBalance => {
                OperationBody::CreateClaimableBalance(XdrCodec::decode(r)?)
            }
            OperationType::ClaimClaimableBalance => {
                OperationBody::ClaimClaimableBalance(XdrCodec::decode(r)?)
            }
            OperationType::BeginSponsoringFutureReserves => {
                OperationBody::BeginSponsoringFutureReserves(XdrCodec::decode(r)?)
            }
            OperationType::EndSponsoringFutureReserves => {
                OperationBody::EndSponsoringFutureReserves
            }
            OperationType::RevokeSponsorship => {
                OperationBody::RevokeSponsorship(XdrCodec::decode(r)?)
            }
            OperationType::Clawback => OperationBody::Clawback(XdrCodec::decode(r)?),
            OperationType::ClawbackClaimableBalance => {
                OperationBody::ClawbackClaimableBalance(XdrCodec::decode(r)?)
            }
            OperationType::SetTrustLineFlags => {
                OperationBody::SetTrustLineFlags(XdrCodec::decode(r)?)
            }
            OperationType::LiquidityPoolDeposit => {
                OperationBody::LiquidityPoolDeposit(XdrCodec::decode(r)?)
            }
            OperationType::LiquidityPoolWithdraw => {
                OperationBody::LiquidityPoolWithdraw(XdrCodec::decode(r)?)
            }
            OperationType::InvokeHostFunction => {
                OperationBody::InvokeHostFunction(XdrCodec::decode(r)?)
            }
            OperationType::BumpFootprintExpiration => {
                OperationBody::BumpFootprintExpiration(XdrCodec::decode(r)?)
            }
            OperationType::RestoreFootprint => {
                OperationBody::RestoreFootprint(XdrCodec::decode(r)?)
            }
        })
    }
}

/// Operation with an optional per-operation source account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub source_account: Option<MuxedAccount>,
    pub body: OperationBody,
}

impl Operation {
    pub fn new(body: OperationBody) -> Self {
        Operation {
            source_account: None,
            body,
        }
    }

    pub fn with_source(mut self, source: MuxedAccount) -> Self {
        self.source_account = Some(source);
        self
    }
}

impl XdrCodec for Operation {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_optional(&self.source_account);
        self.body.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Operation {
            source_account: r.read_optional()?,
            body: OperationBody::decode(r)?,
        })
    }
}
