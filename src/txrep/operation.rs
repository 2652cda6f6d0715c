//! TxRep forms of operations, claimants and claim predicates

use crate::error::WasmStellarError;
use crate::xdr::account::{MuxedAccount, PublicKey, Signer, SignerKey};
use crate::xdr::asset::{Asset, AssetCode, ChangeTrustAsset, Price};
use crate::xdr::ledger_key::{ClaimableBalanceId, LedgerKey};
use crate::xdr::operation::{
    AllowTrustOp, BeginSponsoringFutureReservesOp, BumpSequenceOp, ChangeTrustOp,
    ClaimClaimableBalanceOp, ClaimPredicate, ClaimPredicateType, Claimant, ClaimantType,
    ClawbackClaimableBalanceOp, ClawbackOp, CreateAccountOp, CreateClaimableBalanceOp,
    CreatePassiveSellOfferOp, LiquidityPoolDepositOp, LiquidityPoolWithdrawOp, ManageBuyOfferOp,
    ManageDataOp, ManageSellOfferOp, Operation, OperationBody, OperationType,
    PathPaymentStrictReceiveOp, PathPaymentStrictSendOp, PaymentOp, RevokeSponsorshipOp,
    RevokeSponsorshipType, SetOptionsOp, SetTrustLineFlagsOp, MAX_CLAIMANTS, MAX_PATH_LENGTH,
};
use crate::xdr::soroban::{BumpFootprintExpirationOp, InvokeHostFunctionOp, RestoreFootprintOp};

use super::reader::TxRepReader;
use super::writer::{child, index, TxRepWriter};
use super::{read_array, read_optional, write_array, write_optional, TxRepCodec};

/// Deepest predicate nesting the network accepts
const MAX_PREDICATE_DEPTH: usize = 4;

impl TxRepCodec for u32 {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(path, self);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.number(path)
    }
}

impl TxRepCodec for Operation {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        write_optional(w, &child(path, "sourceAccount"), &self.source_account);
        let body = child(path, "body");
        w.line(&child(&body, "type"), self.body.operation_type().name());
        write_body(w, &body, &self.body);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let source_account = read_optional(r, &child(path, "sourceAccount"))?;
        let body = child(path, "body");
        let op_type = r.named(&child(&body, "type"), OperationType::from_name)?;
        Ok(Operation {
            source_account,
            body: read_body(r, &body, op_type)?,
        })
    }
}

/// `createAccountOp`, `paymentOp`, ...
fn op_field(op_type: OperationType) -> &'static str {
    match op_type {
        OperationType::CreateAccount => "createAccountOp",
        OperationType::Payment => "paymentOp",
        OperationType::PathPaymentStrictReceive => "pathPaymentStrictReceiveOp",
        OperationType::ManageSellOffer => "manageSellOfferOp",
        OperationType::CreatePassiveSellOffer => "createPassiveSellOfferOp",
        OperationType::SetOptions => "setOptionsOp",
        OperationType::ChangeTrust => "changeTrustOp",
        OperationType::AllowTrust => "allowTrustOp",
        OperationType::AccountMerge => "destination",
        OperationType::Inflation => "inflationOp",
        OperationType::ManageData => "manageDataOp",
        OperationType::BumpSequence => "bumpSequenceOp",
        OperationType::ManageBuyOffer => "manageBuyOfferOp",
        OperationType::PathPaymentStrictSend => "pathPaymentStrictSendOp",
        OperationType::CreateClaimableBalance => "createClaimableBalanceOp",
        OperationType::ClaimClaimableBalance => "claimClaimableBalanceOp",
        OperationType::BeginSponsoringFutureReserves => "beginSponsoringFutureReservesOp",
        OperationType::EndSponsoringFutureReserves => "endSponsoringFutureReservesOp",
        OperationType::RevokeSponsorship => "revokeSponsorshipOp",
        OperationType::Clawback => "clawbackOp",
        OperationType::ClawbackClaimableBalance => "clawbackClaimableBalanceOp",
        OperationType::SetTrustLineFlags => "setTrustLineFlagsOp",
        OperationType::LiquidityPoolDeposit => "liquidityPoolDepositOp",
        OperationType::LiquidityPoolWithdraw => "liquidityPoolWithdrawOp",
        OperationType::InvokeHostFunction => "invokeHostFunctionOp",
        OperationType::BumpFootprintExpiration => "bumpFootprintExpirationOp",
        OperationType::RestoreFootprint => "restoreFootprintOp",
    }
}

fn write_body(w: &mut TxRepWriter, body: &str, op: &OperationBody) {
    let p = child(body, op_field(op.operation_type()));
    let f = |name: &str| child(&p, name);
    match op {
        OperationBody::CreateAccount(op) => {
            op.destination.write_txrep(w, &f("destination"));
            w.amount(&f("startingBalance"), op.starting_balance);
        }
        OperationBody::Payment(op) => {
            op.destination.write_txrep(w, &f("destination"));
            op.asset.write_txrep(w, &f("asset"));
            w.amount(&f("amount"), op.amount);
        }
        OperationBody::PathPaymentStrictReceive(op) => {
            op.send_asset.write_txrep(w, &f("sendAsset"));
            w.amount(&f("sendMax"), op.send_max);
            op.destination.write_txrep(w, &f("destination"));
            op.dest_asset.write_txrep(w, &f("destAsset"));
            w.amount(&f("destAmount"), op.dest_amount);
            write_array(w, &f("path"), &op.path);
        }
        OperationBody::PathPaymentStrictSend(op) => {
            op.send_asset.write_txrep(w, &f("sendAsset"));
            w.amount(&f("sendAmount"), op.send_amount);
            op.destination.write_txrep(w, &f("destination"));
            op.dest_asset.write_txrep(w, &f("destAsset"));
            w.amount(&f("destMin"), op.dest_min);
            write_array(w, &f("path"), &op.path);
        }
        OperationBody::ManageSellOffer(op) => {
            op.selling.write_txrep(w, &f("selling"));
            op.buying.write_txrep(w, &f("buying"));
            w.amount(&f("amount"), op.amount);
            op.price.write_txrep(w, &f("price"));
            w.line(&f("offerID"), op.offer_id);
        }
        OperationBody::ManageBuyOffer(op) => {
            op.selling.write_txrep(w, &f("selling"));
            op.buying.write_txrep(w, &f("buying"));
            w.amount(&f("buyAmount"), op.buy_amount);
            op.price.write_txrep(w, &f("price"));
            w.line(&f("offerID"), op.offer_id);
        }
        OperationBody::CreatePassiveSellOffer(op) => {
            op.selling.write_txrep(w, &f("selling"));
            op.buying.write_txrep(w, &f("buying"));
            w.amount(&f("amount"), op.amount);
            op.price.write_txrep(w, &f("price"));
        }
        OperationBody::SetOptions(op) => {
            write_optional(w, &f("inflationDest"), &op.inflation_dest);
            write_optional(w, &f("clearFlags"), &op.clear_flags);
            write_optional(w, &f("setFlags"), &op.set_flags);
            write_optional(w, &f("masterWeight"), &op.master_weight);
            write_optional(w, &f("lowThreshold"), &op.low_threshold);
            write_optional(w, &f("medThreshold"), &op.med_threshold);
            write_optional(w, &f("highThreshold"), &op.high_threshold);
            let home_domain = f("homeDomain");
            w.present(&home_domain, op.home_domain.is_some());
            if let Some(domain) = &op.home_domain {
                w.string(&home_domain, domain);
            }
            write_optional(w, &f("signer"), &op.signer);
        }
        OperationBody::ChangeTrust(op) => {
            op.line.write_txrep(w, &f("line"));
            w.amount(&f("limit"), op.limit);
        }
        OperationBody::AllowTrust(op) => {
            op.trustor.write_txrep(w, &f("trustor"));
            if !op.asset.code_matches_type() {
                w.fail(&f("asset"), "alphanum12 asset code has 4 characters or fewer");
            }
            w.line(&f("asset"), op.asset.code());
            w.line(&f("authorize"), op.authorize);
        }
        OperationBody::AccountMerge(destination) => destination.write_txrep(w, &p),
        OperationBody::Inflation | OperationBody::EndSponsoringFutureReserves => {}
        OperationBody::ManageData(op) => {
            w.string(&f("dataName"), &op.data_name);
            let value = f("dataValue");
            w.present(&value, op.data_value.is_some());
            if let Some(bytes) = &op.data_value {
                w.hex(&value, bytes);
            }
        }
        OperationBody::BumpSequence(op) => w.line(&f("bumpTo"), op.bump_to),
        OperationBody::CreateClaimableBalance(op) => {
            op.asset.write_txrep(w, &f("asset"));
            w.amount(&f("amount"), op.amount);
            write_array(w, &f("claimants"), &op.claimants);
        }
        OperationBody::ClaimClaimableBalance(op) => op.balance_id.write_txrep(w, &f("balanceID")),
        OperationBody::BeginSponsoringFutureReserves(op) => {
            op.sponsored_id.write_txrep(w, &f("sponsoredID"))
        }
        OperationBody::RevokeSponsorship(op) => match op {
            RevokeSponsorshipOp::LedgerEntry(key) => {
                w.line(&f("type"), RevokeSponsorshipType::LedgerEntry.name());
                key.write_txrep(w, &f("ledgerKey"));
            }
            RevokeSponsorshipOp::Signer {
                account_id,
                signer_key,
            } => {
                w.line(&f("type"), RevokeSponsorshipType::Signer.name());
                account_id.write_txrep(w, &f("signer.accountID"));
                signer_key.write_txrep(w, &f("signer.signerKey"));
            }
        },
        OperationBody::Clawback(op) => {
            op.asset.write_txrep(w, &f("asset"));
            op.from.write_txrep(w, &f("from"));
            w.amount(&f("amount"), op.amount);
        }
        OperationBody::ClawbackClaimableBalance(op) => {
            op.balance_id.write_txrep(w, &f("balanceID"))
        }
        OperationBody::SetTrustLineFlags(op) => {
            op.trustor.write_txrep(w, &f("trustor"));
            op.asset.write_txrep(w, &f("asset"));
            w.line(&f("clearFlags"), op.clear_flags);
            w.line(&f("setFlags"), op.set_flags);
        }
        OperationBody::LiquidityPoolDeposit(op) => {
            w.hex(&f("liquidityPoolID"), &op.liquidity_pool_id);
            w.amount(&f("maxAmountA"), op.max_amount_a);
            w.amount(&f("maxAmountB"), op.max_amount_b);
            op.min_price.write_txrep(w, &f("minPrice"));
            op.max_price.write_txrep(w, &f("maxPrice"));
        }
        OperationBody::LiquidityPoolWithdraw(op) => {
            w.hex(&f("liquidityPoolID"), &op.liquidity_pool_id);
            w.amount(&f("amount"), op.amount);
            w.amount(&f("minAmountA"), op.min_amount_a);
            w.amount(&f("minAmountB"), op.min_amount_b);
        }
        OperationBody::InvokeHostFunction(op) => op.write_txrep(w, &p),
        OperationBody::BumpFootprintExpiration(op) => op.write_txrep(w, &p),
        OperationBody::RestoreFootprint(op) => op.write_txrep(w, &p),
    }
}

fn read_body(
    r: &mut TxRepReader,
    body: &str,
    op_type: OperationType,
) -> Result<OperationBody, WasmStellarError> {
    let p = child(body, op_field(op_type));
    let f = |name: &str| child(&p, name);
    Ok(match op_type {
        OperationType::CreateAccount => OperationBody::CreateAccount(CreateAccountOp {
            destination: PublicKey::read_txrep(r, &f("destination"))?,
            starting_balance: r.number(&f("startingBalance"))?,
        }),
        OperationType::Payment => OperationBody::Payment(PaymentOp {
            destination: MuxedAccount::read_txrep(r, &f("destination"))?,
            asset: Asset::read_txrep(r, &f("asset"))?,
            amount: r.number(&f("amount"))?,
        }),
        OperationType::PathPaymentStrictReceive => {
            OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
                send_asset: Asset::read_txrep(r, &f("sendAsset"))?,
                send_max: r.number(&f("sendMax"))?,
                destination: MuxedAccount::read_txrep(r, &f("destination"))?,
                dest_asset: Asset::read_txrep(r, &f("destAsset"))?,
                dest_amount: r.number(&f("destAmount"))?,
                path: read_array(r, &f("path"), MAX_PATH_LENGTH)?,
            })
        }
        OperationType::PathPaymentStrictSend => {
            OperationBody::PathPaymentStrictSend(PathPaymentStrictSendOp {
                send_asset: Asset::read_txrep(r, &f("sendAsset"))?,
                send_amount: r.number(&f("sendAmount"))?,
                destination: MuxedAccount::read_txrep(r, &f("destination"))?,
                dest_asset: Asset::read_txrep(r, &f("destAsset"))?,
                dest_min: r.number(&f("destMin"))?,
                path: read_array(r, &f("path"), MAX_PATH_LENGTH)?,
            })
        }
        OperationType::ManageSellOffer => OperationBody::ManageSellOffer(ManageSellOfferOp {
            selling: Asset::read_txrep(r, &f("selling"))?,
            buying: Asset::read_txrep(r, &f("buying"))?,
            amount: r.number(&f("amount"))?,
            price: Price::read_txrep(r, &f("price"))?,
            offer_id: r.number(&f("offerID"))?,
        }),
        OperationType::ManageBuyOffer => OperationBody::ManageBuyOffer(ManageBuyOfferOp {
            selling: Asset::read_txrep(r, &f("selling"))?,
            buying: Asset::read_txrep(r, &f("buying"))?,
            buy_amount: r.number(&f("buyAmount"))?,
            price: Price::read_txrep(r, &f("price"))?,
            offer_id: r.number(&f("offerID"))?,
        }),
        OperationType::CreatePassiveSellOffer => {
            OperationBody::CreatePassiveSellOffer(CreatePassiveSellOfferOp {
                selling: Asset::read_txrep(r, &f("selling"))?,
                buying: Asset::read_txrep(r, &f("buying"))?,
                amount: r.number(&f("amount"))?,
                price: Price::read_txrep(r, &f("price"))?,
            })
        }
        OperationType::SetOptions => OperationBody::SetOptions(SetOptionsOp {
            inflation_dest: read_optional(r, &f("inflationDest"))?,
            clear_flags: read_optional(r, &f("clearFlags"))?,
            set_flags: read_optional(r, &f("setFlags"))?,
            master_weight: read_optional(r, &f("masterWeight"))?,
            low_threshold: read_optional(r, &f("lowThreshold"))?,
            med_threshold: read_optional(r, &f("medThreshold"))?,
            high_threshold: read_optional(r, &f("highThreshold"))?,
            home_domain: {
                let home_domain = f("homeDomain");
                if r.present(&home_domain)? {
                    Some(r.string(&home_domain)?)
                } else {
                    None
                }
            },
            signer: read_optional::<Signer>(r, &f("signer"))?,
        }),
        OperationType::ChangeTrust => OperationBody::ChangeTrust(ChangeTrustOp {
            line: ChangeTrustAsset::read_txrep(r, &f("line"))?,
            limit: r.number(&f("limit"))?,
        }),
        OperationType::AllowTrust => OperationBody::AllowTrust(AllowTrustOp {
            trustor: PublicKey::read_txrep(r, &f("trustor"))?,
            asset: r.parsed(&f("asset"), AssetCode::new)?,
            authorize: r.number(&f("authorize"))?,
        }),
        OperationType::AccountMerge => {
            OperationBody::AccountMerge(MuxedAccount::read_txrep(r, &p)?)
        }
        OperationType::Inflation => OperationBody::Inflation,
        OperationType::EndSponsoringFutureReserves => OperationBody::EndSponsoringFutureReserves,
        OperationType::ManageData => OperationBody::ManageData(ManageDataOp {
            data_name: r.string(&f("dataName"))?,
            data_value: {
                let value = f("dataValue");
                if r.present(&value)? {
                    Some(r.hex(&value)?)
                } else {
                    None
                }
            },
        }),
        OperationType::BumpSequence => OperationBody::BumpSequence(BumpSequenceOp {
            bump_to: r.number(&f("bumpTo"))?,
        }),
        OperationType::CreateClaimableBalance => {
            OperationBody::CreateClaimableBalance(CreateClaimableBalanceOp {
                asset: Asset::read_txrep(r, &f("asset"))?,
                amount: r.number(&f("amount"))?,
                claimants: read_array(r, &f("claimants"), MAX_CLAIMANTS)?,
            })
        }
        OperationType::ClaimClaimableBalance => {
            OperationBody::ClaimClaimableBalance(ClaimClaimableBalanceOp {
                balance_id: ClaimableBalanceId::read_txrep(r, &f("balanceID"))?,
            })
        }
        OperationType::BeginSponsoringFutureReserves => {
            OperationBody::BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp {
                sponsored_id: PublicKey::read_txrep(r, &f("sponsoredID"))?,
            })
        }
        OperationType::RevokeSponsorship => {
            OperationBody::RevokeSponsorship(
                match r.named(&f("type"), RevokeSponsorshipType::from_name)? {
                    RevokeSponsorshipType::LedgerEntry => {
                        RevokeSponsorshipOp::LedgerEntry(LedgerKey::read_txrep(r, &f("ledgerKey"))?)
                    }
                    RevokeSponsorshipType::Signer => RevokeSponsorshipOp::Signer {
                        account_id: PublicKey::read_txrep(r, &f("signer.accountID"))?,
                        signer_key: SignerKey::read_txrep(r, &f("signer.signerKey"))?,
                    },
                },
            )
        }
        OperationType::Clawback => OperationBody::Clawback(ClawbackOp {
            asset: Asset::read_txrep(r, &f("asset"))?,
            from: MuxedAccount::read_txrep(r, &f("from"))?,
            amount: r.number(&f("amount"))?,
        }),
        OperationType::ClawbackClaimableBalance => {
            OperationBody::ClawbackClaimableBalance(ClawbackClaimableBalanceOp {
                balance_id: ClaimableBalanceId::read_txrep(r, &f("balanceID"))?,
            })
        }
        OperationType::SetTrustLineFlags => {
            OperationBody::SetTrustLineFlags(SetTrustLineFlagsOp {
                trustor: PublicKey::read_txrep(r, &f("trustor"))?,
                asset: Asset::read_txrep(r, &f("asset"))?,
                clear_flags: r.number(&f("clearFlags"))?,
                set_flags: r.number(&f("setFlags"))?,
            })
        }
        OperationType::LiquidityPoolDeposit => {
            OperationBody::LiquidityPoolDeposit(LiquidityPoolDepositOp {
                liquidity_pool_id: r.hex_fixed(&f("liquidityPoolID"))?,
                max_amount_a: r.number(&f("maxAmountA"))?,
                max_amount_b: r.number(&f("maxAmountB"))?,
                min_price: Price::read_txrep(r, &f("minPrice"))?,
                max_price: Price::read_txrep(r, &f("maxPrice"))?,
            })
        }
        OperationType::LiquidityPoolWithdraw => {
            OperationBody::LiquidityPoolWithdraw(LiquidityPoolWithdrawOp {
                liquidity_pool_id: r.hex_fixed(&f("liquidityPoolID"))?,
                amount: r.number(&f("amount"))?,
                min_amount_a: r.number(&f("minAmountA"))?,
                min_amount_b: r.number(&f("minAmountB"))?,
            })
        }
        OperationType::InvokeHostFunction => {
            OperationBody::InvokeHostFunction(InvokeHostFunctionOp::read_txrep(r, &p)?)
        }
        OperationType::BumpFootprintExpiration => {
            OperationBody::BumpFootprintExpiration(BumpFootprintExpirationOp::read_txrep(r, &p)?)
        }
        OperationType::RestoreFootprint => {
            OperationBody::RestoreFootprint(RestoreFootprintOp::read_txrep(r, &p)?)
        }
    })
}

impl TxRepCodec for Claimant {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            Claimant::V0 {
                destination,
                predicate,
            } => {
                w.line(&child(path, "type"), ClaimantType::V0.name());
                destination.write_txrep(w, &child(path, "v0.destination"));
                predicate.write_txrep(w, &child(path, "v0.predicate"));
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        match r.named(&child(path, "type"), ClaimantType::from_name)? {
            ClaimantType::V0 => Ok(Claimant::V0 {
                destination: PublicKey::read_txrep(r, &child(path, "v0.destination"))?,
                predicate: ClaimPredicate::read_txrep(r, &child(path, "v0.predicate"))?,
            }),
        }
    }
}

impl TxRepCodec for ClaimPredicate {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.predicate_type().name());
        match self {
            ClaimPredicate::Unconditional => {}
            ClaimPredicate::And(predicates) => write_array(w, &child(path, "andPredicates"), predicates),
            ClaimPredicate::Or(predicates) => write_array(w, &child(path, "orPredicates"), predicates),
            ClaimPredicate::Not(predicate) => {
                let not = child(path, "notPredicate");
                w.present(&not, predicate.is_some());
                if let Some(predicate) = predicate {
                    predicate.write_txrep(w, &not);
                }
            }
            ClaimPredicate::BeforeAbsoluteTime(t) => {
                let abs = child(path, "absBefore");
                match u64::try_from(*t) {
                    Ok(secs) => w.time(&abs, secs),
                    Err(_) => w.line(&abs, t),
                }
            }
            ClaimPredicate::BeforeRelativeTime(t) => w.line(&child(path, "relBefore"), t),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        read_predicate(r, path, 0)
    }
}

fn read_predicate(
    r: &mut TxRepReader,
    path: &str,
    depth: usize,
) -> Result<ClaimPredicate, WasmStellarError> {
    if depth > MAX_PREDICATE_DEPTH {
        return Err(WasmStellarError::txrep(path, "predicate nested too deeply"));
    }
    let nested = |r: &mut TxRepReader, list: &str| -> Result<Vec<ClaimPredicate>, WasmStellarError> {
        let len = r.len(list, 2)?;
        (0..len)
            .map(|i| read_predicate(r, &index(list, i), depth + 1))
            .collect()
    };
    Ok(match r.named(&child(path, "type"), ClaimPredicateType::from_name)? {
        ClaimPredicateType::Unconditional => ClaimPredicate::Unconditional,
        ClaimPredicateType::And => ClaimPredicate::And(nested(r, &child(path, "andPredicates"))?),
        ClaimPredicateType::Or => ClaimPredicate::Or(nested(r, &child(path, "orPredicates"))?),
        ClaimPredicateType::Not => {
            let not = child(path, "notPredicate");
            if r.present(&not)? {
                ClaimPredicate::Not(Some(Box::new(read_predicate(r, &not, depth + 1)?)))
            } else {
                ClaimPredicate::Not(None)
            }
        }
        ClaimPredicateType::BeforeAbsoluteTime => {
            ClaimPredicate::BeforeAbsoluteTime(r.number(&child(path, "absBefore"))?)
        }
        ClaimPredicateType::BeforeRelativeTime => {
            ClaimPredicate::BeforeRelativeTime(r.number(&child(path, "relBefore"))?)
        }
    })
}
