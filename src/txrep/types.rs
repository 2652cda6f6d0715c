//! TxRep forms of keys, assets, ledger keys and contract values

use crate::error::WasmStellarError;
use crate::strkey::{self, VersionByte};
use crate::xdr::account::{DecoratedSignature, MuxedAccount, PublicKey, Signer, SignerKey};
use crate::xdr::asset::{
    Asset, AssetType, ChangeTrustAsset, LiquidityPoolConstantProductParameters,
    LiquidityPoolParameters, LiquidityPoolType, Price, TrustLineAsset,
};
use crate::xdr::codec::UNBOUNDED;
use crate::xdr::ledger_key::{
    config_setting_from_name, config_setting_name, ClaimableBalanceId, ClaimableBalanceIdType,
    ContractDataDurability, ContractEntryBodyType, LedgerEntryType, LedgerKey,
    LedgerKeyContractCode, LedgerKeyContractData, LedgerKeyData, LedgerKeyOffer,
    LedgerKeyTrustLine,
};
use crate::xdr::scval::{
    ContractExecutable, ContractExecutableType, Int128Parts, Int256Parts, ScAddress,
    ScAddressType, ScContractInstance, ScError, ScErrorType, ScMapEntry, ScNonceKey, ScVal,
    ScValType, UInt128Parts, UInt256Parts,
};

use super::reader::TxRepReader;
use super::writer::{child, TxRepWriter};
use super::{read_optional_array, write_optional_array, TxRepCodec};

impl TxRepCodec for PublicKey {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(path, self.account_id());
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.parsed(path, PublicKey::from_account_id)
    }
}

impl TxRepCodec for MuxedAccount {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(path, self.address());
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.parsed(path, MuxedAccount::from_address)
    }
}

impl TxRepCodec for SignerKey {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(path, self.to_strkey());
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.parsed(path, SignerKey::from_strkey)
    }
}

impl TxRepCodec for Signer {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.key.write_txrep(w, &child(path, "key"));
        w.line(&child(path, "weight"), self.weight);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(Signer {
            key: SignerKey::read_txrep(r, &child(path, "key"))?,
            weight: r.number(&child(path, "weight"))?,
        })
    }
}

impl TxRepCodec for DecoratedSignature {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.hex(&child(path, "hint"), &self.hint);
        w.hex(&child(path, "signature"), &self.signature);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(DecoratedSignature {
            hint: r.hex_fixed(&child(path, "hint"))?,
            signature: r.hex(&child(path, "signature"))?,
        })
    }
}

impl TxRepCodec for Asset {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        if !self.code_matches_type() {
            w.fail(path, "alphanum12 asset code has 4 characters or fewer");
        }
        w.line(path, self.canonical());
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.parsed(path, Asset::from_canonical)
    }
}

/// `XLM`, `CODE:ISSUER`, or the 64-char hex pool id of a pool share
impl TxRepCodec for TrustLineAsset {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            TrustLineAsset::Native => w.line(path, "XLM"),
            TrustLineAsset::CreditAlphanum4(a) => {
                Asset::CreditAlphanum4(a.clone()).write_txrep(w, path)
            }
            TrustLineAsset::CreditAlphanum12(a) => {
                Asset::CreditAlphanum12(a.clone()).write_txrep(w, path)
            }
            TrustLineAsset::PoolShare(pool_id) => w.hex(path, pool_id),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        r.parsed(path, |value| {
            if value.len() == 64 && !value.contains(':') {
                let mut pool_id = [0u8; 32];
                hex::decode_to_slice(value, &mut pool_id)
                    .map_err(|e| WasmStellarError::InvalidArgument(e.to_string()))?;
                return Ok(TrustLineAsset::PoolShare(pool_id));
            }
            Ok(Asset::from_canonical(value)?.into())
        })
    }
}

/// Classic lines are a single value; pool shares expand into their parameters
impl TxRepCodec for ChangeTrustAsset {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            ChangeTrustAsset::Native => Asset::Native.write_txrep(w, path),
            ChangeTrustAsset::CreditAlphanum4(a) => {
                Asset::CreditAlphanum4(a.clone()).write_txrep(w, path)
            }
            ChangeTrustAsset::CreditAlphanum12(a) => {
                Asset::CreditAlphanum12(a.clone()).write_txrep(w, path)
            }
            ChangeTrustAsset::PoolShare(LiquidityPoolParameters::ConstantProduct(params)) => {
                w.line(&child(path, "type"), AssetType::PoolShare.name());
                let pool = child(path, "liquidityPool");
                w.line(&child(&pool, "type"), LiquidityPoolType::ConstantProduct.name());
                let cp = child(&pool, "constantProduct");
                params.asset_a.write_txrep(w, &child(&cp, "assetA"));
                params.asset_b.write_txrep(w, &child(&cp, "assetB"));
                w.line(&child(&cp, "fee"), params.fee);
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        let type_path = child(path, "type");
        if r.peek_path() != Some(type_path.as_str()) {
            return Ok(Asset::read_txrep(r, path)?.into());
        }
        let asset_type = r.named(&type_path, AssetType::from_name)?;
        if asset_type != AssetType::PoolShare {
            return Err(WasmStellarError::txrep(
                &type_path,
                "only pool shares use the expanded form",
            ));
        }
        let pool = child(path, "liquidityPool");
        match r.named(&child(&pool, "type"), LiquidityPoolType::from_name)? {
            LiquidityPoolType::ConstantProduct => {
                let cp = child(&pool, "constantProduct");
                Ok(ChangeTrustAsset::PoolShare(
                    LiquidityPoolParameters::ConstantProduct(
                        LiquidityPoolConstantProductParameters {
                            asset_a: Asset::read_txrep(r, &child(&cp, "assetA"))?,
                            asset_b: Asset::read_txrep(r, &child(&cp, "assetB"))?,
                            fee: r.number(&child(&cp, "fee"))?,
                        },
                    ),
                ))
            }
        }
    }
}

impl TxRepCodec for Price {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "n"), self.n);
        w.line(&child(path, "d"), self.d);
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(Price {
            n: r.number(&child(path, "n"))?,
            d: r.number(&child(path, "d"))?,
        })
    }
}

impl TxRepCodec for ClaimableBalanceId {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            ClaimableBalanceId::V0(hash) => {
                w.line(&child(path, "type"), ClaimableBalanceIdType::V0.name());
                w.hex(&child(path, "v0"), hash);
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        match r.named(&child(path, "type"), ClaimableBalanceIdType::from_name)? {
            ClaimableBalanceIdType::V0 => Ok(ClaimableBalanceId::V0(r.hex_fixed(&child(path, "v0"))?)),
        }
    }
}

impl TxRepCodec for LedgerKey {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.entry_type().name());
        match self {
            LedgerKey::Account(account_id) => {
                account_id.write_txrep(w, &child(path, "account.accountID"))
            }
            LedgerKey::Trustline(key) => {
                let p = child(path, "trustLine");
                key.account_id.write_txrep(w, &child(&p, "accountID"));
                key.asset.write_txrep(w, &child(&p, "asset"));
            }
            LedgerKey::Offer(key) => {
                let p = child(path, "offer");
                key.seller_id.write_txrep(w, &child(&p, "sellerID"));
                w.line(&child(&p, "offerID"), key.offer_id);
            }
            LedgerKey::Data(key) => {
                let p = child(path, "data");
                key.account_id.write_txrep(w, &child(&p, "accountID"));
                w.string(&child(&p, "dataName"), &key.data_name);
            }
            LedgerKey::ClaimableBalance(id) => {
                id.write_txrep(w, &child(path, "claimableBalance.balanceID"))
            }
            LedgerKey::LiquidityPool(pool_id) => {
                w.hex(&child(path, "liquidityPool.liquidityPoolID"), pool_id)
            }
            LedgerKey::ContractData(key) => {
                let p = child(path, "contractData");
                key.contract.write_txrep(w, &child(&p, "contract"));
                key.key.write_txrep(w, &child(&p, "key"));
                w.line(&child(&p, "durability"), key.durability.name());
                w.line(&child(&p, "bodyType"), key.body_type.name());
            }
            LedgerKey::ContractCode(key) => {
                let p = child(path, "contractCode");
                w.hex(&child(&p, "hash"), &key.hash);
                w.line(&child(&p, "bodyType"), key.body_type.name());
            }
            LedgerKey::ConfigSetting(id) => {
                let id_path = child(path, "configSetting.configSettingID");
                match config_setting_name(*id) {
                    Some(name) => w.line(&id_path, name),
                    None => w.line(&id_path, id),
                }
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), LedgerEntryType::from_name)? {
            LedgerEntryType::Account => {
                LedgerKey::Account(PublicKey::read_txrep(r, &child(path, "account.accountID"))?)
            }
            LedgerEntryType::Trustline => {
                let p = child(path, "trustLine");
                LedgerKey::Trustline(LedgerKeyTrustLine {
                    account_id: PublicKey::read_txrep(r, &child(&p, "accountID"))?,
                    asset: TrustLineAsset::read_txrep(r, &child(&p, "asset"))?,
                })
            }
            LedgerEntryType::Offer => {
                let p = child(path, "offer");
                LedgerKey::Offer(LedgerKeyOffer {
                    seller_id: PublicKey::read_txrep(r, &child(&p, "sellerID"))?,
                    offer_id: r.number(&child(&p, "offerID"))?,
                })
            }
            LedgerEntryType::Data => {
                let p = child(path, "data");
                LedgerKey::Data(LedgerKeyData {
                    account_id: PublicKey::read_txrep(r, &child(&p, "accountID"))?,
                    data_name: r.string(&child(&p, "dataName"))?,
                })
            }
            LedgerEntryType::ClaimableBalance => LedgerKey::ClaimableBalance(
                ClaimableBalanceId::read_txrep(r, &child(path, "claimableBalance.balanceID"))?,
            ),
            LedgerEntryType::LiquidityPool => LedgerKey::LiquidityPool(
                r.hex_fixed(&child(path, "liquidityPool.liquidityPoolID"))?,
            ),
            LedgerEntryType::ContractData => {
                let p = child(path, "contractData");
                LedgerKey::ContractData(LedgerKeyContractData {
                    contract: ScAddress::read_txrep(r, &child(&p, "contract"))?,
                    key: ScVal::read_txrep(r, &child(&p, "key"))?,
                    durability: r.named(
                        &child(&p, "durability"),
                        ContractDataDurability::from_name,
                    )?,
                    body_type: r.named(&child(&p, "bodyType"), ContractEntryBodyType::from_name)?,
                })
            }
            LedgerEntryType::ContractCode => {
                let p = child(path, "contractCode");
                LedgerKey::ContractCode(LedgerKeyContractCode {
                    hash: r.hex_fixed(&child(&p, "hash"))?,
                    body_type: r.named(&child(&p, "bodyType"), ContractEntryBodyType::from_name)?,
                })
            }
            LedgerEntryType::ConfigSetting => LedgerKey::ConfigSetting(r.named(
                &child(path, "configSetting.configSettingID"),
                config_setting_from_name,
            )?),
        })
    }
}

/// Accounts as `G...`, contracts as `C...`
impl TxRepCodec for ScAddress {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.address_type().name());
        match self {
            ScAddress::Account(account_id) => account_id.write_txrep(w, &child(path, "accountId")),
            ScAddress::Contract(hash) => w.line(
                &child(path, "contractId"),
                strkey::encode(VersionByte::Contract, hash),
            ),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        match r.named(&child(path, "type"), ScAddressType::from_name)? {
            ScAddressType::Account => Ok(ScAddress::Account(PublicKey::read_txrep(
                r,
                &child(path, "accountId"),
            )?)),
            ScAddressType::Contract => Ok(ScAddress::Contract(r.parsed(
                &child(path, "contractId"),
                |value| strkey::decode_32(VersionByte::Contract, value),
            )?)),
        }
    }
}

impl TxRepCodec for ContractExecutable {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        match self {
            ContractExecutable::Wasm(hash) => {
                w.line(&child(path, "type"), ContractExecutableType::Wasm.name());
                w.hex(&child(path, "wasm_hash"), hash);
            }
            ContractExecutable::Token => {
                w.line(&child(path, "type"), ContractExecutableType::Token.name())
            }
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        match r.named(&child(path, "type"), ContractExecutableType::from_name)? {
            ContractExecutableType::Wasm => {
                Ok(ContractExecutable::Wasm(r.hex_fixed(&child(path, "wasm_hash"))?))
            }
            ContractExecutableType::Token => Ok(ContractExecutable::Token),
        }
    }
}

impl TxRepCodec for ScMapEntry {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        self.key.write_txrep(w, &child(path, "key"));
        self.val.write_txrep(w, &child(path, "val"));
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(ScMapEntry {
            key: ScVal::read_txrep(r, &child(path, "key"))?,
            val: ScVal::read_txrep(r, &child(path, "val"))?,
        })
    }
}

impl TxRepCodec for ScVal {
    fn write_txrep(&self, w: &mut TxRepWriter, path: &str) {
        w.line(&child(path, "type"), self.val_type().name());
        match self {
            ScVal::Bool(b) => w.line(&child(path, "b"), b),
            ScVal::Void | ScVal::LedgerKeyContractInstance => {}
            ScVal::Error(e) => {
                w.line(&child(path, "error.type"), e.error_type.name());
                w.line(&child(path, "error.code"), e.code);
            }
            ScVal::U32(v) => w.line(&child(path, "u32"), v),
            ScVal::I32(v) => w.line(&child(path, "i32"), v),
            ScVal::U64(v) => w.line(&child(path, "u64"), v),
            ScVal::I64(v) => w.line(&child(path, "i64"), v),
            ScVal::Timepoint(v) => w.line(&child(path, "timepoint"), v),
            ScVal::Duration(v) => w.line(&child(path, "duration"), v),
            ScVal::U128(parts) => {
                w.line(&child(path, "u128.hi"), parts.hi);
                w.line(&child(path, "u128.lo"), parts.lo);
            }
            ScVal::I128(parts) => {
                w.line(&child(path, "i128.hi"), parts.hi);
                w.line(&child(path, "i128.lo"), parts.lo);
            }
            ScVal::U256(parts) => {
                w.line(&child(path, "u256.hi_hi"), parts.hi_hi);
                w.line(&child(path, "u256.hi_lo"), parts.hi_lo);
                w.line(&child(path, "u256.lo_hi"), parts.lo_hi);
                w.line(&child(path, "u256.lo_lo"), parts.lo_lo);
            }
            ScVal::I256(parts) => {
                w.line(&child(path, "i256.hi_hi"), parts.hi_hi);
                w.line(&child(path, "i256.hi_lo"), parts.hi_lo);
                w.line(&child(path, "i256.lo_hi"), parts.lo_hi);
                w.line(&child(path, "i256.lo_lo"), parts.lo_lo);
            }
            ScVal::Bytes(bytes) => w.hex(&child(path, "bytes"), bytes),
            ScVal::String(s) => w.string(&child(path, "str"), s),
            ScVal::Symbol(s) => w.symbol(&child(path, "sym"), s),
            ScVal::Vec(items) => write_optional_array(w, &child(path, "vec"), items),
            ScVal::Map(entries) => write_optional_array(w, &child(path, "map"), entries),
            ScVal::Address(address) => address.write_txrep(w, &child(path, "address")),
            ScVal::ContractInstance(instance) => {
                let p = child(path, "instance");
                instance.executable.write_txrep(w, &child(&p, "executable"));
                write_optional_array(w, &child(&p, "storage"), &instance.storage);
            }
            ScVal::LedgerKeyNonce(key) => w.line(&child(path, "nonce_key.nonce"), key.nonce),
        }
    }

    fn read_txrep(r: &mut TxRepReader, path: &str) -> Result<Self, WasmStellarError> {
        Ok(match r.named(&child(path, "type"), ScValType::from_name)? {
            ScValType::Bool => ScVal::Bool(r.bool(&child(path, "b"))?),
            ScValType::Void => ScVal::Void,
            ScValType::Error => ScVal::Error(ScError {
                error_type: r.named(&child(path, "error.type"), ScErrorType::from_name)?,
                code: r.number(&child(path, "error.code"))?,
            }),
            ScValType::U32 => ScVal::U32(r.number(&child(path, "u32"))?),
            ScValType::I32 => ScVal::I32(r.number(&child(path, "i32"))?),
            ScValType::U64 => ScVal::U64(r.number(&child(path, "u64"))?),
            ScValType::I64 => ScVal::I64(r.number(&child(path, "i64"))?),
            ScValType::Timepoint => ScVal::Timepoint(r.number(&child(path, "timepoint"))?),
            ScValType::Duration => ScVal::Duration(r.number(&child(path, "duration"))?),
            ScValType::U128 => ScVal::U128(UInt128Parts {
                hi: r.number(&child(path, "u128.hi"))?,
                lo: r.number(&child(path, "u128.lo"))?,
            }),
            ScValType::I128 => ScVal::I128(Int128Parts {
                hi: r.number(&child(path, "i128.hi"))?,
                lo: r.number(&child(path, "i128.lo"))?,
            }),
            ScValType::U256 => ScVal::U256(UInt256Parts {
                hi_hi: r.number(&child(path, "u256.hi_hi"))?,
                hi_lo: r.number(&child(path, "u256.hi_lo"))?,
                lo_hi: r.number(&child(path, "u256.lo_hi"))?,
                lo_lo: r.number(&child(path, "u256.lo_lo"))?,
            }),
            ScValType::I256 => ScVal::I256(Int256Parts {
                hi_hi: r.number(&child(path, "i256.hi_hi"))?,
                hi_lo: r.number(&child(path, "i256.hi_lo"))?,
                lo_hi: r.number(&child(path, "i256.lo_hi"))?,
                lo_lo: r.number(&child(path, "i256.lo_lo"))?,
            }),
            ScValType::Bytes => ScVal::Bytes(r.hex(&child(path, "bytes"))?),
            ScValType::String => ScVal::String(r.string(&child(path, "str"))?),
            ScValType::Symbol => ScVal::Symbol(r.string(&child(path, "sym"))?),
            ScValType::Vec => ScVal::Vec(read_optional_array(r, &child(path, "vec"), UNBOUNDED)?),
            ScValType::Map => ScVal::Map(read_optional_array(r, &child(path, "map"), UNBOUNDED)?),
            ScValType::Address => ScVal::Address(ScAddress::read_txrep(r, &child(path, "address"))?),
            ScValType::ContractInstance => {
                let p = child(path, "instance");
                ScVal::ContractInstance(ScContractInstance {
                    executable: ContractExecutable::read_txrep(r, &child(&p, "executable"))?,
                    storage: read_optional_array(r, &child(&p, "storage"), UNBOUNDED)?,
                })
            }
            ScValType::LedgerKeyContractInstance => ScVal::LedgerKeyContractInstance,
            ScValType::LedgerKeyNonce => ScVal::LedgerKeyNonce(ScNonceKey {
                nonce: r.number(&child(path, "nonce_key.nonce"))?,
            }),
        })
    }
}
