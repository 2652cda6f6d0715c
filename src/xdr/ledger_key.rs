//! Ledger keys
//!
//! `LedgerKey` is keyed by ledger entry type, which grows with the protocol.
//! Unknown entry types decode as an account key, and unknown contract
//! durability / body types fall back to their last known variant. Each
//! fallback logs a warning so it can be told apart from a real match.

use crate::error::DecodeError;
use crate::xdr::account::{AccountId, Hash, PublicKey};
use crate::xdr::asset::TrustLineAsset;
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter};
use crate::xdr::scval::{ScAddress, ScVal};
use tracing::warn;

pub const DATA_NAME_LIMIT: u32 = 64;

xdr_enum! {
    pub enum LedgerEntryType {
        Account = 0 => "ACCOUNT",
        Trustline = 1 => "TRUSTLINE",
        Offer = 2 => "OFFER",
        Data = 3 => "DATA",
        ClaimableBalance = 4 => "CLAIMABLE_BALANCE",
        LiquidityPool = 5 => "LIQUIDITY_POOL",
        ContractData = 6 => "CONTRACT_DATA",
        ContractCode = 7 => "CONTRACT_CODE",
        ConfigSetting = 8 => "CONFIG_SETTING",
    }
}

xdr_enum! {
    pub enum ContractDataDurability {
        Temporary = 0 => "TEMPORARY",
        Persistent = 1 => "PERSISTENT",
    }
}

xdr_enum! {
    pub enum ContractEntryBodyType {
        DataEntry = 0 => "DATA_ENTRY",
        ExpirationExtension = 1 => "EXPIRATION_EXTENSION",
    }
}

xdr_enum! {
    pub enum ClaimableBalanceIdType {
        V0 = 0 => "CLAIMABLE_BALANCE_ID_TYPE_V0",
    }
}

/// Config setting ids; the wire value stays a raw `i32` so newer ids survive a round trip
pub const CONFIG_SETTING_NAMES: &[(i32, &str)] = &[
    (0, "CONFIG_SETTING_CONTRACT_MAX_SIZE_BYTES"),
    (1, "CONFIG_SETTING_CONTRACT_COMPUTE_V0"),
    (2, "CONFIG_SETTING_CONTRACT_LEDGER_COST_V0"),
    (3, "CONFIG_SETTING_CONTRACT_HISTORICAL_DATA_V0"),
    (4, "CONFIG_SETTING_CONTRACT_META_DATA_V0"),
    (5, "CONFIG_SETTING_CONTRACT_BANDWIDTH_V0"),
    (6, "CONFIG_SETTING_CONTRACT_COST_PARAMS_CPU_INSTRUCTIONS"),
    (7, "CONFIG_SETTING_CONTRACT_COST_PARAMS_MEMORY_BYTES"),
    (8, "CONFIG_SETTING_CONTRACT_DATA_KEY_SIZE_BYTES"),
    (9, "CONFIG_SETTING_CONTRACT_DATA_ENTRY_SIZE_BYTES"),
    (10, "CONFIG_SETTING_STATE_EXPIRATION"),
    (11, "CONFIG_SETTING_CONTRACT_EXECUTION_LANES"),
    (12, "CONFIG_SETTING_BUCKETLIST_SIZE_WINDOW"),
];

pub fn config_setting_name(id: i32) -> Option<&'static str> {
    CONFIG_SETTING_NAMES
        .iter()
        .find(|(value, _)| *value == id)
        .map(|(_, name)| *name)
}

/// Accepts a known name or a decimal id
pub fn config_setting_from_name(name: &str) -> Option<i32> {
    CONFIG_SETTING_NAMES
        .iter()
        .find(|(_, label)| *label == name)
        .map(|(value, _)| *value)
        .or_else(|| name.parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimableBalanceId {
    V0(Hash),
}

impl XdrCodec for ClaimableBalanceId {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            ClaimableBalanceId::V0(hash) => {
                ClaimableBalanceIdType::V0.encode(w);
                w.write_fixed(hash);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match ClaimableBalanceIdType::decode(r)? {
            ClaimableBalanceIdType::V0 => Ok(ClaimableBalanceId::V0(r.read_fixed()?)),
        }
    }
}

fn decode_durability(r: &mut XdrReader<'_>) -> Result<ContractDataDurability, DecodeError> {
    let value = r.read_i32()?;
    Ok(ContractDataDurability::from_discriminant(value).unwrap_or_else(|| {
        warn!(
            union = "ContractDataDurability",
            discriminant = value,
            "unknown discriminant, falling back to PERSISTENT"
        );
        ContractDataDurability::Persistent
    }))
}

fn decode_body_type(r: &mut XdrReader<'_>) -> Result<ContractEntryBodyType, DecodeError> {
    let value = r.read_i32()?;
    Ok(ContractEntryBodyType::from_discriminant(value).unwrap_or_else(|| {
        warn!(
            union = "ContractEntryBodyType",
            discriminant = value,
            "unknown discriminant, falling back to EXPIRATION_EXTENSION"
        );
        ContractEntryBodyType::ExpirationExtension
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKeyTrustLine {
    pub account_id: AccountId,
    pub asset: TrustLineAsset,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKeyOffer {
    pub seller_id: AccountId,
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKeyData {
    pub account_id: AccountId,
    pub data_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKeyContractData {
    pub contract: ScAddress,
    pub key: ScVal,
    pub durability: ContractDataDurability,
    pub body_type: ContractEntryBodyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerKeyContractCode {
    pub hash: Hash,
    pub body_type: ContractEntryBodyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LedgerKey {
    Account(AccountId),
    Trustline(LedgerKeyTrustLine),
    Offer(LedgerKeyOffer),
    Data(LedgerKeyData),
    ClaimableBalance(ClaimableBalanceId),
    LiquidityPool(Hash),
    ContractData(LedgerKeyContractData),
    ContractCode(LedgerKeyContractCode),
    ConfigSetting(i32),
}

impl LedgerKey {
    pub fn entry_type(&self) -> LedgerEntryType {
        match self {
            LedgerKey::Account(_) => LedgerEntryType::Account,
            LedgerKey::Trustline(_) => LedgerEntryType::Trustline,
            LedgerKey::Offer(_) => LedgerEntryType::Offer,
            LedgerKey::Data(_) => LedgerEntryType::Data,
            LedgerKey::ClaimableBalance(_) => LedgerEntryType::ClaimableBalance,
            LedgerKey::LiquidityPool(_) => LedgerEntryType::LiquidityPool,
            LedgerKey::ContractData(_) => LedgerEntryType::ContractData,
            LedgerKey::ContractCode(_) => LedgerEntryType::ContractCode,
            LedgerKey::ConfigSetting(_) => LedgerEntryType::ConfigSetting,
        }
    }
}

impl XdrCodec for LedgerKey {
    fn encode(&self, w: &mut XdrWriter) {
        self.entry_type().encode(w);
        match self {
            LedgerKey::Account(account_id) => account_id.encode(w),
            LedgerKey::Trustline(key) => {
                key.account_id.encode(w);
                key.asset.encode(w);
            }
            LedgerKey::Offer(key) => {
                key.seller_id.encode(w);
                w.write_i64(key.offer_id);
            }
            LedgerKey::Data(key) => {
                key.account_id.encode(w);
                w.write_string(&key.data_name);
            }
            LedgerKey::ClaimableBalance(id) => id.encode(w),
            LedgerKey::LiquidityPool(pool_id) => w.write_fixed(pool_id),
            LedgerKey::ContractData(key) => {
                key.contract.encode(w);
                key.key.encode(w);
                key.durability.encode(w);
                key.body_type.encode(w);
            }
            LedgerKey::ContractCode(key) => {
                w.write_fixed(&key.hash);
                key.body_type.encode(w);
            }
            LedgerKey::ConfigSetting(id) => w.write_i32(*id),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        let value = r.read_i32()?;
        let entry_type = LedgerEntryType::from_discriminant(value).unwrap_or_else(|| {
            warn!(
                union = "LedgerKey",
                discriminant = value,
                "unknown ledger entry type, decoding as ACCOUNT"
            );
            LedgerEntryType::Account
        });
        Ok(match entry_type {
            LedgerEntryType::Account => LedgerKey::Account(PublicKey::decode(r)?),
            LedgerEntryType::Trustline => LedgerKey::Trustline(LedgerKeyTrustLine {
                account_id: PublicKey::decode(r)?,
                asset: TrustLineAsset::decode(r)?,
            }),
            LedgerEntryType::Offer => LedgerKey::Offer(LedgerKeyOffer {
                seller_id: PublicKey::decode(r)?,
                offer_id: r.read_i64()?,
            }),
            LedgerEntryType::Data => LedgerKey::Data(LedgerKeyData {
                account_id: PublicKey::decode(r)?,
                data_name: r.read_string(DATA_NAME_LIMIT)?,
            }),
            LedgerEntryType::ClaimableBalance => {
                LedgerKey::ClaimableBalance(ClaimableBalanceId::decode(r)?)
            }
            LedgerEntryType::LiquidityPool => LedgerKey::LiquidityPool(r.read_fixed()?),
            LedgerEntryType::ContractData => LedgerKey::ContractData(LedgerKeyContractData {
                contract: ScAddress::decode(r)?,
                key: ScVal::decode(r)?,
                durability: decode_durability(r)?,
                body_type: decode_body_type(r)?,
            }),
            LedgerEntryType::ContractCode => LedgerKey::ContractCode(LedgerKeyContractCode {
                hash: r.read_fixed()?,
                body_type: decode_body_type(r)?,
            }),
            LedgerEntryType::ConfigSetting => LedgerKey::ConfigSetting(r.read_i32()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::asset::Asset;

    fn account() -> AccountId {
        PublicKey::Ed25519([5; 32])
    }

    #[test]
    fn test_every_variant_roundtrips() {
        let keys = vec![
            LedgerKey::Account(account()),
            LedgerKey::Trustline(LedgerKeyTrustLine {
                account_id: account(),
                asset: Asset::credit("USD", account()).unwrap().into(),
            }),
            LedgerKey::Trustline(LedgerKeyTrustLine {
                account_id: account(),
                asset: TrustLineAsset::PoolShare([1; 32]),
            }),
            LedgerKey::Offer(LedgerKeyOffer {
                seller_id: account(),
                offer_id: 42,
            }),
            LedgerKey::Data(LedgerKeyData {
                account_id: account(),
                data_name: "config".to_string(),
            }),
            LedgerKey::ClaimableBalance(ClaimableBalanceId::V0([2; 32])),
            LedgerKey::LiquidityPool([3; 32]),
            LedgerKey::ContractData(LedgerKeyContractData {
                contract: ScAddress::Contract([4; 32]),
                key: ScVal::LedgerKeyContractInstance,
                durability: ContractDataDurability::Temporary,
                body_type: ContractEntryBodyType::DataEntry,
            }),
            LedgerKey::ContractCode(LedgerKeyContractCode {
                hash: [6; 32],
                body_type: ContractEntryBodyType::ExpirationExtension,
            }),
            LedgerKey::ConfigSetting(10),
            LedgerKey::ConfigSetting(999),
        ];
        for key in keys {
            assert_eq!(LedgerKey::from_xdr(&key.to_xdr()).unwrap(), key);
        }
    }

    #[test]
    fn test_unknown_entry_type_falls_back_to_account() {
        let mut bytes = vec![0, 0, 0, 77];
        bytes.extend_from_slice(&account().to_xdr());
        assert_eq!(
            LedgerKey::from_xdr(&bytes).unwrap(),
            LedgerKey::Account(account())
        );
    }

    #[test]
    fn test_unknown_durability_and_body_type_fall_back() {
        let code = LedgerKey::ContractCode(LedgerKeyContractCode {
            hash: [6; 32],
            body_type: ContractEntryBodyType::DataEntry,
        });
        let mut bytes = code.to_xdr();
        let len = bytes.len();
        bytes[len - 1] = 9;
        match LedgerKey::from_xdr(&bytes).unwrap() {
            LedgerKey::ContractCode(key) => {
                assert_eq!(key.body_type, ContractEntryBodyType::ExpirationExtension)
            }
            other => panic!("unexpected key {:?}", other),
        }

        let data = LedgerKey::ContractData(LedgerKeyContractData {
            contract: ScAddress::Contract([4; 32]),
            key: ScVal::Void,
            durability: ContractDataDurability::Temporary,
            body_type: ContractEntryBodyType::DataEntry,
        });
        let mut bytes = data.to_xdr();
        let len = bytes.len();
        // durability sits just before the trailing body type
        bytes[len - 5] = 5;
        match LedgerKey::from_xdr(&bytes).unwrap() {
            LedgerKey::ContractData(key) => {
                assert_eq!(key.durability, ContractDataDurability::Persistent);
                assert_eq!(key.body_type, ContractEntryBodyType::DataEntry);
            }
            other => panic!("unexpected key {:?}", other),
        }
    }

    #[test]
    fn test_claimable_balance_id_is_closed() {
        assert!(ClaimableBalanceId::from_xdr(&[0, 0, 0, 1]).is_err());
    }

    #[test]
    fn test_config_setting_names() {
        assert_eq!(
            config_setting_name(10),
            Some("CONFIG_SETTING_STATE_EXPIRATION")
        );
        assert_eq!(config_setting_name(40), None);
        assert_eq!(
            config_setting_from_name("CONFIG_SETTING_CONTRACT_MAX_SIZE_BYTES"),
            Some(0)
        );
        assert_eq!(config_setting_from_name("17"), Some(17));
        assert_eq!(config_setting_from_name("nope"), None);
    }
}
