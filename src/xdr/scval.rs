//! Smart-contract values
//!
//! `ScVal` is a single recursive sum type; vectors and maps are optional on the
//! wire, so an absent vec is distinct from a present empty one.

use crate::error::DecodeError;
use crate::xdr::account::{AccountId, Hash, PublicKey};
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter, UNBOUNDED};

pub const SCSYMBOL_LIMIT: u32 = 32;

xdr_enum! {
    pub enum ScValType {
        Bool = 0 => "SCV_BOOL",
        Void = 1 => "SCV_VOID",
        Error = 2 => "SCV_ERROR",
        U32 = 3 => "SCV_U32",
        I32 = 4 => "SCV_I32",
        U64 = 5 => "SCV_U64",
        I64 = 6 => "SCV_I64",
        Timepoint = 7 => "SCV_TIMEPOINT",
        Duration = 8 => "SCV_DURATION",
        U128 = 9 => "SCV_U128",
        I128 = 10 => "SCV_I128",
        U256 = 11 => "SCV_U256",
        I256 = 12 => "SCV_I256",
        Bytes = 13 => "SCV_BYTES",
        String = 14 => "SCV_STRING",
        Symbol = 15 => "SCV_SYMBOL",
        Vec = 16 => "SCV_VEC",
        Map = 17 => "SCV_MAP",
        Address = 18 => "SCV_ADDRESS",
        ContractInstance = 19 => "SCV_CONTRACT_INSTANCE",
        LedgerKeyContractInstance = 20 => "SCV_LEDGER_KEY_CONTRACT_INSTANCE",
        LedgerKeyNonce = 21 => "SCV_LEDGER_KEY_NONCE",
    }
}

xdr_enum! {
    pub enum ScErrorType {
        Contract = 0 => "SCE_CONTRACT",
        WasmVm = 1 => "SCE_WASM_VM",
        Context = 2 => "SCE_CONTEXT",
        Storage = 3 => "SCE_STORAGE",
        Object = 4 => "SCE_OBJECT",
        Crypto = 5 => "SCE_CRYPTO",
        Events = 6 => "SCE_EVENTS",
        Budget = 7 => "SCE_BUDGET",
        Value = 8 => "SCE_VALUE",
        Auth = 9 => "SCE_AUTH",
    }
}

xdr_enum! {
    pub enum ScAddressType {
        Account = 0 => "SC_ADDRESS_TYPE_ACCOUNT",
        Contract = 1 => "SC_ADDRESS_TYPE_CONTRACT",
    }
}

xdr_enum! {
    pub enum ContractExecutableType {
        Wasm = 0 => "CONTRACT_EXECUTABLE_WASM",
        Token = 1 => "CONTRACT_EXECUTABLE_TOKEN",
    }
}

/// Contract error: category plus raw code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScError {
    pub error_type: ScErrorType,
    pub code: i32,
}

impl XdrCodec for ScError {
    fn encode(&self, w: &mut XdrWriter) {
        self.error_type.encode(w);
        w.write_i32(self.code);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(ScError {
            error_type: ScErrorType::decode(r)?,
            code: r.read_i32()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScAddress {
    Account(AccountId),
    Contract(Hash),
}

impl ScAddress {
    pub fn address_type(&self) -> ScAddressType {
        match self {
            ScAddress::Account(_) => ScAddressType::Account,
            ScAddress::Contract(_) => ScAddressType::Contract,
        }
    }
}

impl XdrCodec for ScAddress {
    fn encode(&self, w: &mut XdrWriter) {
        self.address_type().encode(w);
        match self {
            ScAddress::Account(account) => account.encode(w),
            ScAddress::Contract(hash) => w.write_fixed(hash),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match ScAddressType::decode(r)? {
            ScAddressType::Account => ScAddress::Account(PublicKey::decode(r)?),
            ScAddressType::Contract => ScAddress::Contract(r.read_fixed()?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractExecutable {
    Wasm(Hash),
    Token,
}

impl XdrCodec for ContractExecutable {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            ContractExecutable::Wasm(hash) => {
                ContractExecutableType::Wasm.encode(w);
                w.write_fixed(hash);
            }
            ContractExecutable::Token => ContractExecutableType::Token.encode(w),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match ContractExecutableType::decode(r)? {
            ContractExecutableType::Wasm => ContractExecutable::Wasm(r.read_fixed()?),
            ContractExecutableType::Token => ContractExecutable::Token,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt128Parts {
    pub hi: u64,
    pub lo: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int128Parts {
    pub hi: i64,
    pub lo: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UInt256Parts {
    pub hi_hi: u64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int256Parts {
    pub hi_hi: i64,
    pub hi_lo: u64,
    pub lo_hi: u64,
    pub lo_lo: u64,
}

impl From<u128> for UInt128Parts {
    fn from(value: u128) -> Self {
        UInt128Parts {
            hi: (value >> 64) as u64,
            lo: value as u64,
        }
    }
}

impl From<UInt128Parts> for u128 {
    fn from(parts: UInt128Parts) -> Self {
        ((parts.hi as u128) << 64) | parts.lo as u128
    }
}

impl From<i128> for Int128Parts {
    fn from(value: i128) -> Self {
        Int128Parts {
            hi: (value >> 64) as i64,
            lo: value as u64,
        }
    }
}

impl From<Int128Parts> for i128 {
    fn from(parts: Int128Parts) -> Self {
        ((parts.hi as i128) << 64) | parts.lo as i128
    }
}

impl XdrCodec for UInt128Parts {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u64(self.hi);
        w.write_u64(self.lo);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(UInt128Parts {
            hi: r.read_u64()?,
            lo: r.read_u64()?,
        })
    }
}

impl XdrCodec for Int128Parts {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i64(self.hi);
        w.write_u64(self.lo);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Int128Parts {
            hi: r.read_i64()?,
            lo: r.read_u64()?,
        })
    }
}

impl XdrCodec for UInt256Parts {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_u64(self.hi_hi);
        w.write_u64(self.hi_lo);
        w.write_u64(self.lo_hi);
        w.write_u64(self.lo_lo);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(UInt256Parts {
            hi_hi: r.read_u64()?,
            hi_lo: r.read_u64()?,
            lo_hi: r.read_u64()?,
            lo_lo: r.read_u64()?,
        })
    }
}

impl XdrCodec for Int256Parts {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i64(self.hi_hi);
        w.write_u64(self.hi_lo);
        w.write_u64(self.lo_hi);
        w.write_u64(self.lo_lo);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Int256Parts {
            hi_hi: r.read_i64()?,
            hi_lo: r.read_u64()?,
            lo_hi: r.read_u64()?,
            lo_lo: r.read_u64()?,
        })
    }
}

/// Map entry; keys are neither sorted nor deduplicated here
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScMapEntry {
    pub key: ScVal,
    pub val: ScVal,
}

impl XdrCodec for ScMapEntry {
    fn encode(&self, w: &mut XdrWriter) {
        self.key.encode(w);
        self.val.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(ScMapEntry {
            key: ScVal::decode(r)?,
            val: ScVal::decode(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScNonceKey {
    pub nonce: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScContractInstance {
    pub executable: ContractExecutable,
    pub storage: Option<Vec<ScMapEntry>>,
}

impl XdrCodec for ScContractInstance {
    fn encode(&self, w: &mut XdrWriter) {
        self.executable.encode(w);
        write_optional_array(w, &self.storage);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(ScContractInstance {
            executable: ContractExecutable::decode(r)?,
            storage: read_optional_array(r)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScVal {
    Bool(bool),
    Void,
    Error(ScError),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    Timepoint(u64),
    Duration(u64),
    U128(UInt128Parts),
    I128(Int128Parts),
    U256(UInt256Parts),
    I256(Int256Parts),
    Bytes(Vec<u8>),
    String(String),
    Symbol(String),
    Vec(Option<Vec<ScVal>>),
    Map(Option<Vec<ScMapEntry>>),
    Address(ScAddress),
    ContractInstance(ScContractInstance),
    LedgerKeyContractInstance,
    LedgerKeyNonce(ScNonceKey),
}

impl ScVal {
    pub fn val_type(&self) -> ScValType {
        match self {
            ScVal::Bool(_) => ScValType::Bool,
            ScVal::Void => ScValType::Void,
            ScVal::Error(_) => ScValType::Error,
            ScVal::U32(_) => ScValType::U32,
            ScVal::I32(_) => ScValType::I32,
            ScVal::U64(_) => ScValType::U64,
            ScVal::I64(_) => ScValType::I64,
            ScVal::Timepoint(_) => ScValType::Timepoint,
            ScVal::Duration(_) => ScValType::Duration,
            ScVal::U128(_) => ScValType::U128,
            ScVal::I128(_) => ScValType::I128,
            ScVal::U256(_) => ScValType::U256,
            ScVal::I256(_) => ScValType::I256,
            ScVal::Bytes(_) => ScValType::Bytes,
            ScVal::String(_) => ScValType::String,
            ScVal::Symbol(_) => ScValType::Symbol,
            ScVal::Vec(_) => ScValType::Vec,
            ScVal::Map(_) => ScValType::Map,
            ScVal::Address(_) => ScValType::Address,
            ScVal::ContractInstance(_) => ScValType::ContractInstance,
            ScVal::LedgerKeyContractInstance => ScValType::LedgerKeyContractInstance,
            ScVal::LedgerKeyNonce(_) => ScValType::LedgerKeyNonce,
        }
    }

    pub fn symbol(name: &str) -> Self {
        ScVal::Symbol(name.to_string())
    }
}

impl XdrCodec for ScVal {
    fn encode(&self, w: &mut XdrWriter) {
        self.val_type().encode(w);
        match self {
            ScVal::Bool(b) => w.write_bool(*b),
            ScVal::Void | ScVal::LedgerKeyContractInstance => {}
            ScVal::Error(e) => e.encode(w),
            ScVal::U32(v) => w.write_u32(*v),
            ScVal::I32(v) => w.write_i32(*v),
            ScVal::U64(v) | ScVal::Timepoint(v) | ScVal::Duration(v) => w.write_u64(*v),
            ScVal::I64(v) => w.write_i64(*v),
            ScVal::U128(parts) => parts.encode(w),
            ScVal::I128(parts) => parts.encode(w),
            ScVal::U256(parts) => parts.encode(w),
            ScVal::I256(parts) => parts.encode(w),
            ScVal::Bytes(bytes) => w.write_var_opaque(bytes),
            ScVal::String(s) | ScVal::Symbol(s) => w.write_string(s),
            ScVal::Vec(items) => write_optional_array(w, items),
            ScVal::Map(entries) => write_optional_array(w, entries),
            ScVal::Address(address) => address.encode(w),
            ScVal::ContractInstance(instance) => instance.encode(w),
            ScVal::LedgerKeyNonce(key) => w.write_i64(key.nonce),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match ScValType::decode(r)? {
            ScValType::Bool => ScVal::Bool(r.read_bool()?),
            ScValType::Void => ScVal::Void,
            ScValType::Error => ScVal::Error(ScError::decode(r)?),
            ScValType::U32 => ScVal::U32(r.read_u32()?),
            ScValType::I32 => ScVal::I32(r.read_i32()?),
            ScValType::U64 => ScVal::U64(r.read_u64()?),
            ScValType::I64 => ScVal::I64(r.read_i64()?),
            ScValType::Timepoint => ScVal::Timepoint(r.read_u64()?),
            ScValType::Duration => ScVal::Duration(r.read_u64()?),
            ScValType::U128 => ScVal::U128(UInt128Parts::decode(r)?),
            ScValType::I128 => ScVal::I128(Int128Parts::decode(r)?),
            ScValType::U256 => ScVal::U256(UInt256Parts::decode(r)?),
            ScValType::I256 => ScVal::I256(Int256Parts::decode(r)?),
            ScValType::Bytes => ScVal::Bytes(r.read_var_opaque(UNBOUNDED)?),
            ScValType::String => ScVal::String(r.read_string(UNBOUNDED)?),
            ScValType::Symbol => ScVal::Symbol(r.read_string(SCSYMBOL_LIMIT)?),
            ScValType::Vec => ScVal::Vec(read_optional_array(r)?),
            ScValType::Map => ScVal::Map(read_optional_array(r)?),
            ScValType::Address => ScVal::Address(ScAddress::decode(r)?),
            ScValType::ContractInstance => {
                ScVal::ContractInstance(ScContractInstance::decode(r)?)
            }
            ScValType::LedgerKeyContractInstance => ScVal::LedgerKeyContractInstance,
            ScValType::LedgerKeyNonce => ScVal::LedgerKeyNonce(ScNonceKey {
                nonce: r.read_i64()?,
            }),
        })
    }
}

fn write_optional_array<T: XdrCodec>(w: &mut XdrWriter, items: &Option<Vec<T>>) {
    match items {
        Some(items) => {
            w.write_u32(1);
            w.write_array(items);
        }
        None => w.write_u32(0),
    }
}

fn read_optional_array<T: XdrCodec>(
    r: &mut XdrReader<'_>,
) -> Result<Option<Vec<T>>, DecodeError> {
    if r.read_presence()? {
        Ok(Some(r.read_array(UNBOUNDED)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WasmStellarError;

    fn sample_values() -> Vec<ScVal> {
        let account = PublicKey::Ed25519([7; 32]);
        vec![
            ScVal::Bool(true),
            ScVal::Void,
            ScVal::Error(ScError {
                error_type: ScErrorType::Contract,
                code: 12,
            }),
            ScVal::U32(u32::MAX),
            ScVal::I32(-5),
            ScVal::U64(u64::MAX),
            ScVal::I64(i64::MIN),
            ScVal::Timepoint(1_700_000_000),
            ScVal::Duration(60),
            ScVal::U128(UInt128Parts::from(u128::MAX - 3)),
            ScVal::I128(Int128Parts::from(-42i128)),
            ScVal::U256(UInt256Parts {
                hi_hi: 1,
                hi_lo: 2,
                lo_hi: 3,
                lo_lo: 4,
            }),
            ScVal::I256(Int256Parts {
                hi_hi: -1,
                hi_lo: 2,
                lo_hi: 3,
                lo_lo: 4,
            }),
            ScVal::Bytes(vec![1, 2, 3]),
            ScVal::String("hello world".to_string()),
            ScVal::symbol("transfer"),
            ScVal::Vec(None),
            ScVal::Vec(Some(vec![])),
            ScVal::Vec(Some(vec![ScVal::U32(1), ScVal::Vec(Some(vec![ScVal::Void]))])),
            ScVal::Map(Some(vec![ScMapEntry {
                key: ScVal::symbol("a"),
                val: ScVal::Map(None),
            }])),
            ScVal::Address(ScAddress::Account(account)),
            ScVal::Address(ScAddress::Contract([9; 32])),
            ScVal::ContractInstance(ScContractInstance {
                executable: ContractExecutable::Wasm([3; 32]),
                storage: Some(vec![]),
            }),
            ScVal::ContractInstance(ScContractInstance {
                executable: ContractExecutable::Token,
                storage: None,
            }),
            ScVal::LedgerKeyContractInstance,
            ScVal::LedgerKeyNonce(ScNonceKey { nonce: -9 }),
        ]
    }

    #[test]
    fn test_every_variant_roundtrips() {
        for value in sample_values() {
            let bytes = value.to_xdr();
            assert_eq!(ScVal::from_xdr(&bytes).unwrap(), value, "{:?}", value);
        }
    }

    #[test]
    fn test_absent_vec_differs_from_empty() {
        assert_eq!(ScVal::Vec(None).to_xdr(), vec![0, 0, 0, 16, 0, 0, 0, 0]);
        assert_eq!(
            ScVal::Vec(Some(vec![])).to_xdr(),
            vec![0, 0, 0, 16, 0, 0, 0, 1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_unknown_type_is_error() {
        let err = ScVal::from_xdr(&[0, 0, 0, 99]).unwrap_err();
        assert_eq!(
            err,
            WasmStellarError::Decode(DecodeError::UnknownDiscriminant {
                type_name: "ScValType",
                value: 99
            })
        );
    }

    #[test]
    fn test_map_keeps_duplicate_keys() {
        let entry = ScMapEntry {
            key: ScVal::U32(1),
            val: ScVal::Void,
        };
        let map = ScVal::Map(Some(vec![entry.clone(), entry]));
        assert_eq!(ScVal::from_xdr(&map.to_xdr()).unwrap(), map);
    }

    #[test]
    fn test_i128_parts_conversion() {
        let parts = Int128Parts::from(-1i128);
        assert_eq!(parts.hi, -1);
        assert_eq!(parts.lo, u64::MAX);
        assert_eq!(i128::from(parts), -1);
    }
}
