//! Assets, trustline assets, liquidity pool parameters and prices

use crate::error::{DecodeError, WasmStellarError};
use crate::xdr::account::{AccountId, Hash, PublicKey};
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter};

xdr_enum! {
    pub enum AssetType {
        Native = 0 => "ASSET_TYPE_NATIVE",
        CreditAlphanum4 = 1 => "ASSET_TYPE_CREDIT_ALPHANUM4",
        CreditAlphanum12 = 2 => "ASSET_TYPE_CREDIT_ALPHANUM12",
        PoolShare = 3 => "ASSET_TYPE_POOL_SHARE",
    }
}

xdr_enum! {
    pub enum LiquidityPoolType {
        ConstantProduct = 0 => "LIQUIDITY_POOL_CONSTANT_PRODUCT",
    }
}

/// Liquidity pool fee in basis points
pub const LIQUIDITY_POOL_FEE_V18: i32 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphaNum4 {
    pub asset_code: [u8; 4],
    pub issuer: AccountId,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphaNum12 {
    pub asset_code: [u8; 12],
    pub issuer: AccountId,
}

impl XdrCodec for AlphaNum4 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(&self.asset_code);
        self.issuer.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(AlphaNum4 {
            asset_code: r.read_fixed()?,
            issuer: PublicKey::decode(r)?,
        })
    }
}

impl XdrCodec for AlphaNum12 {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(&self.asset_code);
        self.issuer.encode(w);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(AlphaNum12 {
            asset_code: r.read_fixed()?,
            issuer: PublicKey::decode(r)?,
        })
    }
}

/// Asset code with zero padding stripped
pub fn code_to_string(code: &[u8]) -> String {
    let end = code.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&code[..end]).into_owned()
}

/// Alphanum12 codes need more than four characters to stay alphanum12 in `CODE:ISSUER` form
fn is_short_alphanum12(code: &[u8; 12]) -> bool {
    code_to_string(code).len() <= 4
}

fn pad_code<const N: usize>(code: &str) -> [u8; N] {
    let mut out = [0u8; N];
    out[..code.len()].copy_from_slice(code.as_bytes());
    out
}

fn validate_code(code: &str) -> Result<(), WasmStellarError> {
    if code.is_empty() || code.len() > 12 {
        return Err(WasmStellarError::InvalidArgument(format!(
            "Asset code must be 1-12 characters, got {}",
            code.len()
        )));
    }
    if !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(WasmStellarError::InvalidArgument(format!(
            "Asset code must be alphanumeric: {}",
            code
        )));
    }
    Ok(())
}

/// Asset union
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Asset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
}

impl Asset {
    /// Build a credit asset; codes of 1-4 characters are alphanum4, 5-12 alphanum12
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self, WasmStellarError> {
        validate_code(code)?;
        if code.len() <= 4 {
            Ok(Asset::CreditAlphanum4(AlphaNum4 {
                asset_code: pad_code(code),
                issuer,
            }))
        } else {
            Ok(Asset::CreditAlphanum12(AlphaNum12 {
                asset_code: pad_code(code),
                issuer,
            }))
        }
    }

    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Native => AssetType::Native,
            Asset::CreditAlphanum4(_) => AssetType::CreditAlphanum4,
            Asset::CreditAlphanum12(_) => AssetType::CreditAlphanum12,
        }
    }

    /// Whether the code length selects this asset's own type when parsed back
    pub fn code_matches_type(&self) -> bool {
        match self {
            Asset::CreditAlphanum12(a) => !is_short_alphanum12(&a.asset_code),
            _ => true,
        }
    }

    /// `XLM` or `CODE:ISSUER`
    pub fn canonical(&self) -> String {
        match self {
            Asset::Native => "XLM".to_string(),
            Asset::CreditAlphanum4(a) => {
                format!("{}:{}", code_to_string(&a.asset_code), a.issuer.account_id())
            }
            Asset::CreditAlphanum12(a) => {
                format!("{}:{}", code_to_string(&a.asset_code), a.issuer.account_id())
            }
        }
    }

    /// Inverse of [`Asset::canonical`]; `native` is accepted as an alias for `XLM`
    pub fn from_canonical(value: &str) -> Result<Self, WasmStellarError> {
        if value == "XLM" || value == "native" {
            return Ok(Asset::Native);
        }
        let (code, issuer) = value.split_once(':').ok_or_else(|| {
            WasmStellarError::InvalidArgument(format!("Invalid asset '{}'", value))
        })?;
        Asset::credit(code, PublicKey::from_account_id(issuer)?)
    }
}

impl XdrCodec for Asset {
    fn encode(&self, w: &mut XdrWriter) {
        self.asset_type().encode(w);
        match self {
            Asset::Native => {}
            Asset::CreditAlphanum4(a) => a.encode(w),
            Asset::CreditAlphanum12(a) => a.encode(w),
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match AssetType::decode(r)? {
            AssetType::Native => Ok(Asset::Native),
            AssetType::CreditAlphanum4 => Ok(Asset::CreditAlphanum4(AlphaNum4::decode(r)?)),
            AssetType::CreditAlphanum12 => Ok(Asset::CreditAlphanum12(AlphaNum12::decode(r)?)),
            AssetType::PoolShare => Err(DecodeError::UnknownDiscriminant {
                type_name: "Asset",
                value: AssetType::PoolShare.discriminant(),
            }),
        }
    }
}

/// Asset held by a trustline; pool shares are identified by pool id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrustLineAsset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
    PoolShare(Hash),
}

impl From<Asset> for TrustLineAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => TrustLineAsset::Native,
            Asset::CreditAlphanum4(a) => TrustLineAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => TrustLineAsset::CreditAlphanum12(a),
        }
    }
}

impl XdrCodec for TrustLineAsset {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            TrustLineAsset::Native => AssetType::Native.encode(w),
            TrustLineAsset::CreditAlphanum4(a) => {
                AssetType::CreditAlphanum4.encode(w);
                a.encode(w);
            }
            TrustLineAsset::CreditAlphanum12(a) => {
                AssetType::CreditAlphanum12.encode(w);
                a.encode(w);
            }
            TrustLineAsset::PoolShare(pool_id) => {
                AssetType::PoolShare.encode(w);
                w.write_fixed(pool_id);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match AssetType::decode(r)? {
            AssetType::Native => TrustLineAsset::Native,
            AssetType::CreditAlphanum4 => TrustLineAsset::CreditAlphanum4(AlphaNum4::decode(r)?),
            AssetType::CreditAlphanum12 => {
                TrustLineAsset::CreditAlphanum12(AlphaNum12::decode(r)?)
            }
            AssetType::PoolShare => TrustLineAsset::PoolShare(r.read_fixed()?),
        })
    }
}

/// Constant-product pool definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiquidityPoolConstantProductParameters {
    pub asset_a: Asset,
    pub asset_b: Asset,
    pub fee: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiquidityPoolParameters {
    ConstantProduct(LiquidityPoolConstantProductParameters),
}

impl XdrCodec for LiquidityPoolParameters {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            LiquidityPoolParameters::ConstantProduct(params) => {
                LiquidityPoolType::ConstantProduct.encode(w);
                params.asset_a.encode(w);
                params.asset_b.encode(w);
                w.write_i32(params.fee);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match LiquidityPoolType::decode(r)? {
            LiquidityPoolType::ConstantProduct => Ok(LiquidityPoolParameters::ConstantProduct(
                LiquidityPoolConstantProductParameters {
                    asset_a: Asset::decode(r)?,
                    asset_b: Asset::decode(r)?,
                    fee: r.read_i32()?,
                },
            )),
        }
    }
}

/// Line of a change-trust operation; pool shares carry full pool parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChangeTrustAsset {
    Native,
    CreditAlphanum4(AlphaNum4),
    CreditAlphanum12(AlphaNum12),
    PoolShare(LiquidityPoolParameters),
}

impl From<Asset> for ChangeTrustAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => ChangeTrustAsset::Native,
            Asset::CreditAlphanum4(a) => ChangeTrustAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => ChangeTrustAsset::CreditAlphanum12(a),
        }
    }
}

impl XdrCodec for ChangeTrustAsset {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            ChangeTrustAsset::Native => AssetType::Native.encode(w),
            ChangeTrustAsset::CreditAlphanum4(a) => {
                AssetType::CreditAlphanum4.encode(w);
                a.encode(w);
            }
            ChangeTrustAsset::CreditAlphanum12(a) => {
                AssetType::CreditAlphanum12.encode(w);
                a.encode(w);
            }
            ChangeTrustAsset::PoolShare(params) => {
                AssetType::PoolShare.encode(w);
                params.encode(w);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(match AssetType::decode(r)? {
            AssetType::Native => ChangeTrustAsset::Native,
            AssetType::CreditAlphanum4 => {
                ChangeTrustAsset::CreditAlphanum4(AlphaNum4::decode(r)?)
            }
            AssetType::CreditAlphanum12 => {
                ChangeTrustAsset::CreditAlphanum12(AlphaNum12::decode(r)?)
            }
            AssetType::PoolShare => {
                ChangeTrustAsset::PoolShare(LiquidityPoolParameters::decode(r)?)
            }
        })
    }
}

/// Asset code of an allow-trust operation (no issuer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCode {
    CreditAlphanum4([u8; 4]),
    CreditAlphanum12([u8; 12]),
}

impl AssetCode {
    pub fn new(code: &str) -> Result<Self, WasmStellarError> {
        validate_code(code)?;
        if code.len() <= 4 {
            Ok(AssetCode::CreditAlphanum4(pad_code(code)))
        } else {
            Ok(AssetCode::CreditAlphanum12(pad_code(code)))
        }
    }

    pub fn code_matches_type(&self) -> bool {
        match self {
            AssetCode::CreditAlphanum4(_) => true,
            AssetCode::CreditAlphanum12(c) => !is_short_alphanum12(c),
        }
    }

    pub fn code(&self) -> String {
        match self {
            AssetCode::CreditAlphanum4(c) => code_to_string(c),
            AssetCode::CreditAlphanum12(c) => code_to_string(c),
        }
    }
}

impl XdrCodec for AssetCode {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            AssetCode::CreditAlphanum4(c) => {
                AssetType::CreditAlphanum4.encode(w);
                w.write_fixed(c);
            }
            AssetCode::CreditAlphanum12(c) => {
                AssetType::CreditAlphanum12.encode(w);
                w.write_fixed(c);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match AssetType::decode(r)? {
            AssetType::CreditAlphanum4 => Ok(AssetCode::CreditAlphanum4(r.read_fixed()?)),
            AssetType::CreditAlphanum12 => Ok(AssetCode::CreditAlphanum12(r.read_fixed()?)),
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "AssetCode",
                value: other.discriminant(),
            }),
        }
    }
}

/// Price as a fraction `n / d`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

impl XdrCodec for Price {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_i32(self.n);
        w.write_i32(self.d);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Price {
            n: r.read_i32()?,
            d: r.read_i32()?,
        })
    }
}
