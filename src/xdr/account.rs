//! Account identifiers, signer keys and decorated signatures

use crate::error::{DecodeError, WasmStellarError};
use crate::strkey::{self, VersionByte};
use crate::xdr::codec::{xdr_enum, XdrCodec, XdrReader, XdrWriter};

/// 32-byte hash / key material
pub type Hash = [u8; 32];

pub const MAX_SIGNED_PAYLOAD_LEN: u32 = 64;

xdr_enum! {
    pub enum PublicKeyType {
        Ed25519 = 0 => "PUBLIC_KEY_TYPE_ED25519",
    }
}

xdr_enum! {
    pub enum CryptoKeyType {
        Ed25519 = 0 => "KEY_TYPE_ED25519",
        PreAuthTx = 1 => "KEY_TYPE_PRE_AUTH_TX",
        HashX = 2 => "KEY_TYPE_HASH_X",
        Ed25519SignedPayload = 3 => "KEY_TYPE_ED25519_SIGNED_PAYLOAD",
        MuxedEd25519 = 0x100 => "KEY_TYPE_MUXED_ED25519",
    }
}

/// Account public key (`AccountID` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    Ed25519([u8; 32]),
}

pub type AccountId = PublicKey;

impl PublicKey {
    pub fn from_account_id(account_id: &str) -> Result<Self, WasmStellarError> {
        Ok(PublicKey::Ed25519(strkey::decode_32(
            VersionByte::AccountId,
            account_id,
        )?))
    }

    /// `G...` strkey
    pub fn account_id(&self) -> String {
        strkey::encode(VersionByte::AccountId, self.as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        match self {
            PublicKey::Ed25519(key) => key,
        }
    }
}

impl XdrCodec for PublicKey {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            PublicKey::Ed25519(key) => {
                PublicKeyType::Ed25519.encode(w);
                w.write_fixed(key);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match PublicKeyType::decode(r)? {
            PublicKeyType::Ed25519 => Ok(PublicKey::Ed25519(r.read_fixed()?)),
        }
    }
}

/// Transaction and operation source account, optionally multiplexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuxedAccount {
    Ed25519([u8; 32]),
    MuxedEd25519 { id: u64, ed25519: [u8; 32] },
}

impl MuxedAccount {
    /// Parse a `G...` or `M...` strkey
    pub fn from_address(address: &str) -> Result<Self, WasmStellarError> {
        match strkey::decode_any(address)? {
            (VersionByte::AccountId, payload) => {
                let mut key = [0u8; 32];
                key.copy_from_slice(&payload);
                Ok(MuxedAccount::Ed25519(key))
            }
            (VersionByte::MuxedAccount, payload) => {
                let mut ed25519 = [0u8; 32];
                ed25519.copy_from_slice(&payload[..32]);
                let mut id = [0u8; 8];
                id.copy_from_slice(&payload[32..40]);
                Ok(MuxedAccount::MuxedEd25519 {
                    id: u64::from_be_bytes(id),
                    ed25519,
                })
            }
            (other, _) => Err(WasmStellarError::InvalidAddress(format!(
                "Expected account or muxed account, got {:?}",
                other
            ))),
        }
    }

    /// `G...` for plain keys, `M...` for muxed ones
    pub fn address(&self) -> String {
        match self {
            MuxedAccount::Ed25519(key) => strkey::encode(VersionByte::AccountId, key),
            MuxedAccount::MuxedEd25519 { id, ed25519 } => {
                let mut payload = Vec::with_capacity(40);
                payload.extend_from_slice(ed25519);
                payload.extend_from_slice(&id.to_be_bytes());
                strkey::encode(VersionByte::MuxedAccount, &payload)
            }
        }
    }

    pub fn ed25519(&self) -> &[u8; 32] {
        match self {
            MuxedAccount::Ed25519(key) => key,
            MuxedAccount::MuxedEd25519 { ed25519, .. } => ed25519,
        }
    }

    /// The underlying account with the mux id dropped
    pub fn account_id(&self) -> AccountId {
        PublicKey::Ed25519(*self.ed25519())
    }
}

impl From<PublicKey> for MuxedAccount {
    fn from(key: PublicKey) -> Self {
        MuxedAccount::Ed25519(*key.as_bytes())
    }
}

impl XdrCodec for MuxedAccount {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            MuxedAccount::Ed25519(key) => {
                CryptoKeyType::Ed25519.encode(w);
                w.write_fixed(key);
            }
            MuxedAccount::MuxedEd25519 { id, ed25519 } => {
                CryptoKeyType::MuxedEd25519.encode(w);
                w.write_u64(*id);
                w.write_fixed(ed25519);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match CryptoKeyType::decode(r)? {
            CryptoKeyType::Ed25519 => Ok(MuxedAccount::Ed25519(r.read_fixed()?)),
            CryptoKeyType::MuxedEd25519 => {
                let id = r.read_u64()?;
                let ed25519 = r.read_fixed()?;
                Ok(MuxedAccount::MuxedEd25519 { id, ed25519 })
            }
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "MuxedAccount",
                value: other.discriminant(),
            }),
        }
    }
}

/// Signer key union used by set-options signers, extra signers and revoke-sponsorship
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SignerKey {
    Ed25519([u8; 32]),
    PreAuthTx(Hash),
    HashX(Hash),
    Ed25519SignedPayload { ed25519: [u8; 32], payload: Vec<u8> },
}

impl SignerKey {
    /// Parse a `G...`, `T...`, `X...` or `P...` strkey
    pub fn from_strkey(encoded: &str) -> Result<Self, WasmStellarError> {
        let (version, payload) = strkey::decode_any(encoded)?;
        let mut key = [0u8; 32];
        key.copy_from_slice(&payload[..32]);
        match version {
            VersionByte::AccountId => Ok(SignerKey::Ed25519(key)),
            VersionByte::PreAuthTx => Ok(SignerKey::PreAuthTx(key)),
            VersionByte::Sha256Hash => Ok(SignerKey::HashX(key)),
            VersionByte::SignedPayload => {
                let mut r = XdrReader::new(&payload[32..]);
                let inner = r.read_var_opaque(MAX_SIGNED_PAYLOAD_LEN)?;
                r.finish()?;
                Ok(SignerKey::Ed25519SignedPayload {
                    ed25519: key,
                    payload: inner,
                })
            }
            other => Err(WasmStellarError::InvalidAddress(format!(
                "{:?} strkey is not a signer key",
                other
            ))),
        }
    }

    pub fn to_strkey(&self) -> String {
        match self {
            SignerKey::Ed25519(key) => strkey::encode(VersionByte::AccountId, key),
            SignerKey::PreAuthTx(hash) => strkey::encode(VersionByte::PreAuthTx, hash),
            SignerKey::HashX(hash) => strkey::encode(VersionByte::Sha256Hash, hash),
            SignerKey::Ed25519SignedPayload { ed25519, payload } => {
                let mut w = XdrWriter::new();
                w.write_fixed(ed25519);
                w.write_var_opaque(payload);
                strkey::encode(VersionByte::SignedPayload, &w.into_bytes())
            }
        }
    }
}

impl XdrCodec for SignerKey {
    fn encode(&self, w: &mut XdrWriter) {
        match self {
            SignerKey::Ed25519(key) => {
                CryptoKeyType::Ed25519.encode(w);
                w.write_fixed(key);
            }
            SignerKey::PreAuthTx(hash) => {
                CryptoKeyType::PreAuthTx.encode(w);
                w.write_fixed(hash);
            }
            SignerKey::HashX(hash) => {
                CryptoKeyType::HashX.encode(w);
                w.write_fixed(hash);
            }
            SignerKey::Ed25519SignedPayload { ed25519, payload } => {
                CryptoKeyType::Ed25519SignedPayload.encode(w);
                w.write_fixed(ed25519);
                w.write_var_opaque(payload);
            }
        }
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        match CryptoKeyType::decode(r)? {
            CryptoKeyType::Ed25519 => Ok(SignerKey::Ed25519(r.read_fixed()?)),
            CryptoKeyType::PreAuthTx => Ok(SignerKey::PreAuthTx(r.read_fixed()?)),
            CryptoKeyType::HashX => Ok(SignerKey::HashX(r.read_fixed()?)),
            CryptoKeyType::Ed25519SignedPayload => {
                let ed25519 = r.read_fixed()?;
                let payload = r.read_var_opaque(MAX_SIGNED_PAYLOAD_LEN)?;
                Ok(SignerKey::Ed25519SignedPayload { ed25519, payload })
            }
            other => Err(DecodeError::UnknownDiscriminant {
                type_name: "SignerKey",
                value: other.discriminant(),
            }),
        }
    }
}

/// Account signer entry of set-options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

impl XdrCodec for Signer {
    fn encode(&self, w: &mut XdrWriter) {
        self.key.encode(w);
        w.write_u32(self.weight);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(Signer {
            key: SignerKey::decode(r)?,
            weight: r.read_u32()?,
        })
    }
}

/// Signature plus the 4-byte hint identifying the signing key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedSignature {
    pub hint: [u8; 4],
    pub signature: Vec<u8>,
}

impl XdrCodec for DecoratedSignature {
    fn encode(&self, w: &mut XdrWriter) {
        w.write_fixed(&self.hint);
        w.write_var_opaque(&self.signature);
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, DecodeError> {
        Ok(DecoratedSignature {
            hint: r.read_fixed()?,
            signature: r.read_var_opaque(64)?,
        })
    }
}
