//! StrKey encoding for account ids, seeds, signer keys and contract ids
//!
//! A strkey is `base32(version_byte || payload || crc16_xmodem_le)` without padding.
//! The version byte selects the leading character (`G`, `M`, `S`, `T`, `X`, `P`, `C`).

use crate::error::WasmStellarError;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Strkey flavours and their version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionByte {
    /// `G...`
    AccountId = 6 << 3,
    /// `M...`
    MuxedAccount = 12 << 3,
    /// `S...`
    SecretSeed = 18 << 3,
    /// `T...`
    PreAuthTx = 19 << 3,
    /// `X...`
    Sha256Hash = 23 << 3,
    /// `P...`
    SignedPayload = 15 << 3,
    /// `C...`
    Contract = 2 << 3,
}

impl VersionByte {
    fn from_byte(byte: u8) -> Option<Self> {
        [
            VersionByte::AccountId,
            VersionByte::MuxedAccount,
            VersionByte::SecretSeed,
            VersionByte::PreAuthTx,
            VersionByte::Sha256Hash,
            VersionByte::SignedPayload,
            VersionByte::Contract,
        ]
        .into_iter()
        .find(|v| *v as u8 == byte)
    }

    fn payload_len_ok(self, len: usize) -> bool {
        match self {
            VersionByte::MuxedAccount => len == 40,
            // 32-byte signer, 4-byte length, 4..=64 padded payload bytes
            VersionByte::SignedPayload => (40..=100).contains(&len) && len % 4 == 0,
            _ => len == 32,
        }
    }
}

/// Encode `payload` under `version`
pub fn encode(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 3);
    data.push(version as u8);
    data.extend_from_slice(payload);
    let checksum = crc16_xmodem(&data);
    data.extend_from_slice(&checksum.to_le_bytes());
    base32_encode(&data)
}

/// Decode a strkey, requiring the given version
pub fn decode(version: VersionByte, encoded: &str) -> Result<Vec<u8>, WasmStellarError> {
    let (found, payload) = decode_any(encoded)?;
    if found != version {
        return Err(WasmStellarError::InvalidAddress(format!(
            "Expected {:?} strkey, got {:?}",
            version, found
        )));
    }
    Ok(payload)
}

/// Decode a strkey of any known version
pub fn decode_any(encoded: &str) -> Result<(VersionByte, Vec<u8>), WasmStellarError> {
    let data = base32_decode(encoded)?;
    if base32_encode(&data) != encoded {
        return Err(WasmStellarError::InvalidAddress(
            "Non-canonical base32".to_string(),
        ));
    }
    if data.len() < 3 {
        return Err(WasmStellarError::InvalidAddress(
            "Strkey too short".to_string(),
        ));
    }

    let (body, checksum) = data.split_at(data.len() - 2);
    let expected = crc16_xmodem(body).to_le_bytes();
    if checksum != expected {
        return Err(WasmStellarError::InvalidAddress(
            "Invalid checksum".to_string(),
        ));
    }

    let version = VersionByte::from_byte(body[0]).ok_or_else(|| {
        WasmStellarError::InvalidAddress(format!("Unknown version byte {}", body[0]))
    })?;
    let payload = &body[1..];
    if !version.payload_len_ok(payload.len()) {
        return Err(WasmStellarError::InvalidAddress(format!(
            "Invalid payload length {} for {:?}",
            payload.len(),
            version
        )));
    }
    Ok((version, payload.to_vec()))
}

/// Decode a 32-byte payload strkey
pub fn decode_32(version: VersionByte, encoded: &str) -> Result<[u8; 32], WasmStellarError> {
    let payload = decode(version, encoded)?;
    payload
        .as_slice()
        .try_into()
        .map_err(|_| WasmStellarError::InvalidAddress("Payload must be 32 bytes".to_string()))
}

/// Check an account id (`G...`) without returning the key
pub fn is_valid_account_id(encoded: &str) -> bool {
    decode(VersionByte::AccountId, encoded).is_ok()
}

fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}

fn base32_encode(data: &[u8]) -> String {
    let mut out = String::with_capacity((data.len() * 8).div_ceil(5));
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for byte in data {
        buffer = (buffer << 8) | *byte as u32;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

fn base32_decode(encoded: &str) -> Result<Vec<u8>, WasmStellarError> {
    let mut out = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u32 = 0;
    let mut bits = 0;
    for c in encoded.bytes() {
        let value = ALPHABET.iter().position(|a| *a == c).ok_or_else(|| {
            WasmStellarError::InvalidAddress(format!("Invalid base32 character '{}'", c as char))
        })?;
        buffer = (buffer << 5) | value as u32;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
        }
    }
    Ok(out)
}
