//! Network passphrases and ids

use sha2::{Digest, Sha256};

pub const PUBLIC_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

/// A network, identified by `sha256(passphrase)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    passphrase: String,
    id: [u8; 32],
}

impl Network {
    pub fn new(passphrase: &str) -> Self {
        Network {
            passphrase: passphrase.to_string(),
            id: Sha256::digest(passphrase.as_bytes()).into(),
        }
    }

    pub fn public() -> Self {
        Self::new(PUBLIC_PASSPHRASE)
    }

    pub fn testnet() -> Self {
        Self::new(TESTNET_PASSPHRASE)
    }

    pub fn futurenet() -> Self {
        Self::new(FUTURENET_PASSPHRASE)
    }

    pub fn standalone() -> Self {
        Self::new(STANDALONE_PASSPHRASE)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    pub fn id(&self) -> &[u8; 32] {
        &self.id
    }
}
