//! Intent types for transaction building
//!
//! buildTransaction(intent, context)
//! - intent: what to do (payment, trust line, contract call, ...)
//! - context: how to build it (source, sequence number, fee, memo, time bounds)

use serde::{de, Deserialize, Deserializer, Serialize};

/// Deserialize i64 from either a number or string
fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct I64Visitor;

    impl<'de> de::Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("an i64 as number or string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(E::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

/// Transaction intent - what to do
///
/// Amounts are decimal strings in asset units (`"12.5"`), at most 7 fractional digits.
/// Assets are `native`, `XLM` or `CODE:ISSUER`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TransactionIntent {
    /// Send an asset to an existing account
    Payment {
        /// Recipient (`G...` or `M...`)
        destination: String,
        asset: String,
        amount: String,
    },
    /// Fund a new account with XLM
    CreateAccount {
        destination: String,
        #[serde(rename = "startingBalance")]
        starting_balance: String,
    },
    /// Add, update or remove (limit `"0"`) a trust line
    ChangeTrust {
        asset: String,
        /// Omitted means the maximum limit
        #[serde(default)]
        limit: Option<String>,
    },
    /// Set or delete (no value) an account data entry
    ManageData {
        name: String,
        /// Hex encoded value
        #[serde(default)]
        value: Option<String>,
    },
    /// Merge the source account into the destination
    AccountMerge { destination: String },
    /// Bump the source account's sequence number
    BumpSequence {
        #[serde(rename = "bumpTo", deserialize_with = "deserialize_i64")]
        bump_to: i64,
    },
    /// Call a contract function
    InvokeContract {
        /// Contract address (`C...`)
        contract: String,
        function: String,
        /// Arguments as base64 `SCVal` XDR
        #[serde(default)]
        args: Vec<String>,
    },
    /// Several intents in one transaction
    Batch { operations: Vec<TransactionIntent> },
}

/// Build context - how to build the transaction
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    /// Source account (`G...` or `M...`)
    pub source: String,
    /// Sequence number the transaction carries (account sequence + 1)
    #[serde(deserialize_with = "deserialize_i64")]
    pub sequence_number: i64,
    /// Max fee per operation in stroops
    #[serde(default = "default_base_fee")]
    pub base_fee: u32,
    #[serde(default)]
    pub memo: Option<MemoSpec>,
    #[serde(default)]
    pub time_bounds: Option<TimeBoundsSpec>,
}

fn default_base_fee() -> u32 {
    crate::transaction::MIN_BASE_FEE
}

/// Memo attached to the transaction
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum MemoSpec {
    Text(String),
    #[serde(deserialize_with = "deserialize_u64")]
    Id(u64),
    /// 32 bytes, hex
    Hash(String),
    /// 32 bytes, hex
    Return(String),
}

/// Deserialize u64 from either a number or string
fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum U64OrString {
        Number(u64),
        String(String),
    }

    match U64OrString::deserialize(deserializer)? {
        U64OrString::Number(n) => Ok(n),
        U64OrString::String(s) => s.parse().map_err(de::Error::custom),
    }
}

/// Unix seconds; `0` leaves that side open
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBoundsSpec {
    #[serde(default)]
    pub min_time: u64,
    #[serde(default)]
    pub max_time: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payment_intent() {
        let json = r#"{
            "type": "payment",
            "destination": "GBAF6NXN3DHSF357QBZLTBNWUTABKUODJXJYYE32ZDKA2QBM2H33IK6O",
            "asset": "native",
            "amount": "1.5"
        }"#;

        let intent: TransactionIntent = serde_json::from_str(json).unwrap();
        match intent {
            TransactionIntent::Payment { asset, amount, .. } => {
                assert_eq!(asset, "native");
                assert_eq!(amount, "1.5");
            }
            _ => panic!("Expected Payment"),
        }
    }

    #[test]
    fn test_deserialize_batch_intent() {
        let json = r#"{
            "type": "batch",
            "operations": [
                { "type": "bumpSequence", "bumpTo": "1234567890123" },
                { "type": "manageData", "name": "config" },
                { "type": "changeTrust", "asset": "USD:GAZFEVBSEGJJ63WPVVIWXLZLWN2JYZECECGT6GUNP4FJDVZVNXWQWMYI" }
            ]
        }"#;

        let intent: TransactionIntent = serde_json::from_str(json).unwrap();
        match intent {
            TransactionIntent::Batch { operations } => {
                assert_eq!(operations.len(), 3);
                assert!(matches!(
                    operations[0],
                    TransactionIntent::BumpSequence {
                        bump_to: 1_234_567_890_123
                    }
                ));
                assert!(matches!(
                    &operations[1],
                    TransactionIntent::ManageData { value: None, .. }
                ));
                assert!(matches!(
                    &operations[2],
                    TransactionIntent::ChangeTrust { limit: None, .. }
                ));
            }
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn test_deserialize_context() {
        let json = r#"{
            "source": "GAVRMS4QIOCC4QMOSKILOOOHCSO4FEKOXZPNLKFFN6W7SD2KUB7NBPLN",
            "sequenceNumber": "46489056724385793",
            "memo": { "type": "id", "value": "18446744073709551615" },
            "timeBounds": { "maxTime": 1567292672 }
        }"#;

        let ctx: BuildContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.sequence_number, 46_489_056_724_385_793);
        assert_eq!(ctx.base_fee, 100);
        assert!(matches!(ctx.memo, Some(MemoSpec::Id(u64::MAX))));
        let bounds = ctx.time_bounds.unwrap();
        assert_eq!((bounds.min_time, bounds.max_time), (0, 1_567_292_672));
    }

    #[test]
    fn test_rejects_unknown_intent() {
        let json = r#"{ "type": "inflationVote" }"#;
        assert!(serde_json::from_str::<TransactionIntent>(json).is_err());
    }
}
