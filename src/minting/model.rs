use crate::{Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

const MINTING_KIND: &str = "Minting";

/// One entry of a node's receipt history.
#[derive(Clone, Debug, PartialEq)]
pub enum Receipt {
    Minting(MintingReceipt),
    Other(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MintingReceipt {
    pub node_id: i64,
    pub period_start: i64,
    pub measured_uptime: u64,
    pub reward_tft: u64,
    pub hash: String,
}

#[derive(Deserialize)]
struct ReceiptJson {
    hash: String,
    receipt: Map<String, Value>,
}

#[derive(Deserialize)]
struct MintingJson {
    node_id: i64,
    period: PeriodJson,
    measured_uptime: u64,
    reward: RewardJson,
}

#[derive(Deserialize)]
struct PeriodJson {
    start: i64,
}

#[derive(Deserialize)]
struct RewardJson {
    tft: u64,
}

impl Receipt {
    pub fn from_json(value: Value) -> Result<Receipt> {
        let json: ReceiptJson = serde_json::from_value(value)
            .map_err(|e| Error::MalformedReceipt(e.to_string()))?;

        let (kind, payload) = match json.receipt.into_iter().next() {
            Some(entry) => entry,
            None => Err(Error::MalformedReceipt(format!(
                "Receipt {} has no kind",
                json.hash
            )))?,
        };

        if kind != MINTING_KIND {
            return Ok(Receipt::Other(kind));
        }

        let minting: MintingJson = serde_json::from_value(payload)
            .map_err(|e| Error::MalformedReceipt(format!("Receipt {}: {e}", json.hash)))?;

        Ok(Receipt::Minting(MintingReceipt {
            node_id: minting.node_id,
            period_start: minting.period.start,
            measured_uptime: minting.measured_uptime,
            reward_tft: minting.reward.tft,
            hash: json.hash,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{MintingReceipt, Receipt};
    use crate::{Error, Result};
    use serde_json::json;

    #[test]
    fn minting() -> Result<()> {
        let receipt = Receipt::from_json(json!({
            "hash": "abc",
            "receipt": {
                "Minting": {
                    "node_id": 7,
                    "farm_id": 1,
                    "period": { "start": 1677628800, "end": 1680259680 },
                    "measured_uptime": 2600000,
                    "reward": { "musd": 1000, "tft": 12345678 }
                }
            }
        }))?;
        assert_eq!(
            Receipt::Minting(MintingReceipt {
                node_id: 7,
                period_start: 1677628800,
                measured_uptime: 2600000,
                reward_tft: 12345678,
                hash: "abc".into(),
            }),
            receipt,
        );
        Ok(())
    }

    #[test]
    fn other_kind() -> Result<()> {
        let receipt = Receipt::from_json(json!({
            "hash": "def",
            "receipt": { "Fixup": { "node_id": 7 } }
        }))?;
        assert_eq!(Receipt::Other("Fixup".into()), receipt);
        Ok(())
    }

    #[test]
    fn malformed() {
        let missing_reward = json!({
            "hash": "abc",
            "receipt": {
                "Minting": {
                    "node_id": 7,
                    "period": { "start": 1677628800 },
                    "measured_uptime": 2600000
                }
            }
        });
        let no_kind = json!({ "hash": "abc", "receipt": {} });
        let no_hash = json!({ "receipt": { "Fixup": {} } });
        for value in [missing_reward, no_kind, no_hash, json!("receipt")] {
            assert!(matches!(
                Receipt::from_json(value),
                Err(Error::MalformedReceipt(_)),
            ));
        }
    }
}
