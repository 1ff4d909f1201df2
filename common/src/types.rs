//! Typed views of the JSON blobs produced by the wallet core.
//!
//! The bridge forwards these blobs untouched; clients decode them with the
//! types below. Field names follow the core's JSON (PascalCase).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Bitcoin networks understood by the wallet core.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
    Simnet,
}

impl Network {
    /// Canonical `networkName` argument for this network.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Regtest => "regtest",
            Network::Simnet => "simnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetwork(pub String);

impl fmt::Display for UnknownNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown network: {}", self.0)
    }
}

impl std::error::Error for UnknownNetwork {}

impl FromStr for Network {
    type Err = UnknownNetwork;

    // case-insensitive; "testnet3" is an alias of "testnet"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" | "testnet3" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "simnet" => Ok(Network::Simnet),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}

/// Result of `createNewWallet`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WalletInfo {
    pub first_mnemonic: String,
    pub second_mnemonic: String,
    pub second_descriptor: String,
}

/// Result of `createTransaction`. Amounts are in satoshis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionSummary {
    pub hex: String,
    pub total_input: i64,
    pub amount: i64,
    pub fees: i64,
    pub change: i64,
    pub change_is_dust: bool,
}

/// Result of the two signing methods.
///
/// The core also emits a structured copy of the transaction; only the
/// serialized hex is kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SignedTransaction {
    pub hex: String,
}

impl SignedTransaction {
    /// The serialized transaction, ready for broadcast.
    pub fn raw_bytes(&self) -> Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.hex)
    }
}

/// Result of `createEphemeralSocialKeyPair`. Both keys are hex encoded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EphemeralKeyPair {
    pub public_key: String,
    pub private_key: String,
}

macro_rules! impl_from_json {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
                    serde_json::from_slice(bytes)
                }

                pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
                    serde_json::to_vec(self)
                }
            }
        )*
    };
}

impl_from_json!(WalletInfo, TransactionSummary, SignedTransaction, EphemeralKeyPair);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!("RegTest".parse::<Network>(), Ok(Network::Regtest));
        assert_eq!("testnet3".parse::<Network>(), Ok(Network::Testnet));
        assert_eq!("simnet".parse::<Network>(), Ok(Network::Simnet));

        let err = "signet".parse::<Network>().unwrap_err();
        assert_eq!(err.to_string(), "unknown network: signet");
    }

    #[test]
    fn test_transaction_summary_from_core_json() {
        let json = br#"{"Hex":"0200","TotalInput":100000,"Amount":60000,"Fees":154,"Change":39846,"ChangeIsDust":false}"#;
        let summary = TransactionSummary::from_json(json).unwrap();
        assert_eq!(summary.total_input, 100_000);
        assert_eq!(summary.amount + summary.fees + summary.change, summary.total_input);
        assert!(!summary.change_is_dust);
    }

    #[test]
    fn test_signed_transaction_ignores_structured_copy() {
        let json = br#"{"Msg":{"Version":2,"TxIn":[],"TxOut":[],"LockTime":0},"Hex":"02000000"}"#;
        let signed = SignedTransaction::from_json(json).unwrap();
        assert_eq!(signed.hex, "02000000");
        assert_eq!(signed.raw_bytes().unwrap(), vec![0x02, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_wallet_info_field_names() {
        let info = WalletInfo {
            first_mnemonic: "a".into(),
            second_mnemonic: "b".into(),
            second_descriptor: "tr(...)".into(),
        };
        let json = String::from_utf8(info.to_json().unwrap()).unwrap();
        assert!(json.contains("\"FirstMnemonic\":\"a\""));
        assert!(json.contains("\"SecondDescriptor\":\"tr(...)\""));
    }
}
