//! Messages exchanged on the command channel.
//!
//! A host sends a [`MethodCall`] (wrapped in a [`ChannelMessage`] on the
//! wire) and always receives exactly one [`Reply`]. Calls are weakly typed;
//! the bridge converts them into a [`Command`] before touching the wallet
//! core.

use std::collections::BTreeMap;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::method::Method;

/// A call as issued by the host: a method name and a bag of optional strings.
///
/// Numbers travel as decimal strings. An argument may be missing from the
/// map or present with a null value; both mean "absent".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MethodCall {
    pub method: String,
    pub arguments: BTreeMap<String, Option<String>>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) a string argument.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), Some(value.into()));
        self
    }

    /// Adds an explicit null argument.
    pub fn null_arg(mut self, key: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), None);
        self
    }

    /// Returns the argument value, or `None` if it is missing or null.
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_deref())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Wire envelope: a call addressed to a named channel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub channel: String,
    pub call: MethodCall,
}

/// A fully typed call, one variant per [`Method`].
///
/// Integers are `i64` and the fee rate is `f64`, matching the wallet core's
/// signatures. No range checks are implied by these types.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    CreateNewWallet {
        network_name: String,
    },
    GetAddresses {
        network_name: String,
        first_mnemonic: String,
        second_descriptor: String,
        start_index: i64,
        num: i64,
    },
    CreateTransaction {
        network_name: String,
        utxos: String,
        change_address: String,
        destination_address: String,
        amount: i64,
        fee_rate: f64,
    },
    CreateAndSignTransaction {
        network_name: String,
        first_mnemonic: String,
        second_mnemonic: String,
        utxos: String,
        change_address: String,
        destination_address: String,
        amount: i64,
        fee_rate: f64,
    },
    CreateAndSignRecoveryTransaction {
        network_name: String,
        first_mnemonic: String,
        second_descriptor: String,
        utxos: String,
        change_address: String,
        destination_address: String,
        amount: i64,
        fee_rate: f64,
    },
    CreateEphemeralSocialKeyPair,
    ValidateEphemeralSocialPublicKey {
        public_key_hex: String,
    },
    EncryptWithEphemeralSocialPublicKey {
        public_key_hex: String,
        data: String,
    },
    DecryptWithEphemeralSocialPrivateKey {
        private_key_hex: String,
        encrypted: String,
    },
}

impl Command {
    pub fn method(&self) -> Method {
        match self {
            Command::CreateNewWallet { .. } => Method::CreateNewWallet,
            Command::GetAddresses { .. } => Method::GetAddresses,
            Command::CreateTransaction { .. } => Method::CreateTransaction,
            Command::CreateAndSignTransaction { .. } => Method::CreateAndSignTransaction,
            Command::CreateAndSignRecoveryTransaction { .. } => {
                Method::CreateAndSignRecoveryTransaction
            }
            Command::CreateEphemeralSocialKeyPair => Method::CreateEphemeralSocialKeyPair,
            Command::ValidateEphemeralSocialPublicKey { .. } => {
                Method::ValidateEphemeralSocialPublicKey
            }
            Command::EncryptWithEphemeralSocialPublicKey { .. } => {
                Method::EncryptWithEphemeralSocialPublicKey
            }
            Command::DecryptWithEphemeralSocialPrivateKey { .. } => {
                Method::DecryptWithEphemeralSocialPrivateKey
            }
        }
    }
}

/// Successful result of a call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Opaque bytes from the wallet core (usually UTF-8 JSON).
    Bytes(Vec<u8>),
    /// Ordered list of strings (addresses).
    Strings(Vec<String>),
    /// A single string (ciphertext or plaintext).
    Text(String),
    /// No value.
    Empty,
}

/// Structured failure: a per-method category and the underlying message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub category: String,
    pub message: String,
}

impl Failure {
    pub fn new(method: Method, message: impl Into<String>) -> Self {
        Self {
            category: method.failure_category().to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// The one answer a call receives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Success(Payload),
    Error(Failure),
    /// The method name is not one of the known methods. Carries no message.
    NotImplemented,
}

impl Reply {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Reply::NotImplemented)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_absent_and_null() {
        let call = MethodCall::new("getAddresses")
            .arg("startIndex", "5")
            .null_arg("num");

        assert_eq!(call.argument("startIndex"), Some("5"));
        assert_eq!(call.argument("num"), None);
        assert_eq!(call.argument("networkName"), None);
        assert!(call.arguments.contains_key("num"));
    }

    #[test]
    fn test_channel_message_serde() {
        let msg = ChannelMessage {
            channel: crate::DEFAULT_CHANNEL.to_string(),
            call: MethodCall::new("createNewWallet")
                .arg("networkName", "regtest")
                .null_arg("unused"),
        };

        let serialized = postcard::to_allocvec(&msg).expect("Serialization failed");
        let deserialized: ChannelMessage =
            postcard::from_bytes(&serialized).expect("Deserialization failed");

        assert_eq!(msg, deserialized);
    }

    #[test]
    fn test_call_from_host_json() {
        let call = MethodCall::from_json(
            r#"{"method":"getAddresses","arguments":{"num":"3","startIndex":null}}"#,
        )
        .unwrap();
        assert_eq!(call.method, "getAddresses");
        assert_eq!(call.argument("num"), Some("3"));
        assert_eq!(call.argument("startIndex"), None);
    }

    #[test]
    fn test_command_method() {
        let cmd = Command::EncryptWithEphemeralSocialPublicKey {
            public_key_hex: "00".into(),
            data: "hi".into(),
        };
        assert_eq!(cmd.method(), Method::EncryptWithEphemeralSocialPublicKey);
        assert_eq!(
            Command::CreateEphemeralSocialKeyPair.method(),
            Method::CreateEphemeralSocialKeyPair
        );
    }

    #[test]
    fn test_failure_display() {
        let failure = Failure::new(Method::CreateNewWallet, "unknown network: foo");
        assert_eq!(failure.category, "CreateNewWallet Failure");
        assert_eq!(failure.to_string(), "CreateNewWallet Failure: unknown network: foo");
    }
}
