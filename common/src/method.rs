//! Method names understood on the command channel.
//!
//! The set is closed: a name either maps to exactly one [`Method`] or the
//! call is answered with "not implemented". Matching is exact and
//! case-sensitive.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The nine operations exposed over the channel.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    // Wallet
    /// Generate a fresh wallet (two mnemonics and the second descriptor).
    CreateNewWallet,
    /// Derive a run of receive addresses.
    GetAddresses,

    // Transactions
    /// Build an unsigned transaction.
    CreateTransaction,
    /// Build and sign a transaction with both mnemonics.
    CreateAndSignTransaction,
    /// Build and sign a transaction with the first mnemonic and second descriptor.
    CreateAndSignRecoveryTransaction,

    // Ephemeral social keys
    /// Generate an ephemeral key pair.
    CreateEphemeralSocialKeyPair,
    /// Check that a hex public key parses.
    ValidateEphemeralSocialPublicKey,
    /// Encrypt a string for an ephemeral public key.
    EncryptWithEphemeralSocialPublicKey,
    /// Decrypt a ciphertext with an ephemeral private key.
    DecryptWithEphemeralSocialPrivateKey,
}

impl Method {
    /// Every method, in channel documentation order.
    pub const ALL: [Method; 9] = [
        Method::CreateNewWallet,
        Method::GetAddresses,
        Method::CreateTransaction,
        Method::CreateAndSignTransaction,
        Method::CreateAndSignRecoveryTransaction,
        Method::CreateEphemeralSocialKeyPair,
        Method::ValidateEphemeralSocialPublicKey,
        Method::EncryptWithEphemeralSocialPublicKey,
        Method::DecryptWithEphemeralSocialPrivateKey,
    ];

    /// Looks up a method by its exact wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "createNewWallet" => Some(Method::CreateNewWallet),
            "getAddresses" => Some(Method::GetAddresses),
            "createTransaction" => Some(Method::CreateTransaction),
            "createAndSignTransaction" => Some(Method::CreateAndSignTransaction),
            "createAndSignRecoveryTransaction" => Some(Method::CreateAndSignRecoveryTransaction),
            "createEphemeralSocialKeyPair" => Some(Method::CreateEphemeralSocialKeyPair),
            "validateEphemeralSocialPublicKey" => Some(Method::ValidateEphemeralSocialPublicKey),
            "encryptWithEphemeralSocialPublicKey" => {
                Some(Method::EncryptWithEphemeralSocialPublicKey)
            }
            "decryptWithEphemeralSocialPrivateKey" => {
                Some(Method::DecryptWithEphemeralSocialPrivateKey)
            }
            _ => None,
        }
    }

    /// The wire name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Method::CreateNewWallet => "createNewWallet",
            Method::GetAddresses => "getAddresses",
            Method::CreateTransaction => "createTransaction",
            Method::CreateAndSignTransaction => "createAndSignTransaction",
            Method::CreateAndSignRecoveryTransaction => "createAndSignRecoveryTransaction",
            Method::CreateEphemeralSocialKeyPair => "createEphemeralSocialKeyPair",
            Method::ValidateEphemeralSocialPublicKey => "validateEphemeralSocialPublicKey",
            Method::EncryptWithEphemeralSocialPublicKey => "encryptWithEphemeralSocialPublicKey",
            Method::DecryptWithEphemeralSocialPrivateKey => "decryptWithEphemeralSocialPrivateKey",
        }
    }

    /// Category label attached to every failure of this method.
    ///
    /// These strings are matched by the host application and must not change,
    /// including the historical spellings ("GenerateAddresses",
    /// "CreateandSign...").
    pub fn failure_category(self) -> &'static str {
        match self {
            Method::CreateNewWallet => "CreateNewWallet Failure",
            Method::GetAddresses => "GenerateAddresses Failure",
            Method::CreateTransaction => "CreateTransaction Failure",
            Method::CreateAndSignTransaction => "CreateandSignTransaction Failure",
            Method::CreateAndSignRecoveryTransaction => "CreateandSignRecoveryTransaction Failure",
            Method::CreateEphemeralSocialKeyPair => "CreateEphemeralSocialKeyPair Failure",
            Method::ValidateEphemeralSocialPublicKey => "ValidateEphemeralSocialPublicKey Failure",
            Method::EncryptWithEphemeralSocialPublicKey => {
                "EncryptWithEphemeralSocialPublicKey Failure"
            }
            Method::DecryptWithEphemeralSocialPrivateKey => {
                "DecryptWithEphemeralSocialPrivateKey Failure"
            }
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
        assert_eq!(Method::from_name("GetAddresses"), None);
        assert_eq!(Method::from_name("getaddresses"), None);
        assert_eq!(Method::from_name(" getAddresses"), None);
        assert_eq!(Method::from_name(""), None);
    }

    #[test]
    fn test_failure_categories_are_unique() {
        let mut categories: Vec<&str> = Method::ALL.iter().map(|m| m.failure_category()).collect();
        categories.sort_unstable();
        categories.dedup();
        assert_eq!(categories.len(), Method::ALL.len());
        assert_eq!(
            Method::ValidateEphemeralSocialPublicKey.failure_category(),
            "ValidateEphemeralSocialPublicKey Failure"
        );
    }
}
