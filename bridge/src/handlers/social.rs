//! Ephemeral "social" key pairs used to pass a recovery secret to a contact.

use common::Payload;

use crate::error::BridgeError;
use crate::wallet::WalletCore;

pub fn handle_create_ephemeral_social_key_pair(
    core: &dyn WalletCore,
) -> Result<Payload, BridgeError> {
    Ok(Payload::Bytes(core.create_ephemeral_social_key_pair()?))
}

/// A key that passes validation answers with an empty success.
pub fn handle_validate_ephemeral_social_public_key(
    core: &dyn WalletCore,
    public_key_hex: &str,
) -> Result<Payload, BridgeError> {
    core.validate_ephemeral_social_public_key(public_key_hex)?;
    Ok(Payload::Empty)
}

pub fn handle_encrypt_with_ephemeral_social_public_key(
    core: &dyn WalletCore,
    public_key_hex: &str,
    data: &str,
) -> Result<Payload, BridgeError> {
    let encrypted = core.encrypt_with_ephemeral_social_public_key(public_key_hex, data)?;
    Ok(Payload::Text(encrypted))
}

pub fn handle_decrypt_with_ephemeral_social_private_key(
    core: &dyn WalletCore,
    private_key_hex: &str,
    encrypted: &str,
) -> Result<Payload, BridgeError> {
    let decrypted = core.decrypt_with_ephemeral_social_private_key(private_key_hex, encrypted)?;
    Ok(Payload::Text(decrypted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWalletCore;
    use common::EphemeralKeyPair;

    fn key_pair(core: &MockWalletCore) -> EphemeralKeyPair {
        match handle_create_ephemeral_social_key_pair(core).unwrap() {
            Payload::Bytes(bytes) => EphemeralKeyPair::from_json(&bytes).unwrap(),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let core = MockWalletCore::new();
        let keys = key_pair(&core);

        assert_eq!(
            handle_validate_ephemeral_social_public_key(&core, &keys.public_key).unwrap(),
            Payload::Empty
        );

        let Payload::Text(encrypted) =
            handle_encrypt_with_ephemeral_social_public_key(&core, &keys.public_key, "secret")
                .unwrap()
        else {
            panic!("expected text");
        };
        assert_ne!(encrypted, "secret");

        let decrypted =
            handle_decrypt_with_ephemeral_social_private_key(&core, &keys.private_key, &encrypted)
                .unwrap();
        assert_eq!(decrypted, Payload::Text("secret".into()));
    }

    #[test]
    fn test_key_pairs_differ() {
        let core = MockWalletCore::new();
        assert_ne!(key_pair(&core), key_pair(&core));
    }

    #[test]
    fn test_invalid_public_key() {
        let core = MockWalletCore::new();
        let err = handle_validate_ephemeral_social_public_key(&core, "zz").unwrap_err();
        assert!(matches!(err, BridgeError::Core(_)));

        let err = handle_encrypt_with_ephemeral_social_public_key(&core, "", "x").unwrap_err();
        assert!(matches!(err, BridgeError::Core(_)));
    }
}
