mod social;
mod transaction;
mod wallet;

pub use social::{
    handle_create_ephemeral_social_key_pair, handle_decrypt_with_ephemeral_social_private_key,
    handle_encrypt_with_ephemeral_social_public_key, handle_validate_ephemeral_social_public_key,
};
pub use transaction::{
    handle_create_and_sign_recovery_transaction, handle_create_and_sign_transaction,
    handle_create_transaction,
};
pub use wallet::{handle_create_new_wallet, handle_get_addresses};

use common::{Command, Payload};

use crate::error::BridgeError;
use crate::wallet::WalletCore;

/// Runs a typed command against the wallet core.
pub fn handle_command(core: &dyn WalletCore, command: &Command) -> Result<Payload, BridgeError> {
    match command {
        Command::CreateNewWallet { network_name } => handle_create_new_wallet(core, network_name),
        Command::GetAddresses {
            network_name,
            first_mnemonic,
            second_descriptor,
            start_index,
            num,
        } => handle_get_addresses(
            core,
            network_name,
            first_mnemonic,
            second_descriptor,
            *start_index,
            *num,
        ),
        Command::CreateTransaction {
            network_name,
            utxos,
            change_address,
            destination_address,
            amount,
            fee_rate,
        } => handle_create_transaction(
            core,
            network_name,
            utxos,
            change_address,
            destination_address,
            *amount,
            *fee_rate,
        ),
        Command::CreateAndSignTransaction {
            network_name,
            first_mnemonic,
            second_mnemonic,
            utxos,
            change_address,
            destination_address,
            amount,
            fee_rate,
        } => handle_create_and_sign_transaction(
            core,
            network_name,
            first_mnemonic,
            second_mnemonic,
            utxos,
            change_address,
            destination_address,
            *amount,
            *fee_rate,
        ),
        Command::CreateAndSignRecoveryTransaction {
            network_name,
            first_mnemonic,
            second_descriptor,
            utxos,
            change_address,
            destination_address,
            amount,
            fee_rate,
        } => handle_create_and_sign_recovery_transaction(
            core,
            network_name,
            first_mnemonic,
            second_descriptor,
            utxos,
            change_address,
            destination_address,
            *amount,
            *fee_rate,
        ),
        Command::CreateEphemeralSocialKeyPair => handle_create_ephemeral_social_key_pair(core),
        Command::ValidateEphemeralSocialPublicKey { public_key_hex } => {
            handle_validate_ephemeral_social_public_key(core, public_key_hex)
        }
        Command::EncryptWithEphemeralSocialPublicKey {
            public_key_hex,
            data,
        } => handle_encrypt_with_ephemeral_social_public_key(core, public_key_hex, data),
        Command::DecryptWithEphemeralSocialPrivateKey {
            private_key_hex,
            encrypted,
        } => handle_decrypt_with_ephemeral_social_private_key(core, private_key_hex, encrypted),
    }
}
