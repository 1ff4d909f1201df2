//! Outbound interface to the wallet core.
//!
//! Each method mirrors one native wallet operation, with arguments in the
//! core's positional order. Amounts, indices and counts are `i64` and the fee
//! rate is `f64`; domain checks (positive amounts, index ranges, known
//! networks) belong to the implementation.
//!
//! Implementations must be callable from several threads at once: the
//! dispatcher holds no lock around them.

use crate::error::CoreError;

/// The native wallet operations reachable through the command channel.
pub trait WalletCore: Send + Sync {
    /// Generate a new wallet. Returns the core's JSON description of it.
    fn create_new_wallet(&self, network_name: &str) -> Result<Vec<u8>, CoreError>;

    /// Derive `num` addresses starting at `start_index`.
    /// Returns a UTF-8 JSON array of address strings.
    fn get_addresses(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_descriptor: &str,
        start_index: i64,
        num: i64,
    ) -> Result<Vec<u8>, CoreError>;

    /// Build an unsigned transaction. Returns the core's JSON summary.
    fn create_transaction(
        &self,
        network_name: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<Vec<u8>, CoreError>;

    /// Build and sign a transaction with both mnemonics.
    #[allow(clippy::too_many_arguments)]
    fn create_and_sign_transaction(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_mnemonic: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<Vec<u8>, CoreError>;

    /// Build and sign a transaction through the recovery path
    /// (first mnemonic and second descriptor).
    #[allow(clippy::too_many_arguments)]
    fn create_and_sign_recovery_transaction(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_descriptor: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<Vec<u8>, CoreError>;

    fn create_ephemeral_social_key_pair(&self) -> Result<Vec<u8>, CoreError>;

    fn validate_ephemeral_social_public_key(&self, public_key_hex: &str) -> Result<(), CoreError>;

    fn encrypt_with_ephemeral_social_public_key(
        &self,
        public_key_hex: &str,
        data: &str,
    ) -> Result<String, CoreError>;

    fn decrypt_with_ephemeral_social_private_key(
        &self,
        private_key_hex: &str,
        encrypted: &str,
    ) -> Result<String, CoreError>;
}
