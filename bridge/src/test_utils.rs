//! An in-memory [`WalletCore`] for tests.
//!
//! [`MockWalletCore`] records every call it receives as a [`Command`] and
//! answers with deterministic, structurally valid results. Nothing here is
//! real cryptography: the "ephemeral" key pair is a single symmetric key
//! (the public and private halves are equal) and encryption is a XOR.

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use common::{Command, EphemeralKeyPair, Network, SignedTransaction, TransactionSummary, WalletInfo};

use crate::error::CoreError;
use crate::wallet::WalletCore;

/// Virtual size, in vbytes, charged for every mock transaction.
pub const MOCK_TX_VSIZE: f64 = 154.0;

/// Change at or below this amount is flagged as dust.
pub const DUST_LIMIT: i64 = 330;

const MAX_ADDRESSES: i64 = 255;
const KEY_LEN: usize = 16;

#[derive(Default)]
pub struct MockWalletCore {
    calls: Mutex<Vec<Command>>,
    address_payload: Option<Vec<u8>>,
    counter: AtomicU64,
}

impl MockWalletCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `get_addresses` return `payload` verbatim once its arguments
    /// have been checked.
    pub fn with_address_payload(mut self, payload: Vec<u8>) -> Self {
        self.address_payload = Some(payload);
        self
    }

    /// Commands received so far, oldest first.
    pub fn commands(&self) -> Vec<Command> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn record(&self, command: Command) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(command);
    }

    fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }

    fn build_transaction(
        &self,
        network_name: &str,
        utxos: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<TransactionSummary, CoreError> {
        parse_network(network_name)?;
        if destination_address.is_empty() {
            return Err(CoreError::new("missing destination address"));
        }
        if amount <= 0 {
            return Err(CoreError::new(format!(
                "invalid amount {}, must be greater than 0",
                amount
            )));
        }
        if !fee_rate.is_finite() || fee_rate < 0.0 {
            return Err(CoreError::new(format!("invalid fee rate {}", fee_rate)));
        }

        let total_input = sum_utxos(utxos)?;
        let fees = (fee_rate * MOCK_TX_VSIZE).ceil() as i64;
        let needed = amount.saturating_add(fees);
        if total_input < needed {
            return Err(CoreError::new(format!(
                "insufficient funds: have {}, need {}",
                total_input, needed
            )));
        }
        let change = total_input - needed;

        let mut raw = vec![0x02, 0x00, 0x00, 0x00];
        raw.extend_from_slice(&amount.to_le_bytes());
        raw.extend_from_slice(&change.to_le_bytes());

        Ok(TransactionSummary {
            hex: hex::encode(raw),
            total_input,
            amount,
            fees,
            change,
            change_is_dust: change != 0 && change <= DUST_LIMIT,
        })
    }

    fn sign(&self, summary: TransactionSummary) -> Result<Vec<u8>, CoreError> {
        // a fake witness marker is enough for the tests
        let signed = SignedTransaction {
            hex: format!("{}0001", summary.hex),
        };
        signed.to_json().map_err(|e| CoreError::new(e.to_string()))
    }
}

fn parse_network(network_name: &str) -> Result<Network, CoreError> {
    Network::from_str(network_name).map_err(|e| CoreError::new(e.to_string()))
}

fn address_prefix(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "bc1q",
        Network::Testnet => "tb1q",
        Network::Regtest => "bcrt1q",
        Network::Simnet => "sb1q",
    }
}

/// Sums the `Amount` field of a JSON array of UTXOs.
fn sum_utxos(utxos: &str) -> Result<i64, CoreError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(utxos).map_err(|e| CoreError::new(format!("invalid utxos: {}", e)))?;
    entries.iter().try_fold(0i64, |total, entry| {
        let amount = entry
            .get("Amount")
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| CoreError::new("invalid utxos: missing Amount"))?;
        Ok(total.saturating_add(amount))
    })
}

fn decode_key(key_hex: &str) -> Result<Vec<u8>, CoreError> {
    let key = hex::decode(key_hex).map_err(|e| CoreError::new(format!("invalid key: {}", e)))?;
    if key.len() != KEY_LEN {
        return Err(CoreError::new(format!(
            "invalid key length {}, expected {}",
            key.len(),
            KEY_LEN
        )));
    }
    Ok(key)
}

fn xor(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

impl WalletCore for MockWalletCore {
    fn create_new_wallet(&self, network_name: &str) -> Result<Vec<u8>, CoreError> {
        self.record(Command::CreateNewWallet {
            network_name: network_name.to_string(),
        });
        let network = parse_network(network_name)?;
        let id = self.next_id();

        let info = WalletInfo {
            first_mnemonic: format!("mock first mnemonic {}", id),
            second_mnemonic: format!("mock second mnemonic {}", id),
            second_descriptor: format!("wpkh(mock-{}-{}/*)", network, id),
        };
        info.to_json().map_err(|e| CoreError::new(e.to_string()))
    }

    fn get_addresses(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_descriptor: &str,
        start_index: i64,
        num: i64,
    ) -> Result<Vec<u8>, CoreError> {
        self.record(Command::GetAddresses {
            network_name: network_name.to_string(),
            first_mnemonic: first_mnemonic.to_string(),
            second_descriptor: second_descriptor.to_string(),
            start_index,
            num,
        });
        if start_index < 0 || start_index > i64::from(u32::MAX) {
            return Err(CoreError::new(format!(
                "startIndex must be between [0, {}]",
                u32::MAX
            )));
        }
        if num < 0 || num > MAX_ADDRESSES {
            return Err(CoreError::new(format!(
                "num must be between [0, {}]",
                MAX_ADDRESSES
            )));
        }
        let network = parse_network(network_name)?;
        if num == 0 {
            return Err(CoreError::new(format!(
                "invalid amount of addresses [{}], must be greater than 0",
                num
            )));
        }

        if let Some(payload) = &self.address_payload {
            return Ok(payload.clone());
        }

        let addresses: Vec<String> = (start_index..start_index + num)
            .map(|index| format!("{}mock{:08x}", address_prefix(network), index))
            .collect();
        serde_json::to_vec(&addresses).map_err(|e| CoreError::new(e.to_string()))
    }

    fn create_transaction(
        &self,
        network_name: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<Vec<u8>, CoreError> {
        self.record(Command::CreateTransaction {
            network_name: network_name.to_string(),
            utxos: utxos.to_string(),
            change_address: change_address.to_string(),
            destination_address: destination_address.to_string(),
            amount,
            fee_rate,
        });
        let summary =
            self.build_transaction(network_name, utxos, destination_address, amount, fee_rate)?;
        summary.to_json().map_err(|e| CoreError::new(e.to_string()))
    }

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
    ) -> Result<Vec<u8>, CoreError> {
        self.record(Command::CreateAndSignTransaction {
            network_name: network_name.to_string(),
            first_mnemonic: first_mnemonic.to_string(),
            second_mnemonic: second_mnemonic.to_string(),
            utxos: utxos.to_string(),
            change_address: change_address.to_string(),
            destination_address: destination_address.to_string(),
            amount,
            fee_rate,
        });
        if first_mnemonic.is_empty() || second_mnemonic.is_empty() {
            return Err(CoreError::new("missing mnemonic"));
        }
        let summary =
            self.build_transaction(network_name, utxos, destination_address, amount, fee_rate)?;
        self.sign(summary)
    }

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
    ) -> Result<Vec<u8>, CoreError> {
        self.record(Command::CreateAndSignRecoveryTransaction {
            network_name: network_name.to_string(),
            first_mnemonic: first_mnemonic.to_string(),
            second_descriptor: second_descriptor.to_string(),
            utxos: utxos.to_string(),
            change_address: change_address.to_string(),
            destination_address: destination_address.to_string(),
            amount,
            fee_rate,
        });
        if first_mnemonic.is_empty() {
            return Err(CoreError::new("missing mnemonic"));
        }
        if second_descriptor.is_empty() {
            return Err(CoreError::new("missing descriptor"));
        }
        let summary =
            self.build_transaction(network_name, utxos, destination_address, amount, fee_rate)?;
        self.sign(summary)
    }

    fn create_ephemeral_social_key_pair(&self) -> Result<Vec<u8>, CoreError> {
        self.record(Command::CreateEphemeralSocialKeyPair);
        let id = self.next_id();

        let mut key = Vec::with_capacity(KEY_LEN);
        key.extend_from_slice(&id.to_be_bytes());
        key.extend_from_slice(&(!id).to_be_bytes());
        let key_hex = hex::encode(key);

        let pair = EphemeralKeyPair {
            public_key: key_hex.clone(),
            private_key: key_hex,
        };
        pair.to_json().map_err(|e| CoreError::new(e.to_string()))
    }

    fn validate_ephemeral_social_public_key(&self, public_key_hex: &str) -> Result<(), CoreError> {
        self.record(Command::ValidateEphemeralSocialPublicKey {
            public_key_hex: public_key_hex.to_string(),
        });
        decode_key(public_key_hex).map(|_| ())
    }

    fn encrypt_with_ephemeral_social_public_key(
        &self,
        public_key_hex: &str,
        data: &str,
    ) -> Result<String, CoreError> {
        self.record(Command::EncryptWithEphemeralSocialPublicKey {
            public_key_hex: public_key_hex.to_string(),
            data: data.to_string(),
        });
        let key = decode_key(public_key_hex)?;
        Ok(hex::encode(xor(data.as_bytes(), &key)))
    }

    fn decrypt_with_ephemeral_social_private_key(
        &self,
        private_key_hex: &str,
        encrypted: &str,
    ) -> Result<String, CoreError> {
        self.record(Command::DecryptWithEphemeralSocialPrivateKey {
            private_key_hex: private_key_hex.to_string(),
            encrypted: encrypted.to_string(),
        });
        let key = decode_key(private_key_hex)?;
        let ciphertext = hex::decode(encrypted)
            .map_err(|e| CoreError::new(format!("invalid ciphertext: {}", e)))?;
        String::from_utf8(xor(&ciphertext, &key))
            .map_err(|_| CoreError::new("decryption failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_addresses_range_checks() {
        let core = MockWalletCore::new();
        let err = core.get_addresses("regtest", "", "", 0, 0).unwrap_err();
        assert_eq!(
            err.message(),
            "invalid amount of addresses [0], must be greater than 0"
        );
        assert!(core.get_addresses("regtest", "", "", 0, 256).is_err());
        assert!(core.get_addresses("regtest", "", "", -1, 1).is_err());
        assert!(core.get_addresses("regtest", "", "", 1 << 32, 1).is_err());
        assert_eq!(core.call_count(), 4);
    }

    #[test]
    fn test_dust_change() {
        let core = MockWalletCore::new();
        let utxos = r#"[{"Amount":10000}]"#;
        let summary = core
            .build_transaction("regtest", utxos, "dest", 10_000 - 154 - 100, 1.0)
            .unwrap();
        assert_eq!(summary.change, 100);
        assert!(summary.change_is_dust);

        let summary = core
            .build_transaction("regtest", utxos, "dest", 10_000 - 154, 1.0)
            .unwrap();
        assert_eq!(summary.change, 0);
        assert!(!summary.change_is_dust);
    }

    #[test]
    fn test_bad_utxos() {
        let core = MockWalletCore::new();
        let err = core
            .build_transaction("regtest", "[{\"Vout\":1}]", "dest", 1, 1.0)
            .unwrap_err();
        assert_eq!(err.message(), "invalid utxos: missing Amount");
        assert!(core
            .build_transaction("regtest", "nope", "dest", 1, 1.0)
            .is_err());
    }

    #[test]
    fn test_fee_rate_rounds_up() {
        let core = MockWalletCore::new();
        let summary = core
            .build_transaction("regtest", r#"[{"Amount":5000}]"#, "dest", 1000, 1.5)
            .unwrap();
        assert_eq!(summary.fees, 231);
    }
}
