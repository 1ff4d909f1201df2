//! Transaction building and signing. The core's JSON result is forwarded as
//! opaque bytes.

use common::Payload;

use crate::error::BridgeError;
use crate::wallet::WalletCore;

pub fn handle_create_transaction(
    core: &dyn WalletCore,
    network_name: &str,
    utxos: &str,
    change_address: &str,
    destination_address: &str,
    amount: i64,
    fee_rate: f64,
) -> Result<Payload, BridgeError> {
    let summary = core.create_transaction(
        network_name,
        utxos,
        change_address,
        destination_address,
        amount,
        fee_rate,
    )?;
    Ok(Payload::Bytes(summary))
}

#[allow(clippy::too_many_arguments)]
pub fn handle_create_and_sign_transaction(
    core: &dyn WalletCore,
    network_name: &str,
    first_mnemonic: &str,
    second_mnemonic: &str,
    utxos: &str,
    change_address: &str,
    destination_address: &str,
    amount: i64,
    fee_rate: f64,
) -> Result<Payload, BridgeError> {
    let signed = core.create_and_sign_transaction(
        network_name,
        first_mnemonic,
        second_mnemonic,
        utxos,
        change_address,
        destination_address,
        amount,
        fee_rate,
    )?;
    Ok(Payload::Bytes(signed))
}

#[allow(clippy::too_many_arguments)]
pub fn handle_create_and_sign_recovery_transaction(
    core: &dyn WalletCore,
    network_name: &str,
    first_mnemonic: &str,
    second_descriptor: &str,
    utxos: &str,
    change_address: &str,
    destination_address: &str,
    amount: i64,
    fee_rate: f64,
) -> Result<Payload, BridgeError> {
    let signed = core.create_and_sign_recovery_transaction(
        network_name,
        first_mnemonic,
        second_descriptor,
        utxos,
        change_address,
        destination_address,
        amount,
        fee_rate,
    )?;
    Ok(Payload::Bytes(signed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWalletCore;
    use common::{SignedTransaction, TransactionSummary};

    const UTXOS: &str = r#"[{"TxID":"aa","Vout":0,"Amount":100000}]"#;

    #[test]
    fn test_create_transaction_summary() {
        let core = MockWalletCore::new();
        let payload =
            handle_create_transaction(&core, "regtest", UTXOS, "change", "dest", 60_000, 1.0)
                .unwrap();
        let Payload::Bytes(bytes) = payload else {
            panic!("expected bytes");
        };

        let summary = TransactionSummary::from_json(&bytes).unwrap();
        assert_eq!(summary.total_input, 100_000);
        assert_eq!(summary.amount, 60_000);
        assert_eq!(summary.fees, 154);
        assert_eq!(summary.change, 100_000 - 60_000 - 154);
        assert!(!summary.change_is_dust);
    }

    #[test]
    fn test_core_failure_message_is_kept() {
        let core = MockWalletCore::new();
        let err =
            handle_create_transaction(&core, "regtest", UTXOS, "change", "dest", 200_000, 1.0)
                .unwrap_err();
        assert_eq!(err.to_string(), "insufficient funds: have 100000, need 200154");
    }

    #[test]
    fn test_signing_paths() {
        let core = MockWalletCore::new();
        let Payload::Bytes(bytes) = handle_create_and_sign_transaction(
            &core, "regtest", "first", "second", UTXOS, "change", "dest", 1_000, 2.0,
        )
        .unwrap() else {
            panic!("expected bytes");
        };
        let signed = SignedTransaction::from_json(&bytes).unwrap();
        assert!(signed.raw_bytes().is_ok());

        let err = handle_create_and_sign_recovery_transaction(
            &core, "regtest", "", "descriptor", UTXOS, "change", "dest", 1_000, 2.0,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "missing mnemonic");
    }
}
