use common::Payload;

use crate::error::BridgeError;
use crate::wallet::WalletCore;

pub fn handle_create_new_wallet(
    core: &dyn WalletCore,
    network_name: &str,
) -> Result<Payload, BridgeError> {
    let info = core.create_new_wallet(network_name)?;
    Ok(Payload::Bytes(info))
}

pub fn handle_get_addresses(
    core: &dyn WalletCore,
    network_name: &str,
    first_mnemonic: &str,
    second_descriptor: &str,
    start_index: i64,
    num: i64,
) -> Result<Payload, BridgeError> {
    let raw = core.get_addresses(
        network_name,
        first_mnemonic,
        second_descriptor,
        start_index,
        num,
    )?;
    Ok(Payload::Strings(decode_addresses(&raw)?))
}

/// Decodes the core's address list: UTF-8 text holding a JSON array of strings.
fn decode_addresses(raw: &[u8]) -> Result<Vec<String>, BridgeError> {
    let text =
        core::str::from_utf8(raw).map_err(|e| BridgeError::MalformedAddresses(e.to_string()))?;
    serde_json::from_str::<Vec<String>>(text)
        .map_err(|e| BridgeError::MalformedAddresses(e.to_string()))
}
