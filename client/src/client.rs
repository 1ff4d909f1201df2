//! Leafy channel client implementation.
//!
//! Provides async methods for all channel methods.

use common::{
    EphemeralKeyPair, Failure, Method, MethodCall, Payload, Reply, SignedTransaction,
    TransactionSummary, WalletInfo, DEFAULT_CHANNEL,
};

use bridge::codec::{decode_reply, encode_message};
use bridge::commands::{
    AMOUNT, CHANGE_ADDRESS, DATA, DESTINATION_ADDRESS, ENCRYPTED, FEE_RATE, FIRST_MNEMONIC,
    NETWORK_NAME, NUM, PRIVATE_KEY_HEX, PUBLIC_KEY_HEX, SECOND_DESCRIPTOR, SECOND_MNEMONIC,
    START_INDEX, UTXOS,
};

use log::debug;

use crate::transport::{Transport, TransportError};

/// Errors that can occur when using the Leafy client.
#[derive(Debug)]
pub enum ClientError {
    /// The transport failed or the bridge rejected the message.
    Transport(TransportError),
    /// A message or reply could not be encoded or decoded.
    Codec(String),
    /// The bridge answered with a categorized failure.
    Failure(Failure),
    /// The bridge does not know the method.
    NotImplemented(String),
    /// The reply does not have the expected shape.
    InvalidResponse(String),
}

impl From<TransportError> for ClientError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Transport error: {}", e),
            ClientError::Codec(e) => write!(f, "Codec error: {}", e),
            ClientError::Failure(e) => write!(f, "{}", e),
            ClientError::NotImplemented(m) => write!(f, "Not implemented: {}", m),
            ClientError::InvalidResponse(e) => write!(f, "Invalid response: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

/// Client for the Leafy command channel.
pub struct LeafyClient {
    transport: Box<dyn Transport>,
    channel: String,
}

impl LeafyClient {
    /// Creates a client talking on the default channel.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_channel(transport, DEFAULT_CHANNEL)
    }

    pub fn with_channel(transport: Box<dyn Transport>, channel: impl Into<String>) -> Self {
        Self {
            transport,
            channel: channel.into(),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Sends an arbitrary call and returns the bridge's reply as is.
    pub async fn call(&self, call: &MethodCall) -> Result<Reply, ClientError> {
        debug!("Calling {} on {}", call.method, self.channel);
        let msg = encode_message(&self.channel, call)
            .map_err(|e| ClientError::Codec(e.to_string()))?;
        let reply_raw = self.transport.exchange(&msg).await?;
        decode_reply(&reply_raw).map_err(|e| ClientError::Codec(e.to_string()))
    }

    /// Sends a call and unwraps a successful payload.
    async fn call_method(&self, call: MethodCall) -> Result<Payload, ClientError> {
        match self.call(&call).await? {
            Reply::Success(payload) => Ok(payload),
            Reply::Error(failure) => Err(ClientError::Failure(failure)),
            Reply::NotImplemented => Err(ClientError::NotImplemented(call.method)),
        }
    }

    async fn call_for_bytes(&self, call: MethodCall) -> Result<Vec<u8>, ClientError> {
        match self.call_method(call).await? {
            Payload::Bytes(bytes) => Ok(bytes),
            e => Err(ClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    async fn call_for_text(&self, call: MethodCall) -> Result<String, ClientError> {
        match self.call_method(call).await? {
            Payload::Text(text) => Ok(text),
            e => Err(ClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    /// Creates a new wallet on `network_name`.
    pub async fn create_new_wallet(&self, network_name: &str) -> Result<WalletInfo, ClientError> {
        let call = MethodCall::new(Method::CreateNewWallet.name()).arg(NETWORK_NAME, network_name);
        let bytes = self.call_for_bytes(call).await?;
        WalletInfo::from_json(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Derives `num` addresses starting at `start_index`.
    pub async fn get_addresses(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_descriptor: &str,
        start_index: i64,
        num: i64,
    ) -> Result<Vec<String>, ClientError> {
        let call = MethodCall::new(Method::GetAddresses.name())
            .arg(NETWORK_NAME, network_name)
            .arg(FIRST_MNEMONIC, first_mnemonic)
            .arg(SECOND_DESCRIPTOR, second_descriptor)
            .arg(START_INDEX, start_index.to_string())
            .arg(NUM, num.to_string());

        match self.call_method(call).await? {
            Payload::Strings(addresses) => Ok(addresses),
            e => Err(ClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    /// Builds an unsigned transaction.
    ///
    /// # Arguments
    /// * `utxos` - JSON array of the outputs to spend
    /// * `amount` - Amount to send, in satoshis
    /// * `fee_rate` - Fee rate in satoshis per vbyte
    pub async fn create_transaction(
        &self,
        network_name: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<TransactionSummary, ClientError> {
        let call = MethodCall::new(Method::CreateTransaction.name())
            .arg(NETWORK_NAME, network_name)
            .arg(UTXOS, utxos)
            .arg(CHANGE_ADDRESS, change_address)
            .arg(DESTINATION_ADDRESS, destination_address)
            .arg(AMOUNT, amount.to_string())
            .arg(FEE_RATE, fee_rate.to_string());
        let bytes = self.call_for_bytes(call).await?;
        TransactionSummary::from_json(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Builds and signs a transaction with both mnemonics.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_and_sign_transaction(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_mnemonic: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<SignedTransaction, ClientError> {
        let call = MethodCall::new(Method::CreateAndSignTransaction.name())
            .arg(NETWORK_NAME, network_name)
            .arg(FIRST_MNEMONIC, first_mnemonic)
            .arg(SECOND_MNEMONIC, second_mnemonic)
            .arg(UTXOS, utxos)
            .arg(CHANGE_ADDRESS, change_address)
            .arg(DESTINATION_ADDRESS, destination_address)
            .arg(AMOUNT, amount.to_string())
            .arg(FEE_RATE, fee_rate.to_string());
        let bytes = self.call_for_bytes(call).await?;
        SignedTransaction::from_json(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// Builds and signs a transaction through the recovery path.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_and_sign_recovery_transaction(
        &self,
        network_name: &str,
        first_mnemonic: &str,
        second_descriptor: &str,
        utxos: &str,
        change_address: &str,
        destination_address: &str,
        amount: i64,
        fee_rate: f64,
    ) -> Result<SignedTransaction, ClientError> {
        let call = MethodCall::new(Method::CreateAndSignRecoveryTransaction.name())
            .arg(NETWORK_NAME, network_name)
            .arg(FIRST_MNEMONIC, first_mnemonic)
            .arg(SECOND_DESCRIPTOR, second_descriptor)
            .arg(UTXOS, utxos)
            .arg(CHANGE_ADDRESS, change_address)
            .arg(DESTINATION_ADDRESS, destination_address)
            .arg(AMOUNT, amount.to_string())
            .arg(FEE_RATE, fee_rate.to_string());
        let bytes = self.call_for_bytes(call).await?;
        SignedTransaction::from_json(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub async fn create_ephemeral_social_key_pair(&self) -> Result<EphemeralKeyPair, ClientError> {
        let call = MethodCall::new(Method::CreateEphemeralSocialKeyPair.name());
        let bytes = self.call_for_bytes(call).await?;
        EphemeralKeyPair::from_json(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub async fn validate_ephemeral_social_public_key(
        &self,
        public_key_hex: &str,
    ) -> Result<(), ClientError> {
        let call = MethodCall::new(Method::ValidateEphemeralSocialPublicKey.name())
            .arg(PUBLIC_KEY_HEX, public_key_hex);
        match self.call_method(call).await? {
            Payload::Empty => Ok(()),
            e => Err(ClientError::InvalidResponse(format!(
                "Invalid response: {:?}",
                e
            ))),
        }
    }

    pub async fn encrypt_with_ephemeral_social_public_key(
        &self,
        public_key_hex: &str,
        data: &str,
    ) -> Result<String, ClientError> {
        let call = MethodCall::new(Method::EncryptWithEphemeralSocialPublicKey.name())
            .arg(PUBLIC_KEY_HEX, public_key_hex)
            .arg(DATA, data);
        self.call_for_text(call).await
    }

    pub async fn decrypt_with_ephemeral_social_private_key(
        &self,
        private_key_hex: &str,
        encrypted: &str,
    ) -> Result<String, ClientError> {
        let call = MethodCall::new(Method::DecryptWithEphemeralSocialPrivateKey.name())
            .arg(PRIVATE_KEY_HEX, private_key_hex)
            .arg(ENCRYPTED, encrypted);
        self.call_for_text(call).await
    }
}
