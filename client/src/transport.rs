//! Transports carry encoded channel messages to a bridge and bring the
//! encoded reply back.

use std::sync::Arc;

use async_trait::async_trait;
use bridge::codec::process_message;
use bridge::{CodecError, Dispatcher, WalletCore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The bridge rejected the message before dispatch.
    Rejected(CodecError),
    /// The transport itself failed.
    Io(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Rejected(e) => write!(f, "Rejected by bridge: {}", e),
            TransportError::Io(e) => write!(f, "Transport failure: {}", e),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Rejected(e) => Some(e),
            TransportError::Io(_) => None,
        }
    }
}

impl From<CodecError> for TransportError {
    fn from(e: CodecError) -> Self {
        Self::Rejected(e)
    }
}

/// Generic trait to abstract the path between the host and the bridge.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one encoded message and returns the encoded reply.
    async fn exchange(&self, message: &[u8]) -> Result<Vec<u8>, TransportError>;
}

/// Transport to a bridge living in the same process.
///
/// Wallet-core operations are blocking and can be slow (key derivation,
/// signing), so each exchange runs on tokio's blocking pool.
pub struct LocalTransport<C: WalletCore + 'static> {
    dispatcher: Arc<Dispatcher<C>>,
}

impl<C: WalletCore + 'static> LocalTransport<C> {
    pub fn new(dispatcher: Dispatcher<C>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<C> {
        &self.dispatcher
    }
}

#[async_trait]
impl<C: WalletCore + 'static> Transport for LocalTransport<C> {
    async fn exchange(&self, message: &[u8]) -> Result<Vec<u8>, TransportError> {
        let dispatcher = Arc::clone(&self.dispatcher);
        let message = message.to_vec();

        tokio::task::spawn_blocking(move || process_message(&*dispatcher, &message))
            .await
            .map_err(|e| TransportError::Io(e.to_string()))?
            .map_err(TransportError::from)
    }
}
