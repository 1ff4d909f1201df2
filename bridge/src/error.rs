//! Error types for the dispatcher.
//!
//! A failed call is reported to the host as a [`Failure`](common::Failure)
//! whose message is the `Display` of a [`BridgeError`]. Wallet-core messages
//! are forwarded verbatim.

use core::fmt;

/// Failure reported by a wallet-core operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    message: String,
}

impl CoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CoreError {}

impl From<String> for CoreError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for CoreError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// An argument string that could not be coerced to its declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    InvalidInteger {
        key: &'static str,
        value: String,
        reason: String,
    },
    InvalidRate {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ArgumentError {
    /// The argument key that failed to parse.
    pub fn key(&self) -> &'static str {
        match self {
            ArgumentError::InvalidInteger { key, .. } | ArgumentError::InvalidRate { key, .. } => {
                key
            }
        }
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::InvalidInteger { key, value, reason } => {
                write!(f, "invalid integer for {}: {:?} ({})", key, value, reason)
            }
            ArgumentError::InvalidRate { key, value, reason } => {
                write!(f, "invalid number for {}: {:?} ({})", key, value, reason)
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Everything that can fail while handling a recognized method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Argument coercion failed; the wallet core was not invoked.
    Argument(ArgumentError),
    /// `getAddresses` returned something that is not a JSON array of strings.
    MalformedAddresses(String),
    /// The wallet core reported a failure.
    Core(CoreError),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::Argument(e) => write!(f, "{}", e),
            BridgeError::MalformedAddresses(e) => write!(f, "{}", e),
            BridgeError::Core(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Argument(e) => Some(e),
            BridgeError::MalformedAddresses(_) => None,
            BridgeError::Core(e) => Some(e),
        }
    }
}

impl From<ArgumentError> for BridgeError {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<CoreError> for BridgeError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

/// Errors at the channel framing level, before or after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The message could not be decoded.
    Malformed(String),
    /// The message was addressed to a channel this bridge does not serve.
    UnknownChannel(String),
    /// The reply could not be encoded.
    Encode(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Malformed(e) => write!(f, "Malformed message: {}", e),
            CodecError::UnknownChannel(c) => write!(f, "Unknown channel: {}", c),
            CodecError::Encode(e) => write!(f, "Failed to encode: {}", e),
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_message_is_forwarded_verbatim() {
        let err: BridgeError = CoreError::new("insufficient funds").into();
        assert_eq!(err.to_string(), "insufficient funds");
    }

    #[test]
    fn test_argument_error_message() {
        let err = ArgumentError::InvalidInteger {
            key: "amount",
            value: "abc".into(),
            reason: "invalid digit found in string".into(),
        };
        assert_eq!(err.key(), "amount");
        assert_eq!(
            BridgeError::from(err).to_string(),
            "invalid integer for amount: \"abc\" (invalid digit found in string)"
        );
    }
}
