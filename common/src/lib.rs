//! Common types for the Leafy command channel.
//!
//! This crate provides the types shared by the bridge (which owns the
//! wallet core) and the host-side clients. Everything that crosses the
//! channel is defined here and serializable with serde.
//!
//! # Trust boundary
//!
//! A [`MethodCall`] arrives weakly typed: every argument is a string or
//! absent. Turning it into a [`Command`] is the bridge's job; nothing in
//! this crate assumes the arguments are well formed.

pub mod message;
pub mod method;
pub mod types;

pub use message::{ChannelMessage, Command, Failure, MethodCall, Payload, Reply};
pub use method::Method;
pub use types::{EphemeralKeyPair, Network, SignedTransaction, TransactionSummary, WalletInfo};

/// Name of the channel the bridge listens on unless configured otherwise.
pub const DEFAULT_CHANNEL: &str = "leafy/core";
