//! Command dispatcher for the Leafy wallet core.
//!
//! The host application talks to the wallet core through a single named
//! channel. Each call carries a method name and a bag of optional string
//! arguments. The [`Dispatcher`]:
//! 1. Routes the name to one of nine known methods, or answers "not implemented"
//! 2. Coerces the arguments into a typed [`Command`](common::Command) using the
//!    table in [`commands`]
//! 3. Invokes the matching [`WalletCore`] operation
//! 4. Marshals the result, or a categorized failure, into a [`Reply`](common::Reply)
//!
//! The wallet core itself (key derivation, signing, encryption) is an external
//! collaborator behind the [`WalletCore`] trait.

pub mod args;
pub mod codec;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
mod handlers;
pub mod wallet;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::config::BridgeConfig;
pub use crate::dispatch::Dispatcher;
pub use crate::error::{ArgumentError, BridgeError, CodecError, CoreError};
pub use crate::wallet::WalletCore;
