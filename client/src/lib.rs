//! Leafy Client Library.
//!
//! Typed async access to the Leafy command channel. A [`LeafyClient`] builds
//! [`MethodCall`](common::MethodCall)s, sends them over a [`Transport`] and
//! turns the [`Reply`](common::Reply) back into Rust values.
//!
//! # Example
//!
//! ```ignore
//! use leafy_client::{LeafyClient, LocalTransport};
//!
//! let client = LeafyClient::new(Box::new(LocalTransport::new(Dispatcher::new(core))));
//! let addresses = client
//!     .get_addresses("regtest", "first mnemonic", "descriptor", 0, 5)
//!     .await
//!     .unwrap();
//! println!("{:?}", addresses);
//! ```

mod client;
pub mod transport;

pub use client::{ClientError, LeafyClient};
pub use transport::{LocalTransport, Transport, TransportError};
