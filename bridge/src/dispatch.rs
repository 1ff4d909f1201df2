//! Routing of host calls to the wallet core.

use common::{Failure, Method, MethodCall, Reply};
use log::debug;

use crate::commands::parse_command;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::handlers::handle_command;
use crate::wallet::WalletCore;

/// Answers host calls using a [`WalletCore`].
///
/// The dispatcher keeps no per-call state; `dispatch` can be called from
/// several threads at once.
pub struct Dispatcher<C: WalletCore> {
    core: C,
    config: BridgeConfig,
}

impl<C: WalletCore> Dispatcher<C> {
    pub fn new(core: C) -> Self {
        Self::with_config(core, BridgeConfig::default())
    }

    pub fn with_config(core: C, config: BridgeConfig) -> Self {
        Self { core, config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    /// Handles one call and produces its reply.
    ///
    /// Unknown method names yield [`Reply::NotImplemented`] without touching
    /// the wallet core. Any failure while handling a known method becomes a
    /// [`Reply::Error`] carrying that method's category.
    pub fn dispatch(&self, call: &MethodCall) -> Reply {
        let Some(method) = Method::from_name(&call.method) else {
            debug!("Method not implemented: {}", call.method);
            return Reply::NotImplemented;
        };
        debug!("Dispatching {}", method);

        match self.run(method, call) {
            Ok(payload) => Reply::Success(payload),
            Err(e) => Reply::Error(Failure::new(method, e.to_string())),
        }
    }

    fn run(&self, method: Method, call: &MethodCall) -> Result<common::Payload, BridgeError> {
        let command = parse_command(method, call)?;
        handle_command(&self.core, &command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockWalletCore;
    use common::Payload;

    #[test]
    fn test_unknown_method() {
        let dispatcher = Dispatcher::new(MockWalletCore::new());
        for name in ["", "createnewwallet", "signMessage"] {
            assert_eq!(dispatcher.dispatch(&MethodCall::new(name)), Reply::NotImplemented);
        }
        assert_eq!(dispatcher.core().call_count(), 0);
    }

    #[test]
    fn test_argument_error_skips_core() {
        let dispatcher = Dispatcher::new(MockWalletCore::new());
        let call = MethodCall::new("getAddresses").arg("num", "three");

        match dispatcher.dispatch(&call) {
            Reply::Error(failure) => {
                assert_eq!(failure.category, "GenerateAddresses Failure");
                assert!(failure.message.contains("num"));
                assert!(failure.message.contains("three"));
            }
            other => panic!("unexpected reply: {:?}", other),
        }
        assert_eq!(dispatcher.core().call_count(), 0);
    }

    #[test]
    fn test_validate_success_is_empty() {
        let dispatcher = Dispatcher::new(MockWalletCore::new());
        let call = MethodCall::new("validateEphemeralSocialPublicKey")
            .arg("publicKeyHex", "000102030405060708090a0b0c0d0e0f");
        assert_eq!(dispatcher.dispatch(&call), Reply::Success(Payload::Empty));
    }
}
