//! The command table.
//!
//! One [`CommandDef`] per [`Method`], listing the argument keys it reads
//! and how each is coerced, including defaults. The table is a `static` and
//! never changes at runtime.

use common::{Command, Method, MethodCall};

use crate::args::{coerce, Param};
use crate::error::ArgumentError;

pub const NETWORK_NAME: &str = "networkName";
pub const FIRST_MNEMONIC: &str = "firstMnemonic";
pub const SECOND_MNEMONIC: &str = "secondMnemonic";
pub const SECOND_DESCRIPTOR: &str = "secondDescriptor";
pub const START_INDEX: &str = "startIndex";
pub const NUM: &str = "num";
pub const UTXOS: &str = "utxos";
pub const CHANGE_ADDRESS: &str = "changeAddress";
pub const DESTINATION_ADDRESS: &str = "destinationAddress";
pub const AMOUNT: &str = "amount";
pub const FEE_RATE: &str = "feeRate";
pub const PUBLIC_KEY_HEX: &str = "publicKeyHex";
pub const PRIVATE_KEY_HEX: &str = "privateKeyHex";
pub const DATA: &str = "data";
pub const ENCRYPTED: &str = "encrypted";

/// Definition of one channel method.
#[derive(Debug)]
pub struct CommandDef {
    pub method: Method,
    pub params: &'static [Param],
}

/// All commands, indexed in the same order as [`Method::ALL`].
pub static COMMANDS: [CommandDef; 9] = [
    CommandDef {
        method: Method::CreateNewWallet,
        params: &[Param::text(NETWORK_NAME)],
    },
    CommandDef {
        method: Method::GetAddresses,
        params: &[
            Param::text(NETWORK_NAME),
            Param::text(FIRST_MNEMONIC),
            Param::text(SECOND_DESCRIPTOR),
            Param::integer(START_INDEX, 0),
            Param::integer(NUM, 0),
        ],
    },
    CommandDef {
        method: Method::CreateTransaction,
        params: &[
            Param::text(NETWORK_NAME),
            Param::text(UTXOS),
            Param::text(CHANGE_ADDRESS),
            Param::text(DESTINATION_ADDRESS),
            Param::integer(AMOUNT, 0),
            Param::rate(FEE_RATE, 0.0),
        ],
    },
    CommandDef {
        method: Method::CreateAndSignTransaction,
        params: &[
            Param::text(NETWORK_NAME),
            Param::text(FIRST_MNEMONIC),
            Param::text(SECOND_MNEMONIC),
            Param::text(UTXOS),
            Param::text(CHANGE_ADDRESS),
            Param::text(DESTINATION_ADDRESS),
            Param::integer(AMOUNT, 0),
            Param::rate(FEE_RATE, 0.0),
        ],
    },
    CommandDef {
        method: Method::CreateAndSignRecoveryTransaction,
        params: &[
            Param::text(NETWORK_NAME),
            Param::text(FIRST_MNEMONIC),
            Param::text(SECOND_DESCRIPTOR),
            Param::text(UTXOS),
            Param::text(CHANGE_ADDRESS),
            Param::text(DESTINATION_ADDRESS),
            Param::integer(AMOUNT, 0),
            Param::rate(FEE_RATE, 0.0),
        ],
    },
    CommandDef {
        method: Method::CreateEphemeralSocialKeyPair,
        params: &[],
    },
    CommandDef {
        method: Method::ValidateEphemeralSocialPublicKey,
        params: &[Param::text(PUBLIC_KEY_HEX)],
    },
    CommandDef {
        method: Method::EncryptWithEphemeralSocialPublicKey,
        params: &[Param::text(PUBLIC_KEY_HEX), Param::text(DATA)],
    },
    CommandDef {
        method: Method::DecryptWithEphemeralSocialPrivateKey,
        params: &[Param::text(PRIVATE_KEY_HEX), Param::text(ENCRYPTED)],
    },
];

/// Returns the definition of `method`.
pub fn definition(method: Method) -> &'static CommandDef {
    // Method discriminants follow declaration order, which is the table order
    &COMMANDS[method as usize]
}

/// Coerces the arguments of `call` into the typed command for `method`.
///
/// The method has already been routed; `call.method` is not consulted.
pub fn parse_command(method: Method, call: &MethodCall) -> Result<Command, ArgumentError> {
    let mut args = coerce(definition(method).params, call)?;

    let command = match method {
        Method::CreateNewWallet => Command::CreateNewWallet {
            network_name: args.take_text(NETWORK_NAME),
        },
        Method::GetAddresses => Command::GetAddresses {
            network_name: args.take_text(NETWORK_NAME),
            first_mnemonic: args.take_text(FIRST_MNEMONIC),
            second_descriptor: args.take_text(SECOND_DESCRIPTOR),
            start_index: args.take_integer(START_INDEX),
            num: args.take_integer(NUM),
        },
        Method::CreateTransaction => Command::CreateTransaction {
            network_name: args.take_text(NETWORK_NAME),
            utxos: args.take_text(UTXOS),
            change_address: args.take_text(CHANGE_ADDRESS),
            destination_address: args.take_text(DESTINATION_ADDRESS),
            amount: args.take_integer(AMOUNT),
            fee_rate: args.take_rate(FEE_RATE),
        },
        Method::CreateAndSignTransaction => Command::CreateAndSignTransaction {
            network_name: args.take_text(NETWORK_NAME),
            first_mnemonic: args.take_text(FIRST_MNEMONIC),
            second_mnemonic: args.take_text(SECOND_MNEMONIC),
            utxos: args.take_text(UTXOS),
            change_address: args.take_text(CHANGE_ADDRESS),
            destination_address: args.take_text(DESTINATION_ADDRESS),
            amount: args.take_integer(AMOUNT),
            fee_rate: args.take_rate(FEE_RATE),
        },
        Method::CreateAndSignRecoveryTransaction => Command::CreateAndSignRecoveryTransaction {
            network_name: args.take_text(NETWORK_NAME),
            first_mnemonic: args.take_text(FIRST_MNEMONIC),
            second_descriptor: args.take_text(SECOND_DESCRIPTOR),
            utxos: args.take_text(UTXOS),
            change_address: args.take_text(CHANGE_ADDRESS),
            destination_address: args.take_text(DESTINATION_ADDRESS),
            amount: args.take_integer(AMOUNT),
            fee_rate: args.take_rate(FEE_RATE),
        },
        Method::CreateEphemeralSocialKeyPair => Command::CreateEphemeralSocialKeyPair,
        Method::ValidateEphemeralSocialPublicKey => Command::ValidateEphemeralSocialPublicKey {
            public_key_hex: args.take_text(PUBLIC_KEY_HEX),
        },
        Method::EncryptWithEphemeralSocialPublicKey => {
            Command::EncryptWithEphemeralSocialPublicKey {
                public_key_hex: args.take_text(PUBLIC_KEY_HEX),
                data: args.take_text(DATA),
            }
        }
        Method::DecryptWithEphemeralSocialPrivateKey => {
            Command::DecryptWithEphemeralSocialPrivateKey {
                private_key_hex: args.take_text(PRIVATE_KEY_HEX),
                encrypted: args.take_text(ENCRYPTED),
            }
        }
    };

    debug_assert!(args.is_empty(), "{} left arguments unread", method);
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ParamKind;

    #[test]
    fn test_table_order_matches_methods() {
        for (index, method) in Method::ALL.iter().enumerate() {
            assert_eq!(COMMANDS[index].method, *method);
            assert_eq!(definition(*method).method, *method);
        }
    }

    #[test]
    fn test_every_command_parses_from_empty_call() {
        // every declared parameter is consumed by its builder (see debug_assert)
        for method in Method::ALL {
            let command = parse_command(method, &MethodCall::new(method.name())).unwrap();
            assert_eq!(command.method(), method);
        }
    }

    #[test]
    fn test_numeric_defaults_are_zero() {
        for def in COMMANDS.iter() {
            for param in def.params {
                match param.kind {
                    ParamKind::Integer { default } => assert_eq!(default, 0),
                    ParamKind::Rate { default } => assert_eq!(default, 0.0),
                    ParamKind::Text => {}
                }
            }
        }
    }

    #[test]
    fn test_get_addresses_range() {
        let call = MethodCall::new("getAddresses")
            .arg(NETWORK_NAME, "regtest")
            .arg(START_INDEX, "5")
            .arg(NUM, "3");
        let command = parse_command(Method::GetAddresses, &call).unwrap();
        assert_eq!(
            command,
            Command::GetAddresses {
                network_name: "regtest".into(),
                first_mnemonic: String::new(),
                second_descriptor: String::new(),
                start_index: 5,
                num: 3,
            }
        );
    }

    #[test]
    fn test_bad_amount_is_rejected() {
        let call = MethodCall::new("createTransaction").arg(AMOUNT, "abc");
        let err = parse_command(Method::CreateTransaction, &call).unwrap_err();
        assert_eq!(err.key(), AMOUNT);
    }
}
