//! Leafy channel CLI.
//!
//! Inspects the command channel without a wallet core: lists the known
//! methods and checks how a call would be routed and coerced.
//!
//! # Usage
//!
//! ```bash
//! # List methods, their arguments and failure categories
//! leafy_cli methods
//!
//! # Check a call given as key=value pairs (a bare key sends a null argument)
//! leafy_cli check getAddresses networkName=regtest startIndex=5 num=3
//!
//! # Check a call given as host JSON, and print the encoded channel message
//! leafy_cli check --call-json '{"method":"createNewWallet","arguments":{}}' --encode
//! ```

use clap::{Parser, Subcommand};

use bridge::args::ParamKind;
use bridge::codec::{decode_message, encode_message};
use bridge::commands::{parse_command, COMMANDS};
use bridge::{BridgeConfig, BridgeError};
use common::{Failure, Method, MethodCall};

#[derive(Parser, Debug)]
#[command(name = "leafy-cli")]
struct Cli {
    /// Channel name; defaults to $LEAFY_CHANNEL or leafy/core
    #[clap(long, global = true)]
    channel: Option<String>,

    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// List the known methods
    Methods,
    /// Route and coerce a call without running it
    Check {
        /// Method name
        #[clap(required_unless_present = "call_json")]
        method: Option<String>,
        /// Arguments as key=value
        args: Vec<String>,
        /// The whole call as host JSON
        #[clap(long, conflicts_with = "method")]
        call_json: Option<String>,
        /// Also print the encoded channel message as hex
        #[clap(long)]
        encode: bool,
    },
}

fn parse_call(method: &str, args: &[String]) -> MethodCall {
    args.iter()
        .fold(MethodCall::new(method), |call, arg| match arg.split_once('=') {
            Some((key, value)) => call.arg(key, value),
            None => call.null_arg(arg.as_str()),
        })
}

fn describe_kind(kind: ParamKind) -> String {
    match kind {
        ParamKind::Text => "text".to_string(),
        ParamKind::Integer { default } => format!("integer (default {})", default),
        ParamKind::Rate { default } => format!("number (default {})", default),
    }
}

fn print_methods() {
    for def in COMMANDS.iter() {
        println!("{}", def.method);
        println!("  failure category: {}", def.method.failure_category());
        for param in def.params {
            println!("  {}: {}", param.key, describe_kind(param.kind));
        }
    }
}

fn check_call(
    call: &MethodCall,
    channel: &str,
    encode: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if encode {
        let raw = encode_message(channel, call)?;
        // the bridge must be able to read back what we send
        decode_message(&raw)?;
        println!("message: {}", hex::encode(&raw));
    }

    let Some(method) = Method::from_name(&call.method) else {
        println!("not implemented");
        return Ok(());
    };

    match parse_command(method, call) {
        Ok(command) => println!("{}", serde_json::to_string_pretty(&command)?),
        Err(e) => {
            let failure = Failure::new(method, BridgeError::from(e).to_string());
            println!("{}", serde_json::to_string_pretty(&failure)?);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "debug")]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    }

    let cli = Cli::parse();
    let channel = cli
        .channel
        .unwrap_or_else(|| BridgeConfig::from_env().channel);
    log::debug!("Using channel {}", channel);

    match cli.command {
        CliCommand::Methods => print_methods(),
        CliCommand::Check {
            method,
            args,
            call_json,
            encode,
        } => {
            let call = match call_json {
                Some(json) => MethodCall::from_json(&json)?,
                None => parse_call(method.as_deref().unwrap_or_default(), &args),
            };
            check_call(&call, &channel, encode)?;
        }
    }
    Ok(())
}
