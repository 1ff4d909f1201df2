//! Wire encoding of the command channel.
//!
//! Requests are postcard-encoded [`ChannelMessage`]s and replies are
//! postcard-encoded [`Reply`]s. A message for another channel, or bytes
//! that do not decode, are rejected here and never reach the dispatcher.

use common::{ChannelMessage, MethodCall, Reply};
use log::warn;

use crate::dispatch::Dispatcher;
use crate::error::CodecError;
use crate::wallet::WalletCore;

pub fn encode_message(channel: &str, call: &MethodCall) -> Result<Vec<u8>, CodecError> {
    let msg = ChannelMessage {
        channel: channel.to_string(),
        call: call.clone(),
    };
    postcard::to_allocvec(&msg).map_err(|e| CodecError::Encode(e.to_string()))
}

pub fn decode_message(raw: &[u8]) -> Result<ChannelMessage, CodecError> {
    postcard::from_bytes(raw).map_err(|e| CodecError::Malformed(e.to_string()))
}

pub fn encode_reply(reply: &Reply) -> Result<Vec<u8>, CodecError> {
    postcard::to_allocvec(reply).map_err(|e| CodecError::Encode(e.to_string()))
}

pub fn decode_reply(raw: &[u8]) -> Result<Reply, CodecError> {
    postcard::from_bytes(raw).map_err(|e| CodecError::Malformed(e.to_string()))
}

/// Decodes one raw message, dispatches it and encodes the reply.
pub fn process_message<C: WalletCore>(
    dispatcher: &Dispatcher<C>,
    raw: &[u8],
) -> Result<Vec<u8>, CodecError> {
    let msg = decode_message(raw).map_err(|e| {
        warn!("Rejected message: {}", e);
        e
    })?;

    if msg.channel != dispatcher.config().channel {
        warn!("Rejected message for channel {}", msg.channel);
        return Err(CodecError::UnknownChannel(msg.channel));
    }

    let reply = dispatcher.dispatch(&msg.call);
    encode_reply(&reply)
}
