use crate::commands::builder::CommandBuilder;
use crate::network::client::CommandErrors;
use alloc::string::{String, ToString};
use bytes::{Bytes, BytesMut};
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::DecodedFrame;
use redis_protocol::resp3::types::Frame as Resp3Frame;
use redis_protocol::types::RedisProtocolError;
use redis_protocol::{resp2, resp3};

/// Wire codec of a connection. Implemented for [Resp2] and [Resp3].
///
/// Commands are generic over the frame type, so the same command abstraction works with
/// both protocol versions.
pub trait Protocol: Clone {
    type FrameType: From<CommandBuilder>;

    /// Decodes the first complete frame of the given bytes
    /// Returns the frame and the number of consumed bytes, None if data is incomplete
    fn decode(&self, data: &Bytes) -> Result<Option<(Self::FrameType, usize)>, RedisProtocolError>;

    /// Serializes the frame into the given buffer
    fn encode_bytes(&self, buf: &mut BytesMut, frame: &Self::FrameType) -> Result<usize, RedisProtocolError>;

    /// Converts Redis error replies to [CommandErrors::ErrorResponse]
    fn assert_error(&self, frame: &Self::FrameType) -> Result<(), CommandErrors>;

    /// Command sent once on every new connection before any other command
    fn handshake(&self) -> Option<CommandBuilder> {
        None
    }
}

/// RESP2 protocol
#[derive(Clone, Debug, Default)]
pub struct Resp2 {}

impl Protocol for Resp2 {
    type FrameType = Resp2Frame;

    fn decode(&self, data: &Bytes) -> Result<Option<(Self::FrameType, usize)>, RedisProtocolError> {
        resp2::decode::decode(data)
    }

    fn encode_bytes(&self, buf: &mut BytesMut, frame: &Self::FrameType) -> Result<usize, RedisProtocolError> {
        resp2::encode::encode_bytes(buf, frame)
    }

    fn assert_error(&self, frame: &Self::FrameType) -> Result<(), CommandErrors> {
        if let Resp2Frame::Error(message) = frame {
            return Err(CommandErrors::ErrorResponse(message.to_string()));
        }

        Ok(())
    }
}

/// RESP3 protocol, requires Redis >= 6.0
///
/// Switching the connection to RESP3 is done by sending `HELLO 3` on connect.
#[derive(Clone, Debug, Default)]
pub struct Resp3 {}

impl Protocol for Resp3 {
    type FrameType = Resp3Frame;

    /// Streamed frames are not supported, as no string command replies with one.
    fn decode(&self, data: &Bytes) -> Result<Option<(Self::FrameType, usize)>, RedisProtocolError> {
        match resp3::decode::streaming::decode(data)? {
            Some((DecodedFrame::Complete(frame), size)) => Ok(Some((frame, size))),
            Some((DecodedFrame::Streaming(_), _)) | None => Ok(None),
        }
    }

    fn encode_bytes(&self, buf: &mut BytesMut, frame: &Self::FrameType) -> Result<usize, RedisProtocolError> {
        resp3::encode::complete::encode_bytes(buf, frame)
    }

    fn assert_error(&self, frame: &Self::FrameType) -> Result<(), CommandErrors> {
        match frame {
            Resp3Frame::SimpleError { data, .. } => Err(CommandErrors::ErrorResponse(data.to_string())),
            Resp3Frame::BlobError { data, .. } => Err(CommandErrors::ErrorResponse(
                String::from_utf8_lossy(data.as_ref()).into_owned(),
            )),
            _ => Ok(()),
        }
    }

    fn handshake(&self) -> Option<CommandBuilder> {
        Some(CommandBuilder::new("HELLO").arg_static("3"))
    }
}
