//! Abstractions of SETRANGE and GETRANGE commands.
//!
//! For general information about these commands, see the Redis documentation of
//! [SETRANGE](<https://redis.io/commands/setrange/>) and [GETRANGE](<https://redis.io/commands/getrange/>).
//!
//! Offsets are passed through unchanged, so GETRANGE follows the Redis semantics: both ends are
//! inclusive, negative indexes count from the end of the string.
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//!# let mut stack = Stack::default();
//!# let clock = StandardClock::default();
//!#
//!# let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//!# let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!#
//! client.set("greeting", "Hello World").unwrap();
//! assert_eq!(11, client.setrange("greeting", 6, "Redis").unwrap());
//!
//! let whole = client.getrange("greeting", 0, -1).unwrap();
//! assert_eq!("Hello Redis", whole.as_str().unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger, ToStringBytes};
use crate::commands::get::GetResponse;
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of SETRANGE command. Response is the length of the string after modification.
pub struct SetRangeCommand {
    key: Bytes,
    offset: usize,
    value: Bytes,
}

impl SetRangeCommand {
    pub fn new<K, V>(key: K, offset: usize, value: V) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        SetRangeCommand {
            key: key.into(),
            offset,
            value: value.into(),
        }
    }
}

impl<F> Command<F> for SetRangeCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        CommandBuilder::new("SETRANGE")
            .arg(&self.key)
            .arg_uint(self.offset)
            .arg(&self.value)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

/// Abstraction of GETRANGE command. Missing keys result in an empty response.
pub struct GetRangeCommand {
    key: Bytes,
    start: i64,
    end: i64,
}

impl GetRangeCommand {
    pub fn new<K>(key: K, start: i64, end: i64) -> Self
    where
        Bytes: From<K>,
    {
        GetRangeCommand {
            key: key.into(),
            start,
            end,
        }
    }
}

impl<F> Command<F> for GetRangeCommand
where
    F: From<CommandBuilder> + ToStringBytes,
{
    type Response = GetResponse;

    fn encode(&self) -> F {
        CommandBuilder::new("GETRANGE")
            .arg(&self.key)
            .arg_int(self.start)
            .arg_int(self.end)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame
            .to_string_bytes()
            .map(GetResponse::new)
            .ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [SetRangeCommand]
    pub fn setrange<K, V>(&self, key: K, offset: usize, value: V) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(SetRangeCommand::new(key, offset, value))
    }

    /// Shorthand for [GetRangeCommand]
    pub fn getrange<K>(&self, key: K, start: i64, end: i64) -> Result<GetResponse, CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringBytes,
        Bytes: From<K>,
    {
        self.send(GetRangeCommand::new(key, start, end))
    }
}
