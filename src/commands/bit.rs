//! Abstractions of SETBIT, GETBIT and BITCOUNT commands.
//!
//! For general information about these commands, see the Redis documentation of
//! [SETBIT](<https://redis.io/commands/setbit/>), [GETBIT](<https://redis.io/commands/getbit/>) and
//! [BITCOUNT](<https://redis.io/commands/bitcount/>).
//!
//! Bit values are always `0` or `1`. Any nonzero bit given to SETBIT is sent as `1`.
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::commands::bit::BitCountCommand;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//!# let mut stack = Stack::default();
//!# let clock = StandardClock::default();
//!#
//!# let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//!# let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!#
//! let previous = client.setbit("flags", 7, 1).unwrap();
//! assert_eq!(0, previous);
//! assert_eq!(1, client.getbit("flags", 7).unwrap());
//!
//! // Counting set bits of the first byte only
//! let count = client.send(BitCountCommand::new("flags").range(0, 0)).unwrap();
//! assert_eq!(1, count);
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of SETBIT command. Response is the bit value previously stored at offset.
pub struct SetBitCommand {
    key: Bytes,
    offset: usize,
    bit: bool,
}

impl SetBitCommand {
    pub fn new<K>(key: K, offset: usize, bit: u8) -> Self
    where
        Bytes: From<K>,
    {
        SetBitCommand {
            key: key.into(),
            offset,
            bit: bit != 0,
        }
    }
}

impl<F> Command<F> for SetBitCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = u8;

    fn encode(&self) -> F {
        CommandBuilder::new("SETBIT")
            .arg(&self.key)
            .arg_uint(self.offset)
            .arg_static(if self.bit { "1" } else { "0" })
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        to_bit(&frame)
    }
}

/// Abstraction of GETBIT command. Missing keys and offsets beyond the string length are `0`.
pub struct GetBitCommand {
    key: Bytes,
    offset: usize,
}

impl GetBitCommand {
    pub fn new<K>(key: K, offset: usize) -> Self
    where
        Bytes: From<K>,
    {
        GetBitCommand {
            key: key.into(),
            offset,
        }
    }
}

impl<F> Command<F> for GetBitCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = u8;

    fn encode(&self) -> F {
        CommandBuilder::new("GETBIT").arg(&self.key).arg_uint(self.offset).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        to_bit(&frame)
    }
}

/// Abstraction of BITCOUNT command
pub struct BitCountCommand {
    key: Bytes,

    /// Inclusive byte range, negative values count from the end
    range: Option<(i64, i64)>,
}

impl BitCountCommand {
    pub fn new<K>(key: K) -> Self
    where
        Bytes: From<K>,
    {
        BitCountCommand {
            key: key.into(),
            range: None,
        }
    }

    /// Just counts the bits of the bytes from start to end (both inclusive)
    pub fn range(mut self, start: i64, end: i64) -> Self {
        self.range = Some((start, end));
        self
    }
}

impl<F> Command<F> for BitCountCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        let builder = CommandBuilder::new("BITCOUNT").arg(&self.key);

        match self.range {
            None => builder.into(),
            Some((start, end)) => builder.arg_int(start).arg_int(end).into(),
        }
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

fn to_bit<F: ToInteger>(frame: &F) -> Result<u8, ResponseTypeError> {
    match frame.to_integer() {
        Some(0) => Ok(0),
        Some(_) => Ok(1),
        None => Err(ResponseTypeError {}),
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [SetBitCommand]
    pub fn setbit<K>(&self, key: K, offset: usize, bit: u8) -> Result<u8, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(SetBitCommand::new(key, offset, bit))
    }

    /// Shorthand for [GetBitCommand]
    pub fn getbit<K>(&self, key: K, offset: usize) -> Result<u8, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(GetBitCommand::new(key, offset))
    }

    /// Shorthand for [BitCountCommand], counting the bits of the whole string
    pub fn bitcount<K>(&self, key: K) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(BitCountCommand::new(key))
    }
}
