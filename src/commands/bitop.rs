//! Abstraction of BITOP command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/bitop/>).
//!
//! Combines any number of source keys bitwise and stores the result at the destination key.
//! Shorter sources are treated as zero-padded. The response is the length of the destination
//! string, which equals the length of the longest source.
//!
//! Source keys are accepted as any ordered sequence (array, slice iterator, Vec, ...) of types
//! convertible to [Bytes].
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::commands::bitop::{BitOpCommand, BitOperation};
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//!# let mut stack = Stack::default();
//!# let clock = StandardClock::default();
//!#
//!# let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//!# let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!#
//! client.set("a", "abc").unwrap();
//! client.set("b", "a").unwrap();
//!
//! assert_eq!(3, client.bitop_or("dest", ["a", "b"]).unwrap());
//!
//! let command = BitOpCommand::new(BitOperation::Xor, "dest", vec!["a", "b"]);
//! assert_eq!(3, client.send(command).unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use alloc::vec::Vec;
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Logical operator of BITOP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOperation {
    And,
    Or,
    Xor,
}

impl BitOperation {
    fn keyword(&self) -> &'static str {
        match self {
            BitOperation::And => "AND",
            BitOperation::Or => "OR",
            BitOperation::Xor => "XOR",
        }
    }
}

/// Abstraction of BITOP command
pub struct BitOpCommand {
    operation: BitOperation,
    destination: Bytes,
    keys: Vec<Bytes>,
}

impl BitOpCommand {
    pub fn new<D, I, K>(operation: BitOperation, destination: D, keys: I) -> Self
    where
        Bytes: From<D>,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        BitOpCommand {
            operation,
            destination: destination.into(),
            keys: keys.into_iter().map(Bytes::from).collect(),
        }
    }
}

impl<F> Command<F> for BitOpCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        CommandBuilder::with_capacity("BITOP", 2 + self.keys.len())
            .arg_static(self.operation.keyword())
            .arg(&self.destination)
            .args(&self.keys)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [BitOpCommand]
    pub fn bitop<D, I, K>(&self, operation: BitOperation, destination: D, keys: I) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<D>,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        self.send(BitOpCommand::new(operation, destination, keys))
    }

    /// Shorthand for [BitOpCommand] using AND operation
    pub fn bitop_and<D, I, K>(&self, destination: D, keys: I) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<D>,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        self.bitop(BitOperation::And, destination, keys)
    }

    /// Shorthand for [BitOpCommand] using OR operation
    pub fn bitop_or<D, I, K>(&self, destination: D, keys: I) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<D>,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        self.bitop(BitOperation::Or, destination, keys)
    }

    /// Shorthand for [BitOpCommand] using XOR operation
    pub fn bitop_xor<D, I, K>(&self, destination: D, keys: I) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<D>,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        self.bitop(BitOperation::Xor, destination, keys)
    }
}
