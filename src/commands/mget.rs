//! Abstraction of MGET command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/mget/>).
//!
//! Fetches the values of all given keys with one request. The response is positionally aligned
//! with the requested keys.
//!
//! **Missing keys are reported as empty values**, so a missing key can not be distinguished
//! from a key holding an empty string. Use [GET](crate::commands::get) if the difference matters.
//!
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
//! client.mset([("key1", "value1"), ("key2", "value2")]).unwrap();
//!
//! let response = client.mget(["key1", "missing", "key2"]).unwrap();
//! assert_eq!(3, response.len());
//! assert_eq!("value1", response.as_str(0).unwrap());
//! assert_eq!("", response.as_str(1).unwrap());
//! assert_eq!("value2", response.as_str(2).unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, FlattenFrame, ToFrameArray};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use alloc::vec::Vec;
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of MGET command
pub struct MultiGetCommand {
    keys: Vec<Bytes>,
}

impl MultiGetCommand {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        MultiGetCommand {
            keys: keys.into_iter().map(Bytes::from).collect(),
        }
    }
}

/// Values of MGET, one per requested key
#[derive(Clone, Debug, PartialEq)]
pub struct MultiGetResponse {
    values: Vec<Bytes>,
}

impl MultiGetResponse {
    pub fn new(values: Vec<Bytes>) -> Self {
        MultiGetResponse { values }
    }

    /// Number of values, equals the number of requested keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of the key at the given position. Empty for missing keys.
    pub fn get(&self, index: usize) -> Option<&Bytes> {
        self.values.get(index)
    }

    /// Value at the given position as &str. None if index is out of range or invalid UTF8.
    pub fn as_str(&self, index: usize) -> Option<&str> {
        core::str::from_utf8(self.values.get(index)?).ok()
    }

    /// Extracts the inner values
    pub fn to_vec(self) -> Vec<Bytes> {
        self.values
    }
}

impl<F> Command<F> for MultiGetCommand
where
    F: From<CommandBuilder> + ToFrameArray + FlattenFrame,
{
    type Response = MultiGetResponse;

    fn encode(&self) -> F {
        CommandBuilder::with_capacity("MGET", self.keys.len())
            .args(&self.keys)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        let slots = frame.to_frame_array().ok_or(ResponseTypeError {})?;

        Ok(MultiGetResponse::new(slots.iter().map(FlattenFrame::flatten).collect()))
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [MultiGetCommand]
    pub fn mget<I, K>(&self, keys: I) -> Result<MultiGetResponse, CommandErrors>
    where
        <P as Protocol>::FrameType: ToFrameArray,
        <P as Protocol>::FrameType: FlattenFrame,
        I: IntoIterator<Item = K>,
        Bytes: From<K>,
    {
        self.send(MultiGetCommand::new(keys))
    }
}
