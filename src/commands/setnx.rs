//! Abstraction of SETNX command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/setnx/>).
//!
//! Sets the key only if it does not exist yet. The response is the reply integer:
//! `1` if the key was set, `0` if the key already existed and was left unchanged.
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
//! assert_eq!(1, client.setnx("lock", "owner-1").unwrap());
//! assert_eq!(0, client.setnx("lock", "owner-2").unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of SETNX command
pub struct SetNxCommand {
    key: Bytes,
    value: Bytes,
}

impl SetNxCommand {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        SetNxCommand {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<F> Command<F> for SetNxCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        CommandBuilder::new("SETNX").arg(&self.key).arg(&self.value).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [SetNxCommand]
    pub fn setnx<K, V>(&self, key: K, value: V) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(SetNxCommand::new(key, value))
    }
}
