//! Abstraction of SETEX command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/setex/>).
//!
//! Sets the value together with a TTL in seconds. Equivalent to `SET key value EX seconds`,
//! see [ExpirationPolicy](crate::commands::set::ExpirationPolicy) for more expiration options.
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
//! // Key expires in 60 seconds
//! client.setex("session", "token", 60).unwrap();
//! ```
use crate::commands::builder::{CommandBuilder, ToStringOption};
use crate::commands::set::expect_ok;
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of SETEX command
pub struct SetExCommand {
    key: Bytes,
    value: Bytes,

    /// TTL in seconds
    seconds: usize,
}

impl SetExCommand {
    pub fn new<K, V>(key: K, value: V, seconds: usize) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        SetExCommand {
            key: key.into(),
            value: value.into(),
            seconds,
        }
    }
}

impl<F> Command<F> for SetExCommand
where
    F: From<CommandBuilder> + ToStringOption,
{
    type Response = ();

    fn encode(&self) -> F {
        CommandBuilder::new("SETEX")
            .arg(&self.key)
            .arg_uint(self.seconds)
            .arg(&self.value)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        expect_ok(&frame)
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [SetExCommand]
    pub fn setex<K, V>(&self, key: K, value: V, seconds: usize) -> Result<(), CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringOption,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(SetExCommand::new(key, value, seconds))
    }
}
