//! Abstractions of INCR, INCRBY, DECR and DECRBY commands.
//!
//! For general information about these commands, see the Redis documentation of
//! [INCR](<https://redis.io/commands/incr/>), [INCRBY](<https://redis.io/commands/incrby/>),
//! [DECR](<https://redis.io/commands/decr/>) and [DECRBY](<https://redis.io/commands/decrby/>).
//!
//! All four commands are covered by [CounterCommand]. A delta of exactly 1 is sent without
//! argument as INCR/DECR, any other delta as decimal argument of INCRBY/DECRBY.
//! The response is the value of the key after the operation. Missing keys start at 0.
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
//! client.set("a", "1").unwrap();
//! assert_eq!(2, client.incr("a").unwrap());
//! assert_eq!(-3, client.incrby("a", -5).unwrap());
//! assert_eq!(-4, client.decr("a").unwrap());
//! assert_eq!(6, client.decrby("a", -10).unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// INCR/INCRBY
    Increment,
    /// DECR/DECRBY
    Decrement,
}

/// Abstraction of INCR, INCRBY, DECR and DECRBY commands
pub struct CounterCommand {
    direction: Direction,
    key: Bytes,
    delta: i64,
}

impl CounterCommand {
    pub fn new<K>(direction: Direction, key: K, delta: i64) -> Self
    where
        Bytes: From<K>,
    {
        CounterCommand {
            direction,
            key: key.into(),
            delta,
        }
    }

    /// INCR command
    pub fn incr<K>(key: K) -> Self
    where
        Bytes: From<K>,
    {
        Self::new(Direction::Increment, key, 1)
    }

    /// INCRBY command
    pub fn incrby<K>(key: K, delta: i64) -> Self
    where
        Bytes: From<K>,
    {
        Self::new(Direction::Increment, key, delta)
    }

    /// DECR command
    pub fn decr<K>(key: K) -> Self
    where
        Bytes: From<K>,
    {
        Self::new(Direction::Decrement, key, 1)
    }

    /// DECRBY command
    pub fn decrby<K>(key: K, delta: i64) -> Self
    where
        Bytes: From<K>,
    {
        Self::new(Direction::Decrement, key, delta)
    }

    fn keyword(&self) -> &'static str {
        match (self.direction, self.delta == 1) {
            (Direction::Increment, true) => "INCR",
            (Direction::Increment, false) => "INCRBY",
            (Direction::Decrement, true) => "DECR",
            (Direction::Decrement, false) => "DECRBY",
        }
    }
}

impl<F> Command<F> for CounterCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        let builder = CommandBuilder::new(self.keyword()).arg(&self.key);

        if self.delta == 1 {
            return builder.into();
        }

        builder.arg_int(self.delta).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [CounterCommand::incr]
    pub fn incr<K>(&self, key: K) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(CounterCommand::incr(key))
    }

    /// Shorthand for [CounterCommand::incrby]
    pub fn incrby<K>(&self, key: K, delta: i64) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(CounterCommand::incrby(key, delta))
    }

    /// Shorthand for [CounterCommand::decr]
    pub fn decr<K>(&self, key: K) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(CounterCommand::decr(key))
    }

    /// Shorthand for [CounterCommand::decrby]
    pub fn decrby<K>(&self, key: K, delta: i64) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(CounterCommand::decrby(key, delta))
    }
}
