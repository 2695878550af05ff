//! Abstractions of MSET and MSETNX commands.
//!
//! For general information about these commands, see the Redis documentation of
//! [MSET](<https://redis.io/commands/mset/>) and [MSETNX](<https://redis.io/commands/msetnx/>).
//!
//! Key/value pairs are accepted in two shapes:
//! * Any sequence of pairs, including maps. Pairs are sent in iteration order.
//! * Two parallel sequences of keys and values, which need to have the same length.
//!
//! ```no_run
//!# use core::str::FromStr;
//!# use std::collections::BTreeMap;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::commands::mset::MultiSetCommand;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//!# let mut stack = Stack::default();
//!# let clock = StandardClock::default();
//!#
//!# let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//!# let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!#
//! // Pairs
//! client.mset([("key1", "value1"), ("key2", "value2")]).unwrap();
//!
//! // Map
//! let map = BTreeMap::from([("key3", "value3"), ("key4", "value4")]);
//! client.mset(map).unwrap();
//!
//! // Parallel sequences
//! let command = MultiSetCommand::parallel(["key5", "key6"], ["value5", "value6"]).unwrap();
//! client.send(command).unwrap();
//!
//! // All or nothing: 0 as key1 already exists
//! assert_eq!(0, client.msetnx([("key1", "other"), ("key7", "value7")]).unwrap());
//! ```
use crate::commands::builder::{CommandBuilder, ToInteger, ToStringOption};
use crate::commands::set::expect_ok;
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use alloc::vec::Vec;
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Ordered key/value pairs
struct Pairs {
    inner: Vec<(Bytes, Bytes)>,
}

impl Pairs {
    fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        Pairs {
            inner: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    fn parallel<KI, VI, K, V>(keys: KI, values: VI) -> Result<Self, CommandErrors>
    where
        KI: IntoIterator<Item = K>,
        VI: IntoIterator<Item = V>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        let keys: Vec<Bytes> = keys.into_iter().map(Bytes::from).collect();
        let values: Vec<Bytes> = values.into_iter().map(Bytes::from).collect();

        if keys.len() != values.len() {
            return Err(CommandErrors::ArgumentMismatch);
        }

        Ok(Pairs {
            inner: keys.into_iter().zip(values).collect(),
        })
    }

    fn builder(&self, keyword: &'static str) -> CommandBuilder {
        let mut builder = CommandBuilder::with_capacity(keyword, self.inner.len() * 2);
        for (key, value) in &self.inner {
            builder = builder.arg(key).arg(value);
        }

        builder
    }
}

/// Abstraction of MSET command
pub struct MultiSetCommand {
    pairs: Pairs,
}

impl MultiSetCommand {
    /// Creates the command from a sequence of key/value pairs
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        MultiSetCommand { pairs: Pairs::new(pairs) }
    }

    /// Creates the command from parallel key and value sequences
    /// Returns [CommandErrors::ArgumentMismatch] if the lengths differ
    pub fn parallel<KI, VI, K, V>(keys: KI, values: VI) -> Result<Self, CommandErrors>
    where
        KI: IntoIterator<Item = K>,
        VI: IntoIterator<Item = V>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        Ok(MultiSetCommand {
            pairs: Pairs::parallel(keys, values)?,
        })
    }
}

impl<F> Command<F> for MultiSetCommand
where
    F: From<CommandBuilder> + ToStringOption,
{
    type Response = ();

    fn encode(&self) -> F {
        self.pairs.builder("MSET").into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        expect_ok(&frame)
    }
}

/// Abstraction of MSETNX command
///
/// Response is `1` if all keys were set, `0` if no key was set as at least one already existed.
pub struct MultiSetNxCommand {
    pairs: Pairs,
}

impl MultiSetNxCommand {
    /// Creates the command from a sequence of key/value pairs
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        MultiSetNxCommand { pairs: Pairs::new(pairs) }
    }

    /// Creates the command from parallel key and value sequences
    /// Returns [CommandErrors::ArgumentMismatch] if the lengths differ
    pub fn parallel<KI, VI, K, V>(keys: KI, values: VI) -> Result<Self, CommandErrors>
    where
        KI: IntoIterator<Item = K>,
        VI: IntoIterator<Item = V>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        Ok(MultiSetNxCommand {
            pairs: Pairs::parallel(keys, values)?,
        })
    }
}

impl<F> Command<F> for MultiSetNxCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        self.pairs.builder("MSETNX").into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [MultiSetCommand]
    pub fn mset<I, K, V>(&self, pairs: I) -> Result<(), CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringOption,
        I: IntoIterator<Item = (K, V)>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(MultiSetCommand::new(pairs))
    }

    /// Shorthand for [MultiSetNxCommand]
    pub fn msetnx<I, K, V>(&self, pairs: I) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        I: IntoIterator<Item = (K, V)>,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(MultiSetNxCommand::new(pairs))
    }
}
