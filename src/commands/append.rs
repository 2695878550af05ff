//! Abstraction of APPEND command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/append/>).
//!
//! Appends the value to the string stored at key, creating the key if missing.
//! Response is the length of the string after the append operation.
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of APPEND command
pub struct AppendCommand {
    key: Bytes,
    value: Bytes,
}

impl AppendCommand {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        AppendCommand {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<F> Command<F> for AppendCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        CommandBuilder::new("APPEND").arg(&self.key).arg(&self.value).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [AppendCommand]
    pub fn append<K, V>(&self, key: K, value: V) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(AppendCommand::new(key, value))
    }
}
