//! Abstraction of STRLEN command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/strlen/>).
//!
//! Response is the length of the string stored at key, `0` for missing keys.
use crate::commands::builder::{CommandBuilder, ToInteger};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of STRLEN command
pub struct StrLenCommand {
    key: Bytes,
}

impl StrLenCommand {
    pub fn new<K>(key: K) -> Self
    where
        Bytes: From<K>,
    {
        StrLenCommand { key: key.into() }
    }
}

impl<F> Command<F> for StrLenCommand
where
    F: From<CommandBuilder> + ToInteger,
{
    type Response = i64;

    fn encode(&self) -> F {
        CommandBuilder::new("STRLEN").arg(&self.key).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        frame.to_integer().ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [StrLenCommand]
    pub fn strlen<K>(&self, key: K) -> Result<i64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToInteger,
        Bytes: From<K>,
    {
        self.send(StrLenCommand::new(key))
    }
}
