//! Abstraction of INCRBYFLOAT command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/incrbyfloat/>).
//!
//! The increment is sent in fixed-point notation with six fractional digits, so smaller
//! fractions are rounded. The reply string is parsed back to [f64].
use crate::commands::builder::{CommandBuilder, ToStringBytes};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of INCRBYFLOAT command
pub struct IncrByFloatCommand {
    key: Bytes,
    delta: f64,
}

impl IncrByFloatCommand {
    pub fn new<K>(key: K, delta: f64) -> Self
    where
        Bytes: From<K>,
    {
        IncrByFloatCommand { key: key.into(), delta }
    }
}

impl<F> Command<F> for IncrByFloatCommand
where
    F: From<CommandBuilder> + ToStringBytes,
{
    type Response = f64;

    fn encode(&self) -> F {
        CommandBuilder::new("INCRBYFLOAT")
            .arg(&self.key)
            .arg_float(self.delta)
            .into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        let value = frame.to_string_bytes().ok_or(ResponseTypeError {})?;

        core::str::from_utf8(&value)
            .ok()
            .and_then(|text| text.trim().parse::<f64>().ok())
            .ok_or(ResponseTypeError {})
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [IncrByFloatCommand]
    pub fn incrbyfloat<K>(&self, key: K, delta: f64) -> Result<f64, CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringBytes,
        Bytes: From<K>,
    {
        self.send(IncrByFloatCommand::new(key, delta))
    }
}
