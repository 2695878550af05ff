//! Abstraction of GETSET command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/getset/>).
//!
//! Atomically sets the new value and returns the old one. `None` if the key did not exist.
use crate::commands::builder::{CommandBuilder, IsNullFrame, ToStringBytes};
use crate::commands::get::GetResponse;
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

/// Abstraction of GETSET command
pub struct GetSetCommand {
    key: Bytes,
    value: Bytes,
}

impl GetSetCommand {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        GetSetCommand {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<F> Command<F> for GetSetCommand
where
    F: From<CommandBuilder> + IsNullFrame + ToStringBytes,
{
    type Response = Option<GetResponse>;

    fn encode(&self) -> F {
        CommandBuilder::new("GETSET").arg(&self.key).arg(&self.value).into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        if frame.is_null_frame() {
            return Ok(None);
        }

        Ok(Some(GetResponse::new(frame.to_string_bytes().ok_or(ResponseTypeError {})?)))
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [GetSetCommand]
    pub fn getset<K, V>(&self, key: K, value: V) -> Result<Option<GetResponse>, CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringBytes,
        <P as Protocol>::FrameType: IsNullFrame,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(GetSetCommand::new(key, value))
    }
}
