//! Abstraction of SET command.
//!
//! For general information about this command, see the [Redis documentation](<https://redis.io/commands/set/>).
//!
//! # Basic usage
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::commands::set::SetCommand;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//! let mut stack = Stack::default();
//! let clock = StandardClock::default();
//!
//! let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//! let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!
//! client.send(SetCommand::new("key", "value")).unwrap();
//! ```
//!
//! # Expiration (EX, PX, EXAT, PXAT)
//! Setting TTL can be achieved in the following way. Fore more details s. [ExpirationPolicy] enum.
//! ```
//!# use embedded_redis_strings::commands::set::{SetCommand, ExpirationPolicy};
//!#
//!  // Expires in 120 seconds
//!  let _command = SetCommand::new("key", "value")
//!      .expires(ExpirationPolicy::Seconds(120));
//! ```
//! # Exclusive condition (NX/XX)
//! Manage set condition. Fore more details s. [Exclusivity] enum.
//!
//! Using this options affects the return type. s. [ExclusiveSetResponse]
//! ```
//!# use embedded_redis_strings::commands::set::{SetCommand, Exclusivity};
//!#
//!  // Just set the key if its not existing yet
//!  let _command = SetCommand::new("key", "value")
//!      .set_exclusive(Exclusivity::SetIfMissing);
//! ```
//! # Return previous value (!GET)
//! Returns the previous value stored at the given key.
//!
//! Using this options affects the return type. s. [ReturnPreviousResponse]
//! ```
//!# use embedded_redis_strings::commands::set::SetCommand;
//!#
//!  let _command = SetCommand::new("key", "value").return_previous();
//! ```
//! # Shorthand
//! [Client](Client#method.set) provides a shorthand method for this command. Keys and values are
//! binary safe.
//! ```no_run
//!# use core::str::FromStr;
//!# use bytes::Bytes;
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
//! // Using &str arguments
//! client.set("key", "value").unwrap();
//!
//! // Using Bytes arguments
//! client.set(Bytes::from_static(b"key"), Bytes::from_static(b"\0binary\0")).unwrap();
//! ```
use crate::commands::builder::{CommandBuilder, IsNullFrame, ToStringBytes, ToStringOption};
use crate::commands::{Command, ResponseTypeError};
use crate::network::protocol::Protocol;
use crate::network::{Client, CommandErrors};
use bytes::Bytes;
use core::marker::PhantomData;
use embedded_nal::TcpClientStack;
use embedded_time::Clock;

pub enum ExpirationPolicy {
    /// No TTL is set
    Never,
    /// EX option
    Seconds(usize),
    /// PX option
    Milliseconds(usize),
    /// EXAT option
    TimestampSeconds(usize),
    /// PXAT option
    TimestampMilliseconds(usize),
    /// KEEPTTL option
    Keep,
}

pub enum Exclusivity {
    None,
    /// XX option
    SetIfExists,
    /// NX option
    SetIfMissing,
}

pub struct SetCommand<R> {
    key: Bytes,
    value: Bytes,
    expiration: ExpirationPolicy,
    exclusivity: Exclusivity,

    /// GET option
    return_old_value: bool,

    response_type: PhantomData<R>,
}

impl SetCommand<ConfirmationResponse> {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        Bytes: From<K>,
        Bytes: From<V>,
    {
        SetCommand {
            key: key.into(),
            value: value.into(),
            expiration: ExpirationPolicy::Never,
            exclusivity: Exclusivity::None,
            return_old_value: false,
            response_type: PhantomData,
        }
    }

    /// Set expiration (TTL)
    pub fn expires(mut self, policy: ExpirationPolicy) -> SetCommand<ConfirmationResponse> {
        self.expiration = policy;
        self
    }

    /// Only set key if Exclusivity condition is met
    pub fn set_exclusive(mut self, option: Exclusivity) -> SetCommand<ExclusiveSetResponse> {
        self.exclusivity = option;
        self.into_response()
    }
}

impl<R> SetCommand<R> {
    /// Returns the previous value by setting the GET option
    pub fn return_previous(mut self) -> SetCommand<ReturnPreviousResponse> {
        self.return_old_value = true;
        self.into_response()
    }

    /// Keeps all arguments, only the response evaluation changes
    fn into_response<T>(self) -> SetCommand<T> {
        SetCommand {
            key: self.key,
            value: self.value,
            expiration: self.expiration,
            exclusivity: self.exclusivity,
            return_old_value: self.return_old_value,
            response_type: PhantomData,
        }
    }
}

/// Response of a plain SET, the value was stored
pub type ConfirmationResponse = ();

/// Response if NX/XX option was set.
///
/// Some => SET was executed successfully.
/// None => Operation was not performed, as NX/XX condition was not met.
pub type ExclusiveSetResponse = Option<()>;

/// Response if GET option is used.
///
/// Some => The old string value stored at key.
/// None => The key did not exist.
pub type ReturnPreviousResponse = Option<Bytes>;

impl<F> Command<F> for SetCommand<ConfirmationResponse>
where
    F: From<CommandBuilder> + ToStringOption,
{
    type Response = ConfirmationResponse;

    fn encode(&self) -> F {
        self.get_builder().into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        expect_ok(&frame)
    }
}

impl<F> Command<F> for SetCommand<ExclusiveSetResponse>
where
    F: From<CommandBuilder> + ToStringOption + IsNullFrame,
{
    type Response = ExclusiveSetResponse;

    fn encode(&self) -> F {
        self.get_builder().into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        if frame.is_null_frame() {
            return Ok(None);
        }

        expect_ok(&frame).map(Some)
    }
}

impl<F> Command<F> for SetCommand<ReturnPreviousResponse>
where
    F: From<CommandBuilder> + IsNullFrame + ToStringBytes,
{
    type Response = ReturnPreviousResponse;

    fn encode(&self) -> F {
        self.get_builder().into()
    }

    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError> {
        if frame.is_null_frame() {
            return Ok(None);
        }

        Ok(Some(frame.to_string_bytes().ok_or(ResponseTypeError {})?))
    }
}

impl<R> SetCommand<R> {
    /// General logic for building the command
    fn get_builder(&self) -> CommandBuilder {
        CommandBuilder::new("SET")
            .arg(&self.key)
            .arg(&self.value)
            .arg_static_option(self.expiration_unit())
            .arg_option(self.expiration_time().as_ref())
            .arg_static_option(self.exclusive_option())
            .arg_static_option(self.get_option())
    }

    /// Returns the expiration time unit argument
    fn expiration_unit(&self) -> Option<&'static str> {
        match self.expiration {
            ExpirationPolicy::Never => None,
            ExpirationPolicy::Seconds(_) => Some("EX"),
            ExpirationPolicy::Milliseconds(_) => Some("PX"),
            ExpirationPolicy::TimestampSeconds(_) => Some("EXAT"),
            ExpirationPolicy::TimestampMilliseconds(_) => Some("PXAT"),
            ExpirationPolicy::Keep => Some("KEEPTTL"),
        }
    }

    /// Returns the expiration time
    fn expiration_time(&self) -> Option<Bytes> {
        match self.expiration {
            ExpirationPolicy::Seconds(time)
            | ExpirationPolicy::Milliseconds(time)
            | ExpirationPolicy::TimestampSeconds(time)
            | ExpirationPolicy::TimestampMilliseconds(time) => {
                Some(Bytes::copy_from_slice(itoa::Buffer::new().format(time).as_bytes()))
            }
            ExpirationPolicy::Never | ExpirationPolicy::Keep => None,
        }
    }

    /// Returns the exclusivity argument
    fn exclusive_option(&self) -> Option<&'static str> {
        match self.exclusivity {
            Exclusivity::None => None,
            Exclusivity::SetIfExists => Some("XX"),
            Exclusivity::SetIfMissing => Some("NX"),
        }
    }

    fn get_option(&self) -> Option<&'static str> {
        self.return_old_value.then_some("GET")
    }
}

/// Accepts only the status reply "OK"
pub(crate) fn expect_ok<F: ToStringOption>(frame: &F) -> Result<(), ResponseTypeError> {
    match frame.to_string_option() {
        Some(status) if status == "OK" => Ok(()),
        _ => Err(ResponseTypeError {}),
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    /// Shorthand for [SetCommand]
    /// For using options of SET command, use [SetCommand] directly instead
    pub fn set<K, V>(&self, key: K, value: V) -> Result<(), CommandErrors>
    where
        <P as Protocol>::FrameType: ToStringOption,
        Bytes: From<K>,
        Bytes: From<V>,
    {
        self.send(SetCommand::new(key, value))
    }
}
