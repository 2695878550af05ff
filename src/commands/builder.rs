//! Builder for constructing RESP2/3 frames
//!
//! Every command abstraction assembles its ordered argument list with [CommandBuilder].
//! Arguments are [Bytes] with their exact length, so keys and values may contain any binary data,
//! including zero bytes. Integers are written as decimal ASCII.
//!
//! The builder can also be used to execute custom/arbitrary commands. See [CustomCommand](crate::commands::custom)
//! for more details.
//!
//! # Creating generic frames
//! The following example demonstrates the creation of command frame for [GETRANGE](https://redis.io/commands/getrange/).
//! ```
//! use embedded_redis_strings::commands::builder::CommandBuilder;
//! use redis_protocol::resp2::types::Frame as Resp2Frame;
//!
//! let _frame: Resp2Frame = CommandBuilder::new("GETRANGE")
//!     .arg_static("mykey")
//!     .arg_int(0)
//!     .arg_int(-1)
//!     .into();
//! ```
//! # Improved performance
//! For best performance, especially with large amounts of data, it is recommended to use [Bytes](<https://docs.rs/bytes/latest/bytes/>).
//! ```
//!# use bytes::Bytes;
//! use embedded_redis_strings::commands::builder::CommandBuilder;
//!# use redis_protocol::resp2::types::Frame as Resp2Frame;
//!#
//! // Using Bytes avoids data copy, as clone() is shallow
//! let value = Bytes::from_static(b"Large\0binary value");
//!
//! let _frame: Resp2Frame = CommandBuilder::new("APPEND")
//!     .arg_static("mykey")
//!     .arg(&value)
//!     .into();
//! ```
use crate::commands::custom::CustomCommand;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use bytes::{Bytes, BytesMut};
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::Frame as Resp3Frame;

/// Builder for constructing RESP2/3 frames
#[derive(Clone, Default)]
pub struct CommandBuilder {
    pub(crate) elements: Vec<Bytes>,
}

impl CommandBuilder {
    pub fn new(keyword: &'static str) -> Self {
        CommandBuilder {
            elements: vec![Bytes::from_static(keyword.as_bytes())],
        }
    }

    /// Creates a builder with preallocated space for `capacity` arguments besides the keyword
    pub fn with_capacity(keyword: &'static str, capacity: usize) -> Self {
        let mut elements = Vec::with_capacity(capacity + 1);
        elements.push(Bytes::from_static(keyword.as_bytes()));

        CommandBuilder { elements }
    }

    /// Converts builder to command ready for being sent by Client
    pub fn to_command(self) -> CustomCommand {
        self.into()
    }

    /// Adds a static argument
    pub fn arg_static(mut self, arg: &'static str) -> Self {
        self.elements.push(Bytes::from_static(arg.as_bytes()));
        self
    }

    /// Adds a static argument if option is Some
    pub fn arg_static_option(mut self, arg: Option<&'static str>) -> Self {
        if let Some(arg_str) = arg {
            self.elements.push(Bytes::from_static(arg_str.as_bytes()));
        }
        self
    }

    /// Adds the decimal representation of an unsigned integer
    pub fn arg_uint(mut self, arg: usize) -> Self {
        let mut buffer = itoa::Buffer::new();
        self.elements.push(Bytes::copy_from_slice(buffer.format(arg).as_bytes()));
        self
    }

    /// Adds the decimal representation of a signed 64-bit integer
    pub fn arg_int(mut self, arg: i64) -> Self {
        let mut buffer = itoa::Buffer::new();
        self.elements.push(Bytes::copy_from_slice(buffer.format(arg).as_bytes()));
        self
    }

    /// Adds a float in fixed-point notation with six fractional digits
    pub fn arg_float(mut self, arg: f64) -> Self {
        self.elements.push(Bytes::from(format!("{:.6}", arg)));
        self
    }

    /// Adds a byte argument
    /// Note: Besides static, the most efficient way caused by the nature how Bytes cloning is working
    pub fn arg(mut self, arg: &Bytes) -> Self {
        self.elements.push(arg.clone());
        self
    }

    /// Just adding byte if option is Some
    pub fn arg_option(mut self, arg: Option<&Bytes>) -> Self {
        if let Some(inner) = arg {
            self.elements.push(inner.clone());
        }
        self
    }

    /// Adds all arguments in iteration order
    pub fn args<'b, I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = &'b Bytes>,
    {
        self.elements.extend(args.into_iter().cloned());
        self
    }
}

impl From<CommandBuilder> for Resp2Frame {
    fn from(builder: CommandBuilder) -> Self {
        Resp2Frame::Array(builder.elements.into_iter().map(Resp2Frame::BulkString).collect())
    }
}

impl From<CommandBuilder> for Resp3Frame {
    fn from(builder: CommandBuilder) -> Self {
        let data = builder
            .elements
            .into_iter()
            .map(|data| Resp3Frame::BlobString { data, attributes: None })
            .collect();

        Resp3Frame::Array { data, attributes: None }
    }
}

impl From<CommandBuilder> for CustomCommand {
    fn from(builder: CommandBuilder) -> Self {
        CustomCommand::new(builder)
    }
}

/// Unification for `to_string()` of RESP2/3 frames, used for status replies
pub trait ToStringOption {
    fn to_string_option(&self) -> Option<String>;
}

impl ToStringOption for Resp2Frame {
    fn to_string_option(&self) -> Option<String> {
        self.to_string()
    }
}

impl ToStringOption for Resp3Frame {
    fn to_string_option(&self) -> Option<String> {
        self.to_string()
    }
}

/// Unification for null check of RESP2/3 frames
pub trait IsNullFrame {
    fn is_null_frame(&self) -> bool;
}

impl IsNullFrame for Resp2Frame {
    fn is_null_frame(&self) -> bool {
        self.is_null()
    }
}

impl IsNullFrame for Resp3Frame {
    fn is_null_frame(&self) -> bool {
        self.is_null()
    }
}

/// Unification for extracting integer value of Frames
pub trait ToInteger {
    /// Returns the inner integer value, None in case frame is not integer type
    fn to_integer(&self) -> Option<i64>;
}

impl ToInteger for Resp2Frame {
    fn to_integer(&self) -> Option<i64> {
        match self {
            Resp2Frame::Integer(number) => Some(*number),
            _ => None,
        }
    }
}

impl ToInteger for Resp3Frame {
    fn to_integer(&self) -> Option<i64> {
        match self {
            Resp3Frame::Number { data, .. } => Some(*data),
            _ => None,
        }
    }
}

/// Trait for string extraction of RESP2/3 frames
pub trait ToStringBytes {
    /// Extracts Bytes of Bulk (RESP2) or BLOB (RESP3) frames
    /// None if frame was not Bulk/BLOB string
    fn to_string_bytes(&self) -> Option<Bytes>;
}

impl ToStringBytes for Resp2Frame {
    fn to_string_bytes(&self) -> Option<Bytes> {
        match self {
            Resp2Frame::BulkString(data) => Some(data.clone()),
            _ => None,
        }
    }
}

impl ToStringBytes for Resp3Frame {
    fn to_string_bytes(&self) -> Option<Bytes> {
        match self {
            Resp3Frame::BlobString { data, .. } => Some(data.clone()),
            _ => None,
        }
    }
}

/// Trait for accessing the elements of array replies
pub trait ToFrameArray: Sized {
    /// Returns the child frames, None if frame is not an array
    fn to_frame_array(self) -> Option<Vec<Self>>;
}

impl ToFrameArray for Resp2Frame {
    fn to_frame_array(self) -> Option<Vec<Self>> {
        match self {
            Resp2Frame::Array(frames) => Some(frames),
            _ => None,
        }
    }
}

impl ToFrameArray for Resp3Frame {
    fn to_frame_array(self) -> Option<Vec<Self>> {
        match self {
            Resp3Frame::Array { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// Flattens any reply to a single byte string
///
/// * Null and error frames are empty
/// * Strings are returned as they are, integers as decimal ASCII
/// * Arrays are the concatenation of their flattened elements
pub trait FlattenFrame {
    fn flatten(&self) -> Bytes;
}

impl FlattenFrame for Resp2Frame {
    fn flatten(&self) -> Bytes {
        match self {
            Resp2Frame::BulkString(data) | Resp2Frame::SimpleString(data) => data.clone(),
            Resp2Frame::Integer(number) => integer_bytes(*number),
            Resp2Frame::Array(frames) => concat(frames),
            _ => Bytes::new(),
        }
    }
}

impl FlattenFrame for Resp3Frame {
    fn flatten(&self) -> Bytes {
        match self {
            Resp3Frame::BlobString { data, .. } | Resp3Frame::SimpleString { data, .. } => data.clone(),
            Resp3Frame::Number { data, .. } => integer_bytes(*data),
            Resp3Frame::Array { data, .. } => concat(data),
            _ => Bytes::new(),
        }
    }
}

fn integer_bytes(number: i64) -> Bytes {
    Bytes::copy_from_slice(itoa::Buffer::new().format(number).as_bytes())
}

fn concat<F: FlattenFrame>(frames: &[F]) -> Bytes {
    if let [single] = frames {
        return single.flatten();
    }

    let mut buffer = BytesMut::new();
    for frame in frames {
        buffer.extend_from_slice(&frame.flatten());
    }

    buffer.freeze()
}
