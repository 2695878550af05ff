//! Pass-through command for anything without a typed abstraction.
//!
//! A [CustomCommand] is created by [CommandBuilder::to_command]. The reply frame is handed back
//! untouched as [Resp2Frame](redis_protocol::resp2::types::Frame) or
//! [Resp3Frame](redis_protocol::resp3::types::Frame), error replies excepted: those still end up
//! as [CommandErrors::ErrorResponse](crate::network::CommandErrors::ErrorResponse).
//!
//! # Basic usage
//! Reading a key with [GETDEL](<https://redis.io/commands/getdel/>):
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::commands::builder::CommandBuilder;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//! let mut stack = Stack::default();
//! let clock = StandardClock::default();
//!
//! let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
//! let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!
//! let command = CommandBuilder::new("GETDEL").arg_static("session").to_command();
//! let frame = client.send(command).unwrap();
//! println!("{:?}", frame);
//! ```
use crate::commands::builder::CommandBuilder;
use crate::commands::{Command, ResponseTypeError};

pub struct CustomCommand {
    builder: CommandBuilder,
}

impl CustomCommand {
    pub fn new(builder: CommandBuilder) -> Self {
        CustomCommand { builder }
    }
}

impl<F> Command<F> for CustomCommand
where
    F: From<CommandBuilder>,
{
    type Response = F;

    fn encode(&self) -> F {
        F::from(self.builder.clone())
    }

    fn eval_response(&self, frame: F) -> Result<F, ResponseTypeError> {
        Ok(frame)
    }
}
