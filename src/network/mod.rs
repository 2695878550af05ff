pub use client::{Client, CommandErrors};
pub use handler::{ConnectionError, ConnectionHandler};
pub use protocol::{Protocol, Resp2, Resp3};
pub use response::MemoryParameters;

pub(crate) mod client;
pub(crate) mod handler;
pub(crate) mod protocol;
pub(crate) mod response;
pub(crate) mod scratch;
pub(crate) mod timeout;

#[cfg(test)]
pub(crate) mod tests;
