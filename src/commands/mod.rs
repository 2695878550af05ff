pub mod append;
pub mod bit;
pub mod bitop;
pub mod builder;
pub mod counter;
pub mod custom;
pub mod get;
pub mod getset;
pub mod helpers;
pub mod incrbyfloat;
pub mod mget;
pub mod mset;
pub mod range;
pub mod set;
pub mod setex;
pub mod setnx;
pub mod strlen;
#[cfg(test)]
pub(crate) mod tests;

/// Error in case the Redis reply type does not fit the command
#[derive(Debug)]
pub struct ResponseTypeError {}

/// Generic command structure. F is either [Resp2Frame](redis_protocol::resp2::types::Frame) or
/// [Resp3Frame](redis_protocol::resp3::types::Frame)
pub trait Command<F> {
    /// Response type, either a custom evaluated "high-level" response or the original RESP frame
    type Response;

    /// Encodes the command to RESP2/RESP3 frame
    fn encode(&self) -> F;

    /// Translates the reply frame to the typed response of the command.
    ///
    /// Error replies are intercepted upfront and converted to CommandErrors::ErrorResponse,
    /// so they never reach this method.
    ///
    /// Returns Error only in case of protocol violation (e.g. received an array for a command
    /// that only returns integers)
    fn eval_response(&self, frame: F) -> Result<Self::Response, ResponseTypeError>;
}
