use crate::network::client::CommandErrors;
use crate::network::protocol::Protocol;
use crate::network::response::{MemoryParameters, ResponseBuffer};
use bytes::BytesMut;

/// Scratch memory of exactly one request.
///
/// Both the serialized command and the received reply live here. The buffers are reset at
/// the start of every request, so nothing is carried from one call to the next while the
/// allocations are reused.
pub(crate) struct RequestScratch<P: Protocol> {
    protocol: P,
    tx: BytesMut,
    rx: ResponseBuffer<P>,
}

impl<P: Protocol> RequestScratch<P> {
    pub fn new(protocol: P, memory: &MemoryParameters) -> Self {
        Self {
            protocol: protocol.clone(),
            tx: BytesMut::new(),
            rx: ResponseBuffer::new(protocol, memory),
        }
    }

    /// Starts a new request
    pub fn reset(&mut self) {
        self.tx.clear();
        self.rx.clear();
    }

    /// Serializes the frame into the request buffer
    pub fn encode(&mut self, frame: &P::FrameType) -> Result<&[u8], CommandErrors> {
        self.protocol
            .encode_bytes(&mut self.tx, frame)
            .map_err(|_| CommandErrors::EncodingCommandFailed)?;

        Ok(self.tx.as_ref())
    }

    pub fn response(&mut self) -> &mut ResponseBuffer<P> {
        &mut self.rx
    }
}
