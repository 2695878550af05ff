use crate::network::protocol::Protocol;
use bytes::{Buf, Bytes, BytesMut};

/// Memory limits of a client
#[derive(Clone, Debug)]
pub struct MemoryParameters {
    /// Max. number of buffered bytes of a not yet complete response
    pub buffer_size: usize,
}

impl Default for MemoryParameters {
    fn default() -> Self {
        Self { buffer_size: 65_536 }
    }
}

/// Collects the raw bytes of one reply until a complete frame could be decoded
pub(crate) struct ResponseBuffer<P: Protocol> {
    decoder: P,

    /// Unparsed data
    buffer: BytesMut,

    /// Decoded but not yet taken frame
    frame: Option<P::FrameType>,

    limit: usize,

    /// Decoding is skipped until the buffer holds at least this many bytes
    required: usize,

    /// Received data violating the protocol
    faulty: bool,
}

impl<P: Protocol> ResponseBuffer<P> {
    pub fn new(protocol: P, memory: &MemoryParameters) -> Self {
        Self {
            decoder: protocol,
            buffer: BytesMut::new(),
            frame: None,
            limit: memory.buffer_size,
            required: 0,
            faulty: false,
        }
    }

    /// Appends received data and tries decoding a frame
    pub fn append(&mut self, data: &[u8]) {
        if self.faulty {
            return;
        }

        self.buffer.extend_from_slice(data);

        if self.frame.is_none() && self.buffer.len() >= self.required {
            self.parse_frame();
        }
    }

    fn parse_frame(&mut self) {
        let bytes = Bytes::copy_from_slice(&self.buffer);

        match self.decoder.decode(&bytes) {
            Ok(Some((frame, size))) => {
                self.buffer.advance(size);
                self.frame = Some(frame);
                self.required = 0;
            }
            Ok(None) => self.required = blob_frame_len(&self.buffer).unwrap_or(0),
            Err(_) => self.faulty = true,
        }
    }

    /// Takes the decoded frame, None if reply is not complete yet
    pub fn take_frame(&mut self) -> Option<P::FrameType> {
        self.frame.take()
    }

    /// True if the buffered data exceeds the memory limit
    pub fn is_full(&self) -> bool {
        self.buffer.len() > self.limit
    }

    /// A protocol violation was detected. The connection is no longer usable for
    /// mapping replies to requests.
    pub fn is_faulty(&self) -> bool {
        self.faulty
    }

    /// Drops any buffered data, keeping the allocation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.frame = None;
        self.required = 0;
        self.faulty = false;
    }

    #[cfg(test)]
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }

    #[cfg(test)]
    pub fn required_bytes(&self) -> usize {
        self.required
    }
}

/// Total frame length of a blob string/error (`$`, `!`, `=`) as announced by its header.
/// None for other frame types, null blobs or an incomplete header.
fn blob_frame_len(data: &[u8]) -> Option<usize> {
    if !matches!(data.first(), Some(b'$' | b'!' | b'=')) {
        return None;
    }

    let header_end = data.windows(2).position(|window| window == b"\r\n")?;
    let length: usize = core::str::from_utf8(&data[1..header_end]).ok()?.parse().ok()?;

    Some(header_end + 2 + length + 2)
}
