use crate::commands::Command;
use crate::network::protocol::Protocol;
use crate::network::response::MemoryParameters;
use crate::network::scratch::RequestScratch;
use crate::network::timeout::Deadline;
use alloc::string::String;
use core::cell::{Cell, RefCell};
use core::fmt::{Debug, Formatter};
use core::ops::DerefMut;
use embedded_nal::TcpClientStack;
use embedded_time::duration::Microseconds;
use embedded_time::Clock;

/// Size of the chunks read from the socket
const RECEIVE_CHUNK_SIZE: usize = 64;

/// Error handling for command execution
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum CommandErrors {
    /// No response within expected time frame
    Timeout,
    /// Failed encoding TX command
    EncodingCommandFailed,
    /// Received an invalid response violating the RESP protocol.
    /// The following causes are conceivable
    /// * Bug in this library (e.g. incomplete implementation of RESP protocol)
    /// * Redis server bug
    /// * Network failure. As we are using TCP, only a network stack bug or other exotic causes (e.g. bit flip) is reasonable.
    ProtocolViolation,
    /// Low level network error
    TcpError,
    /// Upstream timer/clock failure
    TimerError,
    /// Received a reply type the command does not expect
    CommandResponseViolation,
    /// Redis error response. Inner value is the error message received.
    ErrorResponse(String),
    /// Received data did not fit in the response buffer
    BufferOverflow,
    /// Parallel key and value sequences differ in length
    ArgumentMismatch,
    /// A previous request failed fatally, so replies can no longer be mapped to requests.
    /// The connection is replaced on the next [ConnectionHandler::connect](crate::network::ConnectionHandler::connect).
    Desynchronized,
}

/// Blocking client executing one command per round trip.
///
/// Every command abstraction of [commands](crate::commands) adds a shorthand method, e.g.
/// [Client::get] or [Client::incr]. Clients are created by
/// [ConnectionHandler](crate::network::ConnectionHandler) and are cheap, short-lived objects.
///
/// The client is not Send. Requests are strictly sequential, each call blocks until the reply
/// is received, the configured timeout is reached or the network stack reports an error.
pub struct Client<'a, N: TcpClientStack, C: Clock, P: Protocol> {
    pub(crate) stack: RefCell<&'a mut N>,
    pub(crate) socket: RefCell<&'a mut N::TcpSocket>,
    pub(crate) protocol: P,
    pub(crate) clock: Option<&'a C>,

    /// Max. time waiting for a response, zero disables the timeout
    pub(crate) timeout_duration: Microseconds,

    pub(crate) scratch: RefCell<RequestScratch<P>>,

    /// Set by fatal errors, after which a late reply may still arrive on the socket.
    /// Shared with the connection handler, which replaces the socket on the next connect.
    pub(crate) desynchronized: &'a Cell<bool>,
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Client<'a, N, C, P> {
    pub(crate) fn new(
        stack: &'a mut N,
        socket: &'a mut N::TcpSocket,
        protocol: P,
        clock: Option<&'a C>,
        timeout_duration: Microseconds,
        memory: &MemoryParameters,
        desynchronized: &'a Cell<bool>,
    ) -> Self {
        Client {
            stack: RefCell::new(stack),
            socket: RefCell::new(socket),
            scratch: RefCell::new(RequestScratch::new(protocol.clone(), memory)),
            protocol,
            clock,
            timeout_duration,
            desynchronized,
        }
    }

    /// Sends the given command and blocks until the response is received and evaluated
    pub fn send<Cmd>(&self, command: Cmd) -> Result<Cmd::Response, CommandErrors>
    where
        Cmd: Command<P::FrameType>,
    {
        if self.desynchronized.get() {
            return Err(CommandErrors::Desynchronized);
        }

        let deadline = Deadline::start(self.clock, self.timeout_duration)?;
        let mut scratch = self.scratch.borrow_mut();
        scratch.reset();

        let data = scratch.encode(&command.encode())?;
        tracing::debug!(bytes = data.len(), "sending command");

        let frame = self
            .transmit(data, &deadline)
            .and_then(|_| self.receive(scratch.deref_mut(), &deadline))
            .map_err(|error| {
                tracing::warn!(?error, "request failed, connection is out of sync");
                self.desynchronized.set(true);
                error
            })?;

        self.protocol.assert_error(&frame)?;
        command
            .eval_response(frame)
            .map_err(|_| CommandErrors::CommandResponseViolation)
    }

    /// Writes the complete request to the socket
    fn transmit(&self, data: &[u8], deadline: &Deadline<C>) -> Result<(), CommandErrors> {
        let mut stack = self.stack.borrow_mut();
        let mut socket = self.socket.borrow_mut();
        let mut sent = 0;

        while sent < data.len() {
            match stack.send(socket.deref_mut(), &data[sent..]) {
                Ok(0) => return Err(CommandErrors::TcpError),
                Ok(count) => sent += count,
                Err(nb::Error::WouldBlock) => {
                    if deadline.expired()? {
                        return Err(CommandErrors::Timeout);
                    }
                }
                Err(nb::Error::Other(_)) => return Err(CommandErrors::TcpError),
            }
        }

        Ok(())
    }

    /// Reads from the socket until a complete reply frame is decoded
    fn receive(&self, scratch: &mut RequestScratch<P>, deadline: &Deadline<C>) -> Result<P::FrameType, CommandErrors> {
        let mut stack = self.stack.borrow_mut();
        let mut socket = self.socket.borrow_mut();
        let mut chunk = [0u8; RECEIVE_CHUNK_SIZE];

        loop {
            let response = scratch.response();

            if let Some(frame) = response.take_frame() {
                return Ok(frame);
            }

            if response.is_faulty() {
                return Err(CommandErrors::ProtocolViolation);
            }

            if response.is_full() {
                return Err(CommandErrors::BufferOverflow);
            }

            match stack.receive(socket.deref_mut(), &mut chunk) {
                // Peer closed the connection
                Ok(0) => return Err(CommandErrors::TcpError),
                Ok(count) => {
                    tracing::trace!(bytes = count, "received chunk");
                    response.append(&chunk[..count]);
                }
                Err(nb::Error::WouldBlock) => {
                    if deadline.expired()? {
                        return Err(CommandErrors::Timeout);
                    }
                }
                Err(nb::Error::Other(_)) => return Err(CommandErrors::TcpError),
            }
        }
    }
}

impl<'a, N: TcpClientStack, C: Clock, P: Protocol> Debug for Client<'a, N, C, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client")
            .field("timeout_duration", &self.timeout_duration)
            .field("desynchronized", &self.desynchronized.get())
            .finish()
    }
}
