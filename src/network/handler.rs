use crate::commands::custom::CustomCommand;
use crate::network::client::{Client, CommandErrors};
use crate::network::protocol::{Protocol, Resp2, Resp3};
use crate::network::response::MemoryParameters;
use core::cell::Cell;
use embedded_nal::{SocketAddr, TcpClientStack};
use embedded_time::duration::{Extensions, Microseconds};
use embedded_time::Clock;

/// Error handling for connection management
#[derive(Debug, PartialEq)]
pub enum ConnectionError {
    /// Unable to get a socket from network layer
    TcpSocketError,

    /// TCP Connect failed
    TcpConnectionFailed,

    /// Protocol switch (HELLO 3) failed with the given sub error
    ProtocolSwitchError(CommandErrors),
}

/// Connection handler for Redis client
///
/// The handler owns the socket and the connection settings, while clients just borrow them.
/// Creation of new clients is cheap, so clients are meant to be short-lived.
pub struct ConnectionHandler<N: TcpClientStack, P: Protocol> {
    /// Network details of Redis server
    remote: SocketAddr,

    /// Cached socket
    socket: Option<N::TcpSocket>,

    /// Previous handshake failed, so socket gets closed on next connect()
    handshake_failed: bool,

    /// Max. duration waiting for Redis responses, zero means no timeout
    timeout: Microseconds,

    memory: MemoryParameters,

    protocol: P,

    /// A failed request may still get its reply on the cached socket
    desynchronized: Cell<bool>,
}

impl<N: TcpClientStack> ConnectionHandler<N, Resp2> {
    /// Creates a new connection handler using RESP2 protocol
    pub fn resp2(remote: SocketAddr) -> ConnectionHandler<N, Resp2> {
        ConnectionHandler::new(remote, Resp2 {})
    }
}

impl<N: TcpClientStack> ConnectionHandler<N, Resp3> {
    /// Creates a new connection handler using RESP3 protocol
    pub fn resp3(remote: SocketAddr) -> ConnectionHandler<N, Resp3> {
        ConnectionHandler::new(remote, Resp3 {})
    }
}

impl<N: TcpClientStack, P: Protocol> ConnectionHandler<N, P> {
    fn new(remote: SocketAddr, protocol: P) -> Self {
        ConnectionHandler {
            remote,
            socket: None,
            handshake_failed: false,
            timeout: 0.microseconds(),
            memory: MemoryParameters::default(),
            protocol,
            desynchronized: Cell::new(false),
        }
    }

    /// Returns a Redis client. Caches the connection for future reuse.
    ///
    /// On a new connection the protocol handshake (RESP3 only) is executed before the client
    /// is returned. A connection left behind by a fatal request error (e.g. timeout) is closed
    /// and replaced, so a late reply of the failed request is never read.
    pub fn connect<'a, C: Clock>(
        &'a mut self,
        network: &'a mut N,
        clock: Option<&'a C>,
    ) -> Result<Client<'a, N, C, P>, ConnectionError> {
        // Socket state is unclear after a failed handshake or a failed request
        if self.desynchronized.get() {
            tracing::warn!("replacing connection with pending reply of a failed request");
            self.disconnect(network);
        } else if self.handshake_failed {
            self.disconnect(network);
        }

        if self.socket.is_none() {
            self.connect_socket(network)?;
            self.handshake(network, clock)?;
        }

        Ok(self.create_client(network, clock))
    }

    /// Closes the cached connection
    pub fn disconnect(&mut self, network: &mut N) {
        if let Some(socket) = self.socket.take() {
            let _ = network.close(socket);
        }

        self.handshake_failed = false;
        self.desynchronized.set(false);
    }

    /// Sets the max. duration waiting for Redis responses
    pub fn timeout(&mut self, timeout: Microseconds) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /// Sets the memory limits of created clients
    pub fn memory(&mut self, memory: MemoryParameters) -> &mut Self {
        self.memory = memory;
        self
    }

    /// Creates a new TCP connection
    fn connect_socket(&mut self, network: &mut N) -> Result<(), ConnectionError> {
        let mut socket = network.socket().map_err(|_| ConnectionError::TcpSocketError)?;

        if nb::block!(network.connect(&mut socket, self.remote)).is_err() {
            let _ = network.close(socket);
            tracing::warn!("TCP connect to Redis server failed");
            return Err(ConnectionError::TcpConnectionFailed);
        }

        self.socket = Some(socket);
        Ok(())
    }

    /// Executes the protocol handshake on a fresh connection
    fn handshake<C: Clock>(&mut self, network: &mut N, clock: Option<&C>) -> Result<(), ConnectionError> {
        let command = match self.protocol.handshake() {
            None => return Ok(()),
            Some(builder) => CustomCommand::new(builder),
        };

        let result = self.create_client(network, clock).send(command);
        if let Err(error) = result {
            self.handshake_failed = true;
            return Err(ConnectionError::ProtocolSwitchError(error));
        }

        Ok(())
    }

    fn create_client<'a, C: Clock>(&'a mut self, network: &'a mut N, clock: Option<&'a C>) -> Client<'a, N, C, P> {
        let socket = self.socket.as_mut().expect("socket is connected before creating clients");

        Client::new(
            network,
            socket,
            self.protocol.clone(),
            clock,
            self.timeout,
            &self.memory,
            &self.desynchronized,
        )
    }
}
