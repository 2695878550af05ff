//! This crate offers a blocking Redis client for no_std targets, covering the string, bit and
//! counter command family. Both RESP2 and RESP3 protocol are supported.
//!
//! This crate consists of two parts:
//! * [network module](crate::network) for network details (connection handling, request round trip, etc.)
//! * [commands module](crate::commands) for Redis command abstractions
//!
//! ```no_run
//!# use core::str::FromStr;
//!# use embedded_nal::SocketAddr;
//!# use std_embedded_nal::Stack;
//!# use std_embedded_time::StandardClock;
//!# use embedded_redis_strings::network::ConnectionHandler;
//!#
//! let mut stack = Stack::default();
//! let clock = StandardClock::default();
//!
//! let server_address = SocketAddr::from_str("127.0.0.1:6379").unwrap();
//! let mut connection_handler = ConnectionHandler::resp2(server_address);
//! let client = connection_handler.connect(&mut stack, Some(&clock)).unwrap();
//!
//! client.set("key", "value").unwrap();
//! let response = client.get("key").unwrap().unwrap();
//! assert_eq!("value", response.as_str().unwrap());
//! ```
#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate alloc;

/// # Redis command abstractions
///
/// This crates includes abstractions of the Redis string commands:
/// * Scalar: [SET](crate::commands::set), [SETEX](crate::commands::setex), [SETNX](crate::commands::setnx),
///   [GET](crate::commands::get), [GETSET](crate::commands::getset), [APPEND](crate::commands::append),
///   [STRLEN](crate::commands::strlen)
/// * Ranges and bits: [SETRANGE/GETRANGE](crate::commands::range), [SETBIT/GETBIT/BITCOUNT](crate::commands::bit),
///   [BITOP](crate::commands::bitop)
/// * Multiple keys: [MSET/MSETNX](crate::commands::mset), [MGET](crate::commands::mget)
/// * Counters: [INCR/INCRBY/DECR/DECRBY](crate::commands::counter), [INCRBYFLOAT](crate::commands::incrbyfloat)
///
/// Each abstraction is implementing the [Command](crate::commands::Command) trait and adds a
/// shorthand method to [Client](crate::network::Client).
///
/// For executing arbitrary (not yet implemented) commands, [CustomCommand](crate::commands::custom)
/// may be used. As alternative you can create new commands by implementing the [Command](crate::commands::Command) trait.
pub mod commands;

/// # Connection and Client logic
///
/// ## Connection handling
///
/// Redis connection is managed by [ConnectionHandler](crate::network::ConnectionHandler).
/// Both [RESP2](https://redis.io/docs/reference/protocol-spec/) and [RESP3](https://github.com/antirez/RESP3/blob/master/spec.md) protocol
/// are supported.
///
/// Creating a new connection requires the following two things:
/// * A network stack implementing [embedded-nal](<https://docs.rs/embedded-nal/latest/embedded_nal/>)
/// * A clock implementing [embedded-time](<https://docs.rs/embedded-time/latest/embedded_time/>). Optional if no Timeout is configured.
/// ```no_run
///# use core::str::FromStr;
///# use embedded_nal::SocketAddr;
///# use std_embedded_nal::Stack;
///# use std_embedded_time::StandardClock;
///# use embedded_redis_strings::network::ConnectionHandler;
///#
/// let mut network_stack = Stack::default();
/// let clock = StandardClock::default();
///
/// // RESP2 protocol
/// let mut connection_handler = ConnectionHandler::resp2(SocketAddr::from_str("127.0.0.1:6379").unwrap());
/// let _client = connection_handler.connect(&mut network_stack, Some(&clock)).unwrap();
///
/// // RESP3 protocol
/// let mut connection_handler = ConnectionHandler::resp3(SocketAddr::from_str("127.0.0.1:6379").unwrap());
/// let _client = connection_handler.connect(&mut network_stack, Some(&clock)).unwrap();
/// ```
///
/// ConnectionHandler is caching the connection, so later recreation of new Clients is cheap.
///
/// ### Timeout
///
/// The client includes a timeout mechanism. This allows setting a time limit for each request round trip:
///
/// ```no_run
///# use core::str::FromStr;
///# use embedded_nal::SocketAddr;
///# use std_embedded_nal::Stack;
///# use std_embedded_time::StandardClock;
///# use embedded_redis_strings::network::ConnectionHandler;
///# use embedded_time::duration::Extensions;
///#
///# let mut network_stack = Stack::default();
///# let clock = StandardClock::default();
///#
///# let server_address = SocketAddr::from_str("127.0.0.1:6379").unwrap();
/// let mut connection_handler = ConnectionHandler::resp2(server_address);
/// connection_handler.timeout(500_000.microseconds());
/// # let _client = connection_handler.connect(&mut network_stack, Some(&clock)).unwrap();
/// ```
///
/// ### Memory
///
/// Each client buffers at most [MemoryParameters::buffer_size](crate::network::MemoryParameters) bytes
/// of a reply. Larger replies fail with [BufferOverflow](crate::network::CommandErrors::BufferOverflow).
///
/// ```no_run
///# use core::str::FromStr;
///# use embedded_nal::SocketAddr;
///# use std_embedded_nal::Stack;
///# use std_embedded_time::StandardClock;
///# use embedded_redis_strings::network::{ConnectionHandler, MemoryParameters};
///#
///# let mut network_stack = Stack::default();
///# let clock = StandardClock::default();
///#
///# let server_address = SocketAddr::from_str("127.0.0.1:6379").unwrap();
/// let mut connection_handler = ConnectionHandler::resp2(server_address);
/// connection_handler.memory(MemoryParameters { buffer_size: 1024 });
/// # let _client = connection_handler.connect(&mut network_stack, Some(&clock)).unwrap();
/// ```
///
/// ### Concurrency
///
/// While the Client is not Send, the connection handler is.
/// The handler is designed with the approach that the creation of new clients is cheap.
/// Thus, the use of short-lived clients in concurrent applications is not a problem.
///
/// ## Request round trip
///
/// Every command is executed by a single blocking round trip: The command is encoded, written
/// to the socket and the reply is read until one complete frame is decoded. Redis error replies
/// are returned as [ErrorResponse](crate::network::CommandErrors::ErrorResponse).
///
/// ### Response type
///
/// Response type dependents on executed command abstractions, e.g. [GetResponse](crate::commands::get::GetResponse)
/// in case of [GET command](crate::commands::get).
///
/// ### Fatal errors
///
/// After a timeout, a network error, a buffer overflow or a protocol violation, the reply of the
/// failed request may still arrive later. The client then rejects further commands with
/// [CommandErrors::Desynchronized](crate::network::CommandErrors::Desynchronized), and the next
/// [connect()](crate::network::ConnectionHandler::connect) closes the socket and opens a new one.
pub mod network;
