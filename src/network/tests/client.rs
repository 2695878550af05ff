use crate::network::client::CommandErrors::{
    BufferOverflow, CommandResponseViolation, Desynchronized, ErrorResponse, ProtocolViolation, TcpError, Timeout,
    TimerError,
};
use crate::network::client::Client;
use crate::network::protocol::{Resp2, Resp3};
use crate::network::response::MemoryParameters;
use crate::network::tests::mocks::{create_mocked_client, NetworkMockBuilder, SocketMock, TestClock};
use alloc::string::ToString;
use alloc::vec;
use core::cell::Cell;
use embedded_time::duration::Extensions;

#[test]
fn test_correct_message_sent() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n")
        .response(b"$5\r\nvalue\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    let response = client.get("key").unwrap().unwrap();
    assert_eq!("value", response.as_str().unwrap());
    assert!(!desynchronized.get());
}

#[test]
fn test_resp3_correct_message_sent() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n")
        .response_ok()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp3 {}, &desynchronized);

    client.set("key", "value").unwrap();
}

#[test]
fn test_send_partial() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send_partial(4)
        .send(164, "$3\r\nGET\r\n$3\r\nkey\r\n")
        .response_null_resp2()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert!(client.get("key").unwrap().is_none());
}

#[test]
fn test_send_would_block() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send_would_block()
        .send(164, "*2\r\n$4\r\nINCR\r\n$7\r\ncounter\r\n")
        .response(b":1\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(1, client.incr("counter").unwrap());
}

#[test]
fn test_send_tcp_error() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send_error().into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(TcpError, client.set("key", "value").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_send_no_progress() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send_partial(0).into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(TcpError, client.set("key", "value").unwrap_err());
}

#[test]
fn test_receive_tcp_error() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send(164, "").receive_tcp_error().into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(TcpError, client.get("key").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_error_response() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send(164, "").response_error().into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(
        ErrorResponse("Error".to_string()),
        client.set("key", "value").unwrap_err()
    );
    assert!(!desynchronized.get());
}

#[test]
fn test_resp3_simple_error_response() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response(b"-WRONGTYPE Operation against a key holding ")
        .response(b"the wrong kind of value\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp3 {}, &desynchronized);

    assert_eq!(
        ErrorResponse("WRONGTYPE Operation against a key holding the wrong kind of value".to_string()),
        client.append("key", "value").unwrap_err()
    );
}

#[test]
fn test_resp3_blob_error_response() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response(b"!10\r\nERR failed\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp3 {}, &desynchronized);

    assert_eq!(ErrorResponse("ERR failed".to_string()), client.strlen("key").unwrap_err());
}

#[test]
fn test_response_split() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response(b"+O")
        .response_no_data()
        .response(b"K\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    client.set("key", "value").unwrap();
}

#[test]
fn test_protocol_violation() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send(164, "").response(b"!x\r\n").into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(ProtocolViolation, client.get("key").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_command_response_violation() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send(164, "").response_ok().into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(CommandResponseViolation, client.strlen("key").unwrap_err());
    assert!(!desynchronized.get());
}

#[test]
fn test_buffer_overflow() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response(b"$10\r\n01234")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        0.microseconds(),
        &MemoryParameters { buffer_size: 4 },
        &desynchronized,
    );

    assert_eq!(BufferOverflow, client.get("key").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_timeout_expired() {
    let clock = TestClock::new(vec![
        100, // Timer creation
        200, // First receive() call
        300, // Second receive() call
    ]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response_no_data()
        .response_no_data()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        150.microseconds(),
        &MemoryParameters::default(),
        &desynchronized,
    );

    assert_eq!(Timeout, client.get("key").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_timeout_timer_error() {
    let clock = TestClock::new(vec![
        100, // Timer creation
        200, // First receive() call
    ]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response_no_data()
        .response_no_data()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        150.microseconds(),
        &MemoryParameters::default(),
        &desynchronized,
    );

    assert_eq!(TimerError, client.get("key").unwrap_err());
}

#[test]
fn test_timeout_timer_start_error() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        150.microseconds(),
        &MemoryParameters::default(),
        &desynchronized,
    );

    assert_eq!(TimerError, client.get("key").unwrap_err());
    assert!(!desynchronized.get());
}

#[test]
fn test_desynchronized_client_rejects_commands() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    // No further network calls are expected after the failed request
    let mut network = NetworkMockBuilder::new()
        .send(164, "*2\r\n$3\r\nGET\r\n$5\r\nfirst\r\n")
        .receive_tcp_error()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(TcpError, client.get("first").unwrap_err());
    assert_eq!(Desynchronized, client.get("second").unwrap_err());
    assert_eq!(Desynchronized, client.strlen("second").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_timeout_rejects_following_commands() {
    let clock = TestClock::new(vec![100, 200, 300]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "*2\r\n$3\r\nGET\r\n$5\r\nfirst\r\n")
        .response_no_data()
        .response_no_data()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        150.microseconds(),
        &MemoryParameters::default(),
        &desynchronized,
    );

    assert_eq!(Timeout, client.get("first").unwrap_err());
    assert_eq!(Desynchronized, client.get("second").unwrap_err());
}

#[test]
fn test_receive_connection_closed() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "")
        .response(b"$5\r\nva")
        .response_closed()
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(TcpError, client.get("key").unwrap_err());
    assert!(desynchronized.get());
}

#[test]
fn test_receive_connection_closed_with_timeout() {
    let clock = TestClock::new(vec![100]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new().send(164, "").response_closed().into_mock();

    let mut socket = SocketMock::new(164);
    let client = Client::new(
        &mut network,
        &mut socket,
        Resp2 {},
        Some(&clock),
        150.microseconds(),
        &MemoryParameters::default(),
        &desynchronized,
    );

    assert_eq!(TcpError, client.get("key").unwrap_err());
}

#[test]
fn test_scratch_reset_between_requests() {
    let clock = TestClock::new(vec![]);
    let desynchronized = Cell::new(false);

    let mut network = NetworkMockBuilder::new()
        .send(164, "*2\r\n$6\r\nSTRLEN\r\n$1\r\na\r\n")
        .response(b":3\r\n")
        .send(164, "*2\r\n$6\r\nSTRLEN\r\n$1\r\nb\r\n")
        .response(b":7\r\n")
        .into_mock();

    let mut socket = SocketMock::new(164);
    let client = create_mocked_client(&mut network, &mut socket, &clock, Resp2 {}, &desynchronized);

    assert_eq!(3, client.strlen("a").unwrap());
    assert_eq!(7, client.strlen("b").unwrap());
}
