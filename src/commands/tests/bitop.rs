use crate::commands::bitop::{BitOpCommand, BitOperation};
use crate::commands::helpers::{CmdStr, RespInt};
use crate::commands::tests::assert_command;
use crate::commands::Command;
use alloc::vec;
use alloc::vec::Vec;
use bytes::Bytes;

#[test]
fn test_encode_and() {
    assert_command(
        vec!["BITOP", "AND", "dest", "key1", "key2"],
        BitOpCommand::new(BitOperation::And, "dest", ["key1", "key2"]),
    );
}

#[test]
fn test_encode_or() {
    assert_command(
        vec!["BITOP", "OR", "dest", "key1", "key2", "key3"],
        BitOpCommand::new(BitOperation::Or, "dest", vec!["key1", "key2", "key3"]),
    );
}

#[test]
fn test_encode_xor_single_source() {
    assert_command(
        vec!["BITOP", "XOR", "dest", "key1"],
        BitOpCommand::new(BitOperation::Xor, "dest", ["key1"]),
    );
}

#[test]
fn test_encode_bytes_keys() {
    let keys: Vec<Bytes> = vec![Bytes::from_static(b"a"), Bytes::from_static(b"b")];

    assert_command(
        vec!["BITOP", "AND", "dest", "a", "b"],
        BitOpCommand::new(BitOperation::And, Bytes::from_static(b"dest"), keys),
    );
}

#[test]
fn test_eval_response_result_length() {
    let command = BitOpCommand::new(BitOperation::Or, "dest", ["key1", "key2"]);

    assert_eq!(6, command.eval_response(RespInt::new(6).to_integer()).unwrap());
    assert_eq!(6, command.eval_response(RespInt::new(6).to_number()).unwrap());
}

#[test]
fn test_eval_response_invalid_response() {
    let command = BitOpCommand::new(BitOperation::Or, "dest", ["key1", "key2"]);

    assert!(command.eval_response(CmdStr::new("OK").to_status()).is_err());
}
