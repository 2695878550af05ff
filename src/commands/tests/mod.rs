use crate::commands::Command;
use alloc::vec::Vec;
use bytes::Bytes;
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::Frame as Resp3Frame;

#[cfg(test)]
mod bitop;

/// Asserts RESP2 + RESP3 command arguments
pub(crate) fn assert_command<C>(expected: Vec<&'static str>, command: C)
where
    C: Command<Resp2Frame> + Command<Resp3Frame>,
{
    let expected: Vec<Bytes> = expected
        .into_iter()
        .map(|argument| Bytes::from_static(argument.as_bytes()))
        .collect();

    assert_eq!(expected, resp2_arguments(command.encode()));
    assert_eq!(expected, resp3_arguments(command.encode()));
}

/// Extracts the arguments of a RESP2 command frame
pub(crate) fn resp2_arguments(frame: Resp2Frame) -> Vec<Bytes> {
    match frame {
        Resp2Frame::Array(array) => array
            .into_iter()
            .map(|argument| match argument {
                Resp2Frame::BulkString(data) => data,
                other => panic!("Unexpected argument frame {:?}", other),
            })
            .collect(),
        other => panic!("Unexpected command frame {:?}", other),
    }
}

/// Extracts the arguments of a RESP3 command frame
pub(crate) fn resp3_arguments(frame: Resp3Frame) -> Vec<Bytes> {
    match frame {
        Resp3Frame::Array { data, attributes: _ } => data
            .into_iter()
            .map(|argument| match argument {
                Resp3Frame::BlobString { data, attributes: _ } => data,
                other => panic!("Unexpected argument frame {:?}", other),
            })
            .collect(),
        other => panic!("Unexpected command frame {:?}", other),
    }
}
