//! Helpers for constructing reply frames, mainly used for testing command abstractions.
use alloc::vec::Vec;
use bytes::Bytes;
use redis_protocol::resp2::types::Frame as Resp2Frame;
use redis_protocol::resp3::types::Frame as Resp3Frame;

/// Helper for casting Strings to frame types
pub struct CmdStr<'a> {
    inner: &'a str,
}

impl<'a> CmdStr<'a> {
    pub fn new(inner: &'a str) -> Self {
        CmdStr { inner }
    }

    pub fn to_blob(&self) -> Resp3Frame {
        Resp3Frame::BlobString {
            data: Bytes::copy_from_slice(self.inner.as_bytes()),
            attributes: None,
        }
    }

    pub fn to_simple(&self) -> Resp3Frame {
        Resp3Frame::SimpleString {
            data: Bytes::copy_from_slice(self.inner.as_bytes()),
            attributes: None,
        }
    }

    pub fn to_bulk(&self) -> Resp2Frame {
        Resp2Frame::BulkString(Bytes::copy_from_slice(self.inner.as_bytes()))
    }

    pub fn to_status(&self) -> Resp2Frame {
        Resp2Frame::SimpleString(Bytes::copy_from_slice(self.inner.as_bytes()))
    }
}

/// Helper for casting response integers to frame types
pub struct RespInt {
    inner: i64,
}

impl RespInt {
    pub fn new(inner: i64) -> Self {
        RespInt { inner }
    }

    pub fn to_number(&self) -> Resp3Frame {
        Resp3Frame::Number {
            data: self.inner,
            attributes: None,
        }
    }

    pub fn to_integer(&self) -> Resp2Frame {
        Resp2Frame::Integer(self.inner)
    }
}

/// Helper for building array replies
pub struct RespArray {
    inner: Vec<Option<&'static str>>,
}

impl RespArray {
    /// None elements become null frames
    pub fn new(inner: Vec<Option<&'static str>>) -> Self {
        RespArray { inner }
    }

    pub fn to_resp2(&self) -> Resp2Frame {
        Resp2Frame::Array(
            self.inner
                .iter()
                .map(|element| match element {
                    Some(value) => CmdStr::new(value).to_bulk(),
                    None => Resp2Frame::Null,
                })
                .collect(),
        )
    }

    pub fn to_resp3(&self) -> Resp3Frame {
        Resp3Frame::Array {
            data: self
                .inner
                .iter()
                .map(|element| match element {
                    Some(value) => CmdStr::new(value).to_blob(),
                    None => Resp3Frame::Null,
                })
                .collect(),
            attributes: None,
        }
    }
}
