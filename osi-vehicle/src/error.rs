use thiserror::Error;

use crate::{MessageKind, SchemaVersion};

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("reading or writing the frame stream failed")]
    Io(#[from] std::io::Error),
    #[error("decoding the payload failed: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("encoding the payload failed: {0}")]
    Encode(#[from] prost::EncodeError),
    #[error("not a vehicle frame (magic {0:#010x})")]
    BadMagic(u32),
    #[error("unknown schema version {0}")]
    UnknownVersion(u8),
    #[error("expected a {expected} frame, found {found}")]
    VersionMismatch {
        expected: SchemaVersion,
        found: SchemaVersion,
    },
    #[error("unknown message kind {0}")]
    UnknownKind(u8),
    #[error("expected a {expected} record, found {found}")]
    KindMismatch {
        expected: MessageKind,
        found: MessageKind,
    },
    #[error("frame truncated: needed {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
    #[error("{0} bytes left over after the frame")]
    TrailingBytes(usize),
    #[error("payload of {0} bytes exceeds the frame limit")]
    PayloadTooLarge(usize),
}
