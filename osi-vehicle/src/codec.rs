//! Versioned frames around protobuf payloads.
//!
//! A legacy message that leaves `Wheel.contact_point` unset is byte for byte
//! a valid current message, so the payload alone can't tell the revisions
//! apart. Every frame therefore starts with a fixed header:
//!
//! ```text
//! magic u32 LE ("OSIV") | version u8 | kind u8 | payload_len u32 LE | payload
//! ```

use std::io::{Read, Write};

use bytes::{Buf, BufMut};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::FrameError;
use crate::legacy::OsiVehicle;
use crate::result::FrameResult;
use crate::vehicle::Vehicle;
use crate::{MessageKind, SchemaVersion, Versioned};

pub const MAGIC: u32 = u32::from_le_bytes(*b"OSIV");
pub const HEADER_LEN: usize = 10;
pub const MAX_PAYLOAD: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: SchemaVersion,
    pub kind: MessageKind,
    pub payload_len: usize,
}

impl FrameHeader {
    pub fn frame_len(&self) -> usize {
        HEADER_LEN + self.payload_len
    }
}

/// Top-level vehicle of either revision, as found in a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema", content = "vehicle", rename_all = "lowercase")]
pub enum AnyVehicle {
    Legacy(OsiVehicle),
    Current(Vehicle),
}

impl AnyVehicle {
    pub fn version(&self) -> SchemaVersion {
        match self {
            AnyVehicle::Legacy(_) => SchemaVersion::Legacy,
            AnyVehicle::Current(_) => SchemaVersion::Current,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnyVehicle::Legacy(v) => v.is_empty(),
            AnyVehicle::Current(v) => v.is_empty(),
        }
    }

    pub fn to_frame(&self) -> FrameResult<Vec<u8>> {
        match self {
            AnyVehicle::Legacy(v) => encode_frame(v),
            AnyVehicle::Current(v) => encode_frame(v),
        }
    }
}

impl From<OsiVehicle> for AnyVehicle {
    fn from(v: OsiVehicle) -> Self {
        AnyVehicle::Legacy(v)
    }
}

impl From<Vehicle> for AnyVehicle {
    fn from(v: Vehicle) -> Self {
        AnyVehicle::Current(v)
    }
}

pub fn encode_frame<M: Versioned>(msg: &M) -> FrameResult<Vec<u8>> {
    let payload_len = msg.encoded_len();
    if payload_len > MAX_PAYLOAD {
        return Err(FrameError::PayloadTooLarge(payload_len));
    }
    let mut buf = Vec::with_capacity(HEADER_LEN + payload_len);
    buf.put_u32_le(MAGIC);
    buf.put_u8(M::SCHEMA.into());
    buf.put_u8(M::KIND.into());
    buf.put_u32_le(payload_len as u32);
    msg.encode(&mut buf)?;
    Ok(buf)
}

pub fn parse_header(data: &[u8]) -> FrameResult<FrameHeader> {
    if data.len() < HEADER_LEN {
        return Err(FrameError::Truncated {
            needed: HEADER_LEN,
            got: data.len(),
        });
    }
    let mut header = &data[..HEADER_LEN];
    let magic = header.get_u32_le();
    if magic != MAGIC {
        return Err(FrameError::BadMagic(magic));
    }
    let version = SchemaVersion::try_from(header.get_u8())?;
    let kind = MessageKind::try_from(header.get_u8())?;
    let payload_len = header.get_u32_le() as usize;
    if payload_len > MAX_PAYLOAD {
        return Err(FrameError::PayloadTooLarge(payload_len));
    }
    Ok(FrameHeader {
        version,
        kind,
        payload_len,
    })
}

pub fn peek_version(data: &[u8]) -> FrameResult<SchemaVersion> {
    parse_header(data).map(|h| h.version)
}

// Payload of exactly one frame, no more and no less.
fn payload<'a>(data: &'a [u8], header: &FrameHeader) -> FrameResult<&'a [u8]> {
    let frame_len = header.frame_len();
    if data.len() < frame_len {
        return Err(FrameError::Truncated {
            needed: frame_len,
            got: data.len(),
        });
    }
    if data.len() > frame_len {
        return Err(FrameError::TrailingBytes(data.len() - frame_len));
    }
    Ok(&data[HEADER_LEN..])
}

pub fn decode_frame<M: Versioned>(data: &[u8]) -> FrameResult<M> {
    let header = parse_header(data)?;
    if header.version != M::SCHEMA {
        return Err(FrameError::VersionMismatch {
            expected: M::SCHEMA,
            found: header.version,
        });
    }
    if header.kind != M::KIND {
        return Err(FrameError::KindMismatch {
            expected: M::KIND,
            found: header.kind,
        });
    }
    M::decode(payload(data, &header)?).map_err(|e| {
        debug!("{} payload rejected: {}", header.version, e);
        e.into()
    })
}

pub fn decode_any(data: &[u8]) -> FrameResult<AnyVehicle> {
    match peek_version(data)? {
        SchemaVersion::Legacy => decode_frame::<OsiVehicle>(data).map(AnyVehicle::Legacy),
        SchemaVersion::Current => decode_frame::<Vehicle>(data).map(AnyVehicle::Current),
    }
}

/// Splits a byte stream of back to back frames. A clean end of stream between
/// frames ends iteration, running out inside a frame is an error.
pub struct FrameReader<R> {
    inner: R,
    finished: bool,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            finished: false,
        }
    }

    pub fn read_frame(&mut self) -> FrameResult<Option<Vec<u8>>> {
        let mut header = [0u8; HEADER_LEN];
        let got = read_full(&mut self.inner, &mut header)?;
        if got == 0 {
            return Ok(None);
        }
        if got < HEADER_LEN {
            return Err(FrameError::Truncated {
                needed: HEADER_LEN,
                got,
            });
        }
        let parsed = parse_header(&header)?;

        let mut frame = Vec::with_capacity(parsed.frame_len());
        frame.extend_from_slice(&header);
        frame.resize(parsed.frame_len(), 0);
        let got = read_full(&mut self.inner, &mut frame[HEADER_LEN..])?;
        if got < parsed.payload_len {
            return Err(FrameError::Truncated {
                needed: parsed.frame_len(),
                got: HEADER_LEN + got,
            });
        }
        Ok(Some(frame))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = FrameResult<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

pub struct FrameWriter<W> {
    inner: W,
    frames: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, frames: 0 }
    }

    pub fn write<M: Versioned>(&mut self, msg: &M) -> FrameResult<()> {
        self.write_raw(&encode_frame(msg)?)
    }

    pub fn write_any(&mut self, vehicle: &AnyVehicle) -> FrameResult<()> {
        self.write_raw(&vehicle.to_frame()?)
    }

    fn write_raw(&mut self, frame: &[u8]) -> FrameResult<()> {
        self.inner.write_all(frame)?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    pub fn flush(&mut self) -> FrameResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
