extern crate pretty_env_logger;

#[macro_use]
mod macros;

pub mod codec;
pub mod common;
pub mod error;
pub mod float;
pub mod legacy;
pub mod result;
pub mod vehicle;

pub use codec::{decode_any, decode_frame, encode_frame, peek_version, AnyVehicle, FrameReader, FrameWriter};
pub use common::*;
pub use error::FrameError;
pub use result::FrameResult;

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub const VERSION: (u32, u32) = (0, 2);
pub const VERSION_STR: &str = "0.2.0";

/// Revision of the vehicle interface a message belongs to. The two are not
/// wire compatible and are never converted into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// `OsiVehicle`, scalar wheel contact point.
    Legacy = 1,
    /// `Vehicle`, vector wheel contact point plus wheel pose and slip.
    Current = 2,
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaVersion::Legacy => write!(f, "legacy"),
            SchemaVersion::Current => write!(f, "current"),
        }
    }
}

impl From<SchemaVersion> for u8 {
    fn from(v: SchemaVersion) -> u8 {
        v as u8
    }
}

impl TryFrom<u8> for SchemaVersion {
    type Error = FrameError;

    fn try_from(v: u8) -> Result<Self, FrameError> {
        match v {
            1 => Ok(SchemaVersion::Legacy),
            2 => Ok(SchemaVersion::Current),
            other => Err(FrameError::UnknownVersion(other)),
        }
    }
}

impl std::str::FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "legacy" => Ok(SchemaVersion::Legacy),
            "current" => Ok(SchemaVersion::Current),
            other => Err(format!("unknown schema version `{}`", other)),
        }
    }
}

/// Which record of the schema a frame carries. Stored in the frame header
/// next to the schema revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Vehicle = 1,
    Kinematics = 2,
    Powertrain = 3,
    SteeringWheel = 4,
    Wheels = 5,
    Wheel = 6,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MessageKind::Vehicle => "vehicle",
            MessageKind::Kinematics => "kinematics",
            MessageKind::Powertrain => "powertrain",
            MessageKind::SteeringWheel => "steering_wheel",
            MessageKind::Wheels => "wheels",
            MessageKind::Wheel => "wheel",
        };
        f.write_str(name)
    }
}

impl From<MessageKind> for u8 {
    fn from(k: MessageKind) -> u8 {
        k as u8
    }
}

impl TryFrom<u8> for MessageKind {
    type Error = FrameError;

    fn try_from(v: u8) -> Result<Self, FrameError> {
        match v {
            1 => Ok(MessageKind::Vehicle),
            2 => Ok(MessageKind::Kinematics),
            3 => Ok(MessageKind::Powertrain),
            4 => Ok(MessageKind::SteeringWheel),
            5 => Ok(MessageKind::Wheels),
            6 => Ok(MessageKind::Wheel),
            other => Err(FrameError::UnknownKind(other)),
        }
    }
}

/// A protobuf message that belongs to exactly one schema revision.
pub trait Versioned: prost::Message + Default {
    const SCHEMA: SchemaVersion;
    const KIND: MessageKind;
}

pub fn init_logging(default_filter: &str) {
    // pretty_env_logger prints nothing unless the builder gets a filter
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_owned());

    let _ = pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .format(|buf, record| {
            let level = buf.default_styled_level(record.level());
            // crate name only, osi_vehicle::codec -> osi_vehicle
            let module_path = record
                .module_path()
                .and_then(|path| path.split(':').next())
                .unwrap_or("unknown");
            writeln!(
                buf,
                "[{}] [{}] [{:>5}]: {}",
                Local::now().format("%H:%M:%S%.3f"),
                module_path,
                level,
                record.args()
            )
        })
        .try_init();
}
