use serde::{Deserialize, Serialize};

/// Cartesian triple. Unit depends on the field holding it (m, m/s, m/s²).
#[derive(Clone, Copy, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Vector3d {
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub x: Option<f64>,
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub y: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub z: Option<f64>,
}

/// Angular triple in radians (or rad/s, rad/s² for rates).
#[derive(Clone, Copy, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Orientation3d {
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub roll: Option<f64>,
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub pitch: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub yaw: Option<f64>,
}

impl Vector3d {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            z: Some(z),
        }
    }
}

impl Orientation3d {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            roll: Some(roll),
            pitch: Some(pitch),
            yaw: Some(yaw),
        }
    }
}

/// Direction of the transmission derived from the signed gear number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GearDirection {
    Neutral,
    Forward(u32),
    Reverse(u32),
}

impl From<i32> for GearDirection {
    fn from(gear: i32) -> Self {
        match gear {
            0 => GearDirection::Neutral,
            g if g > 0 => GearDirection::Forward(g.unsigned_abs()),
            g => GearDirection::Reverse(g.unsigned_abs()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelPosition {
    FrontLeft,
    FrontRight,
    RearLeft,
    RearRight,
}

impl WheelPosition {
    pub const ALL: [WheelPosition; 4] = [
        WheelPosition::FrontLeft,
        WheelPosition::FrontRight,
        WheelPosition::RearLeft,
        WheelPosition::RearRight,
    ];
}
