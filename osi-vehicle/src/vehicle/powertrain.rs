use crate::common::GearDirection;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehiclePowertrain {
    /// Accelerator pedal, 0 (released) to 1 (fully pressed).
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_acceleration: Option<f64>,
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_brake: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_clutch: Option<f64>,
    /// Revolutions per minute.
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub engine_rpm: Option<f64>,
    /// N·m
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub engine_torque: Option<f64>,
    /// l/s
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub fuel_consumption: Option<f64>,
    /// W
    #[prost(double, optional, tag = "7")]
    #[serde(default, with = "crate::float")]
    pub electrical_consumption: Option<f64>,
    /// Raw position of the gear lever as reported by the producer.
    #[prost(int32, optional, tag = "8")]
    pub gear_lever_state: Option<i32>,
    /// 0 is neutral, positive gears are forward, negative are reverse.
    #[prost(int32, optional, tag = "9")]
    pub gear_transmission: Option<i32>,
    #[prost(bool, optional, tag = "10")]
    pub all_wheel_drive: Option<bool>,
}

impl VehiclePowertrain {
    pub fn gear_direction(&self) -> Option<GearDirection> {
        self.gear_transmission.map(GearDirection::from)
    }
}
