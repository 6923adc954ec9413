//! First revision of the vehicle interface, published as `OsiVehicle`.
//!
//! Kept for reading old recordings. It is not wire compatible with
//! [`crate::vehicle`]: `Wheel.contact_point` (tag 2) is a double here and a
//! nested message there. No conversion between the two is provided.

pub mod wheels;

pub use wheels::*;

use crate::common::{GearDirection, Orientation3d, Vector3d};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct OsiVehicle {
    #[prost(message, optional, tag = "1")]
    pub vehicle_kinematics: Option<VehicleKinematics>,
    #[prost(message, optional, tag = "2")]
    pub vehicle_powertrain: Option<VehiclePowertrain>,
    #[prost(message, optional, tag = "3")]
    pub vehicle_steering_wheel: Option<VehicleSteeringWheel>,
    #[prost(message, optional, tag = "4")]
    pub vehicle_wheels: Option<VehicleWheels>,
}

impl OsiVehicle {
    pub fn is_empty(&self) -> bool {
        self.vehicle_kinematics.is_none()
            && self.vehicle_powertrain.is_none()
            && self.vehicle_steering_wheel.is_none()
            && self.vehicle_wheels.is_none()
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehicleKinematics {
    #[prost(message, optional, tag = "1")]
    pub dimension: Option<Vector3d>,
    #[prost(message, optional, tag = "2")]
    pub position: Option<Vector3d>,
    #[prost(message, optional, tag = "3")]
    pub velocity: Option<Vector3d>,
    #[prost(message, optional, tag = "4")]
    pub acceleration: Option<Vector3d>,
    #[prost(message, optional, tag = "5")]
    pub orientation: Option<Orientation3d>,
    #[prost(message, optional, tag = "6")]
    pub orientation_rate: Option<Orientation3d>,
    #[prost(message, optional, tag = "7")]
    pub orientation_rate_acceleration: Option<Orientation3d>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehiclePowertrain {
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_acceleration: Option<f64>,
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_brake: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub pedal_position_clutch: Option<f64>,
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub motor_rpm: Option<f64>,
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub motor_torque: Option<f64>,
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub fuel_consumption: Option<f64>,
    #[prost(double, optional, tag = "7")]
    #[serde(default, with = "crate::float")]
    pub electrical_consumption: Option<f64>,
    #[prost(int32, optional, tag = "8")]
    pub gear_lever: Option<i32>,
    #[prost(int32, optional, tag = "9")]
    pub gear_transmission: Option<i32>,
    #[prost(bool, optional, tag = "10")]
    pub four_wheel_drive: Option<bool>,
}

impl VehiclePowertrain {
    pub fn gear_direction(&self) -> Option<GearDirection> {
        self.gear_transmission.map(GearDirection::from)
    }
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehicleSteeringWheel {
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub angle: Option<f64>,
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub angular_speed: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub torque: Option<f64>,
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub spring_stiffness: Option<f64>,
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub damping_coefficient: Option<f64>,
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub friction_coefficient: Option<f64>,
}

versioned!(
    crate::SchemaVersion::Legacy,
    OsiVehicle => Vehicle,
    VehicleKinematics => Kinematics,
    VehiclePowertrain => Powertrain,
    VehicleSteeringWheel => SteeringWheel,
    VehicleWheels => Wheels,
    Wheel => Wheel,
);
