use crate::common::{Orientation3d, Vector3d};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehicleWheels {
    #[prost(message, optional, tag = "1")]
    pub wheel_front_left: Option<Wheel>,
    #[prost(message, optional, tag = "2")]
    pub wheel_front_right: Option<Wheel>,
    #[prost(message, optional, tag = "3")]
    pub wheel_rear_left: Option<Wheel>,
    #[prost(message, optional, tag = "4")]
    pub wheel_rear_right: Option<Wheel>,
}

wheel_set!(VehicleWheels, Wheel);

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Wheel {
    /// Tire to road friction coefficient.
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub friction_coefficient: Option<f64>,
    /// Point where the tire touches the road, relative to the wheel center (m).
    #[prost(message, optional, tag = "2")]
    pub contact_point: Option<Vector3d>,
    /// rad/s
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub rotational_speed: Option<f64>,
    /// rad
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub steering_angle: Option<f64>,
    /// rad
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub camber: Option<f64>,
    /// Pa
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub tire_pressure: Option<f64>,
    /// m
    #[prost(double, optional, tag = "7")]
    #[serde(default, with = "crate::float")]
    pub spring_deflection: Option<f64>,
    /// Wheel center relative to the vehicle bounding box center (m).
    #[prost(message, optional, tag = "8")]
    pub position: Option<Vector3d>,
    /// Relative to the vehicle orientation (rad).
    #[prost(message, optional, tag = "9")]
    pub orientation: Option<Orientation3d>,
    /// Longitudinal slip ratio.
    #[prost(double, optional, tag = "10")]
    #[serde(default, with = "crate::float")]
    pub slip: Option<f64>,
    /// rad
    #[prost(double, optional, tag = "11")]
    #[serde(default, with = "crate::float")]
    pub slip_angle: Option<f64>,
}
