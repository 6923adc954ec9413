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
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub friction_coefficient: Option<f64>,
    /// Distance from the wheel center down to the road (m). A scalar here,
    /// tag 2 is a `Vector3d` in the current revision.
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub contact_point: Option<f64>,
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub rotational_speed: Option<f64>,
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub steering_angle: Option<f64>,
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub camber: Option<f64>,
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub tire_pressure: Option<f64>,
    #[prost(double, optional, tag = "7")]
    #[serde(default, with = "crate::float")]
    pub spring_compression: Option<f64>,
}
