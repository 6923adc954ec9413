use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehicleSteeringWheel {
    /// rad, positive turns left
    #[prost(double, optional, tag = "1")]
    #[serde(default, with = "crate::float")]
    pub angle: Option<f64>,
    /// rad/s
    #[prost(double, optional, tag = "2")]
    #[serde(default, with = "crate::float")]
    pub angular_speed: Option<f64>,
    /// N·m
    #[prost(double, optional, tag = "3")]
    #[serde(default, with = "crate::float")]
    pub torque: Option<f64>,
    /// N·m/rad
    #[prost(double, optional, tag = "4")]
    #[serde(default, with = "crate::float")]
    pub spring_stiffness: Option<f64>,
    /// N·m·s/rad
    #[prost(double, optional, tag = "5")]
    #[serde(default, with = "crate::float")]
    pub damping: Option<f64>,
    /// N·m
    #[prost(double, optional, tag = "6")]
    #[serde(default, with = "crate::float")]
    pub friction: Option<f64>,
}
