//! Motion state of the vehicle bounding box.
//!
//! All values are relative to the parent reference frame and become absolute
//! (ground truth) when the parent frame is stationary. Position integrates
//! velocity and velocity integrates acceleration; orientation is updated by
//! composing rotations, never by adding angles. The producer is responsible
//! for keeping these consistent, nothing here checks them.

use crate::common::{Orientation3d, Vector3d};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct VehicleKinematics {
    /// Bounding box size (m): length, width, height.
    #[prost(message, optional, tag = "1")]
    pub dimension: Option<Vector3d>,
    /// Bounding box center (m).
    #[prost(message, optional, tag = "2")]
    pub position: Option<Vector3d>,
    /// m/s
    #[prost(message, optional, tag = "3")]
    pub velocity: Option<Vector3d>,
    /// m/s²
    #[prost(message, optional, tag = "4")]
    pub acceleration: Option<Vector3d>,
    /// rad
    #[prost(message, optional, tag = "5")]
    pub orientation: Option<Orientation3d>,
    /// rad/s
    #[prost(message, optional, tag = "6")]
    pub orientation_rate: Option<Orientation3d>,
    /// rad/s²
    #[prost(message, optional, tag = "7")]
    pub orientation_acceleration: Option<Orientation3d>,
}
