//! Current revision of the vehicle interface.

pub mod kinematics;
pub mod powertrain;
pub mod steering_wheel;
pub mod wheels;

pub use kinematics::*;
pub use powertrain::*;
pub use steering_wheel::*;
pub use wheels::*;

use serde::{Deserialize, Serialize};

// A single time step of vehicle state. Every sub-record may be missing.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
pub struct Vehicle {
    #[prost(message, optional, tag = "1")]
    pub vehicle_kinematics: Option<VehicleKinematics>,
    #[prost(message, optional, tag = "2")]
    pub vehicle_powertrain: Option<VehiclePowertrain>,
    #[prost(message, optional, tag = "3")]
    pub vehicle_steering_wheel: Option<VehicleSteeringWheel>,
    #[prost(message, optional, tag = "4")]
    pub vehicle_wheels: Option<VehicleWheels>,
}

impl Vehicle {
    pub fn is_empty(&self) -> bool {
        self.vehicle_kinematics.is_none()
            && self.vehicle_powertrain.is_none()
            && self.vehicle_steering_wheel.is_none()
            && self.vehicle_wheels.is_none()
    }
}

versioned!(
    crate::SchemaVersion::Current,
    Vehicle => Vehicle,
    VehicleKinematics => Kinematics,
    VehiclePowertrain => Powertrain,
    VehicleSteeringWheel => SteeringWheel,
    VehicleWheels => Wheels,
    Wheel => Wheel,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{GearDirection, Vector3d, WheelPosition};
    use prost::Message;

    fn front_left_only(speed: f64) -> Vehicle {
        Vehicle {
            vehicle_wheels: Some(VehicleWheels {
                wheel_front_left: Some(Wheel {
                    rotational_speed: Some(speed),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn single_wheel_speed_survives_decode() {
        let bytes = front_left_only(12.5).encode_to_vec();
        let decoded = Vehicle::decode(bytes.as_slice()).unwrap();

        assert!(decoded.vehicle_kinematics.is_none());
        assert!(decoded.vehicle_powertrain.is_none());
        assert!(decoded.vehicle_steering_wheel.is_none());

        let wheels = decoded.vehicle_wheels.unwrap();
        assert!(wheels.wheel_front_right.is_none());
        assert!(wheels.wheel_rear_left.is_none());
        assert!(wheels.wheel_rear_right.is_none());

        let wheel = wheels.wheel_front_left.unwrap();
        assert_eq!(wheel.rotational_speed, Some(12.5));
        assert_eq!(
            wheel,
            Wheel {
                rotational_speed: Some(12.5),
                ..Default::default()
            }
        );
    }

    #[test]
    fn field_tags_are_stable() {
        // key byte = tag << 3 | wire type (1 = fixed64, 2 = length delimited, 0 = varint)
        let wheel = Wheel {
            slip_angle: Some(0.1),
            ..Default::default()
        };
        assert_eq!(wheel.encode_to_vec()[0], (11 << 3) | 1);

        let wheel = Wheel {
            contact_point: Some(Vector3d::default()),
            ..Default::default()
        };
        assert_eq!(wheel.encode_to_vec(), vec![(2 << 3) | 2, 0]);

        let powertrain = VehiclePowertrain {
            all_wheel_drive: Some(false),
            ..Default::default()
        };
        assert_eq!(powertrain.encode_to_vec(), vec![10 << 3, 0]);

        let powertrain = VehiclePowertrain {
            gear_transmission: Some(-1),
            ..Default::default()
        };
        let bytes = powertrain.encode_to_vec();
        assert_eq!(bytes[0], 9 << 3);
        // negative int32 is sign extended to ten varint bytes
        assert_eq!(bytes.len(), 11);

        let kinematics = VehicleKinematics {
            orientation_acceleration: Some(Default::default()),
            ..Default::default()
        };
        assert_eq!(kinematics.encode_to_vec(), vec![(7 << 3) | 2, 0]);
    }

    #[test]
    fn present_zero_differs_from_absent() {
        let steering = VehicleSteeringWheel {
            angle: Some(0.0),
            ..Default::default()
        };
        let decoded = VehicleSteeringWheel::decode(steering.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.angle, Some(0.0));
        assert_eq!(decoded.torque, None);
        assert_ne!(decoded, VehicleSteeringWheel::default());
    }

    #[test]
    fn partial_records_round_trip() {
        let vehicle = Vehicle {
            vehicle_kinematics: Some(VehicleKinematics {
                position: Some(Vector3d::new(10.0, -2.5, 0.3)),
                orientation: Some(crate::common::Orientation3d {
                    yaw: Some(1.57),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            vehicle_powertrain: Some(VehiclePowertrain {
                engine_rpm: Some(2400.0),
                gear_transmission: Some(-1),
                all_wheel_drive: Some(true),
                ..Default::default()
            }),
            vehicle_steering_wheel: Some(VehicleSteeringWheel {
                damping: Some(0.02),
                ..Default::default()
            }),
            vehicle_wheels: Some(VehicleWheels {
                wheel_rear_right: Some(Wheel {
                    contact_point: Some(Vector3d::new(0.0, 0.0, -0.33)),
                    slip: Some(0.04),
                    tire_pressure: Some(230_000.0),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };

        let decoded = Vehicle::decode(vehicle.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, vehicle);
        assert_eq!(
            decoded.vehicle_powertrain.unwrap().gear_direction(),
            Some(GearDirection::Reverse(1))
        );
    }

    #[test]
    fn wheels_iterate_in_fixed_order() {
        let mut wheels = VehicleWheels {
            wheel_rear_left: Some(Wheel {
                camber: Some(-0.02),
                ..Default::default()
            }),
            wheel_front_right: Some(Wheel::default()),
            ..Default::default()
        };

        let positions: Vec<_> = wheels.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, vec![WheelPosition::FrontRight, WheelPosition::RearLeft]);

        wheels
            .get_or_insert(WheelPosition::RearRight)
            .rotational_speed = Some(3.0);
        assert_eq!(
            wheels.get(WheelPosition::RearRight).unwrap().rotational_speed,
            Some(3.0)
        );
        assert!(wheels.get(WheelPosition::FrontLeft).is_none());
        assert_eq!(wheels.iter().count(), 3);
    }

    #[test]
    fn empty_vehicle() {
        assert!(Vehicle::default().is_empty());
        assert!(Vehicle::default().encode_to_vec().is_empty());
        assert!(!front_left_only(0.0).is_empty());
    }
}
