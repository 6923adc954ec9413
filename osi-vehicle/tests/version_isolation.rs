use osi_vehicle::{legacy, vehicle, AnyVehicle, FrameError, SchemaVersion, Vector3d, WheelPosition};
use prost::Message;

#[test]
fn scalar_contact_point_does_not_decode_as_vector() {
    let old = legacy::Wheel {
        contact_point: Some(0.33),
        rotational_speed: Some(4.0),
        ..Default::default()
    };
    let bytes = old.encode_to_vec();
    assert!(vehicle::Wheel::decode(bytes.as_slice()).is_err());

    let mut vehicle = legacy::OsiVehicle::default();
    *vehicle
        .vehicle_wheels
        .get_or_insert_with(Default::default)
        .get_or_insert(WheelPosition::RearLeft) = old;
    assert!(vehicle::Vehicle::decode(vehicle.encode_to_vec().as_slice()).is_err());
}

#[test]
fn vector_contact_point_does_not_decode_as_scalar() {
    let new = vehicle::Wheel {
        contact_point: Some(Vector3d::new(0.0, 0.0, -0.33)),
        ..Default::default()
    };
    assert!(legacy::Wheel::decode(new.encode_to_vec().as_slice()).is_err());
}

#[test]
fn frames_keep_revisions_apart_without_contact_point() {
    // Payload bytes are identical, only the header differs.
    let old = legacy::Wheel {
        camber: Some(-0.01),
        ..Default::default()
    };
    let new = vehicle::Wheel {
        camber: Some(-0.01),
        ..Default::default()
    };
    assert_eq!(old.encode_to_vec(), new.encode_to_vec());

    let frame = osi_vehicle::encode_frame(&old).unwrap();
    assert!(matches!(
        osi_vehicle::decode_frame::<vehicle::Wheel>(&frame),
        Err(FrameError::VersionMismatch {
            expected: SchemaVersion::Current,
            found: SchemaVersion::Legacy
        })
    ));
    assert_eq!(osi_vehicle::decode_frame::<legacy::Wheel>(&frame).unwrap(), old);
}

#[test]
fn front_left_speed_scenario_through_a_frame() {
    let mut v = vehicle::Vehicle::default();
    v.vehicle_wheels
        .get_or_insert_with(Default::default)
        .get_or_insert(WheelPosition::FrontLeft)
        .rotational_speed = Some(12.5);

    let frame = osi_vehicle::encode_frame(&v).unwrap();
    let decoded: vehicle::Vehicle = osi_vehicle::decode_frame(&frame).unwrap();

    assert!(decoded.vehicle_kinematics.is_none());
    assert!(decoded.vehicle_powertrain.is_none());
    assert!(decoded.vehicle_steering_wheel.is_none());
    let wheels = decoded.vehicle_wheels.unwrap();
    let present: Vec<_> = wheels.iter().map(|(p, _)| p).collect();
    assert_eq!(present, vec![WheelPosition::FrontLeft]);

    let wheel = wheels.get(WheelPosition::FrontLeft).unwrap();
    assert_eq!(wheel.rotational_speed, Some(12.5));
    assert_eq!(wheel.contact_point, None);
    assert_eq!(wheel.friction_coefficient, None);
    assert_eq!(wheel.slip, None);
    assert_eq!(wheel.slip_angle, None);
    assert_eq!(wheel.position, None);
    assert_eq!(wheel.orientation, None);
}

#[test]
fn any_vehicle_json_is_tagged_by_schema() {
    let any = AnyVehicle::from(legacy::OsiVehicle {
        vehicle_powertrain: Some(legacy::VehiclePowertrain {
            motor_rpm: Some(900.0),
            ..Default::default()
        }),
        ..Default::default()
    });
    let json = serde_json::to_value(&any).unwrap();
    assert_eq!(json["schema"], "legacy");
    assert_eq!(json["vehicle"]["vehicle_powertrain"]["motor_rpm"], 900.0);
    assert!(json["vehicle"]["vehicle_kinematics"].is_null());

    let back: AnyVehicle = serde_json::from_value(json).unwrap();
    assert_eq!(back, any);
}
