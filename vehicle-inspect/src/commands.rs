use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};
use osi_vehicle::{
    decode_any, legacy, vehicle, FrameReader, FrameWriter, SchemaVersion, WheelPosition,
};

use crate::config::Config;
use crate::present::present_fields;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DumpStats {
    pub printed: usize,
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub frames: BTreeMap<String, usize>,
    pub empty: usize,
    pub invalid: usize,
}

/// One frame with only `wheel_front_left.rotational_speed` set.
pub fn sample(out: &Path, schema: SchemaVersion, speed: f64) -> anyhow::Result<()> {
    let file = std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut writer = FrameWriter::new(std::io::BufWriter::new(file));
    match schema {
        SchemaVersion::Legacy => {
            let mut v = legacy::OsiVehicle::default();
            v.vehicle_wheels
                .get_or_insert_with(Default::default)
                .get_or_insert(WheelPosition::FrontLeft)
                .rotational_speed = Some(speed);
            writer.write(&v)?;
        }
        SchemaVersion::Current => {
            let mut v = vehicle::Vehicle::default();
            v.vehicle_wheels
                .get_or_insert_with(Default::default)
                .get_or_insert(WheelPosition::FrontLeft)
                .rotational_speed = Some(speed);
            writer.write(&v)?;
        }
    }
    writer.flush()?;
    info!("Wrote {} sample frame to {}", schema, out.display());
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<FrameReader<std::io::BufReader<std::fs::File>>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(FrameReader::new(std::io::BufReader::new(file)))
}

pub fn dump(path: &Path, config: &Config, out: &mut impl Write) -> anyhow::Result<DumpStats> {
    dump_frames(open(path)?, config, out)
}

pub fn dump_frames<R: std::io::Read>(
    reader: FrameReader<R>,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<DumpStats> {
    let mut stats = DumpStats::default();
    for (index, frame) in reader.enumerate() {
        let frame = frame.with_context(|| format!("reading frame {}", index))?;
        let vehicle = match decode_any(&frame) {
            Ok(vehicle) => vehicle,
            Err(e) => {
                warn!("Frame {} skipped: {}", index, e);
                stats.skipped += 1;
                continue;
            }
        };
        if let Some(expected) = config.expect_version {
            if vehicle.version() != expected {
                warn!("Frame {} is {}, expected {}", index, vehicle.version(), expected);
                stats.skipped += 1;
                continue;
            }
        }

        if config.show_present_only {
            writeln!(out, "#{} {}", index, vehicle.version())?;
            let value = serde_json::to_value(&vehicle)?;
            for (path, leaf) in present_fields(&value["vehicle"]) {
                writeln!(out, "{} = {}", path, leaf)?;
            }
        } else if config.pretty {
            writeln!(out, "{}", serde_json::to_string_pretty(&vehicle)?)?;
        } else {
            writeln!(out, "{}", serde_json::to_string(&vehicle)?)?;
        }
        stats.printed += 1;
    }
    info!("Dumped {} frames, skipped {}", stats.printed, stats.skipped);
    Ok(stats)
}

pub fn info(path: &Path) -> anyhow::Result<FileInfo> {
    let mut file_info = FileInfo::default();
    for (index, frame) in open(path)?.enumerate() {
        let frame = frame.with_context(|| format!("reading frame {}", index))?;
        match decode_any(&frame) {
            Ok(vehicle) => {
                *file_info
                    .frames
                    .entry(vehicle.version().to_string())
                    .or_insert(0) += 1;
                if vehicle.is_empty() {
                    file_info.empty += 1;
                }
            }
            Err(e) => {
                warn!("Frame {} is invalid: {}", index, e);
                file_info.invalid += 1;
            }
        }
    }
    Ok(file_info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_to_string(data: &[u8], config: &Config) -> (DumpStats, String) {
        let mut out = Vec::new();
        let stats = dump_frames(FrameReader::new(data), config, &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    fn mixed_stream() -> Vec<u8> {
        let mut writer = FrameWriter::new(Vec::new());
        writer.write(&legacy::OsiVehicle::default()).unwrap();
        let mut v = vehicle::Vehicle::default();
        v.vehicle_powertrain
            .get_or_insert_with(Default::default)
            .engine_rpm = Some(1500.0);
        writer.write(&v).unwrap();
        writer.into_inner()
    }

    #[test]
    fn dump_prints_one_json_line_per_frame() {
        let (stats, text) = dump_to_string(&mixed_stream(), &Config::default());
        assert_eq!(stats, DumpStats { printed: 2, skipped: 0 });

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["schema"], "current");
        assert_eq!(second["vehicle"]["vehicle_powertrain"]["engine_rpm"], 1500.0);
    }

    #[test]
    fn dump_skips_unexpected_revision() {
        let config = Config {
            expect_version: Some(SchemaVersion::Current),
            show_present_only: true,
            ..Default::default()
        };
        let (stats, text) = dump_to_string(&mixed_stream(), &config);
        assert_eq!(stats, DumpStats { printed: 1, skipped: 1 });
        assert_eq!(text, "#1 current\nvehicle_powertrain.engine_rpm = 1500.0\n");
    }

    #[test]
    fn dump_skips_undecodable_payload() {
        // legacy header in front of a current payload with a vector contact point
        let mut v = vehicle::Vehicle::default();
        v.vehicle_wheels
            .get_or_insert_with(Default::default)
            .get_or_insert(WheelPosition::RearRight)
            .contact_point = Some(osi_vehicle::Vector3d::new(0.0, 0.0, -0.3));
        let mut frame = osi_vehicle::encode_frame(&v).unwrap();
        frame[4] = SchemaVersion::Legacy.into();

        let (stats, text) = dump_to_string(&frame, &Config::default());
        assert_eq!(stats, DumpStats { printed: 0, skipped: 1 });
        assert!(text.is_empty());
    }

    #[test]
    fn sample_then_info() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.osiv");
        sample(&path, SchemaVersion::Legacy, 12.5).unwrap();

        let file_info = info(&path).unwrap();
        assert_eq!(file_info.frames.get("legacy"), Some(&1));
        assert_eq!(file_info.frames.get("current"), None);
        assert_eq!(file_info.empty, 0);
        assert_eq!(file_info.invalid, 0);

        let mut out = Vec::new();
        let config = Config {
            show_present_only: true,
            ..Default::default()
        };
        dump(&path, &config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "#0 legacy\nvehicle_wheels.wheel_front_left.rotational_speed = 12.5\n"
        );
    }
}
