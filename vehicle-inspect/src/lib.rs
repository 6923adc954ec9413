pub mod commands;
pub mod config;
pub mod present;

use clap::{Parser, Subcommand};
use osi_vehicle::SchemaVersion;
use std::path::PathBuf;

/// Writes and dumps recorded vehicle frames
#[derive(Parser, Debug)]
#[command(name = "vehicle-inspect", version, about = "Inspect recorded vehicle frames")]
pub struct Cli {
    /// Path to the JSON config, created with defaults when missing
    #[arg(short, long, default_value = "./inspect.json")]
    pub config: PathBuf,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print only present fields as `path = value`
    #[arg(long)]
    pub present_only: bool,

    /// Skip frames that are not of this revision (legacy or current)
    #[arg(long)]
    pub expect: Option<SchemaVersion>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a single frame with the front left wheel speed set
    Sample {
        out: PathBuf,
        /// Use the legacy `OsiVehicle` revision
        #[arg(long)]
        legacy: bool,
        #[arg(long, default_value = "12.5")]
        speed: f64,
    },
    /// Print every frame of a recording
    Dump { file: PathBuf },
    /// Count frames per revision
    Info { file: PathBuf },
}

impl Cli {
    /// Command line flags win over the config file.
    pub fn apply(&self, config: &mut config::Config) {
        if self.pretty {
            config.pretty = true;
        }
        if self.present_only {
            config.show_present_only = true;
        }
        if self.expect.is_some() {
            config.expect_version = self.expect;
        }
    }
}
