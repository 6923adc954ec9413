use clap::Parser;
use log::info;
use vehicle_inspect::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = config::Config::load(&cli.config)?;
    cli.apply(&mut config);
    osi_vehicle::init_logging(&config.log_filter);

    match &cli.command {
        Command::Sample { out, legacy, speed } => {
            let schema = if *legacy {
                osi_vehicle::SchemaVersion::Legacy
            } else {
                osi_vehicle::SchemaVersion::Current
            };
            commands::sample(out, schema, *speed)?;
        }
        Command::Dump { file } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::dump(file, &config, &mut out)?;
        }
        Command::Info { file } => {
            let file_info = commands::info(file)?;
            for (schema, count) in &file_info.frames {
                println!("{}: {} frames", schema, count);
            }
            println!("empty: {}", file_info.empty);
            println!("invalid: {}", file_info.invalid);
            info!("Read {}", file.display());
        }
    }
    Ok(())
}
