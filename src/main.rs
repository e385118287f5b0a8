use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rg_status::config::AppConfig;
use rg_status::core::{BlockRegistry, PublisherKind, Scheduler};
use rg_status::sources::{self, discovery, SensorDiscovery};
use std::path::{Path, PathBuf};

/// rg-status - periodic status line aggregator for dwm and friends
#[derive(Parser, Debug, Clone)]
#[command(name = "rg-status")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write status lines to stdout instead of the configured publisher
    #[arg(short = 's', long = "stdout")]
    stdout: bool,

    /// List hwmon devices and power supplies, then exit
    #[arg(short = 'l', long = "list-sensors")]
    list_sensors: bool,

    /// Print the effective configuration as JSON, then exit
    #[arg(long = "print-config")]
    print_config: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Config file to load instead of the default location
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug (one line per pass)
    // Level 3+: trace (every sample and sleep)
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting rg-status v{}", env!("CARGO_PKG_VERSION"));

    if cli.list_sensors {
        list_sensors();
        return Ok(());
    }

    let mut config = match &cli.config_file {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    if cli.stdout {
        config.publisher = PublisherKind::Stdout;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let discovery = SensorDiscovery::scan();
    let registry =
        BlockRegistry::from_config(&config, &discovery).context("Invalid block configuration")?;
    let mut scheduler = Scheduler::new(registry, config.background, config.markup, rg_status::core::now());
    let mut publisher = config.publisher.create();

    info!("Running {} blocks, publishing via {:?}", scheduler.len(), config.publisher);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start runtime")?;
    runtime.block_on(scheduler.run(publisher.as_mut()));

    Ok(())
}

/// Print discovered sensors to stdout
fn list_sensors() {
    let hwmon = SensorDiscovery::scan();
    println!("hwmon devices ({}):", hwmon.devices().len());
    for device in hwmon.devices() {
        println!("  {} ({})", device.name, device.path.display());
        for channel in &device.channels {
            println!("    {}", channel);
        }
    }

    let supplies = sources::list_power_supplies(Path::new(discovery::POWER_SUPPLY_ROOT));
    println!();
    println!("power supplies ({}):", supplies.len());
    for (name, path) in supplies {
        println!("  {} ({})", name, path.display());
    }
}
