use clap::{Parser, Subcommand};
use spraymist::{BdAddr, BtleplugConfig, BtleplugTransport, SprayMist};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Query and control a SprayMist F638 over Bluetooth LE
#[derive(Parser)]
struct Cli {
    /// Device address, e.g. C4:7C:8D:6A:0B:1E
    #[arg(long, env = "SPRAYMIST_ADDRESS")]
    address: BdAddr,

    /// Bluetooth adapter index
    #[arg(long, default_value_t = 0)]
    adapter: usize,

    /// Seconds to scan for the device
    #[arg(long, default_value_t = 10)]
    scan_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every property
    Status,
    /// Start manual watering
    ManualOn {
        /// Duration in seconds, 60 if omitted
        seconds: Option<u16>,
    },
    /// Stop manual watering
    ManualOff,
    /// Suspend the schedule for some days (0 resumes)
    Pause { days: u8 },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = BtleplugConfig {
        adapter_index: cli.adapter,
        scan_timeout: Duration::from_secs(cli.scan_timeout),
        ..Default::default()
    };

    let transport = BtleplugTransport::new(config)?;
    let mut device = SprayMist::new(transport, cli.address);

    if !device.connect() {
        eprintln!("Could not connect to {}", cli.address);
        return Ok(ExitCode::FAILURE);
    }

    let ok = match cli.command {
        Command::Status => {
            println!("Working mode: {}", device.working_mode()?);
            println!("Running mode: {}", device.running_mode()?);
            println!("Battery:      {}%", device.battery_level()?);
            let timer = device.manual_timer()?;
            println!(
                "Manual:       {} ({} s)",
                if timer.enabled { "on" } else { "off" },
                timer.seconds
            );
            println!("Pause days:   {}", device.pause_days()?);
            true
        }
        Command::ManualOn { seconds } => device.switch_manual_on(seconds),
        Command::ManualOff => device.switch_manual_off(),
        Command::Pause { days } => device.set_pause_days(days),
    };

    device.disconnect();

    if ok {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Command was not applied");
        Ok(ExitCode::FAILURE)
    }
}
