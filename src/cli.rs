use clap::{Parser, Subcommand};

use mock_gps::application::dto::OutputFormat;
use mock_gps::config::ConfigFile;
use mock_gps::shared::Result;

pub const DEFAULT_ADB_PATH: &str = "adb";

/// Package whose permission and mock-location app-op are checked by default.
/// `adb shell` commands run as this package.
pub const DEFAULT_PACKAGE: &str = "com.android.shell";

/// Pin an Android device's location to a fixed coordinate
#[derive(Parser, Debug)]
#[command(name = "mock-gps")]
#[command(version)]
#[command(about = "Pin an Android device's location to a fixed coordinate", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./mock-gps.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// adb serial of the target device
    #[arg(short, long, global = true)]
    pub device: Option<String>,

    /// Path to the adb executable
    #[arg(long, global = true, value_name = "PATH")]
    pub adb: Option<String>,

    /// Package checked for the location permission and mock-location app-op
    #[arg(long, global = true)]
    pub package: Option<String>,

    /// Output format for results on stdout: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Run against an in-memory device with mock locations allowed and permission granted
    #[arg(long, global = true)]
    pub simulate: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register the mock provider and inject one fix
    Start {
        /// Latitude in decimal degrees, e.g. 39.9042
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees, e.g. 116.4074
        #[arg(long, allow_hyphen_values = true)]
        lng: String,

        /// Keep running until Ctrl-C, then remove the provider
        #[arg(long)]
        hold: bool,
    },
    /// Remove the mock provider (succeeds if it is already gone)
    Stop,
    /// Show whether mock locations are allowed and permission is granted
    Status,
    /// Open the Developer options screen on the device
    Settings,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings after merging the config file under the CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub adb_path: String,
    pub device: Option<String>,
    pub package: String,
    pub format: OutputFormat,
    pub simulate: bool,
}

impl Settings {
    /// CLI flags win over config values, config values over defaults
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(text)) => text
                .parse::<OutputFormat>()
                .map_err(|e: String| anyhow::anyhow!(e))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            adb_path: args
                .adb
                .clone()
                .or(config.adb_path)
                .unwrap_or_else(|| DEFAULT_ADB_PATH.to_string()),
            device: args.device.clone().or(config.device),
            package: args
                .package
                .clone()
                .or(config.package)
                .unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
            format,
            simulate: args.simulate,
        })
    }
}
