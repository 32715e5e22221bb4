mod cli;

use cli::{Args, Command, Settings};
use mock_gps::config::{discover_config, load_config_from_path, CONFIG_FILENAME};
use mock_gps::prelude::*;
use serde_json::json;
use std::error::Error;
use std::path::Path;
use std::process;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// How long `start` waits for the out-of-band permission response
const PERMISSION_RESPONSE_WAIT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid arguments)
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match args.config.as_deref() {
        Some(path) => {
            let config = load_config_from_path(Path::new(path))?;
            eprintln!("⚙️  Loaded config from: {}", path);
            Some(config)
        }
        None => {
            let config = discover_config(Path::new("."))?;
            if config.is_some() {
                eprintln!("⚙️  Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            config
        }
    };
    let settings = Settings::resolve(&args, config)?;
    let (responder, responses) = mpsc::channel();

    if settings.simulate {
        if args.command == Command::Settings {
            anyhow::bail!(
                "There is no settings screen to open in simulate mode\n\n💡 Hint: Drop --simulate to open Developer options on a device"
            );
        }
        let gate = InMemoryPreconditionGate::permissive();
        let registry = InMemoryProviderRegistry::new();
        return execute(args.command, gate, registry, responses, &settings).await;
    }

    // Create adapters (Dependency Injection)
    let bridge = AdbBridge::new(&settings.adb_path, settings.device.clone());
    let gate = AdbPreconditionGate::new(bridge.clone(), &settings.package)
        .with_permission_responder(responder);
    let registry = AdbProviderRegistry::new(bridge);

    if args.command == Command::Settings {
        gate.open_developer_settings()?;
        eprintln!("🔧 Opened Developer options on the device");
        return Ok(ExitCode::Success);
    }

    execute(args.command, gate, registry, responses, &settings).await
}

async fn execute<G, H>(
    command: Command,
    gate: G,
    registry: H,
    responses: Receiver<PermissionResponse>,
    settings: &Settings,
) -> Result<ExitCode>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
{
    match command {
        Command::Start { lat, lng, hold } => {
            let controller =
                MockProviderController::new(gate, registry, StderrStatusReporter::new());
            // One-shot runs leave the provider registered for `stop` to remove
            let controller = if hold { controller } else { controller.detached() };
            start(controller, &lat, &lng, hold, responses, settings.format).await
        }
        Command::Stop => {
            let mut controller =
                MockProviderController::new(gate, registry, StderrStatusReporter::new())
                    .detached();
            let outcome = controller.stop();
            match settings.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                OutputFormat::Text => {
                    if let Some(note) = outcome.note() {
                        println!("Stopped (note: {})", note);
                    } else {
                        println!("Stopped");
                    }
                }
            }
            Ok(ExitCode::Success)
        }
        Command::Status => {
            let status = PreconditionStatus::query(&gate);
            match settings.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Text => {
                    println!(
                        "Mock locations allowed:      {}",
                        yes_no(status.mock_location_allowed)
                    );
                    println!(
                        "Fine location permission:    {}",
                        yes_no(status.location_permission_granted)
                    );
                }
            }
            Ok(if status.is_ready() {
                ExitCode::Success
            } else {
                ExitCode::PreconditionFailed
            })
        }
        Command::Settings => {
            anyhow::bail!("The settings command needs a device adapter")
        }
    }
}

async fn start<G, H, R>(
    mut controller: MockProviderController<G, H, R>,
    lat: &str,
    lng: &str,
    hold: bool,
    responses: Receiver<PermissionResponse>,
    format: OutputFormat,
) -> Result<ExitCode>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
    R: StatusReporter,
{
    match controller.start(lat, lng) {
        Ok(coordinate) => {
            match (format, controller.last_fix()) {
                (OutputFormat::Json, Some(fix)) => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "status": "started", "fix": fix }))?
                ),
                _ => println!("📍 Mock location active: {}", coordinate),
            }

            if hold {
                eprintln!("⏳ Holding mock location, press Ctrl-C to stop");
                tokio::signal::ctrl_c().await?;
                // Dropping the controller at the end of this scope removes the provider
            }
            Ok(ExitCode::Success)
        }
        Err(MockLocationError::PermissionMissing) => {
            print_error(&MockLocationError::PermissionMissing);
            // The response arrives out-of-band; report it but never retry start
            if let Ok(response) = responses.recv_timeout(PERMISSION_RESPONSE_WAIT) {
                controller.on_permission_result(response);
            }
            Ok(MockLocationError::PermissionMissing.exit_code())
        }
        Err(e) => {
            print_error(&e);
            Ok(e.exit_code())
        }
    }
}

fn print_error(error: &dyn Error) {
    eprintln!("\n❌ {}", error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }
    eprintln!();
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
