use super::{AdbBridge, ShellOutput};
use crate::location::domain::{LocationFix, ProviderCapabilities};
use crate::ports::outbound::TestProviderRegistry;
use crate::shared::error::{PlatformError, PlatformResult};

/// Prefix of the location service's shell interface
const LOCATION_COMMAND: [&str; 3] = ["cmd", "location", "providers"];

/// AdbProviderRegistry adapter over `cmd location providers`
///
/// The shell interface has no monotonic-time option, so fixes are sent
/// without an elapsed-time tag and the service stamps its own.
#[derive(Debug, Clone)]
pub struct AdbProviderRegistry {
    bridge: AdbBridge,
}

impl AdbProviderRegistry {
    pub fn new(bridge: AdbBridge) -> Self {
        Self { bridge }
    }

    fn run(&self, provider: &str, args: Vec<String>) -> PlatformResult<()> {
        let mut full: Vec<&str> = LOCATION_COMMAND.to_vec();
        full.extend(args.iter().map(String::as_str));

        let output = self.bridge.run_shell(&full)?;
        if output.is_failure() {
            return Err(classify_failure(provider, &args.join(" "), &output));
        }
        Ok(())
    }
}

impl TestProviderRegistry for AdbProviderRegistry {
    fn remove_test_provider(&self, name: &str) -> PlatformResult<()> {
        self.run(name, vec!["remove-test-provider".to_string(), name.to_string()])
    }

    fn add_test_provider(
        &self,
        name: &str,
        capabilities: &ProviderCapabilities,
    ) -> PlatformResult<()> {
        self.run(name, add_test_provider_args(name, capabilities))
    }

    fn set_test_provider_enabled(&self, name: &str, enabled: bool) -> PlatformResult<()> {
        self.run(
            name,
            vec![
                "set-test-provider-enabled".to_string(),
                name.to_string(),
                enabled.to_string(),
            ],
        )
    }

    fn set_test_provider_location(&self, name: &str, fix: &LocationFix) -> PlatformResult<()> {
        self.run(name, set_test_provider_location_args(name, fix))
    }
}

fn add_test_provider_args(name: &str, capabilities: &ProviderCapabilities) -> Vec<String> {
    let mut args = vec!["add-test-provider".to_string(), name.to_string()];
    let flags = [
        (capabilities.requires_network, "--requiresNetwork"),
        (capabilities.requires_satellite, "--requiresSatellite"),
        (capabilities.requires_cell, "--requiresCell"),
        (capabilities.has_monetary_cost, "--hasMonetaryCost"),
        (capabilities.supports_altitude, "--supportsAltitude"),
        (capabilities.supports_speed, "--supportsSpeed"),
        (capabilities.supports_bearing, "--supportsBearing"),
    ];
    args.extend(
        flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, flag)| flag.to_string()),
    );
    args.push("--powerRequirement".to_string());
    args.push(capabilities.power_usage.code().to_string());
    args.push("--accuracy".to_string());
    args.push(capabilities.accuracy.code().to_string());
    args
}

fn set_test_provider_location_args(name: &str, fix: &LocationFix) -> Vec<String> {
    vec![
        "set-test-provider-location".to_string(),
        name.to_string(),
        "--location".to_string(),
        format!("{},{}", fix.latitude(), fix.longitude()),
        "--accuracy".to_string(),
        fix.accuracy_m().to_string(),
        "--time".to_string(),
        fix.time_ms().to_string(),
    ]
}

fn classify_failure(provider: &str, command: &str, output: &ShellOutput) -> PlatformError {
    let text = output.text.trim();
    let lower = text.to_lowercase();

    if text.contains("SecurityException") {
        PlatformError::SecurityDenied {
            details: exception_message(text),
        }
    } else if lower.contains("unknown provider")
        || lower.contains("provider not found")
        || (lower.contains(&provider.to_lowercase())
            && (lower.contains("unknown") || lower.contains("not found")))
    {
        PlatformError::NotFound {
            provider: provider.to_string(),
        }
    } else {
        PlatformError::CommandFailed {
            command: command.to_string(),
            details: text.to_string(),
        }
    }
}

/// The `java.lang.X: message` line of a shell exception trace
fn exception_message(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| line.contains("Exception:"))
        .unwrap_or(text)
        .to_string()
}
