use crate::shared::error::{PlatformError, PlatformResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Lines adb itself prints when it cannot reach a device
const DEVICE_ERROR_MARKERS: [&str; 4] = [
    "no devices/emulators found",
    "device offline",
    "device unauthorized",
    "more than one device/emulator",
];

/// Output of one `adb shell` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOutput {
    /// Whether the remote command exited successfully
    pub success: bool,
    /// stdout followed by stderr
    pub text: String,
}

impl ShellOutput {
    /// Android shell commands often report failures as an exception
    /// trace with exit status 0 on older devices
    pub fn is_failure(&self) -> bool {
        !self.success || self.text.contains("Exception")
    }
}

/// AdbBridge running shell commands on one device
///
/// Every call spawns `adb [-s SERIAL] shell ...` and waits for it.
#[derive(Debug, Clone)]
pub struct AdbBridge {
    adb_path: PathBuf,
    serial: Option<String>,
}

impl AdbBridge {
    pub fn new(adb_path: impl Into<PathBuf>, serial: Option<String>) -> Self {
        Self {
            adb_path: adb_path.into(),
            serial,
        }
    }

    pub fn adb_path(&self) -> &Path {
        &self.adb_path
    }

    pub fn serial(&self) -> Option<&str> {
        self.serial.as_deref()
    }

    /// Arguments passed to adb for a shell command, excluding the adb binary
    pub fn shell_args(&self, args: &[&str]) -> Vec<String> {
        let mut full = Vec::with_capacity(args.len() + 3);
        if let Some(serial) = &self.serial {
            full.push("-s".to_string());
            full.push(serial.clone());
        }
        full.push("shell".to_string());
        full.extend(args.iter().map(|a| a.to_string()));
        full
    }

    /// Runs `args` in the device shell
    ///
    /// # Errors
    /// Returns `PlatformError::Unavailable` if adb cannot be spawned or
    /// reports that the device is unreachable. A failing remote command
    /// is not an error here; inspect the returned `ShellOutput`.
    pub fn run_shell(&self, args: &[&str]) -> PlatformResult<ShellOutput> {
        let output = Command::new(&self.adb_path)
            .args(self.shell_args(args))
            .output()
            .map_err(|e| PlatformError::Unavailable {
                details: format!("failed to run {}: {}", self.adb_path.display(), e),
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&stderr);
        }

        check_device_reachable(&text)?;

        Ok(ShellOutput {
            success: output.status.success(),
            text,
        })
    }
}

fn check_device_reachable(text: &str) -> PlatformResult<()> {
    let device_error = text.lines().map(str::trim).find(|line| {
        (line.starts_with("error:") && DEVICE_ERROR_MARKERS.iter().any(|m| line.contains(m)))
            || (line.starts_with("error: device") && line.contains("not found"))
    });

    match device_error {
        Some(line) => Err(PlatformError::Unavailable {
            details: line.to_string(),
        }),
        None => Ok(()),
    }
}
