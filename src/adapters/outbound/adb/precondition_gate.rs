use super::AdbBridge;
use crate::location::domain::PermissionResponse;
use crate::ports::outbound::PreconditionGate;
use crate::shared::error::{PlatformError, PlatformResult};
use std::sync::mpsc::Sender;
use std::thread;

const FINE_LOCATION_PERMISSION: &str = "android.permission.ACCESS_FINE_LOCATION";
const DEVELOPER_SETTINGS_ACTION: &str = "android.settings.APPLICATION_DEVELOPMENT_SETTINGS";

/// AdbPreconditionGate adapter reading the device's mock-location facts
///
/// The mock allowance counts as enabled if either the legacy secure
/// setting `mock_location` is `1` or `package` holds the
/// `android:mock_location` app-op (the "mock location app" selection on
/// current Android). Anything that cannot be read counts as `false`.
#[derive(Debug, Clone)]
pub struct AdbPreconditionGate {
    bridge: AdbBridge,
    package: String,
    responder: Option<Sender<PermissionResponse>>,
}

impl AdbPreconditionGate {
    pub fn new(bridge: AdbBridge, package: impl Into<String>) -> Self {
        Self {
            bridge,
            package: package.into(),
            responder: None,
        }
    }

    /// Delivers permission request outcomes on `responder`
    pub fn with_permission_responder(mut self, responder: Sender<PermissionResponse>) -> Self {
        self.responder = Some(responder);
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Opens the Developer options screen on the device
    pub fn open_developer_settings(&self) -> PlatformResult<()> {
        let output = self
            .bridge
            .run_shell(&["am", "start", "-a", DEVELOPER_SETTINGS_ACTION])?;
        if output.is_failure() || output.text.contains("Error:") {
            return Err(PlatformError::CommandFailed {
                command: format!("am start -a {}", DEVELOPER_SETTINGS_ACTION),
                details: output.text.trim().to_string(),
            });
        }
        Ok(())
    }

    fn legacy_setting_enabled(&self) -> bool {
        self.bridge
            .run_shell(&["settings", "get", "secure", "mock_location"])
            .map(|output| !output.is_failure() && parse_secure_flag(&output.text))
            .unwrap_or(false)
    }

    fn mock_app_op_allowed(&self) -> bool {
        self.bridge
            .run_shell(&["appops", "get", &self.package, "android:mock_location"])
            .map(|output| !output.is_failure() && parse_mock_location_op(&output.text))
            .unwrap_or(false)
    }
}

impl PreconditionGate for AdbPreconditionGate {
    fn is_mock_location_allowed(&self) -> bool {
        self.legacy_setting_enabled() || self.mock_app_op_allowed()
    }

    fn has_location_permission(&self) -> bool {
        self.bridge
            .run_shell(&["dumpsys", "package", &self.package])
            .map(|output| parse_permission_granted(&output.text, FINE_LOCATION_PERMISSION))
            .unwrap_or(false)
    }

    fn request_location_permission(&self) {
        let bridge = self.bridge.clone();
        let package = self.package.clone();
        let responder = self.responder.clone();

        thread::spawn(move || {
            let granted = bridge
                .run_shell(&["pm", "grant", &package, FINE_LOCATION_PERMISSION])
                .map(|output| !output.is_failure())
                .unwrap_or(false);
            if let Some(responder) = responder {
                // Receiver gone means the caller stopped listening
                let _ = responder.send(PermissionResponse::from(granted));
            }
        });
    }
}

/// `settings get` prints `1`, `0`, or `null` when the key is absent
fn parse_secure_flag(text: &str) -> bool {
    text.trim() == "1"
}

/// `appops get` prints e.g. `MOCK_LOCATION: allow; time=+2m3s ago`
fn parse_mock_location_op(text: &str) -> bool {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("MOCK_LOCATION:"))
        .any(|rest| {
            rest.split(';')
                .next()
                .map(|mode| mode.trim() == "allow")
                .unwrap_or(false)
        })
}

/// `dumpsys package` lists runtime grants as `<permission>: granted=true, flags=[...]`
fn parse_permission_granted(text: &str, permission: &str) -> bool {
    let prefix = format!("{}: granted=", permission);
    text.lines()
        .filter_map(|line| line.trim().strip_prefix(prefix.as_str()))
        .any(|rest| rest.starts_with("true"))
}
