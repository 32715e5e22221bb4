use crate::location::domain::{Coordinate, PermissionResponse};
use crate::shared::error::MockLocationError;
use serde::Serialize;

/// Outcome of `stop`
///
/// Stopping never fails hard: a provider that was already gone is a plain
/// success, anything else the platform complains about is downgraded to a
/// note for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "note", rename_all = "snake_case")]
pub enum StopOutcome {
    Stopped,
    StoppedWithNote(String),
}

impl StopOutcome {
    pub fn note(&self) -> Option<&str> {
        match self {
            StopOutcome::Stopped => None,
            StopOutcome::StoppedWithNote(note) => Some(note),
        }
    }
}

/// MockLocationPort - Inbound port for the mock location lifecycle
///
/// `&mut self` on `start` and `stop` keeps the remove → register → enable
/// → inject sequence exclusive for a given controller.
pub trait MockLocationPort {
    /// Pins the device location to the coordinate given as text
    ///
    /// # Errors
    /// - `InvalidCoordinateFormat` if either text is not a valid coordinate
    /// - `MockLocationNotAllowed` if the developer allowance is off
    /// - `PermissionMissing` if fine location is not granted (a request is sent)
    /// - `ProviderSetupDenied` if the host refuses the provider registration
    /// - `ProviderOperationFailed` for any other platform failure
    fn start(
        &mut self,
        latitude_text: &str,
        longitude_text: &str,
    ) -> Result<Coordinate, MockLocationError>;

    /// Removes the mock provider, idempotently
    fn stop(&mut self) -> StopOutcome;

    /// Routes the out-of-band permission response back in; informational only
    fn on_permission_result(&self, response: PermissionResponse);
}
