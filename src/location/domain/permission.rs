use serde::Serialize;

/// Outcome of a fine-location permission request, delivered out-of-band
/// after `PreconditionGate::request_location_permission` returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionResponse {
    Granted,
    Denied,
}

impl PermissionResponse {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionResponse::Granted)
    }
}

impl From<bool> for PermissionResponse {
    fn from(granted: bool) -> Self {
        if granted {
            PermissionResponse::Granted
        } else {
            PermissionResponse::Denied
        }
    }
}
