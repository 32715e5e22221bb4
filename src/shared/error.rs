use std::fmt;
use thiserror::Error;

/// Steps shown to the user when the developer mock-location allowance is off.
pub const MOCK_LOCATION_ENABLE_STEPS: &str = "\
1. Open Settings → About phone\n   \
2. Tap 'Build number' seven times to unlock Developer options\n   \
3. Go back to Settings → Developer options\n   \
4. Turn on 'Allow mock locations'\n   \
5. Select this tool's package as the mock location app\n   \
(`mock-gps settings` opens the Developer options screen on the device)";

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a missing precondition
/// (fixable on the device) from bad input and from tool failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the fix was injected, or the provider was stopped
    Success = 0,
    /// A device-side precondition is not met (mock allowance, permission, mock app selection)
    PreconditionFailed = 1,
    /// Invalid command-line arguments or coordinate text
    InvalidArguments = 2,
    /// Application error (adb failure, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PreconditionFailed => write!(f, "Precondition Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures reported by the host platform's location service.
///
/// Outbound ports return these so the controller can tell an expected
/// "no such provider" apart from an authorization gap or a hard failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Test provider not found: {provider}")]
    NotFound { provider: String },

    #[error("Location service rejected the call: {details}")]
    SecurityDenied { details: String },

    #[error("Location service command failed: {command}\nDetails: {details}")]
    CommandFailed { command: String, details: String },

    #[error("Host platform unavailable: {details}")]
    Unavailable { details: String },
}

/// Result type for outbound platform calls
pub type PlatformResult<T> = std::result::Result<T, PlatformError>;

/// Failures of `start`.
///
/// Every variant is a value handed back to the caller; none of them
/// leaves a partially registered provider behind except
/// `ProviderOperationFailed`, where the platform state is best-effort.
#[derive(Debug, Error, PartialEq)]
pub enum MockLocationError {
    #[error("Invalid coordinate: '{input}'\nReason: {reason}\n\n💡 Hint: Enter decimal degrees, latitude in [-90, 90] and longitude in [-180, 180] (e.g. 39.9042 116.4074)")]
    InvalidCoordinateFormat { input: String, reason: String },

    #[error(
        "Mock locations are not allowed on this device\n\n💡 Hint: Enable them as follows:\n   {steps}",
        steps = MOCK_LOCATION_ENABLE_STEPS
    )]
    MockLocationNotAllowed,

    #[error("Fine location permission is not granted\n\n💡 Hint: A permission request has been sent. Run start again once it is granted")]
    PermissionMissing,

    #[error("Not authorized to set up the mock location provider\nDetails: {details}\n\n💡 Hint: Make sure this tool is selected as the mock location app in Developer options")]
    ProviderSetupDenied { details: String },

    #[error("Mock location provider operation failed")]
    ProviderOperationFailed {
        #[source]
        cause: PlatformError,
    },
}

impl MockLocationError {
    /// Maps the failure onto the CLI exit code contract
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MockLocationError::InvalidCoordinateFormat { .. } => ExitCode::InvalidArguments,
            MockLocationError::MockLocationNotAllowed
            | MockLocationError::PermissionMissing
            | MockLocationError::ProviderSetupDenied { .. } => ExitCode::PreconditionFailed,
            MockLocationError::ProviderOperationFailed { .. } => ExitCode::ApplicationError,
        }
    }
}
