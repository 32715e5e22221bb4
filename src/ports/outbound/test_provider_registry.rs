use crate::location::domain::{LocationFix, ProviderCapabilities};
use crate::shared::error::PlatformResult;

/// TestProviderRegistry port over the platform's named test-provider registry
///
/// The registry is global host state shared with every other process on
/// the device. It has no atomic "upsert", so callers combine
/// `remove_test_provider` and `add_test_provider` themselves.
pub trait TestProviderRegistry {
    /// Removes the named test provider
    ///
    /// # Errors
    /// Returns `PlatformError::NotFound` if no such provider is registered;
    /// callers treat that as success.
    fn remove_test_provider(&self, name: &str) -> PlatformResult<()>;

    /// Registers a named test provider with the given capability flags
    ///
    /// # Errors
    /// Returns `PlatformError::SecurityDenied` when the host refuses the
    /// registration (e.g. the caller is not the selected mock app).
    fn add_test_provider(&self, name: &str, capabilities: &ProviderCapabilities)
        -> PlatformResult<()>;

    /// Enables or disables the named test provider
    fn set_test_provider_enabled(&self, name: &str, enabled: bool) -> PlatformResult<()>;

    /// Injects a fix into the named test provider
    fn set_test_provider_location(&self, name: &str, fix: &LocationFix) -> PlatformResult<()>;

    /// Current monotonic elapsed-time tag, if the host supports one
    fn elapsed_realtime_nanos(&self) -> Option<u64> {
        None
    }
}
