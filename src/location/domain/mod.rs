pub mod coordinate;
pub mod location_fix;
pub mod permission;
pub mod provider;

pub use coordinate::Coordinate;
pub use location_fix::LocationFix;
pub use permission::PermissionResponse;
pub use provider::{
    Accuracy, MockProviderHandle, PowerUsage, ProviderCapabilities, MOCK_PROVIDER_NAME,
};
