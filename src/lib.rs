//! mock-gps - pin a device's reported location to a fixed coordinate
//!
//! This library registers a synthetic location source with a host's
//! location service, injects one fix into it, and tears it down again,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`location`): Coordinates, fixes and the provider model
//! - **Application Layer** (`application`): The mock provider lifecycle
//! - **Ports** (`ports`): Interface definitions for the host platform
//! - **Adapters** (`adapters`): adb, in-memory and console implementations
//! - **Shared** (`shared`): Error taxonomy and exit codes
//!
//! # Example
//!
//! ```
//! use mock_gps::prelude::*;
//!
//! let registry = InMemoryProviderRegistry::new();
//! let mut controller = MockProviderController::new(
//!     InMemoryPreconditionGate::permissive(),
//!     registry.clone(),
//!     StderrStatusReporter::new(),
//! );
//!
//! let coordinate = controller.start("39.9042", "116.4074").unwrap();
//! assert_eq!(coordinate.latitude(), 39.9042);
//! assert_eq!(registry.provider_count(), 1);
//!
//! controller.stop();
//! assert_eq!(registry.provider_count(), 0);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod location;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::adb::{
        AdbBridge, AdbPreconditionGate, AdbProviderRegistry,
    };
    pub use crate::adapters::outbound::console::StderrStatusReporter;
    pub use crate::adapters::outbound::memory::{
        InMemoryPreconditionGate, InMemoryProviderRegistry, RegistryOperation,
    };
    pub use crate::application::dto::{OutputFormat, PreconditionStatus};
    pub use crate::application::use_cases::MockProviderController;
    pub use crate::location::domain::{
        Coordinate, LocationFix, MockProviderHandle, PermissionResponse, ProviderCapabilities,
        MOCK_PROVIDER_NAME,
    };
    pub use crate::ports::inbound::{MockLocationPort, StopOutcome};
    pub use crate::ports::outbound::{PreconditionGate, StatusReporter, TestProviderRegistry};
    pub use crate::shared::error::{ExitCode, MockLocationError, PlatformError, PlatformResult};
    pub use crate::shared::Result;
}
