use super::LocationFix;
use serde::Serialize;

/// Name under which the synthetic location source is registered
pub const MOCK_PROVIDER_NAME: &str = "mock_gps_provider";

/// Power requirement class advertised by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUsage {
    Low,
    Medium,
    High,
}

impl PowerUsage {
    /// Platform constant for this class (`Criteria.POWER_*`)
    pub fn code(self) -> u8 {
        match self {
            PowerUsage::Low => 1,
            PowerUsage::Medium => 2,
            PowerUsage::High => 3,
        }
    }
}

/// Accuracy class advertised by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Fine,
    Coarse,
}

impl Accuracy {
    /// Platform constant for this class (`Criteria.ACCURACY_*`)
    pub fn code(self) -> u8 {
        match self {
            Accuracy::Fine => 1,
            Accuracy::Coarse => 2,
        }
    }
}

/// Capability flags a test provider is registered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderCapabilities {
    pub requires_network: bool,
    pub requires_satellite: bool,
    pub requires_cell: bool,
    pub has_monetary_cost: bool,
    pub supports_altitude: bool,
    pub supports_speed: bool,
    pub supports_bearing: bool,
    pub power_usage: PowerUsage,
    pub accuracy: Accuracy,
}

impl ProviderCapabilities {
    /// The fixed profile of the mock provider: no hardware requirements,
    /// speed only, low power, fine accuracy
    pub const fn mock_provider() -> Self {
        Self {
            requires_network: false,
            requires_satellite: false,
            requires_cell: false,
            has_monetary_cost: false,
            supports_altitude: false,
            supports_speed: true,
            supports_bearing: false,
            power_usage: PowerUsage::Low,
            accuracy: Accuracy::Fine,
        }
    }
}

/// A synthetic location source as registered with the platform
///
/// The platform is the source of truth for whether a handle exists;
/// registries hand these out as snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockProviderHandle {
    name: String,
    capabilities: ProviderCapabilities,
    enabled: bool,
    last_fix: Option<LocationFix>,
}

impl MockProviderHandle {
    /// A freshly registered provider: disabled, nothing injected yet
    pub fn registered(name: &str, capabilities: ProviderCapabilities) -> Self {
        Self {
            name: name.to_string(),
            capabilities,
            enabled: false,
            last_fix: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn last_fix(&self) -> Option<&LocationFix> {
        self.last_fix.as_ref()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn record_fix(&mut self, fix: LocationFix) {
        self.last_fix = Some(fix);
    }
}
