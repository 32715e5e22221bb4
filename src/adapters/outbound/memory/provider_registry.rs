use crate::location::domain::{
    LocationFix, MockProviderHandle, ProviderCapabilities, MOCK_PROVIDER_NAME,
};
use crate::ports::outbound::TestProviderRegistry;
use crate::shared::error::{PlatformError, PlatformResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

/// Registry operations, for failure injection and call counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryOperation {
    Remove,
    Add,
    SetEnabled,
    SetLocation,
}

#[derive(Debug, Default)]
struct RegistryState {
    providers: HashMap<String, MockProviderHandle>,
    failures: HashMap<RegistryOperation, PlatformError>,
    calls: HashMap<RegistryOperation, usize>,
}

/// InMemoryProviderRegistry adapter simulating the platform's test-provider registry
///
/// Clones share the same state, so a test (or the `--simulate` CLI mode)
/// can keep a handle and inspect what the controller left behind. Adding
/// a provider that already exists fails, like the real location service.
#[derive(Debug, Clone)]
pub struct InMemoryProviderRegistry {
    state: Arc<Mutex<RegistryState>>,
    boot: Instant,
}

impl InMemoryProviderRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::default())),
            boot: Instant::now(),
        }
    }

    /// Pre-registers the mock provider, as a crashed earlier session would
    pub fn with_leaked_registration(self) -> Self {
        {
            let mut state = self.lock();
            let mut handle = MockProviderHandle::registered(
                MOCK_PROVIDER_NAME,
                ProviderCapabilities::mock_provider(),
            );
            handle.set_enabled(true);
            state
                .providers
                .insert(MOCK_PROVIDER_NAME.to_string(), handle);
        }
        self
    }

    /// Makes every call of `operation` fail with `error`
    pub fn with_failure(self, operation: RegistryOperation, error: PlatformError) -> Self {
        self.lock().failures.insert(operation, error);
        self
    }

    /// Snapshot of the named provider, if registered
    pub fn provider(&self, name: &str) -> Option<MockProviderHandle> {
        self.lock().providers.get(name).cloned()
    }

    pub fn provider_count(&self) -> usize {
        self.lock().providers.len()
    }

    pub fn call_count(&self, operation: RegistryOperation) -> usize {
        self.lock().calls.get(&operation).copied().unwrap_or(0)
    }

    /// Total number of registry calls of any kind
    pub fn total_calls(&self) -> usize {
        self.lock().calls.values().sum()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        // State stays consistent even if a holder panicked
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Counts the call and returns the injected failure, if any
    fn begin(&self, operation: RegistryOperation) -> PlatformResult<MutexGuard<'_, RegistryState>> {
        let mut state = self.lock();
        *state.calls.entry(operation).or_insert(0) += 1;
        if let Some(error) = state.failures.get(&operation) {
            return Err(error.clone());
        }
        Ok(state)
    }
}

impl Default for InMemoryProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProviderRegistry for InMemoryProviderRegistry {
    fn remove_test_provider(&self, name: &str) -> PlatformResult<()> {
        let mut state = self.begin(RegistryOperation::Remove)?;
        match state.providers.remove(name) {
            Some(_) => Ok(()),
            None => Err(PlatformError::NotFound {
                provider: name.to_string(),
            }),
        }
    }

    fn add_test_provider(
        &self,
        name: &str,
        capabilities: &ProviderCapabilities,
    ) -> PlatformResult<()> {
        let mut state = self.begin(RegistryOperation::Add)?;
        if state.providers.contains_key(name) {
            return Err(PlatformError::CommandFailed {
                command: format!("add-test-provider {}", name),
                details: format!("provider {} already exists", name),
            });
        }
        state.providers.insert(
            name.to_string(),
            MockProviderHandle::registered(name, *capabilities),
        );
        Ok(())
    }

    fn set_test_provider_enabled(&self, name: &str, enabled: bool) -> PlatformResult<()> {
        let mut state = self.begin(RegistryOperation::SetEnabled)?;
        let handle = state
            .providers
            .get_mut(name)
            .ok_or_else(|| PlatformError::NotFound {
                provider: name.to_string(),
            })?;
        handle.set_enabled(enabled);
        Ok(())
    }

    fn set_test_provider_location(&self, name: &str, fix: &LocationFix) -> PlatformResult<()> {
        let mut state = self.begin(RegistryOperation::SetLocation)?;
        let handle = state
            .providers
            .get_mut(name)
            .ok_or_else(|| PlatformError::NotFound {
                provider: name.to_string(),
            })?;
        handle.record_fix(fix.clone());
        Ok(())
    }

    fn elapsed_realtime_nanos(&self) -> Option<u64> {
        u64::try_from(self.boot.elapsed().as_nanos()).ok()
    }
}
