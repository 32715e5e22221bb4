use crate::location::domain::{
    Coordinate, LocationFix, PermissionResponse, ProviderCapabilities, MOCK_PROVIDER_NAME,
};
use crate::ports::inbound::{MockLocationPort, StopOutcome};
use crate::ports::outbound::{PreconditionGate, StatusReporter, TestProviderRegistry};
use crate::shared::error::{MockLocationError, PlatformError};

/// Remove stale, register, enable, inject
const SETUP_STEPS: usize = 4;

/// MockProviderController - owns the lifecycle of the single mock provider
///
/// States are `Unregistered` and `Registered`; which one holds is decided
/// by the platform registry, never by a local flag. `start` always clears
/// a possibly leaked registration before registering again, so it heals
/// state left by a crashed or earlier session.
///
/// When dropped, the controller runs the same path as `stop` unless it was
/// [`detached`](Self::detached). Drop does not run if the process is killed
/// abruptly; a registration leaked that way is cleared by the next `start`
/// or `stop`.
///
/// # Type Parameters
/// * `G` - PreconditionGate implementation
/// * `H` - TestProviderRegistry implementation
/// * `R` - StatusReporter implementation
pub struct MockProviderController<G, H, R>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
    R: StatusReporter,
{
    gate: G,
    registry: H,
    reporter: R,
    last_fix: Option<LocationFix>,
    teardown_on_drop: bool,
}

impl<G, H, R> MockProviderController<G, H, R>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
    R: StatusReporter,
{
    /// Creates a new controller with injected dependencies
    pub fn new(gate: G, registry: H, reporter: R) -> Self {
        Self {
            gate,
            registry,
            reporter,
            last_fix: None,
            teardown_on_drop: true,
        }
    }

    /// Leaves the provider registered when the controller is dropped
    ///
    /// Used by one-shot front ends where the process exits right after
    /// `start` and the registration must outlive it.
    pub fn detached(mut self) -> Self {
        self.teardown_on_drop = false;
        self
    }

    /// The fix injected by the last successful `start`, if any
    pub fn last_fix(&self) -> Option<&LocationFix> {
        self.last_fix.as_ref()
    }

    /// Runs the stop path explicitly, as process teardown would
    pub fn teardown(&mut self) -> StopOutcome {
        self.stop()
    }

    /// Fails fast before any platform mutation
    fn check_preconditions(&self) -> Result<(), MockLocationError> {
        if !self.gate.is_mock_location_allowed() {
            self.reporter
                .report_warning("🔧 Mock locations are not allowed on this device");
            return Err(MockLocationError::MockLocationNotAllowed);
        }

        if !self.gate.has_location_permission() {
            self.reporter
                .report_warning("🔐 Fine location permission missing, requesting it");
            self.gate.request_location_permission();
            return Err(MockLocationError::PermissionMissing);
        }

        Ok(())
    }

    /// Remove-then-register, then enable
    fn register_provider(&self) -> Result<(), MockLocationError> {
        self.reporter.report_step(
            1,
            SETUP_STEPS,
            "Removing stale mock provider registration",
        );
        match self.registry.remove_test_provider(MOCK_PROVIDER_NAME) {
            Ok(()) | Err(PlatformError::NotFound { .. }) => {}
            Err(e) => {
                self.reporter.report_warning(&format!(
                    "⚠️  Ignoring failure while clearing old provider: {}",
                    e
                ));
            }
        }

        self.reporter
            .report_step(2, SETUP_STEPS, "Registering mock provider");
        self.registry
            .add_test_provider(MOCK_PROVIDER_NAME, &ProviderCapabilities::mock_provider())
            .map_err(classify_setup_failure)?;

        self.reporter
            .report_step(3, SETUP_STEPS, "Enabling mock provider");
        self.registry
            .set_test_provider_enabled(MOCK_PROVIDER_NAME, true)
            .map_err(classify_setup_failure)?;

        Ok(())
    }

    fn inject_fix(&self, coordinate: Coordinate) -> Result<LocationFix, MockLocationError> {
        self.reporter
            .report_step(4, SETUP_STEPS, "Injecting location fix");
        let fix = LocationFix::now(
            MOCK_PROVIDER_NAME,
            coordinate,
            self.registry.elapsed_realtime_nanos(),
        );
        self.registry
            .set_test_provider_location(MOCK_PROVIDER_NAME, &fix)
            .map_err(|cause| MockLocationError::ProviderOperationFailed { cause })?;
        Ok(fix)
    }
}

impl<G, H, R> MockLocationPort for MockProviderController<G, H, R>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
    R: StatusReporter,
{
    fn start(
        &mut self,
        latitude_text: &str,
        longitude_text: &str,
    ) -> Result<Coordinate, MockLocationError> {
        let coordinate = Coordinate::parse(latitude_text, longitude_text)?;

        self.check_preconditions()?;
        self.register_provider()?;
        let fix = self.inject_fix(coordinate)?;

        self.reporter
            .report_success(&format!("✅ Mock location set: {}", coordinate));
        self.last_fix = Some(fix);

        Ok(coordinate)
    }

    fn stop(&mut self) -> StopOutcome {
        self.last_fix = None;

        match self.registry.remove_test_provider(MOCK_PROVIDER_NAME) {
            Ok(()) => {
                self.reporter.report_success("🛑 Mock location stopped");
                StopOutcome::Stopped
            }
            Err(PlatformError::NotFound { .. }) => {
                self.reporter.report("🛑 Mock location was not active");
                StopOutcome::Stopped
            }
            Err(e) => {
                let note = format!("provider removal reported: {}", e);
                self.reporter
                    .report_warning(&format!("⚠️  Mock location stopped, but {}", note));
                StopOutcome::StoppedWithNote(note)
            }
        }
    }

    fn on_permission_result(&self, response: PermissionResponse) {
        match response {
            PermissionResponse::Granted => self
                .reporter
                .report_success("✅ Location permission granted, run start again"),
            PermissionResponse::Denied => self
                .reporter
                .report_warning("❌ Location permission is required for mock locations"),
        }
    }
}

impl<G, H, R> Drop for MockProviderController<G, H, R>
where
    G: PreconditionGate,
    H: TestProviderRegistry,
    R: StatusReporter,
{
    fn drop(&mut self) {
        if self.teardown_on_drop {
            self.stop();
        }
    }
}

/// A security refusal during setup is its own failure; anything else is
/// passed through with its cause
fn classify_setup_failure(error: PlatformError) -> MockLocationError {
    match error {
        PlatformError::SecurityDenied { details } => {
            MockLocationError::ProviderSetupDenied { details }
        }
        cause => MockLocationError::ProviderOperationFailed { cause },
    }
}

#[cfg(test)]
mod tests;
