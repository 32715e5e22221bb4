use super::*;
use crate::location::domain::MockProviderHandle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type CallLog = Rc<RefCell<Vec<String>>>;

// Mock implementations for testing
struct MockGate {
    allowed: bool,
    permitted: bool,
    calls: CallLog,
}

impl PreconditionGate for MockGate {
    fn is_mock_location_allowed(&self) -> bool {
        self.calls.borrow_mut().push("is_mock_location_allowed".to_string());
        self.allowed
    }

    fn has_location_permission(&self) -> bool {
        self.calls.borrow_mut().push("has_location_permission".to_string());
        self.permitted
    }

    fn request_location_permission(&self) {
        self.calls
            .borrow_mut()
            .push("request_location_permission".to_string());
    }
}

#[derive(Default)]
struct Failures {
    remove: Option<PlatformError>,
    add: Option<PlatformError>,
    enable: Option<PlatformError>,
    inject: Option<PlatformError>,
}

struct MockRegistry {
    providers: Rc<RefCell<HashMap<String, MockProviderHandle>>>,
    failures: Failures,
    monotonic: Option<u64>,
    calls: CallLog,
}

impl TestProviderRegistry for MockRegistry {
    fn remove_test_provider(&self, name: &str) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(format!("remove {}", name));
        if let Some(e) = &self.failures.remove {
            return Err(e.clone());
        }
        match self.providers.borrow_mut().remove(name) {
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
    ) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(format!("add {}", name));
        if let Some(e) = &self.failures.add {
            return Err(e.clone());
        }
        let mut providers = self.providers.borrow_mut();
        if providers.contains_key(name) {
            return Err(PlatformError::CommandFailed {
                command: "add".to_string(),
                details: "already exists".to_string(),
            });
        }
        providers.insert(
            name.to_string(),
            MockProviderHandle::registered(name, *capabilities),
        );
        Ok(())
    }

    fn set_test_provider_enabled(&self, name: &str, enabled: bool) -> Result<(), PlatformError> {
        self.calls
            .borrow_mut()
            .push(format!("enable {} {}", name, enabled));
        if let Some(e) = &self.failures.enable {
            return Err(e.clone());
        }
        if let Some(handle) = self.providers.borrow_mut().get_mut(name) {
            handle.set_enabled(enabled);
        }
        Ok(())
    }

    fn set_test_provider_location(&self, name: &str, fix: &LocationFix) -> Result<(), PlatformError> {
        self.calls.borrow_mut().push(format!("inject {}", name));
        if let Some(e) = &self.failures.inject {
            return Err(e.clone());
        }
        if let Some(handle) = self.providers.borrow_mut().get_mut(name) {
            handle.record_fix(fix.clone());
        }
        Ok(())
    }

    fn elapsed_realtime_nanos(&self) -> Option<u64> {
        self.monotonic
    }
}

struct MockReporter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl StatusReporter for MockReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
    fn report_step(&self, current: usize, total: usize, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("[{}/{}] {}", current, total, message));
    }
    fn report_warning(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Warning: {}", message));
    }
    fn report_success(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Success: {}", message));
    }
}

struct Harness {
    calls: CallLog,
    providers: Rc<RefCell<HashMap<String, MockProviderHandle>>>,
    messages: Rc<RefCell<Vec<String>>>,
    controller: MockProviderController<MockGate, MockRegistry, MockReporter>,
}

impl Harness {
    fn new(allowed: bool, permitted: bool) -> Self {
        Self::with_failures(allowed, permitted, Failures::default())
    }

    fn with_failures(allowed: bool, permitted: bool, failures: Failures) -> Self {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));
        let providers = Rc::new(RefCell::new(HashMap::new()));
        let messages = Rc::new(RefCell::new(Vec::new()));
        let controller = MockProviderController::new(
            MockGate {
                allowed,
                permitted,
                calls: calls.clone(),
            },
            MockRegistry {
                providers: providers.clone(),
                failures,
                monotonic: None,
                calls: calls.clone(),
            },
            MockReporter {
                messages: messages.clone(),
            },
        );
        Self {
            calls,
            providers,
            messages,
            controller,
        }
    }

    fn registry_calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| {
                c.starts_with("remove")
                    || c.starts_with("add")
                    || c.starts_with("enable")
                    || c.starts_with("inject")
            })
            .cloned()
            .collect()
    }

    fn count_calls(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == name).count()
    }

    fn active_handle(&self) -> Option<MockProviderHandle> {
        self.providers.borrow().get(MOCK_PROVIDER_NAME).cloned()
    }
}

#[test]
fn test_start_success_injects_fix() {
    let mut h = Harness::new(true, true);

    let coordinate = h.controller.start("39.9042", "116.4074").unwrap();

    assert_eq!(coordinate.latitude(), 39.9042);
    assert_eq!(coordinate.longitude(), 116.4074);

    let handle = h.active_handle().unwrap();
    assert!(handle.is_enabled());
    assert_eq!(handle.capabilities(), &ProviderCapabilities::mock_provider());
    let fix = handle.last_fix().unwrap();
    assert_eq!(fix.latitude(), 39.9042);
    assert_eq!(fix.longitude(), 116.4074);
    assert_eq!(fix.altitude_m(), 0.0);
    assert_eq!(fix.accuracy_m(), 5.0);
    assert_eq!(fix.provider(), MOCK_PROVIDER_NAME);
    assert!(fix.elapsed_realtime_nanos().is_none());

    assert_eq!(h.controller.last_fix(), Some(fix));
}

#[test]
fn test_start_call_order() {
    let mut h = Harness::new(true, true);
    h.controller.start("1", "2").unwrap();

    assert_eq!(
        h.calls.borrow().clone(),
        vec![
            "is_mock_location_allowed".to_string(),
            "has_location_permission".to_string(),
            format!("remove {}", MOCK_PROVIDER_NAME),
            format!("add {}", MOCK_PROVIDER_NAME),
            format!("enable {} true", MOCK_PROVIDER_NAME),
            format!("inject {}", MOCK_PROVIDER_NAME),
        ]
    );
}

#[test]
fn test_start_reports_steps() {
    let mut h = Harness::new(true, true);
    h.controller.start("1", "2").unwrap();

    let messages = h.messages.borrow().clone();
    assert!(messages.iter().any(|m| m.starts_with("[1/4]")));
    assert!(messages.iter().any(|m| m.starts_with("[4/4]")));
    assert!(messages
        .iter()
        .any(|m| m.contains("Success: ✅ Mock location set: 1, 2")));
}

#[test]
fn test_start_uses_monotonic_tag_when_available() {
    let mut h = Harness::new(true, true);
    h.controller.registry.monotonic = Some(123_456);

    h.controller.start("1", "2").unwrap();

    let handle = h.active_handle().unwrap();
    assert_eq!(handle.last_fix().unwrap().elapsed_realtime_nanos(), Some(123_456));
}

#[test]
fn test_start_invalid_coordinate_makes_no_platform_calls() {
    let mut h = Harness::new(true, true);

    for (lat, lng) in [("not-a-number", "116.4074"), ("", "116.4074"), ("39.9", "")] {
        let result = h.controller.start(lat, lng);
        assert!(matches!(
            result,
            Err(MockLocationError::InvalidCoordinateFormat { .. })
        ));
    }

    assert!(h.calls.borrow().is_empty());
    assert!(h.active_handle().is_none());
}

#[test]
fn test_start_out_of_range_rejected() {
    let mut h = Harness::new(true, true);
    let result = h.controller.start("91", "0");
    assert!(matches!(
        result,
        Err(MockLocationError::InvalidCoordinateFormat { .. })
    ));
    assert!(h.calls.borrow().is_empty());
}

#[test]
fn test_start_not_allowed_regardless_of_permission() {
    for permitted in [true, false] {
        let mut h = Harness::new(false, permitted);

        let result = h.controller.start("39.9042", "116.4074");

        assert_eq!(result, Err(MockLocationError::MockLocationNotAllowed));
        assert!(h.registry_calls().is_empty());
        assert_eq!(h.count_calls("request_location_permission"), 0);
        assert_eq!(h.count_calls("has_location_permission"), 0);
    }
}

#[test]
fn test_start_permission_missing_requests_once() {
    let mut h = Harness::new(true, false);

    let result = h.controller.start("39.9042", "116.4074");

    assert_eq!(result, Err(MockLocationError::PermissionMissing));
    assert_eq!(h.count_calls("request_location_permission"), 1);
    assert!(h.registry_calls().is_empty());
    assert!(h.controller.last_fix().is_none());
}

#[test]
fn test_start_twice_self_heals() {
    let mut h = Harness::new(true, true);

    h.controller.start("39.9042", "116.4074").unwrap();
    let second = h.controller.start("31.2304", "121.4737").unwrap();

    assert_eq!(second.latitude(), 31.2304);
    assert_eq!(h.providers.borrow().len(), 1);
    let handle = h.active_handle().unwrap();
    let fix = handle.last_fix().unwrap();
    assert_eq!(fix.latitude(), 31.2304);
    assert_eq!(fix.longitude(), 121.4737);
}

#[test]
fn test_start_clears_leaked_registration() {
    let mut h = Harness::new(true, true);
    h.providers.borrow_mut().insert(
        MOCK_PROVIDER_NAME.to_string(),
        MockProviderHandle::registered(MOCK_PROVIDER_NAME, ProviderCapabilities::mock_provider()),
    );

    assert!(h.controller.start("10", "20").is_ok());
    assert_eq!(h.providers.borrow().len(), 1);
    assert!(h.active_handle().unwrap().is_enabled());
}

#[test]
fn test_start_ignores_unexpected_remove_failure() {
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            remove: Some(PlatformError::CommandFailed {
                command: "remove".to_string(),
                details: "busy".to_string(),
            }),
            ..Failures::default()
        },
    );

    assert!(h.controller.start("10", "20").is_ok());
    assert!(h
        .messages
        .borrow()
        .iter()
        .any(|m| m.starts_with("Warning:") && m.contains("busy")));
}

#[test]
fn test_start_setup_security_denied() {
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            add: Some(PlatformError::SecurityDenied {
                details: "not the mock location app".to_string(),
            }),
            ..Failures::default()
        },
    );

    let result = h.controller.start("10", "20");

    assert_eq!(
        result,
        Err(MockLocationError::ProviderSetupDenied {
            details: "not the mock location app".to_string()
        })
    );
    assert!(!h.calls.borrow().iter().any(|c| c.starts_with("inject")));
}

#[test]
fn test_start_enable_security_denied() {
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            enable: Some(PlatformError::SecurityDenied {
                details: "denied".to_string(),
            }),
            ..Failures::default()
        },
    );

    assert!(matches!(
        h.controller.start("10", "20"),
        Err(MockLocationError::ProviderSetupDenied { .. })
    ));
}

#[test]
fn test_start_other_setup_failure_carries_cause() {
    let cause = PlatformError::Unavailable {
        details: "device offline".to_string(),
    };
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            add: Some(cause.clone()),
            ..Failures::default()
        },
    );

    assert_eq!(
        h.controller.start("10", "20"),
        Err(MockLocationError::ProviderOperationFailed { cause })
    );
}

#[test]
fn test_start_inject_failure() {
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            inject: Some(PlatformError::SecurityDenied {
                details: "late".to_string(),
            }),
            ..Failures::default()
        },
    );

    let result = h.controller.start("10", "20");

    assert!(matches!(
        result,
        Err(MockLocationError::ProviderOperationFailed { .. })
    ));
    assert!(h.controller.last_fix().is_none());
    // No rollback: the registration stays as the platform left it
    assert!(h.active_handle().is_some());
}

#[test]
fn test_start_then_stop_leaves_nothing_registered() {
    let mut h = Harness::new(true, true);

    h.controller.start("39.9042", "116.4074").unwrap();
    let outcome = h.controller.stop();

    assert_eq!(outcome, StopOutcome::Stopped);
    assert!(h.providers.borrow().is_empty());
    assert!(h.controller.last_fix().is_none());
}

#[test]
fn test_stop_when_not_registered() {
    let mut h = Harness::new(true, true);

    assert_eq!(h.controller.stop(), StopOutcome::Stopped);
    assert_eq!(h.controller.stop(), StopOutcome::Stopped);
    assert!(h
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("was not active")));
}

#[test]
fn test_stop_downgrades_unexpected_failure() {
    let mut h = Harness::with_failures(
        true,
        true,
        Failures {
            remove: Some(PlatformError::CommandFailed {
                command: "remove-test-provider".to_string(),
                details: "device busy".to_string(),
            }),
            ..Failures::default()
        },
    );

    let outcome = h.controller.stop();

    match outcome {
        StopOutcome::StoppedWithNote(note) => assert!(note.contains("device busy")),
        other => panic!("expected soft success, got {:?}", other),
    }
}

#[test]
fn test_teardown_matches_stop() {
    let mut h = Harness::new(true, true);
    h.controller.start("1", "2").unwrap();

    assert_eq!(h.controller.teardown(), StopOutcome::Stopped);
    assert!(h.providers.borrow().is_empty());
}

#[test]
fn test_drop_tears_down() {
    let h = Harness::new(true, true);
    let providers = h.providers.clone();
    let mut controller = h.controller;

    controller.start("1", "2").unwrap();
    assert_eq!(providers.borrow().len(), 1);

    drop(controller);
    assert!(providers.borrow().is_empty());
}

#[test]
fn test_detached_drop_keeps_registration() {
    let h = Harness::new(true, true);
    let providers = h.providers.clone();
    let mut controller = h.controller.detached();

    controller.start("1", "2").unwrap();
    drop(controller);

    assert_eq!(providers.borrow().len(), 1);
}

#[test]
fn test_permission_result_is_informational() {
    let h = Harness::new(true, false);

    h.controller.on_permission_result(PermissionResponse::Granted);
    h.controller.on_permission_result(PermissionResponse::Denied);

    let messages = h.messages.borrow().clone();
    assert!(messages[0].starts_with("Success:"));
    assert!(messages[1].starts_with("Warning:"));
    assert!(h.registry_calls().is_empty());
}
