use mock_gps::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PreconditionGate for testing that records every query in order
#[derive(Clone)]
pub struct MockPreconditionGate {
    pub mock_location_allowed: bool,
    pub location_permission: bool,
    pub calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockPreconditionGate {
    pub fn new(mock_location_allowed: bool, location_permission: bool) -> Self {
        Self {
            mock_location_allowed,
            location_permission,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn permission_requests(&self) -> usize {
        self.get_calls()
            .iter()
            .filter(|c| **c == "request_location_permission")
            .count()
    }
}

impl PreconditionGate for MockPreconditionGate {
    fn is_mock_location_allowed(&self) -> bool {
        self.calls.lock().unwrap().push("is_mock_location_allowed");
        self.mock_location_allowed
    }

    fn has_location_permission(&self) -> bool {
        self.calls.lock().unwrap().push("has_location_permission");
        self.location_permission
    }

    fn request_location_permission(&self) {
        self.calls.lock().unwrap().push("request_location_permission");
    }
}
