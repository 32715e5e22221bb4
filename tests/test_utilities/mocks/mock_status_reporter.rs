use mock_gps::prelude::*;

/// Mock StatusReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockStatusReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockStatusReporter {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Warning: "))
            .collect()
    }
}

impl StatusReporter for MockStatusReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_step(&self, current: usize, total: usize, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Step {}/{}: {}", current, total, message));
    }

    fn report_warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn report_success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Success: {}", message));
    }
}
