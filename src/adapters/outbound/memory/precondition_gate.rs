use crate::location::domain::PermissionResponse;
use crate::ports::outbound::PreconditionGate;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// InMemoryPreconditionGate adapter with settable host facts
///
/// A permission request is answered with the configured response on the
/// responder channel, the same way a real host delivers it after the
/// request call has returned. A `Granted` answer also flips the
/// permission fact, so a retried `start` gets through.
#[derive(Debug, Clone)]
pub struct InMemoryPreconditionGate {
    mock_location_allowed: Arc<AtomicBool>,
    location_permission: Arc<AtomicBool>,
    requests: Arc<AtomicUsize>,
    answer: Option<PermissionResponse>,
    responder: Option<Arc<Mutex<Sender<PermissionResponse>>>>,
}

impl InMemoryPreconditionGate {
    pub fn new(mock_location_allowed: bool, location_permission: bool) -> Self {
        Self {
            mock_location_allowed: Arc::new(AtomicBool::new(mock_location_allowed)),
            location_permission: Arc::new(AtomicBool::new(location_permission)),
            requests: Arc::new(AtomicUsize::new(0)),
            answer: None,
            responder: None,
        }
    }

    /// Both preconditions hold
    pub fn permissive() -> Self {
        Self::new(true, true)
    }

    /// Answers permission requests with `answer` on `responder`
    pub fn answering(mut self, answer: PermissionResponse, responder: Sender<PermissionResponse>) -> Self {
        self.answer = Some(answer);
        self.responder = Some(Arc::new(Mutex::new(responder)));
        self
    }

    pub fn set_mock_location_allowed(&self, allowed: bool) {
        self.mock_location_allowed.store(allowed, Ordering::SeqCst);
    }

    pub fn set_location_permission(&self, granted: bool) {
        self.location_permission.store(granted, Ordering::SeqCst);
    }

    /// Number of permission requests issued so far
    pub fn permission_requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PreconditionGate for InMemoryPreconditionGate {
    fn is_mock_location_allowed(&self) -> bool {
        self.mock_location_allowed.load(Ordering::SeqCst)
    }

    fn has_location_permission(&self) -> bool {
        self.location_permission.load(Ordering::SeqCst)
    }

    fn request_location_permission(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);

        let (Some(answer), Some(responder)) = (self.answer, self.responder.as_ref()) else {
            return;
        };
        if answer.is_granted() {
            self.set_location_permission(true);
        }
        if let Ok(sender) = responder.lock() {
            // Receiver gone means nobody is listening; nothing to deliver to
            let _ = sender.send(answer);
        }
    }
}
