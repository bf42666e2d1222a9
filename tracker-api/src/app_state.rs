use std::sync::Arc;

use tracker_core::domain::ports::inbound::TrackerService;

#[derive(Clone)]
pub struct AppState {
    pub tracker_service: Arc<dyn TrackerService>,
}

impl AppState {
    pub fn new(tracker_service: Arc<dyn TrackerService>) -> Self {
        Self { tracker_service }
    }
}
