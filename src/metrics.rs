use metrics::{register_counter, Counter};

pub struct Metrics {
    requests_total: Counter,
    errors_total: Counter,
    feedback_errors_total: Counter,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests_total: register_counter!("selector_requests_total"),
            errors_total: register_counter!("selector_errors_total"),
            feedback_errors_total: register_counter!("selector_feedback_errors_total"),
        }
    }

    pub fn increment_requests(&self) {
        self.requests_total.increment(1);
    }

    pub fn increment_errors(&self) {
        self.errors_total.increment(1);
    }

    pub fn increment_feedback_errors(&self) {
        self.feedback_errors_total.increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
