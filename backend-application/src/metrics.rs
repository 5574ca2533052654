use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    webhook_requests: AtomicU64,
    webhook_rejected: AtomicU64,
    events_persisted: AtomicU64,
    persist_errors: AtomicU64,
}

impl Metrics {
    pub fn record_request(&self) {
        self.webhook_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.webhook_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persisted(&self) {
        self.events_persisted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_error(&self) {
        self.persist_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.webhook_requests.load(Ordering::Relaxed);
        let rejected = self.webhook_rejected.load(Ordering::Relaxed);
        let persisted = self.events_persisted.load(Ordering::Relaxed);
        let errors = self.persist_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE hookhouse_webhook_requests_total counter\n\
hookhouse_webhook_requests_total {}\n\
# TYPE hookhouse_webhook_rejected_total counter\n\
hookhouse_webhook_rejected_total {}\n\
# TYPE hookhouse_events_persisted_total counter\n\
hookhouse_events_persisted_total {}\n\
# TYPE hookhouse_persist_errors_total counter\n\
hookhouse_persist_errors_total {}\n",
            requests, rejected, persisted, errors
        )
    }
}
