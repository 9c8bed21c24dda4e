use chrono::{DateTime, Utc};
use dioxus::logger::tracing::debug;

// `std::time::Instant` panics on wasm32-unknown-unknown; chrono reads the JS clock there.
pub struct PerfTimer {
    scope: &'static str,
    started_at: DateTime<Utc>,
}

impl PerfTimer {
    pub fn start(scope: &'static str) -> Self {
        Self {
            scope,
            started_at: Utc::now(),
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (Utc::now() - self.started_at).num_milliseconds().max(0)
    }

    pub fn finish(self, details: &str) {
        log_perf(self.scope, self.elapsed_ms(), details);
    }
}

#[inline]
pub fn log_perf(scope: &str, elapsed_ms: i64, details: &str) {
    if details.trim().is_empty() {
        debug!("[perf] {scope} took {elapsed_ms}ms");
    } else {
        debug!("[perf] {scope} took {elapsed_ms}ms | {details}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_timer_reports_non_negative_elapsed() {
        let timer = PerfTimer::start("test");
        assert!(timer.elapsed_ms() >= 0);
        timer.finish("");
    }
}
