pub mod error_tracking;

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counters exposed on `/metrics` in Prometheus text format.
#[derive(Default)]
pub struct AppMetrics {
    request_count: AtomicU64,
    error_count: AtomicU64,
    latency_total_ms: AtomicU64,
    latency_count: AtomicU64,
    proximity_searches: AtomicU64,
    proximity_results: AtomicU64,
    searches_over_ceiling: AtomicU64,
}

impl AppMetrics {
    pub fn record_request(&self, status: u16, latency_ms: u64) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        if status >= 500 {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.latency_total_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.latency_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_proximity_search(&self, results: usize) {
        self.proximity_searches.fetch_add(1, Ordering::Relaxed);
        self.proximity_results
            .fetch_add(results as u64, Ordering::Relaxed);
    }

    pub fn record_search_over_ceiling(&self) {
        self.searches_over_ceiling.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self, db_size: u32, db_idle: usize) -> String {
        let count = self.latency_count.load(Ordering::Relaxed).max(1);
        let avg_latency = self.latency_total_ms.load(Ordering::Relaxed) as f64 / count as f64;

        format!(
            concat!(
                "# TYPE http_requests_total counter\n",
                "http_requests_total {}\n",
                "# TYPE http_error_total counter\n",
                "http_error_total {}\n",
                "# TYPE http_latency_avg_ms gauge\n",
                "http_latency_avg_ms {:.2}\n",
                "# TYPE proximity_searches_total counter\n",
                "proximity_searches_total {}\n",
                "# TYPE proximity_results_total counter\n",
                "proximity_results_total {}\n",
                "# TYPE proximity_searches_over_ceiling_total counter\n",
                "proximity_searches_over_ceiling_total {}\n",
                "# TYPE db_pool_size gauge\n",
                "db_pool_size {}\n",
                "# TYPE db_pool_idle gauge\n",
                "db_pool_idle {}\n",
            ),
            self.request_count.load(Ordering::Relaxed),
            self.error_count.load(Ordering::Relaxed),
            avg_latency,
            self.proximity_searches.load(Ordering::Relaxed),
            self.proximity_results.load(Ordering::Relaxed),
            self.searches_over_ceiling.load(Ordering::Relaxed),
            db_size,
            db_idle,
        )
    }
}
