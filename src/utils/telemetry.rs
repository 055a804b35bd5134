// file: src/utils/telemetry.rs
// description: stage timing and throughput figures for debug logging
// reference: std::time::Instant

use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Operation timer for per-stage tracking
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    pub fn new(operation: &str) -> Self {
        debug!("Starting operation: {}", operation);
        Self {
            operation: operation.to_string(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed operation: {} in {:.6}s",
            self.operation,
            elapsed.as_secs_f64()
        );
        elapsed
    }

    pub fn finish_with_count(self, count: usize) -> PerformanceMetrics {
        let metrics = PerformanceMetrics::new(&self.operation, count, self.elapsed());
        debug!("Completed operation: {}", metrics.format());
        metrics
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceMetrics {
    pub operation: String,
    pub count: usize,
    pub duration_us: u64,
    pub throughput: f64, // items per second
}

impl PerformanceMetrics {
    pub fn new(operation: &str, count: usize, duration: Duration) -> Self {
        let duration_secs = duration.as_secs_f64();
        let throughput = if duration_secs > 0.0 {
            count as f64 / duration_secs
        } else {
            0.0
        };

        Self {
            operation: operation.to_string(),
            count,
            duration_us: duration.as_micros() as u64,
            throughput,
        }
    }

    pub fn format(&self) -> String {
        format!(
            "{}: {} items in {}us ({:.2} items/sec)",
            self.operation, self.count, self.duration_us, self.throughput
        )
    }
}
