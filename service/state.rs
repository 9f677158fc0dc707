use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::config::ServiceConfig;

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Request counters, updated from every request thread without locking.
#[derive(Debug, Default)]
pub struct ServiceStats {
    converted: AtomicU64,
    rejected: AtomicU64,
    bytes_converted: AtomicU64,
}

/// Point-in-time copy of [`ServiceStats`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub converted: u64,
    pub rejected: u64,
    pub bytes_converted: u64,
}

impl ServiceStats {
    pub fn record_converted(&self, bytes: usize) {
        self.converted.fetch_add(1, Ordering::Relaxed);
        self.bytes_converted.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            converted: self.converted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            bytes_converted: self.bytes_converted.load(Ordering::Relaxed),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

pub struct ServiceState {
    pub config: ServiceConfig,
    pub stats: ServiceStats,
}

impl ServiceState {
    pub fn new(config: ServiceConfig) -> Self {
        ServiceState { config, stats: ServiceStats::default() }
    }
}

/// Shared state type passed to every handler thread.
pub type SharedState = Arc<ServiceState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = ServiceStats::default();
        stats.record_converted(16);
        stats.record_converted(4);
        stats.record_rejected();
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot { converted: 2, rejected: 1, bytes_converted: 20 }
        );
    }

    #[test]
    fn counters_are_shared_across_threads() {
        let state: SharedState = Arc::new(ServiceState::new(ServiceConfig::default()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        state.stats.record_converted(4);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.stats.snapshot().converted, 400);
        assert_eq!(state.stats.snapshot().bytes_converted, 1600);
    }
}
