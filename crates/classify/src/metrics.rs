// Observability hooks for the `classify` crate.
//
// Callers install a global `ClassifyMetrics` implementation via
// [`set_classify_metrics`]; `Classifier` then reports per-request latency and
// neighbor counts for every classification. This keeps instrumentation
// decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for classification operations.
pub trait ClassifyMetrics: Send + Sync {
    /// Record the outcome of one classification. `latency` is the wall-clock
    /// duration of the rank-and-resolve pass, `neighbor_count` the number of
    /// neighbors that survived thresholding, and `resolved` whether a
    /// category was predicted (as opposed to the unresolved placeholder).
    fn record_classify(&self, latency: Duration, neighbor_count: usize, resolved: bool);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn ClassifyMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn ClassifyMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn ClassifyMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global classification metrics recorder.
///
/// Typically called once during startup so every [`Classifier`](crate::Classifier)
/// shares the same backend.
pub fn set_classify_metrics(recorder: Option<Arc<dyn ClassifyMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
