//! Viewer lifecycle state and the stale-response guard.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use contracts::ViewerError;

/// Where a viewer instance is in its fetch/resolve lifecycle.
///
/// Mount moves `Idle -> Loading`; a normalized schema moves to `Resolving`;
/// a committed resolution moves to `Ready`; any failure lands in `Failed`,
/// never leaving the viewer stuck in a loading state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerPhase {
    Idle,
    Loading,
    Resolving,
    Ready,
    Failed(ViewerError),
}

impl ViewerPhase {
    /// A request is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, ViewerPhase::Loading | ViewerPhase::Resolving)
    }
}

/// Monotonic request-sequence guard for overlapping data-source resolutions.
///
/// Rapid parameter changes can put several resolutions in flight at once;
/// only the response holding the newest token may commit, so a slow stale
/// response can never overwrite a newer one. Atomically backed so the guard
/// can live inside `Send + Sync` callbacks.
#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    seq: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every token issued before.
    pub fn issue(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `token` still belongs to the newest request.
    pub fn is_current(&self, token: u64) -> bool {
        self.seq.load(Ordering::Relaxed) == token
    }
}
