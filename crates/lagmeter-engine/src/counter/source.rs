use std::sync::Arc;
use std::time::Instant;

use super::manual::ManualCounter;

/// Ticks per second of the system source.
///
/// The system source reports nanoseconds elapsed since a process-local epoch,
/// so its frequency is fixed at 1 GHz.
const SYSTEM_FREQUENCY: u64 = 1_000_000_000;

/// Monotonic tick source shared by every timer in the process.
///
/// A `Counter` hands out raw tick counts plus a ticks-per-second frequency.
/// The frequency never changes for the lifetime of the source, so callers may
/// read it once and cache it. Cloning is cheap and clones observe the same
/// timeline: system clones share the epoch, manual clones share the cell.
#[derive(Debug, Clone)]
pub struct Counter {
    source: Source,
}

#[derive(Debug, Clone)]
enum Source {
    System { epoch: Instant },
    Manual(Arc<ManualCounter>),
}

impl Counter {
    /// Creates a counter backed by the OS monotonic clock.
    ///
    /// Ticks are nanoseconds since this call.
    pub fn system() -> Self {
        Self {
            source: Source::System {
                epoch: Instant::now(),
            },
        }
    }

    /// Creates a manually driven counter for deterministic tests.
    ///
    /// Returns the counter plus the handle used to drive it.
    pub fn manual(frequency: u64) -> (Self, Arc<ManualCounter>) {
        let cell = Arc::new(ManualCounter::new(frequency));
        let counter = Self {
            source: Source::Manual(Arc::clone(&cell)),
        };
        (counter, cell)
    }

    /// Current raw tick count.
    pub fn raw(&self) -> u64 {
        match &self.source {
            Source::System { epoch } => epoch.elapsed().as_nanos() as u64,
            Source::Manual(cell) => cell.value(),
        }
    }

    /// Ticks per second.
    pub fn frequency(&self) -> u64 {
        match &self.source {
            Source::System { .. } => SYSTEM_FREQUENCY,
            Source::Manual(cell) => cell.frequency(),
        }
    }
}
