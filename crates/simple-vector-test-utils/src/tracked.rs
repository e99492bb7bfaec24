//! Clone- and drop-counting element type.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counters {
    created: AtomicUsize,
    clones: AtomicUsize,
    drops: AtomicUsize,
}

/// Shared counters for every [`Tracked`] value minted from one ledger.
///
/// Cheap to clone; all clones observe the same counts.
#[derive(Clone, Debug, Default)]
pub struct DropLedger {
    counters: Arc<Counters>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a tracked value. Counts as one creation.
    pub fn track(&self, value: i32) -> Tracked {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Tracked {
            value,
            ledger: Some(self.clone()),
        }
    }

    /// Values minted through [`track`](DropLedger::track).
    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::Relaxed)
    }

    /// Clones of tracked values.
    pub fn clones(&self) -> usize {
        self.counters.clones.load(Ordering::Relaxed)
    }

    /// Tracked values dropped so far, clones included.
    pub fn drops(&self) -> usize {
        self.counters.drops.load(Ordering::Relaxed)
    }

    /// Tracked values (minted or cloned) not yet dropped.
    pub fn alive(&self) -> usize {
        self.created() + self.clones() - self.drops()
    }
}

/// An `i32` that reports clones and drops to its [`DropLedger`].
///
/// `Tracked::default()` is untracked: it has no ledger and is invisible
/// to the counts. That keeps default-filled spare slots out of the
/// numbers.
#[derive(Debug, Default)]
pub struct Tracked {
    pub value: i32,
    ledger: Option<DropLedger>,
}

impl Tracked {
    /// Whether this value reports to a ledger.
    pub fn is_tracked(&self) -> bool {
        self.ledger.is_some()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        if let Some(ledger) = &self.ledger {
            ledger.counters.clones.fetch_add(1, Ordering::Relaxed);
        }
        Self {
            value: self.value,
            ledger: self.ledger.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(ledger) = &self.ledger {
            ledger.counters.drops.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}
