//! Button lock: suspends click dispatch without touching rendering.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// Shared on/off switch for click dispatch.
///
/// Clones share one flag, so a click handler running on a dispatcher thread
/// can unlock the compositor that locked itself. Toggled, not counted:
/// locking twice is the same as locking once.
#[derive(Debug, Clone, Default)]
pub struct ButtonLock {
    locked: Arc<Mutex<bool>>,
}

impl ButtonLock {
    /// Creates an unlocked gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends dispatch.
    pub fn lock(&self) {
        self.set(true);
    }

    /// Resumes dispatch.
    pub fn unlock(&self) {
        self.set(false);
    }

    /// Returns true while dispatch is suspended.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        *self.locked.lock()
    }

    fn set(&self, locked: bool) {
        let previous = std::mem::replace(&mut *self.locked.lock(), locked);
        if previous != locked {
            debug!(locked, "button lock changed");
        }
    }
}
