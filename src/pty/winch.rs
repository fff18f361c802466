use crate::core::error::{PipfError, Result};
use signal_hook::consts::SIGWINCH;
use signal_hook::SigId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// SIGWINCH subscription that only raises a flag; the relay loop polls it.
pub struct WinchSubscription {
    id: SigId,
    pending: Arc<AtomicBool>,
}

impl WinchSubscription {
    pub fn register() -> Result<Self> {
        let pending = Arc::new(AtomicBool::new(false));
        let id = signal_hook::flag::register(SIGWINCH, Arc::clone(&pending))
            .map_err(|e| PipfError::Pty(format!("Failed to register SIGWINCH handler: {}", e)))?;

        Ok(Self { id, pending })
    }

    /// Whether the window changed since the last call.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Relaxed)
    }
}

impl Drop for WinchSubscription {
    fn drop(&mut self) {
        signal_hook::low_level::unregister(self.id);
    }
}
