use nix::sys::termios::{cfmakeraw, tcgetattr, tcsetattr, SetArg, Termios};
use std::io;
use std::os::fd::AsFd;

/// Puts stdin into raw mode for the lifetime of the guard.
///
/// Does nothing when stdin is not a terminal.
pub struct RawModeGuard {
    saved: Option<Termios>,
}

impl RawModeGuard {
    pub fn enable() -> Self {
        let stdin = io::stdin();
        let saved = tcgetattr(stdin.as_fd()).ok();

        if let Some(orig) = &saved {
            let mut raw = orig.clone();
            cfmakeraw(&mut raw);
            if let Err(e) = tcsetattr(stdin.as_fd(), SetArg::TCSANOW, &raw) {
                tracing::warn!("Failed to put terminal in raw mode: {}", e);
            }
        } else {
            tracing::debug!("stdin is not a terminal; leaving line discipline alone");
        }

        Self { saved }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Some(termios) = &self.saved {
            let stdin = io::stdin();
            if let Err(e) = tcsetattr(stdin.as_fd(), SetArg::TCSADRAIN, termios) {
                tracing::warn!("Failed to restore terminal mode: {}", e);
            }
        }
    }
}
