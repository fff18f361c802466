pub mod session;
pub mod size;
pub mod terminal;
pub mod winch;

pub use session::PtySession;
pub use size::terminal_size;
pub use terminal::RawModeGuard;
pub use winch::WinchSubscription;
