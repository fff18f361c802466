pub mod forward;
pub mod shell;
