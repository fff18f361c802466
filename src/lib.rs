pub mod cli;
pub mod config;
pub mod core;
pub mod pipenv;
#[cfg(unix)]
pub mod pty;
