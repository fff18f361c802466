pub mod error;
pub mod path;
pub mod process;
pub mod scoped_env;

pub use error::{PipfError, Result};
pub use path::{expand_home, home_dir};
pub use process::{exit_code, CommandSpec, ProcessExecutor};
pub use scoped_env::ScopedEnv;
