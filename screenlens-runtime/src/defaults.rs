use anyhow::Context;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "screenlens";

/// Worker binary resolved from PATH when no explicit command is given.
pub const DEFAULT_WORKER_COMMAND: &str = "screenlens-worker";

/// Directory holding the flags file and the worker pidfile.
pub fn default_state_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory on this platform")?;
    Ok(base.join(APP_DIR_NAME))
}
