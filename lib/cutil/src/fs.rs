//! File system helpers.

use anyhow::{Context, Result};
use std::{env, path::PathBuf};

/// Returns the directory containing the running executable.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::working_dir;
///
/// let dir = working_dir().unwrap();
/// println!("Executable directory: {:?}", dir);
/// ```
pub fn working_dir() -> Result<PathBuf> {
    let exe = env::current_exe().with_context(|| "locate current executable failed")?;

    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        _ => Err(anyhow::anyhow!("{:?} has no parent directory", exe)),
    }
}
