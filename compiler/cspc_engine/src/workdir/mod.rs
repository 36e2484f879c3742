//! Scoped working-directory swap.
//!
//! The engine resolves included copy logic and dictionaries relative to
//! the process working directory, so the adapter has to point it at the
//! application's directory for the load/compile sequence. The previous
//! directory must come back on every exit path, which makes this a Drop
//! guard rather than a pair of calls.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Changes the process working directory for the lifetime of the value.
///
/// Captures the current directory, switches to `dir`, and restores the
/// captured directory on drop — including when the compile in between
/// fails. There is only one working directory per process, so holders of
/// this guard must be the only thread touching it.
#[derive(Debug)]
pub struct ScopedWorkDir {
    original: PathBuf,
}

impl ScopedWorkDir {
    /// Switch the working directory to `dir` until the guard is dropped.
    pub fn enter(dir: &Path) -> io::Result<Self> {
        let original = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(ScopedWorkDir { original })
    }

    /// The directory that will be restored on drop.
    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for ScopedWorkDir {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.original) {
            tracing::warn!(
                original = %self.original.display(),
                %err,
                "failed to restore working directory"
            );
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
