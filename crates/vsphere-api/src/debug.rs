//! File-based request/response trace for API round trips.
//!
//! Each round trip is written to its own file inside the run directory,
//! numbered in call order: `0001-post.log`, `0002-get.log`, ...

use crate::error::VmwareResult;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

/// Writes one trace file per HTTP round trip.
#[derive(Debug)]
pub struct DebugTrace {
    dir: PathBuf,
    seq: AtomicU32,
}

impl DebugTrace {
    /// Trace into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU32::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of round trips recorded so far.
    pub fn count(&self) -> u32 {
        self.seq.load(Ordering::SeqCst)
    }

    /// Record a single round trip and return the file it was written to.
    pub fn record(&self, method: &str, url: &str, status: u16, body: &str) -> VmwareResult<PathBuf> {
        let n = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let path = self
            .dir
            .join(format!("{n:04}-{}.log", method.to_ascii_lowercase()));

        let mut out = format!("{method} {url}\nstatus: {status}\n\n");
        out.push_str(body);
        std::fs::write(&path, out)?;

        Ok(path)
    }
}
