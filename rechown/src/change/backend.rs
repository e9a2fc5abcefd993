//! The single-path ownership primitive.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::os::unix::fs::{chown, lchown};
use std::path::{Path, PathBuf};

use crate::walk::LinkTarget;

/// Changes the ownership of exactly one path.
///
/// Both ids are always given; the caller has already substituted the
/// entry's current ids for any side that should stay unchanged.
pub trait OwnershipBackend {
    /// Sets `path` to `uid:gid`, on the link itself or on its referent.
    ///
    /// # Errors
    ///
    /// Returns the operating system error for the path.
    fn change(&self, path: &Path, uid: u32, gid: u32, target: LinkTarget) -> io::Result<()>;
}

/// Calls `chown(2)` or `lchown(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBackend;

impl OwnershipBackend for SystemBackend {
    fn change(&self, path: &Path, uid: u32, gid: u32, target: LinkTarget) -> io::Result<()> {
        match target {
            LinkTarget::Link => lchown(path, Some(uid), Some(gid)),
            LinkTarget::Referent => chown(path, Some(uid), Some(gid)),
        }
    }
}

/// A change requested from a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChange {
    /// The path passed to the backend.
    pub path: PathBuf,
    /// Requested uid.
    pub uid: u32,
    /// Requested gid.
    pub gid: u32,
    /// Link or referent.
    pub target: LinkTarget,
}

/// Records requested changes instead of performing them.
///
/// Paths registered with [`RecordingBackend::failing`] answer with
/// `PermissionDenied`, which makes partial-failure behavior observable
/// without special privileges.
///
/// # Examples
///
/// ```
/// use rechown::change::{OwnershipBackend, RecordingBackend};
/// use rechown::LinkTarget;
/// use std::path::Path;
///
/// let backend = RecordingBackend::new().failing("/locked");
/// assert!(backend.change(Path::new("/open"), 1, 1, LinkTarget::Link).is_ok());
/// assert!(backend.change(Path::new("/locked"), 1, 1, LinkTarget::Link).is_err());
/// assert_eq!(backend.changes().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RecordingBackend {
    changes: RefCell<Vec<RecordedChange>>,
    failing: HashSet<PathBuf>,
}

impl RecordingBackend {
    /// Creates a backend that accepts every change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes changes to `path` fail.
    #[must_use]
    pub fn failing(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Returns every change requested so far, failed ones included.
    #[must_use]
    pub fn changes(&self) -> Vec<RecordedChange> {
        self.changes.borrow().clone()
    }

    /// Returns the requested paths in call order.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.changes.borrow().iter().map(|c| c.path.clone()).collect()
    }
}

impl OwnershipBackend for RecordingBackend {
    fn change(&self, path: &Path, uid: u32, gid: u32, target: LinkTarget) -> io::Result<()> {
        self.changes.borrow_mut().push(RecordedChange {
            path: path.to_path_buf(),
            uid,
            gid,
            target,
        });
        if self.failing.contains(path) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        Ok(())
    }
}
