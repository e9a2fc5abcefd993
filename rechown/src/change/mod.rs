//! Applying ownership changes across walked hierarchies.
//!
//! [`change_ownership`] is the whole direct-mode operation: it walks every
//! path argument with the invocation's [`TraversalPolicy`] and applies one
//! [`OwnershipTarget`] through an [`OwnershipBackend`]. Each path is
//! independent; a failure on one never prevents the others.
//!
//! [`TraversalPolicy`]: crate::walk::TraversalPolicy

mod action;
mod backend;
mod options;

pub use action::OwnershipChanger;
pub use backend::{OwnershipBackend, RecordedChange, RecordingBackend, SystemBackend};
pub use options::{ChangeOptions, Reporting};

use std::io::Write;
use std::path::PathBuf;

use crate::logging::Logger;
use crate::owner::OwnershipTarget;
use crate::walk::traverse;

/// Changes the ownership of every path, returning `true` if every entry
/// of every walk succeeded.
///
/// # Examples
///
/// ```
/// use rechown::change::{change_ownership, RecordingBackend};
/// use rechown::{ChangeOptions, Logger, OwnershipTarget};
/// use std::path::PathBuf;
///
/// let tmp = tempfile::tempdir().unwrap();
/// let file = tmp.path().join("data");
/// std::fs::write(&file, b"x").unwrap();
///
/// let backend = RecordingBackend::new();
/// let ok = change_ownership(
///     &[file.clone()],
///     OwnershipTarget::new(Some(1000), Some(1000)),
///     &ChangeOptions::default(),
///     &backend,
///     std::io::sink(),
///     Logger::default(),
/// );
/// assert!(ok);
/// assert_eq!(backend.paths(), vec![file]);
/// ```
pub fn change_ownership<B, W>(
    paths: &[PathBuf],
    target: OwnershipTarget,
    options: &ChangeOptions,
    backend: &B,
    out: W,
    logger: Logger,
) -> bool
where
    B: OwnershipBackend + ?Sized,
    W: Write,
{
    let mut changer = OwnershipChanger::new(target, options, backend, out, logger);
    let mut success = true;
    for path in paths {
        if !traverse(path, options.policy, &mut changer) {
            success = false;
        }
    }
    success
}
