//! The ownership-change walk action.

use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::logging::Logger;
use crate::owner::OwnershipTarget;
use crate::walk::{EntryAction, LinkTarget, TraversalPolicy, VisitedEntry};

use super::backend::OwnershipBackend;
use super::options::{ChangeOptions, Reporting};

/// Applies an [`OwnershipTarget`] to every entry of a walk.
///
/// Successful changes are optionally reported to `out`; failures are
/// logged through the [`Logger`] unless the options ask for quiet.
pub struct OwnershipChanger<'a, B: ?Sized, W> {
    target: OwnershipTarget,
    policy: TraversalPolicy,
    link_target: LinkTarget,
    reporting: Reporting,
    quiet: bool,
    backend: &'a B,
    out: W,
    logger: Logger,
}

impl<'a, B, W> OwnershipChanger<'a, B, W>
where
    B: OwnershipBackend + ?Sized,
    W: Write,
{
    /// Creates the action for one invocation.
    pub fn new(
        target: OwnershipTarget,
        options: &ChangeOptions,
        backend: &'a B,
        out: W,
        logger: Logger,
    ) -> Self {
        Self {
            target,
            policy: options.policy,
            link_target: options.link_target(),
            reporting: options.reporting,
            quiet: options.quiet,
            backend,
            out,
            logger,
        }
    }

    /// Returns the report writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// The ids the entry's target inode has now.
    ///
    /// When a change goes through a symlink the walker did not follow, the
    /// entry carries the link's own ids, so the referent is read here.
    fn current_ids(&self, entry: &VisitedEntry<'_>) -> (u32, u32) {
        let through_link = entry.is_symlink
            && self.link_target.follows()
            && !self.policy.follows_at(entry.depth);
        if through_link {
            if let Ok(meta) = fs::metadata(entry.path) {
                return (meta.uid(), meta.gid());
            }
        }
        (entry.uid, entry.gid)
    }

    fn report_failure(&self, message: &str) {
        if !self.quiet {
            self.logger.error(message);
        }
    }
}

impl<B, W> EntryAction for OwnershipChanger<'_, B, W>
where
    B: OwnershipBackend + ?Sized,
    W: Write,
{
    fn apply(&mut self, entry: &VisitedEntry<'_>) -> bool {
        let before = self.current_ids(entry);
        let (uid, gid) = self.target.effective(before.0, before.1);

        if let Err(error) = self.backend.change(entry.path, uid, gid, self.link_target) {
            self.report_failure(&format!(
                "cannot change ownership of '{}': {error}",
                entry.path.display()
            ));
            return false;
        }
        self.logger.debug(&format!(
            "'{}': {}:{} -> {uid}:{gid} via {:?}",
            entry.path.display(),
            before.0,
            before.1,
            self.link_target
        ));

        if self.reporting.reports(before, (uid, gid)) {
            if let Err(error) = writeln!(
                self.out,
                "changed ownership of '{}' to {uid}:{gid}",
                entry.path.display()
            ) {
                self.logger.warn(&format!("cannot write report: {error}"));
            }
        }
        true
    }

    fn walk_failed(&mut self, path: &Path, error: &io::Error) {
        self.report_failure(&format!("cannot access '{}': {error}", path.display()));
    }
}
