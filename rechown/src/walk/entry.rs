//! Entries handed to a walk action, and the action trait itself.

use std::io;
use std::path::Path;

/// One filesystem entry as seen by the walker.
///
/// The ownership fields come from the metadata the walker read: the
/// referent's when the walker followed a symlink, the link's own
/// otherwise. `is_symlink` always describes the path itself.
#[derive(Debug, Clone, Copy)]
pub struct VisitedEntry<'a> {
    /// The path as reached from the traversal root.
    pub path: &'a Path,
    /// Current owning uid.
    pub uid: u32,
    /// Current owning gid.
    pub gid: u32,
    /// Whether `path` is itself a symbolic link.
    pub is_symlink: bool,
    /// Whether the entry is (or, when followed, points to) a directory.
    pub is_dir: bool,
    /// Distance from the traversal root; the root is 0.
    pub depth: usize,
}

/// Work performed on every visited entry.
///
/// Closures of type `FnMut(&VisitedEntry) -> bool` implement this trait, so
/// ad-hoc walks need no named type.
///
/// # Examples
///
/// ```no_run
/// use rechown::{traverse, TraversalPolicy, VisitedEntry};
/// use std::path::Path;
///
/// let mut seen = Vec::new();
/// let ok = traverse(Path::new("/tmp/tree"), TraversalPolicy::recursive(), &mut |e: &VisitedEntry<'_>| {
///     seen.push(e.path.to_path_buf());
///     true
/// });
/// assert!(ok);
/// ```
pub trait EntryAction {
    /// Applies the action to one entry, returning whether it succeeded.
    fn apply(&mut self, entry: &VisitedEntry<'_>) -> bool;

    /// Called when the walker cannot read `path` (stat or directory
    /// listing). The walk records the failure and continues.
    fn walk_failed(&mut self, path: &Path, error: &io::Error) {
        let _ = (path, error);
    }
}

impl<F> EntryAction for F
where
    F: FnMut(&VisitedEntry<'_>) -> bool,
{
    fn apply(&mut self, entry: &VisitedEntry<'_>) -> bool {
        self(entry)
    }
}
