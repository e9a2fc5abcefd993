//! The depth-first walker.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use super::entry::{EntryAction, VisitedEntry};
use super::policy::{TraversalPolicy, VisitOrder};

/// Walks `root` according to `policy`, handing every entry to `action`.
///
/// Returns `true` only if every action call succeeded and every entry
/// could be read. Failures never stop the walk: siblings and unrelated
/// subtrees are still visited. A directory whose listing fails is still
/// passed to the action.
///
/// A non-recursive walk calls the action exactly once, for `root`.
///
/// Symlink cycles reachable under [`LinkMode::FollowAll`] are not
/// detected; such a walk only ends when path resolution starts failing.
///
/// [`LinkMode::FollowAll`]: super::LinkMode::FollowAll
pub fn traverse<A>(root: &Path, policy: TraversalPolicy, action: &mut A) -> bool
where
    A: EntryAction + ?Sized,
{
    log::debug!("walking {} with {policy:?}", root.display());
    visit(root, 0, &policy, action)
}

fn visit<A>(path: &Path, depth: usize, policy: &TraversalPolicy, action: &mut A) -> bool
where
    A: EntryAction + ?Sized,
{
    let (metadata, is_symlink) = match read_metadata(path, policy.follows_at(depth)) {
        Ok(found) => found,
        Err(error) => {
            action.walk_failed(path, &error);
            return false;
        }
    };

    let entry = VisitedEntry {
        path,
        uid: metadata.uid(),
        gid: metadata.gid(),
        is_symlink,
        is_dir: metadata.is_dir(),
        depth,
    };

    if !entry.is_dir || !policy.recurse {
        return action.apply(&entry);
    }

    if policy.order == VisitOrder::PreOrder && !action.apply(&entry) {
        return false;
    }

    let mut success = true;
    match children(path) {
        Ok((children, unreadable)) => {
            log::debug!("descending into {} ({} entries)", path.display(), children.len());
            for error in &unreadable {
                action.walk_failed(path, error);
                success = false;
            }
            for child in &children {
                if !visit(child, depth + 1, policy, action) {
                    success = false;
                }
            }
        }
        Err(error) => {
            action.walk_failed(path, &error);
            success = false;
        }
    }

    if policy.order == VisitOrder::PostOrder && !action.apply(&entry) {
        success = false;
    }

    success
}

/// Reads the entry's metadata, dereferencing it only when it is a symlink
/// and `follow` is set. The flag in the result describes the path itself.
fn read_metadata(path: &Path, follow: bool) -> io::Result<(Metadata, bool)> {
    let own = fs::symlink_metadata(path)?;
    let is_symlink = own.file_type().is_symlink();
    if is_symlink && follow {
        Ok((fs::metadata(path)?, true))
    } else {
        Ok((own, is_symlink))
    }
}

/// Lists a directory, sorted by file name, along with the errors of any
/// entries that could not be read.
fn children(dir: &Path) -> io::Result<(Vec<PathBuf>, Vec<io::Error>)> {
    let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.file_name()));
    Ok(sorted_children(dir, entries))
}

fn sorted_children<I>(dir: &Path, entries: I) -> (Vec<PathBuf>, Vec<io::Error>)
where
    I: Iterator<Item = io::Result<OsString>>,
{
    let mut names = Vec::new();
    let mut errors = Vec::new();
    for entry in entries {
        match entry {
            Ok(name) => names.push(name),
            Err(error) => errors.push(error),
        }
    }
    names.sort();
    let paths = names.into_iter().map(|name| dir.join(name)).collect();
    (paths, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::LinkMode;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    /// Builds:
    ///
    /// ```text
    /// root/
    ///   a.txt
    ///   sub/
    ///     b.txt
    /// ```
    fn small_tree() -> TempDir {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/b.txt"), b"b").unwrap();
        tmp
    }

    fn collect(root: &Path, policy: TraversalPolicy) -> (bool, Vec<PathBuf>) {
        let mut seen = Vec::new();
        let ok = traverse(root, policy, &mut |e: &VisitedEntry<'_>| {
            seen.push(e.path.strip_prefix(root).unwrap().to_path_buf());
            true
        });
        (ok, seen)
    }

    #[test]
    fn test_post_order_visits_children_first() {
        let tmp = small_tree();
        let (ok, seen) = collect(tmp.path(), TraversalPolicy::recursive());
        assert!(ok);
        assert_eq!(
            seen,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("sub/b.txt"),
                PathBuf::from("sub"),
                PathBuf::from(""),
            ]
        );
    }

    #[test]
    fn test_pre_order_visits_directory_first() {
        let tmp = small_tree();
        let policy = TraversalPolicy::recursive().with_order(VisitOrder::PreOrder);
        let (ok, seen) = collect(tmp.path(), policy);
        assert!(ok);
        assert_eq!(
            seen,
            vec![
                PathBuf::from(""),
                PathBuf::from("a.txt"),
                PathBuf::from("sub"),
                PathBuf::from("sub/b.txt"),
            ]
        );
    }

    #[test]
    fn test_pre_order_failure_skips_contents() {
        let tmp = small_tree();
        let policy = TraversalPolicy::recursive().with_order(VisitOrder::PreOrder);
        let sub = tmp.path().join("sub");
        let mut seen = Vec::new();
        let ok = traverse(tmp.path(), policy, &mut |e: &VisitedEntry<'_>| {
            seen.push(e.path.to_path_buf());
            e.path != sub
        });
        assert!(!ok);
        assert!(!seen.contains(&sub.join("b.txt")));
        assert!(seen.contains(&tmp.path().join("a.txt")));
    }

    #[test]
    fn test_non_recursive_directory_visited_once() {
        let tmp = small_tree();
        let (ok, seen) = collect(tmp.path(), TraversalPolicy::single());
        assert!(ok);
        assert_eq!(seen, vec![PathBuf::from("")]);
    }

    #[test]
    fn test_missing_root_reports_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");

        let mut recorder = Recorder::default();
        assert!(!traverse(&missing, TraversalPolicy::recursive(), &mut recorder));
        assert_eq!(recorder.failed, vec![missing]);
        assert!(recorder.applied.is_empty());
    }

    #[derive(Default)]
    struct Recorder {
        applied: Vec<PathBuf>,
        failed: Vec<PathBuf>,
    }

    impl EntryAction for Recorder {
        fn apply(&mut self, entry: &VisitedEntry<'_>) -> bool {
            self.applied.push(entry.path.to_path_buf());
            true
        }

        fn walk_failed(&mut self, path: &Path, _error: &io::Error) {
            self.failed.push(path.to_path_buf());
        }
    }

    #[test]
    fn test_unlistable_directory_is_still_applied() {
        use std::os::unix::fs::PermissionsExt;

        if nix::unistd::geteuid().is_root() {
            // Permission bits do not stop root from listing.
            return;
        }

        let tmp = small_tree();
        let sub = tmp.path().join("sub");
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o000)).unwrap();

        let mut recorder = Recorder::default();
        let ok = traverse(tmp.path(), TraversalPolicy::recursive(), &mut recorder);

        fs::set_permissions(&sub, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(!ok);
        assert_eq!(recorder.failed, vec![sub.clone()]);
        assert_eq!(recorder.applied.iter().filter(|p| **p == sub).count(), 1);
        assert!(!recorder.applied.contains(&sub.join("b.txt")));
        assert!(recorder.applied.contains(&tmp.path().join("a.txt")));
        assert_eq!(recorder.applied.last(), Some(&tmp.path().to_path_buf()));
    }

    #[test]
    fn test_unreadable_entry_keeps_siblings() {
        let dir = Path::new("/d");
        let entries = vec![
            Ok(OsString::from("b")),
            Err(io::Error::from(io::ErrorKind::PermissionDenied)),
            Ok(OsString::from("a")),
        ];

        let (paths, errors) = sorted_children(dir, entries.into_iter());

        assert_eq!(paths, vec![dir.join("a"), dir.join("b")]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_symlink_metadata_flags() {
        let tmp = small_tree();
        let link = tmp.path().join("link");
        symlink(tmp.path().join("sub"), &link).unwrap();

        let mut flags = Vec::new();
        for mode in [LinkMode::NoFollow, LinkMode::FollowCommandLine] {
            let policy = TraversalPolicy::single().with_link_mode(mode);
            traverse(&link, policy, &mut |e: &VisitedEntry<'_>| {
                flags.push((e.is_symlink, e.is_dir));
                true
            });
        }
        // Unfollowed: a link that is not a directory. Followed: still a
        // link, but seen through to the directory.
        assert_eq!(flags, vec![(true, false), (true, true)]);
    }

    #[test]
    fn test_failures_do_not_stop_siblings() {
        let tmp = small_tree();
        fs::write(tmp.path().join("c.txt"), b"c").unwrap();
        let bad = tmp.path().join("a.txt");
        let mut seen = 0;
        let ok = traverse(tmp.path(), TraversalPolicy::recursive(), &mut |e: &VisitedEntry<'_>| {
            seen += 1;
            e.path != bad
        });
        assert!(!ok);
        assert_eq!(seen, 5);
    }
}
