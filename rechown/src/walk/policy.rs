//! Traversal policy types.

use std::fmt;

/// Which symbolic links the walker dereferences.
///
/// # Examples
///
/// ```
/// use rechown::LinkMode;
///
/// assert!(!LinkMode::NoFollow.follows_at(0));
/// assert!(LinkMode::FollowCommandLine.follows_at(0));
/// assert!(!LinkMode::FollowCommandLine.follows_at(1));
/// assert!(LinkMode::FollowAll.follows_at(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// Never dereference symlinks (`-P`, the default).
    #[default]
    NoFollow,
    /// Dereference the command-line argument only (`-H`).
    FollowCommandLine,
    /// Dereference every symlink encountered (`-L`).
    FollowAll,
}

impl LinkMode {
    /// Returns `true` if a symlink found at `depth` is dereferenced.
    ///
    /// Depth 0 is the path given on the command line.
    #[must_use]
    pub const fn follows_at(self, depth: usize) -> bool {
        match self {
            Self::NoFollow => false,
            Self::FollowCommandLine => depth == 0,
            Self::FollowAll => true,
        }
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFollow => write!(f, "-P"),
            Self::FollowCommandLine => write!(f, "-H"),
            Self::FollowAll => write!(f, "-L"),
        }
    }
}

/// When a directory is handed to the action relative to its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitOrder {
    /// Contents first, then the directory itself.
    #[default]
    PostOrder,
    /// The directory first; its contents are skipped if that fails.
    PreOrder,
}

/// How a single traversal call walks the hierarchy.
///
/// The policy is `Copy` and is never modified once a walk has started.
///
/// # Examples
///
/// ```
/// use rechown::{LinkMode, TraversalPolicy};
///
/// let policy = TraversalPolicy::recursive().with_link_mode(LinkMode::FollowAll);
/// assert!(policy.recurse);
/// assert!(policy.follows_at(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalPolicy {
    /// Descend into directories.
    pub recurse: bool,
    /// Which symlinks are dereferenced.
    pub link_mode: LinkMode,
    /// Directory visit order.
    pub order: VisitOrder,
}

impl TraversalPolicy {
    /// A non-recursive policy that touches only the given path.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            recurse: false,
            link_mode: LinkMode::NoFollow,
            order: VisitOrder::PostOrder,
        }
    }

    /// A recursive, post-order policy that follows no symlinks.
    #[must_use]
    pub const fn recursive() -> Self {
        Self {
            recurse: true,
            link_mode: LinkMode::NoFollow,
            order: VisitOrder::PostOrder,
        }
    }

    /// Sets the link mode.
    #[must_use]
    pub const fn with_link_mode(mut self, link_mode: LinkMode) -> Self {
        self.link_mode = link_mode;
        self
    }

    /// Sets the directory visit order.
    #[must_use]
    pub const fn with_order(mut self, order: VisitOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns `true` if a symlink at `depth` is dereferenced.
    #[must_use]
    pub const fn follows_at(&self, depth: usize) -> bool {
        self.link_mode.follows_at(depth)
    }
}

/// Which inode an ownership change applies to when the entry is a symlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Change the link itself (`lchown`).
    Link,
    /// Change whatever the link points to (`chown`).
    Referent,
}

impl LinkTarget {
    /// Decides link targeting from `-h` and the traversal policy.
    ///
    /// `-h` always targets links. Recursing without `-H` or `-L` also
    /// targets links, so that `-R` alone never changes files outside the
    /// tree through a symlink. Everything else changes referents.
    ///
    /// # Examples
    ///
    /// ```
    /// use rechown::{LinkMode, LinkTarget, TraversalPolicy};
    ///
    /// let plain = TraversalPolicy::single();
    /// assert_eq!(LinkTarget::resolve(false, &plain), LinkTarget::Referent);
    /// assert_eq!(LinkTarget::resolve(true, &plain), LinkTarget::Link);
    ///
    /// let recursive = TraversalPolicy::recursive();
    /// assert_eq!(LinkTarget::resolve(false, &recursive), LinkTarget::Link);
    ///
    /// let logical = recursive.with_link_mode(LinkMode::FollowAll);
    /// assert_eq!(LinkTarget::resolve(false, &logical), LinkTarget::Referent);
    /// ```
    #[must_use]
    pub fn resolve(no_dereference: bool, policy: &TraversalPolicy) -> Self {
        if no_dereference || (policy.recurse && policy.link_mode == LinkMode::NoFollow) {
            Self::Link
        } else {
            Self::Referent
        }
    }

    /// Returns `true` for [`LinkTarget::Referent`].
    #[must_use]
    pub const fn follows(self) -> bool {
        matches!(self, Self::Referent)
    }
}
