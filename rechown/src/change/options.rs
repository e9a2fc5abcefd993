//! Options for one ownership-change invocation.

use crate::walk::{LinkTarget, TraversalPolicy};

/// Which successful changes are printed on standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reporting {
    /// Print nothing.
    #[default]
    Off,
    /// Print entries whose ownership actually changed (`-c`).
    Changes,
    /// Print every processed entry (`-v`).
    All,
}

impl Reporting {
    /// Returns `true` if a change from `before` to `after` is printed.
    #[must_use]
    pub fn reports(self, before: (u32, u32), after: (u32, u32)) -> bool {
        match self {
            Self::Off => false,
            Self::Changes => before != after,
            Self::All => true,
        }
    }
}

/// Everything the change action needs besides the ownership target.
///
/// Built once from the command line and never modified afterwards.
///
/// # Examples
///
/// ```
/// use rechown::{ChangeOptions, LinkTarget, Reporting, TraversalPolicy};
///
/// let options = ChangeOptions::new(TraversalPolicy::recursive())
///     .with_reporting(Reporting::Changes)
///     .with_quiet(true);
///
/// // -R without -H/-L changes links, not their referents.
/// assert_eq!(options.link_target(), LinkTarget::Link);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeOptions {
    /// How each path argument is walked.
    pub policy: TraversalPolicy,
    /// `-h`: change symlinks themselves.
    pub no_dereference: bool,
    /// `-v`/`-c` reporting.
    pub reporting: Reporting,
    /// `-f`: suppress failure messages.
    pub quiet: bool,
}

impl ChangeOptions {
    /// Creates options with the given policy and everything else default.
    #[must_use]
    pub fn new(policy: TraversalPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Sets `-h`.
    #[must_use]
    pub fn with_no_dereference(mut self, no_dereference: bool) -> Self {
        self.no_dereference = no_dereference;
        self
    }

    /// Sets the reporting mode.
    #[must_use]
    pub fn with_reporting(mut self, reporting: Reporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Sets `-f`.
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The inode every change targets for this invocation.
    #[must_use]
    pub fn link_target(&self) -> LinkTarget {
        LinkTarget::resolve(self.no_dereference, &self.policy)
    }
}
