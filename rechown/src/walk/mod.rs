//! Depth-first hierarchy traversal with POSIX symlink policies.
//!
//! The walker reads the filesystem and nothing else; all changes happen in
//! the [`EntryAction`] it is given.
//!
//! # Symlink Policies
//!
//! - [`LinkMode::NoFollow`] (`-P`): symlinks are visited as leaves.
//! - [`LinkMode::FollowCommandLine`] (`-H`): the root path is dereferenced;
//!   links found below it are leaves.
//! - [`LinkMode::FollowAll`] (`-L`): every symlink to a directory is
//!   descended into.
//!
//! Which inode the action then modifies is a separate decision, see
//! [`LinkTarget::resolve`].
//!
//! # Examples
//!
//! ```no_run
//! use rechown::walk::{traverse, LinkMode, TraversalPolicy, VisitedEntry};
//! use std::path::Path;
//!
//! let policy = TraversalPolicy::recursive().with_link_mode(LinkMode::FollowAll);
//! let mut count = 0;
//! let ok = traverse(Path::new("/srv/data"), policy, &mut |_: &VisitedEntry<'_>| {
//!     count += 1;
//!     true
//! });
//! println!("visited {count} entries, ok={ok}");
//! ```

mod entry;
mod policy;
mod traverse;

pub use entry::{EntryAction, VisitedEntry};
pub use policy::{LinkMode, LinkTarget, TraversalPolicy, VisitOrder};
pub use traverse::traverse;
