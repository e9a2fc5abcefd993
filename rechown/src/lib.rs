#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rechown
//!
//! A library for changing the owning user and group of filesystem
//! hierarchies, with POSIX control over symbolic link traversal.
//!
//! ## Core Types
//!
//! - [`OwnershipTarget`]: the uid/gid to apply, each side optional
//! - [`TraversalPolicy`], [`LinkMode`], [`LinkTarget`]: how a walk treats
//!   directories and symlinks
//! - [`traverse`] and [`EntryAction`]: the depth-first walker
//! - [`ChangeOptions`] and [`change_ownership`]: the ownership-change
//!   operation built on the walker
//! - [`batch`]: script reading and line tokenizing
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rechown::owner::TableResolver;
//! use rechown::{LinkMode, LinkTarget, OwnershipTarget, TraversalPolicy};
//!
//! let resolver = TableResolver::new().with_user("alice", 1001);
//! let target = OwnershipTarget::parse("alice:100", &resolver).unwrap();
//! assert_eq!(target.uid(), Some(1001));
//!
//! let policy = TraversalPolicy::recursive().with_link_mode(LinkMode::FollowAll);
//! assert_eq!(LinkTarget::resolve(false, &policy), LinkTarget::Referent);
//! ```

pub mod batch;
pub mod change;
pub mod error;
pub mod logging;
pub mod owner;
pub mod walk;

// Re-export key types at crate root for convenience
pub use change::{change_ownership, ChangeOptions, OwnershipBackend, Reporting, SystemBackend};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use owner::{IdResolver, OwnershipTarget, SystemResolver};
pub use walk::{
    traverse, EntryAction, LinkMode, LinkTarget, TraversalPolicy, VisitOrder, VisitedEntry,
};
