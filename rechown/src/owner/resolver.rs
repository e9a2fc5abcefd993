//! User and group name resolution.
//!
//! The [`IdResolver`] trait is the seam between owner parsing and the
//! system account databases. [`SystemResolver`] queries the passwd and
//! group databases through `nix`; [`TableResolver`] answers from an
//! in-memory table and is meant for embedding and tests.

use std::collections::HashMap;

use nix::unistd::{Group, User};

use crate::error::{Error, Result};

/// Maps user and group names to numeric ids.
///
/// Implementations return `Ok(None)` for names that do not exist and
/// reserve `Err` for lookup failures.
pub trait IdResolver {
    /// Looks up the uid for a user name.
    ///
    /// # Errors
    ///
    /// Returns an error if the user database cannot be queried.
    fn user_id(&self, name: &str) -> Result<Option<u32>>;

    /// Looks up the gid for a group name.
    ///
    /// # Errors
    ///
    /// Returns an error if the group database cannot be queried.
    fn group_id(&self, name: &str) -> Result<Option<u32>>;
}

/// Resolves names against the system passwd and group databases.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl IdResolver for SystemResolver {
    fn user_id(&self, name: &str) -> Result<Option<u32>> {
        let user = User::from_name(name).map_err(|source| Error::IdLookup {
            name: name.to_string(),
            source,
        })?;
        Ok(user.map(|u| u.uid.as_raw()))
    }

    fn group_id(&self, name: &str) -> Result<Option<u32>> {
        let group = Group::from_name(name).map_err(|source| Error::IdLookup {
            name: name.to_string(),
            source,
        })?;
        Ok(group.map(|g| g.gid.as_raw()))
    }
}

/// Resolves names from fixed in-memory tables.
///
/// # Examples
///
/// ```
/// use rechown::owner::{IdResolver, TableResolver};
///
/// let resolver = TableResolver::new()
///     .with_user("alice", 1001)
///     .with_group("staff", 50);
///
/// assert_eq!(resolver.user_id("alice").unwrap(), Some(1001));
/// assert_eq!(resolver.group_id("wheel").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    users: HashMap<String, u32>,
    groups: HashMap<String, u32>,
}

impl TableResolver {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user entry.
    #[must_use]
    pub fn with_user(mut self, name: impl Into<String>, uid: u32) -> Self {
        self.users.insert(name.into(), uid);
        self
    }

    /// Adds a group entry.
    #[must_use]
    pub fn with_group(mut self, name: impl Into<String>, gid: u32) -> Self {
        self.groups.insert(name.into(), gid);
        self
    }
}

impl IdResolver for TableResolver {
    fn user_id(&self, name: &str) -> Result<Option<u32>> {
        Ok(self.users.get(name).copied())
    }

    fn group_id(&self, name: &str) -> Result<Option<u32>> {
        Ok(self.groups.get(name).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_resolver_finds_root() {
        // uid 0 is named "root" on every Unix we build for.
        assert_eq!(SystemResolver.user_id("root").unwrap(), Some(0));
    }

    #[test]
    fn test_system_resolver_unknown_user() {
        let found = SystemResolver
            .user_id("rechown-no-such-user-9f2c")
            .unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_table_resolver_lookups() {
        let resolver = TableResolver::new()
            .with_user("bob", 1002)
            .with_group("devs", 2000);
        assert_eq!(resolver.user_id("bob").unwrap(), Some(1002));
        assert_eq!(resolver.user_id("devs").unwrap(), None);
        assert_eq!(resolver.group_id("devs").unwrap(), Some(2000));
    }
}
