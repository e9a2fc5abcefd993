//! The `OWNER[:[GROUP]]` grammar.

use std::fmt;

use crate::error::{Error, Result};

use super::resolver::IdResolver;

/// The ownership to apply, with each side optionally left unchanged.
///
/// # Examples
///
/// ```
/// use rechown::OwnershipTarget;
///
/// let target = OwnershipTarget::new(Some(1000), None);
/// // The group side falls back to the entry's current gid.
/// assert_eq!(target.effective(0, 20), (1000, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OwnershipTarget {
    uid: Option<u32>,
    gid: Option<u32>,
}

impl OwnershipTarget {
    /// Creates a target from explicit sides.
    #[must_use]
    pub const fn new(uid: Option<u32>, gid: Option<u32>) -> Self {
        Self { uid, gid }
    }

    /// Returns the user side, `None` when unchanged.
    #[must_use]
    pub const fn uid(&self) -> Option<u32> {
        self.uid
    }

    /// Returns the group side, `None` when unchanged.
    #[must_use]
    pub const fn gid(&self) -> Option<u32> {
        self.gid
    }

    /// Returns `true` if neither side would change anything.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.uid.is_none() && self.gid.is_none()
    }

    /// Computes the ids to apply to an entry currently owned by
    /// `current_uid:current_gid`.
    #[must_use]
    pub fn effective(&self, current_uid: u32, current_gid: u32) -> (u32, u32) {
        (
            self.uid.unwrap_or(current_uid),
            self.gid.unwrap_or(current_gid),
        )
    }

    /// Parses an owner argument.
    ///
    /// Accepted forms are `USER`, `USER:`, `USER:GROUP`, `:GROUP` and `:`.
    /// Each side is a numeric id or a name. A missing side leaves that id
    /// unchanged. Without a colon, `USER.GROUP` is also accepted as long as
    /// the whole argument is not itself a user name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOwnerSpec` for malformed input, `UnknownUser` or
    /// `UnknownGroup` for names that do not resolve, and `IdLookup` when
    /// the account databases cannot be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use rechown::owner::{OwnershipTarget, TableResolver};
    ///
    /// let resolver = TableResolver::new().with_group("staff", 50);
    ///
    /// let target = OwnershipTarget::parse("1000:staff", &resolver).unwrap();
    /// assert_eq!((target.uid(), target.gid()), (Some(1000), Some(50)));
    ///
    /// let target = OwnershipTarget::parse(":staff", &resolver).unwrap();
    /// assert_eq!((target.uid(), target.gid()), (None, Some(50)));
    ///
    /// assert!(OwnershipTarget::parse("1000:wheel", &resolver).is_err());
    /// ```
    pub fn parse<R: IdResolver + ?Sized>(spec: &str, resolver: &R) -> Result<Self> {
        if spec.is_empty() {
            return Err(invalid(spec, "empty owner"));
        }

        if let Some((user, group)) = spec.split_once(':') {
            return Ok(Self {
                uid: optional(user, |name| resolve_user(spec, name, resolver))?,
                gid: optional(group, |name| resolve_group(spec, name, resolver))?,
            });
        }

        if let Some((user, group)) = spec.split_once('.') {
            // "first.last" style login names take precedence over the
            // legacy separator.
            if let Some(uid) = lookup_user(spec, spec, resolver)? {
                return Ok(Self::new(Some(uid), None));
            }
            if user.is_empty() {
                return Err(invalid(spec, "missing user before '.'"));
            }
            return Ok(Self {
                uid: Some(resolve_user(spec, user, resolver)?),
                gid: optional(group, |name| resolve_group(spec, name, resolver))?,
            });
        }

        Ok(Self::new(Some(resolve_user(spec, spec, resolver)?), None))
    }
}

impl fmt::Display for OwnershipTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.uid, self.gid) {
            (Some(uid), Some(gid)) => write!(f, "{uid}:{gid}"),
            (Some(uid), None) => write!(f, "{uid}"),
            (None, Some(gid)) => write!(f, ":{gid}"),
            (None, None) => write!(f, ":"),
        }
    }
}

fn invalid(spec: &str, reason: &str) -> Error {
    Error::InvalidOwnerSpec {
        spec: spec.to_string(),
        reason: reason.to_string(),
    }
}

fn optional(part: &str, resolve: impl FnOnce(&str) -> Result<u32>) -> Result<Option<u32>> {
    if part.is_empty() {
        Ok(None)
    } else {
        resolve(part).map(Some)
    }
}

/// Parses a decimal id. `u32::MAX` is the "unchanged" sentinel of the
/// ownership syscalls and cannot be requested explicitly.
fn numeric_id(spec: &str, part: &str) -> Result<Option<u32>> {
    match part.parse::<u32>() {
        Ok(u32::MAX) => Err(invalid(spec, "id 4294967295 is reserved")),
        Ok(id) => Ok(Some(id)),
        Err(_) => Ok(None),
    }
}

fn lookup_user<R: IdResolver + ?Sized>(spec: &str, name: &str, resolver: &R) -> Result<Option<u32>> {
    match numeric_id(spec, name)? {
        Some(id) => Ok(Some(id)),
        None => resolver.user_id(name),
    }
}

fn resolve_user<R: IdResolver + ?Sized>(spec: &str, name: &str, resolver: &R) -> Result<u32> {
    lookup_user(spec, name, resolver)?.ok_or_else(|| Error::UnknownUser {
        name: name.to_string(),
    })
}

fn resolve_group<R: IdResolver + ?Sized>(spec: &str, name: &str, resolver: &R) -> Result<u32> {
    let found = match numeric_id(spec, name)? {
        Some(id) => Some(id),
        None => resolver.group_id(name)?,
    };
    found.ok_or_else(|| Error::UnknownGroup {
        name: name.to_string(),
    })
}
