//! Owner specification parsing and id resolution.
//!
//! An owner argument names the user and/or group to apply:
//!
//! | Argument      | uid            | gid            |
//! |---------------|----------------|----------------|
//! | `USER`        | USER           | unchanged      |
//! | `USER:`       | USER           | unchanged      |
//! | `USER:GROUP`  | USER           | GROUP          |
//! | `:GROUP`      | unchanged      | GROUP          |
//! | `:`           | unchanged      | unchanged      |
//!
//! Each side may be a decimal id or a name looked up through an
//! [`IdResolver`]. Parsing happens once per invocation, before any
//! filesystem entry is touched, so an unknown name never leaves a
//! half-applied change behind.

mod resolver;
mod spec;

pub use resolver::{IdResolver, SystemResolver, TableResolver};
pub use spec::OwnershipTarget;
