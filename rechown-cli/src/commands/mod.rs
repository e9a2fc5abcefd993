//! CLI command implementations.
//!
//! - `change`: change ownership of the paths given on the command line
//! - `batch`: run one change per line of a `-F` script

pub mod batch;
pub mod change;

pub use batch::BatchCommand;
pub use change::ChangeCommand;
