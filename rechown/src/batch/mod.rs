//! Batch scripts: many invocations read from one file.
//!
//! A script holds one invocation per line, written exactly as the
//! arguments would be given on the command line without the program name:
//!
//! ```text
//! # web root
//! -R www-data:www-data /srv/www
//! 1000:1000 "/home/alice/My Documents"
//! ```
//!
//! [`BatchReader`] turns the script into [`BatchLine`]s using the quoting
//! rules of [`TokenBuffer`]. Running the lines is up to the caller, which
//! is expected to stop at the first line that fails.

mod reader;
mod tokenizer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use reader::{open_script, BatchLine, BatchReader, MAX_LINE_LEN};
pub use tokenizer::{tokenize, ArgumentVector, TokenBuffer, MAX_ARGS};
