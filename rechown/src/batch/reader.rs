//! Reading script lines.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

use super::tokenizer::{TokenBuffer, MAX_ARGS};

/// Longest accepted script line in bytes, excluding the newline.
pub const MAX_LINE_LEN: usize = 2046;

/// One tokenized script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchLine {
    /// One-based line number in the script.
    pub number: usize,
    /// The line's arguments, program name excluded.
    pub args: Vec<String>,
    /// Arguments dropped because the line exceeded the argument cap.
    pub dropped: usize,
}

/// Yields the argument vectors of a script, one per non-comment line.
///
/// Lines starting with `#` and lines without arguments are skipped. A line
/// longer than the limit is an error, as is a line that is not UTF-8.
///
/// # Examples
///
/// ```
/// use rechown::batch::BatchReader;
///
/// let script = "# fix ownership\n-R 0:0 /srv/www\n\n1000 '/home/a b'";
/// let lines: Vec<_> = BatchReader::new(script.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].number, 2);
/// assert_eq!(lines[1].args, vec!["1000", "/home/a b"]);
/// ```
pub struct BatchReader<R> {
    input: R,
    line: Vec<u8>,
    tokens: TokenBuffer,
    number: usize,
    max_line_len: usize,
    max_args: usize,
}

impl<R: BufRead> BatchReader<R> {
    /// Creates a reader with the default limits.
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: Vec::new(),
            tokens: TokenBuffer::new(),
            number: 0,
            max_line_len: MAX_LINE_LEN,
            max_args: MAX_ARGS,
        }
    }

    /// Overrides the line length and argument limits.
    #[must_use]
    pub fn with_limits(mut self, max_line_len: usize, max_args: usize) -> Self {
        self.max_line_len = max_line_len;
        self.max_args = max_args;
        self
    }

    /// Reads up to the next line that carries arguments.
    ///
    /// # Errors
    ///
    /// Returns `LineTooLong`, `InvalidUtf8`, or an I/O error.
    pub fn next_line(&mut self) -> Result<Option<BatchLine>> {
        loop {
            self.line.clear();
            // One byte past the limit is enough to tell an over-long line
            // from one that ends exactly at it.
            let budget = self.max_line_len as u64 + 1;
            if (&mut self.input).take(budget).read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.number += 1;

            let terminated = self.line.last() == Some(&b'\n');
            if self.line.first() == Some(&b'#') {
                if !terminated {
                    self.input.skip_until(b'\n')?;
                }
                continue;
            }
            if terminated {
                self.line.pop();
            } else if self.line.len() > self.max_line_len {
                return Err(Error::LineTooLong {
                    line: self.number,
                    limit: self.max_line_len,
                });
            }

            let text = std::str::from_utf8(&self.line)
                .map_err(|_| Error::InvalidUtf8 { line: self.number })?;
            let args = self.tokens.tokenize(text, self.max_args);
            if args.is_empty() {
                continue;
            }

            return Ok(Some(BatchLine {
                number: self.number,
                args: args.into_iter().map(str::to_string).collect(),
                dropped: self.tokens.dropped(),
            }));
        }
    }
}

impl<R: BufRead> Iterator for BatchReader<R> {
    type Item = Result<BatchLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Opens a script by path, `-` meaning standard input.
///
/// Standard input is locked rather than owned, so dropping the reader
/// leaves it open; a file is closed when the reader is dropped.
///
/// # Errors
///
/// Returns `ScriptOpen` if the file cannot be opened.
pub fn open_script(path: &Path) -> Result<BatchReader<Box<dyn BufRead>>> {
    let input: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| Error::ScriptOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Box::new(BufReader::new(file))
    };
    Ok(BatchReader::new(input))
}
