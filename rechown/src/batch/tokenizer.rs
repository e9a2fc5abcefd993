//! Splitting a script line into arguments.
//!
//! The rules are a small subset of shell quoting:
//!
//! - unquoted spaces and tabs separate arguments, and runs of them collapse;
//! - `'...'` keeps everything literally;
//! - `"..."` keeps everything literally except `\"`, which is a literal
//!   double quote. A doubled backslash before a quote does not escape it;
//! - an unterminated quote is closed by the end of the line.
//!
//! Nothing else is interpreted: no variables, no globbing, no escapes
//! outside double quotes.

/// The maximum number of arguments kept per line.
pub const MAX_ARGS: usize = 256;

/// Arguments of one line, borrowed from a [`TokenBuffer`].
pub type ArgumentVector<'a> = Vec<&'a str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    DoubleQuoted,
    SingleQuoted,
}

/// Reusable scratch space for tokenizing lines.
///
/// Dequoted text is written to one buffer and argument boundaries are
/// recorded as end offsets into it. Quote removal only ever shrinks the
/// text, so the buffer never grows past the input length. Both are
/// cleared at the start of every call.
///
/// # Examples
///
/// ```
/// use rechown::batch::TokenBuffer;
///
/// let mut buffer = TokenBuffer::new();
/// assert_eq!(buffer.tokenize(r#"-R "my user":staff  /srv/a\ b"#, 8), vec![
///     "-R", "my user:staff", r"/srv/a\", "b",
/// ]);
/// ```
#[derive(Debug, Default)]
pub struct TokenBuffer {
    text: String,
    ends: Vec<usize>,
    dropped: usize,
}

impl TokenBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `line` into at most `max_args` arguments.
    ///
    /// Arguments past `max_args` are dropped; [`TokenBuffer::dropped`]
    /// tells how many.
    pub fn tokenize(&mut self, line: &str, max_args: usize) -> ArgumentVector<'_> {
        self.text.clear();
        self.ends.clear();
        self.text.reserve(line.len());

        let mut state = State::Unquoted;
        let mut prev = None;
        let mut prev2 = None;

        for c in line.chars() {
            match (state, c) {
                (State::Unquoted, ' ' | '\t') => self.end_argument(),
                (State::Unquoted, '"') => state = State::DoubleQuoted,
                (State::Unquoted, '\'') => state = State::SingleQuoted,
                (State::DoubleQuoted, '"') => {
                    if prev == Some('\\') && prev2 != Some('\\') {
                        // The backslash was copied on the previous step.
                        self.text.pop();
                        self.text.push('"');
                    } else {
                        state = State::Unquoted;
                    }
                }
                (State::SingleQuoted, '\'') => state = State::Unquoted,
                _ => self.text.push(c),
            }
            prev2 = prev;
            prev = Some(c);
        }
        self.end_argument();

        self.dropped = self.ends.len().saturating_sub(max_args);
        if self.dropped > 0 {
            log::debug!("dropping {} arguments past the limit of {max_args}", self.dropped);
        }

        let mut start = 0;
        self.ends
            .iter()
            .take(max_args)
            .map(|&end| {
                let arg = &self.text[start..end];
                start = end;
                arg
            })
            .collect()
    }

    /// Number of arguments dropped by the last [`TokenBuffer::tokenize`].
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    /// Closes the current argument if anything was written since the
    /// previous boundary.
    fn end_argument(&mut self) {
        let start = self.ends.last().copied().unwrap_or(0);
        if self.text.len() > start {
            self.ends.push(self.text.len());
        }
    }
}

/// Tokenizes one line into owned arguments, keeping at most [`MAX_ARGS`].
///
/// # Examples
///
/// ```
/// use rechown::batch::tokenize;
///
/// assert_eq!(tokenize(r#""a b" c"#), vec!["a b", "c"]);
/// assert_eq!(tokenize(r#"'a"b' c"#), vec![r#"a"b"#, "c"]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    TokenBuffer::new()
        .tokenize(line, MAX_ARGS)
        .into_iter()
        .map(str::to_string)
        .collect()
}
