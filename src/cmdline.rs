//! Command-line tokenizing
//!
//! Splits one raw command-line string into an argument vector using the
//! Windows-style quoting rules: whitespace separates arguments, a double
//! quote opens a quoted argument, and `""` inside quotes is a literal quote.
//!
//! Tokens borrow from the input line. Only a token that contained an escaped
//! quote needs to be rewritten, so only that token is allocated.

use serde::Serialize;
use std::borrow::Cow;

/// Maximum number of arguments the shell keeps from its command line.
pub const DEFAULT_MAX_ARGS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Between,
    Quoted,
    Unquoted,
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0c)
}

/// Splits `line` into at most `max_tokens` arguments.
///
/// Scanning stops as soon as `max_tokens` arguments have been produced; the
/// rest of the line is never looked at. Input that ends inside an open quote
/// still emits the argument collected so far.
///
/// # Examples
///
/// ```
/// use pixhost::cmdline::tokenize;
///
/// assert_eq!(tokenize("a b c", 10), vec!["a", "b", "c"]);
/// assert_eq!(tokenize("\"a b\" c", 10), vec!["a b", "c"]);
/// assert_eq!(tokenize("\"a\"\"b\"", 10), vec!["a\"b"]);
/// assert_eq!(tokenize("a b c", 2), vec!["a", "b"]);
/// assert!(tokenize("", 10).is_empty());
/// ```
pub fn tokenize(line: &str, max_tokens: usize) -> Vec<Cow<'_, str>> {
    let mut tokens = Vec::new();
    if max_tokens == 0 {
        return tokens;
    }

    let bytes = line.as_bytes();
    let mut state = State::Between;
    let mut start = 0;
    // Text already unescaped for the current quoted token, if it had a `""`.
    let mut unescaped: Option<String> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Between => {
                if b == b'"' {
                    state = State::Quoted;
                    start = i + 1;
                } else if !is_separator(b) {
                    state = State::Unquoted;
                    start = i;
                }
            }
            State::Unquoted => {
                if is_separator(b) {
                    tokens.push(Cow::Borrowed(&line[start..i]));
                    state = State::Between;
                    if tokens.len() == max_tokens {
                        return tokens;
                    }
                }
            }
            State::Quoted => {
                if b == b'"' {
                    if bytes.get(i + 1) == Some(&b'"') {
                        // Keep everything up to and including the first quote.
                        unescaped.get_or_insert_with(String::new).push_str(&line[start..=i]);
                        i += 2;
                        start = i;
                        continue;
                    }
                    tokens.push(finish_quoted(line, start, i, unescaped.take()));
                    state = State::Between;
                    if tokens.len() == max_tokens {
                        return tokens;
                    }
                }
            }
        }
        i += 1;
    }

    match state {
        State::Between => {}
        State::Unquoted => tokens.push(Cow::Borrowed(&line[start..])),
        State::Quoted => tokens.push(finish_quoted(line, start, line.len(), unescaped)),
    }

    tokens
}

fn finish_quoted(line: &str, start: usize, end: usize, unescaped: Option<String>) -> Cow<'_, str> {
    match unescaped {
        Some(mut text) => {
            text.push_str(&line[start..end]);
            Cow::Owned(text)
        }
        None => Cow::Borrowed(&line[start..end]),
    }
}

/// The argument vector handed to a game's `init`.
///
/// Built once from the raw command line and kept by the shell for its whole
/// lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArgVector {
    args: Vec<String>,
}

impl ArgVector {
    /// Tokenize `line`, keeping at most `max_args` arguments.
    pub fn parse(line: &str, max_args: usize) -> Self {
        Self { args: tokenize(line, max_args).into_iter().map(Cow::into_owned).collect() }
    }

    /// Build an argument vector from already-split arguments.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { args: args.into_iter().map(Into::into).collect() }
    }

    /// The first argument, conventionally the program name.
    pub fn program(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }
}
