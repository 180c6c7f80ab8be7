//! Line tokenizer.
//!
//! Splits one received line into a verb and its ordered arguments. Arguments
//! are peeled from the front of the remaining text: a `:` marker makes the
//! whole remainder the final argument, otherwise the text up to the next
//! space is one argument. Peeling stops at the end of the text or at the first
//! empty argument.
//!
//! ```
//! use ircd_proto::line::tokenize;
//!
//! let (verb, args) = tokenize("privmsg #room :hello there friend").unwrap();
//! assert_eq!(verb, "PRIVMSG");
//! assert_eq!(args, vec!["#room", "hello there friend"]);
//! ```

use smallvec::SmallVec;

use crate::error::{MessageParseError, Result};

/// Marker introducing the trailing parameter.
pub const TRAILING_MARKER: char = ':';

/// A tokenized line borrowing from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// The verb as received (not case-folded).
    pub verb: &'a str,
    /// Positional arguments in order; the trailing parameter, if any, is last.
    pub args: SmallVec<[&'a str; 15]>,
}

impl<'a> LineRef<'a> {
    /// Tokenize a line without allocating for the common case.
    ///
    /// A trailing CR/LF is ignored. A line that yields no tokens fails with
    /// [`MessageParseError::EmptyMessage`].
    pub fn parse(line: &'a str) -> Result<Self> {
        let mut tokens = Tokens::new(line);
        let verb = tokens.next().ok_or(MessageParseError::EmptyMessage)?;
        Ok(Self {
            verb,
            args: tokens.collect(),
        })
    }

    /// The verb folded to upper case.
    pub fn verb_upper(&self) -> String {
        self.verb.to_ascii_uppercase()
    }

    /// Get an argument by index.
    #[inline]
    pub fn arg(&self, idx: usize) -> Option<&'a str> {
        self.args.get(idx).copied()
    }
}

/// Iterator peeling arguments off the front of a line.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            rest: line.trim_end_matches(['\r', '\n']),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (arg, rest) = peel(self.rest);
        if arg.is_empty() {
            self.rest = "";
            return None;
        }
        self.rest = rest;
        Some(arg)
    }
}

/// Peel one argument off `line`, returning it and the remaining text.
fn peel(line: &str) -> (&str, &str) {
    if let Some(trailing) = line.strip_prefix(TRAILING_MARKER) {
        return (trailing, "");
    }
    match line.split_once(' ') {
        Some((arg, rest)) => (arg, rest),
        None => (line, ""),
    }
}

/// Tokenize a line into an upper-cased verb and owned arguments.
pub fn tokenize(line: &str) -> Result<(String, Vec<String>)> {
    let line = LineRef::parse(line)?;
    Ok((
        line.verb_upper(),
        line.args.iter().map(|s| (*s).to_owned()).collect(),
    ))
}
