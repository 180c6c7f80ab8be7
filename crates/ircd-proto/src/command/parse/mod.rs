//! Verb registry and per-verb constructors.
//!
//! The registry maps an upper-cased verb to a pure constructor. It is built
//! once on first use and only read afterwards, so any number of connection
//! tasks may consult it concurrently without locking.

mod channel;
mod connection;
mod messaging;
mod mode;
mod user;

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

use super::types::{Command, Unknown};
use crate::error::{Arity, MessageParseError};
use crate::line::LineRef;

/// A per-verb constructor: validates the arguments and builds the variant.
pub type Constructor = fn(&[&str]) -> Result<Command, MessageParseError>;

static REGISTRY: OnceLock<HashMap<&'static str, Constructor>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, Constructor> {
    REGISTRY.get_or_init(|| {
        let mut constructors: HashMap<&'static str, Constructor> = HashMap::new();

        // Connection registration
        constructors.insert("PASS", connection::pass);
        constructors.insert("NICK", connection::nick);
        constructors.insert("USER", connection::user);
        constructors.insert("PING", connection::ping);
        constructors.insert("PONG", connection::pong);
        constructors.insert("QUIT", connection::quit);

        // Channel operations
        constructors.insert("JOIN", channel::join);
        constructors.insert("PART", channel::part);
        constructors.insert("TOPIC", channel::topic);
        constructors.insert("MODE", mode::mode);

        // Messaging
        constructors.insert("PRIVMSG", messaging::privmsg);

        // User queries
        constructors.insert("WHO", user::who);
        constructors.insert("WHOIS", user::whois);

        constructors
    })
}

/// Fail with [`MessageParseError::NotEnoughArguments`] unless `args` fits `arity`.
fn require(command: &'static str, args: &[&str], arity: Arity) -> Result<(), MessageParseError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(MessageParseError::NotEnoughArguments {
            command,
            expected: arity,
            got: args.len(),
        })
    }
}

/// Get an optional owned string from args at the given index.
#[inline]
fn arg_opt(args: &[&str], idx: usize) -> Option<String> {
    args.get(idx).map(|s| (*s).to_owned())
}

/// Split a comma-separated list, keeping empty elements.
fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(str::to_owned).collect()
}

impl Command {
    /// Build a command from its verb and arguments.
    ///
    /// The verb is matched case-insensitively. A verb with no constructor is
    /// not an error: it yields [`Command::Unknown`] carrying the verb and
    /// arguments.
    #[must_use = "command parsing result should be handled"]
    pub fn new(verb: &str, args: &[&str]) -> Result<Command, MessageParseError> {
        let verb = verb.to_ascii_uppercase();
        match registry().get(verb.as_str()) {
            Some(constructor) => constructor(args),
            None => Ok(Command::Unknown(Unknown {
                verb,
                args: args.iter().map(|s| (*s).to_owned()).collect(),
            })),
        }
    }

    /// Tokenize a raw line and build the command it carries.
    #[must_use = "command parsing result should be handled"]
    pub fn parse(line: &str) -> Result<Command, MessageParseError> {
        let line = LineRef::parse(line)?;
        Command::new(line.verb, &line.args)
    }

    /// Returns true if `verb` has a constructor.
    pub fn is_supported(verb: &str) -> bool {
        registry().contains_key(verb.to_ascii_uppercase().as_str())
    }

    /// All verbs with a constructor, sorted.
    pub fn supported_verbs() -> Vec<&'static str> {
        let mut verbs: Vec<_> = registry().keys().copied().collect();
        verbs.sort_unstable();
        verbs
    }
}

impl FromStr for Command {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}
