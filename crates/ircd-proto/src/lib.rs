//! # ircd-proto
//!
//! Parsing layer for the ircd-core chat daemon: turns one received line into
//! a typed, validated [`Command`].
//!
//! ## Features
//!
//! - Line tokenizer with trailing-parameter support
//! - Case-insensitive verb registry with per-verb arity rules
//! - User mode flag-token decoding
//! - Numeric replies and their wire encoding

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use ircd_proto::{Command, UserMode, ModeChange};
//!
//! let cmd: Command = "MODE alice +iw-o".parse().expect("valid MODE");
//! if let Command::UserMode(mode) = cmd {
//!     assert_eq!(mode.changes()[2], ModeChange::minus(UserMode::Operator));
//! }
//!
//! // Verbs without a constructor pass through untouched.
//! let cmd = Command::parse("FROB a b").expect("passthrough");
//! assert!(cmd.is_unknown());
//! ```

pub mod chan;
pub mod command;
pub mod error;
pub mod line;
pub mod mode;
pub mod response;

pub use self::chan::ChannelExt;
pub use self::command::{
    ChannelKeys, ChannelModeCommand, Command, Constructor, Join, Nick, Part, Pass, Ping, Pong,
    PrivMsg, Quit, Topic, Unknown, User, UserModeCommand, Who, Whois,
};
pub use self::error::{Arity, MessageParseError, ModeParseError};
pub use self::line::{tokenize, LineRef};
pub use self::mode::{decode_flags, ModeChange, ModeFlag, UserMode};
pub use self::response::{Reply, Response};
