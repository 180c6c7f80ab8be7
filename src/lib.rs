//! ircd-core - command binding and line dispatch for a chat-room daemon.
//!
//! The parsing itself lives in [`ircd_proto`]. This crate attaches a parsed
//! [`Command`] to the connection that sent it, routes replies back through
//! that connection's outbound queue, and applies the per-line policy for
//! oversized lines, rejected commands and unknown verbs.
//!
//! ```no_run
//! use ircd_core::{Client, Config, LineDispatcher};
//!
//! let config = Config::default();
//! let dispatcher = LineDispatcher::new(&config);
//! let (client, mut replies) = Client::new("001AAAAAA");
//!
//! match dispatcher.dispatch(&client, "NICK alice\r\n") {
//!     Ok(Some(command)) => println!("{}", command.command()),
//!     Ok(None) => {}
//!     Err(e) => eprintln!("rejected: {}", e),
//! }
//! # let _ = replies.try_recv();
//! ```

pub mod client;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod helpers;
pub mod server;

pub use client::{Client, Identifier};
pub use command::{Bind, ClientCommand};
pub use config::{Config, ConfigError};
pub use dispatch::LineDispatcher;
pub use error::{HandlerError, HandlerResult};
pub use server::Server;

pub use ircd_proto::{Command, MessageParseError, Reply, Response};
