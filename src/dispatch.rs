//! Per-line dispatch policy.
//!
//! Turns one received line into a bound command, answering the client with
//! the matching numeric when the line is oversized, rejected by the parser,
//! or names a verb nothing handles. Every outcome is per-line: a bad line
//! never closes the connection by itself.

use std::sync::Arc;

use ircd_proto::{Command, MessageParseError};
use tracing::{debug, debug_span, trace};

use crate::client::{Client, Identifier};
use crate::command::{Bind, ClientCommand};
use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::helpers::err_unknowncommand;
use crate::server::Server;

/// Applies the configured line policy for every connection.
#[derive(Debug, Clone)]
pub struct LineDispatcher {
    server_name: String,
    max_line_len: usize,
    reply_unknown: bool,
    notify_errors: bool,
}

impl LineDispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            server_name: config.server.name.clone(),
            max_line_len: config.limits.max_line_len,
            reply_unknown: config.parser.reply_unknown,
            notify_errors: config.parser.notify_errors,
        }
    }

    /// Name used as the prefix of numeric replies.
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Parse one line from `client` and bind the result to it.
    ///
    /// Returns `Ok(None)` for a blank line. Unknown verbs are returned bound
    /// like any other command, after the optional 421 reply.
    pub fn dispatch(
        &self,
        client: &Arc<Client>,
        line: &str,
    ) -> Result<Option<ClientCommand>, HandlerError> {
        let span = debug_span!("irc.line", client = %client.id());
        let _enter = span.enter();

        let body = line.trim_end_matches(['\r', '\n']);
        if body.len() > self.max_line_len {
            let err = HandlerError::LineTooLong {
                actual: body.len(),
                limit: self.max_line_len,
            };
            debug!(error = %err, "line rejected");
            let verb = body.split(' ').next().unwrap_or_default().to_ascii_uppercase();
            self.notify(client, &err, &verb)?;
            return Err(err);
        }

        let command = match Command::parse(body) {
            Ok(command) => command,
            Err(MessageParseError::EmptyMessage) => {
                trace!("empty line ignored");
                return Ok(None);
            }
            Err(e) => {
                debug!(error = %e, code = e.error_code(), "command rejected");
                let verb = e.command().unwrap_or("*");
                let err = HandlerError::from(e);
                self.notify(client, &err, verb)?;
                return Err(err);
            }
        };

        match &command {
            Command::Unknown(unknown) => {
                trace!(command = %unknown.verb(), args = unknown.args().len(), "passthrough");
                if self.reply_unknown {
                    client.send(err_unknowncommand(
                        &self.server_name,
                        &client.nick(),
                        unknown.verb(),
                    ))?;
                }
            }
            parsed => debug!(command = %parsed.verb(), %parsed, "command parsed"),
        }

        Ok(Some(command.bind(Arc::clone(client))))
    }

    /// Dispatch one line and hand the result to the server-effect hook.
    pub async fn process<S>(&self, client: &Arc<Client>, line: &str, server: &mut S) -> HandlerResult
    where
        S: Server + ?Sized,
    {
        match self.dispatch(client, line)? {
            Some(command) => command.handle_server(server).await,
            None => Ok(()),
        }
    }

    fn notify(&self, client: &Client, err: &HandlerError, verb: &str) -> HandlerResult {
        if !self.notify_errors {
            return Ok(());
        }
        match err.to_reply(&self.server_name, &client.nick(), verb) {
            Some(reply) => client.send(reply),
            None => Ok(()),
        }
    }
}
