//! Commands bound to the connection that sent them.

use std::fmt;
use std::sync::Arc;

use ircd_proto::{Command, Reply, Response};
use tracing::{Instrument, debug_span};

use crate::client::{Client, Identifier};
use crate::error::{HandlerError, HandlerResult};
use crate::server::Server;

/// Attach a parsed command to its owning connection.
///
/// Binding consumes the command, so a value is bound exactly once. The
/// resulting [`ClientCommand`] is in turn consumed by
/// [`ClientCommand::handle_server`], which rules out rebinding after
/// dispatch.
pub trait Bind {
    /// Finish construction by naming the connection the command came from.
    fn bind(self, client: Arc<Client>) -> ClientCommand;
}

impl Bind for Command {
    fn bind(self, client: Arc<Client>) -> ClientCommand {
        ClientCommand {
            command: self,
            client,
        }
    }
}

/// A command together with the connection that sent it.
pub struct ClientCommand {
    command: Command,
    client: Arc<Client>,
}

impl ClientCommand {
    /// The parsed command.
    #[inline]
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// The owning connection.
    #[inline]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Who sent the command.
    #[inline]
    pub fn source(&self) -> &dyn Identifier {
        self.client.as_ref()
    }

    /// Queue a reply on the owning connection.
    pub fn reply(&self, reply: Reply) -> Result<(), HandlerError> {
        self.client.send(reply)
    }

    /// Queue a numeric reply addressed to the sender.
    ///
    /// The sender's nickname is inserted as the first parameter.
    pub fn reply_numeric(
        &self,
        server_name: &str,
        response: Response,
        params: impl IntoIterator<Item = String>,
    ) -> Result<(), HandlerError> {
        let mut all = vec![self.source().nick()];
        all.extend(params);
        self.reply(Reply::numeric(server_name, response, all))
    }

    /// The parting message of a `PART`, defaulting to the sender's nickname.
    ///
    /// `None` for any other command.
    pub fn part_message(&self) -> Option<String> {
        match &self.command {
            Command::Part(part) => Some(match part.message() {
                Some(message) => message.to_owned(),
                None => self.source().nick(),
            }),
            _ => None,
        }
    }

    /// Apply the command to server state.
    ///
    /// Runs the hook once and consumes the bound command.
    pub async fn handle_server<S>(self, server: &mut S) -> HandlerResult
    where
        S: Server + ?Sized,
    {
        let span = debug_span!(
            "irc.command",
            command = %self.command.verb(),
            client = %self.client.id(),
        );
        server.handle_command(&self).instrument(span).await
    }

    /// Split back into the command and its connection.
    pub fn into_parts(self) -> (Command, Arc<Client>) {
        (self.command, self.client)
    }
}

impl fmt::Debug for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCommand")
            .field("command", &self.command)
            .field("client", &self.client.id())
            .finish()
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.command, self.client.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_message_falls_back_to_nick() {
        let (client, _rx) = Client::new("001AAAAAA");
        client.set_nick("alice");

        let bound = Command::parse("PART #a").unwrap().bind(client.clone());
        assert_eq!(bound.part_message().as_deref(), Some("alice"));

        let bound = Command::parse("PART #a :bye now").unwrap().bind(client.clone());
        assert_eq!(bound.part_message().as_deref(), Some("bye now"));

        let bound = Command::parse("NICK bob").unwrap().bind(client);
        assert_eq!(bound.part_message(), None);
    }

    #[test]
    fn test_part_message_reads_nick_late() {
        let (client, _rx) = Client::new("001AAAAAA");
        let bound = Command::parse("PART #a").unwrap().bind(client.clone());
        assert_eq!(bound.part_message().as_deref(), Some("*"));

        client.set_nick("carol");
        assert_eq!(bound.part_message().as_deref(), Some("carol"));
    }

    #[test]
    fn test_reply_numeric_prepends_nick() {
        let (client, mut rx) = Client::new("001AAAAAA");
        client.set_nick("alice");
        let bound = Command::parse("TOPIC #a").unwrap().bind(client);

        bound
            .reply_numeric(
                "irc.example.net",
                Response::RPL_NOTOPIC,
                ["#a".to_string(), "No topic is set".to_string()],
            )
            .unwrap();

        let reply = rx.try_recv().unwrap();
        assert_eq!(
            reply.to_string(),
            ":irc.example.net 331 alice #a :No topic is set\r\n"
        );
    }

    #[test]
    fn test_source_and_display() {
        let (client, _rx) = Client::new("001AAAAAB");
        let bound = Command::parse("PING a").unwrap().bind(client);
        assert_eq!(bound.source().id(), "001AAAAAB");
        assert_eq!(bound.source().nick(), "*");
        assert_eq!(bound.to_string(), "PING(server=a, server2=) from 001AAAAAB");

        let (command, client) = bound.into_parts();
        assert_eq!(command.verb(), "PING");
        assert_eq!(client.id(), "001AAAAAB");
    }
}
