//! A server-effect hook that records what it was asked to do.

use async_trait::async_trait;
use ircd_core::{ClientCommand, Command, HandlerResult, Identifier, Reply, Response, Server};

pub const SERVER_NAME: &str = "irc.test.local";

/// Minimal hook: remembers every command and answers a few verbs.
#[derive(Debug, Default)]
pub struct RecordingServer {
    /// `(client id, command display)` for every call, in order.
    pub calls: Vec<(String, String)>,
}

#[async_trait]
impl Server for RecordingServer {
    async fn handle_command(&mut self, command: &ClientCommand) -> HandlerResult {
        self.calls
            .push((command.source().id().to_string(), command.command().to_string()));

        match command.command() {
            Command::Nick(nick) => command.client().set_nick(nick.nickname()),
            Command::Ping(ping) => {
                command.reply(Reply::new("PONG", vec![ping.server().to_string()]))?;
            }
            Command::Part(part) => {
                let message = command.part_message().unwrap_or_default();
                for channel in part.channels() {
                    command.reply(
                        Reply::new("PART", vec![channel.clone(), message.clone()])
                            .with_prefix(command.source().nick()),
                    )?;
                }
            }
            Command::Topic(topic) if topic.topic().is_none() => {
                command.reply_numeric(
                    SERVER_NAME,
                    Response::RPL_NOTOPIC,
                    [topic.channel().to_string(), "No topic is set".to_string()],
                )?;
            }
            Command::UserMode(mode) => {
                let flags: String = mode.changes().iter().map(|c| c.to_string()).collect();
                command.reply_numeric(SERVER_NAME, Response::RPL_UMODEIS, [flags])?;
            }
            _ => {}
        }
        Ok(())
    }
}
