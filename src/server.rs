//! Server-effect hook.

use async_trait::async_trait;

use crate::command::ClientCommand;
use crate::error::HandlerResult;

/// Applies accepted commands to server state.
///
/// Implemented by whatever owns rooms, users and sessions. This crate only
/// calls it, once per bound command, through
/// [`ClientCommand::handle_server`].
#[async_trait]
pub trait Server: Send {
    /// Apply one command. Replies go through [`ClientCommand::reply`].
    async fn handle_command(&mut self, command: &ClientCommand) -> HandlerResult;
}
