//! Connection handle shared between the reader task and bound commands.

use std::fmt;
use std::sync::Arc;

use ircd_proto::Reply;
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::warn;

use crate::error::HandlerError;

/// Nickname shown for a connection that has not registered one yet.
pub const UNREGISTERED_NICK: &str = "*";

/// Something that can be named as the source of a command.
pub trait Identifier: Send + Sync {
    /// Stable unique id of the connection.
    fn id(&self) -> &str;

    /// Current nickname, or `*` before registration.
    fn nick(&self) -> String;
}

/// One connected peer: its id, nickname slot and outbound reply queue.
pub struct Client {
    id: String,
    nick: RwLock<Option<String>>,
    sender: mpsc::UnboundedSender<Reply>,
}

impl Client {
    /// Create a connection handle and the receiving half of its reply queue.
    ///
    /// The writer task drains the receiver; replies come out in the order
    /// they were queued.
    pub fn new(id: impl Into<String>) -> (Arc<Self>, mpsc::UnboundedReceiver<Reply>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let client = Arc::new(Self {
            id: id.into(),
            nick: RwLock::new(None),
            sender,
        });
        (client, receiver)
    }

    /// Record the nickname once the server accepts it.
    pub fn set_nick(&self, nick: impl Into<String>) {
        *self.nick.write() = Some(nick.into());
    }

    /// Returns true once a nickname has been set.
    pub fn is_registered(&self) -> bool {
        self.nick.read().is_some()
    }

    /// Queue a reply for this connection.
    ///
    /// Never blocks. Fails only when the writer side has gone away.
    pub fn send(&self, reply: Reply) -> Result<(), HandlerError> {
        self.sender.send(reply).map_err(|e| {
            warn!(client = %self.id, "reply queue closed, dropping reply");
            HandlerError::Send(e)
        })
    }

    /// Returns true if the receiving half has been dropped.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl Identifier for Client {
    fn id(&self) -> &str {
        &self.id
    }

    fn nick(&self) -> String {
        self.nick
            .read()
            .clone()
            .unwrap_or_else(|| UNREGISTERED_NICK.to_string())
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("nick", &*self.nick.read())
            .field("closed", &self.is_closed())
            .finish()
    }
}
