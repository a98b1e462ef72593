//! The boundary between the options layer and the component that talks to the server.

use futures_util::future::BoxFuture;

use crate::{
    bson::Document,
    error::Result,
    selection_criteria::ReadPreference,
};

/// A fully assembled command, ready to be sent to a server.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Command {
    /// The name of the command, which is also the first key of `body`.
    pub name: String,

    /// The database the command runs against.
    pub target_db: String,

    /// The command document.
    pub body: Document,
}

impl Command {
    pub(crate) fn new(name: impl ToString, target_db: impl ToString, body: Document) -> Self {
        Self {
            name: name.to_string(),
            target_db: target_db.to_string(),
            body,
        }
    }
}

/// Performs the network round trip for a command.
///
/// The executor receives the command document exactly as the options layer assembled it, plus the
/// read preference that was resolved for it, and returns the server's reply document. Replies
/// with `ok: 0` should be returned as-is; they are translated into
/// [`ErrorKind::Command`](crate::error::ErrorKind::Command) errors by the caller. The executor
/// is responsible for enforcing any deadline it derives from the command's `maxTimeMS`.
/// Transport failures can be reported by converting a [`std::io::Error`] into an
/// [`Error`](crate::error::Error).
pub trait CommandExecutor: Send + Sync {
    /// Sends `command` to a server matching `read_preference` and returns the reply.
    fn execute(
        &self,
        command: Command,
        read_preference: ReadPreference,
    ) -> BoxFuture<'_, Result<Document>>;
}
