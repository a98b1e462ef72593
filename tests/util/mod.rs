use std::{
    collections::VecDeque,
    io,
    sync::{Arc, Mutex},
};

use futures_util::future::BoxFuture;
use mongodb_command_options::{
    bson::Document,
    error::{Error, Result},
    executor::{Command, CommandExecutor},
    options::{ClientOptions, ReadPreference},
    Client,
};

/// An executor that records every command it is handed and answers with queued replies. Once the
/// queue is empty it fails as if the server were unreachable.
#[derive(Clone, Default)]
pub(crate) struct RecordingExecutor {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    sent: Mutex<Vec<(Command, ReadPreference)>>,
    replies: Mutex<VecDeque<Document>>,
}

impl RecordingExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn client(&self, options: impl Into<Option<ClientOptions>>) -> Client {
        Client::with_executor(Arc::new(self.clone()), options)
    }

    pub(crate) fn push_reply(&self, reply: Document) {
        self.inner.replies.lock().unwrap().push_back(reply);
    }

    pub(crate) fn sent(&self) -> Vec<(Command, ReadPreference)> {
        self.inner.sent.lock().unwrap().clone()
    }

    pub(crate) fn last_sent(&self) -> (Command, ReadPreference) {
        self.sent().pop().expect("no command was sent")
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(
        &self,
        command: Command,
        read_preference: ReadPreference,
    ) -> BoxFuture<'_, Result<Document>> {
        self.inner
            .sent
            .lock()
            .unwrap()
            .push((command, read_preference));
        let reply = self.inner.replies.lock().unwrap().pop_front();
        Box::pin(async move {
            match reply {
                Some(reply) => Ok(reply),
                None => Err(Error::from(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "no reply queued",
                ))),
            }
        })
    }
}
