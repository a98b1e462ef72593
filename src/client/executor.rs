#[cfg(feature = "tracing-unstable")]
use std::time::Instant;

use super::Client;
#[cfg(feature = "tracing-unstable")]
use crate::trace::command::CommandTracingEventEmitter;
use crate::{error::Result, operation::Operation, selection_criteria::ReadPreference};

impl Client {
    /// Runs `op`: builds its command document, resolves the read preference from the
    /// operation's options and `default_read_preference`, sends the command through the
    /// executor, and interprets the reply.
    ///
    /// Errors from building the command (e.g. invalid options) are returned before anything is
    /// sent.
    pub(crate) async fn execute_operation<T: Operation>(
        &self,
        mut op: T,
        default_read_preference: Option<&ReadPreference>,
    ) -> Result<T::O> {
        let command = op.build()?;
        let read_preference = self
            .inner
            .resolver
            .resolve(op.read_preference(), default_read_preference)?;

        #[cfg(feature = "tracing-unstable")]
        let (emitter, start) = {
            let emitter =
                CommandTracingEventEmitter::new(self.inner.options.app_name.as_deref(), &command);
            emitter.emit_read_preference_resolved(op.read_preference(), &read_preference);
            emitter.emit_assembled_event(&command);
            (emitter, Instant::now())
        };

        let result = self
            .inner
            .executor
            .execute(command, read_preference)
            .await
            .and_then(|reply| op.handle_response(reply));

        #[cfg(feature = "tracing-unstable")]
        emitter.emit_result(&result, start.elapsed());

        result
    }
}
