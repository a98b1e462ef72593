use std::time::Duration;

use super::{
    trace_or_log_enabled,
    TracingOrLogLevel,
    TracingRepresentation,
    COMMAND_TRACING_EVENT_TARGET,
    SERVER_SELECTION_TRACING_EVENT_TARGET,
};
use crate::{
    error::{Error, Result},
    executor::Command,
    selection_criteria::ReadPreference,
};

/// Type responsible for emitting tracing events for a single command invocation.
pub(crate) struct CommandTracingEventEmitter<'a> {
    app_name: Option<&'a str>,
    command_name: String,
    database_name: String,
}

impl<'a> CommandTracingEventEmitter<'a> {
    pub(crate) fn new(app_name: Option<&'a str>, command: &Command) -> Self {
        Self {
            app_name,
            command_name: command.name.clone(),
            database_name: command.target_db.clone(),
        }
    }

    pub(crate) fn emit_read_preference_resolved(
        &self,
        per_call: Option<&ReadPreference>,
        resolved: &ReadPreference,
    ) {
        if trace_or_log_enabled!(target: SERVER_SELECTION_TRACING_EVENT_TARGET, TracingOrLogLevel::Debug)
        {
            tracing::debug!(
                target: SERVER_SELECTION_TRACING_EVENT_TARGET,
                appName = self.app_name,
                commandName = self.command_name.as_str(),
                perCall = per_call.is_some(),
                selector = resolved.tracing_representation(),
                "Read preference resolved"
            );
        }
    }

    pub(crate) fn emit_assembled_event(&self, command: &Command) {
        if trace_or_log_enabled!(target: COMMAND_TRACING_EVENT_TARGET, TracingOrLogLevel::Debug) {
            tracing::debug!(
                target: COMMAND_TRACING_EVENT_TARGET,
                appName = self.app_name,
                command = command.body.tracing_representation(),
                databaseName = self.database_name.as_str(),
                commandName = self.command_name.as_str(),
                "Command assembled"
            );
        }
    }

    pub(crate) fn emit_succeeded_event(&self, duration: Duration) {
        if trace_or_log_enabled!(target: COMMAND_TRACING_EVENT_TARGET, TracingOrLogLevel::Debug) {
            tracing::debug!(
                target: COMMAND_TRACING_EVENT_TARGET,
                appName = self.app_name,
                databaseName = self.database_name.as_str(),
                commandName = self.command_name.as_str(),
                durationMS = duration.as_millis(),
                "Command succeeded"
            );
        }
    }

    pub(crate) fn emit_failed_event(&self, error: &Error, duration: Duration) {
        if trace_or_log_enabled!(target: COMMAND_TRACING_EVENT_TARGET, TracingOrLogLevel::Debug) {
            tracing::debug!(
                target: COMMAND_TRACING_EVENT_TARGET,
                appName = self.app_name,
                databaseName = self.database_name.as_str(),
                commandName = self.command_name.as_str(),
                failure = error.tracing_representation(),
                durationMS = duration.as_millis(),
                "Command failed"
            );
        }
    }

    pub(crate) fn emit_result<T>(&self, result: &Result<T>, duration: Duration) {
        match result {
            Ok(_) => self.emit_succeeded_event(duration),
            Err(error) => self.emit_failed_event(error, duration),
        }
    }
}
