use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::{field::Field, span, Level, Metadata};

/// Models the data reported in a tracing event.
#[derive(Debug, Clone)]
pub(crate) struct TracingEvent {
    pub(crate) level: Level,
    pub(crate) target: String,
    pub(crate) fields: HashMap<String, String>,
}

impl TracingEvent {
    /// The event's message, e.g. "Command assembled".
    pub(crate) fn message(&self) -> Option<&str> {
        self.field("message")
    }

    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Collects every event emitted under this crate's targets while installed as the default
/// subscriber.
#[derive(Clone, Default)]
pub(crate) struct TracingHandler {
    events: Arc<Mutex<Vec<TracingEvent>>>,
}

impl TracingHandler {
    /// Installs this as the default subscriber for the current thread until the returned guard is
    /// dropped.
    pub(crate) fn set_as_default(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(self.clone())
    }

    pub(crate) fn events(&self) -> Vec<TracingEvent> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(|event| event.message().map(str::to_string))
            .collect()
    }
}

impl tracing::Subscriber for TracingHandler {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.target().starts_with("mongodb_command_options")
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let mut test_event = TracingEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: HashMap::new(),
        };
        event.record(&mut TracingEventVisitor {
            event: &mut test_event,
        });
        self.events.lock().unwrap().push(test_event);
    }

    // No spans are created by this crate.
    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }
    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}
    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}
    fn enter(&self, _span: &span::Id) {}
    fn exit(&self, _span: &span::Id) {}
}

struct TracingEventVisitor<'a> {
    event: &'a mut TracingEvent,
}

impl tracing::field::Visit for TracingEventVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.event
            .fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.event
            .fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}
