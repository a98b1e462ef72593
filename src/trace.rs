use crate::{bson::Bson, error::Error, selection_criteria::ReadPreference};

pub(crate) mod command;
#[cfg(test)]
pub(crate) mod handler;

pub(crate) const COMMAND_TRACING_EVENT_TARGET: &str = "mongodb_command_options::command";
pub(crate) const SERVER_SELECTION_TRACING_EVENT_TARGET: &str =
    "mongodb_command_options::server_selection";

pub(crate) trait TracingRepresentation {
    type Representation;

    fn tracing_representation(&self) -> Self::Representation;
}

impl TracingRepresentation for bson::Document {
    type Representation = String;

    fn tracing_representation(&self) -> String {
        Bson::Document(self.clone())
            .into_relaxed_extjson()
            .to_string()
    }
}

impl TracingRepresentation for Error {
    type Representation = String;

    fn tracing_representation(&self) -> String {
        self.to_string()
    }
}

impl TracingRepresentation for ReadPreference {
    type Representation = String;

    fn tracing_representation(&self) -> Self::Representation {
        self.to_string()
    }
}

/// We don't currently use all of these levels but they are included for completeness.
#[allow(dead_code)]
pub(crate) enum TracingOrLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl TracingOrLogLevel {
    pub(crate) const fn as_log_level(&self) -> log::Level {
        match self {
            TracingOrLogLevel::Error => log::Level::Error,
            TracingOrLogLevel::Warn => log::Level::Warn,
            TracingOrLogLevel::Info => log::Level::Info,
            TracingOrLogLevel::Debug => log::Level::Debug,
            TracingOrLogLevel::Trace => log::Level::Trace,
        }
    }

    pub(crate) const fn as_tracing_level(&self) -> tracing::Level {
        match self {
            TracingOrLogLevel::Error => tracing::Level::ERROR,
            TracingOrLogLevel::Warn => tracing::Level::WARN,
            TracingOrLogLevel::Info => tracing::Level::INFO,
            TracingOrLogLevel::Debug => tracing::Level::DEBUG,
            TracingOrLogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Pending https://github.com/tokio-rs/tracing/issues/2036 we can remove this and just use tracing::enabled.
macro_rules! trace_or_log_enabled {
    (target: $target:expr, $lvl:expr) => {
        tracing::enabled!(target: $target, $lvl.as_tracing_level())
            || log::log_enabled!(target: $target, $lvl.as_log_level())
    };
}
pub(crate) use trace_or_log_enabled;

#[cfg(test)]
mod test {
    use super::TracingRepresentation;
    use crate::{
        bson::{doc, oid::ObjectId},
        error::Error,
        selection_criteria::ReadPreference,
    };

    #[test]
    fn document_representation_is_relaxed_extended_json() {
        let oid = ObjectId::new();
        let command = doc! { "distinct": "coll", "key": "x", "maxTimeMS": 1000_i64, "id": oid };
        let json: serde_json::Value =
            serde_json::from_str(&command.tracing_representation()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "distinct": "coll",
                "key": "x",
                "maxTimeMS": 1000,
                "id": { "$oid": oid.to_hex() },
            })
        );
    }

    #[test]
    fn other_representations() {
        assert_eq!(
            ReadPreference::Nearest { options: None }.tracing_representation(),
            ReadPreference::Nearest { options: None }.to_string()
        );
        let error = Error::invalid_argument("maxTimeMS must be non-negative, got -1");
        assert!(error
            .tracing_representation()
            .contains("maxTimeMS must be non-negative"));
    }
}
