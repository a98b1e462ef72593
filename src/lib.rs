//! Typed, validated options for MongoDB commands, and the plumbing that turns them into command
//! documents and routing decisions.
//!
//! Each command has a flat options struct (e.g. [`options::DistinctOptions`]) whose fields are
//! [`OptionalValue`]s, so a field that was never set is always distinguishable from one set to
//! zero. When a command is sent, the present fields are written into the command document in a
//! fixed order under the names the server expects, while routing-only fields such as the read
//! preference are handed to a [`ReadPreferenceResolver`](options::ReadPreferenceResolver) and
//! never appear in the document.
//!
//! Network I/O is delegated to a [`CommandExecutor`](executor::CommandExecutor) supplied by the
//! caller:
//!
//! ```rust
//! # use std::sync::Arc;
//! # use futures_util::future::BoxFuture;
//! use mongodb_command_options::{
//!     bson::{doc, Document},
//!     error::Result,
//!     executor::{Command, CommandExecutor},
//!     options::{DistinctOptions, ReadPreference},
//!     Client,
//! };
//!
//! struct Transport;
//!
//! impl CommandExecutor for Transport {
//!     fn execute(&self, command: Command, _: ReadPreference) -> BoxFuture<'_, Result<Document>> {
//!         assert_eq!(
//!             command.body,
//!             doc! { "distinct": "coll", "key": "x", "maxTimeMS": 1000_i64 }
//!         );
//!         Box::pin(async { Ok(doc! { "values": [1, 2], "ok": 1 }) })
//!     }
//! }
//!
//! # async fn run() -> Result<()> {
//! let client = Client::with_executor(Arc::new(Transport), None);
//! let coll = client.collection("db", "coll");
//!
//! let mut options = DistinctOptions::new();
//! options.set_max_time_ms(1000)?;
//! let values = coll.distinct("x", Document::new(), options).await?;
//! assert_eq!(values.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! With the default `tracing-unstable` feature enabled, command assembly and read preference
//! resolution are reported as `tracing` events (and `log` records) at the debug level under the
//! `mongodb_command_options::command` and `mongodb_command_options::server_selection` targets.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod options;

pub use ::bson;

mod bson_util;
mod client;
mod coll;
pub mod error;
pub mod executor;
mod operation;
mod optional;
mod selection_criteria;
mod serde_util;
#[cfg(feature = "tracing-unstable")]
mod trace;

pub use crate::{
    bson_util::DocumentBuilder,
    client::Client,
    coll::{Collection, Namespace},
    optional::OptionalValue,
};
