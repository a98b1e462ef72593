mod executor;
pub mod options;

use std::sync::Arc;

use derive_where::derive_where;

use crate::{
    coll::Collection,
    executor::CommandExecutor,
    options::{ClientOptions, CollectionOptions},
    selection_criteria::{DefaultReadPreferenceResolver, ReadPreference, ReadPreferenceResolver},
};

/// The entry point for running commands through a [`CommandExecutor`].
///
/// `Client` holds the client-level defaults (currently the default read preference) and the
/// collaborators used to run commands. It uses [`std::sync::Arc`] internally, so it can safely be
/// shared across threads or async tasks and cloned cheaply.
///
/// ```rust
/// # use std::sync::Arc;
/// # use mongodb_command_options::{
/// #     bson::Document,
/// #     error::Result,
/// #     executor::{Command, CommandExecutor},
/// #     options::{ClientOptions, ReadPreference},
/// #     Client,
/// # };
/// # use futures_util::future::BoxFuture;
/// # struct Transport;
/// # impl CommandExecutor for Transport {
/// #     fn execute(&self, _: Command, _: ReadPreference) -> BoxFuture<'_, Result<Document>> {
/// #         unimplemented!()
/// #     }
/// # }
/// let options = ClientOptions::builder()
///     .read_preference(ReadPreference::SecondaryPreferred { options: None })
///     .build();
/// let client = Client::with_executor(Arc::new(Transport), options);
/// let coll = client.collection("db", "coll");
/// assert_eq!(
///     coll.read_preference(),
///     Some(&ReadPreference::SecondaryPreferred { options: None })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive_where(Debug)]
struct ClientInner {
    options: ClientOptions,
    #[derive_where(skip)]
    executor: Arc<dyn CommandExecutor>,
    #[derive_where(skip)]
    resolver: Arc<dyn ReadPreferenceResolver>,
}

impl Client {
    /// Creates a new `Client` that sends its commands through `executor`.
    pub fn with_executor(
        executor: Arc<dyn CommandExecutor>,
        options: impl Into<Option<ClientOptions>>,
    ) -> Self {
        let options = options.into().unwrap_or_default();
        let resolver = options
            .read_preference_resolver
            .clone()
            .unwrap_or_else(|| Arc::new(DefaultReadPreferenceResolver));

        Self {
            inner: Arc::new(ClientInner {
                options,
                executor,
                resolver,
            }),
        }
    }

    /// Gets a handle to the collection `name` in the database `db`.
    ///
    /// The collection inherits the client's default read preference.
    pub fn collection(&self, db: &str, name: &str) -> Collection {
        Collection::new(self.clone(), db, name, None)
    }

    /// Gets a handle to the collection `name` in the database `db` with the provided options.
    ///
    /// Defaults not set in `options` are inherited from the client.
    pub fn collection_with_options(
        &self,
        db: &str,
        name: &str,
        options: CollectionOptions,
    ) -> Collection {
        Collection::new(self.clone(), db, name, Some(options))
    }

    /// Gets the default read preference of the `Client`.
    pub fn read_preference(&self) -> Option<&ReadPreference> {
        self.inner.options.read_preference.as_ref()
    }

    /// The options this client was created with.
    pub fn options(&self) -> &ClientOptions {
        &self.inner.options
    }
}
