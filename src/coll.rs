pub mod options;

use std::sync::Arc;

use crate::{
    bson::{Bson, Document},
    client::Client,
    error::Result,
    operation::{Count, Distinct},
    options::{resolve_options, CollectionOptions, CountOptions, DistinctOptions},
    selection_criteria::ReadPreference,
};

/// `Collection` is the client-side abstraction of a MongoDB collection. It runs commands through
/// the [`Client`] it was obtained from and supplies the collection-level defaults that per-call
/// options are merged with.
///
/// `Collection` uses [`std::sync::Arc`] internally, so it can safely be shared across threads or
/// async tasks.
#[derive(Clone, Debug)]
pub struct Collection {
    inner: Arc<CollectionInner>,
}

#[derive(Debug)]
struct CollectionInner {
    client: Client,
    namespace: Namespace,
    read_preference: Option<ReadPreference>,
}

impl Collection {
    pub(crate) fn new(
        client: Client,
        db: &str,
        name: &str,
        options: Option<CollectionOptions>,
    ) -> Self {
        let mut options = options;
        resolve_options!(client, options, [read_preference]);
        let read_preference = options
            .as_ref()
            .and_then(CollectionOptions::read_preference)
            .cloned();

        Self {
            inner: Arc::new(CollectionInner {
                client,
                namespace: Namespace {
                    db: db.to_string(),
                    coll: name.to_string(),
                },
                read_preference,
            }),
        }
    }

    /// Gets the name of the `Collection`.
    pub fn name(&self) -> &str {
        &self.inner.namespace.coll
    }

    /// Gets the namespace of the `Collection`.
    ///
    /// The namespace of a MongoDB collection is the concatenation of the name of the database
    /// containing it, the '.' character, and the name of the collection itself. For example, if a
    /// collection named "bar" is created in a database named "foo", the namespace of the collection
    /// is "foo.bar".
    pub fn namespace(&self) -> Namespace {
        self.inner.namespace.clone()
    }

    /// Gets the default read preference of the `Collection`, inherited from the client if the
    /// collection's options did not set one.
    pub fn read_preference(&self) -> Option<&ReadPreference> {
        self.inner.read_preference.as_ref()
    }

    /// Finds the distinct values of the field specified by `field_name` across the collection.
    ///
    /// A read preference set on `options` overrides the collection's default for this call only.
    pub async fn distinct(
        &self,
        field_name: impl AsRef<str>,
        filter: Document,
        options: impl Into<Option<DistinctOptions>>,
    ) -> Result<Vec<Bson>> {
        let op = Distinct::new(
            self.namespace(),
            field_name.as_ref().to_string(),
            filter,
            options.into(),
        );
        self.inner
            .client
            .execute_operation(op, self.read_preference())
            .await
    }

    /// Counts the documents in the collection matching `filter` using the `count` command.
    pub async fn count(
        &self,
        filter: Document,
        options: impl Into<Option<CountOptions>>,
    ) -> Result<u64> {
        let op = Count::new(self.namespace(), filter, options.into());
        self.inner
            .client
            .execute_operation(op, self.read_preference())
            .await
    }
}

/// A struct modeling the canonical name for a collection in MongoDB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{db}.{coll}")]
pub struct Namespace {
    /// The name of the database associated with this namespace.
    pub db: String,

    /// The name of the collection this namespace corresponds to.
    pub coll: String,
}

impl Namespace {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            db: String::new(),
            coll: String::new(),
        }
    }
}

impl std::str::FromStr for Namespace {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');

        let db = parts.next();
        let coll = parts.collect::<Vec<_>>().join(".");

        match (db, coll) {
            (Some(db), coll) if !db.is_empty() && !coll.is_empty() => Ok(Self {
                db: db.to_string(),
                coll,
            }),
            _ => Err(crate::error::Error::invalid_argument(format!(
                "missing one or more fields in namespace {:?}",
                s
            ))),
        }
    }
}
