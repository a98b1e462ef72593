use std::sync::Arc;

use derive_where::derive_where;
use serde::Deserialize;
use typed_builder::TypedBuilder;

use crate::selection_criteria::{ReadPreference, ReadPreferenceResolver};

/// Contains the options that can be used to create a new [`Client`](crate::Client).
#[derive(Clone, Default, Deserialize, TypedBuilder)]
#[derive_where(Debug, PartialEq)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClientOptions {
    /// The application name that the client reports in its log events.
    #[serde(alias = "appname")]
    pub app_name: Option<String>,

    /// The default read preference for operations run through this client.
    ///
    /// Collections inherit this value unless their own options set one. If neither does, commands
    /// are routed to the primary.
    pub read_preference: Option<ReadPreference>,

    /// The resolver used to turn per-call and default read preferences into the read preference a
    /// command is routed with. Defaults to
    /// [`DefaultReadPreferenceResolver`](crate::options::DefaultReadPreferenceResolver).
    #[serde(skip)]
    #[derive_where(skip)]
    pub read_preference_resolver: Option<Arc<dyn ReadPreferenceResolver>>,
}
