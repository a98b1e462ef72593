use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    error::{Error, Result},
    optional::OptionalValue,
    options::{CommandOptions, OptionField},
    selection_criteria::ReadPreference,
    serde_util,
};

const MAX_TIME_MS: &str = "maxTimeMS";

/// These are the valid options for creating a [`Collection`](crate::Collection) with
/// [`Client::collection_with_options`](crate::Client::collection_with_options).
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, TypedBuilder, PartialEq)]
#[builder(field_defaults(default, setter(strip_option)))]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CollectionOptions {
    /// The default read preference for operations.
    ///
    /// If none is specified, the client's default is used.
    pub read_preference: Option<ReadPreference>,
}

impl CollectionOptions {
    pub(crate) fn read_preference(&self) -> Option<&ReadPreference> {
        self.read_preference.as_ref()
    }
}

fn check_non_negative(wire_key: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(Error::invalid_argument(format!(
            "{} must be non-negative, got {}",
            wire_key, value
        )));
    }
    Ok(())
}

fn check_present_non_negative(wire_key: &str, value: &OptionalValue<i64>) -> Result<()> {
    match value.get() {
        Some(value) => check_non_negative(wire_key, *value),
        None => Ok(()),
    }
}

fn millis_from_duration(duration: Duration) -> Result<i64> {
    i64::try_from(duration.as_millis()).map_err(|_| {
        Error::invalid_argument(format!(
            "{} must fit in a signed 64-bit integer, got {:?}",
            MAX_TIME_MS, duration
        ))
    })
}

/// Specifies the options to a [`Collection::distinct`](crate::Collection::distinct) operation.
///
/// Options are plain values and are not internally synchronized.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctOptions {
    /// The maximum amount of time to allow the query to run, in milliseconds.
    #[serde(
        rename = "maxTimeMS",
        default,
        skip_serializing_if = "OptionalValue::is_absent",
        deserialize_with = "serde_util::deserialize_non_negative_i64"
    )]
    max_time_ms: OptionalValue<i64>,

    /// Used for server selection only.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_util::deserialize_valid_read_preference"
    )]
    read_preference: OptionalValue<ReadPreference>,
}

impl DistinctOptions {
    /// Creates options with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum amount of time for this operation to run (server side) in milliseconds.
    ///
    /// This maps to the `maxTimeMS` MongoDB query option. A negative value is rejected and any
    /// previously set value is kept.
    ///
    /// See the [documentation](https://www.mongodb.com/docs/manual/reference/operator/meta/maxTimeMS/)
    /// for more information.
    pub fn set_max_time_ms(&mut self, max_time_ms: i64) -> Result<&mut Self> {
        check_non_negative(MAX_TIME_MS, max_time_ms)?;
        self.max_time_ms.set(max_time_ms);
        Ok(self)
    }

    /// The current max time setting, in milliseconds.
    pub fn max_time_ms(&self) -> &OptionalValue<i64> {
        &self.max_time_ms
    }

    /// Sets the max time from a `Duration`, truncated to whole milliseconds.
    pub fn set_max_time(&mut self, max_time: Duration) -> Result<&mut Self> {
        let millis = millis_from_duration(max_time)?;
        self.set_max_time_ms(millis)
    }

    /// The current max time setting as a `Duration`.
    pub fn max_time(&self) -> Option<Duration> {
        self.max_time_ms
            .get()
            .map(|millis| Duration::from_millis(*millis as u64))
    }

    /// Unsets the max time so that the server default applies.
    pub fn reset_max_time_ms(&mut self) -> &mut Self {
        self.max_time_ms.reset();
        self
    }

    /// Sets the read preference for this operation, overriding the collection's default for this
    /// call only.
    ///
    /// A read preference the server would refuse (e.g. a max staleness under 90 seconds) is
    /// rejected and any previously set value is kept.
    ///
    /// See the [documentation](https://www.mongodb.com/docs/manual/core/read-preference/) for more
    /// information.
    pub fn set_read_preference(&mut self, read_preference: ReadPreference) -> Result<&mut Self> {
        read_preference.validate()?;
        self.read_preference.set(read_preference);
        Ok(self)
    }

    /// The current per-call read preference.
    pub fn read_preference(&self) -> &OptionalValue<ReadPreference> {
        &self.read_preference
    }

    /// Unsets the per-call read preference so that the collection's default applies.
    pub fn reset_read_preference(&mut self) -> &mut Self {
        self.read_preference.reset();
        self
    }
}

impl CommandOptions for DistinctOptions {
    const COMMAND_NAME: &'static str = "distinct";

    const FIELDS: &'static [OptionField] = &[
        OptionField::document("max_time_ms", MAX_TIME_MS),
        OptionField::routing("read_preference"),
    ];

    fn validate(&self) -> Result<()> {
        check_present_non_negative(MAX_TIME_MS, &self.max_time_ms)?;
        if let Some(read_preference) = self.read_preference.get() {
            read_preference.validate()?;
        }
        Ok(())
    }

    fn routing_read_preference(&self) -> Option<&ReadPreference> {
        self.read_preference.get()
    }
}

/// Specifies the options to a [`Collection::count`](crate::Collection::count) operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountOptions {
    /// The number of documents to skip before counting.
    #[serde(
        default,
        skip_serializing_if = "OptionalValue::is_absent",
        deserialize_with = "serde_util::deserialize_non_negative_i64"
    )]
    skip: OptionalValue<i64>,

    /// The maximum number of documents to count.
    #[serde(
        default,
        skip_serializing_if = "OptionalValue::is_absent",
        deserialize_with = "serde_util::deserialize_non_negative_i64"
    )]
    limit: OptionalValue<i64>,

    /// The maximum amount of time to allow the query to run, in milliseconds.
    #[serde(
        rename = "maxTimeMS",
        default,
        skip_serializing_if = "OptionalValue::is_absent",
        deserialize_with = "serde_util::deserialize_non_negative_i64"
    )]
    max_time_ms: OptionalValue<i64>,

    /// Used for server selection only.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "serde_util::deserialize_valid_read_preference"
    )]
    read_preference: OptionalValue<ReadPreference>,
}

impl CountOptions {
    /// Creates options with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of documents to skip before counting. Must be non-negative.
    pub fn set_skip(&mut self, skip: i64) -> Result<&mut Self> {
        check_non_negative("skip", skip)?;
        self.skip.set(skip);
        Ok(self)
    }

    /// The current skip setting.
    pub fn skip(&self) -> &OptionalValue<i64> {
        &self.skip
    }

    /// Unsets the skip.
    pub fn reset_skip(&mut self) -> &mut Self {
        self.skip.reset();
        self
    }

    /// Sets the maximum number of documents to count. Must be non-negative.
    pub fn set_limit(&mut self, limit: i64) -> Result<&mut Self> {
        check_non_negative("limit", limit)?;
        self.limit.set(limit);
        Ok(self)
    }

    /// The current limit setting.
    pub fn limit(&self) -> &OptionalValue<i64> {
        &self.limit
    }

    /// Unsets the limit.
    pub fn reset_limit(&mut self) -> &mut Self {
        self.limit.reset();
        self
    }

    /// Sets the maximum amount of time for this operation to run (server side) in milliseconds.
    /// Must be non-negative.
    pub fn set_max_time_ms(&mut self, max_time_ms: i64) -> Result<&mut Self> {
        check_non_negative(MAX_TIME_MS, max_time_ms)?;
        self.max_time_ms.set(max_time_ms);
        Ok(self)
    }

    /// The current max time setting, in milliseconds.
    pub fn max_time_ms(&self) -> &OptionalValue<i64> {
        &self.max_time_ms
    }

    /// Unsets the max time so that the server default applies.
    pub fn reset_max_time_ms(&mut self) -> &mut Self {
        self.max_time_ms.reset();
        self
    }

    /// Sets the read preference for this operation, overriding the collection's default for this
    /// call only. An invalid read preference is rejected and any previously set value is kept.
    pub fn set_read_preference(&mut self, read_preference: ReadPreference) -> Result<&mut Self> {
        read_preference.validate()?;
        self.read_preference.set(read_preference);
        Ok(self)
    }

    /// The current per-call read preference.
    pub fn read_preference(&self) -> &OptionalValue<ReadPreference> {
        &self.read_preference
    }

    /// Unsets the per-call read preference so that the collection's default applies.
    pub fn reset_read_preference(&mut self) -> &mut Self {
        self.read_preference.reset();
        self
    }
}

impl CommandOptions for CountOptions {
    const COMMAND_NAME: &'static str = "count";

    const FIELDS: &'static [OptionField] = &[
        OptionField::document("skip", "skip"),
        OptionField::document("limit", "limit"),
        OptionField::document("max_time_ms", MAX_TIME_MS),
        OptionField::routing("read_preference"),
    ];

    fn validate(&self) -> Result<()> {
        check_present_non_negative("skip", &self.skip)?;
        check_present_non_negative("limit", &self.limit)?;
        check_present_non_negative(MAX_TIME_MS, &self.max_time_ms)?;
        if let Some(read_preference) = self.read_preference.get() {
            read_preference.validate()?;
        }
        Ok(())
    }

    fn routing_read_preference(&self) -> Option<&ReadPreference> {
        self.read_preference.get()
    }
}
