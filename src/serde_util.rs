use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

use crate::{
    bson::Bson,
    bson_util::get_u64,
    optional::OptionalValue,
    selection_criteria::ReadPreference,
};

pub(crate) mod duration_option_as_int_seconds {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        val: &Option<Duration>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        match val {
            Some(duration) if duration.as_secs() > i32::MAX as u64 => {
                serializer.serialize_i64(duration.as_secs() as i64)
            }
            Some(duration) => serializer.serialize_i32(duration.as_secs() as i32),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(
        deserializer: D,
    ) -> std::result::Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}

/// Deserializes an optional integer option that must not be negative, e.g. `maxTimeMS` or `skip`.
/// Configuration documents go through the same domain check as the setters.
pub(crate) fn deserialize_non_negative_i64<'de, D>(
    deserializer: D,
) -> std::result::Result<OptionalValue<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        Some(value) if value < 0 => Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            value
        ))),
        value => Ok(OptionalValue::from(value)),
    }
}

/// Deserializes a per-call read preference, rejecting one that fails
/// [`ReadPreference::validate`].
pub(crate) fn deserialize_valid_read_preference<'de, D>(
    deserializer: D,
) -> std::result::Result<OptionalValue<ReadPreference>, D::Error>
where
    D: Deserializer<'de>,
{
    let read_preference = Option::<ReadPreference>::deserialize(deserializer)?;
    if let Some(ref read_preference) = read_preference {
        read_preference
            .validate()
            .map_err(|e| serde::de::Error::custom(e.to_string()))?;
    }
    Ok(OptionalValue::from(read_preference))
}

pub(crate) fn deserialize_u64_from_bson_number<'de, D>(
    deserializer: D,
) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let bson = Bson::deserialize(deserializer)?;
    get_u64(&bson).ok_or_else(|| {
        serde::de::Error::custom(format!("could not deserialize u64 from {:?}", bson))
    })
}
