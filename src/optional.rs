use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// A value that a caller may or may not have supplied.
///
/// Every optional command parameter is stored in an `OptionalValue` so that "not set" can always
/// be told apart from "set to the type's zero value": `OptionalValue::present(0)` is present, while
/// `OptionalValue::default()` is absent. Absent values are never written into a command document.
///
/// Domain validation (e.g. rejecting a negative time budget) is the job of the options type that
/// owns the value, not of this container.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionalValue<T> {
    inner: Option<T>,
}

impl<T> Default for OptionalValue<T> {
    fn default() -> Self {
        Self { inner: None }
    }
}

impl<T> OptionalValue<T> {
    /// Creates an absent value.
    pub const fn absent() -> Self {
        Self { inner: None }
    }

    /// Creates a present value.
    pub const fn present(value: T) -> Self {
        Self { inner: Some(value) }
    }

    /// Stores `value`, replacing anything stored previously.
    pub fn set(&mut self, value: T) {
        self.inner = Some(value);
    }

    /// Returns the value to the absent state.
    pub fn reset(&mut self) {
        self.inner = None;
    }

    /// Removes and returns the stored value, leaving this absent.
    pub fn take(&mut self) -> Option<T> {
        self.inner.take()
    }

    /// Whether a value has been set since construction or the last [`reset`](Self::reset).
    pub fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// Whether no value is stored. Used as a `skip_serializing_if` predicate.
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }

    /// Returns a reference to the stored value.
    ///
    /// Reading an absent value is a bug in the calling code; this returns an
    /// [`ErrorKind::PreconditionViolation`](crate::error::ErrorKind::PreconditionViolation)
    /// rather than a default.
    pub fn value(&self) -> Result<&T> {
        self.inner.as_ref().ok_or_else(|| {
            Error::precondition_violation(format!(
                "attempted to read an absent value of type {}",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Consumes this, returning the stored value or a precondition violation if absent.
    pub fn into_value(self) -> Result<T> {
        match self.inner {
            Some(value) => Ok(value),
            None => Err(Error::precondition_violation(format!(
                "attempted to read an absent value of type {}",
                std::any::type_name::<T>()
            ))),
        }
    }

    /// Returns the stored value, if any.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Returns the stored value if present, falling back to `default` from a broader scope
    /// otherwise. `None` means neither scope specified anything and the server default applies.
    pub fn resolve_with<'a>(&'a self, default: Option<&'a T>) -> Option<&'a T> {
        self.inner.as_ref().or(default)
    }

    /// Converts into the equivalent `Option`.
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T: Serialize> Serialize for OptionalValue<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalValue<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod test {
    use super::OptionalValue;
    use crate::error::ErrorKind;

    #[test]
    fn default_is_absent() {
        let value: OptionalValue<i64> = OptionalValue::default();
        assert!(!value.has_value());
        assert!(value.is_absent());
        assert_eq!(value.get(), None);
    }

    #[test]
    fn zero_is_present() {
        let mut value = OptionalValue::absent();
        value.set(0_i64);
        assert!(value.has_value());
        assert_eq!(value.value().unwrap(), &0);

        let mut empty = OptionalValue::absent();
        empty.set(String::new());
        assert!(empty.has_value());
    }

    #[test]
    fn last_write_wins() {
        let mut value = OptionalValue::absent();
        value.set(1_i64);
        value.set(2_i64);
        assert_eq!(value.value().unwrap(), &2);

        let mut once = OptionalValue::absent();
        once.set(7_i64);
        let mut twice = OptionalValue::absent();
        twice.set(7_i64);
        twice.set(7_i64);
        assert_eq!(once, twice);
    }

    #[test]
    fn reading_absent_value_is_a_precondition_violation() {
        let value: OptionalValue<i64> = OptionalValue::absent();
        let error = value.value().unwrap_err();
        assert!(matches!(
            *error.kind,
            ErrorKind::PreconditionViolation { .. }
        ));
        assert!(error.is_caller_contract_violation());
        assert!(value.into_value().is_err());
    }

    #[test]
    fn equality() {
        let absent: OptionalValue<i64> = OptionalValue::absent();
        assert_eq!(absent, OptionalValue::default());
        assert_ne!(absent, OptionalValue::present(0));
        assert_eq!(OptionalValue::present(3_i64), OptionalValue::from(Some(3_i64)));
        assert_ne!(OptionalValue::present(3_i64), OptionalValue::present(4_i64));
    }

    #[test]
    fn copies_are_independent() {
        let mut original = OptionalValue::present(10_i64);
        let copy = original.clone();
        original.set(20);
        assert_eq!(copy.value().unwrap(), &10);
        original.reset();
        assert!(copy.has_value());
        assert!(!original.has_value());
    }

    #[test]
    fn resolve_with_default() {
        let absent: OptionalValue<i64> = OptionalValue::absent();
        assert_eq!(absent.resolve_with(Some(&5)), Some(&5));
        assert_eq!(absent.resolve_with(None), None);

        let present = OptionalValue::present(1_i64);
        assert_eq!(present.resolve_with(Some(&5)), Some(&1));
    }

    #[test]
    fn take_leaves_absent() {
        let mut value = OptionalValue::present("x".to_string());
        assert_eq!(value.take().as_deref(), Some("x"));
        assert!(!value.has_value());
        assert_eq!(value.take(), None);
    }
}
