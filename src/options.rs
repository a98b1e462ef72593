//! Contains all of the types needed to specify options to MongoDB commands.
//!
//! Every command has a flat options struct (e.g. [`DistinctOptions`]) whose fields are
//! [`OptionalValue`]s. Setters validate eagerly and overwrite any previous value; getters return
//! the field as-is so callers can always tell "not set" from "set to zero":
//!
//! ```rust
//! # use mongodb_command_options::options::{DistinctOptions, ReadPreference};
//! # fn main() -> mongodb_command_options::error::Result<()> {
//! let mut options = DistinctOptions::new();
//! options
//!     .set_max_time_ms(1000)?
//!     .set_read_preference(ReadPreference::Secondary { options: None })?;
//!
//! assert_eq!(options.max_time_ms().value()?, &1000);
//! assert!(options.set_max_time_ms(-1).is_err());
//! assert_eq!(options.max_time_ms().value()?, &1000);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

pub use crate::{
    client::options::*,
    coll::options::*,
    optional::OptionalValue,
    selection_criteria::*,
};
use crate::{
    bson_util::DocumentBuilder,
    error::{Error, Result},
};

/// Where an option ends up when a command is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldPlacement {
    /// Written into the command document under the given wire key.
    Document {
        /// The parameter name the server expects.
        wire_key: &'static str,
    },

    /// Handed to the read preference resolver and never written into the command document.
    Routing,
}

/// Describes one optional field of a command's options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionField {
    /// The Rust-side name of the field.
    pub name: &'static str,

    /// Where the field is sent.
    pub placement: FieldPlacement,
}

impl OptionField {
    pub(crate) const fn document(name: &'static str, wire_key: &'static str) -> Self {
        Self {
            name,
            placement: FieldPlacement::Document { wire_key },
        }
    }

    pub(crate) const fn routing(name: &'static str) -> Self {
        Self {
            name,
            placement: FieldPlacement::Routing,
        }
    }

    /// The wire key of this field, or `None` for routing fields.
    pub fn wire_key(&self) -> Option<&'static str> {
        match self.placement {
            FieldPlacement::Document { wire_key } => Some(wire_key),
            FieldPlacement::Routing => None,
        }
    }
}

/// The optional parameters of one server command.
///
/// `FIELDS` lists every field in canonical order. Document fields are written in exactly that
/// order; routing fields are only ever exposed through
/// [`routing_read_preference`](CommandOptions::routing_read_preference).
pub trait CommandOptions: Serialize {
    /// The name of the server command these options belong to.
    const COMMAND_NAME: &'static str;

    /// The fields of this options type in canonical order.
    const FIELDS: &'static [OptionField];

    /// Checks every present field against its documented domain.
    fn validate(&self) -> Result<()>;

    /// The per-call read preference, if one was set.
    fn routing_read_preference(&self) -> Option<&ReadPreference>;

    /// Appends every present document field to `builder` in canonical order under its wire key.
    /// Absent fields and routing fields contribute nothing. If any check fails, `builder` is left
    /// untouched.
    fn append_to<B: DocumentBuilder + ?Sized>(&self, builder: &mut B) -> Result<()> {
        self.validate()?;

        let mut serialized = crate::bson::to_document(self)?;
        let entries: Vec<_> = Self::FIELDS
            .iter()
            .filter_map(OptionField::wire_key)
            .filter_map(|wire_key| serialized.remove(wire_key).map(|value| (wire_key, value)))
            .collect();

        if let Some(key) = crate::bson_util::first_key(&serialized) {
            return Err(Error::internal(format!(
                "{} options serialized undeclared key {:?}",
                Self::COMMAND_NAME,
                key
            )));
        }

        for (wire_key, value) in entries {
            builder.append_bson(wire_key, value)?;
        }
        Ok(())
    }
}

/// Appends a set of command options to the input document. Passing `None` appends nothing.
pub(crate) fn append_options<T, B>(doc: &mut B, options: Option<&T>) -> Result<()>
where
    T: CommandOptions,
    B: DocumentBuilder + ?Sized,
{
    if let Some(options) = options {
        options.append_to(doc)?;
    }
    Ok(())
}

/// Fills the options struct `$opts` with the value of each listed field from the broader scope
/// `$obj`, unless `$opts` already sets that field.
macro_rules! resolve_options {
    ($obj:expr, $opts:expr, [$( $field:ident ),+] ) => {
        $(
            if let Some(option) = $obj.$field() {
                if !$opts
                    .as_ref()
                    .map(|opts| opts.$field.is_some())
                    .unwrap_or(false)
                {
                    $opts.get_or_insert_with(Default::default).$field = Some(option.clone());
                }
            }
        )+
    };
}
pub(crate) use resolve_options;
