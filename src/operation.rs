mod count;
mod distinct;

#[cfg(test)]
mod test;

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    bson::{Bson, Document},
    bson_util,
    error::{CommandError, Error, ErrorKind, Result},
    executor::Command,
    selection_criteria::ReadPreference,
};

pub(crate) use count::Count;
pub(crate) use distinct::Distinct;

/// A trait modeling the behavior of a server side operation.
pub(crate) trait Operation {
    /// The output type of this operation.
    type O;

    /// The name of the server side command associated with this operation.
    const NAME: &'static str;

    /// Returns the command that should be sent to the server as part of this operation.
    fn build(&mut self) -> Result<Command>;

    /// Interprets the server response to the command.
    fn handle_response(&self, response: Document) -> Result<Self::O>;

    /// The read preference set on this operation's options, if any.
    fn read_preference(&self) -> Option<&ReadPreference>;
}

/// A response to a command with a body shaped deserialized to a `T`.
#[derive(Deserialize, Debug)]
pub(crate) struct CommandResponse<T> {
    pub(crate) ok: Bson,

    #[serde(flatten)]
    pub(crate) body: T,
}

impl<T: DeserializeOwned> CommandResponse<T> {
    /// Whether the command succeeeded or not (i.e. if this response is ok: 1).
    pub(crate) fn is_success(&self) -> bool {
        bson_util::get_int(&self.ok) == Some(1)
    }
}

/// The body of a response to a command that failed.
#[derive(Deserialize, Debug)]
pub(crate) struct CommandErrorBody {
    #[serde(rename = "errorLabels")]
    pub(crate) error_labels: Option<Vec<String>>,

    #[serde(flatten)]
    pub(crate) command_error: CommandError,
}

impl From<CommandErrorBody> for Error {
    fn from(command_error_response: CommandErrorBody) -> Error {
        Error::new(
            ErrorKind::Command(command_error_response.command_error),
            command_error_response.error_labels,
        )
    }
}

/// Turns a raw reply into `T`, surfacing `ok: 0` replies as command errors.
pub(crate) fn parse_response<T: DeserializeOwned + Debug>(response: Document) -> Result<T> {
    let ok = response.get("ok").and_then(bson_util::get_int);
    if ok != Some(1) {
        return match bson::from_document::<CommandErrorBody>(response) {
            Ok(error_body) => Err(error_body.into()),
            Err(_) => Err(Error::invalid_response(
                "command failed but the reply did not contain an error",
            )),
        };
    }

    let response: CommandResponse<T> =
        bson::from_document(response).map_err(|e| Error::invalid_response(e.to_string()))?;
    debug_assert!(response.is_success());
    Ok(response.body)
}
