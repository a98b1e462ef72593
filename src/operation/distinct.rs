#[cfg(test)]
mod test;

use serde::Deserialize;

use crate::{
    bson::{doc, Bson, Document},
    coll::{options::DistinctOptions, Namespace},
    error::Result,
    executor::Command,
    operation::{parse_response, Operation},
    options::{append_options, CommandOptions},
    selection_criteria::ReadPreference,
};

pub(crate) struct Distinct {
    ns: Namespace,
    field_name: String,
    query: Document,
    options: Option<DistinctOptions>,
}

impl Distinct {
    pub fn new(
        ns: Namespace,
        field_name: String,
        query: Document,
        options: Option<DistinctOptions>,
    ) -> Self {
        Distinct {
            ns,
            field_name,
            query,
            options,
        }
    }
}

impl Operation for Distinct {
    type O = Vec<Bson>;

    const NAME: &'static str = DistinctOptions::COMMAND_NAME;

    fn build(&mut self) -> Result<Command> {
        let mut body: Document = doc! {
            Self::NAME: self.ns.coll.clone(),
            "key": self.field_name.clone(),
        };

        if !self.query.is_empty() {
            body.insert("query", self.query.clone());
        }

        append_options(&mut body, self.options.as_ref())?;

        Ok(Command::new(Self::NAME, self.ns.db.clone(), body))
    }

    fn handle_response(&self, response: Document) -> Result<Self::O> {
        let response: Response = parse_response(response)?;
        Ok(response.values)
    }

    fn read_preference(&self) -> Option<&ReadPreference> {
        self.options
            .as_ref()
            .and_then(CommandOptions::routing_read_preference)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Response {
    values: Vec<Bson>,
}
