#[cfg(test)]
mod test;

use serde::Deserialize;

use crate::{
    bson::{doc, Document},
    coll::{options::CountOptions, Namespace},
    error::Result,
    executor::Command,
    operation::{parse_response, Operation},
    options::{append_options, CommandOptions},
    selection_criteria::ReadPreference,
    serde_util,
};

pub(crate) struct Count {
    ns: Namespace,
    query: Document,
    options: Option<CountOptions>,
}

impl Count {
    pub fn new(ns: Namespace, query: Document, options: Option<CountOptions>) -> Self {
        Count { ns, query, options }
    }
}

impl Operation for Count {
    type O = u64;

    const NAME: &'static str = CountOptions::COMMAND_NAME;

    fn build(&mut self) -> Result<Command> {
        let mut body = doc! {
            Self::NAME: self.ns.coll.clone(),
        };

        if !self.query.is_empty() {
            body.insert("query", self.query.clone());
        }

        append_options(&mut body, self.options.as_ref())?;

        Ok(Command::new(Self::NAME, self.ns.db.clone(), body))
    }

    fn handle_response(&self, response: Document) -> Result<Self::O> {
        let response: Response = parse_response(response)?;
        Ok(response.n)
    }

    fn read_preference(&self) -> Option<&ReadPreference> {
        self.options
            .as_ref()
            .and_then(CommandOptions::routing_read_preference)
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    #[serde(deserialize_with = "serde_util::deserialize_u64_from_bson_number")]
    n: u64,
}
