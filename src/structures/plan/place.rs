use async_graphql::SimpleObject;

use crate::structures::{Lookup, LookupStatus};

pub const ADDRESS_UNAVAILABLE: &str = "Address unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl Endpoint {
    pub fn title(&self) -> &'static str {
        match self {
            Endpoint::Start => "Start",
            Endpoint::End => "End",
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct PlanPlace {
    pub status: LookupStatus,
    pub address: Option<String>,
    /// Line shown in the info panel, e.g. "Start: Shivajinagar, Pune".
    pub label: String,
    pub error: Option<String>,
}

impl PlanPlace {
    pub fn from_lookup(endpoint: Endpoint, lookup: &Lookup<String>) -> PlanPlace {
        let text = match lookup {
            Lookup::Pending => "Locating...",
            Lookup::Ready(address) => address.as_str(),
            Lookup::Failed(_) => ADDRESS_UNAVAILABLE,
        };

        PlanPlace {
            status: lookup.status(),
            address: lookup.ready().cloned(),
            label: format!("{}: {text}", endpoint.title()),
            error: lookup.error().map(str::to_string),
        }
    }
}
