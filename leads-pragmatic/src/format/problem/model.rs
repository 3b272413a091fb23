use super::*;
use leads_core::models::problem::{ProspectCategory, ProspectStatus};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A sales pipeline status of the prospect.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Nobody contacted the prospect yet.
    #[default]
    New,
    /// A deal is being negotiated.
    Negotiating,
    /// A deal is closed.
    Closed,
}

/// A qualification category of the prospect.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Might become a customer.
    #[default]
    Potential,
    /// Confirmed to match the ideal customer profile.
    Qualified,
}

impl From<Status> for ProspectStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::New => ProspectStatus::New,
            Status::Negotiating => ProspectStatus::Negotiating,
            Status::Closed => ProspectStatus::Closed,
        }
    }
}

impl From<ProspectStatus> for Status {
    fn from(status: ProspectStatus) -> Self {
        match status {
            ProspectStatus::New => Status::New,
            ProspectStatus::Negotiating => Status::Negotiating,
            ProspectStatus::Closed => Status::Closed,
        }
    }
}

impl From<Category> for ProspectCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Potential => ProspectCategory::Potential,
            Category::Qualified => ProspectCategory::Qualified,
        }
    }
}

impl From<ProspectCategory> for Category {
    fn from(category: ProspectCategory) -> Self {
        match category {
            ProspectCategory::Potential => Category::Potential,
            ProspectCategory::Qualified => Category::Qualified,
        }
    }
}

/// Specifies a prospect.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Prospect {
    /// A unique prospect id.
    pub id: String,
    /// A display name.
    pub name: String,
    /// A postal address.
    #[serde(default)]
    pub address: String,
    /// A phone number.
    #[serde(default)]
    pub phone: String,
    /// An email.
    #[serde(default)]
    pub email: String,
    /// A prospect location.
    pub location: Location,
    /// A pipeline status, default is new.
    #[serde(default)]
    pub status: Status,
    /// A qualification category, default is potential.
    #[serde(default)]
    pub category: Category,
}

/// A problem: prospects, optional reference location and optional initial selection.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Problem {
    /// A reference location, usually current device location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Location>,
    /// A list of prospects.
    pub prospects: Vec<Prospect>,
    /// Ids of prospects selected for a route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Vec<String>>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes `problem` in json from `writer`.
pub fn serialize_problem<W: Write>(writer: BufWriter<W>, problem: &Problem) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
