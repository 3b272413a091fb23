#[cfg(test)]
#[path = "../../../tests/unit/models/problem/prospects_test.rs"]
mod prospects_test;

use crate::models::common::Coordinate;
use crate::utils::{EngineError, EngineResult};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// A prospect identity type.
pub type ProspectId = String;

/// Specifies a sales pipeline status of the prospect.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProspectStatus {
    /// Nobody contacted the prospect yet.
    #[default]
    New,
    /// A deal is being negotiated.
    Negotiating,
    /// A deal is closed.
    Closed,
}

/// Specifies how well the prospect is qualified.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ProspectCategory {
    /// Might become a customer.
    #[default]
    Potential,
    /// Confirmed to match the ideal customer profile.
    Qualified,
}

/// Represents a sales prospect (lead) at a fixed geo location.
///
/// The record is immutable: the engine reads its id and coordinate only, any selection state is kept
/// outside of it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProspectRecord {
    /// Unique and stable prospect id.
    pub id: ProspectId,
    /// A display name.
    pub name: String,
    /// A postal address.
    pub address: String,
    /// A phone number.
    pub phone: String,
    /// An email.
    pub email: String,
    /// A location of the prospect.
    pub coordinate: Coordinate,
    /// A pipeline status.
    pub status: ProspectStatus,
    /// A qualification category.
    pub category: ProspectCategory,
}

impl ProspectRecord {
    /// Creates a new instance of `ProspectRecord` with empty contact details.
    pub fn new(id: impl Into<ProspectId>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: String::default(),
            address: String::default(),
            phone: String::default(),
            email: String::default(),
            coordinate,
            status: ProspectStatus::default(),
            category: ProspectCategory::default(),
        }
    }

    /// Sets contact details.
    pub fn with_contacts(mut self, name: &str, address: &str, phone: &str, email: &str) -> Self {
        self.name = name.to_string();
        self.address = address.to_string();
        self.phone = phone.to_string();
        self.email = email.to_string();
        self
    }

    /// Sets pipeline status.
    pub fn with_status(mut self, status: ProspectStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets qualification category.
    pub fn with_category(mut self, category: ProspectCategory) -> Self {
        self.category = category;
        self
    }

    /// Checks prospect coordinate.
    pub fn validate(&self) -> EngineResult<()> {
        self.coordinate.validate(Some(&self.id))
    }
}

/// Checks that every id in the list is used only once.
pub fn ensure_unique_ids(records: &[ProspectRecord]) -> EngineResult<()> {
    let mut ids = FxHashSet::default();

    records
        .iter()
        .find(|record| !ids.insert(record.id.as_str()))
        .map_or(Ok(()), |record| Err(EngineError::DuplicateStop { id: record.id.clone() }))
}

impl fmt::Display for ProspectStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self {
            Self::New => "new",
            Self::Negotiating => "negotiating",
            Self::Closed => "closed",
        };

        write!(f, "{value}")
    }
}

impl FromStr for ProspectStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "negotiating" => Ok(Self::Negotiating),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("unknown prospect status: '{value}'")),
        }
    }
}

impl fmt::Display for ProspectCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self {
            Self::Potential => "potential",
            Self::Qualified => "qualified",
        };

        write!(f, "{value}")
    }
}

impl FromStr for ProspectCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "potential" => Ok(Self::Potential),
            "qualified" => Ok(Self::Qualified),
            _ => Err(format!("unknown prospect category: '{value}'")),
        }
    }
}
