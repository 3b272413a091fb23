use crate::models::problem::{ProspectCategory, ProspectRecord, ProspectStatus};

/// Specifies optional attribute filters applied together with the radius.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProspectCriteria {
    /// Keep only prospects with this status.
    pub status: Option<ProspectStatus>,
    /// Keep only prospects of this category.
    pub category: Option<ProspectCategory>,
}

impl ProspectCriteria {
    /// Returns true if the record matches all specified attributes.
    pub fn matches(&self, record: &ProspectRecord) -> bool {
        self.status.is_none_or(|status| status == record.status)
            && self.category.is_none_or(|category| category == record.category)
    }
}
