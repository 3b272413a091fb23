//! Import from a simple csv format logic.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use leads_pragmatic::format::problem::*;
use leads_pragmatic::format::{FormatError, Location};
use serde::Deserialize;
use std::error::Error;
use std::io::{BufReader, Read};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct CsvProspect {
    id: String,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    status: Option<Status>,
    #[serde(default)]
    category: Option<Category>,
}

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}

fn read_prospects<R: Read>(reader: BufReader<R>) -> Result<Vec<Prospect>, Box<dyn Error>> {
    let prospects = read_csv_entries::<CsvProspect, _>(reader)?
        .into_iter()
        .map(|prospect| Prospect {
            id: prospect.id,
            name: prospect.name,
            address: prospect.address,
            phone: prospect.phone,
            email: prospect.email,
            location: Location::new(prospect.lat, prospect.lng),
            status: prospect.status.unwrap_or_default(),
            category: prospect.category.unwrap_or_default(),
        })
        .collect();

    Ok(prospects)
}

fn create_format_error(entity: &str, error: Box<dyn Error>) -> FormatError {
    FormatError::new_with_details(
        "E0000".to_string(),
        format!("cannot read {entity}"),
        format!("check {entity} definition"),
        format!("{error}"),
    )
}

/// Reads problem from csv format: one prospect per row, reference and selection are left empty.
pub fn read_csv_problem<R: Read>(prospects_reader: BufReader<R>) -> Result<Problem, FormatError> {
    let prospects = read_prospects(prospects_reader).map_err(|err| create_format_error("prospects", err))?;

    Ok(Problem { reference: None, prospects, selection: None })
}
