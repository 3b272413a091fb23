use super::*;
use crate::validation::ValidationContext;
use leads_core::models::problem::ProspectRecord;

/// Validates problem and maps it to a session with loaded prospects, reference and selection.
pub fn map_to_session(problem: &Problem, environment: Environment) -> Result<Session, MultiFormatError> {
    ValidationContext::new(problem).validate()?;

    let mut session = Session::new(environment);

    session.load_prospects(problem.prospects.iter().map(map_prospect).collect()).map_err(FormatError::from)?;

    if let Some(reference) = problem.reference {
        session.set_reference(reference.into()).map_err(FormatError::from)?;
    }

    if let Some(selection) = problem.selection.as_ref() {
        let mut working = session.working_selection();
        for id in selection {
            if !working.contains(id) {
                working.toggle(id);
            }
        }
        session.apply(working);
    }

    Ok(session)
}

fn map_prospect(prospect: &Prospect) -> ProspectRecord {
    ProspectRecord::new(prospect.id.clone(), prospect.location.into())
        .with_contacts(
            prospect.name.as_str(),
            prospect.address.as_str(),
            prospect.phone.as_str(),
            prospect.email.as_str(),
        )
        .with_status(prospect.status.into())
        .with_category(prospect.category.into())
}
