use super::*;

/// Checks that problem has no prospects with duplicate ids.
fn check_e1000_no_prospects_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.prospects().map(|prospect| &prospect.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated prospect ids".to_string(),
            format!("remove duplicated prospect ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that prospect locations are in valid range.
fn check_e1001_prospect_locations_in_range(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .prospects()
        .filter(|prospect| !is_valid_location(&prospect.location))
        .map(|prospect| prospect.id.clone())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "invalid prospect location".to_string(),
            format!("latitude must be in [-90, 90] and longitude in [-180, 180], check prospects: {}", ids.join(", ")),
        ))
    }
}

/// Checks that reference location is in valid range.
fn check_e1002_reference_location_in_range(ctx: &ValidationContext) -> Result<(), FormatError> {
    match ctx.problem.reference.as_ref() {
        Some(reference) if !is_valid_location(reference) => Err(FormatError::new(
            "E1002".to_string(),
            "invalid reference location".to_string(),
            format!("latitude must be in [-90, 90] and longitude in [-180, 180], got: {reference}"),
        )),
        _ => Ok(()),
    }
}

/// Checks that prospect ids are not empty.
fn check_e1003_no_empty_prospect_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    let amount = ctx.prospects().filter(|prospect| prospect.id.trim().is_empty()).count();

    if amount == 0 {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1003".to_string(),
            "empty prospect id".to_string(),
            format!("specify non empty id for {amount} prospect(s)"),
        ))
    }
}

/// Validates prospects and reference location.
pub fn validate_prospects(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let errors = check_e1000_no_prospects_with_duplicate_ids(ctx)
        .err()
        .into_iter()
        .chain(check_e1001_prospect_locations_in_range(ctx).err())
        .chain(check_e1002_reference_location_in_range(ctx).err())
        .chain(check_e1003_no_empty_prospect_ids(ctx).err())
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
