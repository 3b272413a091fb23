use super::*;

parameterized_test! {can_validate_coordinate, (latitude, longitude, expected), {
    assert_eq!(Coordinate::new(latitude, longitude).is_valid(), expected);
}}

can_validate_coordinate! {
    case01_origin: (0., 0., true),
    case02_upper_bounds: (90., 180., true),
    case03_lower_bounds: (-90., -180., true),
    case04_latitude_too_big: (90.0001, 0., false),
    case05_longitude_too_small: (0., -180.0001, false),
    case06_nan: (f64::NAN, 0., false),
    case07_infinity: (0., f64::INFINITY, false),
}

#[test]
fn can_report_owner_of_invalid_coordinate() {
    let owner = "42".to_string();

    let result = Coordinate::new(100., 10.).validate(Some(&owner));

    assert_eq!(result, Err(EngineError::InvalidCoordinate { id: Some(owner), latitude: 100., longitude: 10. }));
}

#[test]
fn can_create_coordinate_with_validation() {
    assert_eq!(Coordinate::try_new(-25.4, -49.2), Ok(Coordinate::new(-25.4, -49.2)));
    assert!(matches!(Coordinate::try_new(-91., 0.), Err(EngineError::InvalidCoordinate { id: None, .. })));
}

#[test]
fn can_format_coordinate_as_lat_lng_pair() {
    assert_eq!(Coordinate::new(-25.4284, -49.2733).to_string(), "-25.4284,-49.2733");
}
