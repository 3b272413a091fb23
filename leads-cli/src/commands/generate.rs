#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use leads_cli::extensions::generate::generate_problem;
use leads_cli::pragmatic::format::Location;
use leads_cli::pragmatic::format::problem::serialize_problem;
use leads_cli::pragmatic::validation::ValidationContext;

const CENTER_ARG_NAME: &str = "center";
const PROSPECTS_SIZE_ARG_NAME: &str = "prospects";
const AREA_SIZE_ARG_NAME: &str = "area-size";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate prospects around a location for testing")
        .arg(
            Arg::new(CENTER_ARG_NAME)
                .help("Specifies reference location as 'lat,lng'")
                .long(CENTER_ARG_NAME)
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new(PROSPECTS_SIZE_ARG_NAME)
                .help("Amount of prospects in generated problem")
                .short('n')
                .long(PROSPECTS_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(AREA_SIZE_ARG_NAME)
                .help("Half side size of prospect distribution bounding box in kilometers")
                .short('a')
                .long(AREA_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to get the same problem on each run")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME))
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let center = matches
        .get_one::<String>(CENTER_ARG_NAME)
        .ok_or_else(|| "center is not specified".to_string())
        .and_then(|center| parse_location(center.as_str()))?;
    let prospects_size = parse_int_value::<usize>(matches, PROSPECTS_SIZE_ARG_NAME, "prospects size")?
        .ok_or("prospects size is not specified")?;
    let area_size = parse_float_value::<f64>(matches, AREA_SIZE_ARG_NAME, "area size")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let problem = generate_problem(center, prospects_size, area_size, seed)
        .map_err(|err| format!("cannot generate problem: '{err}'"))?;

    ValidationContext::new(&problem)
        .validate()
        .map_err(|errors| format!("generated problem has some validation errors:\n{errors}"))?;

    serialize_problem(get_out_buffer(matches, OUT_RESULT_ARG_NAME)?, &problem)
        .map_err(|err| format!("cannot serialize as pragmatic problem: '{err}'"))
}

fn parse_location(value: &str) -> Result<Location, String> {
    let coordinates = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot parse location '{value}': '{err}'"))?;

    match coordinates.as_slice() {
        &[lat, lng] => Ok(Location::new(lat, lng)),
        _ => Err(format!("location should be specified as 'lat,lng', got: '{value}'")),
    }
}
