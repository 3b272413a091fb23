#[cfg(test)]
#[path = "../../tests/unit/commands/filter_test.rs"]
mod filter_test;

use super::*;
use leads_cli::core::filtering::ProspectCriteria;
use leads_cli::core::models::problem::{ProspectCategory, ProspectStatus};
use leads_cli::core::utils::EngineError;
use leads_cli::pragmatic::format::solution::{create_filter_report, serialize_filter_report};

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const RADIUS_ARG_NAME: &str = "radius";
const STATUS_ARG_NAME: &str = "status";
const CATEGORY_ARG_NAME: &str = "category";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_filter_app() -> Command {
    Command::new("filter")
        .about("Lists prospects around the reference location, nearest first")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(RADIUS_ARG_NAME)
                .help("Specifies radius in kilometers, prospects are only sorted by distance when omitted")
                .short('r')
                .long(RADIUS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STATUS_ARG_NAME)
                .help("Keeps only prospects with given status")
                .long(STATUS_ARG_NAME)
                .required(false)
                .value_parser(["new", "negotiating", "closed"]),
        )
        .arg(
            Arg::new(CATEGORY_ARG_NAME)
                .help("Keeps only prospects of given category")
                .long(CATEGORY_ARG_NAME)
                .required(false)
                .value_parser(["potential", "qualified"]),
        )
        .arg(get_config_arg(CONFIG_ARG_NAME))
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME))
        .arg(get_log_arg(LOG_ARG_NAME))
}

pub fn run_filter(matches: &ArgMatches) -> Result<(), String> {
    let config = read_config_file(matches, CONFIG_ARG_NAME)?;
    let is_logging = matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled();

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let mut session = read_session(problem_path, create_environment(is_logging))?;

    let radius = parse_float_value::<f64>(matches, RADIUS_ARG_NAME, "radius")?.or(config.radius());
    let criteria = ProspectCriteria {
        status: parse_string_value::<ProspectStatus>(matches, STATUS_ARG_NAME)?,
        category: parse_string_value::<ProspectCategory>(matches, CATEGORY_ARG_NAME)?,
    };

    let ranked = match radius {
        Some(radius) => {
            config.check_radius(radius)?;
            session.filter(radius, &criteria)
        }
        None => session
            .sorted_prospects()
            .map(|ranked| ranked.into_iter().filter(|ranked| criteria.matches(&ranked.record)).collect()),
    }
    .map_err(|err| format!("cannot filter prospects: '{err}'"))?;

    let reference = session.reference().ok_or_else(|| EngineError::MissingReference.to_string())?;
    let report = create_filter_report(reference.into(), radius, ranked.as_slice());

    serialize_filter_report(get_out_buffer(matches, OUT_RESULT_ARG_NAME)?, &report)
        .map_err(|err| format!("cannot write filter report: '{err}'"))
}
