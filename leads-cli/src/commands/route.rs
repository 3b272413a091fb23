#[cfg(test)]
#[path = "../../tests/unit/commands/route_test.rs"]
mod route_test;

use super::*;
use leads_cli::core::routing::{NavigationLink, TravelMode};
use leads_cli::core::selection::{SelectionSet, WorkingSelection};
use leads_cli::pragmatic::format::solution::PragmaticRoute;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const SELECT_ARG_NAME: &str = "select";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const NAVIGATION_ARG_NAME: &str = "navigation";
const TRAVEL_MODE_ARG_NAME: &str = "travel-mode";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_route_app() -> Command {
    Command::new("route")
        .about("Creates a visiting route through the selected prospects starting at the reference location")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(SELECT_ARG_NAME)
                .help("Specifies prospect ids to visit, overrides selection from the problem")
                .short('s')
                .long(SELECT_ARG_NAME)
                .required(false)
                .num_args(1..),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to file for route output in geo json format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NAVIGATION_ARG_NAME)
                .help("Adds a directions url to the route")
                .long(NAVIGATION_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(TRAVEL_MODE_ARG_NAME)
                .help("Specifies travel mode of directions url")
                .long(TRAVEL_MODE_ARG_NAME)
                .required(false)
                .value_parser(["driving", "walking", "bicycling", "transit"]),
        )
        .arg(get_config_arg(CONFIG_ARG_NAME))
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME))
        .arg(get_log_arg(LOG_ARG_NAME))
}

pub fn run_route(matches: &ArgMatches) -> Result<(), String> {
    let config = read_config_file(matches, CONFIG_ARG_NAME)?;
    let is_logging = matches.get_flag(LOG_ARG_NAME) || config.is_logging_enabled();

    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let mut session = read_session(problem_path, create_environment(is_logging))?;

    if let Some(ids) = matches.get_many::<String>(SELECT_ARG_NAME) {
        let mut working = WorkingSelection::seeded_from(&SelectionSet::new());
        for id in ids {
            if !working.contains(id) {
                working.toggle(id);
            }
        }
        session.apply(working);
    }

    let route = session.create_route().map_err(|err| format!("cannot create route: '{err}'"))?;

    let navigation = if matches.get_flag(NAVIGATION_ARG_NAME) || config.is_navigation_enabled() {
        let travel_mode = match parse_string_value::<TravelMode>(matches, TRAVEL_MODE_ARG_NAME)? {
            Some(travel_mode) => travel_mode,
            None => config.travel_mode()?.unwrap_or_default(),
        };
        NavigationLink::from_route(&route, travel_mode)
    } else {
        None
    };

    if let Some(path) = matches.get_one::<String>(GEO_JSON_ARG_NAME) {
        route.write_geo_json(create_write_buffer(Some(create_file(path, "geo json")?)))?;
    }

    route.write_pragmatic_json(navigation.as_ref(), get_out_buffer(matches, OUT_RESULT_ARG_NAME)?)
}
