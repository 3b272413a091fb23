#[cfg(test)]
#[path = "../../tests/unit/commands/import_test.rs"]
mod import_test;

use super::*;
use leads_cli::extensions::import::import_problem;
use leads_cli::pragmatic::format::problem::serialize_problem;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "input-file";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_import_app() -> Command {
    Command::new("import")
        .about("Provides the way to import prospects from various formats")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["csv"])
                .index(1),
        )
        .arg(
            Arg::new(INPUT_ARG_NAME)
                .help("Sets input file which contains prospects")
                .short('i')
                .long(INPUT_ARG_NAME)
                .required(true),
        )
        .arg(get_out_result_arg(OUT_RESULT_ARG_NAME))
}

pub fn run_import(matches: &ArgMatches) -> Result<(), String> {
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let input_file =
        matches.get_one::<String>(INPUT_ARG_NAME).map(|path| open_file(path, "input").map(BufReader::new)).transpose()?;

    let problem = import_problem(input_format, input_file).map_err(|err| format!("cannot import problem: '{err}'"))?;

    serialize_problem(get_out_buffer(matches, OUT_RESULT_ARG_NAME)?, &problem)
        .map_err(|err| format!("cannot serialize result problem: '{err}'"))
}
