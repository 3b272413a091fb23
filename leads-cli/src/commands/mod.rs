use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod filter;
pub mod generate;
pub mod import;
pub mod route;

use leads_cli::core::session::Session;
use leads_cli::core::utils::Environment;
use leads_cli::extensions::config::{Config, read_config};
use leads_cli::pragmatic::format::problem::PragmaticProblem;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_string_value<T: FromStr<Err = String>>(matches: &ArgMatches, arg_name: &str) -> Result<Option<T>, String> {
    matches.get_one::<String>(arg_name).map(|arg| arg.parse::<T>()).transpose()
}

fn get_config_arg(arg_name: &'static str) -> Arg {
    Arg::new(arg_name).help("Specifies path to tool configuration file").short('c').long(arg_name).required(false)
}

fn get_log_arg(arg_name: &'static str) -> Arg {
    Arg::new(arg_name).help("Specifies whether progress messages are printed").long(arg_name).action(ArgAction::SetTrue)
}

fn get_out_result_arg(arg_name: &'static str) -> Arg {
    Arg::new(arg_name).help("Specifies path to file for result output").short('o').long(arg_name).required(false)
}

fn read_config_file(matches: &ArgMatches, arg_name: &str) -> Result<Config, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|path| open_file(path, "config").and_then(|file| read_config(BufReader::new(file))))
        .unwrap_or_else(|| Ok(Config::default()))
}

/// Creates environment which prints messages into stderr to keep stdout for results.
fn create_environment(is_logging: bool) -> Environment {
    if is_logging { Environment::new(Arc::new(|msg: &str| eprintln!("{msg}"))) } else { Environment::silent() }
}

fn read_session(path: &str, environment: Environment) -> Result<Session, String> {
    BufReader::new(open_file(path, "problem")?)
        .read_pragmatic(environment)
        .map_err(|errors| format!("cannot read problem:\n{}", errors.to_json()))
}

fn get_out_buffer(matches: &ArgMatches, arg_name: &str) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_result = matches.get_one::<String>(arg_name).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_result))
}
