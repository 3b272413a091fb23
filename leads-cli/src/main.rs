//! A command line interface to filter sales prospects around a reference location and plan visiting routes.

#[cfg(test)]
#[path = "../tests/unit/main_test.rs"]
mod main_test;

mod commands;

mod cli {
    use super::commands::filter::{get_filter_app, run_filter};
    use super::commands::generate::{get_generate_app, run_generate};
    use super::commands::import::{get_import_app, run_import};
    use super::commands::route::{get_route_app, run_route};
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Leads Routing")
            .version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about("A command line interface to filter prospects by distance and plan visiting routes")
            .subcommand(get_filter_app())
            .subcommand(get_route_app())
            .subcommand(get_import_app())
            .subcommand(get_generate_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("filter", filter_matches)) => run_filter(filter_matches),
            Some(("route", route_matches)) => run_route(route_matches),
            Some(("import", import_matches)) => run_import(import_matches),
            Some(("generate", generate_matches)) => run_generate(generate_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    cli::run_subcommand(matches);
}
