use super::cli::{get_app, run_subcommand};
use leads_cli::pragmatic::format::problem::deserialize_problem;
use std::io::BufReader;

const CSV_PROSPECTS_PATH: &str = "../demos/data/prospects.csv";

#[test]
fn can_run_import_subcommand() {
    let tmpfile = tempfile::NamedTempFile::new().unwrap();
    let args = vec![
        "leads-cli",
        "import",
        "csv",
        "--input-file",
        CSV_PROSPECTS_PATH,
        "--out-result",
        tmpfile.path().to_str().unwrap(),
    ];
    let matches = get_app().try_get_matches_from(args).unwrap();

    run_subcommand(matches);

    let problem = deserialize_problem(BufReader::new(tmpfile.as_file())).unwrap();
    assert_eq!(problem.prospects.len(), 5);
}

#[test]
fn can_reject_unknown_subcommand() {
    let result = get_app().try_get_matches_from(vec!["leads-cli", "solve"]);

    assert!(result.is_err());
}
