use clap::Parser;
use sprocgen::config::CONFIG_FILE;
use std::path::PathBuf;
use time::{Date, macros::format_description};

///
/// Args
///
/// Any value left unset here is prompted for, unless `--no-prompt` is given,
/// in which case the configured default is used.
///

#[derive(Debug, Parser)]
#[command(name = "sprocgen", author, version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// ADO.NET-style SQL Server connection string.
    #[arg(long, env = "SPROCGEN_CONNECTION", hide_env_values = true)]
    pub connection: Option<String>,

    /// Schema that owns the table.
    #[arg(long)]
    pub schema: Option<String>,

    /// Table to generate procedures for.
    #[arg(long)]
    pub table: Option<String>,

    /// Directory the .sql files are written to.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Author stamped into each header (overrides the config file).
    #[arg(long)]
    pub author: Option<String>,

    /// Read column metadata from a JSON file instead of a live database.
    #[arg(long, value_name = "PATH")]
    pub from_json: Option<PathBuf>,

    /// Creation date stamped into each header (YYYY-MM-DD); defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// Never prompt; use flags and configured defaults only.
    #[arg(long)]
    pub no_prompt: bool,

    /// Log progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use time::Month;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["sprocgen"]).unwrap();

        assert_eq!(args.config, PathBuf::from("sprocgen.toml"));
        assert!(args.table.is_none());
        assert!(!args.no_prompt);
    }

    #[test]
    fn parses_full_invocation() {
        let args = Args::try_parse_from([
            "sprocgen",
            "--schema",
            "sales",
            "--table",
            "Customer",
            "--from-json",
            "customer.json",
            "--date",
            "2024-02-29",
            "--no-prompt",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.schema.as_deref(), Some("sales"));
        assert_eq!(args.table.as_deref(), Some("Customer"));
        assert_eq!(args.from_json, Some(PathBuf::from("customer.json")));
        assert_eq!(
            args.date,
            Some(Date::from_calendar_date(2024, Month::February, 29).unwrap())
        );
        assert!(args.no_prompt);
        assert!(args.verbose);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Args::try_parse_from(["sprocgen", "--date", "29/02/2024"]).is_err());
        assert!(Args::try_parse_from(["sprocgen", "--date", "2023-02-29"]).is_err());
    }
}
