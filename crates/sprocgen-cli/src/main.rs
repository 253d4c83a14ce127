mod args;
mod error;
mod loader;
mod logging;
mod output;
mod prompt;

use crate::{
    args::Args,
    error::CliError,
    loader::ColumnSource,
    output::{WriteReport, write_files},
    prompt::{Inputs, LineSource},
};
use clap::Parser;
use rustyline::DefaultEditor;
use sprocgen::{
    build::ProcedureBuilder,
    config::Config,
    schema::{ColumnDescriptor, TableSchema},
};
use std::process::ExitCode;
use time::{Date, OffsetDateTime};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    // before the runtime starts: the local offset is unavailable once other
    // threads exist
    let today = today();

    match run(args, today) {
        Ok(report) => {
            println!(
                "\nDone: generated {} file(s) ({} skipped).",
                report.written.len(),
                report.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\nError: {e}");
            ExitCode::FAILURE
        }
    }
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

fn run(args: Args, today: Date) -> Result<WriteReport, CliError> {
    let config = Config::load_or_default(&args.config)?;
    tracing::info!(config = %args.config.display(), "configuration loaded");

    let mut editor = if args.no_prompt {
        None
    } else {
        println!("--- CRUD stored procedure generator ---");
        Some(DefaultEditor::new().map_err(prompt::PromptError::from)?)
    };
    let inputs = Inputs::resolve(
        &args,
        &config,
        editor.as_mut().map(|e| e as &mut dyn LineSource),
    )?;

    let source = match (&args.from_json, &inputs.connection) {
        (Some(path), _) => ColumnSource::JsonFile(path.clone()),
        (None, Some(connection)) => ColumnSource::Database {
            connection_string: connection.clone(),
        },
        (None, None) => return Err(CliError::MissingInput("connection string")),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let excluded = config.excluded_columns_csv();
    let columns = runtime.block_on(source.load(&inputs.schema, &inputs.table, &excluded))?;

    let table = TableSchema::new(&inputs.schema, &inputs.table, columns)?;
    println!("Schema loaded: {} column(s).", table.columns().len());
    log_roles(&table);

    let builder = ProcedureBuilder::new(table, inputs.author, args.date.unwrap_or(today));
    let files = builder.generate_all();

    write_files(&inputs.output_dir, &files, |path| {
        println!("Generated: {}", path.display());
    })
}

fn log_roles(table: &TableSchema) {
    let names = |columns: Vec<&ColumnDescriptor>| {
        columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    tracing::info!(
        table = %table.qualified_name(),
        primary_key = %names(table.primary_key_columns()),
        writable = %names(table.writable_columns()),
        "columns classified"
    );
}
