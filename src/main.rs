use ddlerd::error::ImportError;
use ddlerd::options::ImportOptions;
use ddlerd::sql::Dialect;
use ddlerd::{import_ddl_with, to_json};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <schema.sql> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>    Output file (default: stdout)");
        eprintln!("  -d, --dialect <name>   auto, generic, postgres, mysql, sqlite, sqlserver (default: auto)");
        eprintln!("  -c, --columns <n>      Entities per placeholder row (default: 4)");
        eprintln!("      --compact          Single-line JSON");
        eprintln!("      --report           Print skipped statements and clauses to stderr");
        process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let mut output_path: Option<PathBuf> = None;
    let mut options = ImportOptions::default();
    let mut pretty = true;
    let mut report = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(PathBuf::from(&args[i]));
                }
            }
            "-d" | "--dialect" => {
                i += 1;
                if i < args.len() {
                    options.dialect = Dialect::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid dialect: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "-c" | "--columns" => {
                i += 1;
                if i < args.len() {
                    options.grid_columns = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid column count: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "--compact" => pretty = false,
            "--report" => report = true,
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = run(&input_path, output_path.as_deref(), &options, pretty, report) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(
    input_path: &Path,
    output_path: Option<&Path>,
    options: &ImportOptions,
    pretty: bool,
    report: bool,
) -> Result<(), ImportError> {
    let input = fs::read_to_string(input_path).map_err(|source| ImportError::Read {
        path: input_path.to_path_buf(),
        source,
    })?;

    let outcome = import_ddl_with(&input, options);

    if report {
        let r = &outcome.report;
        eprintln!(
            "{} tables ({} dialect), {} entities, {} relations, {} junction tables",
            r.tables,
            r.dialect,
            outcome.design.entities.len(),
            outcome.design.relations.len(),
            r.junction_tables.len()
        );
        for reason in &r.skipped {
            eprintln!("  skipped: {}", reason);
        }
    }

    let json = to_json(&outcome.design, pretty)?;

    match output_path {
        Some(path) => fs::write(path, &json).map_err(|source| ImportError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
