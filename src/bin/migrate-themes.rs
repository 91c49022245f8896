//! Migrate legacy `.theme` files to YAML
//!
//! Usage:
//!   migrate-themes                                   - Migrate with the built-in paths
//!   migrate-themes --config `<file>`                  - Layer a TOML config over the defaults
//!   migrate-themes --source `<dir>` --dest `<dir>`     - Override single settings
//!
//! Exits non-zero when the source directory is missing or holds no theme files. Files that
//! fail individually are reported and skipped.

use clap::{Arg, ArgAction, Command};
use ttyvid_tools::config::{Loader, MigrationConfig};
use ttyvid_tools::error::MigrateError;
use ttyvid_tools::logging;
use ttyvid_tools::migrate::{self, MigrationReport};

fn main() {
    let matches = Command::new("migrate-themes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert line-oriented .theme files into YAML")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .help("Directory holding the .theme files"),
        )
        .arg(
            Arg::new("dest")
                .long("dest")
                .help("Directory the .yaml files are written to"),
        )
        .arg(
            Arg::new("extension")
                .long("extension")
                .help("Extension of the input files (without the dot)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log skipped lines and per-file progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let config = load_config(
        matches.get_one::<String>("config"),
        [
            ("migrate.source_dir", matches.get_one::<String>("source")),
            ("migrate.dest_dir", matches.get_one::<String>("dest")),
            ("migrate.extension", matches.get_one::<String>("extension")),
        ],
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match migrate::migrate_all(&config) {
        Ok(report) => print_summary(&config, &report),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(
    file: Option<&String>,
    overrides: [(&str, Option<&String>); 3],
) -> Result<MigrationConfig, MigrateError> {
    let mut loader = Loader::new();
    if let Some(file) = file {
        loader = loader.with_file(file);
    }
    for (key, value) in overrides {
        loader = loader.set_override_option(key, value.map(String::as_str))?;
    }
    Ok(loader.build()?.migrate)
}

fn print_summary(config: &MigrationConfig, report: &MigrationReport) {
    println!("Found {} theme files to migrate\n", report.processed());
    for outcome in &report.outcomes {
        println!("{}", outcome.line());
    }
    println!(
        "\n✓ Migration complete! {} of {} themes saved to {}/",
        report.succeeded(),
        report.processed(),
        config.dest_dir.display()
    );
}
