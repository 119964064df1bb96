use std::fs;
use std::process;

use clap::Parser;

use cf_config_sync::chooser;
use cf_config_sync::cli::Cli;
use cf_config_sync::document::{index_document, merge_document};
use cf_config_sync::error::MergeError;
use cf_config_sync::overrides::OverrideSet;
use cf_config_sync::trajectory;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        process::exit(err.exit_code());
    }
}

/// Everything fatal is caught here before the document file is written.
fn run(cli: &Cli) -> Result<(), MergeError> {
    let overrides = OverrideSet::parse(&cli.sets)?;

    let document_path = cli.document_path();
    if !cli.trajectory_json.is_file() {
        return Err(MergeError::SourceNotFound(cli.trajectory_json.clone()));
    }
    if !document_path.is_file() {
        return Err(MergeError::DocumentNotFound(document_path));
    }

    let positions = trajectory::load_trajectory(&cli.trajectory_json)?;
    if positions.is_empty() {
        log::warn!("no initial positions found in the trajectory JSON; merging with none");
    }
    overrides.validate_against(&positions)?;

    let text = fs::read_to_string(&document_path)?;
    let document = index_document(&text);
    let merged = merge_document(&document, &positions, &overrides, cli.keep_missing);

    if cli.dry_run {
        print!("{merged}");
    } else {
        fs::write(&document_path, &merged)?;
        log::info!("updated {}", document_path.display());
    }

    if cli.run_chooser {
        chooser::try_run_chooser();
    }

    Ok(())
}
