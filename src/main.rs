// desclint - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing (two mutually exclusive check modes)
// 2. Logging initialisation (debug mode support)
// 3. Catalog loading from its fixed relative path
// 4. Dispatch to the tree walker or the single-sample check
//
// Exit code 0 on full success, 1 on any failure.

use clap::Parser;
use desclint::core::{catalog::Catalog, compare, walker};
use desclint::util;
use desclint::util::constants;
use desclint::util::error::{DescLintError, Result};
use std::path::{Path, PathBuf};

/// desclint - sample description consistency checker.
///
/// Verifies that the catalog, README.md, and README.metadata.json
/// descriptions of each sample agree. On failure every inconsistency is
/// printed to the console and the process exits with a nonzero code.
#[derive(Parser, Debug)]
#[command(name = "desclint", version, about)]
struct Cli {
    /// Check every sample under this collection root.
    #[arg(short = 'a', long = "all", value_name = "ROOT")]
    all: Option<PathBuf>,

    /// Check a single sample folder.
    #[arg(short = 's', long = "single", value_name = "SAMPLE")]
    single: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn run(cli: &Cli) -> Result<()> {
    match (&cli.all, &cli.single) {
        (Some(root), None) => {
            let catalog = load_catalog_for(root)?;
            walker::check_all(root, &catalog)
        }
        (None, Some(sample)) => {
            // The catalog sits two levels above the sample folder, next
            // to the category directories.
            let collection_root = sample.join("..").join("..");
            let catalog = load_catalog_for(&collection_root)?;
            compare::check_sample(&catalog, sample)
        }
        _ => Err(DescLintError::InvalidArguments),
    }
}

fn load_catalog_for(collection_root: &Path) -> Result<Catalog> {
    let path = collection_root.join(constants::CATALOG_RELATIVE_PATH);
    Ok(Catalog::load(&path)?)
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "desclint starting"
    );

    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
