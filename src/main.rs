//! clear-package-json CLI
//!
//! Entry point for the `clear-package-json` command-line tool.

use clap::Parser;
use clear_package_json::config::{discover_config, load_config_file, DiscoveredConfig};
use clear_package_json::manifest::{read_manifest, to_pretty_json, write_manifest};
use clear_package_json::{clear_fields, resolve_fields, ConfigError};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "clear-package-json")]
#[command(about = "Remove configured fields from a package.json", version)]
struct Cli {
    /// Input package.json file
    input: PathBuf,

    /// Fields to remove; overrides any clean-publish config
    #[arg(long, num_args = 0.., value_name = "NAME")]
    fields: Option<Vec<String>>,

    /// Output file name (defaults to stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Path to a clean-publish config file (default: searched upward from
    /// the current directory)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Resolve which fields to remove
    let resolved = match resolve_fields(cli.fields, || lookup_config(cli.config)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    // Read the input manifest
    let manifest = match read_manifest(&cli.input) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let cleaned = clear_fields(&manifest, &resolved.fields);

    // Output
    match cli.output {
        Some(path) => {
            if let Err(e) = write_manifest(&path, &cleaned) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
        }
        None => match to_pretty_json(&cleaned) {
            Ok(json) => print!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        },
    }
}

/// Config lookup for the resolver: an explicit path loads that file,
/// otherwise discovery walks upward from the current directory.
fn lookup_config(explicit: Option<PathBuf>) -> Result<Option<DiscoveredConfig>, ConfigError> {
    match explicit {
        Some(path) => load_config_file(&path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            discover_config(&cwd)
        }
    }
}
