use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use editorconf::{DirCache, Query, DEFAULT_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "editorconf")]
#[command(about = "Print the EditorConfig properties that apply to files")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Files to resolve properties for
    #[arg(required_unless_present = "print_version")]
    files: Vec<String>,

    /// EditorConfig file name to search for
    #[arg(short = 'f', value_name = "NAME", default_value = DEFAULT_NAME)]
    config_name: String,

    /// EditorConfig spec version to emulate
    #[arg(short = 'b', value_name = "VERSION")]
    emulate_version: Option<String>,

    /// Print version information
    #[arg(short = 'v', long = "version")]
    print_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_version {
        println!(
            "EditorConfig Rust editorconf, Version {}",
            env!("CARGO_PKG_VERSION")
        );
        return ExitCode::SUCCESS;
    }

    let mut query = Query::new()
        .with_config_name(cli.config_name)
        .with_cache(Arc::new(DirCache::new()));
    if let Some(version) = cli.emulate_version {
        query = query.with_version(version);
    }

    let mut out = String::new();
    for file in &cli.files {
        match query.find(file) {
            Ok(mut section) => {
                if cli.files.len() > 1 {
                    section.set_name(file.as_str());
                }
                out.push_str(&section.to_string());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        }
    }
    print!("{out}");

    ExitCode::SUCCESS
}
