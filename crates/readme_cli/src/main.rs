//! CLI smoke entry for `readme_core`.
//!
//! # Responsibility
//! - Verify core linkage with deterministic `ping`/`version` output.
//! - Render a JSON element array from disk to stdout for quick checks.

use clap::Parser;
use log::info;
use readme_core::{render, Document, RenderContext};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of elements to render
    document: Option<PathBuf>,

    /// Badge and banner colour theme
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,
}

impl Args {
    /// Requested level, or the build-mode default.
    fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(readme_core::default_log_level())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        if let Err(err) = readme_core::init_logging(args.log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let Some(path) = args.document else {
        println!("readme_core ping={}", readme_core::ping());
        println!("readme_core version={}", readme_core::core_version());
        return ExitCode::SUCCESS;
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read `{}`: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };
    let decoded = match Document::from_json_str_lossy(&text) {
        Ok(decoded) => decoded,
        Err(err) => {
            eprintln!("`{}` is not valid JSON: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };
    for skipped in &decoded.skipped {
        eprintln!("skipped element #{}: {}", skipped.index, skipped.reason);
    }

    let ctx = RenderContext::new(&args.theme);
    let markdown = render(&decoded.document, &ctx);
    info!(
        "event=cli_render module=cli status=ok elements={} skipped={}",
        decoded.document.len(),
        decoded.skipped.len()
    );
    print!("{markdown}");
    ExitCode::SUCCESS
}
