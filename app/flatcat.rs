//! Command-line interface for flatcat.
//!
//! Bundles the matching files under a root directory into one text file
//! and prints a completion notice.

use clap::{ArgAction, Parser};
use flatcat::{BundleBuilder, BundleError, BundleOptions, BundleReport, collect_paths, merge, output};
use std::path::PathBuf;
use std::process::exit;

/// flatcat — flatten a source tree into one annotated text file
#[derive(Parser)]
#[command(name = "flatcat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file name, created inside the root directory
    #[arg(short, long, default_value = flatcat::DEFAULT_OUTPUT_NAME)]
    output: String,

    /// Name of the bundler's own source, excluded from the bundle
    /// (default: this executable's file name)
    #[arg(long)]
    self_name: Option<String>,

    /// Follow symlinked directories
    #[arg(long)]
    follow_links: bool,

    /// Only list the files that would be bundled
    #[arg(long, conflicts_with = "json")]
    list: bool,

    /// Print the run report as JSON after bundling
    #[arg(long)]
    json: bool,

    /// Pretty-print the JSON report
    #[arg(short, long, requires = "json")]
    pretty: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> BundleOptions {
        BundleBuilder::new(&self.root)
            .output_name(&self.output)
            .self_name(self.self_name.clone().or_else(own_name))
            .follow_links(self.follow_links)
            .build()
    }
}

/// File name of the running executable, excluded from its own bundle.
fn own_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(feature = "logging")]
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    setup_logging(cli.verbose);
    #[cfg(not(feature = "logging"))]
    let _ = cli.verbose;

    let options = cli.options();
    let result = if cli.list {
        run_list(&options)
    } else {
        run_bundle(&options, cli.json, cli.pretty)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run_list(options: &BundleOptions) -> Result<(), BundleError> {
    for path in collect_paths(options)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_bundle(options: &BundleOptions, json: bool, pretty: bool) -> Result<(), BundleError> {
    let report = merge(options)?;
    println!("{}", output::success_notice(&options.output_name));
    if json {
        println!("{}", report_json(&report, pretty)?);
    }
    Ok(())
}

fn report_json(report: &BundleReport, pretty: bool) -> Result<String, BundleError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
