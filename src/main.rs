//! downhill CLI - convert one Markdown file into an HTML page

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use downhill::{EmphasisMode, Options, page};

/// Convert a Markdown file into a standalone HTML page.
#[derive(Parser)]
#[command(name = "downhill", version, about)]
struct Cli {
    /// Markdown source, or `-` for stdin.
    input: PathBuf,

    /// HTML destination, or `-` for stdout.
    output: PathBuf,

    /// Leave `[text](url)` and `![alt](url)` as plain text.
    #[arg(long)]
    no_links: bool,

    /// How emphasis markers pair up.
    #[arg(long, value_enum, env = "DOWNHILL_EMPHASIS", default_value_t = EmphasisArg::Toggle)]
    emphasis: EmphasisArg,

    /// Log conversion progress.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmphasisArg {
    Toggle,
    Nested,
}

impl From<EmphasisArg> for EmphasisMode {
    fn from(arg: EmphasisArg) -> Self {
        match arg {
            EmphasisArg::Toggle => EmphasisMode::Toggle,
            EmphasisArg::Nested => EmphasisMode::Nested,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `-` output stays clean.
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = Options {
        links: !cli.no_links,
        emphasis: cli.emphasis.into(),
    };

    if let Err(err) = page::convert_file(&cli.input, &cli.output, &options) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
