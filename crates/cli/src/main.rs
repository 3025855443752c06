//! CLI tool for turning a Markdown file into an impress.js presentation.

use anyhow::{Context, Result};
use clap::Parser;
use impress_core::{Assets, Config, Pipeline};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Convert Markdown slides separated by `---` into an impress.js presentation.
///
/// The HTML document is written to stdout.
#[derive(Parser, Debug)]
#[command(name = "impressmd")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Markdown file to process (default: stdin)
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// CSS filename (default: impress.css)
    #[arg(long = "css", value_name = "PATH")]
    css: Option<String>,

    /// impress.js filename (default: impress.js)
    #[arg(long = "js", value_name = "PATH")]
    js: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Build the process configuration from the parsed flags.
    fn config(&self) -> Config {
        let mut assets = Assets::new();
        assets.stylesheet = self.css.clone();
        assets.script = self.js.clone();

        let config = Config::new().with_assets(assets);
        match &self.file {
            Some(path) => config.with_input(path),
            None => config,
        }
    }
}

/// Long flags that are also accepted with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["css", "js"];

/// Rewrite `-css`/`-js` (and `-css=x`) to their `--` form so clap accepts them.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut seen_terminator = false;

    args.into_iter()
        .map(|arg| {
            if seen_terminator {
                return arg;
            }

            let Some(text) = arg.to_str() else {
                return arg;
            };

            if text == "--" {
                seen_terminator = true;
                return arg;
            }

            let is_legacy = text.strip_prefix('-').is_some_and(|rest| {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                SINGLE_DASH_LONG_FLAGS.contains(&name)
            });

            if is_legacy {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

fn main() {
    let args = Args::parse_from(normalize_legacy_flags(std::env::args_os()));

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Read the Markdown input, build the presentation, and write it to stdout.
fn run(args: &Args) -> Result<()> {
    let config = args.config();
    let pipeline = Pipeline::new(config.assets().clone());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let slides = match &config.input {
        Some(path) => {
            log::debug!("Reading {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            pipeline.run(BufReader::new(file), &mut out)
        }
        None => {
            log::debug!("Reading stdin");
            pipeline.run(BufReader::new(io::stdin()), &mut out)
        }
    }
    .context("Failed to build presentation")?;

    out.flush().context("Failed to write output")?;
    log::debug!("Done: {} slides", slides);

    Ok(())
}
