//! dxf2svg command line tool
//!
//! Converts one DXF drawing into one SVG document.

use anyhow::{Context, Result};
use clap::Parser;
use dxf2svg::{convert, convert_reader, init_logging, write_svg, Config, LogFormat, ViewBoxMode};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stand-in path for stdin and stdout.
const STDIO: &str = "-";

#[derive(Parser, Debug)]
#[command(
    name = "dxf2svg",
    about = "Convert DXF drawings to SVG",
    long_about = "Convert DXF drawings to SVG.\n\
                  \n\
                  LINE, ARC, CIRCLE, LWPOLYLINE and POLYLINE entities are read. Lines and arcs\n\
                  that share endpoints are joined into continuous paths; closed loops end in Z.",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")")
)]
struct Args {
    /// DXF file to convert, `-` for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// SVG file to write, `-` for stdout [default: INPUT with .svg extension]
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Config file (JSON or TOML) [default: per-user config.toml if present]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fit the view box to the drawing instead of the configured page
    #[arg(long)]
    fit: bool,

    /// Space around the drawing in fit mode
    #[arg(long, value_name = "UNITS")]
    margin: Option<f64>,

    /// Decimal places for every number written
    #[arg(long, value_name = "N")]
    precision: Option<usize>,

    /// Leave CIRCLE entities out of the output
    #[arg(long)]
    no_circles: bool,

    /// Print conversion statistics as JSON on stdout
    #[arg(long)]
    report: bool,

    /// Emit log events as JSON
    #[arg(long)]
    log_json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Show detailed processing information
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None if is_stdio(&self.input) => PathBuf::from(STDIO),
            None => self.input.with_extension("svg"),
        }
    }

    /// Loads the config file, then layers command line overrides on top.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => match Config::default_path().filter(|p| p.exists()) {
                Some(path) => {
                    debug!("Using config {}", path.display());
                    Config::load_from_file(&path)
                        .with_context(|| format!("Failed to load config {}", path.display()))?
                }
                None => Config::default(),
            },
        };

        if self.fit {
            config.page.mode = ViewBoxMode::Fit;
        }
        if let Some(margin) = self.margin {
            config.page.margin = margin;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if self.no_circles {
            config.import.include_circles = false;
        }

        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn main() -> Result<()> {
    let args = Args::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(args.log_level(), format)?;

    let config = args.config()?;

    let conversion = if is_stdio(&args.input) {
        convert_reader(&mut io::stdin().lock(), &config)?
    } else {
        convert(&args.input, &config)?
    };

    let output = args.output_path();
    if is_stdio(&output) {
        write_svg(&conversion, &config, BufWriter::new(io::stdout().lock()))?;
    } else {
        let file = File::create(&output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        write_svg(&conversion, &config, BufWriter::new(file))?;
        info!("Wrote {}", output.display());

        if args.report {
            let stats = serde_json::to_string_pretty(&conversion.stats())
                .context("Failed to serialize report")?;
            println!("{stats}");
        }
    }

    Ok(())
}
