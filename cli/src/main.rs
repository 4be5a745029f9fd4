use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;

use asciiart::config::{ENV_CELL_HEIGHT, ENV_CELL_WIDTH, ENV_FONT_FAMILY, ENV_FONT_SIZE, ENV_PATTERN};
use asciiart::{BlockFilter, ConfigError, FilterConfig, FilterError, GridError, RenderConfig};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod transform;

use transform::{Options, Transformer};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("{}: not valid UTF-8", .path.display())]
    Decode { path: PathBuf },
    #[error("stdin/stdout: {0}")]
    Stdio(#[source] io::Error),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("diagram conversion failed: {0}")]
    Convert(#[from] GridError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "asciiart", about = "Render ASCII-art diagrams as SVG")]
struct Cli {
    /// Files or directories to transform; none or `-` reads stdin and writes stdout
    paths: Vec<PathBuf>,

    /// Treat stdin as one diagram instead of a document with diagram blocks; takes no paths
    #[arg(long, conflicts_with_all = ["paths", "check", "keep_originals", "output"])]
    raw: bool,

    /// Output of --raw mode
    #[arg(long, value_enum, default_value_t = Format::Svg, requires = "raw")]
    format: Format,

    /// List files that would change, write nothing; exits non-zero if any would
    #[arg(long)]
    check: bool,

    /// Save `<name>.orig` before rewriting a file
    #[arg(long)]
    keep_originals: bool,

    /// Write results under DIR, mirroring the input layout
    #[arg(long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(long, env = ENV_PATTERN)]
    pattern: Option<String>,

    #[arg(long, env = ENV_CELL_WIDTH)]
    cell_width: Option<i64>,

    #[arg(long, env = ENV_CELL_HEIGHT)]
    cell_height: Option<i64>,

    #[arg(long, env = ENV_FONT_FAMILY)]
    font_family: Option<String>,

    #[arg(long, env = ENV_FONT_SIZE)]
    font_size: Option<u32>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn render_config(&self) -> Result<RenderConfig, ConfigError> {
        let defaults = RenderConfig::default();
        let config = RenderConfig {
            cell_width: self.cell_width.unwrap_or(defaults.cell_width),
            cell_height: self.cell_height.unwrap_or(defaults.cell_height),
            font_family: self.font_family.clone().unwrap_or_else(|| defaults.font_family.clone()),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }

    fn filter_config(&self) -> FilterConfig {
        self.pattern.clone().map_or_else(FilterConfig::default, |pattern| FilterConfig { pattern })
    }

    fn reads_stdin(&self) -> bool {
        self.paths.is_empty() || (self.paths.len() == 1 && self.paths[0].as_os_str() == "-")
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "asciiart failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let render = cli.render_config()?;
    if cli.reads_stdin() {
        let input = io::read_to_string(io::stdin()).map_err(CliError::Stdio)?;
        let output = if cli.raw {
            convert_raw(&input, cli.format, &render)?
        } else {
            let filter = BlockFilter::new(&cli.filter_config())?;
            filter.filter(&input, &render)?.0
        };
        io::stdout().write_all(output.as_bytes()).map_err(CliError::Stdio)?;
        return Ok(ExitCode::SUCCESS);
    }

    let filter = BlockFilter::new(&cli.filter_config())?;
    let options = Options { check: cli.check, keep_originals: cli.keep_originals, output: cli.output.clone() };
    let summary = Transformer::new(&filter, &render, options).run(&cli.paths);
    if !summary.is_success() || (cli.check && summary.changed > 0) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// One diagram in, SVG or drawing JSON out.
fn convert_raw(input: &str, format: Format, render: &RenderConfig) -> Result<String, CliError> {
    Ok(match format {
        Format::Svg => asciiart::text_to_svg(input, render)?,
        Format::Json => asciiart::text_to_drawing(input, render)?.to_json()? + "\n",
    })
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
