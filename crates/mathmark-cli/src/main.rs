//! Command-line interface for mathmark.
//!
//! Usage:
//!   mathmark segment [FILE] [--format text|json]   - print the span sequence
//!   mathmark check [FILE]                          - verify lossless segmentation
//!   mathmark render [FILE] [--color COLOR]         - typeset equations with the configured program
//!
//! FILE defaults to stdin.

mod command_typesetter;
mod output;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mathmark_config::{Config, OutputFormat};
use mathmark_engine::{Renderer, TextColor, reconstruct, segment};
use std::io::Read;
use std::path::{Path, PathBuf};

use command_typesetter::CommandTypesetter;

#[derive(Parser)]
#[command(name = "mathmark", version)]
#[command(about = "Split text with style markers and LaTeX equations into typed spans", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/mathmark/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the span sequence
    Segment {
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
        /// Output format (overrides the config file)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
    /// Verify that re-inserting delimiters reproduces the input
    Check {
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
    },
    /// Typeset equations with the configured external program, print JSON
    Render {
        #[arg(value_name = "FILE")]
        path: Option<PathBuf>,
        /// Equation color: #rrggbb, #rgb, gray:<g> or r,g,b
        #[arg(long)]
        color: Option<TextColor>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (config, config_path) = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Segment { path, format } => {
            let input = read_input(path.as_deref())?;
            let spans = segment(&input);
            let out = match format.unwrap_or(config.format) {
                OutputFormat::Text => output::format_text(&spans),
                OutputFormat::Json => output::format_json(&spans)? + "\n",
            };
            print!("{out}");
        }
        Commands::Check { path } => {
            let input = read_input(path.as_deref())?;
            let spans = segment(&input);
            if reconstruct(&spans) != input {
                bail!("Segmentation of {} is not lossless", describe(path.as_deref()));
            }
            let equations = spans.iter().filter(|s| s.kind.is_equation()).count();
            println!("ok: {} spans, {equations} equations", spans.len());
        }
        Commands::Render { path, color } => {
            let Some(typesetter) = config.typesetter.clone() else {
                bail!(
                    "No typesetter configured; add a [typesetter] section to {}",
                    config_path.display()
                );
            };
            let input = read_input(path.as_deref())?;
            let spans = segment(&input);

            let mut renderer = Renderer::new(CommandTypesetter::new(typesetter));
            if let Some(color) = color.or(config.color) {
                renderer = renderer.with_color(color);
            }
            let rendered = renderer.render(&spans);
            let failed = rendered
                .iter()
                .filter(|r| r.span.kind.is_equation() && r.artifact.is_none())
                .count();
            if failed > 0 {
                log::warn!("{failed} equation(s) could not be typeset");
            }
            println!("{}", output::format_rendered(&rendered)?);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    // RUST_LOG, when set, takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Loads the config from `path`, or the default location.
fn load_config(path: Option<&Path>) -> Result<(Config, PathBuf)> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    let config = load_config_at(&config_path, path.is_some())?;
    Ok((config, config_path))
}

/// A missing file yields the defaults, unless it was named explicitly.
fn load_config_at(config_path: &Path, explicit: bool) -> Result<Config> {
    let config = Config::load_from_path(config_path)
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

    match config {
        Some(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Ok(config)
        }
        None if explicit => bail!("Config file {} not found", config_path.display()),
        None => Ok(Config::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
}
