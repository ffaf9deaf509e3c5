//! `colorgen` command line.
//!
//! ```text
//! colorgen generate scheme.Xresources kitty.conf -o ~/.config/kitty/colors.conf
//! colorgen inject scheme.json --config targets.ini
//! colorgen preview scheme.yaml
//! colorgen templates
//! ```

mod commands;
mod config;
mod preview;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colorgen::{Colorscheme, Format};
use colorgen_render::{MiniJinjaEngine, TemplateRegistry};
use log::LevelFilter;

use crate::config::TargetConfig;

#[derive(Debug, Parser)]
#[command(name = "colorgen", version, about = "Render terminal colorschemes into application configs")]
struct Cli {
    /// Input format (json, yaml, xresources); detected from the extension by default
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<Format>,

    /// Extra template directory, searched before the built-in templates
    #[arg(short = 't', long = "templates", global = true, value_name = "DIR")]
    template_dirs: Vec<PathBuf>,

    /// More logging (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one template and print it
    Generate {
        colorscheme: PathBuf,
        /// Template name, or a template file written as a path (`./x`, `/x`)
        template: String,
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Render every configured target and write it in place
    Inject {
        colorscheme: PathBuf,
        /// Target config [default: <config dir>/colorgen/targets.ini]
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Show what would be written without touching any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Show the colorscheme as terminal swatches
    Preview { colorscheme: PathBuf },
    /// List available template names
    Templates,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `-q` gives errors only, each `-v` one level more than warnings.
/// `RUST_LOG` still wins when set.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate {
            colorscheme,
            template,
            output,
        } => {
            let scheme = load_scheme(&colorscheme, cli.format)?;
            let engine = MiniJinjaEngine::with_registry(build_registry(&cli.template_dirs, &[])?);
            commands::generate(&engine, &scheme, &template, output.as_deref(), &mut out)
        }
        Command::Inject {
            colorscheme,
            config,
            dry_run,
        } => {
            let config_path = match config {
                Some(path) => path,
                None => TargetConfig::default_path()
                    .context("no config directory on this platform; pass --config")?,
            };
            let targets = TargetConfig::load(&config_path)?;
            let scheme = load_scheme(&colorscheme, cli.format)?;
            let registry = build_registry(&cli.template_dirs, &targets.template_dirs)?;
            let engine = MiniJinjaEngine::with_registry(registry);

            let written = commands::inject(&engine, &scheme, &targets.targets, dry_run)?;
            if !dry_run {
                log::info!("injected {} target(s)", written.len());
            }
            Ok(())
        }
        Command::Preview { colorscheme } => {
            let scheme = load_scheme(&colorscheme, cli.format)?;
            preview::preview(&scheme, &mut out)
        }
        Command::Templates => {
            let registry = build_registry(&cli.template_dirs, &[])?;
            commands::templates(&registry, &mut out)
        }
    }
}

fn load_scheme(path: &Path, format: Option<Format>) -> Result<Colorscheme> {
    colorgen::load_file(path, format)
        .with_context(|| format!("failed to load colorscheme {}", path.display()))
}

/// Command-line directories first, then config directories, then the
/// user template directory if it exists, then the built-ins.
fn build_registry(cli_dirs: &[PathBuf], config_dirs: &[PathBuf]) -> Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::with_builtins();
    for dir in cli_dirs.iter().chain(config_dirs) {
        registry
            .add_template_dir(dir)
            .with_context(|| format!("invalid template directory {}", dir.display()))?;
    }

    if let Some(user_dir) = dirs::config_dir().map(|d| d.join("colorgen").join("templates")) {
        if user_dir.is_dir() {
            log::debug!("using user templates in {}", user_dir.display());
            registry.add_template_dir(&user_dir)?;
        }
    }
    Ok(registry)
}
