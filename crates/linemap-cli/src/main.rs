// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `linemap` CLI entrypoint.
//!
//! ```text
//! linemap check <FILE>                  # validate, report first bad line
//! linemap render <FILE> [-o OUT] [--fix]
//! linemap replay <SCRIPT> [-o OUT]      # JSON action script, e.g. [{"draw":"0 0 1 1 red"},"fix"]
//! linemap config show|init [--force]
//! ```
//!
//! `check` and `render` exit with code 1 when the input has a bad line.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linemap_adapters::SvgAdapter;
use linemap_config_fs::FsConfigStore;
use linemap_core::config::ConfigService;
use linemap_core::settings::SETTINGS_KEY;
use linemap_core::{parse, Action, ParseResult, Session, ViewerSettings};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linemap", author, version, about = "Line Mapper: validate and render line lists")]
struct Args {
    /// Directory holding viewer settings (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a line list and report the segment count or the first bad line
    Check {
        /// Line list, one `x1 y1 x2 y2 color` per line
        file: PathBuf,
    },
    /// Draw a line list and write it as SVG
    Render {
        /// Line list, one `x1 y1 x2 y2 color` per line
        file: PathBuf,
        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fix the drawn lines before rendering
        #[arg(long)]
        fix: bool,
    },
    /// Run a JSON action script through a session and write the final scene as SVG
    Replay {
        /// JSON array of actions: {"draw": "..."}, "clear", "fix", "unfix"
        script: PathBuf,
        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or initialize viewer settings
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective viewer settings as JSON
    Show,
    /// Write default viewer settings
    Init {
        /// Overwrite existing settings
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // `info` unless RUST_LOG says otherwise.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_dir = args.config_dir.as_deref();
    match args.command {
        Command::Check { file } => check(&file),
        Command::Render { file, output, fix } => {
            let settings = viewer_settings(config_dir)?;
            render(&file, output.as_deref(), fix, &settings)
        }
        Command::Replay { script, output } => {
            let settings = viewer_settings(config_dir)?;
            replay(&script, output.as_deref(), &settings)
        }
        Command::Config { action } => match action {
            ConfigCommand::Show => {
                let settings = viewer_settings(config_dir)?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
                Ok(ExitCode::SUCCESS)
            }
            ConfigCommand::Init { force } => config_init(&config_service(config_dir)?, force),
        },
    }
}

fn config_service(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new().context("resolve config dir")?,
    };
    debug!(base = %store.base().display(), "config store");
    Ok(ConfigService::new(store))
}

fn viewer_settings(dir: Option<&Path>) -> Result<ViewerSettings> {
    config_service(dir)?
        .viewer_settings()
        .context("load viewer settings")
}

/// Read a line list. One trailing line ending is dropped, since files
/// conventionally end with a newline and the grammar has no blank lines.
fn read_lines(path: &Path) -> Result<String> {
    let mut text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn svg_surface(settings: &ViewerSettings) -> SvgAdapter {
    SvgAdapter::new(settings.canvas.width, settings.canvas.height)
        .with_background(settings.canvas.background.clone())
        .with_error_color(settings.stroke.error_color.clone())
}

fn write_output(output: Option<&Path>, document: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "wrote svg");
        }
        None => std::io::stdout()
            .lock()
            .write_all(document.as_bytes())
            .context("write stdout")?,
    }
    Ok(())
}

fn check(file: &Path) -> Result<ExitCode> {
    match parse(&read_lines(file)?, 0) {
        ParseResult::Parsed(segments) => {
            println!("ok: {} segments", segments.len());
            Ok(ExitCode::SUCCESS)
        }
        ParseResult::Empty => {
            println!("ok: 0 segments");
            Ok(ExitCode::SUCCESS)
        }
        ParseResult::Invalid(err) => {
            println!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render(
    file: &Path,
    output: Option<&Path>,
    fix: bool,
    settings: &ViewerSettings,
) -> Result<ExitCode> {
    let mut session = Session::new(settings);
    session.enqueue(Action::Draw(read_lines(file)?));
    if fix {
        session.enqueue(Action::Fix);
    }

    let mut svg = svg_surface(settings);
    session.pump(&mut svg)?;
    if let Some(message) = session.store().error_message() {
        eprintln!("{message}");
        return Ok(ExitCode::FAILURE);
    }
    info!(
        fixed = session.store().fixed().len(),
        pending = session.store().pending().len(),
        "rendered"
    );
    write_output(output, svg.document())?;
    Ok(ExitCode::SUCCESS)
}

fn replay(script: &Path, output: Option<&Path>, settings: &ViewerSettings) -> Result<ExitCode> {
    let raw = fs::read(script).with_context(|| format!("read {}", script.display()))?;
    let actions: Vec<Action> =
        serde_json::from_slice(&raw).with_context(|| format!("parse {}", script.display()))?;

    let mut session = Session::new(settings);
    let mut svg = svg_surface(settings);
    for action in actions {
        session.enqueue(action);
    }
    let handled = session.pump(&mut svg)?;
    if session.epoch() == 0 {
        // Nothing visible changed; still emit a (blank) document.
        session.present(&mut svg)?;
    }
    info!(handled, epoch = session.epoch(), "replayed");

    if let Some(message) = session.store().error_message() {
        eprintln!("{message}");
    }
    write_output(output, svg.document())?;
    Ok(ExitCode::SUCCESS)
}

fn config_init(config: &ConfigService<FsConfigStore>, force: bool) -> Result<ExitCode> {
    let path = config.store().path_for(SETTINGS_KEY);
    config
        .init_viewer_settings(force)
        .with_context(|| format!("init {}", path.display()))?;
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}
