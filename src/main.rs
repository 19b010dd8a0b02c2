mod app;
mod clipboard;
mod config;
mod input;
mod report;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shades::{parse_hex, PaletteKind, Rgb};
use std::fs::File;
use std::path::PathBuf;
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "shades", version, about = "Tint and shade palettes from one source color")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui {
        /// Start from this color instead of the configured one.
        #[arg(long)]
        source: Option<String>,
    },
    /// Print generated palettes, heaviest shade first (headless).
    Generate {
        /// Source color, 6 hex digits with optional `#`.
        color: String,
        /// Only this palette: light, dark or accent.
        #[arg(long)]
        kind: Option<PaletteKind>,
        #[arg(long)]
        json: bool,
    },
    /// Show a color as RGB, HSB and LCH along with its tone (headless).
    Inspect {
        color: String,
        #[arg(long)]
        json: bool,
    },
    /// WCAG contrast ratio between two colors (headless).
    Contrast { first: String, second: String },
}

enum LogTarget {
    Stderr,
    File(File),
    Off,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui { source: None });

    let target = match command {
        Command::Tui { .. } => tui_log_file().map_or(LogTarget::Off, LogTarget::File),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, target);

    let cfg = config::load(cli.config.as_deref()).context("load config")?;

    match command {
        Command::Tui { source } => {
            let source = match source {
                Some(s) => parse_color(&s)?,
                None => parse_color(&cfg.palette.source).context("palette.source in config")?,
            };
            tracing::info!(%source, "starting tui");
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, source);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate { color, kind, json } => {
            let source = parse_color(&color)?;
            let kinds = match kind {
                Some(k) => vec![k],
                None => PaletteKind::ALL.to_vec(),
            };
            let reports = report::palettes(source, &kinds, &cfg.tone);
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print!("{}", report::format_palettes(&reports));
            }
        }
        Command::Inspect { color, json } => {
            let rgb = parse_color(&color)?;
            let r = report::color(rgb, &cfg.tone);
            if json {
                println!("{}", serde_json::to_string_pretty(&r)?);
            } else {
                print!("{}", report::format_color(&r));
            }
        }
        Command::Contrast { first, second } => {
            let a = parse_color(&first)?;
            let b = parse_color(&second)?;
            println!("{:.2}:1", shades::ratio(a, b));
        }
    }

    Ok(())
}

fn parse_color(input: &str) -> anyhow::Result<Rgb> {
    parse_hex(input.trim()).with_context(|| format!("parse color {input:?}"))
}

/// The TUI owns the terminal, so its logs go to a file in the data dir.
fn tui_log_file() -> Option<File> {
    let dir = config::project_dirs().ok()?.data_dir().to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("shades.log"))
        .ok()
}

fn init_logging(verbose: u8, target: LogTarget) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level);

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(file) => builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init(),
        LogTarget::Off => {}
    }
}
