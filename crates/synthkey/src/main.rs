//! synthkey command-line tool: entry point.
//!
//! Each invocation performs one keyboard or mouse action and exits.
//!
//! # Usage
//!
//! ```text
//! synthkey [--config <PATH>] [--dry-run] <COMMAND>
//!
//! Commands:
//!   key-down <KEY>                 Press a key and leave it held
//!   key-up <KEY>                   Release a key and its modifiers
//!   press <KEY>...                 Press and release each key in turn
//!   move-to <X> <Y>                Move the cursor (pixels)
//!   mouse-down <X> <Y> [--button]  Press a mouse button
//!   mouse-up <X> <Y> [--button]    Release a mouse button
//!   click <X> <Y> [--button]       Press and release a mouse button
//!   scroll <CLICKS> [--x] [--y]    Turn the wheel (also: hscroll, vscroll)
//!   position                       Print the cursor position
//!   size                           Print the primary screen size
//!   keys                           Print the key table
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable          | Description                                    |
//! |-------------------|------------------------------------------------|
//! | `SYNTHKEY_CONFIG` | Config file path (same as `--config`)          |
//! | `RUST_LOG`        | Log filter; overrides `log_level` in the config |
//!
//! On hosts other than Windows, dry-run mode is always on: events are
//! recorded by the mock backend and printed instead of being injected.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use synthkey_core::{KeyMapEntry, MouseButton};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use synthkey::application::synthesize_input::{InputSynthesizer, SynthError};
use synthkey::infrastructure::platform::mock::MockPlatformInput;
use synthkey::infrastructure::storage::config::{
    load_config, load_config_from, ConfigError, SynthConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Synthetic keyboard and mouse input.
#[derive(Debug, Parser)]
#[command(name = "synthkey", about = "Inject synthetic keyboard and mouse input", version)]
struct Cli {
    /// Path to the TOML config file.
    ///
    /// Defaults to `config.toml` in the platform config directory.
    #[arg(long, global = true, env = "SYNTHKEY_CONFIG")]
    config: Option<PathBuf>,

    /// Print the events that would be injected instead of injecting them.
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Press a key and leave it, and its modifiers, held down.
    KeyDown {
        #[arg(allow_hyphen_values = true)]
        key: String,
    },
    /// Release a key, then the modifiers pressed for it.
    KeyUp {
        #[arg(allow_hyphen_values = true)]
        key: String,
    },
    /// Press and release each key in order.
    Press {
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Move the cursor to a pixel position.
    MoveTo(PointArgs),
    /// Press a mouse button without releasing it.
    MouseDown(ButtonArgs),
    /// Release a mouse button.
    MouseUp(ButtonArgs),
    /// Press and release a mouse button.
    Click(ButtonArgs),
    /// Turn the mouse wheel.
    Scroll(ScrollArgs),
    /// Alias of `scroll`.
    Hscroll(ScrollArgs),
    /// Alias of `scroll`.
    Vscroll(ScrollArgs),
    /// Print the cursor position in pixels.
    Position,
    /// Print the primary screen size in pixels.
    Size,
    /// Print every key name and its native mapping.
    Keys,
}

#[derive(Debug, Args)]
struct PointArgs {
    #[arg(allow_negative_numbers = true)]
    x: i32,
    #[arg(allow_negative_numbers = true)]
    y: i32,
}

#[derive(Debug, Args)]
struct ButtonArgs {
    #[command(flatten)]
    point: PointArgs,

    /// `left`, `middle` or `right`.  Defaults to `mouse.default_button`.
    #[arg(long)]
    button: Option<String>,
}

#[derive(Debug, Args)]
struct ScrollArgs {
    /// Wheel clicks; positive scrolls away from the user.
    #[arg(allow_negative_numbers = true)]
    clicks: i32,

    /// Horizontal position; defaults to the cursor.
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i32>,

    /// Vertical position; defaults to the cursor.
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i32>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = read_config(cli.config.as_deref())?;

    // RUST_LOG wins over the configured level.  Logs go to stderr so that
    // command output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let dry_run = cli.dry_run || config.dry_run || cfg!(not(target_os = "windows"));
    debug!(command = ?cli.command, dry_run, "synthkey starting");

    if dry_run {
        let platform = Arc::new(MockPlatformInput::default());
        let synth = InputSynthesizer::from_platform(Arc::clone(&platform));
        run(&synth, cli.command, &config)?;
        for event in platform.events() {
            println!("{event}");
        }
        Ok(())
    } else {
        run(&native_synthesizer()?, cli.command, &config)
    }
}

fn read_config(path: Option<&std::path::Path>) -> anyhow::Result<SynthConfig> {
    let result = match path {
        Some(path) => load_config_from(path),
        None => match load_config() {
            Err(ConfigError::NoPlatformConfigDir) => Ok(SynthConfig::default()),
            other => other,
        },
    };
    result.context("failed to load configuration")
}

#[cfg(target_os = "windows")]
fn native_synthesizer() -> anyhow::Result<InputSynthesizer> {
    use synthkey::infrastructure::platform::windows::WindowsPlatformInput;

    let synth = InputSynthesizer::from_platform(Arc::new(WindowsPlatformInput::new()));
    info!(
        keys = synth.key_table().len(),
        unmapped = synth.key_table().unmapped_count(),
        "key table built from active layout"
    );
    Ok(synth)
}

#[cfg(not(target_os = "windows"))]
fn native_synthesizer() -> anyhow::Result<InputSynthesizer> {
    info!("no native input backend on this platform");
    anyhow::bail!("input injection is only supported on Windows; use --dry-run")
}

fn run(synth: &InputSynthesizer, command: Command, config: &SynthConfig) -> anyhow::Result<()> {
    match command {
        Command::KeyDown { key } => synth.key_down(&key),
        Command::KeyUp { key } => synth.key_up(&key),
        Command::Press { keys } => {
            for key in &keys {
                synth.key_down(key);
                synth.key_up(key);
            }
        }
        Command::MoveTo(PointArgs { x, y }) => {
            synth
                .move_to(x, y)
                .with_context(|| format!("failed to move cursor to ({x}, {y})"))?;
        }
        Command::MouseDown(args) => {
            let button = resolve_button(args.button.as_deref(), config)?;
            synth.mouse_down(args.point.x, args.point.y, button)?;
        }
        Command::MouseUp(args) => {
            let button = resolve_button(args.button.as_deref(), config)?;
            synth.mouse_up(args.point.x, args.point.y, button)?;
        }
        Command::Click(args) => {
            let button = resolve_button(args.button.as_deref(), config)?;
            synth.click(args.point.x, args.point.y, button)?;
        }
        Command::Scroll(args) => synth.scroll(args.clicks, args.x, args.y),
        Command::Hscroll(args) => synth.hscroll(args.clicks, args.x, args.y),
        Command::Vscroll(args) => synth.vscroll(args.clicks, args.x, args.y),
        Command::Position => {
            let (x, y) = synth.position().context("failed to read cursor position")?;
            println!("{x} {y}");
        }
        Command::Size => {
            let size = synth.size().context("failed to read screen size")?;
            println!("{} {}", size.width, size.height);
        }
        Command::Keys => {
            for (name, entry) in synth.key_table().sorted_entries() {
                match entry {
                    KeyMapEntry::Mapped(scan) => println!("{name:?}\t0x{:04X}", scan.0 as u16),
                    KeyMapEntry::Unmapped => println!("{name:?}\tunmapped"),
                }
            }
        }
    }
    Ok(())
}

fn resolve_button(arg: Option<&str>, config: &SynthConfig) -> Result<MouseButton, SynthError> {
    match arg {
        Some(name) => Ok(name.parse::<MouseButton>()?),
        None => Ok(config.mouse.default_button),
    }
}
