//! Liquid blobs: a metaball animation drawn with ANSI colours
//!
//! Usage:
//!   liquid-blobs [--frames `<n>`] [--width `<cols>`] [--height `<rows>`]
//!
//! Frames are redrawn in place from the top-left corner instead of clearing the screen, so
//! the animation does not flicker. Press `q`, `Esc` or `Ctrl-C` to stop early.

use clap::{value_parser, Arg, ArgAction, Command};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::execute;
use std::io::{self, Write};
use std::time::Duration;
use ttyvid_tools::blobs::{self, Blob};
use ttyvid_tools::config::{BlobsConfig, Loader};
use ttyvid_tools::logging;

const TITLE_LINES: [&str; 9] = [
    "",
    "╔═══════════════════════════════════════╗",
    "║                                       ║",
    "║      LIQUID BLOBS SIMULATION          ║",
    "║                                       ║",
    "║    Smooth Metaball Animation          ║",
    "║                                       ║",
    "╚═══════════════════════════════════════╝",
    "",
];
const TITLE_FRAMES: usize = 30;
const TITLE_TOP: u16 = 5;
const ENDING_LINES: [&str; 3] = ["✨ Simulation Complete! ✨", "Smooth rendering with ttyvid", ""];
const ENDING_TOP: u16 = 8;

/// Puts the terminal back the way we found it, however the animation ends.
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(out, Clear(ClearType::All), Hide)?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, Clear(ClearType::All), MoveTo(0, 0), Show);
        let _ = disable_raw_mode();
    }
}

/// Wait up to `delay` for input; true when the user asked to quit.
fn wait_for_quit(delay: Duration) -> io::Result<bool> {
    if !event::poll(delay)? {
        return Ok(false);
    }
    match event::read()? {
        Event::Key(key) => Ok(is_quit_key(key)),
        _ => Ok(false),
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Returns false if the user quit during the title.
fn show_title<W: Write>(out: &mut W, config: &BlobsConfig, delay: Duration) -> io::Result<bool> {
    for frame in 0..TITLE_FRAMES {
        for (i, line) in TITLE_LINES.iter().enumerate() {
            let hue = ((frame * 12 + i * 30) % 360) as f64;
            blobs::queue_banner_line(out, TITLE_TOP + i as u16, line, hue, config.width)?;
        }
        out.flush()?;
        if wait_for_quit(delay)? {
            return Ok(false);
        }
    }
    Ok(!wait_for_quit(Duration::from_millis(500))?)
}

/// Returns false if the user quit mid-animation.
fn animate<W: Write>(
    out: &mut W,
    config: &BlobsConfig,
    blobs: &mut [Blob],
    delay: Duration,
) -> io::Result<bool> {
    execute!(out, Clear(ClearType::All))?;
    let (width, height) = (config.width as f64, config.height as f64);

    for index in 0..config.frames {
        for blob in blobs.iter_mut() {
            blob.update(width, height);
        }
        let lines = blobs::render_frame(config.width, config.height, blobs);
        blobs::queue_frame(out, &lines, index, config.frames, config.width)?;
        out.flush()?;

        if wait_for_quit(delay)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn show_ending<W: Write>(out: &mut W, config: &BlobsConfig) -> io::Result<()> {
    execute!(out, Clear(ClearType::All))?;
    for (i, text) in ENDING_LINES.iter().enumerate() {
        let hue = (i * 60 + 180) as f64;
        blobs::queue_banner_line(out, ENDING_TOP + i as u16, text, hue, config.width)?;
        out.flush()?;
        if wait_for_quit(Duration::from_millis(300))? {
            return Ok(());
        }
    }
    wait_for_quit(Duration::from_secs(1))?;
    Ok(())
}

fn run(config: &BlobsConfig) -> io::Result<()> {
    let delay = Duration::from_millis(config.frame_delay_ms);
    let mut blobs = blobs::default_blobs(&mut rand::rng());

    let mut out = io::stdout();
    let _guard = TerminalGuard::enter(&mut out)?;

    if !show_title(&mut out, config, delay)? {
        return Ok(());
    }
    if !animate(&mut out, config, &mut blobs, delay)? {
        return Ok(());
    }
    show_ending(&mut out, config)
}

fn main() {
    let matches = Command::new("liquid-blobs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Metaball animation rendered with ANSI colours")
        .arg(
            Arg::new("frames")
                .long("frames")
                .short('n')
                .help("Number of animation frames")
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Field width in columns")
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .help("Field height in rows")
                .value_parser(value_parser!(i64).range(1..)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let config = ["frames", "width", "height"]
        .into_iter()
        .try_fold(Loader::new(), |loader, name| {
            let key = format!("blobs.{}", name);
            loader.set_override_option(&key, matches.get_one::<i64>(name).copied())
        })
        .and_then(Loader::build)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    if let Err(e) = run(&config.blobs) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
