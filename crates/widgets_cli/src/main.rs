//! Widgets CLI
//!
//! Run the game page widgets from the terminal: material balance for a
//! position, live watching of a stream of positions, explorer percentages
//! and "Copy as SAN".

use anyhow::{bail, Context, Result};
use material_core::{BoardSnapshot, MaterialBalance, SideSnapshot};
use std::env;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use widgets::{explorer, make_renderer, pgn, BoardWatcher, RenderStyle, WidgetConfig};

fn print_usage() {
    println!("Lichess widgets");
    println!();
    println!("Usage:");
    println!("  lichess_widgets balance --fen <FEN> [options]");
    println!("  lichess_widgets balance --white <PIECES> --black <PIECES> [options]");
    println!("  lichess_widgets watch [options]          (one FEN per stdin line,");
    println!("                                            `reset` forgets the board)");
    println!("  lichess_widgets percentages <COUNT>...");
    println!("  lichess_widgets san                      (PGN on stdin)");
    println!();
    println!("Options:");
    println!("  --style <text|icons|overlay>   Renderer (default: text)");
    println!("  --flipped                      Black at the bottom of the board");
    println!("  --config <PATH>                TOML widget config");
    println!("  --json                         Print the raw result as JSON (balance)");
    println!();
    println!("Pieces are comma-separated names or letters, e.g. king,queen,p,p,n");
    println!();
    println!("Examples:");
    println!("  lichess_widgets balance --fen 4k3/8/8/8/8/8/3PP3/4K3 --style icons");
    println!("  lichess_widgets percentages 12,034 8,120 977");
}

/// Options shared by `balance` and `watch`
#[derive(Debug, Default)]
struct BoardArgs {
    fen: Option<String>,
    white: Option<String>,
    black: Option<String>,
    style: Option<RenderStyle>,
    flipped: bool,
    config: Option<String>,
    json: bool,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{flag} requires a value"),
    }
}

fn parse_board_args(args: &[String]) -> Result<BoardArgs> {
    let mut parsed = BoardArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--fen" | "-f" => parsed.fen = Some(next_value(args, &mut i, "--fen")?.to_string()),
            "--white" | "-w" => {
                parsed.white = Some(next_value(args, &mut i, "--white")?.to_string())
            }
            "--black" | "-b" => {
                parsed.black = Some(next_value(args, &mut i, "--black")?.to_string())
            }
            "--style" | "-s" => {
                let value = next_value(args, &mut i, "--style")?;
                parsed.style = Some(value.parse().map_err(anyhow::Error::msg)?);
            }
            "--config" | "-c" => {
                parsed.config = Some(next_value(args, &mut i, "--config")?.to_string())
            }
            "--flipped" => parsed.flipped = true,
            "--json" => parsed.json = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
        i += 1;
    }

    Ok(parsed)
}

/// Config file first, then command-line overrides
fn load_config(args: &BoardArgs) -> Result<WidgetConfig> {
    let mut config = match &args.config {
        Some(path) => WidgetConfig::load(Path::new(path))
            .with_context(|| format!("loading widget config from {path}"))?,
        None => WidgetConfig::default(),
    };
    if let Some(style) = args.style {
        config.style = style;
    }
    if args.flipped {
        config.orientation = config.orientation.flipped();
    }
    debug!(?config, "widget config");
    Ok(config)
}

fn split_labels(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn board_from_args(args: &BoardArgs) -> Result<BoardSnapshot> {
    match (&args.fen, &args.white, &args.black) {
        (Some(fen), None, None) => {
            BoardSnapshot::from_fen(fen).with_context(|| format!("reading FEN {fen:?}"))
        }
        (None, Some(white), Some(black)) => {
            let white = SideSnapshot::parse_labels(split_labels(white)).context("white pieces")?;
            let black = SideSnapshot::parse_labels(split_labels(black)).context("black pieces")?;
            Ok(BoardSnapshot::new(white, black))
        }
        _ => bail!("balance needs either --fen or both --white and --black"),
    }
}

fn run_balance(args: &[String]) -> Result<()> {
    let args = parse_board_args(args)?;
    let config = load_config(&args)?;
    let board = board_from_args(&args)?;

    let calculator = MaterialBalance::new(config.material.clone());
    let result = calculator.compute_snapshots(&board.white, &board.black);

    for surplus in &result.surplus {
        warn!(
            color = %surplus.color,
            kind = %surplus.kind,
            excess = surplus.excess,
            "more pieces than a side starts with"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let renderer = make_renderer(config.style, config.orientation);
        println!("{}", renderer.render(&result));
    }
    Ok(())
}

fn run_watch(args: &[String]) -> Result<()> {
    let args = parse_board_args(args)?;
    let config = load_config(&args)?;
    let mut watcher = BoardWatcher::from_config(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    watch_lines(&mut watcher, stdin.lock(), &mut stdout.lock())
}

/// Feed one FEN per line to the watcher, writing each new overlay.
///
/// A bad line skips one render cycle; the watch keeps going.
fn watch_lines<R: BufRead, W: Write>(
    watcher: &mut BoardWatcher,
    input: R,
    out: &mut W,
) -> Result<()> {
    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("reading stdin")?;
        let fen = line.trim();
        if fen.is_empty() {
            continue;
        }
        if fen == "reset" {
            watcher.reset();
            continue;
        }

        match watcher.observe_fen(fen) {
            Ok(Some(update)) => writeln!(out, "{}", update.overlay)?,
            Ok(None) => {}
            Err(e) => warn!(line = line_no + 1, error = %e, "skipping position"),
        }
    }
    Ok(())
}

fn run_percentages(args: &[String]) -> Result<()> {
    if args.is_empty() {
        bail!("percentages requires at least one count");
    }
    let shares = explorer::annotate(args)?;
    for (cell, share) in args.iter().zip(shares) {
        println!(
            "{:>12} {:>8}",
            cell,
            explorer::format_percentage(share.percentage)
        );
    }
    Ok(())
}

fn run_san() -> Result<()> {
    let mut pgn_text = String::new();
    io::stdin()
        .read_to_string(&mut pgn_text)
        .context("reading PGN from stdin")?;
    println!("{}", pgn::copy_as_san(&pgn_text));
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "balance" => run_balance(&args[2..]),
        "watch" => run_watch(&args[2..]),
        "percentages" | "pct" => run_percentages(&args[2..]),
        "san" => run_san(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }
}
