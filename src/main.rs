//! Stone-Rules command-line driver.
//!
//! ## Usage
//!
//! - `stone-rules replay --size 9x9 --rules koSIMPLEscoreTERRITORYsui0komi6.5 B D4 W pass`
//! - `stone-rules pass-alive --size 5x5 .x.x. xxxxx ..... ..... .....`
//! - `stone-rules rules --rules @rules.json`
//! - `stone-rules demo` (also the default)
//!
//! `RUST_LOG` controls logging; `--verbose` raises the default to `debug`.

use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};

use stone_rules::board::{Board, Color, Loc};
use stone_rules::constants::PASS_LOC;
use stone_rules::history::BoardHistory;
use stone_rules::pass_alive::calculate_pass_alive_territory;
use stone_rules::rules::Rules;

/// Stone-Rules: rules engine for Go and five-in-a-row games
#[derive(Parser)]
#[command(name = "stone-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a sequence of moves with full legality checking
    Replay {
        /// Board size as WxH
        #[arg(long, default_value = "9x9", value_parser = parse_size)]
        size: (usize, usize),
        /// Rules descriptor, or @path to a JSON rules file
        #[arg(long, default_value = "koPOSITIONALscoreAREAsui1komi7.5")]
        rules: String,
        /// Moves such as `B(1,1)`, `W pass` or `B D4`
        moves: Vec<String>,
    },
    /// Print the pass-alive ownership map of a position
    PassAlive {
        /// Board size as WxH
        #[arg(long, value_parser = parse_size)]
        size: (usize, usize),
        /// Treat multi-stone suicide as legal
        #[arg(long)]
        suicide: bool,
        /// Board rows top to bottom, using `.`, `x` and `o`
        rows: Vec<String>,
    },
    /// Validate a rules descriptor and print it as text and JSON
    Rules {
        /// Rules descriptor, or @path to a JSON rules file
        #[arg(long)]
        rules: String,
    },
    /// Play short scripted games under area and territory rules
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Replay { size, rules, moves }) => run_replay(size, &rules, &moves),
        Some(Commands::PassAlive { size, suicide, rows }) => run_pass_alive(size, suicide, &rows),
        Some(Commands::Rules { rules }) => run_rules(&rules),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level))
        .format_timestamp(None)
        .init();
}

// =============================================================================
// Argument Parsing
// =============================================================================

fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {s:?}"))?;
    let x = x.trim().parse().map_err(|_| format!("bad width in {s:?}"))?;
    let y = y.trim().parse().map_err(|_| format!("bad height in {s:?}"))?;
    Ok((x, y))
}

fn load_rules(source: &str) -> Result<Rules> {
    let parsed = match source.strip_prefix('@') {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading rules file {path}"))?;
            Rules::from_json(&text)
        }
        None => source.parse::<Rules>(),
    };
    parsed.map_err(|e| {
        warn!("rejected rules {source:?}: {e}");
        anyhow!(e).context(format!("invalid rules {source:?}"))
    })
}

fn parse_color(c: char) -> Option<Color> {
    match c.to_ascii_uppercase() {
        'B' | 'X' => Some(Color::Black),
        'W' | 'O' => Some(Color::White),
        _ => None,
    }
}

/// Parse moves given as `B(1,1)`, `BD4`, or a color followed by a separate
/// location argument (`W pass`).
fn parse_moves(board: &Board, args: &[String]) -> Result<Vec<(Color, Loc)>> {
    let mut tokens = args.iter().flat_map(|a| a.split_whitespace());
    let mut moves = Vec::new();
    while let Some(token) = tokens.next() {
        let mut chars = token.chars();
        let pla = chars
            .next()
            .and_then(parse_color)
            .ok_or_else(|| anyhow!("move {token:?} must start with B or W"))?;
        let rest = chars.as_str();
        let loc_text = if rest.is_empty() {
            tokens
                .next()
                .ok_or_else(|| anyhow!("missing location after {token:?}"))?
        } else {
            rest
        };
        let loc = board.parse_loc(loc_text).with_context(|| format!("in move {token:?}"))?;
        moves.push((pla, loc));
    }
    Ok(moves)
}

// =============================================================================
// Subcommands
// =============================================================================

fn run_replay(size: (usize, usize), rules: &str, moves: &[String]) -> Result<()> {
    let rules = load_rules(rules)?;
    let mut board = Board::new(size.0, size.1).context("creating board")?;
    let moves = parse_moves(&board, moves)?;
    let first = moves.first().map_or(Color::Black, |&(pla, _)| pla);
    let mut hist = BoardHistory::new(&board, first, rules).context("starting game")?;

    for (i, &(pla, loc)) in moves.iter().enumerate() {
        hist.play(&mut board, loc, pla)
            .with_context(|| format!("move {} rejected", i + 1))?;
        info!("{pla} {} -> {}", board.loc_to_string(loc), hist.result_string());
    }

    print!("{board}");
    println!("{hist}");
    Ok(())
}

fn run_pass_alive(size: (usize, usize), suicide: bool, rows: &[String]) -> Result<()> {
    let board = Board::parse(size.0, size.1, &rows.concat()).context("parsing board rows")?;
    print!("{}", calculate_pass_alive_territory(&board, suicide));
    Ok(())
}

fn run_rules(rules: &str) -> Result<()> {
    let rules = load_rules(rules)?;
    println!("{rules}");
    println!("{}", rules.to_json().context("serializing rules")?);
    Ok(())
}

fn play_script(board: &mut Board, hist: &mut BoardHistory, script: &[(Color, Option<(usize, usize)>)]) -> Result<()> {
    for &(pla, xy) in script {
        let loc = match xy {
            Some((x, y)) => board.loc(x, y),
            None => PASS_LOC,
        };
        hist.play(board, loc, pla)?;
        println!(
            "{pla} {:<6} phase {} {}",
            board.loc_to_string(loc),
            hist.encore_phase(),
            hist.result_string()
        );
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    use Color::{Black as B, White as W};

    println!("Stone-Rules: Go and five-in-a-row rules engine\n");
    let wall = [
        (B, Some((1, 1))),
        (W, Some((2, 2))),
        (B, Some((1, 2))),
        (W, Some((2, 1))),
        (B, Some((1, 3))),
        (W, Some((2, 3))),
        (B, Some((1, 0))),
        (W, Some((2, 0))),
    ];

    for (title, base) in [
        ("Area scoring", Rules::tromp_taylorish()),
        ("Territory scoring", Rules::japanese_like()),
    ] {
        let rules = Rules { komi: 0.5, ..base };
        println!("=== {title}: {rules} ===");
        let mut board = Board::new(4, 4)?;
        let mut hist = BoardHistory::new(&board, B, rules)?;
        play_script(&mut board, &mut hist, &wall)?;
        while !hist.is_game_over() {
            let pla = hist.next_player();
            play_script(&mut board, &mut hist, &[(pla, None)])?;
        }
        print!("{board}");
        println!("{hist}\n");
    }

    let gomoku = Rules::gomoku(stone_rules::rules::BasicRule::Standard);
    println!("=== Five in a row: {gomoku} ===");
    let mut board = Board::new(9, 9)?;
    let mut hist = BoardHistory::new(&board, B, gomoku)?;
    for i in 0..5 {
        for (pla, y) in [(B, 4), (W, 5)] {
            let loc = board.loc(2 + i, y);
            let result = hist.make_connection_move_assume_legal(&mut board, loc, pla, &stone_rules::oracle::NoForbidden);
            if hist.is_game_over() {
                print!("{board}");
                println!("{pla} {} ends the game: {result:?}", board.loc_to_string(loc));
                return Ok(());
            }
        }
    }
    bail!("scripted five-in-a-row game did not finish")
}
