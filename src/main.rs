//! Goban command-line driver
//!
//! Reads moves from stdin and prints the board and score at the end.
//!
//! Usage:
//!   goban [OPTIONS] < moves.txt
//!
//! Options:
//!   --config PATH   Config file (default: platform config dir)
//!   --size N        Board size, overrides config
//!   --rule NAME     chinese | japanese, overrides config
//!   --playout N     Play N random moves instead of reading stdin
//!   --seed N        RNG seed for --playout (default: 42)
//!   --json          Print each accepted move as a JSON line
//!   --quiet         Only warnings on stderr
//!
//! Input, one command per line:
//!   X Y             play the side to move at (X, Y)
//!   board           print the board
//!   score           print the current score
//!   rule NAME       switch scoring rule
//!   # ...           comment

use goban::playout::random_playout;
use goban::{EngineConfig, GameSession, MoveRecord, ScoringRule};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ── CLI Configuration ────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    size: Option<usize>,
    rule: Option<ScoringRule>,
    playout: Option<usize>,
    seed: u64,
    json: bool,
    quiet: bool,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        seed: 42,
        ..Default::default()
    };
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--config" => cli.config_path = Some(PathBuf::from(value("--config")?)),
            "--size" => {
                cli.size = Some(
                    value("--size")?
                        .parse()
                        .map_err(|_| "--size requires a number".to_string())?,
                )
            }
            "--rule" => {
                cli.rule = Some(
                    value("--rule")?
                        .parse::<ScoringRule>()
                        .map_err(|e| e.to_string())?,
                )
            }
            "--playout" => {
                cli.playout = Some(
                    value("--playout")?
                        .parse()
                        .map_err(|_| "--playout requires a number".to_string())?,
                )
            }
            "--seed" => {
                cli.seed = value("--seed")?
                    .parse()
                    .map_err(|_| "--seed requires a number".to_string())?
            }
            "--json" => cli.json = true,
            "--quiet" => cli.quiet = true,
            other => return Err(format!("unknown option: {}", other)),
        }
    }
    Ok(cli)
}

fn init_logging(quiet: bool) {
    let default = if quiet { "goban=warn" } else { "goban=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &CliArgs) -> Result<EngineConfig, Box<dyn Error>> {
    let mut config = match &cli.config_path {
        Some(path) => EngineConfig::load(path)?,
        None => match EngineConfig::default_path() {
            Ok(path) => EngineConfig::load_or_default(&path)?,
            Err(e) => {
                warn!("{}, using defaults", e);
                EngineConfig::default()
            }
        },
    };
    if let Some(size) = cli.size {
        config.board_size = size;
    }
    if let Some(rule) = cli.rule {
        config.rule = rule;
    }
    config.validate()?;
    Ok(config)
}

// ── Input Commands ───────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
enum Command {
    Play(usize, usize),
    ShowBoard,
    ShowScore,
    SetRule(ScoringRule),
}

/// Parse one input line. `Ok(None)` for blank lines and comments.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        ["board"] => Ok(Some(Command::ShowBoard)),
        ["score"] => Ok(Some(Command::ShowScore)),
        ["rule", name] => name
            .parse::<ScoringRule>()
            .map(|rule| Some(Command::SetRule(rule)))
            .map_err(|e| e.to_string()),
        [x, y] => {
            let x = x.parse::<usize>().map_err(|_| format!("bad x coordinate: {}", x))?;
            let y = y.parse::<usize>().map_err(|_| format!("bad y coordinate: {}", y))?;
            Ok(Some(Command::Play(x, y)))
        }
        _ => Err(format!("unrecognized command: {}", line)),
    }
}

fn print_record(out: &mut impl Write, record: &MoveRecord) -> io::Result<()> {
    let json = serde_json::to_string(record).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

fn run_stdin(session: &mut GameSession, json: bool) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = line_no + 1, "{}", e);
                continue;
            }
        };
        match command {
            Command::Play(x, y) => match session.play(x, y) {
                Ok(record) => {
                    if json {
                        print_record(&mut out, &record)?;
                    }
                }
                Err(e) => warn!(line = line_no + 1, "move rejected: {}", e),
            },
            Command::ShowBoard => write!(out, "{}", session.board)?,
            Command::ShowScore => writeln!(out, "{} ({})", session.preview_score(), session.rule)?,
            Command::SetRule(rule) => {
                info!(%rule, "scoring rule changed");
                session.set_rule(rule);
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;
    init_logging(cli.quiet);

    let config = load_config(&cli)?;
    let mut session = GameSession::new(&config)?;

    match cli.playout {
        Some(moves) => {
            let mut rng = ChaCha8Rng::seed_from_u64(cli.seed);
            let records = random_playout(&mut session, moves, &mut rng);
            info!(moves = records.len(), seed = cli.seed, "playout finished");
            if cli.json {
                let mut out = io::stdout().lock();
                for record in &records {
                    print_record(&mut out, record)?;
                }
            }
        }
        None => run_stdin(&mut session, cli.json)?,
    }

    print!("{}", session.board);
    let rule = session.rule;
    let captures = session.captures();
    let final_score = session.settle();
    println!(
        "prisoners: black {} - white {}",
        captures.by_black, captures.by_white
    );
    println!("{} ({})", final_score, rule);
    match final_score.winner() {
        Some(stone) => println!("{} wins", stone),
        None => println!("draw"),
    }
    Ok(())
}
