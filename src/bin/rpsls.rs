//! Command-line harness around the match engine.
//!
//! Plays the given moves in order, or one move per line from stdin when none
//! are given. The word `reset` starts a new match.
//!
//! ```text
//! rpsls --seed 42 Rock Paper Spock
//! rpsls --cpu Scissors,Spock --json Rock Lizard
//! ```

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use rpsls::logging::init_logging;
use rpsls::{
    EngineError, GameRng, MatchConfig, MatchEngine, MatchState, Move, OutcomeResult,
    RandomSource, ScriptedRng,
};

#[derive(Parser, Debug)]
#[command(name = "rpsls", version, about = "Play Rock-Paper-Scissors-Lizard-Spock against the CPU")]
struct Args {
    /// Moves to play, in order. Reads stdin when empty.
    moves: Vec<String>,

    /// Seed for CPU draws. Random when omitted.
    #[arg(long, env = "RPSLS_SEED")]
    seed: Option<u64>,

    /// Fixed CPU moves, cycled. Overrides --seed.
    #[arg(long, value_delimiter = ',')]
    cpu: Vec<Move>,

    /// Turns per match.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    turns: Option<u32>,

    /// Count ties toward the turn limit.
    #[arg(long)]
    ties_consume_turn: bool,

    /// TOML file with match settings. Flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print one JSON object per turn.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct TurnLine<'a> {
    result: &'a OutcomeResult,
    user_score: u32,
    cpu_score: u32,
    turns_remaining: u32,
    is_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    verdict: Option<&'static str>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref(), args.turns, args.ties_consume_turn)?;

    if !args.cpu.is_empty() {
        let rng = ScriptedRng::new(args.cpu.iter().map(|m| m.index()));
        return run(MatchEngine::new(config, rng)?, &args);
    }

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "cpu seed");
    run(MatchEngine::new(config, rng)?, &args)
}

/// Settings from `path` when given, then flag overrides on top.
fn load_config(path: Option<&Path>, turns: Option<u32>, ties_consume_turn: bool) -> Result<MatchConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            MatchConfig::from_toml(&text).with_context(|| format!("loading {}", path.display()))?
        }
        None => MatchConfig::default(),
    };

    if let Some(turns) = turns {
        config = config.with_turn_limit(turns);
    }
    if ties_consume_turn {
        config = config.ties_consume_turn(true);
    }
    Ok(config)
}

fn run<R: RandomSource>(mut engine: MatchEngine<R>, args: &Args) -> Result<()> {
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if args.moves.is_empty() {
        if !args.json {
            writeln!(out, "{}", engine.state().last_outcome_message)?;
        }
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            let input = line.trim();
            if !input.is_empty() {
                step(&mut engine, input, args.json, &mut out, &mut err)?;
            }
        }
    } else {
        for input in &args.moves {
            step(&mut engine, input, args.json, &mut out, &mut err)?;
        }
    }
    Ok(())
}

/// Handle one line of input. Rejected moves are reported on `err` and the
/// run carries on.
fn step<R, W, E>(
    engine: &mut MatchEngine<R>,
    input: &str,
    json: bool,
    out: &mut W,
    err: &mut E,
) -> Result<()>
where
    R: RandomSource,
    W: Write,
    E: Write,
{
    if input.eq_ignore_ascii_case("reset") {
        let state = engine.reset();
        if !json {
            writeln!(out, "New game. {}", state.last_outcome_message)?;
        }
        return Ok(());
    }

    match engine.play_turn(input) {
        Ok(result) => report(out, &result, engine.state(), json),
        Err(rejected @ (EngineError::InvalidMove(_) | EngineError::IllegalTurn { .. })) => {
            writeln!(err, "error: {rejected}")?;
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

fn report<W: Write>(out: &mut W, result: &OutcomeResult, state: &MatchState, json: bool) -> Result<()> {
    let verdict = state.verdict().map(|v| v.summary());

    if json {
        let line = TurnLine {
            result,
            user_score: state.user_score,
            cpu_score: state.cpu_score,
            turns_remaining: state.turns_remaining,
            is_over: state.is_over,
            verdict,
        };
        writeln!(out, "{}", serde_json::to_string(&line)?)?;
        return Ok(());
    }

    writeln!(out, "CPU Chose: {}", result.cpu_move)?;
    writeln!(out, "{}", result.message)?;
    writeln!(
        out,
        "User Score: {}  CPU Score: {}  Turns left: {}",
        state.user_score, state.cpu_score, state.turns_remaining
    )?;
    if let Some(summary) = verdict {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(config: MatchConfig, cpu: &[Move]) -> MatchEngine<ScriptedRng> {
        MatchEngine::new(config, ScriptedRng::new(cpu.iter().map(|m| m.index()))).unwrap()
    }

    /// Feed `inputs` through `step`, returning what went to stdout and stderr.
    fn feed<R: RandomSource>(engine: &mut MatchEngine<R>, inputs: &[&str], json: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        for input in inputs {
            step(engine, input, json, &mut out, &mut err).unwrap();
        }
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_config_file_with_flag_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.toml");
        std::fs::write(&path, "turn_limit = 3\nmax_history = 8\n").unwrap();

        let from_file = load_config(Some(path.as_path()), None, false).unwrap();
        assert_eq!(from_file.turn_limit, 3);
        assert_eq!(from_file.max_history, 8);
        assert!(!from_file.ties_consume_turn);

        let overridden = load_config(Some(path.as_path()), Some(5), true).unwrap();
        assert_eq!(overridden.turn_limit, 5);
        assert_eq!(overridden.max_history, 8);
        assert!(overridden.ties_consume_turn);

        assert_eq!(load_config(None, None, false).unwrap(), MatchConfig::default());
    }

    #[test]
    fn test_bad_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("missing.toml").as_path()), None, false).is_err());

        let path = dir.path().join("zero.toml");
        std::fs::write(&path, "turn_limit = 0\n").unwrap();
        let err = load_config(Some(path.as_path()), None, false).unwrap_err();
        assert!(format!("{err:#}").contains("turn_limit must be at least 1"));
    }

    #[test]
    fn test_reset_mid_stream() {
        let mut engine = scripted(MatchConfig::new(3), &[Move::Scissors]);

        let (out, err) = feed(&mut engine, &["Rock", "RESET", "Rock"], false);

        assert!(err.is_empty());
        assert!(out.contains("New game. Make your move!"));
        assert_eq!(out.matches("You win! Rock crushes Scissors").count(), 2);
        assert_eq!(engine.state().user_score, 1);
        assert_eq!(engine.state().turns_remaining, 2);
        assert_eq!(engine.state().turns_played, 1);
    }

    #[test]
    fn test_rejected_moves_do_not_end_run() {
        let mut engine = scripted(MatchConfig::new(1), &[Move::Rock]);

        let (out, err) = feed(&mut engine, &["Hammer", "Paper", "Paper", "reset", "Scissors"], false);

        let errors: Vec<&str> = err.lines().collect();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("error: invalid move \"Hammer\""));
        assert!(errors[1].starts_with("error: match is over (1-0)"));

        assert!(out.contains("You win!"));
        assert!(out.contains("You lose! Rock crushes Scissors"));
        assert_eq!(engine.state().cpu_score, 1);
    }

    #[test]
    fn test_json_lines() {
        let mut engine = scripted(MatchConfig::new(2), &[Move::Lizard, Move::Paper]);

        let (out, _) = feed(&mut engine, &["Spock", "Rock", "reset"], true);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["result"]["cpu_move"], "Lizard");
        assert_eq!(lines[0]["result"]["message"], "You lose! Lizard poisons Spock");
        assert_eq!(lines[0]["turns_remaining"], 1);
        assert!(lines[0].get("verdict").is_none());

        assert_eq!(lines[1]["cpu_score"], 2);
        assert_eq!(lines[1]["is_over"], true);
        assert!(lines[1]["verdict"].is_string());
    }
}
