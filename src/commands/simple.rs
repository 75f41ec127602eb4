//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Reads one word per line; lines starting
//! with `:` are commands.

use crate::output::formatters::circled_count;
use crate::round::{RandomSelector, RoundState, Submission};
use crate::validator::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Totals reported when the player leaves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds: usize,
    pub total_score: u32,
}

enum Command {
    Restart,
    Score,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let name = line.strip_prefix(':')?;
        Some(match name.trim().to_lowercase().as_str() {
            "r" | "restart" | "new" => Self::Restart,
            "s" | "score" => Self::Score,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        })
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the first round cannot start (empty pool) or if
/// reading from stdin or writing to stdout fails.
pub fn run_simple<D: Dictionary, S: RandomSelector>(
    round: &mut RoundState<D, S>,
    pool: &[String],
) -> Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(round, pool, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output streams
///
/// # Errors
///
/// Returns an error if a round cannot start (empty pool) or on I/O failure.
pub fn run_simple_with<D, S, R, W>(
    round: &mut RoundState<D, S>,
    pool: &[String],
    input: R,
    mut out: W,
) -> Result<SessionSummary>
where
    D: Dictionary,
    S: RandomSelector,
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        out,
        "║                Word Scramble - Interactive Mode              ║"
    )?;
    writeln!(
        out,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    print_help(&mut out)?;

    let root = round.start(pool).context("cannot start the first round")?;
    print_root(&mut out, root)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(command) = Command::parse(line.trim()) {
            match command {
                Command::Quit => break,
                Command::Restart => {
                    let root = round.restart(pool).context("cannot start a new round")?;
                    writeln!(out, "\n🔄 New round started!")?;
                    print_root(&mut out, root)?;
                }
                Command::Score => print_score(&mut out, round)?,
                Command::Help => print_help(&mut out)?,
                Command::Unknown(name) => {
                    writeln!(out, "❌ Unknown command ':{name}'. Try :help")?;
                }
            }
            continue;
        }

        match round.submit_word(&line)? {
            Submission::Accepted {
                word,
                score_delta,
                total_score,
            } => {
                writeln!(
                    out,
                    "✓ {} {} {}  (total {})",
                    circled_count(word.chars().count()),
                    word.bright_white().bold(),
                    format!("+{score_delta}").green().bold(),
                    total_score.to_string().bright_yellow()
                )?;
            }
            Submission::Rejected(reason) => {
                let root = round.root_word().unwrap_or_default();
                writeln!(out, "❌ {}", reason.title().red().bold())?;
                writeln!(out, "   {}", reason.message(root))?;
            }
        }
    }

    let summary = SessionSummary {
        rounds: round.history().len(),
        total_score: round.total_score(),
    };
    writeln!(
        out,
        "\n👋 Thanks for playing! {} points over {} {}.\n",
        summary.total_score,
        summary.rounds,
        if summary.rounds == 1 {
            "round"
        } else {
            "rounds"
        }
    )?;
    Ok(summary)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Make words from the letters of the root word.")?;
    writeln!(
        out,
        "Each word scores its length times its position in the round.\n"
    )?;
    writeln!(
        out,
        "Commands: ':restart' new root word, ':score' scoreboard, ':quit' to exit\n"
    )
}

fn print_root<W: Write>(out: &mut W, root: &str) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(
        out,
        "Root word: {}",
        root.to_uppercase().bright_cyan().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60))
}

fn print_score<W, D, S>(out: &mut W, round: &RoundState<D, S>) -> io::Result<()>
where
    W: Write,
    D: Dictionary,
    S: RandomSelector,
{
    writeln!(out, "\n📊 Scoreboard")?;
    for entry in round.history().iter() {
        writeln!(out, "   {:<10} {:>5}", entry.word, entry.score)?;
    }
    writeln!(
        out,
        "   Total score: {}",
        round.total_score().to_string().bright_yellow().bold()
    )?;
    if !round.used_words().is_empty() {
        let words = round.used_words().to_vec();
        writeln!(out, "   This round:  {}", words.join(", "))?;
    }
    writeln!(out)
}
