//! Word Scramble - CLI
//!
//! Play Word Scramble in a TUI or plain terminal, or inspect root words and
//! the dictionary from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use word_scramble::{
    commands::{check_word, find_solutions, run_simple, run_survey},
    config::{GameConfig, WordSource},
    output::{print_check_result, print_solutions_result, print_survey_statistics},
    round::RoundState,
    validator::{WordListDictionary, WordValidator},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of an eight-letter root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word pool: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for root word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace; warnings only in play mode)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check whether a word would be accepted for a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,

        /// Words already used this round, most recent first
        #[arg(long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every acceptable word for a root word
    Solutions {
        /// The root word
        root: String,
    },

    /// Survey how many words each root in the pool yields
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

/// Log level for a `-v` count
///
/// The TUI owns the terminal, so anything chattier than warnings would be
/// drawn over the game screen.
fn log_level(verbosity: u8, tui: bool) -> log::LevelFilter {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    if tui {
        level.min(log::LevelFilter::Warn)
    } else {
        level
    }
}

/// Configure `env_logger` from the `-v` count
///
/// Outside the TUI and without `-v`, the `RUST_LOG` environment variable is
/// honoured, falling back to warnings only.
fn init_logging(verbosity: u8, tui: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbosity, tui));
    if verbosity == 0 && !tui {
        builder.parse_default_env();
    }
    // Ignore a second initialisation
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let config = GameConfig {
        word_pool: WordSource::from_arg(&cli.wordlist),
        dictionary: WordSource::from_arg(&cli.dictionary),
        seed: cli.seed,
    };
    log::debug!("configuration: {config:?}");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, word, used } => run_check_command(&config, &root, &word, &used),
        Commands::Solutions { root } => run_solutions_command(&config, &root),
        Commands::Survey { count } => run_survey_command(&config, count),
    }
}

fn load_pool(config: &GameConfig) -> Result<Vec<String>> {
    let pool = config
        .load_pool()
        .context("failed to load the root word pool")?;
    log::info!("loaded {} root words", pool.len());
    Ok(pool)
}

fn load_dictionary(config: &GameConfig) -> Result<WordListDictionary> {
    let dictionary = config
        .load_dictionary()
        .context("failed to load the dictionary")?;
    log::info!("loaded {} dictionary words", dictionary.len());
    Ok(dictionary)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let pool = load_pool(config)?;
    let validator = WordValidator::new(load_dictionary(config)?);
    let round = RoundState::new(validator, config.selector());

    let app = App::new(round, &pool).context("cannot start the first round")?;
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let pool = load_pool(config)?;
    let validator = WordValidator::new(load_dictionary(config)?);
    let mut round = RoundState::new(validator, config.selector());

    let summary = run_simple(&mut round, &pool)?;
    log::info!(
        "session finished: {} rounds, {} points",
        summary.rounds,
        summary.total_score
    );
    Ok(())
}

fn run_check_command(config: &GameConfig, root: &str, word: &str, used: &[String]) -> Result<()> {
    let validator = WordValidator::new(load_dictionary(config)?);
    let result = check_word(&validator, root, word, used);
    print_check_result(&result);
    Ok(())
}

fn run_solutions_command(config: &GameConfig, root: &str) -> Result<()> {
    let dictionary = load_dictionary(config)?;
    let result = find_solutions(root, &dictionary);
    print_solutions_result(&result);
    Ok(())
}

fn run_survey_command(config: &GameConfig, count: Option<usize>) -> Result<()> {
    let pool = load_pool(config)?;
    let dictionary = load_dictionary(config)?;

    let surveyed = count.unwrap_or(pool.len()).min(pool.len());
    println!("\n{}", "═".repeat(70));
    println!(" Surveying {surveyed} root words ");
    println!("{}", "═".repeat(70));

    let stats = run_survey(&pool, &dictionary, count, true);
    print_survey_statistics(&stats);
    Ok(())
}
