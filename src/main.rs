//! Lanai Trie - command-line entrypoint.
//!
//! Loads a word list into a trie and answers word and prefix queries against it.
//! Configuration comes from an optional file plus `LANAI__*` environment variables.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lanai_trie_lib::config::{
    global_config, init_global_config, limits::TrieLimits, ConfigLoader, ConfigResult, LanaiConfig,
    LogConfig, ENV_PREFIX,
};
use lanai_trie_lib::data_structures::{LanaiTrie, LanaiTrieError};
use lanai_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LanaiError, LanaiResult, TracingErrorReporter,
};
use tracing::{info, warn};

/// Command line arguments for the Lanai Trie tool.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a word list and answer queries against it
    Check {
        /// File with one lowercase word per line
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Word to remove after loading (repeatable)
        #[clap(short, long)]
        remove: Vec<String>,

        /// Words to look up, both as whole words and as prefixes
        queries: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Fall back to default logging so a broken config file can still be reported
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    match run(args.command, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(context) => {
            report_error(context);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, loaded: ConfigResult<LanaiConfig>) -> Result<(), ErrorContext> {
    match command {
        Command::Check {
            words,
            remove,
            queries,
        } => {
            let config = loaded.map_err(|e| ErrorContext::new(e.into(), "config"))?;
            init_global_config(config);
            let limits = global_config().map(|c| c.trie.clone()).unwrap_or_default();
            run_check(&limits, &words, &remove, &queries).map_err(|e| {
                ErrorContext::new(e, "check").with_details(format!("word list: {}", words.display()))
            })
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded.map_err(|e| ErrorContext::new(e.into(), "config"))?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            gen_config(&output).map_err(|e| ErrorContext::new(e, "gen-config"))
        }
    }
}

/// Build a trie from `words`, apply removals, then print one line per query.
fn run_check(
    limits: &TrieLimits,
    words: &Path,
    removals: &[String],
    queries: &[String],
) -> LanaiResult<()> {
    let mut trie = LanaiTrie::with_config(limits.to_trie_config()?);
    let contents = std::fs::read_to_string(words)?;

    let mut stored = 0usize;
    let mut rejected = 0usize;
    for (index, line) in contents.lines().enumerate() {
        let word = line.trim_end();
        if word.is_empty() {
            continue;
        }
        match trie.insert(word) {
            Ok(true) => stored += 1,
            Ok(false) => {}
            Err(e @ LanaiTrieError::NodeLimitReached { .. }) => return Err(e.into()),
            Err(e) => {
                rejected += 1;
                warn!(line = index + 1, error = %e, "skipping word");
            }
        }
    }
    info!(stored, rejected, nodes = trie.node_count(), "word list loaded");

    for word in removals {
        let outcome = trie.remove(word);
        info!(
            word = %word,
            was_present = outcome.was_present,
            released = outcome.released,
            "removed word"
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for query in queries {
        writeln!(
            out,
            "{query}: word={} prefix={}",
            trie.search(query),
            trie.starts_with(query)
        )?;
    }

    Ok(())
}

/// Write the default configuration to `output` as TOML.
fn gen_config(output: &Path) -> LanaiResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&LanaiConfig::default())
        .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
