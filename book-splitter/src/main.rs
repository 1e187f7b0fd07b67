//! book-split - Split digitized books into numbered word chunks and audit them

mod config;
mod error;
mod source;
mod store;
mod text;
mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use store::Store;

#[derive(Parser, Debug)]
#[command(name = "book-split")]
#[command(about = "Split digitized books into numbered word chunks and audit them", long_about = None)]
#[command(version)]
struct Args {
    /// Enable debug output
    #[arg(short, long, default_value_t = false, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip front matter from a book and append its chunks to the store
    Split {
        /// Path to the book's text file
        file: PathBuf,

        /// Words per unit (overrides config)
        #[arg(short, long)]
        chunk_size: Option<usize>,

        /// Store directory (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Check every unit in the store against the minimum word count
    Verify {
        /// Store directory (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,

        /// Minimum words per unit (overrides config)
        #[arg(short, long)]
        min_words: Option<usize>,
    },
    /// Check a single unit file against the minimum word count
    Check {
        /// Path to the unit file
        file: PathBuf,

        /// Minimum words (overrides config)
        #[arg(short, long)]
        min_words: Option<usize>,
    },
    /// List the numbered units present in the store
    List {
        /// Store directory (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Show the first lines of a book to help judge where its content starts
    Preview {
        /// Path to the book's text file
        file: PathBuf,

        /// Number of lines to show
        #[arg(short = 'n', long, default_value_t = source::PREVIEW_LINES)]
        lines: usize,

        /// Store directory (overrides config)
        #[arg(short, long)]
        store: Option<PathBuf>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default words per unit
    SetChunkSize {
        /// Words per unit (at least 1)
        value: usize,
    },
    /// Set default validation minimum
    SetMinWords {
        /// Minimum words per unit
        value: usize,
    },
    /// Set default store directory
    SetStore {
        /// Directory path
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.debug);

    let config = AppConfig::load().context("Failed to load configuration")?;
    log::debug!("Configuration: {:?}", config);

    match args.command {
        Commands::Split {
            file,
            chunk_size,
            store,
        } => {
            let store = Store::new(store.unwrap_or(config.store_dir));
            let run = split_book(&file, chunk_size.unwrap_or(config.chunk_size), &store)?;
            if run.created > 0 {
                println!(
                    "Wrote units {}-{} to {}",
                    run.first_index,
                    run.next_index - 1,
                    store.path().display()
                );
            } else {
                println!("No words left after cleaning; nothing written");
            }
            println!("Next available number: {}", run.next_index);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Verify { store, min_words } => {
            let store = Store::new(store.unwrap_or(config.store_dir));
            let report = validate::validate_store(&store, min_words.unwrap_or(config.minimum_words))
                .context("Validation failed")?;
            println!("{}", report);
            Ok(exit_code(report.passed()))
        }
        Commands::Check { file, min_words } => {
            let minimum = min_words.unwrap_or(config.minimum_words);
            let unit = validate::check_unit(&file, minimum)?;
            println!("Unit: {}", unit.path.display());
            println!("Minimum required: {} words", minimum);
            println!("{}", unit);
            Ok(exit_code(unit.is_ok()))
        }
        Commands::List { store } => {
            let store = Store::new(store.unwrap_or(config.store_dir));
            print_listing(&store)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Preview { file, lines, store } => {
            let text = source::read_source(&file)?;
            for line in source::preview_lines(&text, lines, source::PREVIEW_WIDTH) {
                println!("{}", line);
            }
            let store = Store::new(store.unwrap_or(config.store_dir));
            print_listing(&store)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => {
            handle_config_command(&action)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Read, clean, and chunk one book into the store.
fn split_book(file: &Path, chunk_size: usize, store: &Store) -> Result<text::ChunkRun> {
    log::info!("Reading {}", file.display());
    let raw = source::read_source(file)?;

    let (boundary, cleaned) = text::prepare_text(&raw);
    log::debug!(
        "Trimmed {} bytes of front matter ({}); {} words remain",
        boundary.offset,
        boundary.evidence,
        cleaned.split_whitespace().count()
    );

    let run = text::chunk_into_store(&cleaned, chunk_size, store)
        .with_context(|| format!("Failed to split {}", file.display()))?;
    Ok(run)
}

fn print_listing(store: &Store) -> Result<()> {
    let indices = store.indices()?;
    if indices.is_empty() {
        println!("Store '{}' is empty. Numbering starts at 1.", store.path().display());
    } else {
        let listed: Vec<String> = indices.iter().map(u64::to_string).collect();
        println!("Units in '{}': {}", store.path().display(), listed.join(", "));
        println!("Last number: {}", store.last_index()?);
    }
    Ok(())
}

/// Handle config subcommands
fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load()?;
            let path = AppConfig::config_path()?;
            println!("Config file: {}", path.display());
            println!();
            println!("Chunk size: {} words", config.chunk_size);
            println!("Minimum words: {}", config.minimum_words);
            println!("Store directory: {}", config.store_dir.display());
        }
        ConfigAction::SetChunkSize { value } => {
            if *value == 0 {
                anyhow::bail!("Chunk size must be at least 1 word");
            }
            let mut config = AppConfig::load()?;
            config.chunk_size = *value;
            config.save()?;
            println!("Chunk size set to: {} words", value);
        }
        ConfigAction::SetMinWords { value } => {
            let mut config = AppConfig::load()?;
            config.minimum_words = *value;
            config.save()?;
            println!("Minimum words set to: {}", value);
        }
        ConfigAction::SetStore { path } => {
            let mut config = AppConfig::load()?;
            config.store_dir = path.clone();
            config.save()?;
            println!("Store directory set to: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_split_args() {
        let args = Args::parse_from(["book-split", "split", "livro.txt", "-c", "500", "--store", "out"]);
        match args.command {
            Commands::Split {
                file,
                chunk_size,
                store,
            } => {
                assert_eq!(file, PathBuf::from("livro.txt"));
                assert_eq!(chunk_size, Some(500));
                assert_eq!(store, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_split_book_missing_file_leaves_store_alone() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("textos"));

        let result = split_book(&temp_dir.path().join("absent.txt"), 1000, &store);
        assert!(result.is_err());
        assert!(!store.exists());
    }

    #[test]
    fn test_split_then_verify() {
        let temp_dir = TempDir::new().unwrap();
        let book = temp_dir.path().join("livro.txt");
        let body: Vec<String> = (0..250).map(|i| format!("palavra{}", i)).collect();
        fs::write(&book, format!("Capa\n\n\n\n\nPrólogo\n{}", body.join(" "))).unwrap();
        let store = Store::new(temp_dir.path().join("textos"));

        let run = split_book(&book, 100, &store).unwrap();
        assert_eq!(run.created, 3);

        let report = validate::validate_store(&store, 100).unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.below_count(), 1);
        assert!(!report.passed());
    }
}
