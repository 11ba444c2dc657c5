//! mempass inspection CLI.
//!
//! Loads an optional TOML override file, builds an instance from the
//! defaults plus overrides, and reports on the result.
//!
//! ```text
//! mempass --config mempass.toml check
//! mempass --dictionary /usr/share/dict/words words --limit 20
//! mempass random --count 5 --max 100
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mempass::observability::logging;
use mempass::{default_config, keys, load_overrides, ConfigValue, Configuration, Instance};

#[derive(Parser)]
#[command(name = "mempass")]
#[command(about = "Validate and inspect memorable-password generator settings", long_about = None)]
struct Cli {
    /// TOML file with configuration overrides.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dictionary file, takes precedence over the config file.
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and dictionary
    Check,
    /// Print the effective configuration as JSON
    Show,
    /// List the words within the configured length range
    Words {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Draw random numbers from the configured source
    Random {
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// Draw integers in 0..MAX instead of fractions.
        #[arg(short, long)]
        max: Option<usize>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut overrides = match &cli.config {
        Some(path) => load_overrides(path)?,
        None => Configuration::new(),
    };
    if let Some(dictionary) = &cli.dictionary {
        overrides.insert(
            keys::DICTIONARY_FILE_PATH,
            ConfigValue::scalar(dictionary.display()),
        );
    }

    let config = default_config(Some(&overrides))?;
    let mut instance = Instance::new(Some(&config))?;

    match cli.command {
        Commands::Check => {
            println!(
                "configuration OK: {} of {} dictionary words usable",
                instance.filtered_words().len(),
                instance.all_words().len()
            );
        }
        Commands::Show => {
            println!("{}", serde_json::to_string_pretty(&instance.get_config())?);
        }
        Commands::Words { limit } => {
            let words = instance.filtered_words();
            for word in words.iter().take(limit.unwrap_or(words.len())) {
                println!("{word}");
            }
        }
        Commands::Random { count, max } => {
            for _ in 0..count {
                match max {
                    Some(max) => println!("{}", instance.next_random_int(max)?),
                    None => println!("{}", instance.next_random()?),
                }
            }
        }
    }

    Ok(())
}
