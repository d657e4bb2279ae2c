use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emoji_scan::dictionary::{hex_key, parse_hex_key};
use emoji_scan::index::{load_configured, stats};
use emoji_scan::utils::app_data::{get_config_path, AppConfig};
use emoji_scan::utils::logging::init_logging;
use emoji_scan::{output, EmojiIndex};
use rayon::prelude::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "emoji-scan")]
#[command(about = "Find, look up and remove emoji in text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary JSON file (overrides EMOJI_SCAN_DICTIONARY and config)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every emoji in the text
    Find {
        /// Text to scan (reads stdin when omitted)
        text: Vec<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the text with all emoji removed
    Remove {
        /// Text to clean (reads stdin line by line when omitted)
        text: Vec<String>,
    },
    /// Print the text with each emoji replaced by its shortcode
    Replace {
        /// Text to rewrite (reads stdin line by line when omitted)
        text: Vec<String>,
    },
    /// Look up emoji by value
    Lookup {
        /// One or more emoji
        #[arg(required = true)]
        values: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up an emoji by shortcode
    Code {
        /// Shortcode such as :grinning:
        shortcode: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all dictionary records
    List {
        /// Print the dictionary in its JSON file format
        #[arg(long)]
        json: bool,
    },
    /// Show dictionary statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the dictionary key for a raw string
    Key {
        /// Raw emoji string, or a key such as 1F600 with --decode
        text: String,

        /// Decode a key back into its emoji
        #[arg(short, long)]
        decode: bool,
    },
    /// Show or change the saved configuration
    Config {
        /// Dictionary file to load by default
        #[arg(long, value_name = "PATH", conflicts_with = "clear_dictionary")]
        set_dictionary: Option<PathBuf>,

        /// Go back to the embedded dictionary
        #[arg(long)]
        clear_dictionary: bool,

        /// Whether a broken dictionary file falls back to the embedded data
        #[arg(long, value_name = "BOOL")]
        fallback: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Config {
        set_dictionary,
        clear_dictionary,
        fallback,
    } = cli.command
    {
        return configure(set_dictionary, clear_dictionary, fallback);
    }

    let index = load_configured(cli.dictionary.as_deref())?;
    let color = !cli.no_color;

    match cli.command {
        Commands::Find { text, json } => {
            let text = input_text(text)?;
            let matches = index.find_all(&text);
            if json {
                output::print_json(&matches)?;
            } else {
                output::print_matches(&text, &matches, color)?;
            }
        }
        Commands::Remove { text } => {
            print_per_line(&index, text, |index, line| index.remove_all(line))?;
        }
        Commands::Replace { text } => {
            print_per_line(&index, text, |index, line| index.replace_with_shortcodes(line))?;
        }
        Commands::Lookup { values, json } => {
            let results = index.lookup_many(&values);
            if json {
                output::print_json(&results)?;
            } else {
                output::print_lookup_results(&results, color)?;
            }
        }
        Commands::Code { shortcode, json } => {
            let record = index.lookup_by_shortcode(&shortcode)?;
            if json {
                output::print_json(record.as_ref())?;
            } else {
                output::print_records([record.as_ref()], color)?;
            }
        }
        Commands::List { json } => {
            if json {
                println!("{}", index.dictionary().to_json_pretty()?);
            } else {
                output::print_records(index.all_records().iter().map(|r| r.as_ref()), color)?;
            }
        }
        Commands::Stats { json } => {
            if json {
                output::print_json(&index.stats())?;
            } else {
                stats::show_stats(&index);
            }
        }
        Commands::Key { text, decode: false } => {
            let key = hex_key(&text);
            match index.dictionary().get(&key) {
                Some(record) => println!("{key}\t{}", record.descriptor),
                None => println!("{key}"),
            }
        }
        Commands::Key { text, decode: true } => {
            let value = parse_hex_key(&text)
                .with_context(|| format!("Invalid dictionary key \"{text}\""))?;
            match index.dictionary().get(&hex_key(&value)) {
                Some(record) => println!("{value}\t{}", record.descriptor),
                None => println!("{value}"),
            }
        }
        Commands::Config { .. } => unreachable!("handled before loading the dictionary"),
    }

    Ok(())
}

/// Apply the requested changes to the saved config, then print it
fn configure(
    set_dictionary: Option<PathBuf>,
    clear_dictionary: bool,
    fallback: Option<bool>,
) -> Result<()> {
    let mut config = AppConfig::load()?;
    let changed = set_dictionary.is_some() || clear_dictionary || fallback.is_some();

    if let Some(path) = set_dictionary {
        config.dictionary_path = Some(std::path::absolute(&path).unwrap_or(path));
    }
    if clear_dictionary {
        config.dictionary_path = None;
    }
    if let Some(fallback) = fallback {
        config.fallback_to_embedded = fallback;
    }
    if changed {
        config.save()?;
    }

    println!("Config file:      {}", get_config_path()?.display());
    match &config.dictionary_path {
        Some(path) => println!("Dictionary:       {}", path.display()),
        None => println!("Dictionary:       embedded"),
    }
    println!("Fallback:         {}", config.fallback_to_embedded);
    Ok(())
}

/// Joined arguments, or all of stdin when there are none
fn input_text(args: Vec<String>) -> Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
    Ok(text)
}

/// Apply `transform` to the argument text, or to each stdin line in parallel
fn print_per_line<F>(index: &EmojiIndex, args: Vec<String>, transform: F) -> Result<()>
where
    F: Fn(&EmojiIndex, &str) -> String + Sync,
{
    if !args.is_empty() {
        println!("{}", transform(index, &args.join(" ")));
        return Ok(());
    }

    let text = input_text(args)?;
    let lines: Vec<&str> = text.lines().collect();
    let transformed: Vec<String> = lines
        .par_iter()
        .map(|line| transform(index, line))
        .collect();

    for line in transformed {
        println!("{line}");
    }
    Ok(())
}
