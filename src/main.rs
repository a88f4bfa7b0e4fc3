//! Letterset - CLI
//!
//! Alphagrams, multiset differences, anagram heuristics and shift ciphers
//! for word puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letterset::{
    cipher::{
        Offset, VigenereKey, caesar_shift, caesar_unshift, phonespell, un_phonespell,
        vigenere_decode, vigenere_encode,
    },
    commands::{analyze_letters, compare_letters, rank_shifts},
    core::Slug,
    letters::random_letters,
    ngrams::{CorpusConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR, bigram_freqs_or_unseen},
    output::{print_compare_result, print_letter_report, print_shift_report},
    wordlists::{AlphagramIndex, loader::load_from_file},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "letterset",
    about = "Letter-multiset tools for anagram and cipher puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding letter_bigrams.txt and letter_trigrams.txt
    #[arg(long, global = true, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Log library activity to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the alphagram, alphabytes, anahash and anagram cost of some text
    Analyze {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Compare the letters of two pieces of text
    Diff {
        /// Letters available
        first: String,

        /// Letters to take away
        second: String,

        /// Also subtract exactly, failing if the second has letters the first lacks
        #[arg(short, long)]
        exact: bool,
    },

    /// Caesar-shift text (all 26 shifts, best starred, unless --shift is given)
    Caesar {
        #[arg(required = true)]
        text: Vec<String>,

        /// Shift by a number or a letter (C means A→C)
        #[arg(short, long, allow_hyphen_values = true)]
        shift: Option<Offset>,

        /// Shift backwards instead
        #[arg(short, long, requires = "shift")]
        unshift: bool,
    },

    /// Vigenère-encode text (non-letters are dropped)
    Vigenere {
        text: String,

        key: String,

        /// Decode instead of encode
        #[arg(short, long)]
        decode: bool,

        /// Use the A + A = B convention
        #[arg(short, long)]
        one_based: bool,
    },

    /// Spell letters as phone keypad digits
    Phone {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Turn phone keypad digits into a letter regex
    Unphone { digits: String },

    /// Draw random letters distributed like English
    Random {
        /// Number of letters
        #[arg(default_value = "10")]
        count: usize,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Find exact anagrams of some text in a word list
    Anagrams {
        #[arg(required = true)]
        text: Vec<String>,

        /// Word list file, one entry per line
        #[arg(short, long)]
        wordlist: PathBuf,
    },
}

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = CorpusConfig::new(cli.data_dir);

    match cli.command {
        Commands::Analyze { text } => run_analyze_command(&text.join(" ")),
        Commands::Diff {
            first,
            second,
            exact,
        } => {
            print_compare_result(&compare_letters(&first, &second, exact));
            Ok(())
        }
        Commands::Caesar {
            text,
            shift,
            unshift,
        } => {
            run_caesar_command(&text.join(" "), shift, unshift, &config);
            Ok(())
        }
        Commands::Vigenere {
            text,
            key,
            decode,
            one_based,
        } => run_vigenere_command(&text, &key, decode, one_based),
        Commands::Phone { text } => {
            println!("{}", phonespell(&text.join(" ")));
            Ok(())
        }
        Commands::Unphone { digits } => {
            println!("{}", un_phonespell(&digits)?);
            Ok(())
        }
        Commands::Random { count, seed } => {
            let letters = match seed {
                Some(seed) => random_letters(count, &mut StdRng::seed_from_u64(seed)),
                None => random_letters(count, &mut rand::rng()),
            };
            println!("{letters}");
            Ok(())
        }
        Commands::Anagrams { text, wordlist } => run_anagrams_command(&text.concat(), &wordlist),
    }
}

fn run_analyze_command(text: &str) -> Result<()> {
    let report = analyze_letters(text)?;
    print_letter_report(&report);
    Ok(())
}

fn run_caesar_command(text: &str, shift: Option<Offset>, unshift: bool, config: &CorpusConfig) {
    match shift {
        Some(offset) if unshift => println!("{}", caesar_unshift(text, offset)),
        Some(offset) => println!("{}", caesar_shift(text, offset)),
        None => {
            let bigrams = bigram_freqs_or_unseen(config);
            print_shift_report(&rank_shifts(text, bigrams));
        }
    }
}

fn run_vigenere_command(text: &str, key: &str, decode: bool, one_based: bool) -> Result<()> {
    let key = VigenereKey::new(key)?;
    let result = if decode {
        vigenere_decode(text, &key, one_based)
    } else {
        vigenere_encode(text, &key, one_based)
    };
    println!("{result}");
    Ok(())
}

fn run_anagrams_command(text: &str, wordlist: &Path) -> Result<()> {
    let entries = load_from_file(wordlist)
        .with_context(|| format!("failed to read word list {}", wordlist.display()))?;
    let index = AlphagramIndex::from_entries(&entries);

    let slug = Slug::from_text(text);
    let found = index.anagrams_of(&slug);
    println!("Anagrams for {text} ({} entries searched):", index.len());
    for entry in found {
        println!("  {entry}");
    }
    if found.is_empty() {
        println!("  (none)");
    }
    Ok(())
}
