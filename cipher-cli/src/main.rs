#![deny(missing_docs)]
//! A command-line interface for the classical cipher toolkit.

use cipher_core::dispatch::{KeyMaterial, Mode, Options, Request, Response, Variant, process};
use cipher_core::pad::OneTimePad;
use cipher_core::random::{RandomSource, RngSource};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod format;
mod interactive;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# List the ciphers\ncipher-cli ciphers\n\n# Encrypt with the Caesar cipher\ncipher-cli encrypt caesar \"attack at dawn\"\n\n# Encrypt a file with the Affine cipher, keeping spaces and punctuation, in five-letter blocks\ncipher-cli encrypt affine --input ./letter.txt --multiplier 5 --offset 8 --intelligent --blocks\n\n# Decrypt with the ADFGVX cipher and a one-time pad\ncipher-cli decrypt adfgvx \"FAXDF ...\" --keyword privacy --permutation german --pad secret\n\n# Start the menu-driven session\ncipher-cli interactive"
)]
struct Cli {
    /// Seed for the random choices, for reproducible ciphertext.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available ciphers
    Ciphers {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encrypt text
    Encrypt {
        /// The cipher to use, by name or menu letter
        #[arg()]
        variant: Variant,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        keys: KeyArgs,

        /// Escape spaces, capitals and punctuation so they survive encryption
        #[arg(long)]
        intelligent: bool,

        /// One-time pad code (letters and digits) applied before the cipher
        #[arg(long, value_name = "CODE")]
        pad: Option<String>,

        /// Print the ciphertext in five-character blocks (two-digit numbers for the Polybius square)
        #[arg(long)]
        blocks: bool,

        /// Break the ciphertext into lines of at most 60 characters (25 numbers for the Polybius square)
        #[arg(long)]
        wrap: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decrypt text
    Decrypt {
        /// The cipher to use, by name or menu letter
        #[arg()]
        variant: Variant,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        keys: KeyArgs,

        /// The one-time pad code used when the message was encrypted
        #[arg(long, value_name = "CODE")]
        pad: Option<String>,

        /// Do not restore spaces, capitals and punctuation
        #[arg(long)]
        raw: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start the menu-driven session
    Interactive,
}

#[derive(Args)]
struct InputArgs {
    /// The text to process. If omitted, it is read from --input or standard input.
    #[arg()]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,
}

#[derive(Args)]
struct KeyArgs {
    /// Keyword (Keyword, Bifid; Hill also takes digits and '-') or substitution keyword (ADFGVX)
    #[arg(short, long)]
    keyword: Option<String>,

    /// Permutation keyword (ADFGVX)
    #[arg(long)]
    permutation: Option<String>,

    /// First key number, coprime to 36 (Affine)
    #[arg(long, allow_negative_numbers = true)]
    multiplier: Option<i64>,

    /// Second key number, any integer (Affine)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Index letter from the inner disk (Alberti)
    #[arg(long, value_name = "LETTER")]
    index_letter: Option<char>,
}

impl From<KeyArgs> for KeyMaterial {
    fn from(args: KeyArgs) -> Self {
        Self {
            keyword: args.keyword,
            permutation: args.permutation,
            multiplier: args.multiplier,
            offset: args.offset,
            index_letter: args.index_letter,
        }
    }
}

/// One line of the cipher listing.
#[derive(Serialize)]
struct CipherEntry {
    id: Variant,
    keystroke: char,
    name: &'static str,
}

fn read_text(input: InputArgs) -> String {
    let text = if let Some(text) = input.text {
        text
    } else if let Some(path) = input.input {
        fs::read_to_string(&path).unwrap_or_else(|e| {
            error!("Failed to read input file '{}': {e}", path.display());
            std::process::exit(1);
        })
    } else {
        let mut buffer = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buffer) {
            error!("Failed to read standard input: {e}");
            std::process::exit(1);
        }
        buffer
    };
    text.trim_end_matches(['\n', '\r']).to_string()
}

fn parse_pad(code: Option<&str>) -> Option<OneTimePad> {
    code.map(|code| {
        OneTimePad::new(code).unwrap_or_else(|e| {
            error!("Invalid one-time pad code: {e}");
            std::process::exit(1);
        })
    })
}

fn run_request(
    variant: Variant,
    mode: Mode,
    text: String,
    keys: &KeyMaterial,
    options: Options,
    rng: &mut dyn RandomSource,
) -> Response {
    let request = Request::new(variant, mode, text, keys, options).unwrap_or_else(|e| {
        error!("Cannot use the {variant} cipher: {e}");
        std::process::exit(1);
    });
    info!(
        "{mode} {} characters with the {variant} cipher.",
        request.text.chars().count()
    );
    process(&request, rng)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn finish(response: &Response, json: bool, presented: impl FnOnce(&str) -> String) {
    if json {
        print_json(response);
    }
    if let Some(diagnostic) = &response.diagnostic {
        error!(
            "Failed to {} with the {} cipher: {diagnostic}",
            response.mode.to_string().to_lowercase(),
            response.variant
        );
        std::process::exit(1);
    }
    if !json {
        println!("{}", presented(&response.output));
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            info!("Using a seeded random number generator ({seed}).");
            Box::new(RngSource::seeded(seed))
        }
        None => Box::new(RngSource::thread()),
    };

    match cli.command {
        Commands::Ciphers { json } => {
            let entries: Vec<CipherEntry> = Variant::ALL
                .iter()
                .map(|&id| CipherEntry {
                    id,
                    keystroke: id.keystroke(),
                    name: id.name(),
                })
                .collect();
            if json {
                print_json(&entries);
            } else {
                println!("Available ciphers:");
                for entry in &entries {
                    println!("  [{}] {}", entry.keystroke, entry.name);
                }
            }
        }
        Commands::Encrypt {
            variant,
            input,
            keys,
            intelligent,
            pad,
            blocks,
            wrap,
            json,
        } => {
            let options = Options {
                intelligent,
                pad: parse_pad(pad.as_deref()),
            };
            let text = read_text(input);
            let response = run_request(
                variant,
                Mode::Encrypt,
                text,
                &keys.into(),
                options,
                rng.as_mut(),
            );
            finish(&response, json, |output| {
                format::present(variant, output, blocks, wrap)
            });
        }
        Commands::Decrypt {
            variant,
            input,
            keys,
            pad,
            raw,
            json,
        } => {
            let options = Options {
                intelligent: !raw,
                pad: parse_pad(pad.as_deref()),
            };
            let text = read_text(input);
            let response = run_request(
                variant,
                Mode::Decrypt,
                text,
                &keys.into(),
                options,
                rng.as_mut(),
            );
            finish(&response, json, str::to_string);
        }
        Commands::Interactive => interactive::run(rng.as_mut()),
    }
}
