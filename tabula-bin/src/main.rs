use std::io::{self, Read, Write};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use tabula::alphabet::LATIN;
use tabula::{CaseMode, Options, Vigenere};
use tabula_base64::{base64_cipher, decode_bytes, encode_bytes};

const DEMO_KEYWORD: &str = "FEAST";
const DEMO_KEYED_WORD: &str = "plane";
const DEMO_TEXT: &str = "Lorem ipsum dolor sit amet consectetur adipiscing elit Nullam finibus \
    lectus a urna consequat ac vestibulum magna tristique";

/// Vigenère cipher over any alphabet
#[derive(Parser)]
#[command(name = "tabula")]
#[command(version)]
#[command(about = "Encode and decode Vigenère ciphers using a tabula recta")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print timing and sizes to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the substitution table
    Table {
        #[command(flatten)]
        alphabet: AlphabetArgs,
    },

    /// Encipher text
    Encode(TransformArgs),

    /// Decipher text
    Decode(TransformArgs),

    /// Walk through the classic example: table, plaintext, cipher, round trip
    Demo {
        /// Use the alphabet keyed with "plane"
        #[arg(long)]
        keyed: bool,
    },
}

#[derive(Args)]
struct AlphabetArgs {
    /// Ordered cipher alphabet, every symbol distinct
    #[arg(short, long, default_value = LATIN)]
    alphabet: String,

    /// Move this word's letters to the front of the alphabet
    #[arg(long)]
    keyed: Option<String>,

    /// Treat upper and lower case as different symbols
    #[arg(long)]
    case_sensitive: bool,

    /// Do not drop whitespace from plaintext
    #[arg(long)]
    keep_whitespace: bool,
}

#[derive(Args)]
struct TransformArgs {
    #[command(flatten)]
    alphabet: AlphabetArgs,

    /// Keyword, repeated over the text
    #[arg(short, long)]
    key: String,

    /// Input text (read from stdin when omitted)
    #[arg(short, long)]
    text: Option<String>,

    /// Encipher raw bytes as base64 instead of text over the alphabet.
    /// Alphabet options are ignored.
    #[arg(long)]
    base64: bool,
}

impl AlphabetArgs {
    fn build(&self) -> Result<Vigenere> {
        let options = Options {
            case: if self.case_sensitive { CaseMode::Sensitive } else { CaseMode::Fold },
            strip_whitespace: !self.keep_whitespace,
        };
        let cipher = match &self.keyed {
            Some(word) => Vigenere::keyed(&self.alphabet, word, options),
            None => Vigenere::new(&self.alphabet, options),
        };
        cipher.context("Failed to build cipher alphabet")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    match cli.command {
        Commands::Table { alphabet } => {
            let cipher = alphabet.build()?;
            println!("{}", cipher.table());
        }
        Commands::Encode(args) => {
            let start = Instant::now();
            let input = read_input(args.text.as_deref())?;
            let output = if args.base64 {
                let cipher = base64_cipher()?;
                encode_bytes(&cipher, &args.key, &input).context("Failed to encode")?
            } else {
                let text = String::from_utf8(input).context("Input is not valid UTF-8")?;
                let text = text.trim_end_matches(['\n', '\r']);
                args.alphabet.build()?.encode(&args.key, text).context("Failed to encode")?
            };
            println!("{}", output);
            report(verbose, "encoded", output.chars().count(), start);
        }
        Commands::Decode(args) => {
            let start = Instant::now();
            let input = read_input(args.text.as_deref())?;
            let text = String::from_utf8(input).context("Input is not valid UTF-8")?;
            let text = text.trim_end_matches(['\n', '\r']);
            if args.base64 {
                let cipher = base64_cipher()?;
                let bytes = decode_bytes(&cipher, &args.key, text).context("Failed to decode")?;
                match String::from_utf8(bytes) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        io::stdout().write_all(e.as_bytes()).context("Failed to write output")?;
                    }
                }
            } else {
                let output =
                    args.alphabet.build()?.decode(&args.key, text).context("Failed to decode")?;
                println!("{}", output);
            }
            report(verbose, "decoded", text.chars().count(), start);
        }
        Commands::Demo { keyed } => demo(keyed, verbose)?,
    }

    Ok(())
}

fn demo(keyed: bool, verbose: bool) -> Result<()> {
    let start = Instant::now();
    let cipher = if keyed {
        Vigenere::keyed(LATIN, DEMO_KEYED_WORD, Options::default())?
    } else {
        Vigenere::new(LATIN, Options::default())?
    };
    println!("{}", cipher.table());
    println!("Plain Text: {}", DEMO_TEXT);
    let encoded = cipher.encode(DEMO_KEYWORD, DEMO_TEXT)?;
    println!("Cipher: {}", encoded);
    let decoded = cipher.decode(DEMO_KEYWORD, &encoded)?;
    println!("Deciphered Text: {}", decoded);
    if decoded != cipher.prepare(DEMO_TEXT) {
        bail!("Round trip mismatch");
    }
    report(verbose, "demo", encoded.chars().count(), start);
    Ok(())
}

fn read_input(text: Option<&str>) -> Result<Vec<u8>> {
    match text {
        Some(t) => Ok(t.as_bytes().to_vec()),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn report(verbose: bool, what: &str, symbols: usize, start: Instant) {
    if verbose {
        let elapsed = start.elapsed();
        eprintln!("{} {} symbols in {:?}", what, symbols, elapsed);
    }
}
