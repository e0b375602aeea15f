//! huffcode command-line interface
//!
//! Prints the huffman code of every letter of a ten letter alphabet.

use huffcode::{huffman_codes, parse_frequencies, parse_letters, Alphabet, AlphabetError};
use log::{info, warn};
use std::process;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "huffcode",
    about = "Builds huffman codes for a ten letter alphabet with percentage frequencies.",
    rename_all = "kebab"
)]
struct Opt {
    /// Ten letters separated by spaces or commas. Uses A-J with default frequencies if missing
    #[structopt(long)]
    letters: Option<String>,

    /// Frequencies of the first nine letters, the last letter gets the remainder to 100
    #[structopt(long)]
    frequencies: Option<String>,

    /// Additionally print the tree in graphviz dot format
    #[structopt(long)]
    dot: bool,
}

fn load_alphabet(opt: &Opt) -> Result<Alphabet, AlphabetError> {
    let letters = match &opt.letters {
        Some(letters) => parse_letters(letters)?,
        None => {
            if opt.frequencies.is_some() {
                warn!("--frequencies is ignored without --letters, using the default alphabet");
            }
            return Ok(Alphabet::default());
        }
    };
    let frequencies = match &opt.frequencies {
        Some(frequencies) => parse_frequencies(frequencies)?,
        None => vec![],
    };
    Alphabet::from_partial_frequencies(&letters, &frequencies)
}

/// Renders everything the cli prints to stdout.
fn report(opt: &Opt) -> Result<String, AlphabetError> {
    let alphabet = load_alphabet(opt)?;
    let mut out = String::new();

    out += "Initialized letters and frequencies:\n";
    for symbol in alphabet.symbols() {
        out += &format!("{}: {}%\n", symbol.symbol, symbol.weight);
    }
    if opt.letters.is_some() {
        if let Some(last) = alphabet.symbols().last() {
            out += &format!(
                "Remaining frequency assigned to {}: {}%\n",
                last.symbol, last.weight
            );
        }
    }

    let (tree, codes) = huffman_codes(&alphabet)?;
    info!(
        "built tree with {} merges, average code length {:.2} bits",
        tree.num_merges(),
        tree.average_code_length()
    );

    out += "Huffman codes:\n";
    for symbol in alphabet.symbols() {
        if let Some(code) = codes.get(symbol.symbol) {
            out += &format!("{}: {}\n", symbol.symbol, code);
        }
    }

    if opt.dot {
        out += &format!("{}\n", tree);
    }
    Ok(out)
}

fn run(opt: &Opt) -> Result<(), AlphabetError> {
    print!("{}", report(opt)?);
    Ok(())
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    if let Err(err) = run(&opt) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
