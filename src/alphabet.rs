use hufftree::Symbol;
use log::debug;

use crate::error::AlphabetError;

/// number of letters an alphabet consists of
pub const ALPHABET_SIZE: usize = 10;
/// the frequencies of an alphabet are percentages
pub const FREQUENCY_TOTAL: u32 = 100;

pub const DEFAULT_LETTERS: [char; ALPHABET_SIZE] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
pub const DEFAULT_FREQUENCIES: [u32; ALPHABET_SIZE] = [10, 15, 12, 3, 4, 13, 1, 8, 20, 14];

/// The symbols handed to the tree builder, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            symbols: DEFAULT_LETTERS
                .iter()
                .zip(DEFAULT_FREQUENCIES.iter())
                .map(|(letter, frequency)| Symbol::new(*letter, *frequency))
                .collect(),
        }
    }
}

impl Alphabet {
    /// Takes explicit (letter, weight) pairs. Size and weights are not restricted, the tree builder
    /// rejects empty and duplicate input.
    pub fn from_pairs(pairs: &[(char, u32)]) -> Self {
        Alphabet {
            symbols: pairs.iter().copied().map(Symbol::from).collect(),
        }
    }

    /// Takes the frequencies for all letters but the last one, the last letter gets the remainder
    /// to [`FREQUENCY_TOTAL`].
    ///
    /// The running total has to stay below [`FREQUENCY_TOTAL`], so the last letter always ends up
    /// with a frequency of at least 1.
    pub fn from_partial_frequencies(
        letters: &[char],
        frequencies: &[u32],
    ) -> Result<Self, AlphabetError> {
        if letters.is_empty() || frequencies.len() != letters.len() - 1 {
            return Err(AlphabetError::WrongFrequencyCount {
                expected: letters.len().saturating_sub(1),
                got: frequencies.len(),
            });
        }
        let mut total: u32 = 0;
        let mut symbols = Vec::with_capacity(letters.len());
        for (letter, frequency) in letters.iter().zip(frequencies) {
            if total.saturating_add(*frequency) >= FREQUENCY_TOTAL {
                return Err(AlphabetError::InvalidFrequency {
                    letter: *letter,
                    frequency: *frequency,
                    max_total: FREQUENCY_TOTAL - 1,
                });
            }
            total += *frequency;
            symbols.push(Symbol::new(*letter, *frequency));
        }
        let last = letters[letters.len() - 1];
        debug!(
            "remaining frequency {} assigned to {:?}",
            FREQUENCY_TOTAL - total,
            last
        );
        symbols.push(Symbol::new(last, FREQUENCY_TOTAL - total));

        Ok(Alphabet { symbols })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn total_weight(&self) -> u64 {
        self.symbols.iter().map(|symbol| symbol.weight as u64).sum()
    }
}

fn split_tokens<'a>(input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parses exactly [`ALPHABET_SIZE`] letters separated by whitespace or commas.
///
/// Every token must be a single ascii letter, letters are upper cased.
pub fn parse_letters(input: &str) -> Result<Vec<char>, AlphabetError> {
    let mut letters = Vec::with_capacity(ALPHABET_SIZE);
    for token in split_tokens(input) {
        let mut chars = token.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_ascii_alphabetic() => letter.to_ascii_uppercase(),
            _ => return Err(AlphabetError::InvalidLetter(token.to_string())),
        };
        if letters.contains(&letter) {
            return Err(AlphabetError::DuplicateLetter(letter));
        }
        letters.push(letter);
    }
    if letters.len() != ALPHABET_SIZE {
        return Err(AlphabetError::WrongLetterCount {
            expected: ALPHABET_SIZE,
            got: letters.len(),
        });
    }
    Ok(letters)
}

/// Parses non-negative integer frequencies separated by whitespace or commas.
pub fn parse_frequencies(input: &str) -> Result<Vec<u32>, AlphabetError> {
    split_tokens(input)
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| AlphabetError::UnparsableFrequency(token.to_string()))
        })
        .collect()
}
