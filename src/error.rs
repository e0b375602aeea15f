use hufftree::TreeError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("invalid letter {0:?}, each letter must be a single alphabetical character")]
    InvalidLetter(String),
    #[error("letter {0:?} was entered twice")]
    DuplicateLetter(char),
    #[error("expected exactly {expected} letters, got {got}")]
    WrongLetterCount { expected: usize, got: usize },
    #[error("expected {expected} frequencies, got {got}")]
    WrongFrequencyCount { expected: usize, got: usize },
    #[error("{0:?} is not a non-negative integer frequency")]
    UnparsableFrequency(String),
    #[error("invalid frequency {frequency} for {letter:?}, the total must not exceed {max_total}")]
    InvalidFrequency {
        letter: char,
        frequency: u32,
        max_total: u32,
    },
    #[error(transparent)]
    Tree(#[from] TreeError),
}
