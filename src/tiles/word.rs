use super::{Letter, DIM};
use crate::error::Error;
use crate::labelset::LetterSet;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;
use tinyvec::ArrayVec;

type Letters = ArrayVec<[Letter; DIM]>;

/// A word of 1 up to 15 letters, short enough to be played on the board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Word(Letters);

impl Word {
    /// Number of letters in the word
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<Letter> {
        self.0.iter()
    }

    /// The letters as a slice
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// The set of distinct letters in the word.
    pub fn letter_set(&self) -> LetterSet {
        self.iter().copied().collect()
    }

    /// Sum of the face values of all letters.
    pub fn points(&self) -> u32 {
        self.iter().map(|letter| letter.points()).sum()
    }
}

impl Index<usize> for Word {
    type Output = Letter;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Letter;
    type IntoIter = Iter<'a, Letter>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Parse a word, ignoring case.
/// ## Errors
/// If the word is empty, longer than 15 letters, or has a character that is not a letter.
/// ## Examples
/// ```
/// use scrabble_helper::{Error, Word};
/// let word: Word = "Rust".parse()?;
/// assert_eq!(word.to_string(), "RUST");
/// assert!("rust!".parse::<Word>().is_err());
/// # Ok::<(), Error>(())
/// ```
impl FromStr for Word {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len == 0 || len > DIM {
            return Err(Error::InvalidWord(String::from(s)));
        }
        s.chars()
            .map(Letter::try_from)
            .collect::<Result<Word, Error>>()
            .map_err(|_| Error::InvalidWord(String::from(s)))
    }
}

impl TryFrom<String> for Word {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.to_string()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(|&letter| char::from(letter)).collect();
        write!(f, "{}", s)
    }
}
