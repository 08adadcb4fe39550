mod embedded;

use crate::labelset::LetterSet;
use crate::{Error, Letter, Rack, Word};
use log::{debug, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

pub use self::embedded::DEFAULT_WORDS;

/// A word with its precomputed set of letters.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Entry {
    word: Word,
    letters: LetterSet,
}

/// The set of valid words, read-only once it is built.
///
/// Words are stored in the order they were read, without duplicates. Each word keeps
/// its set of letters, so that words that can never be formed from a rack are
/// skipped without looking at letter counts.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lexicon {
    entries: Vec<Entry>,
    words: HashSet<Word>,
    /// Path of the wordfile used to build the lexicon.
    /// Empty if the lexicon is not build from a file.
    pub wordfile: String,
    /// Number of lines that could not be used as a word
    pub skipped: usize,
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Lexicon: {} words from '{}'>",
            self.len(),
            self.wordfile
        )
    }
}

impl Lexicon {
    /// Build a lexicon from a list of words, ignoring case.
    /// Entries that can not be played (empty, longer than 15 letters, or with other
    /// characters than `a`..`z`) are skipped.
    /// ## Example
    /// ```
    /// use scrabble_helper::Lexicon;
    /// let lexicon = Lexicon::from_words(&["aardvark", "Zebra", "zebra", "e-mail"]);
    /// assert_eq!(lexicon.len(), 2);
    /// assert_eq!(lexicon.skipped, 1);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Lexicon {
        let mut lexicon = Lexicon::default();
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Read the lexicon from a file. The file must be encoded in utf-8 and
    /// have one word per line. Blank lines are ignored.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Lexicon, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut lexicon = Lexicon::default();
        for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
            lexicon.insert(line);
        }
        lexicon.wordfile = String::from(wordfile);
        debug!("{}, {} lines skipped", lexicon, lexicon.skipped);
        Ok(lexicon)
    }

    /// Read the lexicon from `wordfile`, or fall back to the built-in
    /// [`default`](Lexicon::builtin) words if the file can not be read.
    pub fn from_file_or_default(wordfile: &str) -> Lexicon {
        match Lexicon::from_file(wordfile) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                warn!("{}, using built-in word list", err);
                Lexicon::builtin()
            }
        }
    }

    /// A small built-in lexicon, used when no wordfile is available.
    pub fn builtin() -> Lexicon {
        let mut lexicon = Lexicon::from_words(DEFAULT_WORDS);
        lexicon.wordfile = String::from("<built-in>");
        lexicon
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize the lexicon from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Lexicon, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut lexicon: Lexicon = bincode::deserialize_from(reader)
            .map_err(|_| Error::LexiconDeserializeError(String::from(wordfile)))?;
        lexicon.wordfile = String::from(wordfile);
        Ok(lexicon)
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Serialize the lexicon to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::WriteError {
            path: String::from(path),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::LexiconDeserializeError(String::from(path)))
    }

    fn insert(&mut self, word: &str) {
        match word.parse::<Word>() {
            Ok(word) => {
                if self.words.insert(word) {
                    self.entries.push(Entry {
                        word,
                        letters: word.letter_set(),
                    });
                }
            }
            Err(_) => self.skipped += 1,
        }
    }

    /// The number of words in the lexicon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `word` is in the lexicon
    pub fn is_word(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the words, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.word)
    }

    /// Return every word that can be formed with the letters of `rack`, where each letter
    /// on the rack is used at most once. If `required` is given, one occurrence of that
    /// letter may be used without taking it from the rack.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// use scrabble_helper::{Error, Letter, Lexicon, Rack};
    /// let lexicon = Lexicon::from_words(&["cat", "act", "tact", "cart", "at"]);
    /// let rack: Rack = "tac".parse()?;
    /// let words: Vec<String> = lexicon.candidates(&rack, None).iter().map(|w| w.to_string()).collect();
    /// assert_eq!(words, vec!["CAT", "ACT", "AT"]);
    ///
    /// let words = lexicon.candidates(&rack, Some(Letter::try_from('t')?));
    /// assert_eq!(words.len(), 4); // CAT ACT TACT AT
    /// # Ok::<(), Error>(())
    /// ```
    pub fn candidates(&self, rack: &Rack, required: Option<Letter>) -> Vec<&Word> {
        let mut available = rack.letter_set();
        if let Some(letter) = required {
            available.insert(letter);
        }
        let accept = |entry: &&Entry| {
            entry.letters.is_subset(available) && rack.can_form(&entry.word, required)
        };
        #[cfg(feature = "rayon")]
        let words: Vec<&Word> = self
            .entries
            .par_iter()
            .filter(accept)
            .map(|entry| &entry.word)
            .collect();
        #[cfg(not(feature = "rayon"))]
        let words: Vec<&Word> = self
            .entries
            .iter()
            .filter(accept)
            .map(|entry| &entry.word)
            .collect();
        words
    }
}
