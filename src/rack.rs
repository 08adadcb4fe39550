use crate::labelset::LetterSet;
use crate::{Error, Letter, Word};
use multiset::HashMultiSet;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The maximum number of letters on a rack
pub const RACK_SIZE: usize = 7;

/// The letters a player can use for a move, as a multiset.
///
/// A rack is never depleted by looking for moves: every check works on a scratch copy
/// of the letter counts, which is dropped afterwards.
#[derive(Debug, Clone)]
pub struct Rack {
    letters: HashMultiSet<Letter>,
    set: LetterSet,
}

impl Rack {
    /// Create a rack from 1 up to 7 letters.
    /// ## Errors
    /// If `letters` is empty or has more than 7 letters.
    pub fn new(letters: &[Letter]) -> Result<Rack, Error> {
        if letters.is_empty() || letters.len() > RACK_SIZE {
            let s: String = letters.iter().map(|&letter| char::from(letter)).collect();
            return Err(Error::InvalidRack(s));
        }
        let mut multiset = HashMultiSet::new();
        for &letter in letters {
            multiset.insert(letter);
        }
        Ok(Rack {
            letters: multiset,
            set: letters.iter().copied().collect(),
        })
    }

    /// Number of letters on the rack
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.len() == 0
    }

    /// Number of times `letter` is on the rack
    pub fn count_of(&self, letter: Letter) -> usize {
        self.letters.count_of(&letter)
    }

    /// The letters on the rack, sorted.
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.letters.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// The set of distinct letters on the rack
    pub fn letter_set(&self) -> LetterSet {
        self.set
    }

    /// Check if `letters` can be paid from the rack, using at most one occurrence
    /// of `free` without taking it from the rack.
    /// Rack letters are used first; the free letter only when the rack has run out of it.
    fn pay(&self, letters: &[Letter], free: Option<Letter>) -> bool {
        let mut scratch = self.letters.clone();
        let mut free = free;
        for letter in letters {
            if scratch.remove(letter) {
                continue;
            }
            if free == Some(*letter) {
                free = None;
                continue;
            }
            return false;
        }
        true
    }

    /// Check if `word` can be formed with the rack, plus one occurrence of `required`.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// use scrabble_helper::{Error, Letter, Rack};
    /// let rack: Rack = "SUP".parse()?;
    /// assert!(rack.can_form(&"ups".parse()?, None));
    /// assert!(!rack.can_form(&"sap".parse()?, None));
    /// assert!(rack.can_form(&"sap".parse()?, Some(Letter::try_from('a')?)));
    /// assert!(!rack.can_form(&"papa".parse()?, Some(Letter::try_from('a')?)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn can_form(&self, word: &Word, required: Option<Letter>) -> bool {
        word.len() <= self.len() + required.map_or(0, |_| 1) && self.pay(word.letters(), required)
    }

    /// Check if all `letters` can be taken from the rack.
    pub fn can_supply(&self, letters: &[Letter]) -> bool {
        letters.len() <= self.len() && self.pay(letters, None)
    }
}

/// Parse a rack of 1 up to 7 letters, ignoring case and surrounding whitespace.
/// ## Errors
/// [`Error::InvalidRack`](crate::Error::InvalidRack) if the rack is empty, too long,
/// or contains anything else than letters.
impl FromStr for Rack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .trim()
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<Letter>, Error>>()
            .map_err(|_| Error::InvalidRack(String::from(s)))?;
        Rack::new(&letters).map_err(|_| Error::InvalidRack(String::from(s)))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.letters().into_iter().map(char::from).collect();
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::try_from(ch).unwrap()
    }

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        let rack: Rack = " tEsT ".parse()?;
        assert_eq!(rack.len(), 4);
        assert_eq!(rack.count_of(letter('t')), 2);
        assert_eq!(rack.count_of(letter('x')), 0);
        assert_eq!(rack.to_string(), "ESTT");
        assert_eq!(rack.letter_set().len(), 3);
        Ok(())
    }

    #[test]
    fn test_invalid_rack() {
        for &s in &["", "   ", "ab1", "a b", "???", "abcdefgh"] {
            assert!(
                matches!(s.parse::<Rack>(), Err(Error::InvalidRack(r)) if r == s),
                "{:?}",
                s
            );
        }
        assert!("abcdefg".parse::<Rack>().is_ok());
    }

    #[test]
    fn test_can_form() -> Result<(), Error> {
        let rack: Rack = "aet".parse()?;
        assert!(rack.can_form(&word("eat"), None));
        assert!(rack.can_form(&word("tea"), None));
        assert!(!rack.can_form(&word("teat"), None));
        assert!(rack.can_form(&word("teat"), Some(letter('t'))));
        assert!(rack.can_form(&word("seat"), Some(letter('s'))));
        // the free letter is used only once
        assert!(!rack.can_form(&word("tests"), Some(letter('s'))));
        assert!(!rack.can_form(&word("seat"), Some(letter('x'))));
        Ok(())
    }

    #[test]
    fn test_rack_not_depleted() -> Result<(), Error> {
        let rack: Rack = "cat".parse()?;
        assert!(rack.can_form(&word("cat"), None));
        assert!(rack.can_form(&word("act"), None));
        assert!(rack.can_supply(&[letter('c'), letter('a'), letter('t')]));
        assert_eq!(rack.len(), 3);
        assert!(!rack.can_supply(&[letter('c'), letter('c')]));
        Ok(())
    }
}
