use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::num::NonZeroU8;

/// Label of an uninitialized letter (padding in fixed size lists)
const UNINIT: u8 = 0x7f;

/// Points for each label: index 0 is unused, 1..=26 is `A`..`Z`.
const POINTS: [u32; 27] = [
    0, // -
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, // a b c d e f g h i j
    5, 1, 3, 1, 1, 3, 10, 1, 1, 1, // k l m n o p q r s t
    1, 4, 4, 8, 4, 10, // u v w x y z
];

/// A letter `A`..`Z` that can be used as tile on the board.
///
/// Internally the letter is stored as a label: 1 for `A` up to 26 for `Z`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(NonZeroU8);

impl Default for Letter {
    fn default() -> Self {
        Self::from_label(UNINIT)
    }
}

impl Letter {
    fn from_label(label: u8) -> Letter {
        let label = NonZeroU8::new(label).expect("label can't be 0");
        Letter(label)
    }

    /// Letter for label 1..=26, or None.
    pub(crate) fn from_code(label: u8) -> Option<Letter> {
        match label {
            1..=26 => Some(Self::from_label(label)),
            _ => None,
        }
    }

    /// Get label for letter: 1..=26
    pub fn label(self) -> u8 {
        self.0.get()
    }

    /// The uppercase character for this letter.
    /// ## Example
    /// ```
    /// # use std::convert::TryFrom;
    /// use scrabble_helper::{Error, Letter};
    /// let letter = Letter::try_from('q')?;
    /// assert_eq!(letter.to_char(), 'Q');
    /// # Ok::<(), Error>(())
    /// ```
    pub fn to_char(self) -> char {
        (b'A' + self.label() - 1) as char
    }

    /// Face value of the letter, using the standard scrabble distribution.
    /// ## Example
    /// ```
    /// # use std::convert::TryFrom;
    /// use scrabble_helper::{Error, Letter};
    /// assert_eq!(Letter::try_from('Z')?.points(), 10);
    /// assert_eq!(Letter::try_from('k')?.points(), 5);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn points(self) -> u32 {
        POINTS.get(self.label() as usize).copied().unwrap_or(0)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii_alphabetic() {
            let label = ch.to_ascii_uppercase() as u8 - b'A' + 1;
            Ok(Self::from_label(label))
        } else {
            Err(Error::InvalidLetter(ch))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter() -> Result<(), Error> {
        let a = Letter::try_from('a')?;
        assert_eq!(a.label(), 1);
        assert_eq!(a, Letter::try_from('A')?);
        assert_eq!(Letter::try_from('z')?.label(), 26);
        assert_eq!(a.to_string(), "A");
        Ok(())
    }

    #[test]
    fn test_points() -> Result<(), Error> {
        let points = "aeilnorstu dg bcmp fhvwy k jx qz"
            .split(' ')
            .zip(&[1, 2, 3, 4, 5, 8, 10])
            .collect::<Vec<_>>();
        for (letters, &expect) in points {
            for ch in letters.chars() {
                assert_eq!(Letter::try_from(ch)?.points(), expect, "{}", ch);
            }
        }
        Ok(())
    }

    #[test]
    fn test_invalid_letter() {
        for &ch in &['1', '*', ' ', 'é', '.'] {
            assert!(matches!(Letter::try_from(ch), Err(Error::InvalidLetter(c)) if c == ch));
        }
    }
}
