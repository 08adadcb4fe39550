use crate::Letter;
#[cfg(feature = "bitintr")]
use bitintr::Popcnt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

/// A bitset of letters, bit `i` set for the letter with label `i`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.label()) != 0
    }

    /// Insert `letter`, return true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let v = letter.label();
        assert!(v < 32);
        let r = (self.0 & (1 << v)) != 0;
        self.0 |= 1 << v;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if all letters in `self` are also in `other`.
    pub fn is_subset(&self, other: LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Return the set of letters in `self` or `other`.
    pub fn union(&self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(char::from).collect();
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLetterSet {
    count: u8,
    value: u32,
}

impl IteratorLetterSet {
    fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 1, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Letter;
    fn next(&mut self) -> Option<Letter> {
        while self.count <= 26 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Letter::from_code(i);
            }
        }
        None
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for letter in iter {
            c.insert(letter);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    fn letters(s: &str) -> LetterSet {
        s.chars().filter_map(|ch| Letter::try_from(ch).ok()).collect()
    }

    #[test]
    fn test_letterset() {
        let set = letters("zbba");
        for ch in "abz".chars() {
            assert!(set.contains(Letter::try_from(ch).unwrap()));
        }
        assert!(!set.contains(Letter::try_from('e').unwrap()));
        assert_eq!(set.len(), 3);
        assert_eq!(format!("{:?}", set), "{ABZ}");
    }

    #[test]
    fn test_subset() {
        assert!(letters("cat").is_subset(letters("tack")));
        assert!(!letters("cats").is_subset(letters("tack")));
        assert!(letters("cats").is_subset(letters("tack").union(letters("s"))));
        assert!(LetterSet::new().is_subset(LetterSet::new()));
    }

    #[test]
    fn test_iterator() {
        let set = letters("quiz");
        let v: Vec<char> = set.iter().map(char::from).collect();
        assert_eq!(v, vec!['I', 'Q', 'U', 'Z']);
    }

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones(0b0101_1010u32), 4);
    }
}
