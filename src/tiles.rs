//! Basic types for working with scrabble letters.
mod letter;
mod word;

/// Maximum length of a `Word`: it has to fit on the board.
pub(crate) const DIM: usize = 15;

pub use letter::Letter;
pub use word::Word;
