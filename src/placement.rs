use crate::board::{Board, Direction, CENTER};
use crate::{Config, Error, Letter, Lexicon, Word};
use std::fmt;
use thiserror::Error;

/// A word at a position on the board, that is not (yet) played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at ({},{}) {}",
            self.word, self.row, self.col, self.direction
        )
    }
}

impl Placement {
    pub fn new(word: Word, row: usize, col: usize, direction: Direction) -> Placement {
        Placement {
            word,
            row,
            col,
            direction,
        }
    }

    /// The (row, col, letter) for each square covered by the word.
    /// Only meaningful if the word fits on the board.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize, Letter)> + '_ {
        let (dr, dc) = self.direction.delta();
        self.word
            .iter()
            .enumerate()
            .map(move |(i, &letter)| (self.row + i * dr, self.col + i * dc, letter))
    }

    /// Check if the word covers square row, col
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.squares().any(|(r, c, _)| r == row && c == col)
    }
}

/// The reason a placement is not a legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{0} is not in the lexicon")]
    UnknownWord(Word),

    #[error("word does not fit on the board")]
    OutOfBounds,

    #[error("square row={row}, col={col} holds a different letter")]
    Collision { row: usize, col: usize },

    #[error("no new tile is placed")]
    NoNewTiles,

    #[error("a letter touches the start or end of the word")]
    Sandwiched,

    #[error("the first word must cover the center square")]
    MissesCenter,

    #[error("word is not connected to the letters on the board")]
    Disconnected,

    #[error("crossing word {0} is not in the lexicon")]
    InvalidCrossWord(Word),
}

impl Board {
    /// Return the word that would be formed along `direction` through row, col if `letter`
    /// is placed at row, col, with the row and col where it starts.
    /// Returns None if the letter would not touch another letter in that direction.
    pub(crate) fn cross_word(
        &self,
        row: usize,
        col: usize,
        letter: Letter,
        direction: Direction,
    ) -> Option<(Word, usize, usize)> {
        let (start, end) = self.start_end(row, col, direction);
        if end - start < 2 {
            return None;
        }
        let word: Word = (start..end)
            .map(|k| {
                let (r, c) = match direction {
                    Direction::Horizontal => (row, k),
                    Direction::Vertical => (k, col),
                };
                if (r, c) == (row, col) {
                    letter
                } else {
                    // every other square in the run holds a letter
                    self.letter_at(r, c).unwrap_or(letter)
                }
            })
            .collect();
        match direction {
            Direction::Horizontal => Some((word, row, start)),
            Direction::Vertical => Some((word, start, col)),
        }
    }

    /// Check if `placement` is a legal move, and return the letters that it places on the
    /// board. The checks are done in this order:
    /// 1. the word is in the lexicon,
    /// 2. the word fits on the board,
    /// 3. it does not replace a different letter, and places at least one new letter,
    /// 4. the squares just before and after the word are empty,
    /// 5. the first word covers the center square,
    /// 6. later words use or touch a letter that is already on the board,
    /// 7. if `config.validate_cross_words` is set, all crossing words are in the lexicon.
    /// ## Errors
    /// The first failing check, as [`Rejection`].
    /// ## Examples
    /// ```
    /// use scrabble_helper::{Board, Config, Direction, Error, Lexicon, Placement, Rejection};
    /// let lexicon = Lexicon::from_words(&["cat", "tab"]);
    /// let config = Config::default();
    /// let mut board = Board::default();
    /// let cat = Placement::new("cat".parse()?, 7, 6, Direction::Horizontal);
    /// assert_eq!(board.check_placement(&cat, &lexicon, &config).map(|p| p.len()), Ok(3));
    ///
    /// let off_center = Placement::new("cat".parse()?, 0, 0, Direction::Horizontal);
    /// assert_eq!(board.check_placement(&off_center, &lexicon, &config), Err(Rejection::MissesCenter));
    ///
    /// board.play_word(&cat.word, cat.row, cat.col, cat.direction)?;
    /// let tab = Placement::new("tab".parse()?, 7, 8, Direction::Vertical);
    /// assert!(board.check_placement(&tab, &lexicon, &config).is_ok());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn check_placement(
        &self,
        placement: &Placement,
        lexicon: &Lexicon,
        config: &Config,
    ) -> Result<Vec<Letter>, Rejection> {
        let Placement {
            word,
            row,
            col,
            direction,
        } = *placement;
        if !lexicon.is_word(&word) {
            return Err(Rejection::UnknownWord(word));
        }
        if !Board::fits(word.len(), row, col, direction) {
            return Err(Rejection::OutOfBounds);
        }
        let placed = match self.try_word(&word, row, col, direction) {
            Ok(placed) => placed,
            Err(Error::TileReplaceError { row, col }) => {
                return Err(Rejection::Collision { row, col })
            }
            Err(_) => return Err(Rejection::OutOfBounds),
        };
        if placed.is_empty() {
            return Err(Rejection::NoNewTiles);
        }

        let (dr, dc) = direction.delta();
        let before = match (row.checked_sub(dr), col.checked_sub(dc)) {
            (Some(r), Some(c)) => self.is_occupied(r, c),
            _ => false,
        };
        let after = self.is_occupied(row + word.len() * dr, col + word.len() * dc);
        if before || after {
            return Err(Rejection::Sandwiched);
        }

        if self.is_empty() {
            if !placement.covers(CENTER, CENTER) {
                return Err(Rejection::MissesCenter);
            }
        } else {
            let reuses = placed.len() < word.len();
            let touches = placement
                .squares()
                .any(|(r, c, _)| !self.is_occupied(r, c) && self.has_neighbour(r, c));
            if !reuses && !touches {
                return Err(Rejection::Disconnected);
            }
        }

        if config.validate_cross_words {
            for (r, c, letter) in placement.squares() {
                if self.is_occupied(r, c) {
                    continue;
                }
                if let Some((cross, _, _)) = self.cross_word(r, c, letter, direction.cross()) {
                    if !lexicon.is_word(&cross) {
                        return Err(Rejection::InvalidCrossWord(cross));
                    }
                }
            }
        }
        Ok(placed)
    }
}
