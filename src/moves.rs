use crate::board::{Board, Direction};
use crate::placement::Placement;
use crate::{Config, Letter, Lexicon, Rack, Word};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A scored move: `word` played at row, col in `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: u32,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at ({},{}) {} → {} pts",
            self.word, self.row, self.col, self.direction, self.score
        )
    }
}

impl Move {
    /// Moves with the same key are the same move.
    pub fn key(&self) -> (Word, usize, usize, Direction) {
        (self.word, self.row, self.col, self.direction)
    }

    pub fn placement(&self) -> Placement {
        Placement::new(self.word, self.row, self.col, self.direction)
    }
}

/// Remove duplicate moves (keeping the first), sort by descending score and keep at most
/// `max` moves. Moves with equal scores keep their order.
/// ## Example
/// ```
/// use scrabble_helper::{rank, Direction, Error, Move};
/// let mv = |word: &str, score| -> Result<Move, Error> {
///     Ok(Move { word: word.parse()?, row: 7, col: 7, direction: Direction::Horizontal, score })
/// };
/// let moves = vec![mv("at", 4)?, mv("cat", 10)?, mv("at", 4)?, mv("ta", 4)?];
/// let ranked = rank(moves, 10);
/// let words: Vec<String> = ranked.iter().map(|m| m.word.to_string()).collect();
/// assert_eq!(words, vec!["CAT", "AT", "TA"]);
/// # Ok::<(), Error>(())
/// ```
pub fn rank(moves: Vec<Move>, max: usize) -> Vec<Move> {
    let mut seen = HashSet::new();
    let mut moves: Vec<Move> = moves.into_iter().filter(|m| seen.insert(m.key())).collect();
    moves.sort_by(|a, b| b.score.cmp(&a.score));
    moves.truncate(max);
    moves
}

impl Board {
    /// Generate every legal move for `rack`, with its score, in the order found.
    /// The result can contain duplicates: use [`rank`] to clean it up.
    ///
    /// For each anchor square, candidate words are taken from the lexicon that can be
    /// formed with the rack, plus one letter next to the anchor. Each candidate is tried
    /// in both directions, at every offset that puts one of its letters on the anchor.
    pub fn calc_all_moves(&self, lexicon: &Lexicon, rack: &Rack, config: &Config) -> Vec<Move> {
        let first_move = self.is_empty();
        let mut candidates: HashMap<Option<Letter>, Vec<&Word>> = HashMap::new();
        let mut moves = Vec::new();
        let mut tried = 0;
        for (arow, acol) in self.anchors() {
            let required: Vec<Option<Letter>> = if first_move {
                vec![None]
            } else {
                self.neighbour_letters(arow, acol)
                    .into_iter()
                    .map(Some)
                    .collect()
            };
            for letter in required {
                let words = candidates
                    .entry(letter)
                    .or_insert_with(|| lexicon.candidates(rack, letter));
                for &word in words.iter() {
                    for &direction in &Direction::ALL {
                        let (dr, dc) = direction.delta();
                        for i in 0..word.len() {
                            let start = (arow.checked_sub(i * dr), acol.checked_sub(i * dc));
                            let (row, col) = match start {
                                (Some(row), Some(col)) => (row, col),
                                _ => break,
                            };
                            tried += 1;
                            let placement = Placement::new(*word, row, col, direction);
                            match self.check_placement(&placement, lexicon, config) {
                                Ok(placed) if rack.can_supply(&placed) => {
                                    let score = self.score_move(&placement, lexicon, config);
                                    moves.push(Move {
                                        word: *word,
                                        row,
                                        col,
                                        direction,
                                        score,
                                    });
                                }
                                Ok(placed) => trace!(
                                    "{}: {} letters not on rack {}",
                                    placement,
                                    placed.len(),
                                    rack
                                ),
                                Err(rejection) => trace!("{}: {}", placement, rejection),
                            }
                        }
                    }
                }
            }
        }
        debug!(
            "rack {}: {} candidate lists, {} placements tried, {} moves",
            rack,
            candidates.len(),
            tried,
            moves.len()
        );
        moves
    }

    /// Return the best legal moves for `rack`: unique, sorted by descending score, and at
    /// most `config.max_suggestions` of them.
    /// ## Example
    /// ```
    /// use scrabble_helper::{Board, Config, Error, Lexicon, Rack};
    /// let lexicon = Lexicon::from_words(&["cat", "act", "at"]);
    /// let rack: Rack = "tac".parse()?;
    /// let moves = Board::default().suggest(&lexicon, &rack, &Config::default());
    /// assert_eq!(moves[0].score, 10);
    /// assert_eq!(moves[0].to_string(), "CAT at (7,7) H → 10 pts");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn suggest(&self, lexicon: &Lexicon, rack: &Rack, config: &Config) -> Vec<Move> {
        rank(
            self.calc_all_moves(lexicon, rack, config),
            config.max_suggestions,
        )
    }
}
