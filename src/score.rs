use crate::board::{Board, Direction};
use crate::placement::Placement;
use crate::{Config, Error, Lexicon, Word};

/// Which crossing words are added to the score of a word.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CrossWords<'a> {
    Skip,
    All,
    InLexicon(&'a Lexicon),
}

impl Board {
    /// Calculate the points for playing `word` at row, col in `direction`.
    ///
    /// Letters that are newly placed get the letter bonus of their square, and the word
    /// bonus of their square applies to the whole word. Letters that are already on the
    /// board count with their face value. Every crossing word that is formed by a newly
    /// placed letter is scored the same way and added to the total.
    /// With `apply_bonus` false all bonus squares are ignored.
    ///
    /// The board and `word` are assumed to be compatible: no legality check is done.
    /// ## Errors
    /// If the word does not fit on the board.
    /// ## Examples
    /// ```
    /// use scrabble_helper::{Board, Direction, Error};
    /// let board = Board::default();
    /// let zebra = "zebra".parse()?;
    /// // Z on a double letter square, A on the start square
    /// assert_eq!(board.calc_word_points(&zebra, 7, 3, Direction::Horizontal, true)?, 52);
    /// assert_eq!(board.calc_word_points(&zebra, 7, 3, Direction::Horizontal, false)?, 16);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn calc_word_points(
        &self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
        apply_bonus: bool,
    ) -> Result<u32, Error> {
        if !Board::fits(word.len(), row, col, direction) {
            return Err(Error::TilePlacementError {
                row,
                col,
                direction,
                len: word.len(),
            });
        }
        let cross_words = CrossWords::All;
        Ok(self.calc_word_points_unchecked(word, row, col, direction, apply_bonus, cross_words))
    }

    /// Score a legal `placement` for `config`.
    ///
    /// Same as [`calc_word_points`](Board::calc_word_points), but a crossing word only
    /// adds to the score if it is in `lexicon`. With cross-word validation on, every
    /// crossing word of a legal placement is in the lexicon, and both give the same score.
    /// ## Examples
    /// ```
    /// use scrabble_helper::{Board, Config, Direction, Error, Lexicon, Placement};
    /// let lexicon = Lexicon::from_words(&["cat", "ups"]);
    /// let mut board = Board::default();
    /// board.play_word(&"cat".parse()?, 7, 6, Direction::Horizontal)?;
    /// let ups = Placement::new("ups".parse()?, 6, 6, Direction::Horizontal);
    /// let relaxed = Config::default().with_cross_check(false);
    /// // UC, PA and ST are no words: only UPS counts
    /// assert_eq!(board.score_move(&ups, &lexicon, &relaxed), 7);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_move(&self, placement: &Placement, lexicon: &Lexicon, config: &Config) -> u32 {
        self.calc_word_points_unchecked(
            &placement.word,
            placement.row,
            placement.col,
            placement.direction,
            config.apply_bonus_tiles,
            CrossWords::InLexicon(lexicon),
        )
    }

    pub(crate) fn calc_word_points_unchecked(
        &self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
        apply_bonus: bool,
        cross_words: CrossWords,
    ) -> u32 {
        let (dr, dc) = direction.delta();
        let mut word_points = 0;
        let mut word_multiplier = 1;
        let mut total_points = 0;
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            let mut letter_points = letter.points();
            if !self.is_occupied(r, c) {
                if apply_bonus {
                    let bonus = self.bonus(r, c);
                    letter_points *= bonus.letter_multiplier();
                    word_multiplier *= bonus.word_multiplier();
                }
                let cross = direction.cross();
                let crossing = match cross_words {
                    CrossWords::Skip => None,
                    CrossWords::All => self.cross_word(r, c, letter, cross),
                    CrossWords::InLexicon(lexicon) => self
                        .cross_word(r, c, letter, cross)
                        .filter(|(cross_word, _, _)| lexicon.is_word(cross_word)),
                };
                if let Some((cross_word, cr, cc)) = crossing {
                    total_points += self.calc_word_points_unchecked(
                        &cross_word,
                        cr,
                        cc,
                        cross,
                        apply_bonus,
                        CrossWords::Skip,
                    );
                }
            }
            word_points += letter_points;
        }
        total_points + word_points * word_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn with_cat() -> Result<Board> {
        let mut board = Board::default();
        board.play_word(&"cat".parse()?, 7, 6, Direction::Horizontal)?;
        Ok(board)
    }

    #[test]
    fn test_first_word() -> Result<()> {
        let board = Board::default();
        let cat: Word = "cat".parse()?;
        for &(row, col, direction) in &[
            (7, 5, Direction::Horizontal),
            (7, 6, Direction::Horizontal),
            (7, 7, Direction::Horizontal),
            (5, 7, Direction::Vertical),
            (6, 7, Direction::Vertical),
            (7, 7, Direction::Vertical),
        ] {
            assert_eq!(board.calc_word_points(&cat, row, col, direction, true)?, 10);
            assert_eq!(board.calc_word_points(&cat, row, col, direction, false)?, 5);
        }
        Ok(())
    }

    #[test]
    fn test_bonus_used_once() -> Result<()> {
        let board = with_cat()?;
        let h = Direction::Horizontal;
        // only S is new, and (7,9) has no bonus
        assert_eq!(board.calc_word_points(&"cats".parse()?, 7, 6, h, true)?, 6);
        // S and P are new, A on the start square counts face value
        let v = Direction::Vertical;
        assert_eq!(board.calc_word_points(&"sap".parse()?, 6, 7, v, true)?, 5);
        Ok(())
    }

    #[test]
    fn test_crossing_words() -> Result<()> {
        let board = with_cat()?;
        let at: Word = "at".parse()?;
        // AT: 1 + 2*1 (T on 2l at (8,8)), crossing AA: 1 + 1, crossing TT: 1 + 2*1
        assert_eq!(board.calc_word_points(&at, 8, 7, Direction::Horizontal, true)?, 8);
        assert_eq!(board.calc_word_points(&at, 8, 7, Direction::Horizontal, false)?, 6);

        // C on the 2w square at (4,4) doubles both COT and the crossing CAT
        let mut board = Board::default();
        board.play_word(&"at".parse()?, 5, 4, Direction::Vertical)?;
        let cot: Word = "cot".parse()?;
        assert_eq!(board.calc_word_points(&cot, 4, 4, Direction::Horizontal, true)?, 20);
        assert_eq!(board.calc_word_points(&cot, 4, 4, Direction::Horizontal, false)?, 10);
        Ok(())
    }

    #[test]
    fn test_score_move_skips_unknown_cross_words() -> Result<()> {
        let board = with_cat()?;
        let ups = Placement::new("ups".parse()?, 6, 6, Direction::Horizontal);
        let relaxed = Config::default().with_cross_check(false);
        // U and S on 2l squares: 2 + 3 + 2
        let lexicon = Lexicon::from_words(&["cat", "ups"]);
        assert_eq!(board.score_move(&ups, &lexicon, &relaxed), 7);
        // PA is a word: P 3 + A 1
        let lexicon = Lexicon::from_words(&["cat", "ups", "pa"]);
        assert_eq!(board.score_move(&ups, &lexicon, &relaxed), 11);
        // all crossing words count when scored without a lexicon
        let all = board.calc_word_points(&ups.word, 6, 6, Direction::Horizontal, true)?;
        assert_eq!(all, 19);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds() -> Result<()> {
        let board = Board::default();
        let res = board.calc_word_points(&"zebra".parse()?, 12, 0, Direction::Vertical, true);
        assert!(matches!(res, Err(Error::TilePlacementError { row: 12, .. })));
        Ok(())
    }
}
