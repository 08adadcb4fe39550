use crate::grid::{Bonus, Grid};
use crate::{Error, Letter, Word};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;

/// Row and column of the center (start) square
pub const CENTER: usize = N / 2;

/// A row of squares, each empty or holding a letter.
pub type Row = [Option<Letter>; N];

/// The letters on the board, indexed as `state[row][col]`.
pub type State = [Row; N];

const EMPTY_STATE: State = [[None; N]; N];

/// Direction in which a word is placed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Both directions, horizontal first.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    /// Step (drow, dcol) to the next square in this direction
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// The crossing direction
    pub fn cross(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "H" | "HORIZONTAL" => Ok(Direction::Horizontal),
            "V" | "VERTICAL" => Ok(Direction::Vertical),
            _ => Err(Error::InvalidDirection(String::from(s))),
        }
    }
}

/// What a square on the board shows: a letter, an unused bonus, or nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    Empty,
    Bonus(Bonus),
    Letter(Letter),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Bonus(bonus) => write!(f, "{}", bonus),
            Square::Letter(letter) => write!(f, "{}", letter),
        }
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .state
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', char::from))
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

/// Represents the state of a scrabble board:
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The letters placed on the board.
///
/// The grid is fixed when the board is created. A bonus square counts only for the
/// letter that is placed on it: once the square holds a letter the bonus is used up.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    state: State,
}

impl Board {
    /// Create a new empty board with bonus squares from `grid`.
    ///
    /// ## Examples
    ///
    /// Basic usage:
    ///```
    /// use scrabble_helper::{Board, Grid};
    ///
    /// let board = Board::new(Grid::default());
    /// assert!(board.is_empty());
    ///```
    /// Additional builder functions can be used to set the grid and state of the board.
    /// See also:
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    #[must_use]
    pub fn new(grid: Grid) -> Board {
        Board {
            grid,
            state: EMPTY_STATE,
        }
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters: a letter, or `.` or ` ` for an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or a character is not a letter.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_helper::{Board, Error};
    /// let state = &[
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "......cat......",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert!(board.is_occupied(7, 6));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn state_from_strings<S: AsRef<str>>(rows: &[S]) -> Result<State, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = EMPTY_STATE;
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len != N {
                return Err(Error::InvalidRowLength(String::from(row), len));
            }
            for (j, ch) in row.chars().enumerate() {
                state[i][j] = match ch {
                    '.' | ' ' => None,
                    ch => Some(Letter::try_from(ch)?),
                };
            }
        }
        Ok(state)
    }

    /// Set board state from list of strings
    /// ## Errors
    /// See [`state_from_strings`](Board::state_from_strings)
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        let state = Self::state_from_strings(rows)?;
        self.set_state(&state);
        Ok(())
    }

    /// Set board state from list of strings, and return the modified board.
    /// ## Errors
    /// See [`state_from_strings`](Board::state_from_strings)
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set board state from a snapshot
    pub fn set_state(&mut self, state: &State) {
        self.state = *state;
    }

    /// Set board cells from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid board cells.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(self)
    }

    /// Return a snapshot of the letters on the board
    pub fn state(&self) -> State {
        self.state
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Bonus of the square at row, col
    pub(crate) fn bonus(&self, row: usize, col: usize) -> Bonus {
        self.grid[row][col]
    }

    /// Check if there are no letters on the board.
    pub fn is_empty(&self) -> bool {
        self.state.iter().flatten().all(Option::is_none)
    }

    /// Return letter at row, col or None if empty square or outside grid.
    pub fn letter_at(&self, row: usize, col: usize) -> Option<Letter> {
        if row < N && col < N {
            return self.state[row][col];
        }
        None
    }

    /// Check if square at row, col is occupied.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_helper::{Board, Direction, Error};
    /// let mut board = Board::default();
    /// board.play_word(&"aardvark".parse()?, 7, 7, Direction::Horizontal)?;
    /// assert!(board.is_occupied(7, 7));
    /// assert!(!board.is_occupied(6, 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.letter_at(row, col).is_some()
    }

    /// What the square at row, col shows.
    /// ## Panics
    /// If row or col is outside the board.
    pub fn square(&self, row: usize, col: usize) -> Square {
        match (self.state[row][col], self.grid[row][col]) {
            (Some(letter), _) => Square::Letter(letter),
            (None, Bonus::NoBonus) => Square::Empty,
            (None, bonus) => Square::Bonus(bonus),
        }
    }

    /// Orthogonal neighbours of row, col that are on the board.
    pub(crate) fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col)).filter(|&(r, _)| r < N);
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1)).filter(|&(_, c)| c < N);
        up.into_iter().chain(down).chain(left).chain(right)
    }

    /// Check if any orthogonal neighbour of row, col holds a letter.
    pub fn has_neighbour(&self, row: usize, col: usize) -> bool {
        Self::neighbours(row, col).any(|(r, c)| self.is_occupied(r, c))
    }

    /// Distinct letters on the orthogonal neighbours of row, col, in order up, down, left, right.
    pub fn neighbour_letters(&self, row: usize, col: usize) -> Vec<Letter> {
        let mut letters = Vec::new();
        for (r, c) in Self::neighbours(row, col) {
            if let Some(letter) = self.letter_at(r, c) {
                if !letters.contains(&letter) {
                    letters.push(letter);
                }
            }
        }
        letters
    }

    /// Return the anchor squares: the empty squares next to a letter on the board,
    /// in row major order. On an empty board the only anchor is the center square.
    /// ## Examples
    /// ```
    /// # use scrabble_helper::{Board, Direction, Error};
    /// let mut board = Board::default();
    /// assert_eq!(board.anchors(), vec![(7, 7)]);
    /// board.play_word(&"at".parse()?, 7, 7, Direction::Horizontal)?;
    /// assert_eq!(board.anchors(), vec![(6, 7), (6, 8), (7, 6), (7, 9), (8, 7), (8, 8)]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn anchors(&self) -> Vec<(usize, usize)> {
        let mut anchors = Vec::new();
        for row in 0..N {
            for col in 0..N {
                if !self.is_occupied(row, col) && self.has_neighbour(row, col) {
                    anchors.push((row, col));
                }
            }
        }
        if anchors.is_empty() {
            anchors.push((CENTER, CENTER));
        }
        anchors
    }

    /// Return the start and end (exclusive) index along `direction` of the run of letters
    /// through row, col, given that a letter would be placed at row, col.
    pub(crate) fn start_end(&self, row: usize, col: usize, direction: Direction) -> (usize, usize) {
        let (line, i) = match direction {
            Direction::Horizontal => (row, col),
            Direction::Vertical => (col, row),
        };
        let at = |k: usize| match direction {
            Direction::Horizontal => self.is_occupied(line, k),
            Direction::Vertical => self.is_occupied(k, line),
        };
        let start = (0..i).rev().find(|&k| !at(k)).map_or(0, |k| k + 1);
        let end = (i + 1..N).find(|&k| !at(k)).unwrap_or(N);
        (start, end)
    }

    /// Play word at row, col on the board in given direction.
    /// Returns the used letters, in the order of use.
    /// Letters in `word` that are already on the board are not included.
    /// No dictionary or connectivity check is done: any word that fits can be played,
    /// for example to enter an opponent's move.
    /// ## Errors
    /// - If the placed `word` does not fit on the board.
    /// - If a letter in `word` would replace a different letter on the board.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use scrabble_helper::{Board, Direction, Error, Letter};
    /// let mut board = Board::default();
    /// let used = board.play_word(&"cat".parse()?, 7, 6, Direction::Horizontal)?;
    /// assert_eq!(used.len(), 3);
    /// let used = board.play_word(&"cats".parse()?, 7, 6, Direction::Horizontal)?;
    /// assert_eq!(used, vec![Letter::try_from('S')?]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn play_word(
        &mut self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Vec<Letter>, Error> {
        let used_letters = self.try_word(word, row, col, direction)?;
        self.play_word_unchecked(word, row, col, direction);
        Ok(used_letters)
    }

    fn play_word_unchecked(&mut self, word: &Word, row: usize, col: usize, direction: Direction) {
        let (dr, dc) = direction.delta();
        for (i, &letter) in word.iter().enumerate() {
            self.state[row + i * dr][col + i * dc] = Some(letter);
        }
    }

    /// Check that `word` fits at row, col and return the letters that would be placed.
    pub(crate) fn try_word(
        &self,
        word: &Word,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<Vec<Letter>, Error> {
        if !Self::fits(word.len(), row, col, direction) {
            return Err(Error::TilePlacementError {
                row,
                col,
                direction,
                len: word.len(),
            });
        }
        let (dr, dc) = direction.delta();
        let mut used_letters = Vec::new();
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + i * dr, col + i * dc);
            match self.state[r][c] {
                None => used_letters.push(letter),
                Some(existing) if existing == letter => {}
                Some(_) => return Err(Error::TileReplaceError { row: r, col: c }),
            }
        }
        Ok(used_letters)
    }

    /// Check if `len` letters starting at row, col in `direction` stay on the board.
    pub fn fits(len: usize, row: usize, col: usize, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        len > 0 && row + (len - 1) * dr < N && col + (len - 1) * dc < N
    }

    /// Render the board with row and column numbers. Empty squares show their bonus.
    pub fn render_with_headers(&self) -> String {
        let mut lines = Vec::with_capacity(N + 1);
        let header: Vec<String> = (0..N).map(|i| format!("{:2}", i)).collect();
        lines.push(format!("   {}", header.join(" ")));
        for row in 0..N {
            let squares: Vec<String> = (0..N)
                .map(|col| format!("{:2}", self.square(row, col).to_string()))
                .collect();
            lines.push(format!("{:2} {}", row, squares.join(" ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        ".....q.........",
        ".....u.........",
        ".....itch......",
        ".....z.a.......",
        ".......tiles...",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    fn test_board() -> Result<Board> {
        Board::default().with_state_from_strings(TEST_STATE)
    }

    #[test]
    fn test_state() -> Result<()> {
        let mut board = test_board()?;
        assert!(board.is_occupied(5, 5));
        assert!(!board.is_occupied(0, 0));
        assert!(!board.is_occupied(15, 3));
        assert_eq!(board.to_string(), TEST_STATE.join("\n").to_uppercase());

        let used = board.play_word(&"ha".parse()?, 7, 8, Direction::Vertical)?;
        assert_eq!(used, vec![Letter::try_from('A')?]);
        assert_eq!(board.letter_at(8, 8), Some(Letter::try_from('A')?));
        Ok(())
    }

    #[test]
    fn test_state_from_strings_errors() {
        assert!(matches!(
            Board::state_from_strings(&TEST_STATE[1..]),
            Err(Error::InvalidRowCount(14))
        ));
        let mut rows = TEST_STATE.to_vec();
        rows[2] = "....";
        assert!(matches!(
            Board::state_from_strings(&rows),
            Err(Error::InvalidRowLength(_, 4))
        ));
        rows[2] = "......#........";
        assert!(matches!(
            Board::state_from_strings(&rows),
            Err(Error::InvalidLetter('#'))
        ));
    }

    #[test]
    fn test_anchors() -> Result<()> {
        let board = Board::default();
        assert_eq!(board.anchors(), vec![(CENTER, CENTER)]);

        let board = test_board()?;
        let anchors = board.anchors();
        assert!(anchors.contains(&(4, 5)));
        assert!(anchors.contains(&(7, 9)));
        assert!(anchors.contains(&(10, 10)));
        assert!(!anchors.contains(&(7, 6)), "occupied square is no anchor");
        assert!(!anchors.contains(&(3, 5)));
        for (row, col) in anchors {
            assert!(!board.is_occupied(row, col));
            assert!(board.has_neighbour(row, col));
        }
        Ok(())
    }

    #[test]
    fn test_neighbour_letters() -> Result<()> {
        let board = test_board()?;
        let letters: String = board.neighbour_letters(8, 6).into_iter().map(char::from).collect();
        assert_eq!(letters, "TZA");
        assert!(board.neighbour_letters(0, 0).is_empty());
        Ok(())
    }

    #[test]
    fn test_start_end() -> Result<()> {
        let board = test_board()?;
        // a letter at (8, 8) would join "H" above and "I" below
        assert_eq!(board.start_end(8, 8, Direction::Vertical), (7, 10));
        assert_eq!(board.start_end(8, 8, Direction::Horizontal), (7, 9));
        assert_eq!(board.start_end(0, 0, Direction::Horizontal), (0, 1));
        assert_eq!(board.start_end(9, 14, Direction::Horizontal), (14, 15));
        Ok(())
    }

    #[test]
    fn test_square() -> Result<()> {
        let board = test_board()?;
        assert_eq!(board.square(0, 0), Square::Bonus(Bonus::WordBonus(3)));
        assert_eq!(board.square(0, 1), Square::Empty);
        assert_eq!(board.square(7, 7), Square::Letter(Letter::try_from('c')?));
        Ok(())
    }

    #[test]
    fn test_render_with_headers() -> Result<()> {
        let board = test_board()?;
        let rendered = board.render_with_headers();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), N + 1);
        assert!(lines[0].starts_with("    0  1"));
        assert!(lines[1].starts_with(" 0 3w .  .  2l"));
        assert!(lines[8].contains("I  T  C  H"));
        Ok(())
    }

    #[test]
    fn test_tile_replace_error() -> Result<()> {
        let mut board = Board::default();
        board.play_word(&"rust".parse()?, 7, 7, Direction::Horizontal)?;
        let before = board.clone();
        let res = board.play_word(&"bar".parse()?, 6, 7, Direction::Vertical);
        assert!(matches!(res, Err(Error::TileReplaceError { row: 7, col: 7 })));
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn test_tile_placement_error() -> Result<()> {
        let mut board = Board::default();
        let res = board.play_word(&"rust".parse()?, 7, 12, Direction::Horizontal);
        assert!(matches!(
            res,
            Err(Error::TilePlacementError {
                row: 7,
                col: 12,
                direction: Direction::Horizontal,
                len: 4
            })
        ));
        assert!(board.is_empty());
        Ok(())
    }

    #[test]
    fn test_direction() -> Result<()> {
        assert_eq!("h".parse::<Direction>()?, Direction::Horizontal);
        assert_eq!("V".parse::<Direction>()?, Direction::Vertical);
        assert!(matches!("x".parse::<Direction>(), Err(Error::InvalidDirection(_))));
        assert_eq!(Direction::Horizontal.cross(), Direction::Vertical);
        assert_eq!(Direction::Vertical.to_string(), "V");
        Ok(())
    }
}
