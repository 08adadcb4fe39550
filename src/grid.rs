use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const N: usize = 15;
const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// A square on the board grid, with or without a premium bonus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Bonus {
    NoBonus,
    /// The center square. It doubles the word, like a `2w` square.
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Bonus::{LetterBonus, NoBonus, Start, WordBonus};

impl Bonus {
    /// Multiplier for a letter newly placed on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// Multiplier for a word with a letter newly placed on this square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            WordBonus(n) => n,
            Start => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Bonus; N]; N];

/// Scrabble board grid, consisting of 15x15 (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square at (7,7) is the "start" square, and must be used in the first turn.
/// The grid never changes after the board is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard scrabble grid
    /// ## Example
    /// ```
    /// # use scrabble_helper::{Bonus, Grid};
    /// let grid = Grid::default();
    /// assert_eq!(grid[0][0], Bonus::WordBonus(3));
    /// assert_eq!(grid[7][7], Bonus::Start);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// A grid without bonus squares, except for the start square.
    pub fn plain() -> Grid {
        let mut grid = [[NoBonus; N]; N];
        grid[N / 2][N / 2] = Start;
        Grid(grid)
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = [[NoBonus; N]; N];
        for (i, row) in qb.iter().enumerate() {
            for (j, c) in row.split(' ').enumerate() {
                let val = c.parse().expect("valid quarter board");
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        Grid(board)
    }

    /// Get grid cells as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Bonus`.
    /// ## Examples
    /// ```
    /// # use scrabble_helper::{Grid, Error};
    /// let grid_strings = &[
    /// "3w -- -- 2l -- -- -- 3w -- -- -- 2l -- -- 3w",
    /// "-- 2w -- -- -- 3l -- -- -- 3l -- -- -- 2w --",
    /// "-- -- 2w -- -- -- 2l -- 2l -- -- -- 2w -- --",
    /// "2l -- -- 2w -- -- -- 2l -- -- -- 2w -- -- 2l",
    /// "-- -- -- -- 2w -- -- -- -- -- 2w -- -- -- --",
    /// "-- 3l -- -- -- 3l -- -- -- 3l -- -- -- 3l --",
    /// "-- -- 2l -- -- -- 2l -- 2l -- -- -- 2l -- --",
    /// "3w -- -- 2l -- -- -- ss -- -- -- 2l -- -- 3w",
    /// "-- -- 2l -- -- -- 2l -- 2l -- -- -- 2l -- --",
    /// "-- 3l -- -- -- 3l -- -- -- 3l -- -- -- 3l --",
    /// "-- -- -- -- 2w -- -- -- -- -- 2w -- -- -- --",
    /// "2l -- -- 2w -- -- -- 2l -- -- -- 2w -- -- 2l",
    /// "-- -- 2w -- -- -- 2l -- 2l -- -- -- 2w -- --",
    /// "-- 2w -- -- -- 3l -- -- -- 3l -- -- -- 2w --",
    /// "3w -- -- 2l -- -- -- 3w -- -- -- 2l -- -- 3w",
    /// ];
    /// let grid = Grid::from_strings(grid_strings)?;
    /// assert_eq!(grid, Grid::default());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = [[NoBonus; N]; N];
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board[i][j] = cell.parse()?;
            }
        }
        Ok(Grid(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let grid = Grid::default();
        let grid_as_strings = grid.to_strings();
        assert_eq!(Grid::from_strings(&grid_as_strings)?, grid);
        Ok(())
    }

    #[test]
    fn test_standard_layout() {
        let grid = Grid::default();
        let count = |bonus: Bonus| grid.iter().flatten().filter(|&&b| b == bonus).count();
        assert_eq!(count(WordBonus(3)), 8);
        assert_eq!(count(WordBonus(2)), 16);
        assert_eq!(count(LetterBonus(3)), 12);
        assert_eq!(count(LetterBonus(2)), 24);
        assert_eq!(count(Start), 1);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Start.word_multiplier(), 2);
        assert_eq!(Start.letter_multiplier(), 1);
        assert_eq!(LetterBonus(3).letter_multiplier(), 3);
        assert_eq!(LetterBonus(3).word_multiplier(), 1);
        assert_eq!(WordBonus(3).word_multiplier(), 3);
        assert_eq!(NoBonus.word_multiplier(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Grid::from_strings(&["--"]),
            Err(Error::InvalidRowCount(1))
        ));
        let mut rows = Grid::default().to_strings();
        rows[3] = rows[3].replace("2l", "4x");
        assert!(matches!(
            Grid::from_strings(&rows),
            Err(Error::GridParseError(s)) if s == "4x"
        ));
    }
}
