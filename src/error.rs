use crate::Direction;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error creating a file for the bincoded lexicon
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("File \"{path}\" could not be written")]
    WriteError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded wordfile
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Wordfile {0} could not be (de)serialized")]
    LexiconDeserializeError(String),

    /// Character is not a letter `A`..`Z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// The rack is empty, too long, or contains something other than letters
    #[error("Invalid rack \"{0}\": expect 1 to 7 letters A-Z")]
    InvalidRack(String),

    /// The word is empty, too long, or contains something other than letters
    #[error("Invalid word \"{0}\"")]
    InvalidWord(String),

    /// Direction is not `H` or `V`
    #[error("Invalid direction \"{0}\" (expect H or V)")]
    InvalidDirection(String),

    /// Row or column outside the board
    #[error("Position row={row}, col={col} is outside the board")]
    OutOfRange { row: usize, col: usize },

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} {direction} does not fit")]
    TilePlacementError {
        row: usize,
        col: usize,
        direction: Direction,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row={row}, col={col}")]
    TileReplaceError { row: usize, col: usize },
}
