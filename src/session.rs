use crate::board::{Board, Direction, State, N};
use crate::{Config, Error, Lexicon, Move, Rack, Word};
use log::{debug, info};

/// A word played in a session, with the board state from before it was played.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub word: Word,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub previous: State,
}

/// A game in progress: the board, the words played on it, and the rules for suggestions.
///
/// Words are entered with [`place`](Session::place) and can be taken back one by one with
/// [`undo`](Session::undo). Asking for [`suggestions`](Session::suggest) never changes
/// the session.
/// ## Example
/// ```
/// use scrabble_helper::{Config, Direction, Error, Lexicon, Session};
/// let lexicon = Lexicon::from_words(&["cat", "sap"]);
/// let mut session = Session::new(&lexicon, Config::default());
/// session.place("cat", 7, 6, Direction::Horizontal)?;
/// let moves = session.suggest("sup")?;
/// assert_eq!(moves[0].to_string(), "SAP at (6,7) V → 5 pts");
/// assert!(session.undo().is_some());
/// assert!(session.board().is_empty());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<'a> {
    board: Board,
    history: Vec<HistoryEntry>,
    lexicon: &'a Lexicon,
    config: Config,
}

impl<'a> Session<'a> {
    /// Start a session on an empty standard board.
    pub fn new(lexicon: &'a Lexicon, config: Config) -> Session<'a> {
        Session {
            board: Board::default(),
            history: Vec::new(),
            lexicon,
            config,
        }
    }

    /// Start from `board` instead of an empty standard board.
    /// The letters already on `board` can not be undone.
    pub fn with_board(mut self, board: Board) -> Session<'a> {
        self.board = board;
        self.history.clear();
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// The words played so far, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Place `word` on the board at row, col in `direction`, and return the letters that
    /// were newly placed. The word is not checked against the lexicon, and it does not
    /// have to connect to other words, so any move (also the opponent's) can be entered.
    /// ## Errors
    /// - [`Error::OutOfRange`] if row or col is outside the board.
    /// - [`Error::InvalidWord`] if `word` is not 1 to 15 letters.
    /// - If the word does not fit, or would replace a different letter.
    ///
    /// On error the board is unchanged.
    pub fn place(
        &mut self,
        word: &str,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<String, Error> {
        if row >= N || col >= N {
            return Err(Error::OutOfRange { row, col });
        }
        let word: Word = word.trim().parse()?;
        let previous = self.board.state();
        let placed = self.board.play_word(&word, row, col, direction)?;
        info!("placed {} at ({},{}) {}", word, row, col, direction);
        self.history.push(HistoryEntry {
            word,
            row,
            col,
            direction,
            previous,
        });
        Ok(placed.into_iter().map(char::from).collect())
    }

    /// Take back the last placed word, and return it.
    /// Returns None (and does nothing) if there is nothing to undo.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        self.board.set_state(&entry.previous);
        info!("undid {} at ({},{}) {}", entry.word, entry.row, entry.col, entry.direction);
        Some(entry)
    }

    /// Suggest the best moves for `rack` on the current board.
    /// ## Errors
    /// [`Error::InvalidRack`] if `rack` is not 1 to 7 letters.
    pub fn suggest(&self, rack: &str) -> Result<Vec<Move>, Error> {
        let rack: Rack = rack.parse()?;
        let moves = self.board.suggest(self.lexicon, &rack, &self.config);
        debug!("{} suggestions for {}", moves.len(), rack);
        Ok(moves)
    }
}
