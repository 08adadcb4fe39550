//! A scrabble move suggester for Rust.
//! <br>
//! This crate keeps track of a scrabble board, and suggests the best scoring moves for
//! the letters on your rack. It can be used to study the game, or just to cheat.
//! Moves are generated by matching the words of a lexicon against the rack and the
//! letters next to each anchor square, and are scored with the standard letter values
//! and bonus squares.
//! It can use the `rayon` crate to filter the lexicon in parallel.
//!
//! # How to use `scrabble_helper`
//! Start by loading a lexicon: from a wordfile with one word per line, or the small
//! built-in word list. Then create a [`Session`] and enter the words on the board.
//! By default a standard board is used, but you can specify your own grid of bonus squares.
//!
//! # Basic usage
//!  ```
//! use scrabble_helper::{Config, Direction, Lexicon, Session};
//!
//! let lexicon = Lexicon::from_words(&["rust", "rest", "tor", "or"]);
//! let mut session = Session::new(&lexicon, Config::default());
//! let moves = session.suggest("rusta")?;
//! assert_eq!(moves.len(), 8);
//! for m in &moves {
//!     println!("{}", m);
//! }
//! session.place("rust", 7, 7, Direction::Horizontal)?;
//! println!("{}", session.board());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The lexicon keeps the set of letters of every word, so words that can never be
//! formed from the rack are skipped before letter counts are compared.
//! A move is legal when it fits on the board, does not replace other letters, places at
//! least one new letter, is not directly extended by letters before or after it,
//! covers the center square (first move) or connects to the letters on the board, and,
//! unless disabled in the [`Config`], forms only valid crossing words.
mod board;
mod config;
mod error;
mod grid;
mod labelset;
mod lexicon;
pub mod logging;
mod moves;
mod placement;
mod rack;
mod score;
mod session;
mod tiles;

pub use board::{Board, Direction, Row, Square, State, CENTER, N};
pub use config::{Config, DEFAULT_MAX_SUGGESTIONS};
pub use error::Error;
pub use grid::{Bonus, Grid};
pub use labelset::LetterSet;
pub use lexicon::{Lexicon, DEFAULT_WORDS};
pub use moves::{rank, Move};
pub use placement::{Placement, Rejection};
pub use rack::{Rack, RACK_SIZE};
pub use session::{HistoryEntry, Session};
pub use tiles::{Letter, Word};
