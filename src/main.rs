//! Scrabble helper - interactive CLI
//!
//! Enter the words played on the board, and ask for the best moves for your rack.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use scrabble_helper::{logging, Board, Config, Direction, Grid, Lexicon, Session};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const USAGE: &str = "Commands:
  WORD ROW COL DIR   place WORD at ROW, COL (0-14), DIR is H or V
  ?                  suggest moves (asks for your rack)
  ? RACK             suggest moves for RACK
  -                  undo the last placed word
  board              show the board
  exit               quit";

#[derive(Parser)]
#[command(
    name = "scrabble_helper",
    about = "Suggest the best scoring scrabble moves for your rack",
    version
)]
struct Opts {
    /// Word list with one word per line; the built-in list is used if it can't be read
    #[arg(short = 'w', long, default_value = "words.txt")]
    wordfile: String,

    /// File with 15 rows of 15 bonus cells (--, ss, 2l, 3l, 2w, 3w); default is the standard board
    #[arg(short, long)]
    grid: Option<String>,

    /// Allow moves that form crossing words that are not in the word list
    #[arg(long)]
    no_cross_check: bool,

    /// Ignore bonus squares when scoring
    #[arg(long)]
    no_bonus: bool,

    /// Number of suggestions to show
    #[arg(short = 'n', long, default_value_t = scrabble_helper::DEFAULT_MAX_SUGGESTIONS)]
    top: usize,
}

/// A line of input
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Place {
        word: String,
        row: usize,
        col: usize,
        direction: Direction,
    },
    Suggest(Option<String>),
    Undo,
    Board,
    Exit,
    Empty,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Ok(Command::Empty),
            ["?"] => Ok(Command::Suggest(None)),
            ["?", rack] => Ok(Command::Suggest(Some(String::from(*rack)))),
            ["-"] => Ok(Command::Undo),
            [cmd] if cmd.eq_ignore_ascii_case("board") => Ok(Command::Board),
            [cmd] if cmd.eq_ignore_ascii_case("exit") || cmd.eq_ignore_ascii_case("quit") => {
                Ok(Command::Exit)
            }
            [word, row, col, direction] => {
                let row = row
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid row \"{}\"", row))?;
                let col = col
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid column \"{}\"", col))?;
                let direction = direction
                    .parse::<Direction>()
                    .map_err(|err| format!("{}", err))?;
                Ok(Command::Place {
                    word: String::from(*word),
                    row,
                    col,
                    direction,
                })
            }
            _ => Err(format!("Unknown command \"{}\"", line.trim())),
        }
    }
}

fn read_grid(path: &str) -> Result<Grid> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading grid file {}", path))?;
    let rows: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Grid::from_strings(&rows).with_context(|| format!("parsing grid file {}", path))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<()> {
    write!(output, "{}", text)?;
    output.flush()?;
    Ok(())
}

/// Run commands from `input` until `exit` or end of input.
fn repl<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W) -> Result<()> {
    let mut lines = input.lines();
    loop {
        prompt(output, "> ")?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{}\n{}", msg, USAGE)?;
                continue;
            }
        };
        match command {
            Command::Empty => {}
            Command::Exit => break,
            Command::Board => writeln!(output, "{}", session.board().render_with_headers())?,
            Command::Undo => match session.undo() {
                Some(entry) => {
                    writeln!(output, "Undid last move ({})", entry.word)?;
                    writeln!(output, "{}", session.board().render_with_headers())?;
                }
                None => writeln!(output, "No moves to undo")?,
            },
            Command::Place {
                word,
                row,
                col,
                direction,
            } => match session.place(&word, row, col, direction) {
                Ok(placed) => {
                    info!("letters placed: {}", placed);
                    writeln!(
                        output,
                        "Placed {} at ({},{}) {}",
                        word.to_uppercase(),
                        row,
                        col,
                        direction
                    )?;
                    writeln!(output, "{}", session.board().render_with_headers())?;
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            Command::Suggest(rack) => {
                let rack = match rack {
                    Some(rack) => rack,
                    None => {
                        prompt(output, "Rack: ")?;
                        match lines.next() {
                            Some(line) => line?,
                            None => break,
                        }
                    }
                };
                match session.suggest(&rack) {
                    Ok(moves) if moves.is_empty() => writeln!(output, "No valid moves found")?,
                    Ok(moves) => {
                        for m in moves {
                            writeln!(output, "{}", m)?;
                        }
                    }
                    Err(err) => writeln!(output, "{}", err)?,
                }
            }
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init_logging();
    let opts = Opts::parse();

    let lexicon = Lexicon::from_file_or_default(&opts.wordfile);
    if lexicon.is_empty() {
        warn!("{} has no usable words", lexicon);
    }
    info!("{}", lexicon);

    let board = match &opts.grid {
        Some(path) => Board::new(read_grid(path)?),
        None => Board::default(),
    };
    let config = Config::default()
        .with_cross_check(!opts.no_cross_check)
        .with_bonus_tiles(!opts.no_bonus)
        .with_max_suggestions(opts.top);

    let mut session = Session::new(&lexicon, config).with_board(board);
    let stdout = io::stdout();
    let mut output = stdout.lock();
    writeln!(output, "{}\n{}", session.board().render_with_headers(), USAGE)?;
    let stdin = io::stdin();
    repl(&mut session, stdin.lock(), &mut output)
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lines(lexicon: &Lexicon, input: &str) -> (String, usize) {
        let mut session = Session::new(lexicon, Config::default());
        let mut output = Vec::new();
        repl(&mut session, input.as_bytes(), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), session.history().len())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            "cat 7 6 h".parse(),
            Ok(Command::Place {
                word: String::from("cat"),
                row: 7,
                col: 6,
                direction: Direction::Horizontal
            })
        );
        assert_eq!("  ? ".parse(), Ok(Command::Suggest(None)));
        assert_eq!("? sup".parse(), Ok(Command::Suggest(Some("sup".into()))));
        assert_eq!("-".parse(), Ok(Command::Undo));
        assert_eq!("QUIT".parse(), Ok(Command::Exit));
        assert_eq!("".parse(), Ok(Command::Empty));
        assert!("cat x 6 h".parse::<Command>().is_err());
        assert!("cat 7 6 d".parse::<Command>().is_err());
        assert!("hello".parse::<Command>().is_err());
    }

    #[test]
    fn test_repl() {
        let lexicon = Lexicon::from_words(&["cat", "sap"]);
        let input = "-\ncat 7 6 H\n?\nsup\n? zzz\n? 1\n-\nexit\ncat 7 6 H\n";
        let (output, played) = run_lines(&lexicon, input);
        assert!(output.contains("No moves to undo"));
        assert!(output.contains("Placed CAT at (7,6) H\n"));
        assert!(output.contains("SAP at (6,7) V → 5 pts"));
        assert!(output.contains("No valid moves found"));
        assert!(output.contains("Invalid rack \"1\""));
        assert!(output.contains("Undid last move (CAT)"));
        // input after exit is not used
        assert_eq!(played, 0);
    }

    #[test]
    fn test_repl_place_error() {
        let lexicon = Lexicon::from_words(&["cat"]);
        let (output, played) = run_lines(&lexicon, "cat 7 13 H\ncat 15 0 V\n");
        assert_eq!(played, 0);
        assert!(output.contains("does not fit"));
        assert!(output.contains("outside the board"));
        assert!(!output.contains("Placed"));
    }
}
