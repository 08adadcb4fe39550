/// Number of moves returned by a suggestion query, unless configured otherwise.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Rules used to generate and score moves.
///
/// The default is the strict rule set: crossing words must be valid, and bonus
/// squares count.
/// ## Example
/// ```
/// use scrabble_helper::Config;
/// let config = Config::default().with_cross_check(false).with_max_suggestions(5);
/// assert!(!config.validate_cross_words);
/// assert!(config.apply_bonus_tiles);
/// assert_eq!(config.max_suggestions, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Every crossing word formed by a move must be in the lexicon
    pub validate_cross_words: bool,
    /// Apply letter and word multipliers of bonus squares
    pub apply_bonus_tiles: bool,
    /// Maximum number of ranked moves returned
    pub max_suggestions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            validate_cross_words: true,
            apply_bonus_tiles: true,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_cross_check(mut self, validate_cross_words: bool) -> Config {
        self.validate_cross_words = validate_cross_words;
        self
    }

    #[must_use]
    pub fn with_bonus_tiles(mut self, apply_bonus_tiles: bool) -> Config {
        self.apply_bonus_tiles = apply_bonus_tiles;
        self
    }

    #[must_use]
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Config {
        self.max_suggestions = max_suggestions;
        self
    }
}
