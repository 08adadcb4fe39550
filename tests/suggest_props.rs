use proptest::prelude::*;
use scrabble_helper::{Config, Direction, Error, Lexicon, Rack, Session, N};
use std::collections::HashSet;

/// Play the best move for each rack, starting from an empty board.
fn play_game<'a>(lexicon: &'a Lexicon, racks: &[String]) -> Session<'a> {
    let mut session = Session::new(lexicon, Config::default());
    for rack in racks {
        let moves = session.suggest(rack).unwrap();
        if let Some(best) = moves.first() {
            let word = best.word.to_string();
            session.place(&word, best.row, best.col, best.direction).unwrap();
        }
    }
    session
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Horizontal), Just(Direction::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn suggestions_are_legal(racks in prop::collection::vec("[a-z]{7}", 0..4), rack in "[a-z]{1,7}") {
        let lexicon = Lexicon::builtin();
        let session = play_game(&lexicon, &racks);
        let config = Config::default().with_max_suggestions(usize::MAX);
        let rack: Rack = rack.parse().unwrap();
        let board = session.board();
        for m in board.suggest(&lexicon, &rack, &config) {
            let placed = board.check_placement(&m.placement(), &lexicon, &config);
            prop_assert!(placed.is_ok(), "{}: {:?}", m, placed);
            prop_assert!(rack.can_supply(&placed.unwrap()), "{}", m);
            let score = board.calc_word_points(&m.word, m.row, m.col, m.direction, true).unwrap();
            prop_assert_eq!(score, m.score);
        }
    }

    #[test]
    fn suggestions_are_ranked(racks in prop::collection::vec("[a-z]{7}", 0..4), rack in "[a-z]{1,7}", top in 1..20usize) {
        let lexicon = Lexicon::builtin();
        let session = play_game(&lexicon, &racks);
        let config = Config::default().with_max_suggestions(top);
        let rack: Rack = rack.parse().unwrap();
        let moves = session.board().suggest(&lexicon, &rack, &config);
        prop_assert!(moves.len() <= top);
        prop_assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
        let keys: HashSet<_> = moves.iter().map(|m| m.key()).collect();
        prop_assert_eq!(keys.len(), moves.len());
    }

    #[test]
    fn suggest_is_idempotent(racks in prop::collection::vec("[a-z]{7}", 0..4), rack in "[a-z]{1,7}") {
        let lexicon = Lexicon::builtin();
        let session = play_game(&lexicon, &racks);
        let before = session.board().clone();
        let first = session.suggest(&rack).unwrap();
        let second = session.suggest(&rack).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(session.board(), &before);
    }

    #[test]
    fn place_then_undo_restores_board(
        racks in prop::collection::vec("[a-z]{7}", 0..4),
        word in "[a-z]{1,8}",
        row in 0..N,
        col in 0..N,
        direction in direction(),
    ) {
        let lexicon = Lexicon::builtin();
        let mut session = play_game(&lexicon, &racks);
        let before = session.board().clone();
        let history = session.history().len();
        match session.place(&word, row, col, direction) {
            Ok(_) => {
                prop_assert_eq!(session.history().len(), history + 1);
                let entry = session.undo().unwrap();
                prop_assert_eq!(entry.word.to_string(), word.to_uppercase());
                prop_assert_eq!(session.board(), &before);
            }
            Err(Error::TilePlacementError { .. }) | Err(Error::TileReplaceError { .. }) => {
                prop_assert_eq!(session.board(), &before);
                prop_assert_eq!(session.history().len(), history);
            }
            Err(err) => prop_assert!(false, "unexpected error {}", err),
        }
    }

    #[test]
    fn invalid_rack_is_rejected(rack in "[a-z]{8,12}|[a-z]{0,3}[0-9?*][a-z]{0,3}") {
        let lexicon = Lexicon::builtin();
        let session = play_game(&lexicon, &[]);
        prop_assert!(matches!(session.suggest(&rack), Err(Error::InvalidRack(_))));
    }
}
