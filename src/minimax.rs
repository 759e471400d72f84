use crate::board::Board;
use crate::moves::{legal_moves, successor};
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::rules::outcome;
use crate::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, instrument};

/// Score of a board won by the maximizing mark.
pub const WIN: i32 = 1;
/// Score of a drawn board.
pub const DRAW: i32 = 0;
/// Score of a board won by the opponent of the maximizing mark.
pub const LOSS: i32 = -1;

/// How to choose between moves with the same optimal value.
#[derive(
    Debug, PartialEq, Eq, Copy, Clone, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TieBreak {
    /// Uniformly random among all optimal moves.
    #[default]
    Random,
    /// The optimal move with the lowest position.
    First,
}

/// A legal move together with its exact minimax value.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index.
    pub position: usize,
    /// Value for the mark that plays `position`: [`WIN`], [`DRAW`] or [`LOSS`].
    pub value: i32,
}

/// Minimax value of `board` with `to_move` on turn, scored for `maximizing`.
///
/// The score is always from `maximizing`'s point of view, whoever is on turn. Children are
/// visited in ascending position order; `alpha` and `beta` prune branches that cannot change
/// the result, so the return value is exact only when it lies strictly inside the window.
pub fn minimax(
    board: &Board,
    to_move: Mark,
    maximizing: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match outcome(board) {
        Outcome::Won(mark) if mark == maximizing => return WIN,
        Outcome::Won(_) => return LOSS,
        Outcome::Draw => return DRAW,
        Outcome::InProgress => {}
    }

    let next = to_move.opponent();
    if to_move == maximizing {
        let mut value = i32::MIN;
        for position in legal_moves(board) {
            let child = successor(board, position, to_move);
            value = value.max(minimax(&child, next, maximizing, alpha, beta));
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = i32::MAX;
        for position in legal_moves(board) {
            let child = successor(board, position, to_move);
            value = value.min(minimax(&child, next, maximizing, alpha, beta));
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}

/// Exact value of every legal move for `mark`, in ascending position order.
///
/// Each move is searched with a full window so tied values are real ties, not bounds.
pub fn score_moves(board: &Board, mark: Mark) -> Vec<ScoredMove> {
    legal_moves(board)
        .into_iter()
        .map(|position| {
            let child = successor(board, position, mark);
            ScoredMove {
                position,
                value: minimax(&child, mark.opponent(), mark, i32::MIN, i32::MAX),
            }
        })
        .collect()
}

/// The best value `mark` can force, or `None` if the board has no legal move.
pub fn best_value(board: &Board, mark: Mark) -> Option<i32> {
    score_moves(board, mark).iter().map(|scored| scored.value).max()
}

/// All positions reaching the best value for `mark`, ascending.
pub fn optimal_moves(board: &Board, mark: Mark) -> Vec<usize> {
    let scored = score_moves(board, mark);
    let Some(best) = scored.iter().map(|scored| scored.value).max() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|scored| scored.value == best)
        .map(|scored| scored.position)
        .collect()
}

/// Picks optimal moves for computer players.
///
/// Value computation is deterministic; only the choice among tied moves goes through the
/// random generator.
#[derive(Debug, Clone)]
pub struct Searcher<K: RandomGenerator = StandardRandomGenerator> {
    random: K,
    tie_break: TieBreak,
}

impl<K: RandomGenerator> Default for Searcher<K> {
    fn default() -> Self {
        SearcherBuilder::new().build()
    }
}

/// A builder for creating instances of `Searcher`.
pub struct SearcherBuilder<K: RandomGenerator> {
    random_generator: K,
    tie_break: TieBreak,
}

impl<K: RandomGenerator> Default for SearcherBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> SearcherBuilder<K> {
    /// Creates a builder with the default generator and random tie-break.
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
            tie_break: TieBreak::default(),
        }
    }

    /// Sets the random number generator used to break ties.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn build(self) -> Searcher<K> {
        Searcher {
            random: self.random_generator,
            tie_break: self.tie_break,
        }
    }
}

impl<K: RandomGenerator> Searcher<K> {
    /// Returns a new builder for `Searcher`.
    pub fn builder() -> SearcherBuilder<K> {
        SearcherBuilder::new()
    }

    /// Chooses an optimal move for `mark`.
    ///
    /// Returns `None` only when there is no empty cell. Must not be called on a board that
    /// already has a winner.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn pick_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        debug_assert_eq!(
            outcome(board),
            Outcome::InProgress,
            "search started on a finished board"
        );

        let candidates = optimal_moves(board, mark);
        let chosen = match self.tie_break {
            TieBreak::First => candidates.first().copied(),
            TieBreak::Random => self.random.pick(&candidates).copied(),
        };
        debug!(?candidates, ?chosen, "picked move");
        chosen
    }
}

#[cfg(test)]
mod tests {
    use crate::Mark;
    use crate::board::Board;
    use crate::minimax::{
        DRAW, LOSS, ScoredMove, Searcher, TieBreak, WIN, best_value, minimax, optimal_moves,
        score_moves,
    };
    use crate::moves::legal_moves;
    use crate::random::SeededGenerator;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn full_window(board: &Board, to_move: Mark, maximizing: Mark) -> i32 {
        minimax(board, to_move, maximizing, i32::MIN, i32::MAX)
    }

    fn values(scored: &[ScoredMove]) -> Vec<(usize, i32)> {
        scored.iter().map(|s| (s.position, s.value)).collect()
    }

    #[test]
    fn start_position_is_a_draw() {
        let empty = Board::new();
        assert_eq!(best_value(&empty, Mark::X), Some(DRAW));
        assert!(score_moves(&empty, Mark::X).iter().all(|s| s.value == DRAW));
        assert_eq!(optimal_moves(&empty, Mark::X), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn second_player_holds_the_draw() {
        // arrange
        let opened = board("X.. ... ...");

        // act
        let scored = score_moves(&opened, Mark::O);

        // assert
        assert_eq!(
            values(&scored),
            vec![
                (1, LOSS),
                (2, LOSS),
                (3, LOSS),
                (4, DRAW),
                (5, LOSS),
                (6, LOSS),
                (7, LOSS),
                (8, LOSS)
            ]
        );
        assert_eq!(best_value(&opened, Mark::O), Some(DRAW));
        assert_eq!(optimal_moves(&opened, Mark::O), vec![4]);
    }

    #[test]
    fn score_is_relative_to_maximizing_mark() {
        let threatened = board("XX. OO. ...");
        // X on turn completes the top row
        assert_eq!(full_window(&threatened, Mark::X, Mark::X), WIN);
        // same position seen from O: X still moves first and wins
        assert_eq!(full_window(&threatened, Mark::X, Mark::O), LOSS);
        // O on turn completes the middle row
        assert_eq!(full_window(&threatened, Mark::O, Mark::O), WIN);
        assert_eq!(full_window(&threatened, Mark::O, Mark::X), LOSS);
    }

    #[test]
    fn finished_boards_score_directly() {
        let won = board("XXX OO. ...");
        assert_eq!(full_window(&won, Mark::O, Mark::X), WIN);
        assert_eq!(full_window(&won, Mark::O, Mark::O), LOSS);
        assert_eq!(full_window(&board("XOX XOO OXX"), Mark::X, Mark::X), DRAW);
    }

    #[test]
    fn winning_move_beats_blocking() {
        // arrange
        let threatened = board("XX. OO. ...");

        // act
        let scored = score_moves(&threatened, Mark::X);

        // assert
        assert_eq!(
            values(&scored),
            vec![(2, WIN), (5, DRAW), (6, LOSS), (7, LOSS), (8, LOSS)]
        );
        assert_eq!(optimal_moves(&threatened, Mark::X), vec![2]);
    }

    #[test]
    fn ties_are_all_collected() {
        let forked = board("XO. ... ...");
        assert_eq!(best_value(&forked, Mark::X), Some(WIN));
        assert_eq!(optimal_moves(&forked, Mark::X), vec![3, 4, 6]);
    }

    #[test]
    fn full_board_has_no_value() {
        let full = board("XOX XOO OXX");
        assert_eq!(best_value(&full, Mark::X), None);
        assert!(optimal_moves(&full, Mark::X).is_empty());
    }

    #[test]
    fn first_tie_break_takes_lowest_position() {
        let mut searcher = Searcher::<SeededGenerator>::builder()
            .with_tie_break(TieBreak::First)
            .build();
        assert_eq!(searcher.pick_move(&Board::new(), Mark::X), Some(0));
        assert_eq!(searcher.pick_move(&board("XO. ... ..."), Mark::X), Some(3));
    }

    #[test]
    fn random_tie_break_stays_optimal() {
        // arrange
        let forked = board("XO. ... ...");
        let optimal = optimal_moves(&forked, Mark::X);
        let mut searcher = Searcher::builder()
            .with_random_generator(SeededGenerator::new(11))
            .build();
        let mut seen = Vec::new();

        // act
        for _ in 0..50 {
            let chosen = searcher.pick_move(&forked, Mark::X);
            if let Some(position) = chosen {
                if !seen.contains(&position) {
                    seen.push(position);
                }
            }
            assert!(chosen.is_some_and(|position| optimal.contains(&position)));
        }

        // assert
        seen.sort_unstable();
        assert_eq!(seen, optimal);
    }

    #[test]
    fn picked_move_is_always_legal() {
        let mut searcher: Searcher = Searcher::default();
        for text in ["X.. .O. ...", "XOX .O. ...", "X.. ... ..O", "XXO OO. X.."] {
            let position = board(text);
            let legal = legal_moves(&position);
            for mark in [Mark::X, Mark::O] {
                let chosen = searcher.pick_move(&position, mark);
                assert!(chosen.is_some_and(|p| legal.contains(&p)), "{text} {mark}");
            }
        }
    }

    #[test]
    fn tie_break_parses_from_text() {
        assert_eq!("random".parse::<TieBreak>(), Ok(TieBreak::Random));
        assert_eq!("First".parse::<TieBreak>(), Ok(TieBreak::First));
        assert!("best".parse::<TieBreak>().is_err());
        assert_eq!(TieBreak::First.to_string(), "first");
    }
}
