use tracing::debug;

use super::strategy::Strategy;
use crate::error::EngineError;
use crate::game::{Board, Outcome, Player, Position};

const O_WIN: i8 = 1;
const X_WIN: i8 = -1;
const DRAW: i8 = 0;

/// Exhaustive minimax search for O.
///
/// Scores are +1 / 0 / -1 with no depth discount, and ties keep the first
/// cell found in row-major order. Every probe is undone before the next one.
pub struct MinimaxStrategy {
    last_node_count: u64,
}

impl MinimaxStrategy {
    pub fn new() -> Self {
        MinimaxStrategy { last_node_count: 0 }
    }

    /// Number of positions scored by the most recent search.
    pub fn last_node_count(&self) -> u64 {
        self.last_node_count
    }

    /// Optimal move for O. The board must be undecided and have an empty cell.
    pub fn best_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        if Outcome::of(board).is_terminal() {
            return Err(EngineError::NoMoveAvailable);
        }

        let mut scratch = *board;
        let mut nodes = 0;
        let mut best: Option<(i8, Position)> = None;

        for pos in Position::ALL {
            if !scratch.is_empty_at(pos) {
                continue;
            }
            let score = scratch.probe(pos, Player::O, |b| {
                Self::minimax(b, Player::O.other(), &mut nodes)
            });
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, pos));
            }
        }

        self.last_node_count = nodes;
        let (score, pos) = best.ok_or(EngineError::NoMoveAvailable)?;
        debug!(%pos, score, nodes, "minimax search complete");
        Ok(pos)
    }

    /// Score `board` with `to_move` on turn. O maximizes, X minimizes.
    fn minimax(board: &mut Board, to_move: Player, nodes: &mut u64) -> i8 {
        *nodes += 1;

        if board.has_won(Player::O) {
            return O_WIN;
        }
        if board.has_won(Player::X) {
            return X_WIN;
        }
        if board.is_full() {
            return DRAW;
        }

        let maximizing = to_move == Player::O;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };

        for pos in Position::ALL {
            if !board.is_empty_at(pos) {
                continue;
            }
            let score = board.probe(pos, to_move, |b| Self::minimax(b, to_move.other(), nodes));
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
            }
        }

        best
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Position, EngineError> {
        self.best_move(board)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(board: &str) -> Result<Position, EngineError> {
        let board: Board = board.parse().unwrap();
        MinimaxStrategy::new().best_move(&board)
    }

    /// X tries every reply at every turn; O answers with minimax.
    fn assert_never_loses(board: &Board, strategy: &mut MinimaxStrategy) {
        for pos in Position::ALL {
            if !board.is_empty_at(pos) {
                continue;
            }
            let mut next = *board;
            next.place(pos.row, pos.col, Player::X).unwrap();
            match Outcome::of(&next) {
                Outcome::XWins => panic!("X wins on\n{next}"),
                Outcome::Draw => continue,
                Outcome::OWins => unreachable!("O cannot win on X's move"),
                Outcome::InProgress => {}
            }

            let reply = strategy.best_move(&next).unwrap();
            next.place(reply.row, reply.col, Player::O).unwrap();
            match Outcome::of(&next) {
                Outcome::InProgress => assert_never_loses(&next, strategy),
                outcome => assert_ne!(outcome, Outcome::XWins),
            }
        }
    }

    #[test]
    fn takes_winning_move() {
        assert_eq!(best("OO_/XX_/X__").unwrap(), Position::new(0, 2));
    }

    #[test]
    fn blocks_opponent_win() {
        assert_eq!(best("XX_/O__/___").unwrap(), Position::new(0, 2));
    }

    #[test]
    fn blocks_fork_setup() {
        // X holds opposite corners; a corner reply loses to a fork, so O
        // must take a side.
        let pos = best("X__/_O_/__X").unwrap();
        assert!(Position::SIDES.contains(&pos), "{pos} allows a fork");
    }

    #[test]
    fn first_cell_wins_ties() {
        // Every opening move draws under perfect play.
        assert_eq!(best("___/___/___").unwrap(), Position::new(0, 0));
    }

    #[test]
    fn never_loses_against_any_opponent() {
        let mut strategy = MinimaxStrategy::new();
        assert_never_loses(&Board::new(), &mut strategy);
    }

    #[test]
    fn leaves_board_unchanged() {
        let mut strategy = MinimaxStrategy::new();
        for literal in ["X________", "XX_/O__/___", "X__/_O_/__X", "XOX/_X_/OXO"] {
            let board: Board = literal.parse().unwrap();
            let before = board;
            strategy.best_move(&board).unwrap();
            assert_eq!(board, before);
        }
    }

    #[test]
    fn terminal_boards_have_no_move() {
        assert_eq!(best("XOX/XOO/OXX"), Err(EngineError::NoMoveAvailable));
        assert_eq!(best("XXX/OO_/___"), Err(EngineError::NoMoveAvailable));
    }

    #[test]
    fn node_count_shrinks_as_board_fills() {
        let mut strategy = MinimaxStrategy::new();
        strategy.best_move(&"X__/___/___".parse().unwrap()).unwrap();
        let early = strategy.last_node_count();
        strategy.best_move(&"XO_/X__/___".parse().unwrap()).unwrap();
        let late = strategy.last_node_count();
        assert!(late > 0);
        assert!(late < early, "{late} should be below {early}");
    }

    #[test]
    fn name_is_minimax() {
        assert_eq!(MinimaxStrategy::new().name(), "Minimax");
    }
}
