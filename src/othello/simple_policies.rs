use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::common::{PlayerSide, Policy};
use crate::game::config::GameConfig;
use crate::othello::othello_env::{Board, OthelloEnv, OthelloMove, OthelloObservation};

/// Uniform choice among the legal moves, reproducible per seed.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy<OthelloEnv> for RandomPolicy {
    fn reset(&mut self, _env: &OthelloEnv) {}

    fn get_action(&mut self, observation: &OthelloObservation) -> OthelloMove {
        let moves = &observation.legal_moves;
        assert!(!moves.is_empty(), "no legal moves to choose from");
        moves[self.rng.gen_range(0..moves.len())]
    }
}

/// Plays the move leaving it with the most own disks on the board, no
/// look-ahead. The first maximum wins ties.
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new(_init_params: &GameConfig) -> Self {
        Self
    }
}

impl Policy<OthelloEnv> for GreedyPolicy {
    fn reset(&mut self, _env: &OthelloEnv) {}

    fn get_action(&mut self, observation: &OthelloObservation) -> OthelloMove {
        let side = observation.board.turn();
        let mut best: Option<(OthelloMove, u32)> = None;
        for &m in &observation.legal_moves {
            let mut board = observation.board.clone();
            board.make_move(m);
            let count = board.count(side);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((m, count)),
            }
        }
        best.expect("no legal moves to choose from").0
    }
}

const WIN_SCORE: i32 = 10_000;

/// Bounded-depth adversarial search. Own turns maximize and opponent turns
/// minimize; leaves score the disk differential. Positions reached through
/// a pass keep maximizing or minimizing by whoever is actually to move.
pub struct MaxiMinPolicy {
    search_depth: u32,
    cache: HashMap<(Board, u32), i32>,
}

impl MaxiMinPolicy {
    pub fn new(search_depth: u32, _init_params: &GameConfig) -> Self {
        assert!(search_depth > 0, "search depth must be positive");
        Self {
            search_depth,
            cache: HashMap::new(),
        }
    }

    fn evaluate(board: &Board, me: PlayerSide) -> i32 {
        board.count(me) as i32 - board.count(me.opposite()) as i32
    }

    fn search(&mut self, board: &Board, depth: u32, me: PlayerSide) -> i32 {
        if board.is_over() {
            let diff = Self::evaluate(board, me);
            return match board.winner() {
                Some(side) if side == me => WIN_SCORE + diff,
                Some(_) => -WIN_SCORE + diff,
                None => 0,
            };
        }
        if depth == 0 {
            return Self::evaluate(board, me);
        }
        if let Some(&value) = self.cache.get(&(board.clone(), depth)) {
            return value;
        }
        let values = board.legal_moves().into_iter().map(|m| {
            let mut child = board.clone();
            child.make_move(m);
            self.search(&child, depth - 1, me)
        });
        let value = if board.turn() == me {
            values.max()
        } else {
            values.min()
        }
        .expect("no legal moves in a non-terminal position");
        self.cache.insert((board.clone(), depth), value);
        value
    }
}

impl Policy<OthelloEnv> for MaxiMinPolicy {
    fn reset(&mut self, _env: &OthelloEnv) {
        /* Cached values belong to the previous episode's search */
        self.cache.clear();
    }

    fn get_action(&mut self, observation: &OthelloObservation) -> OthelloMove {
        let me = observation.board.turn();
        let mut best: Option<(OthelloMove, i32)> = None;
        for &m in &observation.legal_moves {
            let mut child = observation.board.clone();
            child.make_move(m);
            let value = self.search(&child, self.search_depth - 1, me);
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((m, value)),
            }
        }
        best.expect("no legal moves to choose from").0
    }
}
