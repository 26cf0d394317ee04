use std::io;

use crate::game::common::Policy;
use crate::othello::othello_env::{OthelloEnv, OthelloMove, OthelloObservation};

/// Interactive player reading moves from stdin, one row line and one column
/// line at a time. Board display is the environment's rendering surface.
pub struct HumanPolicy {}

impl HumanPolicy {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for HumanPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy<OthelloEnv> for HumanPolicy {
    fn reset(&mut self, _env: &OthelloEnv) {}

    fn get_action(&mut self, observation: &OthelloObservation) -> OthelloMove {
        let read_usize = || -> Option<usize> {
            let mut line = String::new();
            io::stdin()
                .read_line(&mut line)
                .expect("failed to read input");
            match line.trim().parse::<usize>() {
                Err(e) => {
                    println!("invalid number: {}", e);
                    None
                }
                Ok(x) => Some(x),
            }
        };

        let size = observation.board.size();
        loop {
            println!("Waiting for input move (row, then column)...");
            let row = match read_usize() {
                None => continue,
                Some(r) => r,
            };
            let col = match read_usize() {
                None => continue,
                Some(c) => c,
            };

            if row >= size || col >= size {
                println!("invalid move");
                continue;
            }
            let m = OthelloMove::new(row, col);
            if observation.legal_moves.contains(&m) {
                return m;
            }
            println!("invalid move");
        }
    }
}
