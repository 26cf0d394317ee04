use std::fmt::Debug;

/// Identity of one of the two sides. Black always moves first, and is
/// encoded as -1 on the environment surface, White as 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerSide {
    Black,
    White,
}

impl PlayerSide {
    pub fn opposite(&self) -> PlayerSide {
        match self {
            PlayerSide::Black => PlayerSide::White,
            PlayerSide::White => PlayerSide::Black,
        }
    }

    pub fn to_id(&self) -> i8 {
        match self {
            PlayerSide::Black => -1,
            PlayerSide::White => 1,
        }
    }

    pub fn from_id(id: i8) -> PlayerSide {
        match id {
            -1 => PlayerSide::Black,
            1 => PlayerSide::White,
            other => panic!("invalid player id {other}"),
        }
    }
}

/// Feedback produced by a single environment step.
pub struct Step<Observation> {
    pub observation: Observation,
    pub reward: i32,
    pub done: bool,
    pub truncated: bool,
}

/// The game environment collaborator. Constructed once per run and reused
/// across all episodes.
pub trait Environment {
    type Observation: Clone;
    type Action: Copy + Eq + Debug;

    /// Rebuild the initial board and return the first observation.
    fn reset(&mut self) -> Self::Observation;
    /// Apply one action for the side to move.
    fn step(&mut self, action: Self::Action) -> Step<Self::Observation>;
    fn render(&mut self);
    fn close(&mut self);
    fn player_turn(&self) -> PlayerSide;
    fn possible_moves(&self) -> Vec<Self::Action>;
}

/// A decision making strategy mapping observations to legal actions.
pub trait Policy<Env: Environment> {
    /// Re-synchronize internal state (search caches, RNG streams) to a
    /// freshly reset environment. Called at the start of every episode.
    fn reset(&mut self, env: &Env);

    /// Select one legal action. May block waiting for interactive input.
    fn get_action(&mut self, observation: &Env::Observation) -> Env::Action;
}
