pub mod cmd_player;
pub mod othello_env;
pub mod simple_policies;

mod othello_test;

use crate::game::common::Policy;
use crate::game::config::{AgentType, GameConfig};
use crate::othello::cmd_player::HumanPolicy;
use crate::othello::othello_env::OthelloEnv;
use crate::othello::simple_policies::{GreedyPolicy, MaxiMinPolicy, RandomPolicy};

/// Resolve an agent type into a concrete policy. Called once per side at
/// startup, never mid-episode.
pub fn create_policy(
    agent_type: AgentType,
    seed: u64,
    search_depth: u32,
    init_params: &GameConfig,
) -> Box<dyn Policy<OthelloEnv>> {
    match agent_type {
        AgentType::Random => Box::new(RandomPolicy::new(seed)),
        AgentType::Greedy => Box::new(GreedyPolicy::new(init_params)),
        AgentType::Maximin => Box::new(MaxiMinPolicy::new(search_depth, init_params)),
        AgentType::Human => Box::new(HumanPolicy::new()),
    }
}
