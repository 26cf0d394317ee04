use std::cmp::Ordering;

use crate::game::common::{Environment, PlayerSide, Policy};
use crate::game::config::GameConfig;

/// Result of a single episode, from the protagonist's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EpisodeOutcome {
    Win,
    Draw,
    Loss,
}

/// Three-way outcome counters, from the protagonist's perspective.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RunTally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: EpisodeOutcome) {
        match outcome {
            EpisodeOutcome::Win => self.wins += 1,
            EpisodeOutcome::Draw => self.draws += 1,
            EpisodeOutcome::Loss => self.losses += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Owns the episode loop: routes each turn to the policy whose side is to
/// move and folds terminal rewards into the tally.
pub struct MatchRunner {
    config: GameConfig,
    num_episodes: u32,
    render: bool,
}

impl MatchRunner {
    pub fn new(config: GameConfig, num_episodes: u32, render: bool) -> Self {
        Self {
            config,
            num_episodes,
            render,
        }
    }

    pub fn run<Env: Environment>(
        &self,
        env: &mut Env,
        protagonist: &mut dyn Policy<Env>,
        opponent: &mut dyn Policy<Env>,
    ) -> RunTally {
        let mut tally = RunTally::new();
        for episode in 0..self.num_episodes {
            log::info!("Episode {}", episode + 1);
            let mut obs = env.reset();
            protagonist.reset(env);
            opponent.reset(env);
            if self.render {
                env.render();
            }
            loop {
                /* Sides alternate, re-read the side to move every turn */
                let policy: &mut dyn Policy<Env> =
                    if env.player_turn() == self.config.protagonist_side {
                        &mut *protagonist
                    } else {
                        &mut *opponent
                    };
                let action = policy.get_action(&obs);
                let step = env.step(action);
                obs = step.observation;
                if step.done {
                    log::debug!("reward={}", step.reward);
                    tally.record(self.score_episode(step.reward));
                    break;
                }
                if self.render {
                    env.render();
                }
            }
        }
        log::info!(
            "#Wins: {}, #Draws: {}, #Losses: {}",
            tally.wins,
            tally.draws,
            tally.losses
        );
        env.close();
        tally
    }

    fn score_episode(&self, reward: i32) -> EpisodeOutcome {
        if self.config.num_disk_as_reward {
            let total_disks = (self.config.board_size * self.config.board_size) as i32;
            assert!(
                (0..=total_disks).contains(&reward),
                "disk reward {} out of range for board size {}",
                reward,
                self.config.board_size
            );
            let white_count = reward;
            let black_count = total_disks - white_count;
            let (protagonist_count, opponent_count) = match self.config.protagonist_side {
                PlayerSide::White => (white_count, black_count),
                PlayerSide::Black => (black_count, white_count),
            };
            match protagonist_count.cmp(&opponent_count) {
                Ordering::Greater => EpisodeOutcome::Win,
                Ordering::Equal => EpisodeOutcome::Draw,
                Ordering::Less => EpisodeOutcome::Loss,
            }
        } else {
            match reward {
                1 => EpisodeOutcome::Win,
                0 => EpisodeOutcome::Draw,
                _ => EpisodeOutcome::Loss,
            }
        }
    }
}
