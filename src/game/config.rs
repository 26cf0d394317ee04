use crate::game::common::PlayerSide;

/// Symbolic agent selector as given on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AgentType {
    Random,
    Greedy,
    Maximin,
    Human,
}

impl AgentType {
    /// Any unrecognized token selects the human agent.
    pub fn from_token(token: &str) -> AgentType {
        match token {
            "rand" | "random" => AgentType::Random,
            "greedy" => AgentType::Greedy,
            "maximin" => AgentType::Maximin,
            _ => AgentType::Human,
        }
    }

    pub fn is_human(&self) -> bool {
        *self == AgentType::Human
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderMode {
    Textual,
    PixelArray,
    Human,
}

impl RenderMode {
    pub fn from_token(token: &str) -> RenderMode {
        match token {
            "textual" => RenderMode::Textual,
            "pixel-array" => RenderMode::PixelArray,
            "human" => RenderMode::Human,
            unknown => panic!("unknown render mode '{unknown}'"),
        }
    }
}

/// Options resolved once per run and shared by the environment, the
/// policies and the match runner.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub protagonist_side: PlayerSide,
    pub board_size: usize,
    pub num_disk_as_reward: bool,
    pub render_in_step: bool,
    pub render_mode: Option<RenderMode>,
}

/// A human player needs the interactive surface no matter which mode was
/// requested. Pure function, run once before any policy is constructed.
pub fn resolve_render_mode(
    protagonist: AgentType,
    opponent: AgentType,
    requested: Option<RenderMode>,
) -> Option<RenderMode> {
    if protagonist.is_human() || opponent.is_human() {
        Some(RenderMode::Human)
    } else {
        requested
    }
}

/// Per-step rendering is forced on only for a human opponent, which must see
/// the board at the moment its move is requested. A human protagonist is
/// served by the per-episode render instead.
pub fn resolve_render_in_step(opponent: AgentType, render: bool) -> bool {
    opponent.is_human() && render
}
