use clap::Parser;

use othello_arena::game::common::PlayerSide;
use othello_arena::game::config::{
    resolve_render_in_step, resolve_render_mode, AgentType, GameConfig, RenderMode,
};
use othello_arena::game::match_runner::MatchRunner;
use othello_arena::othello::create_policy;
use othello_arena::othello::othello_env::OthelloEnv;
use othello_arena::utils;

#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    #[clap(long, default_value = "rand")]
    protagonist: String,
    #[clap(long, default_value = "rand")]
    opponent: String,
    #[clap(long)]
    protagonist_plays_white: bool,
    #[clap(long)]
    num_disk_as_reward: bool,
    #[clap(long, default_value = "8")]
    board_size: usize,
    #[clap(long, default_value = "1")]
    protagonist_search_depth: u32,
    #[clap(long, default_value = "1")]
    opponent_search_depth: u32,
    #[clap(long, default_value = "0")]
    rand_seed: u64,
    #[clap(long, default_value = "100")]
    num_rounds: u32,
    #[clap(long)]
    no_render: bool,
    #[clap(long)]
    render_mode: Option<String>,
    #[clap(long, default_value = "_NONE_")]
    result_file: String,
}

fn main() -> std::io::Result<()> {
    utils::init_globals();

    let args = Args::parse();

    let protagonist_type = AgentType::from_token(&args.protagonist);
    let opponent_type = AgentType::from_token(&args.opponent);
    let protagonist_side = if args.protagonist_plays_white {
        PlayerSide::White
    } else {
        PlayerSide::Black
    };
    let render = !args.no_render;

    let requested_mode = args.render_mode.as_deref().map(RenderMode::from_token);
    let render_mode = resolve_render_mode(protagonist_type, opponent_type, requested_mode);
    let init_params = GameConfig {
        protagonist_side,
        board_size: args.board_size,
        num_disk_as_reward: args.num_disk_as_reward,
        render_in_step: resolve_render_in_step(opponent_type, render),
        render_mode,
    };

    log::info!("protagonist: {}", args.protagonist);
    log::info!("opponent: {}", args.opponent);

    let mut protagonist = create_policy(
        protagonist_type,
        args.rand_seed,
        args.protagonist_search_depth,
        &init_params,
    );
    let mut opponent = create_policy(
        opponent_type,
        args.rand_seed,
        args.opponent_search_depth,
        &init_params,
    );

    let mut env = OthelloEnv::new(init_params.clone());
    let runner = MatchRunner::new(init_params, args.num_rounds, render);
    let tally = runner.run(&mut env, protagonist.as_mut(), opponent.as_mut());

    if args.result_file != "_NONE_" {
        let json_obj = json::object! {
            wins: tally.wins,
            draws: tally.draws,
            losses: tally.losses,
        };
        std::fs::write(&args.result_file, json_obj.dump())?;
    }

    Ok(())
}
