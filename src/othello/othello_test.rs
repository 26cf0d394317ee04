#[cfg(test)]
mod tests {
    use crate::game::common::{Environment, PlayerSide};
    use crate::game::config::{GameConfig, RenderMode};
    use crate::game::match_runner::MatchRunner;
    use crate::othello::othello_env::{Board, Cell, OthelloEnv, OthelloMove, OthelloObservation};
    use crate::othello::simple_policies::{GreedyPolicy, RandomPolicy};

    fn config(board_size: usize, num_disk_as_reward: bool) -> GameConfig {
        GameConfig {
            protagonist_side: PlayerSide::Black,
            board_size,
            num_disk_as_reward,
            render_in_step: false,
            render_mode: None,
        }
    }

    fn play_to_end(env: &mut OthelloEnv) -> (OthelloObservation, i32) {
        let mut obs = env.reset();
        loop {
            let m = obs.legal_moves[0];
            let step = env.step(m);
            obs = step.observation;
            if step.done {
                return (obs, step.reward);
            }
        }
    }

    #[test]
    fn initial_board_setup() {
        let board = Board::new(8);
        assert_eq!(board.cell(3, 3), Cell::White);
        assert_eq!(board.cell(3, 4), Cell::Black);
        assert_eq!(board.cell(4, 3), Cell::Black);
        assert_eq!(board.cell(4, 4), Cell::White);
        assert_eq!(board.count(PlayerSide::Black), 2);
        assert_eq!(board.count(PlayerSide::White), 2);
        assert_eq!(board.turn(), PlayerSide::Black);
        assert!(!board.is_over());
    }

    #[test]
    fn four_legal_opening_moves() {
        let board = Board::new(8);
        assert_eq!(
            board.legal_moves(),
            vec![
                OthelloMove::new(2, 3),
                OthelloMove::new(3, 2),
                OthelloMove::new(4, 5),
                OthelloMove::new(5, 4),
            ]
        );
        /* The opening is size-independent */
        assert_eq!(Board::new(4).legal_moves().len(), 4);
        assert_eq!(Board::new(6).legal_moves().len(), 4);
    }

    #[test]
    fn opening_move_flips_one_disk() {
        let mut board = Board::new(8);
        board.make_move(OthelloMove::new(2, 3));
        assert_eq!(board.cell(3, 3), Cell::Black);
        assert_eq!(board.count(PlayerSide::Black), 4);
        assert_eq!(board.count(PlayerSide::White), 1);
        assert_eq!(board.turn(), PlayerSide::White);
        assert!(!board.is_over());
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn occupied_square_is_rejected() {
        let mut board = Board::new(8);
        board.make_move(OthelloMove::new(3, 3));
    }

    #[test]
    fn wiping_out_the_opponent_ends_the_game() {
        let mut board = Board::from_str(
            "bwee\
             eeee\
             eeee\
             eeee\
             b",
        );
        board.make_move(OthelloMove::new(0, 2));
        assert!(board.is_over());
        assert_eq!(board.count(PlayerSide::Black), 3);
        assert_eq!(board.count(PlayerSide::White), 0);
        assert_eq!(board.winner(), Some(PlayerSide::Black));
    }

    #[test]
    fn turn_passes_back_when_opponent_has_no_reply() {
        let mut board = Board::from_str(
            "wbee\
             bbee\
             eeee\
             eeee\
             w",
        );
        board.make_move(OthelloMove::new(0, 2));
        /* Black cannot answer, so white keeps the move */
        assert!(!board.is_over());
        assert_eq!(board.turn(), PlayerSide::White);
        assert_eq!(board.count(PlayerSide::White), 3);
        assert_eq!(board.count(PlayerSide::Black), 2);
    }

    #[test]
    fn full_board_ends_the_game() {
        let mut board = Board::from_str(
            "ewbb\
             bbbb\
             bbbb\
             bbbb\
             b",
        );
        board.make_move(OthelloMove::new(0, 0));
        assert!(board.is_over());
        assert_eq!(board.count(PlayerSide::Black), 16);
        assert_eq!(board.winner(), Some(PlayerSide::Black));
    }

    #[test]
    fn dead_position_is_terminal_from_the_start() {
        let board = Board::from_str(
            "bbbb\
             bbbb\
             bbbb\
             bbbb\
             b",
        );
        assert!(board.is_over());
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.winner(), Some(PlayerSide::Black));
    }

    #[test]
    fn env_exposes_turn_and_moves() {
        let mut env = OthelloEnv::new(config(8, false));
        let obs = env.reset();
        assert_eq!(env.player_turn(), PlayerSide::Black);
        assert_eq!(env.possible_moves(), obs.legal_moves);
        assert_eq!(obs.board.size(), 8);
    }

    #[test]
    fn disk_reward_is_the_white_count() {
        let mut env = OthelloEnv::new(config(4, true));
        let (obs, reward) = play_to_end(&mut env);
        assert!(obs.board.is_over());
        assert!(obs.legal_moves.is_empty());
        assert_eq!(reward, obs.board.count(PlayerSide::White) as i32);
        assert!(
            obs.board.count(PlayerSide::Black) + obs.board.count(PlayerSide::White) <= 16
        );
    }

    #[test]
    fn binary_reward_is_oriented_to_the_protagonist() {
        let mut env = OthelloEnv::new(config(4, false));
        let (obs, reward) = play_to_end(&mut env);
        let black = obs.board.count(PlayerSide::Black);
        let white = obs.board.count(PlayerSide::White);
        let expected = match black.cmp(&white) {
            std::cmp::Ordering::Greater => 1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Less => -1,
        };
        assert_eq!(reward, expected);

        /* Same deterministic game, protagonist on the other side */
        let mut env = OthelloEnv::new(GameConfig {
            protagonist_side: PlayerSide::White,
            ..config(4, false)
        });
        let (_, flipped) = play_to_end(&mut env);
        assert_eq!(flipped, -expected);
    }

    #[test]
    fn pixel_array_render_produces_a_frame() {
        let mut env = OthelloEnv::new(GameConfig {
            render_mode: Some(RenderMode::PixelArray),
            ..config(4, false)
        });
        env.reset();
        assert!(env.last_frame().is_none());
        env.render();
        assert_eq!(env.last_frame().map(|f| f.len()), Some(4 * 4 * 3));
        env.close();
        assert!(env.last_frame().is_none());
    }

    #[test]
    fn full_run_tallies_every_episode() {
        let cfg = config(4, false);
        let mut env = OthelloEnv::new(cfg.clone());
        let mut protagonist = RandomPolicy::new(0);
        let mut opponent = GreedyPolicy::new(&cfg);
        let runner = MatchRunner::new(cfg, 3, false);
        let tally = runner.run(&mut env, &mut protagonist, &mut opponent);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn full_run_in_disk_mode() {
        let cfg = config(4, true);
        let mut env = OthelloEnv::new(cfg.clone());
        let mut protagonist = GreedyPolicy::new(&cfg);
        let mut opponent = RandomPolicy::new(1);
        let runner = MatchRunner::new(cfg, 2, false);
        let tally = runner.run(&mut env, &mut protagonist, &mut opponent);
        assert_eq!(tally.total(), 2);
    }
}
