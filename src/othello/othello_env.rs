use std::fmt::{self, Display};

use itertools::Itertools;

use crate::game::common::{Environment, PlayerSide, Step};
use crate::game::config::{GameConfig, RenderMode};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    fn of(side: PlayerSide) -> Cell {
        match side {
            PlayerSide::Black => Cell::Black,
            PlayerSide::White => Cell::White,
        }
    }
}

pub fn side_to_str(side: PlayerSide) -> &'static str {
    match side {
        PlayerSide::Black => "black",
        PlayerSide::White => "white",
    }
}

/// A single disk placement at (row, column).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OthelloMove {
    row: u8,
    col: u8,
}

impl OthelloMove {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.col as usize
    }
}

impl Display for OthelloMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    turn: PlayerSide,
    game_over: bool,
}

impl Board {
    pub fn new(size: usize) -> Self {
        assert!(
            size >= 4 && size % 2 == 0,
            "board size must be even and at least 4, got {size}"
        );
        let mut cells = vec![Cell::Empty; size * size];
        let half = size / 2;
        cells[(half - 1) * size + (half - 1)] = Cell::White;
        cells[(half - 1) * size + half] = Cell::Black;
        cells[half * size + (half - 1)] = Cell::Black;
        cells[half * size + half] = Cell::White;
        Self {
            size,
            cells,
            turn: PlayerSide::Black,
            game_over: false,
        }
    }

    /// Build a position from a cell string ('b', 'w', 'e', whitespace
    /// ignored) followed by one final char for the side to move.
    pub fn from_str(s: &str) -> Self {
        let chars = s.chars().filter(|c| !c.is_whitespace()).collect_vec();
        assert!(chars.len() > 1, "board string too short");
        let turn = match chars[chars.len() - 1] {
            'b' => PlayerSide::Black,
            'w' => PlayerSide::White,
            other => panic!("invalid turn char '{other}'"),
        };
        let cell_chars = &chars[..chars.len() - 1];
        let size = (cell_chars.len() as f64).sqrt() as usize;
        assert!(
            size * size == cell_chars.len(),
            "cell count {} is not a square",
            cell_chars.len()
        );
        let cells = cell_chars
            .iter()
            .map(|c| match c {
                'e' => Cell::Empty,
                'b' => Cell::Black,
                'w' => Cell::White,
                other => panic!("invalid cell char '{other}'"),
            })
            .collect_vec();
        let mut board = Self {
            size,
            cells,
            turn,
            game_over: false,
        };
        board.game_over =
            !board.has_any_move(board.turn) && !board.has_any_move(board.turn.opposite());
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn turn(&self) -> PlayerSide {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    pub fn count(&self, side: PlayerSide) -> u32 {
        let disk = Cell::of(side);
        self.cells.iter().filter(|&&c| c == disk).count() as u32
    }

    pub fn is_valid_move(&self, m: OthelloMove) -> bool {
        self.is_valid_move_for(self.turn, m)
    }

    fn is_valid_move_for(&self, side: PlayerSide, m: OthelloMove) -> bool {
        if m.row() >= self.size || m.column() >= self.size {
            return false;
        }
        if self.cell(m.row(), m.column()) != Cell::Empty {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.flips_in_direction(side, m, dr, dc) > 0)
    }

    /// Number of opponent disks a placement at `m` would flip walking in
    /// direction (dr, dc): a run of opponent disks closed by an own disk.
    fn flips_in_direction(&self, side: PlayerSide, m: OthelloMove, dr: i32, dc: i32) -> usize {
        let own = Cell::of(side);
        let foe = Cell::of(side.opposite());
        let mut r = m.row() as i32 + dr;
        let mut c = m.column() as i32 + dc;
        let mut seen = 0;
        while r >= 0 && (r as usize) < self.size && c >= 0 && (c as usize) < self.size {
            let cell = self.cells[r as usize * self.size + c as usize];
            if cell == foe {
                seen += 1;
            } else if cell == own {
                return seen;
            } else {
                return 0;
            }
            r += dr;
            c += dc;
        }
        0
    }

    fn has_any_move(&self, side: PlayerSide) -> bool {
        (0..self.size).any(|row| {
            (0..self.size).any(|col| self.is_valid_move_for(side, OthelloMove::new(row, col)))
        })
    }

    pub fn legal_moves(&self) -> Vec<OthelloMove> {
        if self.game_over {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let m = OthelloMove::new(row, col);
                if self.is_valid_move(m) {
                    moves.push(m);
                }
            }
        }
        moves
    }

    /// Place a disk for the side to move, flip the captured lines and
    /// advance the turn, passing automatically when the next side has no
    /// reply. The game is over once neither side can move.
    pub fn make_move(&mut self, m: OthelloMove) {
        assert!(!self.game_over, "move on a finished game");
        assert!(self.is_valid_move(m), "illegal move {m}");
        let own = Cell::of(self.turn);
        self.cells[m.row() * self.size + m.column()] = own;
        for (dr, dc) in DIRECTIONS {
            let flips = self.flips_in_direction(self.turn, m, dr, dc);
            let mut r = m.row() as i32 + dr;
            let mut c = m.column() as i32 + dc;
            for _ in 0..flips {
                self.cells[r as usize * self.size + c as usize] = own;
                r += dr;
                c += dc;
            }
        }
        self.turn = self.turn.opposite();
        if !self.has_any_move(self.turn) {
            self.turn = self.turn.opposite();
            if !self.has_any_move(self.turn) {
                self.game_over = true;
            }
        }
    }

    /// Winner by disk majority. Must only be asked on a finished game.
    pub fn winner(&self) -> Option<PlayerSide> {
        assert!(self.game_over);
        let black = self.count(PlayerSide::Black);
        let white = self.count(PlayerSide::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(PlayerSide::Black),
            std::cmp::Ordering::Less => Some(PlayerSide::White),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn print(&self) {
        for row in 0..self.size {
            let line = (0..self.size)
                .map(|col| match self.cell(row, col) {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                })
                .join(" ");
            println!("{}", line);
        }
    }
}

/// The (board_state, legal_actions) pair handed to policies, passed through
/// unmodified by the match runner.
#[derive(Clone, Debug)]
pub struct OthelloObservation {
    pub board: Board,
    pub legal_moves: Vec<OthelloMove>,
}

pub struct OthelloEnv {
    config: GameConfig,
    board: Board,
    last_frame: Option<Vec<u8>>,
}

impl OthelloEnv {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.board_size);
        Self {
            config,
            board,
            last_frame: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// RGB frame of the last pixel-array render, 3 bytes per cell.
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.last_frame.as_deref()
    }

    fn observation(&self) -> OthelloObservation {
        OthelloObservation {
            board: self.board.clone(),
            legal_moves: self.board.legal_moves(),
        }
    }

    fn terminal_reward(&self) -> i32 {
        if self.config.num_disk_as_reward {
            self.board.count(PlayerSide::White) as i32
        } else {
            match self.board.winner() {
                Some(side) if side == self.config.protagonist_side => 1,
                None => 0,
                Some(_) => -1,
            }
        }
    }

    fn rgb_frame(&self) -> Vec<u8> {
        let size = self.board.size();
        let mut frame = Vec::with_capacity(size * size * 3);
        for row in 0..size {
            for col in 0..size {
                let rgb: [u8; 3] = match self.board.cell(row, col) {
                    Cell::Empty => [0, 128, 0],
                    Cell::Black => [0, 0, 0],
                    Cell::White => [255, 255, 255],
                };
                frame.extend_from_slice(&rgb);
            }
        }
        frame
    }
}

impl Environment for OthelloEnv {
    type Observation = OthelloObservation;
    type Action = OthelloMove;

    fn reset(&mut self) -> OthelloObservation {
        self.board = Board::new(self.config.board_size);
        self.observation()
    }

    fn step(&mut self, action: OthelloMove) -> Step<OthelloObservation> {
        self.board.make_move(action);
        let done = self.board.is_over();
        let reward = if done { self.terminal_reward() } else { 0 };
        if self.config.render_in_step {
            self.render();
        }
        Step {
            observation: self.observation(),
            reward,
            done,
            truncated: false,
        }
    }

    fn render(&mut self) {
        match self.config.render_mode {
            None => {}
            Some(RenderMode::Textual) => self.board.print(),
            Some(RenderMode::Human) => {
                self.board.print();
                if self.board.is_over() {
                    println!(
                        "game over: black {} white {}",
                        self.board.count(PlayerSide::Black),
                        self.board.count(PlayerSide::White)
                    );
                } else {
                    println!(
                        "{} to move, legal moves: {}",
                        side_to_str(self.board.turn()),
                        self.board.legal_moves().iter().join(" ")
                    );
                }
            }
            Some(RenderMode::PixelArray) => self.last_frame = Some(self.rgb_frame()),
        }
    }

    fn close(&mut self) {
        self.last_frame = None;
        log::debug!("environment closed");
    }

    fn player_turn(&self) -> PlayerSide {
        self.board.turn()
    }

    fn possible_moves(&self) -> Vec<OthelloMove> {
        self.board.legal_moves()
    }
}
