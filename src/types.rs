use serde::Serialize;

/// One of the two sides. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The number shown to users ("Player 1") and used as the cell code.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// 0=empty, 1=player one, 2=player two.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(player) => player.number(),
        }
    }
}

/// A board coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    InProgress,
    Won,
    Tied,
}

impl From<GameStatus> for StatusKind {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => StatusKind::InProgress,
            GameStatus::Won(_) => StatusKind::Won,
            GameStatus::Tied => StatusKind::Tied,
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    /// Row-major cell codes, `rows * cols` entries.
    pub board: Vec<u8>,
    pub rows: u8,
    pub cols: u8,
    pub current_player: u8,
    pub status: StatusKind,
    pub winner: Option<u8>,
    pub is_game_over: bool,
    /// Contract:
    /// - `None` on a fresh game and right after a reset.
    /// - Otherwise the cell of the most recently accepted disc.
    pub last_move: Option<Position>,
    /// Columns that still accept a disc. Empty once the game is over.
    pub playable_columns: Vec<u8>,
    pub message: String,
}
