use log::{debug, info, warn};

use crate::board::{Board, COLS, ROWS};
use crate::error::MoveError;
use crate::types::{GameStatus, Player, Position, StateView, StatusKind};

/// Receives the new state whenever a call on [`GameEngine`] changes it.
pub trait StateObserver {
    fn state_changed(&self, state: &GameState);
}

impl<F> StateObserver for F
where
    F: Fn(&GameState),
{
    fn state_changed(&self, state: &GameState) {
        self(state)
    }
}

/// Snapshot of one game. Transitions produce a new value; the old one is
/// never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    /// Empty board, player one to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn playable_columns(&self) -> Vec<u8> {
        if self.is_over() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| col as u8)
            .collect()
    }

    /// Turn or result line shown above the board.
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player.number()),
            GameStatus::Won(player) => format!("Player {} wins!", player.number()),
            GameStatus::Tied => "It's a tie!".to_string(),
        }
    }

    pub fn to_view(&self) -> StateView {
        StateView {
            board: self.board.to_array().to_vec(),
            rows: ROWS as u8,
            cols: COLS as u8,
            current_player: self.current_player.number(),
            status: StatusKind::from(self.status),
            winner: self.status.winner().map(Player::number),
            is_game_over: self.is_over(),
            last_move: self.last_move,
            playable_columns: self.playable_columns(),
            message: self.message(),
        }
    }

    /// State after the current player drops a disc into `column`.
    /// `None` when the move is a no-op: the game is over or the column is full.
    fn with_disc(&self, column: usize) -> Option<Self> {
        if self.is_over() {
            return None;
        }

        let mover = self.current_player;
        let mut board = self.board;
        let row = board.drop_disc(column, mover)?;

        let status = if board.has_four_through(row, column, mover) {
            GameStatus::Won(mover)
        } else if board.is_full() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        };
        let current_player = match status {
            GameStatus::InProgress => mover.opponent(),
            _ => mover,
        };

        Some(Self {
            board,
            current_player,
            status,
            last_move: Some(Position {
                row: row as u8,
                col: column as u8,
            }),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// One game session. Owns the current [`GameState`] and replaces it on
/// every accepted move or reset.
pub struct GameEngine {
    state: GameState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drops the current player's disc into `column` (0..=6).
    ///
    /// A full column or a finished game leaves the state untouched and
    /// returns it unchanged. Only an out-of-range column is an error.
    pub fn drop_disc(&mut self, column: usize) -> Result<GameState, MoveError> {
        if column >= COLS {
            warn!("rejected disc for out-of-range column {column}");
            return Err(MoveError::ColumnOutOfRange { column });
        }

        let Some(next) = self.state.with_disc(column) else {
            debug!(
                "ignored disc in column {column} (status: {:?}, column full: {})",
                self.state.status,
                self.state.board.is_column_full(column)
            );
            return Ok(self.state);
        };

        if let Some(pos) = next.last_move {
            debug!(
                "player {} dropped a disc at row {} col {}",
                self.state.current_player.number(),
                pos.row,
                pos.col
            );
        }
        match next.status {
            GameStatus::Won(player) => info!("player {} wins", player.number()),
            GameStatus::Tied => info!("game tied on a full board"),
            GameStatus::InProgress => {}
        }

        self.replace_state(next);
        Ok(self.state)
    }

    /// Starts a fresh game regardless of the current status.
    pub fn reset(&mut self) -> GameState {
        info!("game reset");
        self.replace_state(GameState::new());
        self.state
    }

    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    fn replace_state(&mut self, next: GameState) {
        if next == self.state {
            return;
        }
        self.state = next;
        for observer in &self.observers {
            observer.state_changed(&self.state);
        }
    }

    #[cfg(test)]
    fn set_state_for_test(&mut self, state: GameState) {
        self.state = state;
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
