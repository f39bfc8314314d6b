use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod types;
pub mod web;

pub use error::MoveError;
pub use game::{GameEngine, GameState, StateObserver};
pub use types::{Cell, GameStatus, Player, Position, StateView};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
