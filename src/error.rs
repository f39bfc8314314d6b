use crate::board::COLS;

/// Caller contract violations. Full columns and moves after the game has
/// ended are not errors; the engine treats them as no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (expected 0..{max})", max = COLS)]
    ColumnOutOfRange { column: usize },
}
