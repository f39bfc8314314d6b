use crate::types::{Cell, Player};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const NUM_CELLS: usize = ROWS * COLS;
/// Discs in a line needed to win.
pub const CONNECT: usize = 4;

/// Horizontal, vertical, diagonal down-right, diagonal up-right.
const LINE_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Connect Four grid represented by one bitboard per player.
/// Bit `row * COLS + col` is set when that player owns the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    first: u64,
    second: u64,
}

impl Board {
    pub fn new() -> Self {
        Self {
            first: 0,
            second: 0,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= ROWS || col >= COLS {
            return Cell::Empty;
        }
        let square = bit(index(row, col));
        if (self.first & square) != 0 {
            Cell::Occupied(Player::One)
        } else if (self.second & square) != 0 {
            Cell::Occupied(Player::Two)
        } else {
            Cell::Empty
        }
    }

    /// Row a disc dropped into `col` would land on, scanning from the bottom.
    /// `None` when the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        let occupied = self.occupied();
        (0..ROWS)
            .rev()
            .find(|&row| (occupied & bit(index(row, col))) == 0)
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// Drops a disc for `player` into `col`.
    /// Returns the landing row, or `None` (board unchanged) when the column is full.
    pub fn drop_disc(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.landing_row(col)?;
        let square = bit(index(row, col));
        match player {
            Player::One => self.first |= square,
            Player::Two => self.second |= square,
        }
        Some(row)
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns `(player_one_count, player_two_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.first.count_ones() as u8, self.second.count_ones() as u8)
    }

    pub fn empty_count(&self) -> u8 {
        let (first_count, second_count) = self.count();
        NUM_CELLS as u8 - first_count - second_count
    }

    /// Checks every line through `(row, col)` for `CONNECT` or more of
    /// `player`'s discs in a row. Each line is scanned edge to edge, so the
    /// anchor may sit anywhere inside the winning run.
    pub fn has_four_through(&self, row: usize, col: usize, player: Player) -> bool {
        if row >= ROWS || col >= COLS {
            return false;
        }
        let mine = self.discs(player);

        LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
            let mut r = row as i32;
            let mut c = col as i32;
            while in_bounds(r - dr, c - dc) {
                r -= dr;
                c -= dc;
            }

            let mut run = 0usize;
            while in_bounds(r, c) {
                if (mine & bit(index(r as usize, c as usize))) != 0 {
                    run += 1;
                    if run >= CONNECT {
                        return true;
                    }
                } else {
                    run = 0;
                }
                r += dr;
                c += dc;
            }
            false
        })
    }

    /// Full-board scan over every window of `CONNECT` cells.
    pub fn has_four_anywhere(&self, player: Player) -> bool {
        let mine = self.discs(player);

        (0..NUM_CELLS).any(|pos| {
            let (row, col) = pos_to_row_col(pos);
            LINE_DIRECTIONS.iter().any(|&(dr, dc)| {
                (0..CONNECT as i32).all(|step| {
                    let r = row + dr * step;
                    let c = col + dc * step;
                    in_bounds(r, c) && (mine & bit(index(r as usize, c as usize))) != 0
                })
            })
        })
    }

    /// Converts board to `[u8; 42]`, row-major, where 0=empty, 1=player one, 2=player two.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [0u8; NUM_CELLS];
        for (pos, cell) in board.iter_mut().enumerate() {
            let (row, col) = pos_to_row_col(pos);
            *cell = self.cell(row as usize, col as usize).code();
        }
        board
    }

    fn discs(&self, player: Player) -> u64 {
        match player {
            Player::One => self.first,
            Player::Two => self.second,
        }
    }

    fn occupied(&self) -> u64 {
        self.first | self.second
    }

    /// Builds a board from a top-down picture: `X` = player one, `O` = player two,
    /// anything else empty. Gravity is not checked.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(COLS).enumerate() {
                let square = bit(index(row, col));
                match ch {
                    'X' => board.first |= square,
                    'O' => board.second |= square,
                    _ => {}
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_CELLS { 1u64 << pos } else { 0 }
}

fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

fn pos_to_row_col(pos: usize) -> (i32, i32) {
    ((pos / COLS) as i32, (pos % COLS) as i32)
}

fn in_bounds(row: i32, col: i32) -> bool {
    (0..ROWS as i32).contains(&row) && (0..COLS as i32).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.count(), (0, 0));
        assert_eq!(board.empty_count(), 42);
        assert!(board.to_array().iter().all(|&cell| cell == 0));
        assert!((0..COLS).all(|col| board.landing_row(col) == Some(ROWS - 1)));
    }

    #[test]
    fn drop_disc_stacks_from_the_bottom() {
        let mut board = Board::new();

        assert_eq!(board.drop_disc(3, Player::One), Some(5));
        assert_eq!(board.drop_disc(3, Player::Two), Some(4));

        assert_eq!(board.cell(5, 3), Cell::Occupied(Player::One));
        assert_eq!(board.cell(4, 3), Cell::Occupied(Player::Two));
        assert_eq!(board.cell(3, 3), Cell::Empty);
        assert_eq!(board.landing_row(3), Some(3));
        assert_eq!(board.count(), (1, 1));
    }

    #[test]
    fn full_column_rejects_disc_and_keeps_board_unchanged() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            assert_eq!(board.drop_disc(0, player), Some(ROWS - 1 - i));
        }
        let before = board;

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_disc(0, Player::One), None);
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_range_column_is_never_playable() {
        let mut board = Board::new();

        assert_eq!(board.landing_row(COLS), None);
        assert_eq!(board.drop_disc(COLS, Player::One), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn to_array_is_row_major() {
        let mut board = Board::new();
        board.drop_disc(0, Player::One);
        board.drop_disc(6, Player::Two);

        let cells = board.to_array();

        assert_eq!(cells[5 * COLS], 1);
        assert_eq!(cells[5 * COLS + 6], 2);
        assert_eq!(cells.iter().filter(|&&cell| cell != 0).count(), 2);
    }

    #[test]
    fn horizontal_four_is_found_from_any_member() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "..XXXX.",
        ]);

        for col in 2..6 {
            assert!(board.has_four_through(5, col, Player::One));
        }
        assert!(!board.has_four_through(5, 2, Player::Two));
    }

    #[test]
    fn vertical_four_is_found() {
        let board = Board::from_rows([
            ".......", ".......", "...O...", "...O...", "...O...", "...O...",
        ]);

        assert!(board.has_four_through(2, 3, Player::Two));
        assert!(board.has_four_anywhere(Player::Two));
    }

    #[test]
    fn diagonal_down_right_found_when_anchor_is_not_an_endpoint() {
        // (2,0) (3,1) (4,2) (5,3)
        let board = Board::from_rows([
            ".......", ".......", "X......", "OX.....", "XOX....", "XOOX..O",
        ]);

        assert!(board.has_four_through(3, 1, Player::One));
        assert!(board.has_four_through(4, 2, Player::One));
        assert!(board.has_four_anywhere(Player::One));
    }

    #[test]
    fn diagonal_up_right_found() {
        // (5,0) (4,1) (3,2) (2,3)
        let board = Board::from_rows([
            ".......", ".......", "...X...", "..XO...", ".XOO...", "XOOX..X",
        ]);

        assert!(board.has_four_through(2, 3, Player::One));
        assert!(board.has_four_through(4, 1, Player::One));
        assert!(!board.has_four_anywhere(Player::Two));
    }

    #[test]
    fn broken_lines_do_not_count() {
        let board = Board::from_rows([
            ".......", ".......", ".......", ".......", ".......", "XXX.XXX",
        ]);

        assert!(!board.has_four_through(5, 2, Player::One));
        assert!(!board.has_four_through(5, 4, Player::One));
        assert!(!board.has_four_anywhere(Player::One));
    }

    #[test]
    fn anchored_check_agrees_with_full_board_scan() {
        let board = Board::from_rows([
            "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO", "OOXXOOX", "XXOOXXO",
        ]);

        assert!(board.is_full());
        for player in [Player::One, Player::Two] {
            assert!(!board.has_four_anywhere(player));
            for row in 0..ROWS {
                for col in 0..COLS {
                    assert!(!board.has_four_through(row, col, player));
                }
            }
        }
    }
}
