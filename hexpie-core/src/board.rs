//! Board surface: the N x N cell grid and side-to-side connectivity

use crate::game::Player;
use crate::notation::column_label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard Hex board size
pub const DEFAULT_SIZE: usize = 11;

/// One cell of the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Hex adjacency on the rhombic (row, col) grid.
///
/// Six neighbors per cell: the four orthogonal ones plus the two
/// diagonals that complete the hexagonal tiling under the standard
/// parallelogram convention.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
];

/// N x N grid of cells, row-major.
///
/// Pure data: no turn order or history here, that lives in
/// [`crate::game::GameEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// Read-only cell lookup. `None` out of bounds, never panics in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Place a stone. Succeeds iff (row, col) is in bounds and empty;
    /// otherwise no mutation. Repeated calls on an occupied cell always
    /// fail without side effects.
    pub fn place_stone(&mut self, row: usize, col: usize, player: Player) -> bool {
        let Some(i) = self.index(row, col) else {
            return false;
        };
        if !self.cells[i].is_empty() {
            return false;
        }
        self.cells[i] = Cell::Stone(player);
        true
    }

    /// Clear a cell back to empty (undo / swap support).
    pub fn clear_cell(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i] = Cell::Empty;
        }
    }

    /// Reallocate an empty grid, discarding all state.
    pub fn resize(&mut self, new_size: usize) {
        self.size = new_size;
        self.cells = vec![Cell::Empty; new_size * new_size];
    }

    /// Number of occupied cells.
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True when no empty cell remains. Hex cannot end in a draw, so a
    /// full board always carries a spanning chain for one side.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate occupied cells as (row, col, player).
    pub fn stones(&self) -> impl Iterator<Item = (usize, usize, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, c)| match c {
            Cell::Stone(p) => Some((i / self.size, i % self.size, *p)),
            Cell::Empty => None,
        })
    }

    /// Whether `player` owns a connected chain spanning their two target
    /// edges (top-to-bottom for First, left-to-right for Second).
    ///
    /// Flood fill seeded from every owned cell on the start edge, visited
    /// marking guarantees termination in O(N^2).
    pub fn spanning_path(&self, player: Player) -> bool {
        let n = self.size;
        if n == 0 {
            return false;
        }

        let mut visited = vec![false; n * n];
        let mut stack = Vec::new();

        for i in 0..n {
            let (row, col) = match player {
                Player::First => (0, i),
                Player::Second => (i, 0),
            };
            if self.cells[row * n + col] == Cell::Stone(player) {
                visited[row * n + col] = true;
                stack.push((row, col));
            }
        }

        while let Some((row, col)) = stack.pop() {
            let at_far_edge = match player {
                Player::First => row == n - 1,
                Player::Second => col == n - 1,
            };
            if at_far_edge {
                return true;
            }

            for (dr, dc) in NEIGHBOR_OFFSETS {
                let (nr, nc) = (row as i32 + dr, col as i32 + dc);
                if nr < 0 || nc < 0 || nr as usize >= n || nc as usize >= n {
                    continue;
                }
                let idx = nr as usize * n + nc as usize;
                if !visited[idx] && self.cells[idx] == Cell::Stone(player) {
                    visited[idx] = true;
                    stack.push((nr as usize, nc as usize));
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    /// Staircase rendering with coordinate labels, e.g. for an empty 3x3:
    ///
    /// ```text
    ///    a b c
    ///  1 . . .
    ///   2 . . .
    ///    3 . . .
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{} ", column_label(col))?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            for _ in 0..row {
                write!(f, " ")?;
            }
            write!(f, "{:2} ", row + 1)?;
            for col in 0..self.size {
                let mark = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Stone(Player::First) => 'R',
                    Cell::Stone(Player::Second) => 'B',
                };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
