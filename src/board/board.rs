//! Board structure with occupied-cell tracking

use std::collections::BTreeSet;
use std::fmt;

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::{BoardError, BoardResult};

/// Square game board.
///
/// Alongside the cell grid the board keeps the set of occupied
/// positions, which must always equal the set of non-empty cells.
/// `Clone` copies both; a clone never shares its index with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cell owners
    cells: Vec<Stone>,
    /// Positions of every non-empty cell, ordered row-major
    occupied: BTreeSet<Pos>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            occupied: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Validate a position and return its cell index
    #[inline]
    fn index(&self, pos: Pos) -> BoardResult<usize> {
        if pos.row < self.size && pos.col < self.size {
            Ok(pos.to_index(self.size))
        } else {
            Err(BoardError::OutOfRange {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Unchecked read used by line scans that already iterate in range
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Stone {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> BoardResult<Stone> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> BoardResult<bool> {
        Ok(self.get(pos)? == Stone::Empty)
    }

    /// Check if position holds any stone
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> BoardResult<bool> {
        Ok(self.get(pos)? != Stone::Empty)
    }

    /// Check if position holds the given stone
    #[inline]
    pub fn is_occupied_by(&self, pos: Pos, stone: Stone) -> BoardResult<bool> {
        Ok(self.get(pos)? == stone)
    }

    /// Write a cell. Placing `Stone::Empty` removes the stone.
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) -> BoardResult<()> {
        let idx = self.index(pos)?;
        self.cells[idx] = stone;
        if stone == Stone::Empty {
            self.occupied.remove(&pos);
        } else {
            self.occupied.insert(pos);
        }
        Ok(())
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) -> BoardResult<()> {
        self.place_stone(pos, Stone::Empty)
    }

    /// True when no cell is empty
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied.len() == self.cells.len()
    }

    /// Reset every cell to empty, keeping the allocation
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.occupied.clear();
    }

    /// Positions of all stones, row-major
    #[inline]
    pub fn occupied(&self) -> &BTreeSet<Pos> {
        &self.occupied
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.occupied.len()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    /// Center cell, `((n-1)/2, (n-1)/2)`
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = self.size.saturating_sub(1) / 2;
        Pos::new(mid, mid)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line: String = (0..self.size)
                .map(|col| self.at(row, col).symbol())
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
