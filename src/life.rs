use std::collections::HashMap;

use tracing::debug;

use crate::cell::Cell;
use crate::cell::LiveSet;

/// Compute the next generation of `live` under B3/S23.
///
/// Every live cell adds one to the count of each of its 8 neighbors. A position is alive in the
/// next generation iff its count is 3, or its count is 2 and it is alive now. Positions that
/// receive no count can't be born, so nothing outside the neighborhoods of `live` is looked at.
pub fn step(live: &LiveSet) -> LiveSet {
    let mut counts: HashMap<Cell, u8> = HashMap::with_capacity(live.len() * 8);

    for cell in live {
        for neighbor in cell.neighbors() {
            *counts.entry(neighbor).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(cell, n)| *n == 3 || (*n == 2 && live.contains(cell)))
        .map(|(cell, _)| cell)
        .collect()
}

/// The current generation of an unbounded Life world.
#[derive(Debug, Clone, Default)]
pub struct Life {
    cells: LiveSet,

    /// Number of steps taken since the cells were last replaced
    generation: u64,
}

impl Life {
    pub fn new(cells: LiveSet) -> Self {
        Self {
            cells,
            generation: 0,
        }
    }

    pub fn cells(&self) -> &LiveSet {
        &self.cells
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Advance the world by one generation
    pub fn step(&mut self) {
        self.cells = step(&self.cells);
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.cells.len(),
            "stepped"
        );
    }

    /// Advance the world by `n` generations
    pub fn advance(&mut self, n: usize) {
        for i in 0..n {
            if self.cells.is_empty() {
                // the empty world is a fixed point, only the counter moves
                self.generation += (n - i) as u64;
                break;
            }

            self.step();
        }
    }

    /// Flip a single cell. Returns whether the cell is alive afterwards.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.replace(LiveSet::new());
    }

    /// Swap in a whole new generation and restart the generation counter
    pub fn replace(&mut self, cells: LiveSet) {
        self.cells = cells;
        self.generation = 0;
    }
}
