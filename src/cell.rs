use std::collections::HashSet;

/// Grid coordinate. The grid is unbounded for any practical purpose, so this is as wide as we can
/// cheaply hash. The world ends at the limits of `i64`; it does not wrap around.
pub type Coord = i64;

/// The set of live cells of one generation. A cell is alive iff it is in the set.
pub type LiveSet = HashSet<Cell>;

/// Offsets of the Moore neighborhood, diagonals included.
const NEIGHBORHOOD: [(Coord, Coord); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A position on the grid. `y` grows downwards, like screen rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The cells horizontally, vertically and diagonally adjacent to this one. That is 8 of them,
    /// except on the edge of the coordinate range, where the ones past the edge don't exist.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBORHOOD.into_iter().filter_map(move |(dx, dy)| {
            Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
        })
    }

    /// This cell moved by `(dx, dy)`. Panics in debug builds if it leaves the coordinate range.
    pub const fn translate(self, dx: Coord, dy: Coord) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(Coord, Coord)> for Cell {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

/// Build a [`LiveSet`] from a list of `(x, y)` pairs.
pub fn live_set(cells: &[(Coord, Coord)]) -> LiveSet {
    cells.iter().copied().map(Cell::from).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn neighbors_are_distinct_and_exclude_self() {
        let c = Cell::new(-3, 7);
        let n: HashSet<Cell> = c.neighbors().collect();

        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        assert!(n.iter().all(|o| (o.x - c.x).abs() <= 1 && (o.y - c.y).abs() <= 1));
    }

    #[test]
    fn neighbors_do_not_assume_bounded_coordinates() {
        let c = Cell::new(i64::MAX - 1, i64::MIN + 1);

        assert!(c.neighbors().any(|n| n == Cell::new(i64::MAX, i64::MIN)));
        assert_eq!(c.neighbors().count(), 8);
    }

    #[test]
    fn corner_cells_have_no_neighbors_past_the_edge() {
        let corner = Cell::new(i64::MAX, i64::MIN);
        let n: HashSet<Cell> = corner.neighbors().collect();

        assert_eq!(
            n,
            live_set(&[
                (i64::MAX - 1, i64::MIN),
                (i64::MAX - 1, i64::MIN + 1),
                (i64::MAX, i64::MIN + 1),
            ])
        );

        let edge = Cell::new(0, i64::MAX);
        assert_eq!(edge.neighbors().count(), 5);
    }

    #[test]
    fn live_set_deduplicates() {
        let s = live_set(&[(0, 0), (0, 0), (1, 2)]);

        assert_eq!(s.len(), 2);
    }
}
