use crate::grid::Position;

/// Manhattan distance between two cells.
///
/// With unit-cost 4-directional movement this never overestimates the true
/// remaining distance and changes by at most one between adjacent cells, so
/// a cell's cost is final the first time the search pops it.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn zero_for_identical_cells() {
        assert_eq!(manhattan(pos(3, 4), pos(3, 4)), 0);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        assert_eq!(manhattan(pos(0, 0), pos(4, 7)), 11);
        assert_eq!(manhattan(pos(4, 7), pos(0, 0)), 11);
    }

    #[test]
    fn adjacent_cells_shift_the_estimate_by_at_most_one() {
        let goal = pos(5, 5);
        let here = pos(2, 3);
        let h = manhattan(here, goal);
        for neighbor in [pos(1, 3), pos(3, 3), pos(2, 2), pos(2, 4)] {
            let nh = manhattan(neighbor, goal);
            assert!(h.abs_diff(nh) <= 1);
        }
    }
}
