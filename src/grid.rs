use rand::Rng;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Classification of a single grid cell. `PathStep` ordinals are assigned
/// only after a successful search, counting 1 at the goal up to the path
/// length at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Obstacle,
    PathStep(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![vec![Cell::Open; size]; size],
        }
    }

    /// Generate a grid with roughly `obstacle_percent` percent of its cells
    /// blocked. The start cell is never blocked. Placement is attempt-capped
    /// so an overly dense request degrades instead of spinning.
    pub fn generate<R: Rng>(
        size: usize,
        obstacle_percent: usize,
        start: Position,
        rng: &mut R,
    ) -> Self {
        let target = size * size * obstacle_percent / 100;

        let mut placed: FxHashSet<Position> = FxHashSet::default();
        let mut attempts = 0;
        let max_attempts = target * 10;
        while placed.len() < target && attempts < max_attempts {
            let pos = Position {
                row: rng.gen_range(0..size),
                col: rng.gen_range(0..size),
            };
            if pos != start && !placed.contains(&pos) {
                placed.insert(pos);
            }
            attempts += 1;
        }

        let mut grid = Grid::new(size);
        for &pos in &placed {
            grid.set(pos, Cell::Obstacle);
        }
        grid
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.cells[pos.row][pos.col] == Cell::Open
    }

    /// The in-bounds axis-aligned neighbors of `pos`, always enumerated
    /// north, south, west, east. Equal-cost routes resolve the same way
    /// every run because expansion follows this order.
    pub fn get_neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        let (row, col) = (pos.row as i32, pos.col as i32);

        for (dr, dc) in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let nr = row + dr;
            let nc = col + dc;

            if nr >= 0 && nr < self.size as i32 && nc >= 0 && nc < self.size as i32 {
                neighbors.push(Position {
                    row: nr as usize,
                    col: nc as usize,
                });
            }
        }
        neighbors
    }

    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Print a visual representation of the grid
    pub fn print(&self, start: Option<Position>, goal: Option<Position>) {
        println!("Legend: S=Start, G=Goal, #=Obstacle, *=Route, .=Open");

        // Print column numbers header
        print!("   ");
        for col in 0..self.size {
            print!("{:2}", col % 10);
        }
        println!();

        for row in 0..self.size {
            // Print row number
            print!("{:2} ", row);

            for col in 0..self.size {
                let pos = Position { row, col };
                let ch = match self.cells[row][col] {
                    Cell::PathStep(_) => '*',
                    Cell::Obstacle => '#',
                    Cell::Open => {
                        if Some(pos) == start {
                            'S'
                        } else if Some(pos) == goal {
                            'G'
                        } else {
                            '.'
                        }
                    }
                };
                print!("{} ", ch);
            }
            println!();
        }
        println!();
    }

    /// Build a grid from rows of characters, `#` marking obstacles.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Grid::new(rows.len());
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    grid.set(Position { row, col }, Cell::Obstacle);
                }
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn neighbors_enumerate_north_south_west_east() {
        let grid = Grid::new(5);
        assert_eq!(
            grid.get_neighbors(pos(2, 2)),
            vec![pos(1, 2), pos(3, 2), pos(2, 1), pos(2, 3)]
        );
    }

    #[test]
    fn corner_neighbors_are_clipped_to_the_grid() {
        let grid = Grid::new(5);
        assert_eq!(grid.get_neighbors(pos(0, 0)), vec![pos(1, 0), pos(0, 1)]);
        assert_eq!(grid.get_neighbors(pos(4, 4)), vec![pos(3, 4), pos(4, 3)]);
    }

    #[test]
    fn openness_requires_bounds_and_a_clear_cell() {
        let mut grid = Grid::new(3);
        grid.set(pos(1, 1), Cell::Obstacle);

        assert!(grid.is_open(pos(0, 0)));
        assert!(!grid.is_open(pos(1, 1)));
        assert!(!grid.is_open(pos(3, 0)));
        assert!(!grid.is_open(pos(0, 3)));
    }

    #[test]
    fn generation_spares_the_start_cell() {
        let start = pos(0, 0);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = Grid::generate(10, 20, start, &mut rng);
            assert_eq!(grid.cell(start), Cell::Open, "seed {}", seed);
        }
    }

    #[test]
    fn generation_respects_the_requested_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::generate(10, 20, pos(0, 0), &mut rng);

        let blocked = (0..10)
            .flat_map(|row| (0..10).map(move |col| pos(row, col)))
            .filter(|&p| grid.cell(p) == Cell::Obstacle)
            .count();
        assert!(blocked <= 20);
        assert!(blocked > 0);
    }

    #[test]
    fn generation_is_reproducible_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            Grid::generate(10, 20, pos(0, 0), &mut a),
            Grid::generate(10, 20, pos(0, 0), &mut b)
        );
    }

    #[test]
    fn zero_density_leaves_every_cell_open() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::generate(4, 0, pos(0, 0), &mut rng);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(grid.cell(pos(row, col)), Cell::Open);
            }
        }
    }
}
