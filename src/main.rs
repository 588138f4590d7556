use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

use astar_navigation::config::Config;
use astar_navigation::grid::{Cell, Grid, Position};
use astar_navigation::search;

fn main() {
    let config = Config::parse();

    if config.grid_size == 0 {
        eprintln!("Grid size must be at least 1");
        std::process::exit(1);
    }
    if config.obstacle_percent >= 100 {
        eprintln!("Obstacle percentage must be below 100");
        std::process::exit(1);
    }

    let mut rng = if let Some(seed) = config.seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let start = Position { row: 0, col: 0 };
    let mut grid = Grid::generate(config.grid_size, config.obstacle_percent, start, &mut rng);

    if !config.quiet {
        println!("A* navigation: finding the shortest route to your destination");
        println!(
            "Grid size: {}x{}, obstacle density: {}%",
            config.grid_size, config.grid_size, config.obstacle_percent
        );
        println!();
        println!("    <Full Map>");
    }
    grid.print(Some(start), None);

    let goal = match (config.goal_row, config.goal_col) {
        (Some(row), Some(col)) => {
            let goal = Position { row, col };
            if let Err(message) = validate_destination(&grid, goal) {
                eprintln!("{}", message);
                std::process::exit(1);
            }
            goal
        }
        (None, None) => {
            println!("Your vehicle is currently at (0, 0).");
            match read_destination(&grid) {
                Ok(goal) => goal,
                Err(e) => {
                    eprintln!("Failed to read a destination: {}", e);
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("--goal-row and --goal-col must be given together");
            std::process::exit(1);
        }
    };

    let (route, metrics) = search::find_path(&grid, start, goal);

    match route {
        Some(route) => {
            let length = route.annotate(&mut grid);
            println!();
            println!("<Pathfinding Completed>");
            grid.print(Some(start), Some(goal));
            println!("Route length: {} cells", length);
        }
        None => {
            println!();
            println!("No path exists to the destination.");
        }
    }

    if !config.quiet {
        println!();
        print!("{}", metrics);
    }
}

/// Prompt until the user enters a reachable-looking destination: two
/// in-bounds coordinates on a non-obstacle cell.
fn read_destination(grid: &Grid) -> io::Result<Position> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!(
            "Enter the row and column of the destination (0-{}, e.g. 5 5): ",
            grid.size - 1
        );
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a destination was given",
            ));
        }

        match parse_destination(&line, grid) {
            Ok(goal) => return Ok(goal),
            Err(message) => {
                println!();
                println!("{}", message);
            }
        }
    }
}

fn parse_destination(line: &str, grid: &Grid) -> Result<Position, String> {
    let mut parts = line.split_whitespace();
    let row = parts.next().and_then(|token| token.parse::<usize>().ok());
    let col = parts.next().and_then(|token| token.parse::<usize>().ok());

    match (row, col) {
        (Some(row), Some(col)) => {
            let goal = Position { row, col };
            validate_destination(grid, goal)?;
            Ok(goal)
        }
        _ => Err(format!(
            "!!! ERROR: Enter two numbers between 0 and {}.",
            grid.size - 1
        )),
    }
}

fn validate_destination(grid: &Grid, goal: Position) -> Result<(), String> {
    if !grid.in_bounds(goal) {
        return Err("!!! ERROR: The destination exceeds the map boundaries.".to_string());
    }
    if grid.cell(goal) == Cell::Obstacle {
        return Err("!!! ERROR: The destination cannot be set on an obstacle.".to_string());
    }
    Ok(())
}
