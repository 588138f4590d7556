use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Side length of the square grid.
    #[arg(long, default_value_t = 10)]
    pub grid_size: usize,

    /// Percentage of cells to fill with obstacles.
    #[arg(long, default_value_t = 20)]
    pub obstacle_percent: usize,

    /// Seed for the world generator. Omit for a different world each run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination row. Skips the interactive prompt when given with --goal-col.
    #[arg(long)]
    pub goal_row: Option<usize>,

    /// Destination column. Skips the interactive prompt when given with --goal-row.
    #[arg(long)]
    pub goal_col: Option<usize>,

    /// Suppress the banner and search statistics.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
