use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use independence::board::Board;
use independence::pieces::Material;
use independence::problem::{Problem, SearchOptions};
use independence::search;

#[derive(Debug, Parser)]
#[command(name = "chess")]
#[command(
    about = "Count the ways to place a chess-piece multiset on an MxN board with no piece attacking another",
    long_about = None
)]
struct Cli {
    /// Board dimension in the x direction (rows)
    #[arg(long = "m", value_name = "ROWS")]
    m: u16,

    /// Board dimension in the y direction (columns)
    #[arg(long = "n", value_name = "COLS")]
    n: u16,

    /// Number of kings
    #[arg(long = "k", value_name = "N", default_value_t = 0)]
    kings: u32,

    /// Number of queens
    #[arg(long = "q", value_name = "N", default_value_t = 0)]
    queens: u32,

    /// Number of rooks
    #[arg(long = "r", value_name = "N", default_value_t = 0)]
    rooks: u32,

    /// Number of bishops
    #[arg(long = "b", value_name = "N", default_value_t = 0)]
    bishops: u32,

    /// Number of knights
    #[arg(long = "kn", value_name = "N", default_value_t = 0)]
    knights: u32,

    /// Print every solution board (always on for boards up to 4x4)
    #[arg(long)]
    show: bool,

    /// Override the placement-attempt budget
    #[arg(long, value_name = "NODES")]
    max_nodes: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let material = Material::new()
        .with_kings(cli.kings)
        .with_queens(cli.queens)
        .with_rooks(cli.rooks)
        .with_bishops(cli.bishops)
        .with_knights(cli.knights);
    let problem = Problem::new(Board::new(cli.m, cli.n), material);

    let show = cli.show || (cli.m <= 4 && cli.n <= 4);
    let mut options = SearchOptions {
        collect_solutions: show,
        ..SearchOptions::default()
    };
    if let Some(n) = cli.max_nodes {
        options.limits.max_nodes = n;
    }

    let start = Instant::now();
    let report = match search::play(&problem, &options) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    if show {
        for s in &report.solutions {
            println!("{}", s.render(problem.board));
        }
    }

    println!("number of solutions: {}", report.num_solutions);
    println!("number of backtracks: {}", report.num_backtracks);
    println!("distinct orderings: {}", report.num_orderings);
    println!("calculation time (sec): {}", elapsed.as_secs_f64());

    ExitCode::SUCCESS
}
