use std::env;
use std::process;
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use mazegen::{CellFlags, GeneratorKind, Grid, MazeGenerator};

/// Cadence of `--watch` mode, matching the classic 50 steps per second.
const STEP_DELAY: Duration = Duration::from_millis(20);

fn usage() -> ! {
    eprintln!("usage: mazegen [backtracking|prim|eller] [ROWSxCOLS] [--seed N] [--watch]");
    process::exit(2);
}

fn main() {
    env_logger::init();

    let mut kind = GeneratorKind::BackTracking;
    let mut rows = 24;
    let mut columns = 30;
    let mut seed = None;
    let mut watch = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "backtracking" => kind = GeneratorKind::BackTracking,
            "prim" => kind = GeneratorKind::RandPrims,
            "eller" => kind = GeneratorKind::Eller,
            "--watch" => watch = true,
            "--seed" => match args.next().and_then(|value| value.parse().ok()) {
                Some(value) => seed = Some(value),
                None => usage(),
            },
            dims => {
                let mut parts = dims.splitn(2, 'x');
                let parsed = (
                    parts.next().and_then(|v| v.parse::<usize>().ok()),
                    parts.next().and_then(|v| v.parse::<usize>().ok()),
                );
                match parsed {
                    (Some(r), Some(c)) => {
                        rows = r;
                        columns = c;
                    }
                    _ => usage(),
                }
            }
        }
    }

    let built = match seed {
        Some(seed) => MazeGenerator::with_rng(kind, rows, columns, StdRng::seed_from_u64(seed)),
        None => MazeGenerator::new(kind, rows, columns),
    };
    let mut maze = match built {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("mazegen: {}", err);
            process::exit(1);
        }
    };

    if watch {
        print!("\x1b[2J");
        loop {
            let done = maze.step();
            print!("\x1b[H{}", render(maze.grid(), maze.head()));
            if done {
                break;
            }
            thread::sleep(STEP_DELAY);
        }
    } else {
        maze.generate();
        print!("{}", render(maze.grid(), None));
    }
}

/// Draws the grid as ASCII: wall segments from the passage flags, cell
/// fill from the lifecycle flags, `@@` on the backtracker's head.
fn render(grid: &Grid, head: Option<(usize, usize)>) -> String {
    let dims = grid.dims();
    let mut out = String::new();

    for row in 0..dims.rows {
        for col in 0..dims.columns {
            out.push('+');
            if grid.get(row, col).contains(CellFlags::NORTH_OPEN) {
                out.push_str("  ");
            } else {
                out.push_str("--");
            }
        }
        out.push_str("+\n");

        for col in 0..dims.columns {
            if grid.get(row, col).contains(CellFlags::WEST_OPEN) {
                out.push(' ');
            } else {
                out.push('|');
            }
            out.push_str(cell_fill(grid.get(row, col), head == Some((row, col))));
        }
        out.push_str("|\n");
    }

    for _ in 0..dims.columns {
        out.push_str("+--");
    }
    out.push_str("+\n");
    out
}

fn cell_fill(flags: CellFlags, is_head: bool) -> &'static str {
    if is_head {
        "@@"
    } else if flags.contains(CellFlags::VISITING) {
        ".."
    } else if flags.contains(CellFlags::VISITED) {
        "  "
    } else {
        "##"
    }
}
