//! Color-swap Tower Puzzle Solver
//!
//! Two pegs start with alternating blue and red disks and a third peg is
//! empty. A disk may only land on an empty peg or on a disk at least as large.
//! The solver finds a shortest sequence of moves that leaves the first peg all
//! red and the second all blue.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use tower_swap::disks::{DEFAULT_DISK_COUNT, MAX_DISK_COUNT};
use tower_swap::report::SolveReport;
use tower_swap::{
    BreadthFirstSolver, IllegalMove, Move, Position, PuzzleState, SolveOutcome, SolverConfig,
    TowerPuzzle,
};

/// Exit status when the search ends without a solution.
const NO_SOLUTION: u8 = 2;

/// Solves the color-swap tower puzzle by breadth-first search.
#[derive(Parser)]
#[command(name = "tower-swap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the moves followed by the solved board.
    Solve(SolveArgs),
    /// Print the starting board and its legal moves.
    Show(BoardArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// Disks per color on the standard starting board.
    #[arg(
        long,
        default_value_t = DEFAULT_DISK_COUNT,
        value_parser = parse_disk_count,
        conflicts_with = "board"
    )]
    disks: usize,

    /// Read the starting board from FILE instead ("-" for stdin).
    #[arg(long, value_name = "FILE")]
    board: Option<PathBuf>,
}

#[derive(Args)]
struct SolveArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Give up after discovering this many distinct positions.
    #[arg(long, value_name = "N")]
    max_states: Option<usize>,

    /// Print a JSON summary instead of the move list.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Command::Solve(args)) => run_solve(&args),
        Some(Command::Show(args)) => run_show(&args),
        // default: solve the standard board
        None => run_solve(&SolveArgs {
            board: BoardArgs {
                disks: DEFAULT_DISK_COUNT,
                board: None,
            },
            max_states: None,
            json: false,
        }),
    };

    match outcome {
        Ok(code) => code,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn parse_disk_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (1..=MAX_DISK_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!("disk count must be between 1 and {MAX_DISK_COUNT}"))
    }
}

/// Builds the starting board from a layout file or the disk count.
fn load_puzzle(args: &BoardArgs) -> Result<TowerPuzzle, String> {
    let Some(path) = &args.board else {
        return TowerPuzzle::new(args.disks).map_err(|e| e.to_string());
    };

    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("failed to read board from stdin: {e}"))?;
        buffer
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?
    };

    text.parse()
        .map_err(|e| format!("invalid board in {}: {e}", path.display()))
}

/// Solves the puzzle and prints the result.
fn run_solve(args: &SolveArgs) -> Result<ExitCode, String> {
    let puzzle = load_puzzle(&args.board)?;
    let solver = BreadthFirstSolver::with_config(SolverConfig {
        max_states: args.max_states,
    });

    let started = Instant::now();
    let result = solver.solve(&puzzle);
    let elapsed = started.elapsed();

    eprintln!(
        "Explored {} positions ({} expanded, peak frontier {}) in {:.2?}",
        result.stats.states_visited,
        result.stats.states_expanded,
        result.stats.max_frontier,
        elapsed
    );

    if args.json {
        let report = SolveReport::new(&puzzle, &result, elapsed);
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    }

    match &result.outcome {
        SolveOutcome::Solved(moves) => {
            if !args.json {
                let text = format_solution(&puzzle, moves).map_err(|e| e.to_string())?;
                print!("{text}");
            }
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::Exhausted => {
            eprintln!("No solution: every reachable position was explored.");
            Ok(ExitCode::from(NO_SOLUTION))
        }
        SolveOutcome::LimitReached => {
            eprintln!(
                "No solution within {} positions; raise --max-states to search further.",
                result.stats.states_visited
            );
            Ok(ExitCode::from(NO_SOLUTION))
        }
    }
}

/// Prints the starting board and the moves available from it.
fn run_show(args: &BoardArgs) -> Result<ExitCode, String> {
    let puzzle = load_puzzle(args)?;
    print!("{}", format_overview(&puzzle));
    Ok(ExitCode::SUCCESS)
}

/// Formats a solution as one move per line, followed by the final board.
fn format_solution(
    puzzle: &TowerPuzzle,
    moves: &[Move<Position>],
) -> Result<String, IllegalMove<Position>> {
    let mut board = puzzle.duplicate();
    let mut output = String::new();

    for mv in moves {
        board.make_move(mv)?;
        output.push_str(&format!("{mv}\n"));
    }

    if !moves.is_empty() {
        output.push('\n');
    }
    output.push_str(&format!("Solved in {} moves:\n", moves.len()));
    output.push_str(&board.to_string());
    Ok(output)
}

/// Formats a board and its legal moves in a stable order.
fn format_overview(puzzle: &TowerPuzzle) -> String {
    let mut moves: Vec<_> = puzzle.legal_moves().into_iter().collect();
    moves.sort();

    let mut output = puzzle.to_string();
    output.push_str(&format!("\n{} legal moves:\n", moves.len()));
    for mv in moves {
        output.push_str(&format!("  {mv}\n"));
    }
    if puzzle.is_solved() {
        output.push_str("(already solved)\n");
    }
    output
}
