use clap::Parser;
use crossterm::style::Stylize;
use env_logger::Env;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sliding_puzzle::{MoveOutcome, Session, SessionConfig};
use std::error::Error;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the sliding tile puzzle in the terminal")]
struct Args {
    /// Tiles per side
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Number of random blank moves used to scramble the board
    #[arg(long, default_value_t = 15)]
    shuffle: usize,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,
}

fn render(session: &Session) {
    println!("{}", session.puzzle().to_string().bold());
    println!("{}", format!("moves: {}", session.moves()).dark_grey());
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = SessionConfig {
        size: args.size,
        shuffle_strength: args.shuffle,
        ..SessionConfig::default()
    };
    let mut session = match args.seed {
        Some(seed) => Session::with_rng(&config, &mut StdRng::seed_from_u64(seed))?,
        None => Session::new(&config)?,
    };

    render(&session);

    let stdin = io::stdin();
    loop {
        print!("Enter a tile to slide (col row), or 'q' to quit: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();
        if trimmed == "q" {
            println!("Thanks for playing!");
            break;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let (col, row) = match parts.as_slice() {
            [col, row] => match (col.parse::<isize>(), row.parse::<isize>()) {
                (Ok(col), Ok(row)) => (col, row),
                _ => {
                    println!("Please enter two numbers, e.g. '2 3'.");
                    continue;
                }
            },
            _ => {
                println!("Invalid input format. Use 'col row' or 'q'.");
                continue;
            }
        };

        let report = session.click_cell(col, row);
        match report.outcome {
            MoveOutcome::Moved { .. } => {}
            MoveOutcome::Blank => println!("That is the empty cell."),
            MoveOutcome::NotAdjacent => println!("That tile is not next to the empty cell."),
            MoveOutcome::OutOfBounds => {
                warn!("move ({}, {}) is outside the board", col, row);
                println!("Coordinates must be between 0 and {}.", session.puzzle().size() - 1);
            }
            MoveOutcome::Frozen => break,
        }

        render(&session);

        if report.cleared {
            println!("{}", "GAME CLEAR!!".bold().green());
            println!("Solved in {} moves.", session.moves());
            break;
        }
    }

    Ok(())
}
