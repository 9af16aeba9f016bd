use clap::Parser;
use log::info;
use rand::prelude::*;

use maze_carver::renderer::render;
use maze_carver::{Generator, MazeError, RecursiveBacktracker};

#[derive(Debug, Parser)]
#[command(name = "maze-carver", version)]
#[command(about = "Carve a perfect maze and print it as ASCII art")]
struct CliArgs {
    /// Cells per row
    #[arg(short, long, default_value_t = 20)]
    width: usize,

    /// Rows of cells
    #[arg(short = 'H', long, default_value_t = 20)]
    height: usize,

    /// Seed for a reproducible maze
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the maze after every carved edge
    #[arg(long)]
    steps: bool,
}

fn run<R: Rng>(args: &CliArgs, rng: R) -> Result<(), MazeError> {
    let mut generator = RecursiveBacktracker::with_rng(args.width, args.height, rng)?;

    if args.steps {
        while !generator.is_done() {
            let grid = generator.next_step()?;
            println!("{}", render(grid)?);
        }
    } else {
        let grid = generator.generate_maze()?;
        print!("{}", render(grid)?);
    }

    info!("carved {} links", generator.link_count());
    Ok(())
}

fn main() -> Result<(), MazeError> {
    env_logger::init();
    let args = CliArgs::parse();

    match args.seed {
        Some(seed) => {
            info!("seeding with {}", seed);
            run(&args, StdRng::seed_from_u64(seed))
        }
        None => run(&args, rand::thread_rng()),
    }
}

#[cfg(test)]
mod test_cli {
    use super::*;

    #[test]
    fn defaults_to_twenty_square() {
        let args = CliArgs::try_parse_from(["maze-carver"]).unwrap();
        assert_eq!(args.width, 20);
        assert_eq!(args.height, 20);
        assert_eq!(args.seed, None);
        assert!(!args.steps);
    }

    #[test]
    fn parses_every_flag() {
        let args = CliArgs::try_parse_from([
            "maze-carver", "-w", "7", "-H", "3", "--seed", "42", "--steps",
        ])
        .unwrap();
        assert_eq!(args.width, 7);
        assert_eq!(args.height, 3);
        assert_eq!(args.seed, Some(42));
        assert!(args.steps);
    }

    #[test]
    fn rejects_negative_sizes() {
        assert!(CliArgs::try_parse_from(["maze-carver", "--width", "-3"]).is_err());
    }

    #[test]
    fn zero_size_is_reported() {
        let args = CliArgs::try_parse_from(["maze-carver", "--width", "0"]).unwrap();
        assert_eq!(
            run(&args, StdRng::seed_from_u64(0)),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 20
            })
        );
    }
}
