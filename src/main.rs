#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use sea_battle::{
    announce_shot, format_target, greet, init_logging, print_boards, Actor, ConsoleActor, Game,
    MatchConfig, MatchState, RandomActor, Side, DEFAULT_FLEET, DEFAULT_GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: u8,
        #[arg(long, value_delimiter = ',', help = "Vessel lengths, e.g. --fleet 3,2,2,1,1,1,1")]
        fleet: Option<Vec<u8>>,
    },
    /// Watch the computer play both seats.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: u8,
        #[arg(long, value_delimiter = ',', help = "Vessel lengths, e.g. --fleet 3,2,2,1,1,1,1")]
        fleet: Option<Vec<u8>>,
        #[arg(long, help = "Only print the final result")]
        quiet: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    match cli.command {
        Commands::Play { seed, size, fleet } => run_play(config_from(size, fleet), build_rng(seed)),
        Commands::Auto {
            seed,
            size,
            fleet,
            quiet,
        } => run_auto(config_from(size, fleet), build_rng(seed), quiet),
    }
}

#[cfg(feature = "std")]
fn config_from(size: u8, fleet: Option<Vec<u8>>) -> MatchConfig {
    MatchConfig::new(size, fleet.unwrap_or_else(|| DEFAULT_FLEET.to_vec()))
}

#[cfg(feature = "std")]
fn build_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn run_play(config: MatchConfig, mut rng: SmallRng) -> anyhow::Result<()> {
    let actors: [Box<dyn Actor>; 2] = [
        Box::new(ConsoleActor::new(config.size)),
        Box::new(RandomActor::new(config.size)),
    ];
    let mut game = Game::new(&config, actors, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    game.grid_mut(Side::Second).set_hidden(true);
    greet(config.size);
    loop {
        match game.state() {
            MatchState::Finished(winner) => {
                print_boards(
                    game.grid(Side::First),
                    game.grid(Side::Second),
                    "Your board",
                    "Computer board",
                );
                println!("{}", "-".repeat(20));
                match winner {
                    Side::First => println!("Victory is yours!"),
                    Side::Second => println!("The computer wins!"),
                }
                return Ok(());
            }
            MatchState::AwaitingTurn(side) => {
                print_boards(
                    game.grid(Side::First),
                    game.grid(Side::Second),
                    "Your board",
                    "Computer board",
                );
                if side == Side::Second {
                    println!("\nComputer's turn!");
                    std::thread::sleep(std::time::Duration::from_secs(1));
                }
                if let Some(record) = game.play_move(&mut rng) {
                    announce_shot(&record, side == Side::Second);
                }
            }
        }
    }
}

#[cfg(feature = "std")]
fn run_auto(config: MatchConfig, mut rng: SmallRng, quiet: bool) -> anyhow::Result<()> {
    let actors: [Box<dyn Actor>; 2] = [
        Box::new(RandomActor::new(config.size)),
        Box::new(RandomActor::new(config.size)),
    ];
    let mut game = Game::new(&config, actors, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    while let Some(record) = game.play_move(&mut rng) {
        if !quiet {
            println!(
                "{:?} fires at {} -> {:?}",
                record.side,
                format_target(record.target),
                record.outcome
            );
        }
    }
    if !quiet {
        print_boards(
            game.grid(Side::First),
            game.grid(Side::Second),
            "First fleet",
            "Second fleet",
        );
    }
    if let Some(winner) = game.winner() {
        println!("{:?} wins after {} moves", winner, game.moves());
    }
    Ok(())
}
