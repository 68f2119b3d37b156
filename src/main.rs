#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use tictactoe::{init_logging, print_board, CliPlayer, Difficulty, Game, Outcome, Player};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Level {
    Easy,
    Medium,
    Hard,
}

#[cfg(feature = "std")]
impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer opponent in the terminal.
    Play {
        #[arg(long, value_enum, default_value_t = Level::Hard)]
        difficulty: Level,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { difficulty, seed } => {
            if let Some(s) = seed {
                println!("Seed fixed at {}; the game is reproducible.", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            println!("You are X, the bot is O. Difficulty: {:?}.", difficulty);
            loop {
                let outcome = play_one_game(difficulty.into(), &mut rng)?;
                match outcome {
                    Outcome::HumanWins => println!("You Win!"),
                    Outcome::OpponentWins => println!("Bot Wins!"),
                    _ => println!("Draw!"),
                }
                if !prompt_restart()? {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_one_game(difficulty: Difficulty, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
    let mut human = CliPlayer::new();
    let mut game = Game::new();

    loop {
        print_board(game.board());
        let index = human
            .next_move(rng, game.board())
            .map_err(|e| anyhow::anyhow!(e))?;
        let outcome = game.human_move(index).map_err(|e| anyhow::anyhow!(e))?;
        if outcome != Outcome::InProgress {
            print_board(game.board());
            return Ok(outcome);
        }

        let (cell, outcome) = game
            .opponent_move(difficulty, rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("bot plays cell {} at difficulty {:?}", cell, difficulty);
        println!("Bot plays cell {}.", cell);
        if outcome != Outcome::InProgress {
            print_board(game.board());
            return Ok(outcome);
        }
    }
}

#[cfg(feature = "std")]
fn prompt_restart() -> anyhow::Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(matches!(buf.trim(), "y" | "Y" | "yes"))
}
