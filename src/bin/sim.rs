use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use tictactoe::{random_move, Difficulty, Game, Outcome};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <games> <difficulty> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let difficulty: Difficulty = args[2]
        .parse()
        .map_err(|e: tictactoe::GameError| anyhow::anyhow!(e))?;
    let seed: u64 = args[3].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut human_wins = 0usize;
    let mut bot_wins = 0usize;
    let mut draws = 0usize;

    for _ in 0..games {
        let mut game = Game::new();
        let outcome = loop {
            // random mover stands in for the human
            let index = random_move(game.board(), &mut rng).map_err(|e| anyhow::anyhow!(e))?;
            let outcome = game.human_move(index).map_err(|e| anyhow::anyhow!(e))?;
            if outcome != Outcome::InProgress {
                break outcome;
            }
            let (_, outcome) = game
                .opponent_move(difficulty, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            if outcome != Outcome::InProgress {
                break outcome;
            }
        };
        match outcome {
            Outcome::HumanWins => human_wins += 1,
            Outcome::OpponentWins => bot_wins += 1,
            _ => draws += 1,
        }
    }

    let result = json!({
        "games": games,
        "difficulty": format!("{:?}", difficulty),
        "seed": seed,
        "human_wins": human_wins,
        "bot_wins": bot_wins,
        "draws": draws,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
