//! AI 同士の自己対局を回して統計を JSON で出力する
//!
//! Usage: selfplay [num_games]

use std::env;
use tictactoe_ai::player::ai::AIConfig;
use tictactoe_ai::selfplay::{run_selfplay, SelfPlayConfig};

const DEFAULT_GAMES: usize = 100;

fn main() -> anyhow::Result<()> {
    tictactoe_ai::init_logging();

    let args: Vec<String> = env::args().collect();
    let num_games = match args.get(1) {
        None => DEFAULT_GAMES,
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Usage: selfplay [num_games]");
                std::process::exit(1);
            }
        },
    };

    let config = SelfPlayConfig {
        num_games,
        ai: AIConfig::load_or_default(),
        seed: None,
    };
    let stats = run_selfplay(&config)?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
