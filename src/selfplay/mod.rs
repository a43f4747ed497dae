use crate::core::Mark;
use crate::game::{Game, MatchState};
use crate::player::ai::AIConfig;
use crate::player::MinimaxAI;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub ai: AIConfig,
    /// 名前と先手の乱数シード。None ならランダム。
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub first: Mark,
    pub winner: Option<Mark>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub x_name: String,
    pub o_name: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// AI 同士で `num_games` 局を並列に指す
pub fn run_selfplay(config: &SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = StdRng::seed_from_u64(base_seed);
    let x_name = config.ai.pick_name(&[], &mut rng);
    let o_name = config.ai.pick_name(&[x_name.as_str()], &mut rng);

    let results: Vec<GameResult> = (1..=config.num_games)
        .into_par_iter()
        .map(|game_num| {
            // 各局は独立したシードを持つので並列でも再現できる
            let mut game_rng = StdRng::seed_from_u64(base_seed.wrapping_add(game_num as u64));
            let result = run_game_silent(&x_name, &o_name, &mut game_rng)?;
            info!(
                game = game_num,
                first = %result.first,
                winner = ?result.winner,
                moves = result.moves,
                "self-play game finished"
            );
            Ok(result)
        })
        .collect::<anyhow::Result<_>>()?;

    let mut stats = SelfPlayStats::new();
    stats.x_name = x_name;
    stats.o_name = o_name;
    for result in results {
        if result.winner.is_some() {
            warn!(?result, "self-play game did not end in a draw");
        }
        stats.add_result(result);
    }
    Ok(stats)
}

fn run_game_silent<R: Rng + ?Sized>(
    x_name: &str,
    o_name: &str,
    rng: &mut R,
) -> anyhow::Result<GameResult> {
    let start_time = Instant::now();

    let x = MinimaxAI::new(Mark::X, x_name);
    let o = MinimaxAI::new(Mark::O, o_name);

    let mut game = Game::with_random_start(rng);
    game.verbose = false;
    let first = game.current;

    let winner = match game.play(&x, &o)? {
        MatchState::Won(mark) => Some(mark),
        _ => None,
    };

    Ok(GameResult {
        first,
        winner,
        moves: game.history.len(),
        time_ms: start_time.elapsed().as_millis(),
    })
}
