pub mod config;
pub mod minimax;

pub use config::AIConfig;
pub use minimax::{Evaluation, GameNode, MinimaxAI, Role, Score};
