use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

pub const CONFIG_PATH: &str = "ai_config.json";

/// 名前プールが空のときの名前
const FALLBACK_NAME: &str = "AI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    /// AIプレイヤーの名前候補
    pub names: Vec<String>,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            // 設定ファイルがないのは通常運用
            if Path::new(CONFIG_PATH).exists() {
                warn!(error = %e, "failed to read {}, using defaults", CONFIG_PATH);
            }
            Self::default()
        })
    }

    /// `taken` に含まれない名前からランダムに選ぶ。
    /// 全部使われていればプール全体から選ぶ。
    pub fn pick_name<R: Rng + ?Sized>(&self, taken: &[&str], rng: &mut R) -> String {
        let free: Vec<&String> = self
            .names
            .iter()
            .filter(|name| !taken.contains(&name.as_str()))
            .collect();

        let picked = if free.is_empty() {
            self.names.choose(rng)
        } else {
            free.choose(rng).copied()
        };

        picked
            .cloned()
            .unwrap_or_else(|| FALLBACK_NAME.to_string())
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            names: vec!["Alex".to_string(), "Abbey".to_string()],
        }
    }
}
