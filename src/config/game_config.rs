// src/config/game_config.rs

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// ゲームの設定だよ ⚙️
///
/// JSON で渡すならこんな感じ: `{ "seed": 42 }`。
/// 項目を省略したらデフォルト値になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// シャッフルの乱数シード。`None` なら毎回違う配り方になる。
    pub seed: Option<u64>,
}

impl GameConfig {
    /// シード固定の設定を作る (テストやリプレイ用)。
    pub fn with_seed(seed: u64) -> Self {
        GameConfig { seed: Some(seed) }
    }

    /// JSON 文字列から設定を読み込む。
    pub fn from_json_str(json: &str) -> GameResult<Self> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }
}
