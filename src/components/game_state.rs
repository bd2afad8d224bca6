// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// ゲーム全体の現在の状態だよ！🏆
///
/// `Won` になったらリスタートするまでずっと `Won` のまま。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 勝利！ 組札4つが全部13枚になった
    Won,
}

/// ゲーム状態を保持するコンポーネント。
///
/// World の中の専用エンティティ1つだけが持つ (シングルトン扱い)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        GameState { status: GameStatus::Playing }
    }
}

impl Component for GameState {}
