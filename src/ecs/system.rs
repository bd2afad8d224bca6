// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// World の中のコンポーネントを読んで、ゲームのルールに従って書き換える役割。
/// このエンジンでは、手が確定するたびに `WinConditionSystem` を `run` して
/// 勝利判定を更新してるよ🏆
pub trait System {
    /// このシステムを1回実行する。
    fn run(&mut self, world: &mut World);
}
