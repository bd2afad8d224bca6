// src/components/selection.rs

use serde::{Deserialize, Serialize};

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

/// 今プレイヤーが「持ち上げてる」カードの状態だよ！🖱️➡️🃏
///
/// 持ち上げ → 判定 → 確定 or キャンセル、が1回の操作。
/// `Holding` の間は他の操作はできない。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum Selection {
    /// 何も持ってない
    #[default]
    Idle,
    /// `source` の末尾から `run` を持ち上げてる (run[0] が一番下のカード)
    Holding { run: Vec<Entity>, source: StackType },
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// 持ち上げてるカード列 (何も持ってなければ空)。
    pub fn run(&self) -> &[Entity] {
        match self {
            Selection::Idle => &[],
            Selection::Holding { run, .. } => run,
        }
    }

    /// 持ち上げ元のパイル。
    pub fn source(&self) -> Option<StackType> {
        match self {
            Selection::Idle => None,
            Selection::Holding { source, .. } => Some(*source),
        }
    }
}
