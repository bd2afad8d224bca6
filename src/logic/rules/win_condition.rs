//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::layout::{CARDS_PER_SUIT, FOUNDATION_COUNT};

/// 組札ごとの枚数から、クリアしたかを判定する。
/// 組札が4つあって、全部ちょうど13枚ならクリア！🏆
pub fn check_win_condition(foundation_counts: &[usize]) -> bool {
    foundation_counts.len() == FOUNDATION_COUNT as usize
        && foundation_counts.iter().all(|&count| count == CARDS_PER_SUIT)
}
