//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

use super::common::is_one_rank_higher;

/// カードを組札の一番上 (`target_top`、空なら `None`) に置けるかチェックする。
///
/// 組札のスートは最初から決まってなくて、最初に置いた A のスートになる。
/// - 空: A だけ
/// - それ以外: 同じスートで、ランクがちょうど1つ上
pub fn can_move_to_foundation(card_to_move: &Card, target_top: Option<&Card>) -> bool {
    let result = match target_top {
        None => card_to_move.rank == Rank::Ace,
        Some(top) => card_to_move.suit == top.suit && is_one_rank_higher(card_to_move, top),
    };
    trace!(
        "[Foundation Rule] {} onto {}: {}",
        card_to_move,
        target_top.map_or_else(|| "empty foundation".to_string(), |c| c.to_string()),
        result
    );
    result
}
