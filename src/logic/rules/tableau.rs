//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

use super::common::{is_one_rank_higher, is_opposite_color};

/// カードを場札の一番上 (`target_top`、空の列なら `None`) に置けるかチェックする。
///
/// - 空の列: K だけ置ける
/// - それ以外: 色が違って、ランクがちょうど1つ下
pub fn can_move_to_tableau(card_to_move: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        Some(top) => {
            let colors_different = is_opposite_color(card_to_move, top);
            let rank_is_one_less = is_one_rank_higher(top, card_to_move);
            trace!(
                "[Tableau Rule] {} onto {}: colors different {}, rank one less {}",
                card_to_move, top, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card_to_move.rank == Rank::King;
            trace!("[Tableau Rule] {} onto empty tableau: is king {}", card_to_move, is_king);
            is_king
        }
    }
}
