//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。1・2 (ハート・ダイヤ) が赤。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Spade | Suit::Club => CardColor::Black,
        }
    }
}

/// 2枚のカードの色が違う？
pub fn is_opposite_color(a: &Card, b: &Card) -> bool {
    CardColor::from_suit(a.suit) != CardColor::from_suit(b.suit)
}

/// `higher` のランクが `lower` のちょうど1つ上？
pub fn is_one_rank_higher(higher: &Card, lower: &Card) -> bool {
    higher.rank.value() == lower.rank.value() + 1
}
