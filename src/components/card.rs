// src/components/card.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♠️♣️
///
/// 番号は 1..=4 で、1・2 が赤、3・4 が黒。カード画像のキー (`S1R1` とか) もこの番号を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Heart = 1,
    Diamond = 2,
    Spade = 3,
    Club = 4,
}

impl Suit {
    /// スート番号 (1..=4) を返す。
    pub fn index(self) -> u8 {
        self as u8
    }

    /// スート番号からスートを作る。範囲外なら `None`。
    pub fn from_index(index: u8) -> Option<Suit> {
        ALL_SUITS.iter().copied().find(|s| s.index() == index)
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A=1, ..., J=11, Q=12, K=13
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// ランクの数値 (1..=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。範囲外なら `None`。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.iter().copied().find(|r| r.value() == value)
    }
}

/// 全スートの配列 (デッキ作成用)
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];

/// 全ランクの配列 (デッキ作成用)
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表すコンポーネントだよ！🃏
///
/// - `suit` / `rank`: カードの正体。ゲーム中に変わることはない。
/// - `is_face_up`: 表向きなら `true`。
///
/// 「どのパイルにいるか」はここには持たせず、同じエンティティの `StackInfo` で引くよ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る (デッキから出てきたばかりの状態)。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank, is_face_up: false }
    }

    pub fn is_face_down(&self) -> bool {
        !self.is_face_up
    }

    /// 表裏をひっくり返す。
    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    /// カード画像を探すときのキー。ハートのAなら `S1R1`。
    pub fn short_name(&self) -> String {
        format!("S{}R{}", self.suit.index(), self.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {:?}s", self.rank, self.suit)
    }
}

impl Component for Card {}
