// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::layout::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート×ランクの全組み合わせが1枚ずつ。全部裏向き (`is_face_up: false`)。
/// 順番はスート順→ランク順で固定 (シャッフルは `shuffle_deck` で)。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    deck.extend(iproduct!(ALL_SUITS, ALL_RANKS).map(|(suit, rank)| Card::new(suit, rank)));
    deck
}

/// カードデッキをシャッフルする関数だよ。Fisher-Yates なので全順列が等確率！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// 新しいデッキを作ってシャッフルまで済ませる。
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deck
}
