// src/systems/deal_system.rs

use std::collections::HashSet;

use log::{debug, info};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::config::layout::{DECK_SIZE, STOCK_DEAL_TOTAL, TABLEAU_COUNT, TABLEAU_DEAL_TOTAL};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::board;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// `world` には `board::create_board` で作った空の盤面が入ってる前提。
    /// `deck` の順番通りに配るので、同じデッキなら毎回同じ配置になる。
    ///
    /// # 配り方 (クラシックな三角配り)
    /// 1. ラウンド r (0..7) ごとに、場札 r..7 に1枚ずつ配る。
    ///    → 場札 i には i+1 枚、合計 28 枚。
    /// 2. 各列で最後に置いたカード (= ラウンド i で列 i に置いたもの) だけ表向き。
    /// 3. 残り 24 枚は全部裏向きで山札へ。デッキの最後のカードが山札の一番上。
    ///
    /// # エラー
    /// デッキが52種類ちょうどじゃなければ `InvalidDeck`、盤面にもうカードがあれば
    /// `IntegrityViolation`。
    pub fn execute(&self, world: &mut World, deck: Vec<Card>) -> GameResult<()> {
        // --- 1. デッキと盤面のチェック ---
        validate_deck(&deck)?;
        for stack in board::all_stacks() {
            if !board::pile(world, stack)?.is_empty() {
                return Err(GameError::IntegrityViolation(format!(
                    "cannot deal onto a table where {:?} already holds cards",
                    stack
                )));
            }
        }

        let mut cards = deck.into_iter();

        // --- 2. 場札 (Tableau) への配置 ---
        for round in 0..TABLEAU_COUNT {
            for tableau_index in round..TABLEAU_COUNT {
                let card = cards
                    .next()
                    .ok_or_else(|| GameError::InvalidDeck("ran out of cards while dealing".to_string()))?;
                // その列に最後に置くカードだけ表向きにするよ！👀
                let is_face_up = tableau_index == round;
                spawn_card(world, card, is_face_up, StackType::Tableau(tableau_index))?;
            }
        }
        debug!("Tableau dealt");

        // --- 3. 残りは全部山札へ ---
        let mut stock_count = 0;
        for card in cards {
            spawn_card(world, card, false, StackType::Stock)?;
            stock_count += 1;
        }

        debug_assert_eq!(stock_count, STOCK_DEAL_TOTAL);
        info!(
            "🃏 Deal complete: {} cards on the tableau, {} in the stock",
            TABLEAU_DEAL_TOTAL, stock_count
        );
        Ok(())
    }
}

/// 52種類のカードがちょうど1枚ずつあるかチェックする。
fn validate_deck(deck: &[Card]) -> GameResult<()> {
    if deck.len() != DECK_SIZE {
        return Err(GameError::InvalidDeck(format!("expected {} cards, got {}", DECK_SIZE, deck.len())));
    }
    let unique: HashSet<_> = deck.iter().map(|c| (c.suit, c.rank)).collect();
    if unique.len() != DECK_SIZE {
        return Err(GameError::InvalidDeck(format!(
            "deck contains duplicates ({} distinct cards)",
            unique.len()
        )));
    }
    Ok(())
}

/// カードのエンティティを作って、指定したパイルの一番上に置く。
fn spawn_card(world: &mut World, mut card: Card, is_face_up: bool, stack: StackType) -> GameResult<Entity> {
    card.is_face_up = is_face_up;
    let entity = world.create_entity();
    world.add_component(entity, card);
    board::push_card(world, stack, entity)?;
    Ok(entity)
}
