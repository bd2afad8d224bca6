// src/app/state_getter.rs
//! World の状態を読み取り専用のビューにまとめて、JSON にもするモジュール。
//! 描画側はこのスナップショットだけを見ればいいようにしてある。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::card::{Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
use crate::components::stack::{PileKind, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::GameResult;
use crate::logic::board;

/// カード1枚ぶんの表示用データ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub entity: Entity,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    /// 画像を引くためのキー ("S1R12" とか)
    pub short_name: String,
    pub stack_type: StackType,
    pub position_in_stack: u8,
}

/// パイル1つぶんの表示用データ。`cards` は下から上の順。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileView {
    pub stack_type: StackType,
    pub kind: PileKind,
    pub cards: Vec<CardView>,
    pub top: Option<CardView>,
    pub count: usize,
}

/// 盤面まるごとのスナップショット 📸
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub selection: Selection,
    pub piles: Vec<PileView>,
}

pub fn card_view(world: &World, entity: Entity) -> GameResult<CardView> {
    let card = board::card(world, entity)?;
    let info = board::stack_of(world, entity)?;
    Ok(CardView {
        entity,
        suit: card.suit,
        rank: card.rank,
        is_face_up: card.is_face_up,
        short_name: card.short_name(),
        stack_type: info.stack_type,
        position_in_stack: info.position_in_stack,
    })
}

pub fn pile_view(world: &World, stack: StackType) -> GameResult<PileView> {
    let pile = board::pile(world, stack)?;
    let cards = pile
        .cards()
        .iter()
        .map(|&entity| card_view(world, entity))
        .collect::<GameResult<Vec<_>>>()?;
    Ok(PileView {
        stack_type: stack,
        kind: stack.kind(),
        top: cards.last().cloned(),
        count: cards.len(),
        cards,
    })
}

/// 全パイルを `board::all_stacks()` の順に並べたスナップショットを作る。
pub fn snapshot(world: &World, selection: &Selection) -> GameResult<GameSnapshot> {
    let piles = board::all_stacks()
        .into_iter()
        .map(|stack| pile_view(world, stack))
        .collect::<GameResult<Vec<_>>>()?;
    Ok(GameSnapshot {
        status: board::game_status(world),
        selection: selection.clone(),
        piles,
    })
}

/// スナップショットを JSON 文字列にする。
pub fn snapshot_json(world: &World, selection: &Selection) -> GameResult<String> {
    let json = serde_json::to_string(&snapshot(world, selection)?)?;
    debug!("Serialized game snapshot ({} bytes)", json.len());
    Ok(json)
}
