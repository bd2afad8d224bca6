// src/logic/board.rs
//! World からパイルやカードを引くための小さなヘルパーたち。
//! ルール判定もシステムも、盤面を見るときは全部ここを通るよ。

use log::debug;

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::pile::Pile;
use crate::components::stack::{StackInfo, StackType};
use crate::config::layout::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};

/// パイルのエンティティを引く。無ければ `UnknownPile`。
pub fn pile_entity(world: &World, stack: StackType) -> GameResult<Entity> {
    world
        .find_entity_by_stack_type(stack)
        .ok_or(GameError::UnknownPile(stack))
}

/// パイルの中身 (読み取り専用)。
pub fn pile(world: &World, stack: StackType) -> GameResult<&Pile> {
    let entity = pile_entity(world, stack)?;
    world
        .get_component::<Pile>(entity)
        .ok_or(GameError::UnknownPile(stack))
}

/// パイルの中身 (書き換え用)。
pub(crate) fn pile_mut(world: &mut World, stack: StackType) -> GameResult<&mut Pile> {
    let entity = pile_entity(world, stack)?;
    world
        .get_component_mut::<Pile>(entity)
        .ok_or(GameError::UnknownPile(stack))
}

/// カードコンポーネントを引く。カードじゃなければ `UnknownCard`。
pub fn card(world: &World, entity: Entity) -> GameResult<&Card> {
    world
        .get_component::<Card>(entity)
        .ok_or(GameError::UnknownCard(entity))
}

pub(crate) fn card_mut(world: &mut World, entity: Entity) -> GameResult<&mut Card> {
    world
        .get_component_mut::<Card>(entity)
        .ok_or(GameError::UnknownCard(entity))
}

/// カードが今どこにいるか (逆引き表を見るだけなので O(1))。
pub fn stack_of(world: &World, entity: Entity) -> GameResult<StackInfo> {
    world
        .get_component::<StackInfo>(entity)
        .copied()
        .ok_or(GameError::UnknownCard(entity))
}

/// パイルの一番上のカード。空なら `Ok(None)`。
pub fn top_card(world: &World, stack: StackType) -> GameResult<Option<(Entity, &Card)>> {
    match pile(world, stack)?.top() {
        Some(entity) => Ok(Some((entity, card(world, entity)?))),
        None => Ok(None),
    }
}

/// カードをパイルの一番上に積んで、逆引き表も更新する。
pub(crate) fn push_card(world: &mut World, stack: StackType, entity: Entity) -> GameResult<()> {
    card(world, entity)?;
    let pile = pile_mut(world, stack)?;
    let position = pile.len() as u8;
    pile.push(entity);
    world.add_component(entity, StackInfo::new(stack, position));
    Ok(())
}

/// このレイアウトに存在する全パイル。
/// 山札・捨て札・組札4つ・場札7列・隠し置き場の順。
pub fn all_stacks() -> Vec<StackType> {
    let mut stacks = vec![StackType::Stock, StackType::Discard];
    stacks.extend((0..FOUNDATION_COUNT).map(StackType::Foundation));
    stacks.extend((0..TABLEAU_COUNT).map(StackType::Tableau));
    stacks.push(StackType::Hidden);
    stacks
}

pub fn foundation_stacks() -> impl Iterator<Item = StackType> {
    (0..FOUNDATION_COUNT).map(StackType::Foundation)
}

pub fn tableau_stacks() -> impl Iterator<Item = StackType> {
    (0..TABLEAU_COUNT).map(StackType::Tableau)
}

/// 空の盤面を World に組み立てる 🏗️
///
/// コンポーネントを登録して、全パイルのエンティティと、
/// `GameState` を持つゲーム用エンティティを1つ作る。カードはまだ無い。
pub fn create_board(world: &mut World) {
    world.register_component::<Card>();
    world.register_component::<StackInfo>();
    world.register_component::<Pile>();
    world.register_component::<GameState>();

    let game_entity = world.create_entity();
    world.add_component(game_entity, GameState::default());

    for stack in all_stacks() {
        let entity = world.create_entity();
        world.add_component(entity, Pile::new(stack));
    }
    debug!("Board created with {} piles", all_stacks().len());
}

/// ゲーム状態を持つエンティティ。
pub fn game_state_entity(world: &World) -> Option<Entity> {
    world.get_all_entities_with_component::<GameState>().into_iter().next()
}

/// 現在のゲーム状態。盤面が無ければ `Playing` 扱い。
pub fn game_status(world: &World) -> GameStatus {
    game_state_entity(world)
        .and_then(|e| world.get_component::<GameState>(e))
        .map_or(GameStatus::Playing, |gs| gs.status)
}
