// src/logic/test_support.rs
//! テスト用の盤面組み立てヘルパー。

use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::board;

/// 空の盤面 (パイルだけある World) を作る。
pub(crate) fn empty_board() -> World {
    let mut world = World::new();
    board::create_board(&mut world);
    world
}

/// カードを1枚作って、指定したパイルの一番上に積む。
pub(crate) fn add_card_for_test(
    world: &mut World,
    suit: Suit,
    rank: Rank,
    is_face_up: bool,
    stack: StackType,
) -> Entity {
    let entity = world.create_entity();
    world.add_component(entity, Card { suit, rank, is_face_up });
    board::push_card(world, stack, entity).expect("test pile should exist");
    entity
}

/// 組札1つに、あるスートの A から `up_to` までを表向きで積む。
pub(crate) fn fill_foundation(world: &mut World, index: u8, suit: Suit, up_to: Rank) -> Vec<Entity> {
    (1..=up_to.value())
        .filter_map(Rank::from_value)
        .map(|rank| add_card_for_test(world, suit, rank, true, StackType::Foundation(index)))
        .collect()
}
