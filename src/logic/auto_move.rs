// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! ダブルクリックしたカードを置ける組札を探す、みたいな用途。

use log::debug;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::board;
use crate::logic::rules;

/// カードを今の盤面で置ける組札を、0 番から順に探す。
///
/// 見つかったらその `StackType::Foundation(index)`、無ければ `None`。
/// 盤面は一切変えない。
pub fn find_automatic_foundation_move(world: &World, card_to_move: Entity) -> Option<StackType> {
    let found = board::foundation_stacks().find(|&target| rules::is_move_valid(world, card_to_move, target));
    match found {
        Some(target) => debug!("[AutoMove] {:?} can go to {:?}", card_to_move, target),
        None => debug!("[AutoMove] No suitable foundation for {:?}", card_to_move),
    }
    found
}
