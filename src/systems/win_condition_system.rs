// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::board;
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札4つが全部13枚になっていたら `GameState` を `Won` にする。
/// 一度 `Won` になったら、もう `Playing` には戻さない。
#[derive(Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }
}

/// 今の組札の枚数で勝利条件を満たしているか。
pub fn is_won(world: &World) -> bool {
    let counts: Vec<usize> = board::foundation_stacks()
        .map(|stack| board::pile(world, stack).map_or(0, |p| p.len()))
        .collect();
    check_win_condition(&counts)
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        if board::game_status(world) != GameStatus::Playing || !is_won(world) {
            return;
        }
        let game_state = board::game_state_entity(world)
            .and_then(|entity| world.get_component_mut::<GameState>(entity));
        if let Some(game_state) = game_state {
            game_state.status = GameStatus::Won;
            info!("🏆 All foundations are complete. You won!");
        }
    }
}
