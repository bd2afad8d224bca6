// src/systems/move_card_system.rs

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::stack::{PileKind, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::board;
use crate::logic::rules;

/// カード移動を確定させたときの結果だよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// 移動元のパイル
    pub source: StackType,
    /// 移動先のパイル
    pub target: StackType,
    /// 動かしたカード (下から順)
    pub moved: Vec<Entity>,
    /// 移動元の場札で、新しく表になったカード
    pub revealed: Option<Entity>,
}

/// カード (またはカード列) をパイル間で動かすシステム！🚚
///
/// ルール上置けるかどうかの判定は呼び出し側 (`GameApp::try_drop` とか) の仕事。
/// ここでは形のチェックだけして、移動・逆引き表の更新・場札のめくりまでを一気にやる。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// `run` を今のパイルから `target` の一番上へ、順番そのままで移す。
    ///
    /// 1. 移動元の末尾から run を取り外す
    /// 2. 移動先の末尾に同じ順番で積む (各カードの `StackInfo` も更新)
    ///    隠し置き場に入れたカードは裏向きにする。
    /// 3. 移動元が場札で、新しい一番上が裏向きなら表にする。
    ///    ただし移動先が隠し置き場のときはめくらない。
    ///
    /// # エラー
    /// run の形がおかしい (`InvalidRun`)、知らないカード・パイル、
    /// 移動元と移動先が同じ、組札に2枚以上まとめて置こうとした、のどれか。エラーのときは盤面は何も変わらない。
    pub fn move_run(&self, world: &mut World, run: &[Entity], target: StackType) -> GameResult<MoveOutcome> {
        let source = rules::validate_run(world, run)?;
        if source == target {
            return Err(GameError::InvalidRun(format!("{:?} is both source and destination", source)));
        }
        if !rules::accepts_run_length(target.kind(), run.len()) {
            return Err(GameError::InvalidRun(format!(
                "only a single card can go onto {:?}, got {}",
                target,
                run.len()
            )));
        }
        let message = placement_message(world, run[0], target)?;

        // --- 1. 取り外し ---
        let start = board::pile(world, source)?
            .position_of(run[0])
            .ok_or(GameError::UnknownCard(run[0]))?;
        let moved = board::pile_mut(world, source)?.take_from(start);

        // --- 2. 積む ---
        for &entity in &moved {
            if target.kind().holds_face_down() {
                board::card_mut(world, entity)?.is_face_up = false;
            }
            board::push_card(world, target, entity)?;
        }

        // --- 3. 場札のめくり ---
        let revealed = if source.kind() == PileKind::Tableau && target.kind() != PileKind::Hidden {
            reveal_top_if_face_down(world, source)?
        } else {
            None
        };

        info!("{}", message);
        debug!("Moved {:?} from {:?} to {:?} (revealed {:?})", moved, source, target, revealed);
        Ok(MoveOutcome { source, target, moved, revealed })
    }
}

/// 場札の一番上が裏向きなら表にして、そのカードを返す。
fn reveal_top_if_face_down(world: &mut World, stack: StackType) -> GameResult<Option<Entity>> {
    let top = match board::top_card(world, stack)? {
        Some((entity, card)) if card.is_face_down() => entity,
        _ => return Ok(None),
    };
    board::card_mut(world, top)?.flip();
    Ok(Some(top))
}

/// 「どこに何を置いたか」のログメッセージ。
fn placement_message(world: &World, card_entity: Entity, target: StackType) -> GameResult<String> {
    let card = board::card(world, card_entity)?;
    let message = match (board::top_card(world, target)?, target.kind()) {
        (Some((_, top)), _) => format!("Placed {} to {}.", card, top),
        (None, PileKind::Foundation) => format!("Placed {} to the foundation.", card),
        (None, PileKind::Tableau) => format!("Placed {} to a new pile.", card),
        (None, _) => format!("Placed {} to {:?}.", card, target),
    };
    Ok(message)
}
