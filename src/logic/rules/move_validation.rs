// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//! ここの関数は World を読むだけで、絶対に書き換えない。

use log::{debug, warn};

use crate::components::card::Card;
use crate::components::stack::{PileKind, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::board;

use super::foundation::can_move_to_foundation;
use super::tableau::can_move_to_tableau;

/// カード1枚が、種類 `dest_kind` で一番上が `dest_top` のパイルに置けるか。
///
/// 山札・捨て札・隠し置き場はプレイヤーの移動先には絶対ならない。
pub fn is_legal_move(card: &Card, dest_kind: PileKind, dest_top: Option<&Card>) -> bool {
    match dest_kind {
        PileKind::Tableau => can_move_to_tableau(card, dest_top),
        PileKind::Foundation => can_move_to_foundation(card, dest_top),
        PileKind::Stock | PileKind::Discard | PileKind::Hidden => false,
    }
}

/// `run_len` 枚のカード列をまとめて `dest_kind` のパイルに置ける枚数か。
///
/// 組札には1枚ずつしか積めない。列ごと置けるのは場札 (と隠し置き場) だけ。
pub fn accepts_run_length(dest_kind: PileKind, run_len: usize) -> bool {
    dest_kind != PileKind::Foundation || run_len == 1
}

/// 指定されたカードを特定のパイルに移動できるか検証する。
///
/// 知らないカードやパイルを渡されたら、ログを出して `false`。
pub fn is_move_valid(world: &World, moved_entity: Entity, target_stack: StackType) -> bool {
    let card = match board::card(world, moved_entity) {
        Ok(card) => card,
        Err(e) => {
            warn!("[Rules Validation] {}", e);
            return false;
        }
    };
    let target_top = match board::top_card(world, target_stack) {
        Ok(top) => top.map(|(_, c)| c),
        Err(e) => {
            warn!("[Rules Validation] {}", e);
            return false;
        }
    };
    let result = is_legal_move(card, target_stack.kind(), target_top);
    debug!("[Rules Validation] {} -> {:?}: {}", card, target_stack, result);
    result
}

/// カードを掴んだときに一緒に持ち上がるカード列 (ラン) を返す。
///
/// - 裏向きのカード → 空
/// - 場札 → そのカードから一番上まで (全部表向きのときだけ)
/// - 捨て札・組札 → 一番上のカードだけ
/// - 山札・隠し置き場 → 空 (山札はクリックでめくるもの)
///
/// カードがどこにもいないなら `UnknownCard` エラー。
pub fn liftable_run(world: &World, card_entity: Entity) -> GameResult<Vec<Entity>> {
    let card = board::card(world, card_entity)?;
    let info = board::stack_of(world, card_entity)?;
    if card.is_face_down() {
        return Ok(Vec::new());
    }
    let pile = board::pile(world, info.stack_type)?;
    let index = pile.position_of(card_entity).ok_or_else(|| {
        GameError::IntegrityViolation(format!(
            "{:?} claims to be in {:?} but the pile does not hold it",
            card_entity, info.stack_type
        ))
    })?;

    let run = match pile.kind() {
        PileKind::Tableau => {
            let run = &pile.cards()[index..];
            let all_face_up = run
                .iter()
                .all(|&e| board::card(world, e).map_or(false, |c| c.is_face_up));
            if all_face_up {
                run.to_vec()
            } else {
                Vec::new()
            }
        }
        PileKind::Discard | PileKind::Foundation => {
            if pile.top() == Some(card_entity) {
                vec![card_entity]
            } else {
                Vec::new()
            }
        }
        PileKind::Stock | PileKind::Hidden => Vec::new(),
    };
    Ok(run)
}

/// 移動させるカード列の形をチェックして、移動元のパイルを返す。
///
/// 同じパイルの末尾の連続区間で、全部表向きで、場札以外からなら1枚だけ。
/// 形がおかしければ `InvalidRun` (呼び出し側のバグ)。
pub fn validate_run(world: &World, run: &[Entity]) -> GameResult<StackType> {
    let first = *run
        .first()
        .ok_or_else(|| GameError::InvalidRun("run is empty".to_string()))?;
    let source = board::stack_of(world, first)?.stack_type;
    let pile = board::pile(world, source)?;

    if source.kind() != PileKind::Tableau && run.len() > 1 {
        return Err(GameError::InvalidRun(format!(
            "only a single card can leave {:?}, got {}",
            source,
            run.len()
        )));
    }

    let start = pile.position_of(first).ok_or_else(|| {
        GameError::IntegrityViolation(format!("{:?} is not held by {:?}", first, source))
    })?;
    if &pile.cards()[start..] != run {
        return Err(GameError::InvalidRun(format!(
            "cards are not the contiguous top of {:?}",
            source
        )));
    }

    for &entity in run {
        if board::card(world, entity)?.is_face_down() {
            return Err(GameError::InvalidRun(format!("{:?} is face down", entity)));
        }
    }
    Ok(source)
}
