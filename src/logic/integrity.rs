// src/logic/integrity.rs
//! 盤面の不変条件をまとめてチェックするよ 🔍
//!
//! - 全パイルを合わせると、52種類のカードがちょうど1枚ずつ
//! - 各カードの `StackInfo` が、実際にそのカードを持ってるパイルと位置を指してる
//! - 山札・隠し置き場は全部裏、捨て札・組札は全部表
//! - 組札は1つのスートで、A から1つずつ順番に積まれてる
//! - 場札は「裏の区間の上に表の区間」で、空でなければ一番上は表

use std::collections::HashSet;

use itertools::Itertools;

use crate::components::card::Card;
use crate::components::stack::{PileKind, StackInfo, StackType};
use crate::config::layout::DECK_SIZE;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::board;

fn violation(message: String) -> GameError {
    GameError::IntegrityViolation(message)
}

/// 盤面の不変条件を全部チェックする。最初に見つかった違反をエラーで返す。
pub fn verify_integrity(world: &World) -> GameResult<()> {
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    let mut identities = HashSet::with_capacity(DECK_SIZE);

    for stack in board::all_stacks() {
        let pile = board::pile(world, stack)?;
        let mut faces = Vec::with_capacity(pile.len());
        let mut cards = Vec::with_capacity(pile.len());
        for (position, &entity) in pile.cards().iter().enumerate() {
            if !seen.insert(entity) {
                return Err(violation(format!("{:?} appears in more than one place", entity)));
            }
            let card = board::card(world, entity)?;
            if !identities.insert((card.suit, card.rank)) {
                return Err(violation(format!("duplicate card {}", card)));
            }
            let info = board::stack_of(world, entity)?;
            if info != StackInfo::new(stack, position as u8) {
                return Err(violation(format!(
                    "{} is at {:?}[{}] but its back-reference says {:?}[{}]",
                    card, stack, position, info.stack_type, info.position_in_stack
                )));
            }
            faces.push(card.is_face_up);
            cards.push(card);
        }
        check_orientation(stack, &faces)?;
        check_foundation_order(stack, &cards)?;
    }

    if identities.len() != DECK_SIZE {
        return Err(violation(format!("{} cards on the table, expected {}", identities.len(), DECK_SIZE)));
    }
    let card_count = world.get_all_entities_with_component::<Card>().len();
    if card_count != DECK_SIZE {
        return Err(violation(format!("{} card entities exist but {} are in piles", card_count, seen.len())));
    }
    Ok(())
}

fn check_orientation(stack: StackType, faces: &[bool]) -> GameResult<()> {
    let kind = stack.kind();
    if kind.holds_face_down() && faces.iter().any(|&up| up) {
        return Err(violation(format!("{:?} holds a face-up card", stack)));
    }
    if kind.holds_face_up() && faces.iter().any(|&up| !up) {
        return Err(violation(format!("{:?} holds a face-down card", stack)));
    }
    if kind == PileKind::Tableau {
        // 表のカードの上に裏のカードが来たら駄目
        if faces.iter().tuple_windows().any(|(&lower, &upper)| lower && !upper) {
            return Err(violation(format!("{:?} has a face-down card above a face-up one", stack)));
        }
        if faces.last() == Some(&false) {
            return Err(violation(format!("{:?} has a face-down top card", stack)));
        }
    }
    Ok(())
}

/// 組札はスートが揃っていて、下から A, 2, 3, ... の順。
fn check_foundation_order(stack: StackType, cards: &[&Card]) -> GameResult<()> {
    if stack.kind() != PileKind::Foundation {
        return Ok(());
    }
    let suit = match cards.first() {
        Some(bottom) => bottom.suit,
        None => return Ok(()),
    };
    for (position, card) in cards.iter().enumerate() {
        if card.suit != suit || card.rank.value() as usize != position + 1 {
            return Err(violation(format!("{:?} holds {} at position {}", stack, card, position)));
        }
    }
    Ok(())
}
