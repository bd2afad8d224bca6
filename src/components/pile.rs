// src/components/pile.rs

use serde::{Deserialize, Serialize};

use crate::components::stack::{PileKind, StackType};
use crate::ecs::component::Component;
use crate::ecs::entity::Entity;

/// パイル（カードの山）を表すコンポーネントだよ！📚
///
/// 中身はカードのエンティティIDの並び。先頭が一番下、末尾が「一番上」。
/// カードの追加は末尾だけ、取り出しも末尾から (場札のランは末尾の連続区間ごと)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    pub stack_type: StackType,
    cards: Vec<Entity>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Pile { stack_type, cards: Vec::new() }
    }

    pub fn kind(&self) -> PileKind {
        self.stack_type.kind()
    }

    /// 下から上への順番でカードを返す。
    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    /// 一番上のカード。空なら `None`。
    pub fn top(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// カードがこのパイルの何番目にあるか。
    pub fn position_of(&self, card: Entity) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    pub(crate) fn push(&mut self, card: Entity) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Entity> {
        self.cards.pop()
    }

    /// `index` から一番上までをまとめて取り出す (順番はそのまま)。
    pub(crate) fn take_from(&mut self, index: usize) -> Vec<Entity> {
        if index >= self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(index)
    }

    /// 全部取り出して空にする。
    pub(crate) fn drain_all(&mut self) -> Vec<Entity> {
        std::mem::take(&mut self.cards)
    }
}

impl Component for Pile {}
