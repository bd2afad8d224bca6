// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// パイルの種類だよ。作った後に変わることはない。
///
/// 「一番上」の意味や、空のときに何を置けるかは、この種類ごとにルール側で分岐する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Discard,
    Foundation,
    Tableau,
    Hidden,
}

impl PileKind {
    /// このパイルのカードは必ず裏向き？
    pub fn holds_face_down(self) -> bool {
        matches!(self, PileKind::Stock | PileKind::Hidden)
    }

    /// このパイルのカードは必ず表向き？
    pub fn holds_face_up(self) -> bool {
        matches!(self, PileKind::Discard | PileKind::Foundation)
    }
}

/// カードが存在する場所 (パイル) を一意に示す Enum だよ。
/// 場札と組札は何列目かのインデックスを持つ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7列あるので列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つ (0-3)。スートは最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 捨て札 (Discard)。山札からめくったカードが表向きで積まれる。
    Discard,
    /// プレイヤーからは見えない退避場所。ドロップ先には絶対ならない。
    Hidden,
}

impl StackType {
    pub fn kind(self) -> PileKind {
        match self {
            StackType::Tableau(_) => PileKind::Tableau,
            StackType::Foundation(_) => PileKind::Foundation,
            StackType::Stock => PileKind::Stock,
            StackType::Discard => PileKind::Discard,
            StackType::Hidden => PileKind::Hidden,
        }
    }
}

/// カードのエンティティに付ける「今どこにいるか」コンポーネント。
///
/// パイルがカードを所有して、これは逆引き用の控えにすぎない。
/// 書き換えるのはカードを動かすシステムだけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    /// カードが属しているパイル。
    pub stack_type: StackType,
    /// そのパイルの中で下から何番目か (0 が一番下)。
    pub position_in_stack: u8,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: u8) -> Self {
        Self { stack_type, position_in_stack }
    }
}

impl Component for StackInfo {}
