// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの ID だよ！
///
/// このエンジンでは、カード1枚ごと・パイル1つごと・ゲーム状態に1つずつ割り当てる。
/// ID だけだと意味はなくて、`Card` や `StackInfo` みたいなコンポーネントと組み合わせて
/// 「ID 5 はハートのQで、場札2列目の3枚目にある」みたいに意味が付くんだ✨
///
/// 外側の表示レイヤーはこの ID でカードを指定して `pick_up` とかを呼ぶよ。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);
