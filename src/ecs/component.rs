// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体が World に保存できる「データ部品」であることを示すマーカー。
/// カード (`Card`)、カードの居場所 (`StackInfo`)、パイルの中身 (`Pile`)、
/// ゲーム状態 (`GameState`) がこれを実装してるよ。
pub trait Component: std::fmt::Debug + 'static {}
