// src/error.rs
//! エンジンの呼び出し側が「使い方を間違えた」ときに返すエラーだよ！🚨
//!
//! 「ルール上置けない」みたいな普通の結果は `bool` や空の `Vec` で返すから、
//! ここに来るのはプログラムのバグっぽいケースだけ！

use std::fmt;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;

/// エンジン操作の失敗 (InvalidOperation 系) をまとめた列挙型。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 指定されたエンティティがカードじゃない、またはどのパイルにもいない。
    UnknownCard(Entity),
    /// このレイアウトに存在しないパイル。
    UnknownPile(StackType),
    /// 移動させようとしたカード列 (ラン) がおかしい。
    InvalidRun(String),
    /// 持ち上げ中のカードがあるのに別の操作をしようとした。
    SelectionActive,
    /// 何も持ち上げてないのにドロップしようとした。
    NoSelection,
    /// ディーラーに52枚の正しいデッキ以外が渡された。
    InvalidDeck(String),
    /// 設定 JSON が読めなかった。
    InvalidConfig(String),
    /// 状態のシリアライズに失敗した。
    Serialization(String),
    /// 盤面の不変条件が壊れてる！
    IntegrityViolation(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownCard(entity) => write!(f, "entity {:?} is not a card on the table", entity),
            GameError::UnknownPile(stack) => write!(f, "pile {:?} does not exist", stack),
            GameError::InvalidRun(reason) => write!(f, "invalid run: {}", reason),
            GameError::SelectionActive => write!(f, "a picked-up run must be dropped or cancelled first"),
            GameError::NoSelection => write!(f, "no run is currently picked up"),
            GameError::InvalidDeck(reason) => write!(f, "invalid deck: {}", reason),
            GameError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            GameError::Serialization(reason) => write!(f, "serialization failed: {}", reason),
            GameError::IntegrityViolation(reason) => write!(f, "integrity violation: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Serialization(e.to_string())
    }
}

/// このクレートの `Result` 型の短縮形。
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_readable() {
        let err = GameError::UnknownPile(StackType::Tableau(9));
        assert_eq!(err.to_string(), "pile Tableau(9) does not exist");

        let err = GameError::InvalidRun("empty run".to_string());
        assert_eq!(err.to_string(), "invalid run: empty run");
    }

    #[test]
    fn serde_errors_convert() {
        let parse_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: GameError = parse_err.into();
        assert!(matches!(err, GameError::Serialization(_)));
    }
}
