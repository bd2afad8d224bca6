// src/logic/mod.rs
//! ゲームのロジック (デッキ、ルール判定、盤面の参照) をまとめるよ！

pub mod auto_move;
pub mod board;
pub mod deck;
pub mod integrity;
pub mod rules;

#[cfg(test)]
pub(crate) mod test_support;
