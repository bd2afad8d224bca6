// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにあるのは全部「盤面を見るだけ」の純粋な判定関数。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_discard;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_discard::*;
pub use tableau::*;
pub use win_condition::*;
