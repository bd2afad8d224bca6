// src/app/mod.rs
//! 外側 (描画・入力) から触る窓口の GameApp と、その読み取り用ビューだよ！

pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
pub use state_getter::{CardView, GameSnapshot, PileView};
