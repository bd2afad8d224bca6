// src/lib.rs
//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! 盤面は自作の小さな ECS (`ecs`) の World に載っていて、
//! カードもパイルもエンティティ。外から遊ぶときは `GameApp` だけ触ればOK。
//!
//! ```no_run
//! use klondike_engine::{GameApp, GameConfig, StackType};
//!
//! let mut app = GameApp::new(GameConfig::with_seed(7))?;
//! let top = app.pile(StackType::Tableau(6))?.top.map(|c| c.entity);
//! if let Some(card) = top {
//!     app.auto_move(card)?;
//! }
//! app.activate_stock()?;
//! println!("{}", app.snapshot_json()?);
//! # Ok::<(), klondike_engine::GameError>(())
//! ```

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logic;
pub mod systems;

// よく使う型はクレート直下からも使えるようにしておく
pub use app::{CardView, GameApp, GameSnapshot, PileView};
pub use components::{Card, GameStatus, PileKind, Rank, Selection, StackType, Suit};
pub use config::GameConfig;
pub use ecs::Entity;
pub use error::{GameError, GameResult};
pub use systems::StockAction;
