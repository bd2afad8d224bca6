// src/components/mod.rs

// World に入れるコンポーネントと、それを説明する型たち！
pub mod card;
pub mod game_state;
pub mod pile;
pub mod selection;
pub mod stack;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::{GameState, GameStatus};
pub use pile::Pile;
pub use selection::Selection;
pub use stack::{PileKind, StackInfo, StackType};
