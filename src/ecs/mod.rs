// src/ecs/mod.rs
//! 自作の小さな ECS (Entity-Component-System) だよ。
//! カード1枚1枚とパイル1つ1つがエンティティになる！

pub mod component;
pub mod entity;
pub mod system;
pub mod world;

// `crate::ecs::X` で使えるように再エクスポート
pub use component::Component;
pub use entity::Entity;
pub use system::System;
pub use world::World;
