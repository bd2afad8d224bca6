// src/config/layout.rs
//! 盤面の構成に関する定数を定義するよ！
//! パイルの数や、初期配置で何枚配るか、など。

/// デッキの枚数
pub const DECK_SIZE: usize = 52;
/// 1スートあたりの枚数 (= 組札1つが完成したときの枚数)
pub const CARDS_PER_SUIT: usize = 13;
/// 場札 (Tableau) の列数
pub const TABLEAU_COUNT: u8 = 7;
/// 組札 (Foundation) の数
pub const FOUNDATION_COUNT: u8 = 4;
/// 初期配置で場札に配る合計枚数 (1 + 2 + ... + 7)
pub const TABLEAU_DEAL_TOTAL: usize = 28;
/// 初期配置で山札に残る枚数
pub const STOCK_DEAL_TOTAL: usize = DECK_SIZE - TABLEAU_DEAL_TOTAL;
