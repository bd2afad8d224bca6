// src/systems/stock_system.rs
//! 山札 (Stock) まわりの操作。1枚めくって捨て札へ、空になったら捨て札を戻す。

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::error::GameResult;
use crate::logic::board;
use crate::logic::rules::stock_discard;

/// 山札をクリックしたときに実際に起きたこと。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    /// 1枚めくって捨て札に置いた
    Drew(Entity),
    /// 捨て札を山札に戻した (戻した枚数)
    Recycled(usize),
    /// 山札も捨て札も空で、何も起きなかった
    Nothing,
}

#[derive(Default)]
pub struct StockSystem;

impl StockSystem {
    /// 山札の一番上を表にして捨て札の一番上へ。
    ///
    /// 山札が空なら `Ok(None)` で、盤面はそのまま。
    pub fn draw_from_stock(&self, world: &mut World) -> GameResult<Option<Entity>> {
        let stock_is_empty = board::pile(world, StackType::Stock)?.is_empty();
        if !stock_discard::can_deal_from_stock(stock_is_empty) {
            debug!("Stock is empty. Cannot draw.");
            return Ok(None);
        }

        let drawn = match board::pile_mut(world, StackType::Stock)?.pop() {
            Some(entity) => entity,
            None => return Ok(None),
        };
        board::card_mut(world, drawn)?.is_face_up = true;
        board::push_card(world, StackType::Discard, drawn)?;

        info!("Drew {} from the stock.", board::card(world, drawn)?);
        Ok(Some(drawn))
    }

    /// 山札が空で捨て札があるとき、捨て札を全部裏向きにして山札へ戻す。
    ///
    /// 順番はひっくり返す: 最初に捨てたカードが山札の一番上になるので、
    /// もう一度全部めくると同じ順番で捨て札が再現される。
    /// 条件を満たさなければ何もせず `Ok(0)`。
    pub fn recycle_stock(&self, world: &mut World) -> GameResult<usize> {
        let stock_is_empty = board::pile(world, StackType::Stock)?.is_empty();
        let discard_is_empty = board::pile(world, StackType::Discard)?.is_empty();
        if !stock_discard::can_recycle_stock(stock_is_empty, discard_is_empty) {
            debug!(
                "Recycle skipped (stock empty: {}, discard empty: {})",
                stock_is_empty, discard_is_empty
            );
            return Ok(0);
        }

        let mut returned = board::pile_mut(world, StackType::Discard)?.drain_all();
        returned.reverse();
        for &entity in &returned {
            board::card_mut(world, entity)?.is_face_up = false;
            board::push_card(world, StackType::Stock, entity)?;
        }

        info!("♻️ Returned {} cards from the discard pile to the stock.", returned.len());
        Ok(returned.len())
    }

    /// 山札クリック1回分: めくれるならめくる、無理なら戻す、どっちも無理なら何もしない。
    pub fn activate_stock(&self, world: &mut World) -> GameResult<StockAction> {
        if let Some(drawn) = self.draw_from_stock(world)? {
            return Ok(StockAction::Drew(drawn));
        }
        match self.recycle_stock(world)? {
            0 => Ok(StockAction::Nothing),
            n => Ok(StockAction::Recycled(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use crate::logic::test_support::{add_card_for_test, empty_board};

    fn cards_in(world: &World, stack: StackType) -> Vec<Card> {
        board::pile(world, stack)
            .expect("pile")
            .cards()
            .iter()
            .map(|&e| board::card(world, e).expect("card").clone())
            .collect()
    }

    /// 山札に3枚 (下から 2, 3, 4 のハート)
    fn small_stock() -> (World, Vec<Entity>) {
        let mut world = empty_board();
        let cards = [Rank::Two, Rank::Three, Rank::Four]
            .into_iter()
            .map(|rank| add_card_for_test(&mut world, Suit::Heart, rank, false, StackType::Stock))
            .collect();
        (world, cards)
    }

    #[test]
    fn draw_moves_top_card_face_up() {
        let (mut world, cards) = small_stock();
        let drawn = StockSystem.draw_from_stock(&mut world).expect("draw");
        assert_eq!(drawn, Some(cards[2]));
        assert!(board::card(&world, cards[2]).expect("card").is_face_up);
        assert_eq!(board::pile(&world, StackType::Discard).expect("discard").cards(), &[cards[2]]);
        assert_eq!(board::pile(&world, StackType::Stock).expect("stock").len(), 2);
        assert_eq!(
            board::stack_of(&world, cards[2]).expect("info").stack_type,
            StackType::Discard
        );
    }

    #[test]
    fn draw_from_empty_stock_is_a_no_op() {
        let mut world = empty_board();
        let discarded = add_card_for_test(&mut world, Suit::Club, Rank::Five, true, StackType::Discard);
        assert_eq!(StockSystem.draw_from_stock(&mut world).expect("draw"), None);
        assert_eq!(board::pile(&world, StackType::Discard).expect("discard").cards(), &[discarded]);
    }

    #[test]
    fn recycle_reproduces_the_same_discard_pile() {
        let (mut world, _) = small_stock();
        for _ in 0..3 {
            StockSystem.draw_from_stock(&mut world).expect("draw");
        }
        let discard_before = cards_in(&world, StackType::Discard);

        assert_eq!(StockSystem.recycle_stock(&mut world).expect("recycle"), 3);
        assert!(board::pile(&world, StackType::Discard).expect("discard").is_empty());
        let stock = cards_in(&world, StackType::Stock);
        assert!(stock.iter().all(|c| c.is_face_down()), "戻したカードは全部裏向き");
        // 最初に捨てたカード (ハートの4) が一番上
        assert_eq!(stock.last().map(|c| c.rank), Some(Rank::Four));

        for _ in 0..3 {
            StockSystem.draw_from_stock(&mut world).expect("draw");
        }
        assert_eq!(cards_in(&world, StackType::Discard), discard_before);
    }

    #[test]
    fn recycle_requires_empty_stock_and_non_empty_discard() {
        let (mut world, _) = small_stock();
        add_card_for_test(&mut world, Suit::Spade, Rank::Ace, true, StackType::Discard);
        assert_eq!(StockSystem.recycle_stock(&mut world).expect("recycle"), 0);
        assert_eq!(board::pile(&world, StackType::Stock).expect("stock").len(), 3);

        let mut empty = empty_board();
        assert_eq!(StockSystem.recycle_stock(&mut empty).expect("recycle"), 0);
    }

    #[test]
    fn activate_stock_draws_then_recycles_then_idles() {
        let mut world = empty_board();
        let only = add_card_for_test(&mut world, Suit::Diamond, Rank::Ten, false, StackType::Stock);

        assert_eq!(StockSystem.activate_stock(&mut world).expect("click"), StockAction::Drew(only));
        assert_eq!(StockSystem.activate_stock(&mut world).expect("click"), StockAction::Recycled(1));
        assert_eq!(board::stack_of(&world, only).expect("info").stack_type, StackType::Stock);

        let mut empty = empty_board();
        assert_eq!(StockSystem.activate_stock(&mut empty).expect("click"), StockAction::Nothing);
    }

    #[test]
    fn stock_and_discard_total_is_preserved() {
        let (mut world, _) = small_stock();
        for _ in 0..10 {
            StockSystem.activate_stock(&mut world).expect("click");
            let stock = board::pile(&world, StackType::Stock).expect("stock").len();
            let discard = board::pile(&world, StackType::Discard).expect("discard").len();
            assert_eq!(stock + discard, 3);
        }
    }
}
