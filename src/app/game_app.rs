// src/app/game_app.rs

use std::mem;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::app::state_getter::{self, GameSnapshot, PileView};
use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::components::selection::Selection;
use crate::components::stack::{PileKind, StackType};
use crate::config::GameConfig;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::{GameError, GameResult};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::create_shuffled_deck;
use crate::logic::{board, integrity, rules};
use crate::systems::{
    DealInitialCardsSystem, MoveCardSystem, StockAction, StockSystem, WinConditionSystem,
};

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// 描画側 (UI) はこの GameApp のメソッドだけを呼べばゲームが遊べるよ！
pub struct GameApp {
    world: World,
    rng: StdRng,
    // 今持ち上げてるカード。Holding の間は他の操作はできない。
    selection: Selection,
    config: GameConfig,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    stock_system: StockSystem,
    win_system: WinConditionSystem,
}

impl GameApp {
    /// 設定を受け取って、最初のゲームを配った状態の GameApp を作る。
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut app = Self {
            world: World::new(),
            rng,
            selection: Selection::Idle,
            config,
            deal_system: DealInitialCardsSystem,
            move_system: MoveCardSystem,
            stock_system: StockSystem,
            win_system: WinConditionSystem::new(),
        };
        app.restart()?;
        Ok(app)
    }

    /// デフォルト設定 (シード無し) で新しいゲームを始める。
    pub fn new_game() -> GameResult<Self> {
        Self::new(GameConfig::default())
    }

    /// 盤面を全部捨てて、新しくシャッフルしたデッキで配り直す 🔄
    ///
    /// 持ち上げ中のカードがあっても、それごと捨てる。
    pub fn restart(&mut self) -> GameResult<()> {
        if !self.selection.is_idle() {
            debug!("Dropping held selection on restart");
        }
        self.selection = Selection::Idle;

        let mut world = World::new();
        board::create_board(&mut world);
        let deck = create_shuffled_deck(&mut self.rng);
        self.deal_system.execute(&mut world, deck)?;
        self.world = world;

        info!("New game dealt.");
        Ok(())
    }

    // --- 持ち上げ → 置く/キャンセル ---

    /// カードを掴む。一緒に持ち上がるカード列を返す。
    ///
    /// 掴めないカード (裏向き、山札の中、捨て札の途中とか) なら空の Vec で、
    /// 何も持ち上げてない状態のまま。
    pub fn pick_up(&mut self, card: Entity) -> GameResult<Vec<Entity>> {
        self.ensure_idle()?;
        let run = rules::liftable_run(&self.world, card)?;
        if run.is_empty() {
            debug!("{:?} cannot be picked up", card);
            return Ok(run);
        }
        let source = board::stack_of(&self.world, card)?.stack_type;
        debug!("Picked up {:?} from {:?}", run, source);
        self.selection = Selection::Holding { run: run.clone(), source };
        Ok(run)
    }

    /// 持ち上げてるカード列を `target` に置こうとする。
    ///
    /// 置けたら `true`、ルール上置けなかったら `false` (カードは元の場所のまま)。
    /// どちらの場合も持ち上げ状態は解除される。
    pub fn try_drop(&mut self, target: StackType) -> GameResult<bool> {
        let (run, source) = match mem::take(&mut self.selection) {
            Selection::Holding { run, source } => (run, source),
            Selection::Idle => {
                warn!("Drop onto {:?} without holding anything", target);
                return Err(GameError::NoSelection);
            }
        };
        // 知らないパイルはルール判定より先にエラーにする
        board::pile(&self.world, target)?;
        if target == source {
            debug!("Dropped back onto {:?}", source);
            return Ok(false);
        }
        if !rules::accepts_run_length(target.kind(), run.len())
            || !rules::is_move_valid(&self.world, run[0], target)
        {
            debug!("Illegal drop of {:?} onto {:?}", run, target);
            return Ok(false);
        }

        self.move_system.move_run(&mut self.world, &run, target)?;
        self.win_system.run(&mut self.world);
        Ok(true)
    }

    /// 持ち上げをやめる。盤面は何も変わらない。
    pub fn cancel(&mut self) {
        if let Selection::Holding { run, source } = mem::take(&mut self.selection) {
            debug!("Cancelled holding {:?} from {:?}", run, source);
        }
    }

    /// 掴んで置くのを1回で。
    pub fn move_card(&mut self, card: Entity, target: StackType) -> GameResult<bool> {
        if self.pick_up(card)?.is_empty() {
            return Ok(false);
        }
        self.try_drop(target)
    }

    /// ダブルクリック相当: 1枚だけ持ち上がるカードなら、置ける組札に自動で移す。
    ///
    /// 動かした先の組札を返す。動かせなければ `None`。
    pub fn auto_move(&mut self, card: Entity) -> GameResult<Option<StackType>> {
        self.ensure_idle()?;
        if rules::liftable_run(&self.world, card)?.len() != 1 {
            return Ok(None);
        }
        let target = match find_automatic_foundation_move(&self.world, card) {
            Some(target) => target,
            None => return Ok(None),
        };
        if self.move_card(card, target)? {
            Ok(Some(target))
        } else {
            Ok(None)
        }
    }

    /// カードがクリックされたとき。山札のカードなら山札をめくる。
    ///
    /// 山札以外のカードは何もせず `None`。
    pub fn click_card(&mut self, card: Entity) -> GameResult<Option<StockAction>> {
        self.ensure_idle()?;
        match board::stack_of(&self.world, card)?.stack_type.kind() {
            PileKind::Stock => self.activate_stock().map(Some),
            _ => Ok(None),
        }
    }

    /// 山札をクリック: めくれるなら1枚めくる、空なら捨て札を戻す。
    pub fn activate_stock(&mut self) -> GameResult<StockAction> {
        self.ensure_idle()?;
        self.stock_system.activate_stock(&mut self.world)
    }

    // --- 状態の読み取り ---

    pub fn is_won(&self) -> bool {
        self.state() == GameStatus::Won
    }

    pub fn state(&self) -> GameStatus {
        board::game_status(&self.world)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pile(&self, stack: StackType) -> GameResult<PileView> {
        state_getter::pile_view(&self.world, stack)
    }

    /// スートとランクからカードのエンティティを探す。
    pub fn find_card(&self, suit: Suit, rank: Rank) -> Option<Entity> {
        self.world
            .get_all_entities_with_component::<Card>()
            .into_iter()
            .find(|&entity| {
                board::card(&self.world, entity).map_or(false, |c| c.suit == suit && c.rank == rank)
            })
    }

    pub fn card(&self, card: Entity) -> GameResult<&Card> {
        board::card(&self.world, card)
    }

    /// カードが今いるパイル。
    pub fn pile_of(&self, card: Entity) -> GameResult<StackType> {
        Ok(board::stack_of(&self.world, card)?.stack_type)
    }

    pub fn verify_integrity(&self) -> GameResult<()> {
        integrity::verify_integrity(&self.world)
    }

    pub fn snapshot(&self) -> GameResult<GameSnapshot> {
        state_getter::snapshot(&self.world, &self.selection)
    }

    pub fn snapshot_json(&self) -> GameResult<String> {
        state_getter::snapshot_json(&self.world, &self.selection)
    }

    fn ensure_idle(&self) -> GameResult<()> {
        if self.selection.is_idle() {
            Ok(())
        } else {
            warn!("Command rejected while holding {:?}", self.selection.run());
            Err(GameError::SelectionActive)
        }
    }
}

#[cfg(test)]
#[path = "game_app_tests.rs"]
mod game_app_tests;
