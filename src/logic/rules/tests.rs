// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::{PileKind, StackType};
use crate::error::GameError;
use crate::logic::test_support::{add_card_for_test, empty_board, fill_foundation};

fn face_up(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank, is_face_up: true }
}

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
}

#[test]
fn test_foundation_scenario() {
    let ace_1 = face_up(Suit::Heart, Rank::Ace);
    let two_1 = face_up(Suit::Heart, Rank::Two);
    let two_3 = face_up(Suit::Spade, Rank::Two);

    // 空の組札: A だけ置ける
    assert!(is_legal_move(&ace_1, PileKind::Foundation, None), "空の組札に A は置けるはず");
    assert!(!is_legal_move(&two_1, PileKind::Foundation, None), "A がまだ無いのに 2 は置けないはず");

    // A を置いた後
    assert!(is_legal_move(&two_1, PileKind::Foundation, Some(&ace_1)), "同じスートの 2 は置けるはず");
    assert!(!is_legal_move(&two_3, PileKind::Foundation, Some(&ace_1)), "違うスートの 2 は置けないはず");

    // ランク飛ばしは駄目
    let three_1 = face_up(Suit::Heart, Rank::Three);
    assert!(!is_legal_move(&three_1, PileKind::Foundation, Some(&ace_1)));
}

#[test]
fn test_empty_tableau_scenario() {
    let king_3 = face_up(Suit::Spade, Rank::King);
    let queen_3 = face_up(Suit::Spade, Rank::Queen);
    assert!(is_legal_move(&king_3, PileKind::Tableau, None), "空の場札に K は置けるはず");
    assert!(!is_legal_move(&queen_3, PileKind::Tableau, None), "空の場札に Q は置けないはず");
}

#[test]
fn test_tableau_sequence_scenario() {
    let queen_1 = face_up(Suit::Heart, Rank::Queen);
    let jack_3 = face_up(Suit::Spade, Rank::Jack);
    let jack_1 = face_up(Suit::Heart, Rank::Jack);
    let ten_4 = face_up(Suit::Club, Rank::Ten);

    assert!(is_legal_move(&jack_3, PileKind::Tableau, Some(&queen_1)), "Q❤️ に黒の J は置けるはず");
    assert!(!is_legal_move(&jack_1, PileKind::Tableau, Some(&queen_1)), "同色は置けないはず");
    assert!(!is_legal_move(&ten_4, PileKind::Tableau, Some(&queen_1)), "ランク違いは置けないはず");

    // 上位ランクを重ねるのも駄目
    let king_4 = face_up(Suit::Club, Rank::King);
    assert!(!is_legal_move(&king_4, PileKind::Tableau, Some(&queen_1)));
}

#[test]
fn test_non_target_kinds_never_accept() {
    let ace = face_up(Suit::Club, Rank::Ace);
    let king = face_up(Suit::Club, Rank::King);
    for kind in [PileKind::Stock, PileKind::Discard, PileKind::Hidden] {
        assert!(!is_legal_move(&ace, kind, None), "{:?} は移動先にならないはず", kind);
        assert!(!is_legal_move(&king, kind, None), "{:?} は移動先にならないはず", kind);
    }
}

#[test]
fn test_run_length_per_destination() {
    assert!(accepts_run_length(PileKind::Foundation, 1));
    assert!(!accepts_run_length(PileKind::Foundation, 2), "組札に列ごとは置けないはず");
    assert!(accepts_run_length(PileKind::Tableau, 1));
    assert!(accepts_run_length(PileKind::Tableau, 5), "場札には列ごと置けるはず");
}

#[test]
fn test_stock_discard_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");

    assert!(!can_recycle_stock(false, false), "ストックがある場合は戻せないはず");
    assert!(!can_recycle_stock(false, true), "ストックがある場合は戻せないはず");
    assert!(can_recycle_stock(true, false), "ストックが空で捨て札があれば戻せるはず");
    assert!(!can_recycle_stock(true, true), "どっちも空なら戻せないはず");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(&[13, 13, 13, 13]), "全部13枚ならクリア！🏆");
    assert!(!check_win_condition(&[13, 13, 13, 12]), "51枚ではクリアじゃない");
    assert!(!check_win_condition(&[0, 0, 0, 0]));
    assert!(!check_win_condition(&[13, 13, 13]), "組札が足りないのはクリアじゃない");
    assert!(!check_win_condition(&[]));
}

// --- World を使うテスト ---

#[test]
fn test_is_move_valid_world() {
    let mut world = empty_board();
    let king = add_card_for_test(&mut world, Suit::Spade, Rank::King, true, StackType::Discard);
    let _queen_hearts = add_card_for_test(&mut world, Suit::Heart, Rank::Queen, true, StackType::Tableau(2));
    let jack_spades = add_card_for_test(&mut world, Suit::Spade, Rank::Jack, true, StackType::Tableau(4));
    let ace_clubs = add_card_for_test(&mut world, Suit::Club, Rank::Ace, true, StackType::Tableau(5));

    assert!(is_move_valid(&world, king, StackType::Tableau(0)));
    assert!(!is_move_valid(&world, king, StackType::Tableau(2)));
    assert!(is_move_valid(&world, jack_spades, StackType::Tableau(2)));
    assert!(is_move_valid(&world, ace_clubs, StackType::Foundation(3)));
    assert!(!is_move_valid(&world, ace_clubs, StackType::Hidden));
    assert!(!is_move_valid(&world, ace_clubs, StackType::Discard));

    // 知らないパイル・カードは false
    assert!(!is_move_valid(&world, king, StackType::Tableau(9)));
    assert!(!is_move_valid(&world, crate::ecs::entity::Entity(999), StackType::Tableau(0)));
}

#[test]
fn test_is_move_valid_is_pure() {
    let mut world = empty_board();
    fill_foundation(&mut world, 1, Suit::Diamond, Rank::Four);
    let five = add_card_for_test(&mut world, Suit::Diamond, Rank::Five, true, StackType::Discard);

    let before: Vec<_> = crate::logic::board::all_stacks()
        .into_iter()
        .map(|s| crate::logic::board::pile(&world, s).expect("pile").clone())
        .collect();
    for _ in 0..5 {
        assert!(is_move_valid(&world, five, StackType::Foundation(1)));
        assert!(!is_move_valid(&world, five, StackType::Foundation(0)));
    }
    let after: Vec<_> = crate::logic::board::all_stacks()
        .into_iter()
        .map(|s| crate::logic::board::pile(&world, s).expect("pile").clone())
        .collect();
    assert_eq!(before, after, "判定で盤面が変わっちゃった！");
    assert!(crate::logic::board::card(&world, five).expect("card").is_face_up);
}

#[test]
fn test_liftable_run() {
    let mut world = empty_board();
    let hidden_low = add_card_for_test(&mut world, Suit::Club, Rank::Two, false, StackType::Tableau(0));
    let nine = add_card_for_test(&mut world, Suit::Heart, Rank::Nine, true, StackType::Tableau(0));
    let eight = add_card_for_test(&mut world, Suit::Spade, Rank::Eight, true, StackType::Tableau(0));
    let seven = add_card_for_test(&mut world, Suit::Diamond, Rank::Seven, true, StackType::Tableau(0));

    assert_eq!(liftable_run(&world, nine).expect("lift"), vec![nine, eight, seven]);
    assert_eq!(liftable_run(&world, eight).expect("lift"), vec![eight, seven]);
    assert_eq!(liftable_run(&world, seven).expect("lift"), vec![seven]);
    assert!(liftable_run(&world, hidden_low).expect("lift").is_empty(), "裏向きは持てない");

    let d1 = add_card_for_test(&mut world, Suit::Spade, Rank::Four, true, StackType::Discard);
    let d2 = add_card_for_test(&mut world, Suit::Heart, Rank::Jack, true, StackType::Discard);
    assert!(liftable_run(&world, d1).expect("lift").is_empty(), "捨て札は一番上だけ");
    assert_eq!(liftable_run(&world, d2).expect("lift"), vec![d2]);

    let stock = add_card_for_test(&mut world, Suit::Spade, Rank::Five, false, StackType::Stock);
    assert!(liftable_run(&world, stock).expect("lift").is_empty());

    let unknown = world.create_entity();
    assert_eq!(liftable_run(&world, unknown).unwrap_err(), GameError::UnknownCard(unknown));
}

#[test]
fn test_validate_run() {
    let mut world = empty_board();
    let down = add_card_for_test(&mut world, Suit::Club, Rank::Ten, false, StackType::Tableau(1));
    let nine = add_card_for_test(&mut world, Suit::Heart, Rank::Nine, true, StackType::Tableau(1));
    let eight = add_card_for_test(&mut world, Suit::Spade, Rank::Eight, true, StackType::Tableau(1));

    assert_eq!(validate_run(&world, &[nine, eight]).expect("ok"), StackType::Tableau(1));
    assert_eq!(validate_run(&world, &[eight]).expect("ok"), StackType::Tableau(1));

    assert!(matches!(validate_run(&world, &[]), Err(GameError::InvalidRun(_))));
    assert!(matches!(validate_run(&world, &[nine]), Err(GameError::InvalidRun(_))), "末尾までじゃない");
    assert!(matches!(validate_run(&world, &[eight, nine]), Err(GameError::InvalidRun(_))), "順番が逆");
    assert!(matches!(validate_run(&world, &[down, nine, eight]), Err(GameError::InvalidRun(_))), "裏向き入り");

    let d1 = add_card_for_test(&mut world, Suit::Spade, Rank::Four, true, StackType::Discard);
    let d2 = add_card_for_test(&mut world, Suit::Heart, Rank::Three, true, StackType::Discard);
    assert!(matches!(validate_run(&world, &[d1, d2]), Err(GameError::InvalidRun(_))), "捨て札から2枚は駄目");
    assert_eq!(validate_run(&world, &[d2]).expect("ok"), StackType::Discard);
}
