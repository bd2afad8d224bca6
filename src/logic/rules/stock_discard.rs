//! 山札 (Stock) と捨て札 (Discard) に関するルールを定義するよ。

/// 山札から捨て札へカードをめくれるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、捨て札を山札に戻せるかチェックする。
pub fn can_recycle_stock(stock_is_empty: bool, discard_is_empty: bool) -> bool {
    stock_is_empty && !discard_is_empty
}
