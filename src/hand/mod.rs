// 南昌麻将の支払い表と台湾麻将の台数計算を行うモジュール
mod item;
mod payout;
mod tai;

pub use self::{
    item::{find_item, items_in, ITEM_LIST, STREAK_ORDER},
    payout::{apply_bonus, available_patterns, available_win_events, compute_base, settle},
    tai::{compute_total, compute_total_with_rule},
};
