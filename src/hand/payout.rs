use std::collections::HashMap;
use std::sync::OnceLock;

use crate::model::*;
use crate::model::{Pattern::*, Role::*, WinEvent::*};

macro_rules! payout {
    ($r: expr, $e: expr, $j: expr, $p: expr, $d: expr, $n: expr, $x: expr) => {
        (
            Situation {
                role: $r,
                win_event: $e,
                has_bonus_tile: $j,
                pattern: $p,
            },
            PayoutResult {
                dealer_pays: $d,
                non_dealer_pays: $n,
                discard_pays: $x,
                has_discard: !matches!($e, SelfDraw),
            },
        )
    };
}

// (庄家の支払い, 闲家の支払い, 放炮者の支払い)
// 庄家放炮の場合は放炮者が庄家なので放炮分はdealer_paysに入る
static PAYOUT_LIST: &[(Situation, PayoutResult)] = &[
    // 庄家 - 自摸 - 有精
    payout!(Dealer, SelfDraw, true, Plain, 0, 4, 0),
    payout!(Dealer, SelfDraw, true, BonusTileWait, 0, 8, 0),
    payout!(Dealer, SelfDraw, true, ReplacementTileWin, 0, 8, 0),
    payout!(Dealer, SelfDraw, true, SevenPairs, 0, 8, 0),
    payout!(Dealer, SelfDraw, true, ThirteenScattered, 0, 8, 0),
    payout!(Dealer, SelfDraw, true, SevenHonorsThirteenScattered, 0, 16, 0),
    // 庄家 - 自摸 - 无精
    payout!(Dealer, SelfDraw, false, Plain, 0, 13, 0),
    payout!(Dealer, SelfDraw, false, ReplacementTileWin, 0, 21, 0),
    payout!(Dealer, SelfDraw, false, SevenPairs, 0, 21, 0),
    payout!(Dealer, SelfDraw, false, ThirteenScattered, 0, 21, 0),
    payout!(Dealer, SelfDraw, false, SevenHonorsThirteenScattered, 0, 37, 0),
    // 庄家 - 闲家放炮 - 有精
    payout!(Dealer, NonDealerDiscard, true, Plain, 0, 2, 4),
    payout!(Dealer, NonDealerDiscard, true, SevenPairs, 0, 4, 8),
    payout!(Dealer, NonDealerDiscard, true, ThirteenScattered, 0, 4, 8),
    payout!(Dealer, NonDealerDiscard, true, SevenHonorsThirteenScattered, 0, 8, 16),
    // 庄家 - 闲家放炮 - 无精
    payout!(Dealer, NonDealerDiscard, false, Plain, 0, 4, 13),
    payout!(Dealer, NonDealerDiscard, false, SevenPairs, 0, 8, 21),
    payout!(Dealer, NonDealerDiscard, false, ThirteenScattered, 0, 8, 21),
    payout!(Dealer, NonDealerDiscard, false, SevenHonorsThirteenScattered, 0, 16, 37),
    // 闲家 - 自摸 - 有精
    payout!(NonDealer, SelfDraw, true, Plain, 4, 2, 0),
    payout!(NonDealer, SelfDraw, true, BonusTileWait, 8, 4, 0),
    payout!(NonDealer, SelfDraw, true, ReplacementTileWin, 8, 4, 0),
    payout!(NonDealer, SelfDraw, true, SevenPairs, 8, 4, 0),
    payout!(NonDealer, SelfDraw, true, ThirteenScattered, 8, 4, 0),
    payout!(NonDealer, SelfDraw, true, SevenHonorsThirteenScattered, 16, 8, 0),
    // 闲家 - 自摸 - 无精
    payout!(NonDealer, SelfDraw, false, Plain, 13, 9, 0),
    payout!(NonDealer, SelfDraw, false, ReplacementTileWin, 21, 13, 0),
    payout!(NonDealer, SelfDraw, false, SevenPairs, 21, 13, 0),
    payout!(NonDealer, SelfDraw, false, ThirteenScattered, 21, 13, 0),
    payout!(NonDealer, SelfDraw, false, SevenHonorsThirteenScattered, 37, 21, 0),
    // 闲家 - 庄家放炮 - 有精
    payout!(NonDealer, DealerDiscard, true, Plain, 4, 1, 0),
    payout!(NonDealer, DealerDiscard, true, SevenPairs, 8, 2, 0),
    payout!(NonDealer, DealerDiscard, true, ThirteenScattered, 8, 2, 0),
    payout!(NonDealer, DealerDiscard, true, SevenHonorsThirteenScattered, 16, 4, 0),
    // 闲家 - 庄家放炮 - 无精
    payout!(NonDealer, DealerDiscard, false, Plain, 13, 2, 0),
    payout!(NonDealer, DealerDiscard, false, SevenPairs, 21, 4, 0),
    payout!(NonDealer, DealerDiscard, false, ThirteenScattered, 21, 4, 0),
    payout!(NonDealer, DealerDiscard, false, SevenHonorsThirteenScattered, 37, 8, 0),
    // 闲家 - 闲家放炮 - 有精
    payout!(NonDealer, NonDealerDiscard, true, Plain, 2, 1, 2),
    payout!(NonDealer, NonDealerDiscard, true, SevenPairs, 4, 2, 4),
    payout!(NonDealer, NonDealerDiscard, true, ThirteenScattered, 4, 2, 4),
    payout!(NonDealer, NonDealerDiscard, true, SevenHonorsThirteenScattered, 8, 4, 8),
    // 闲家 - 闲家放炮 - 无精
    payout!(NonDealer, NonDealerDiscard, false, Plain, 4, 2, 9),
    payout!(NonDealer, NonDealerDiscard, false, SevenPairs, 8, 4, 13),
    payout!(NonDealer, NonDealerDiscard, false, ThirteenScattered, 8, 4, 13),
    payout!(NonDealer, NonDealerDiscard, false, SevenHonorsThirteenScattered, 16, 8, 21),
];

fn payout_table() -> &'static HashMap<Situation, PayoutResult> {
    static TABLE: OnceLock<HashMap<Situation, PayoutResult>> = OnceLock::new();
    TABLE.get_or_init(|| PAYOUT_LIST.iter().cloned().collect())
}

// 基本の支払いを返却. 点数表にない組み合わせはNone
pub fn compute_base(situation: &Situation) -> Option<PayoutResult> {
    payout_table().get(situation).copied()
}

// 精の加点. 支払いが発生している項目にのみ加算する
pub fn apply_bonus(result: &PayoutResult, bonus: Point) -> PayoutResult {
    if bonus == 0 {
        return *result;
    }

    let add = |p: Point| if p > 0 { p.saturating_add(bonus) } else { 0 };
    PayoutResult {
        dealer_pays: add(result.dealer_pays),
        non_dealer_pays: add(result.non_dealer_pays),
        discard_pays: add(result.discard_pays),
        has_discard: result.has_discard,
    }
}

// 基本点に精の加点を適用した最終的な支払いを返却
// 精の加点は有精の場合のみ
pub fn settle(situation: &Situation, bonus: BonusCount) -> Option<PayoutResult> {
    let base = compute_base(situation)?;
    Some(if situation.has_bonus_tile {
        apply_bonus(&base, bonus.bonus())
    } else {
        base
    })
}

pub fn available_win_events(role: Role) -> &'static [WinEvent] {
    match role {
        Dealer => &[SelfDraw, NonDealerDiscard],
        NonDealer => &[SelfDraw, DealerDiscard, NonDealerDiscard],
    }
}

// 精吊は有精の自摸のみ, 杠开は自摸のみ
pub fn available_patterns(win_event: WinEvent, has_bonus_tile: bool) -> Vec<Pattern> {
    Pattern::ALL
        .iter()
        .copied()
        .filter(|p| match p {
            BonusTileWait => win_event == SelfDraw && has_bonus_tile,
            ReplacementTileWin => win_event == SelfDraw,
            _ => true,
        })
        .collect()
}

#[test]
fn test_compute_base() {
    let s = Situation::new(Dealer, SelfDraw, true, Plain);
    let r = compute_base(&s).unwrap();
    assert_eq!(r, PayoutResult::new(0, 4, 0, false));

    let s = Situation::new(NonDealer, NonDealerDiscard, false, SevenHonorsThirteenScattered);
    let r = compute_base(&s).unwrap();
    assert_eq!(r, PayoutResult::new(16, 8, 21, true));

    let s = Situation::new(NonDealer, DealerDiscard, false, Plain);
    let r = compute_base(&s).unwrap();
    assert_eq!(r, PayoutResult::new(13, 2, 0, true));
}

#[test]
fn test_compute_base_not_found() {
    // 精吊は有精が前提
    assert_eq!(None, compute_base(&Situation::new(Dealer, SelfDraw, false, BonusTileWait)));
    // 杠开は自摸のみ
    let s = Situation::new(NonDealer, NonDealerDiscard, true, ReplacementTileWin);
    assert_eq!(None, compute_base(&s));
    // 庄家は自分の放炮で和了できない
    assert_eq!(None, compute_base(&Situation::new(Dealer, DealerDiscard, true, Plain)));
}

#[test]
fn test_table_completeness() {
    let mut count = 0;
    for role in [Dealer, NonDealer] {
        for &event in available_win_events(role) {
            for has_bonus_tile in [true, false] {
                for pattern in available_patterns(event, has_bonus_tile) {
                    let s = Situation::new(role, event, has_bonus_tile, pattern);
                    let r = compute_base(&s).unwrap_or_else(|| panic!("missing: {}", s));
                    assert_eq!(r.has_discard, event != SelfDraw, "{}", s);
                    count += 1;
                }
            }
        }
    }
    assert_eq!(count, PAYOUT_LIST.len());
    assert_eq!(payout_table().len(), PAYOUT_LIST.len());
}

#[test]
fn test_apply_bonus() {
    let r = PayoutResult::new(0, 4, 0, false);
    assert_eq!(apply_bonus(&r, 0), r);
    assert_eq!(apply_bonus(&r, 3), PayoutResult::new(0, 7, 0, false));

    let r = PayoutResult::new(2, 1, 2, true);
    assert_eq!(apply_bonus(&r, 5), PayoutResult::new(7, 6, 7, true));
    assert_eq!(
        apply_bonus(&r, Point::MAX),
        PayoutResult::new(Point::MAX, Point::MAX, Point::MAX, true)
    );
}

#[test]
fn test_apply_bonus_monotonic() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..1000 {
        let r = PayoutResult::new(
            rng.gen_range(0..3u32) * rng.gen_range(0..40u32),
            rng.gen_range(0..3u32) * rng.gen_range(0..40u32),
            rng.gen_range(0..3u32) * rng.gen_range(0..40u32),
            rng.gen(),
        );
        let bonus = rng.gen_range(0..10);
        let b = apply_bonus(&r, bonus);
        for (before, after) in [
            (r.dealer_pays, b.dealer_pays),
            (r.non_dealer_pays, b.non_dealer_pays),
            (r.discard_pays, b.discard_pays),
        ] {
            assert!(after >= before);
            if before == 0 {
                assert_eq!(after, 0);
            } else {
                assert_eq!(after, before + bonus);
            }
        }
        assert_eq!(b.has_discard, r.has_discard);
        assert_eq!(apply_bonus(&r, bonus), b);
    }
}

#[test]
fn test_settle() {
    let bonus = BonusCount::new(1, 2).unwrap();

    let s = Situation::new(NonDealer, SelfDraw, true, Plain);
    assert_eq!(settle(&s, bonus), Some(PayoutResult::new(8, 6, 0, false)));

    // 无精なら加点しない
    let s = Situation::new(NonDealer, SelfDraw, false, Plain);
    assert_eq!(settle(&s, bonus), Some(PayoutResult::new(13, 9, 0, false)));

    let s = Situation::new(NonDealer, SelfDraw, false, BonusTileWait);
    assert_eq!(settle(&s, bonus), None);
}

#[test]
fn test_available_patterns() {
    assert_eq!(available_patterns(SelfDraw, true).len(), 6);
    let ps = available_patterns(SelfDraw, false);
    assert!(!ps.contains(&BonusTileWait));
    assert!(ps.contains(&ReplacementTileWin));
    let ps = available_patterns(DealerDiscard, true);
    assert_eq!(ps, vec![Plain, SevenPairs, ThirteenScattered, SevenHonorsThirteenScattered]);
}
