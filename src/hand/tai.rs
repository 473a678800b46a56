use crate::model::*;

use super::item::*;

struct TaiContext<'a> {
    selection: &'a Selection,
    flower_count: u32,
}

#[derive(Debug, Default)]
struct Tally {
    units: Tai,
    breakdown: Vec<(&'static Item, u32)>,
}

impl Tally {
    fn add(&mut self, item: &'static Item, count: u32) {
        self.units = self.units.saturating_add(item.weight.saturating_mul(count));
        self.breakdown.push((item, count));
    }

    fn add_id(&mut self, id: &str) {
        if let Some(item) = find_item(id) {
            self.add(item, 1);
        }
    }
}

type Rule = fn(&TaiContext<'_>, &mut Tally);

// 加算の順番が内訳の並び順になる
static RULES: &[Rule] = &[
    count_base,
    count_win_method,
    count_dealer_streak,
    count_patterns,
    count_specials,
    count_flowers,
];

// 台数を合計して封頂する
// 天胡, 地胡は他の項目に関係なくcap. カタログにないidは無視
pub fn compute_total(selection: &Selection, flower_count: u32, cap: Tai) -> ScoreResult {
    if let Some(item) = find_override(selection) {
        return ScoreResult {
            total_units: cap,
            raw_units: cap,
            breakdown: vec![(item, 1)],
            is_capped: true,
        };
    }

    let ctx = TaiContext {
        selection,
        flower_count,
    };
    let mut tally = Tally::default();
    for rule in RULES {
        rule(&ctx, &mut tally);
    }

    ScoreResult {
        total_units: tally.units.min(cap),
        raw_units: tally.units,
        breakdown: tally.breakdown,
        is_capped: tally.units > cap,
    }
}

pub fn compute_total_with_rule(
    selection: &Selection,
    flower_count: u32,
    rule: &TaiRule,
) -> ScoreResult {
    compute_total(selection, flower_count, rule.cap)
}

// 複数選択されている場合はカタログの定義順で最初のもの
fn find_override(selection: &Selection) -> Option<&'static Item> {
    ITEM_LIST
        .iter()
        .find(|i| i.overrides_to_cap && selection.contains(i.id))
}

fn count_base(_ctx: &TaiContext<'_>, tally: &mut Tally) {
    tally.add_id(BASE);
}

// 門清と自摸が揃った場合は門清自摸(3台)にまとめる
fn count_win_method(ctx: &TaiContext<'_>, tally: &mut Tally) {
    let sel = ctx.selection;
    if sel.contains(MEN_QING_SELF_DRAW) || (sel.contains(SELF_DRAW) && sel.contains(MEN_QING)) {
        tally.add_id(MEN_QING_SELF_DRAW);
        return;
    }
    for id in [SELF_DRAW, MEN_QING] {
        if sel.contains(id) {
            tally.add_id(id);
        }
    }
}

// 連莊は最も高いもののみ
fn count_dealer_streak(ctx: &TaiContext<'_>, tally: &mut Tally) {
    if let Some(id) = STREAK_ORDER.iter().find(|id| ctx.selection.contains(id)) {
        tally.add_id(id);
    }
}

fn count_patterns(ctx: &TaiContext<'_>, tally: &mut Tally) {
    for item in items_in(Category::Pattern) {
        if ctx.selection.contains(item.id) {
            tally.add(item, 1);
        }
    }
}

fn count_specials(ctx: &TaiContext<'_>, tally: &mut Tally) {
    for item in items_in(Category::Special) {
        if !item.overrides_to_cap && ctx.selection.contains(item.id) {
            tally.add(item, 1);
        }
    }
}

fn count_flowers(ctx: &TaiContext<'_>, tally: &mut Tally) {
    if ctx.flower_count > 0 {
        if let Some(item) = find_item(FLOWER) {
            tally.add(item, ctx.flower_count);
        }
    }
}

#[cfg(test)]
fn ids(result: &ScoreResult) -> Vec<(&'static str, u32)> {
    result.breakdown.iter().map(|(i, c)| (i.id, *c)).collect()
}

#[test]
fn test_base_only() {
    let r = compute_total(&Selection::new(), 0, DEFAULT_CAP);
    assert_eq!(r.total_units, 1);
    assert!(!r.is_capped);
    assert_eq!(ids(&r), vec![(BASE, 1)]);
}

#[test]
fn test_override() {
    let sel: Selection = ["qing_yi_se", "tian_hu", "self_draw"].iter().collect();
    let r = compute_total(&sel, 3, DEFAULT_CAP);
    assert_eq!(r.total_units, 16);
    assert!(r.is_capped);
    assert_eq!(ids(&r), vec![("tian_hu", 1)]);

    // 天胡と地胡が両方ある場合は定義順で天胡
    let sel: Selection = ["di_hu", "tian_hu"].iter().collect();
    let r = compute_total(&sel, 0, 20);
    assert_eq!(r.total_units, 20);
    assert_eq!(ids(&r), vec![("tian_hu", 1)]);
}

#[test]
fn test_men_qing_self_draw_merge() {
    let both: Selection = [SELF_DRAW, MEN_QING].iter().collect();
    let combined: Selection = [MEN_QING_SELF_DRAW].iter().collect();
    let all: Selection = [SELF_DRAW, MEN_QING, MEN_QING_SELF_DRAW].iter().collect();
    let r1 = compute_total(&both, 0, DEFAULT_CAP);
    let r2 = compute_total(&combined, 0, DEFAULT_CAP);
    let r3 = compute_total(&all, 0, DEFAULT_CAP);
    assert_eq!(r1, r2);
    assert_eq!(r1, r3);
    assert_eq!(r1.total_units, 4);
    assert_eq!(ids(&r1), vec![(BASE, 1), (MEN_QING_SELF_DRAW, 1)]);

    let single: Selection = [MEN_QING].iter().collect();
    let r = compute_total(&single, 0, DEFAULT_CAP);
    assert_eq!(ids(&r), vec![(BASE, 1), (MEN_QING, 1)]);
    assert_eq!(r.total_units, 2);
}

#[test]
fn test_dealer_streak() {
    let sel: Selection = ["is_dealer", "lian_zhuang_1", "lian_zhuang_2"].iter().collect();
    let r = compute_total(&sel, 0, DEFAULT_CAP);
    assert_eq!(r.total_units, 1 + 5);
    assert_eq!(ids(&r), vec![(BASE, 1), ("lian_zhuang_2", 1)]);
}

#[test]
fn test_breakdown_order() {
    let sel: Selection = [
        "du_ting",
        "hun_yi_se",
        "lian_zhuang_1",
        "self_draw",
        "xiao_san_yuan",
        "qiang_gang",
    ]
    .iter()
    .collect();
    let r = compute_total(&sel, 2, 32);
    assert_eq!(
        ids(&r),
        vec![
            (BASE, 1),
            (SELF_DRAW, 1),
            ("lian_zhuang_1", 1),
            ("hun_yi_se", 1),
            ("xiao_san_yuan", 1),
            ("qiang_gang", 1),
            ("du_ting", 1),
            (FLOWER, 2),
        ]
    );
    assert_eq!(r.total_units, 1 + 1 + 3 + 4 + 4 + 1 + 1 + 2);
}

#[test]
fn test_cap() {
    // 1 + 8 + 4 + 3 = 16
    let sel: Selection = ["qing_yi_se", "dui_dui_hu", MEN_QING_SELF_DRAW].iter().collect();
    let r = compute_total(&sel, 0, DEFAULT_CAP);
    assert_eq!(r.total_units, 16);
    assert!(!r.is_capped);

    let r = compute_total(&sel, 1, DEFAULT_CAP);
    assert_eq!(r.raw_units, 17);
    assert_eq!(r.total_units, 16);
    assert!(r.is_capped);
    assert_eq!(r.to_string(), "total 17 tai, capped at 16 tai");
    assert_eq!(r.per_player(10), 160);
}

#[test]
fn test_flower_count_saturates() {
    let sel: Selection = ["lian_zhuang_3"].iter().collect();
    let r = compute_total(&sel, u32::MAX - 3, DEFAULT_CAP);
    assert_eq!(r.total_units, 16);
    assert_eq!(r.raw_units, Tai::MAX);
    assert!(r.is_capped);

    let r = compute_total(&Selection::new(), u32::MAX, DEFAULT_CAP);
    assert_eq!(r.total_units, 16);
    assert!(r.is_capped);
    assert_eq!(r.per_player(u32::MAX), Point::MAX);
}

#[test]
fn test_unknown_id() {
    let sel: Selection = ["hun_yi_se", "no_such_item", BASE, FLOWER].iter().collect();
    let r = compute_total(&sel, 0, DEFAULT_CAP);
    assert_eq!(ids(&r), vec![(BASE, 1), ("hun_yi_se", 1)]);
    assert_eq!(r.total_units, 5);
}

#[test]
fn test_compute_total_random() {
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let n = rng.gen_range(0..8);
        let sel: Selection = ITEM_LIST.choose_multiple(&mut rng, n).map(|i| i.id).collect();
        let flowers = rng.gen_range(0..9);
        let cap = rng.gen_range(8..24);

        let r = compute_total(&sel, flowers, cap);
        assert_eq!(r, compute_total(&sel, flowers, cap));
        assert!(r.total_units <= cap);

        if sel.iter().any(|id| find_item(id).map_or(false, |i| i.overrides_to_cap)) {
            assert_eq!(r.total_units, cap);
            assert!(r.is_capped);
            assert_eq!(r.breakdown.len(), 1);
            continue;
        }

        let sum: Tai = r.breakdown.iter().map(|(i, c)| i.weight * c).sum();
        assert_eq!(sum, r.raw_units);
        assert_eq!(r.is_capped, sum > cap);
        let streaks = r
            .breakdown
            .iter()
            .filter(|(i, _)| i.category == Category::DealerStreak)
            .count();
        assert!(streaks <= 1);
    }
}
