use crate::model::{Category, Item, Selection};

use Category::*;

pub const BASE: &str = "base";
pub const FLOWER: &str = "flower";
pub const SELF_DRAW: &str = "self_draw";
pub const MEN_QING: &str = "men_qing";
pub const MEN_QING_SELF_DRAW: &str = "men_qing_self_draw";

// 連莊は高い方から判定する
pub const STREAK_ORDER: [&str; 4] = ["lian_zhuang_3", "lian_zhuang_2", "lian_zhuang_1", "is_dealer"];

macro_rules! item {
    ($id: expr, $n: expr, $w: expr, $c: expr) => {
        item!($id, $n, $w, $c, false)
    };
    ($id: expr, $n: expr, $w: expr, $c: expr, $o: expr) => {
        Item {
            id: $id,
            name: $n,
            weight: $w,
            category: $c,
            overrides_to_cap: $o,
        }
    };
}

pub static ITEM_LIST: &[Item] = &[
    item!(BASE, "底台", 1, Base),
    // 莊家
    item!("is_dealer", "莊家", 1, DealerStreak),
    item!("lian_zhuang_1", "連1莊", 3, DealerStreak),
    item!("lian_zhuang_2", "連2莊", 5, DealerStreak),
    item!("lian_zhuang_3", "連3莊", 7, DealerStreak),
    // 和了方法
    item!(SELF_DRAW, "自摸", 1, WinMethod),
    item!(MEN_QING, "門清", 1, WinMethod),
    item!(MEN_QING_SELF_DRAW, "門清自摸", 3, WinMethod),
    // 牌型
    item!("qing_yi_se", "清一色", 8, Pattern),
    item!("hun_yi_se", "混一色", 4, Pattern),
    item!("dui_dui_hu", "對對胡", 4, Pattern),
    item!("qi_dui_zi", "七對子", 4, Pattern),
    item!("da_san_yuan", "大三元", 8, Pattern),
    item!("xiao_san_yuan", "小三元", 4, Pattern),
    item!("zi_yi_se", "字一色", 16, Pattern),
    // 花牌 (1枚1台)
    item!(FLOWER, "花牌", 1, Flower),
    // 特殊な和了時機
    item!("tian_hu", "天胡", 16, Special, true),
    item!("di_hu", "地胡", 16, Special, true),
    item!("ren_hu", "人胡", 8, Special),
    item!("hai_di_lao_yue", "海底撈月", 1, Special),
    item!("he_di_lao_yu", "河底撈魚", 1, Special),
    item!("qiang_gang", "搶槓", 1, Special),
    item!("men_feng", "門風台", 1, Special),
    item!("du_ting", "獨聽", 1, Special),
    item!("bian_zhang", "邊張/坎張", 1, Special),
];

pub fn find_item(id: &str) -> Option<&'static Item> {
    ITEM_LIST.iter().find(|i| i.id == id)
}

pub fn items_in(category: Category) -> impl Iterator<Item = &'static Item> {
    ITEM_LIST.iter().filter(move |i| i.category == category)
}

impl Selection {
    // 項目の選択を切り替える
    // 門清自摸と門清/自摸, 連莊の各段階はそれぞれ排他
    pub fn toggle(&mut self, id: &str) {
        if self.remove(id) {
            return;
        }

        if id == MEN_QING_SELF_DRAW {
            self.remove(MEN_QING);
            self.remove(SELF_DRAW);
        } else if id == MEN_QING || id == SELF_DRAW {
            self.remove(MEN_QING_SELF_DRAW);
        } else if STREAK_ORDER.contains(&id) {
            for s in STREAK_ORDER {
                self.remove(s);
            }
        }
        self.insert(id);
    }
}

#[test]
fn test_item_list() {
    for (i, a) in ITEM_LIST.iter().enumerate() {
        assert!(a.weight > 0, "{:?}", a);
        for b in &ITEM_LIST[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
    for id in STREAK_ORDER {
        assert_eq!(find_item(id).unwrap().category, DealerStreak);
    }
    // 連莊は降順に並んでいること
    let w: Vec<crate::model::Tai> = STREAK_ORDER.iter().map(|id| find_item(id).unwrap().weight).collect();
    assert!(w.windows(2).all(|p| p[0] > p[1]));
    assert_eq!(find_item(MEN_QING_SELF_DRAW).unwrap().weight, 3);
    assert!(find_item("unknown").is_none());
    assert_eq!(items_in(Pattern).count(), 7);
}

#[test]
fn test_toggle() {
    let mut sel = Selection::new();
    sel.toggle(SELF_DRAW);
    sel.toggle(MEN_QING);
    assert_eq!(sel.len(), 2);

    sel.toggle(MEN_QING_SELF_DRAW);
    assert!(sel.contains(MEN_QING_SELF_DRAW));
    assert_eq!(sel.len(), 1);

    sel.toggle(SELF_DRAW);
    assert!(!sel.contains(MEN_QING_SELF_DRAW));

    sel.toggle("lian_zhuang_1");
    sel.toggle("lian_zhuang_3");
    assert!(!sel.contains("lian_zhuang_1"));
    assert!(sel.contains("lian_zhuang_3"));

    sel.toggle("lian_zhuang_3");
    assert!(!sel.contains("lian_zhuang_3"));
    assert_eq!(sel.iter().collect::<Vec<_>>(), vec![SELF_DRAW]);
}
