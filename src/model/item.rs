use std::collections::BTreeSet;

use super::*;

// 台数項目の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Base,         // 底台
    DealerStreak, // 莊家, 連莊
    WinMethod,    // 自摸, 門清
    Pattern,      // 牌型
    Flower,       // 花牌
    Special,      // 特殊な和了時機
}

// 台数項目の定義 (カタログは静的データ)
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: Tai,
    pub category: Category,
    pub overrides_to_cap: bool, // 成立した時点で封頂台数になる役
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.name, self.weight)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.weight)
    }
}

// 選択された台数項目のid集合
// カタログにないidは計算時に無視される
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    items: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains(id)
    }

    pub fn insert(&mut self, id: &str) -> bool {
        self.items.insert(id.to_string())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.items.remove(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
