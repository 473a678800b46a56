use super::*;

// 台湾麻将の台数計算結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub total_units: Tai,                    // 封頂後の台数
    pub raw_units: Tai,                      // 封頂前の台数
    pub breakdown: Vec<(&'static Item, u32)>, // 加算した項目と枚数 (加算順)
    pub is_capped: bool,
}

impl ScoreResult {
    pub fn per_player(&self, tai_per_unit: Point) -> Point {
        self.total_units.saturating_mul(tai_per_unit)
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw_units > self.total_units {
            write!(
                f,
                "total {} tai, capped at {} tai",
                self.raw_units, self.total_units
            )
        } else {
            write!(f, "total {} tai", self.total_units)
        }
    }
}

// 卓ごとのルール設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaiRule {
    pub cap: Tai,
    pub tai_per_unit: Point,
}

impl Default for TaiRule {
    fn default() -> Self {
        Self {
            cap: DEFAULT_CAP,
            tai_per_unit: DEFAULT_TAI_PER_UNIT,
        }
    }
}

#[test]
fn test_tai_rule_default() {
    let rule: TaiRule = serde_json::from_str(r#"{"tai_per_unit": 50}"#).unwrap();
    assert_eq!(rule.cap, 16);
    assert_eq!(rule.tai_per_unit, 50);
}
