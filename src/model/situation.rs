use std::str::FromStr;

use super::*;

// 和了者の立場
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dealer,    // 庄家
    NonDealer, // 闲家
}

// 和了の仕方
// DealerDiscardは和了者が闲家の場合のみ意味を持つ (呼び出し側で保証)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinEvent {
    SelfDraw,         // 自摸
    DealerDiscard,    // 庄家放炮
    NonDealerDiscard, // 闲家放炮
}

impl WinEvent {
    #[inline]
    pub fn is_discard(&self) -> bool {
        *self != WinEvent::SelfDraw
    }
}

// 牌型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Plain,                        // 平胡
    BonusTileWait,                // 精吊
    ReplacementTileWin,           // 杠开
    SevenPairs,                   // 七对
    ThirteenScattered,            // 十三烂
    SevenHonorsThirteenScattered, // 七星十三烂
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::Plain,
        Pattern::BonusTileWait,
        Pattern::ReplacementTileWin,
        Pattern::SevenPairs,
        Pattern::ThirteenScattered,
        Pattern::SevenHonorsThirteenScattered,
    ];
}

// 点数表の検索キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Situation {
    pub role: Role,
    pub win_event: WinEvent,
    pub has_bonus_tile: bool, // 有精
    pub pattern: Pattern,
}

impl Situation {
    pub fn new(role: Role, win_event: WinEvent, has_bonus_tile: bool, pattern: Pattern) -> Self {
        Self {
            role,
            win_event,
            has_bonus_tile,
            pattern,
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.role,
            self.win_event,
            if self.has_bonus_tile { "jing" } else { "no_jing" },
            self.pattern
        )
    }
}

// 手牌の精の枚数 (それぞれ0~3枚)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusCount {
    primary: u8,   // 正精
    secondary: u8, // 副精
}

impl BonusCount {
    pub fn new(primary: u8, secondary: u8) -> Result<Self, String> {
        if primary > BONUS_TILE_MAX || secondary > BONUS_TILE_MAX {
            return Err(format!(
                "bonus tile count out of range: {},{}",
                primary, secondary
            ));
        }
        Ok(Self { primary, secondary })
    }

    // 正精は2, 副精は1
    #[inline]
    pub fn bonus(&self) -> Point {
        self.primary as Point * 2 + self.secondary as Point
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "dealer" => Role::Dealer,
            "non_dealer" => Role::NonDealer,
            _ => return Err(format!("invalid role: {}", s)),
        })
    }
}

impl FromStr for WinEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "self_draw" => WinEvent::SelfDraw,
            "dealer_discard" => WinEvent::DealerDiscard,
            "non_dealer_discard" => WinEvent::NonDealerDiscard,
            _ => return Err(format!("invalid win event: {}", s)),
        })
    }
}

impl FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "plain" => Pattern::Plain,
            "bonus_tile_wait" => Pattern::BonusTileWait,
            "replacement_tile_win" => Pattern::ReplacementTileWin,
            "seven_pairs" => Pattern::SevenPairs,
            "thirteen_scattered" => Pattern::ThirteenScattered,
            "seven_honors_thirteen_scattered" => Pattern::SevenHonorsThirteenScattered,
            _ => return Err(format!("invalid pattern: {}", s)),
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Dealer => "dealer",
            Role::NonDealer => "non_dealer",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for WinEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WinEvent::SelfDraw => "self_draw",
            WinEvent::DealerDiscard => "dealer_discard",
            WinEvent::NonDealerDiscard => "non_dealer_discard",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Pattern::Plain => "plain",
            Pattern::BonusTileWait => "bonus_tile_wait",
            Pattern::ReplacementTileWin => "replacement_tile_win",
            Pattern::SevenPairs => "seven_pairs",
            Pattern::ThirteenScattered => "thirteen_scattered",
            Pattern::SevenHonorsThirteenScattered => "seven_honors_thirteen_scattered",
        };
        write!(f, "{}", s)
    }
}

#[test]
fn test_bonus_count() {
    assert_eq!(BonusCount::new(2, 1).unwrap().bonus(), 5);
    assert_eq!(BonusCount::new(3, 3).unwrap().bonus(), 9);
    assert_eq!(BonusCount::default().bonus(), 0);
    assert!(BonusCount::new(4, 0).is_err());
    assert!(BonusCount::new(0, 4).is_err());
}

#[test]
fn test_situation_symbol() {
    for p in Pattern::ALL {
        assert_eq!(p, p.to_string().parse::<Pattern>().unwrap());
    }
    let s = Situation::new(Role::NonDealer, WinEvent::DealerDiscard, false, Pattern::SevenPairs);
    assert_eq!(s.to_string(), "non_dealer,dealer_discard,no_jing,seven_pairs");
    assert!("north".parse::<Role>().is_err());
}
