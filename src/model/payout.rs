use super::*;

// 南昌麻将の支払い内訳
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoutResult {
    pub dealer_pays: Point,     // 庄家の支払い (和了者が闲家の場合のみ)
    pub non_dealer_pays: Point, // 闲家1人あたりの支払い
    pub discard_pays: Point,    // 放炮者の支払い
    pub has_discard: bool,      // 放炮による和了
}

impl PayoutResult {
    pub const fn new(
        dealer_pays: Point,
        non_dealer_pays: Point,
        discard_pays: Point,
        has_discard: bool,
    ) -> Self {
        Self {
            dealer_pays,
            non_dealer_pays,
            discard_pays,
            has_discard,
        }
    }

    // 4人卓で和了者が受け取る合計
    pub fn total_for(&self, role: Role, win_event: WinEvent) -> Point {
        let others = SEAT as Point - 1;
        match (role, win_event) {
            (Role::Dealer, WinEvent::SelfDraw) => self.non_dealer_pays * others,
            // 庄家自身の放炮はありえないので闲家放炮と同じ扱い
            (Role::Dealer, _) => self.discard_pays + self.non_dealer_pays * (others - 1),
            (Role::NonDealer, WinEvent::SelfDraw) | (Role::NonDealer, WinEvent::DealerDiscard) => {
                self.dealer_pays + self.non_dealer_pays * (others - 1)
            }
            (Role::NonDealer, WinEvent::NonDealerDiscard) => {
                self.dealer_pays + self.discard_pays + self.non_dealer_pays * (others - 2)
            }
        }
    }
}

impl fmt::Display for PayoutResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dealer: {}, non_dealer: {}, discard: {}",
            self.dealer_pays, self.non_dealer_pays, self.discard_pays
        )
    }
}

#[test]
fn test_total_for() {
    let r = PayoutResult::new(0, 4, 0, false);
    assert_eq!(r.total_for(Role::Dealer, WinEvent::SelfDraw), 12);

    let r = PayoutResult::new(0, 2, 4, true);
    assert_eq!(r.total_for(Role::Dealer, WinEvent::NonDealerDiscard), 8);

    let r = PayoutResult::new(13, 9, 0, false);
    assert_eq!(r.total_for(Role::NonDealer, WinEvent::SelfDraw), 31);

    let r = PayoutResult::new(13, 2, 0, true);
    assert_eq!(r.total_for(Role::NonDealer, WinEvent::DealerDiscard), 17);

    let r = PayoutResult::new(4, 2, 9, true);
    assert_eq!(r.total_for(Role::NonDealer, WinEvent::NonDealerDiscard), 15);
}
