pub type Point = u32; // 南昌麻将の支払い単位
pub type Tai = u32; // 台湾麻将の台数

pub const SEAT: usize = 4; // 卓の人数
pub const BONUS_TILE_MAX: u8 = 3; // 正精, 副精それぞれの最大枚数
pub const DEFAULT_CAP: Tai = 16; // 封頂台数
pub const DEFAULT_TAI_PER_UNIT: Point = 10; // 1台あたりの支払い
