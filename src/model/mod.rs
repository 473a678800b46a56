// 点数計算のデータモデル
mod define;
mod item;
mod payout;
mod score;
mod situation;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use item::*;
pub use payout::*;
pub use score::*;
pub use situation::*;
