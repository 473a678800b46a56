// 南昌麻将と台湾16张麻将の点数計算
pub mod app;
pub mod hand;
pub mod model;
pub mod util;
