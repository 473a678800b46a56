#![warn(rust_2018_idioms)]

use mahjong_calc::app::{CalculatorApp, Variant};
use mahjong_calc::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "N" => {
            // Nanchang (南昌麻将 支払い計算モード)
            CalculatorApp::new(Variant::Nanchang, args2).run();
        }
        "T" => {
            // Taiwan (台湾16张麻将 台数計算モード)
            CalculatorApp::new(Variant::Taiwan, args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
