// mainから直接呼び出すアプリケーションの動作モード(N, T)のモジュール

mod calculator;

pub use calculator::{CalculatorApp, Variant};
