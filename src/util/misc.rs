use std::fmt;

use crate::error_exit;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// オプションの値を取得. 値がない場合やパースに失敗した場合は終了
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let Some(n) = it.next() else {
        error_exit!("{}: value missing", opt);
    };
    match n.parse() {
        Ok(v) => v,
        Err(e) => error_exit!("{}: {} '{}'", opt, e, n),
    }
}

// 空白とコメントを除去した式を返却
pub fn strip_expression(line: &str) -> String {
    let line = line.split('#').next().unwrap_or("");
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

// "a,b,c" を各要素にパース
pub fn parse_list<T>(input: &str) -> Result<Vec<T>, String>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    input
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(|e| format!("{} '{}'", e, s)))
        .collect()
}

#[test]
fn test_strip_expression() {
    assert_eq!(strip_expression(" dealer, self_draw # comment"), "dealer,self_draw");
    assert_eq!(strip_expression("# only comment"), "");
}

#[test]
fn test_parse_list() {
    assert_eq!(parse_list::<u32>("1,2,,3").unwrap(), vec![1, 2, 3]);
    assert!(parse_list::<u32>("1,x").is_err());
}
