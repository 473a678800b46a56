use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead};

use serde_json::json;

use crate::hand::*;
use crate::model::*;
use crate::util::log::set_debug;
use crate::util::misc::*;
use crate::{debug, error, warn};

// 計算対象のルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Nanchang, // 南昌麻将 (支払い表)
    Taiwan,   // 台湾16张麻将 (台数計算)
}

#[derive(Debug)]
pub struct CalculatorApp {
    variant: Variant,
    args: Vec<String>,
    json: bool,
    rule: TaiRule,
}

impl CalculatorApp {
    pub fn new(variant: Variant, args: Vec<String>) -> Self {
        Self {
            variant,
            args,
            json: false,
            rule: TaiRule::default(),
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let args = self.args.clone();
        let mut it = args.iter();
        while let Some(s) = it.next() {
            match s.as_str() {
                "-d" => set_debug(true),
                "-j" => self.json = true,
                "-f" => file_path = next_value(&mut it, s),
                "-c" => self.rule.cap = next_value(&mut it, s),
                "-u" => self.rule.tai_per_unit = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    if !exp.is_empty() {
                        error!("multiple expression is not allowed");
                        return;
                    }
                    exp = s.clone();
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        if self.variant == Variant::Nanchang && self.rule != TaiRule::default() {
            warn!("-c and -u are ignored in nanchang mode");
        }

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&exp) {
                error!("{}", e);
            }
            return;
        }

        match self.run_from_file(&file_path) {
            Ok(n) if n > 0 => error!("verify failed: {} expression(s)", n),
            Ok(_) => {}
            Err(e) => error!("{}", e),
        }
    }

    // 検証に失敗した式の数を返却
    fn run_from_file(&self, file_path: &str) -> Res<usize> {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        let mut failed = 0;
        for exp in lines.map_while(Result::ok) {
            if strip_expression(&exp).is_empty() {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
                continue;
            }
            match self.process_expression(&exp) {
                Ok(Verify::Error) => failed += 1,
                Ok(_) => {}
                Err(e) => {
                    error!("{}", e);
                    failed += 1;
                }
            }
            println!();
        }
        Ok(failed)
    }

    fn process_expression(&self, exp: &str) -> Res<Verify> {
        println!("> {}", exp);
        let mut calculator: Box<dyn Calculator> = match self.variant {
            Variant::Nanchang => Box::new(NanchangCalculator::default()),
            Variant::Taiwan => Box::new(TaiwanCalculator::new(self.rule)),
        };
        calculator.parse(&strip_expression(exp))?;
        calculator.run(self.json)
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

impl Verify {
    fn check(expected: Option<bool>) -> Self {
        match expected {
            Some(true) => Verify::Ok,
            Some(false) => Verify::Error,
            None => Verify::Skip,
        }
    }
}

trait Calculator {
    fn parse(&mut self, input: &str) -> Res;
    fn run(&self, json: bool) -> Res<Verify>;
}

// ROLE,EVENT,JING,PATTERN[/PRIMARY,SECONDARY][/DEALER,NON_DEALER,DISCARD | none]
#[derive(Debug)]
struct NanchangCalculator {
    situation: Situation,
    bonus: BonusCount,
    verify: Option<Option<PayoutResult>>,
}

impl Default for NanchangCalculator {
    fn default() -> Self {
        Self {
            situation: Situation::new(Role::Dealer, WinEvent::SelfDraw, false, Pattern::Plain),
            bonus: BonusCount::default(),
            verify: None,
        }
    }
}

impl NanchangCalculator {
    fn parse_situation(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split(',').collect();
        if exps.len() != 4 {
            Err(format!("situation must have 4 fields: {}", input))?;
        }
        let has_bonus_tile = match exps[2] {
            "jing" => true,
            "no_jing" => false,
            s => Err(format!("invalid jing flag: {}", s))?,
        };
        self.situation = Situation::new(
            exps[0].parse()?,
            exps[1].parse()?,
            has_bonus_tile,
            exps[3].parse()?,
        );

        let s = &self.situation;
        if !available_win_events(s.role).contains(&s.win_event) {
            warn!("{} can not win by {}", s.role, s.win_event);
        }
        Ok(())
    }

    fn parse_bonus(&mut self, input: &str) -> Res {
        let v: Vec<u8> = parse_list(input)?;
        if v.len() != 2 {
            Err(format!("invalid bonus tile count: {}", input))?;
        }
        self.bonus = BonusCount::new(v[0], v[1])?;
        if !self.situation.has_bonus_tile && self.bonus.bonus() > 0 {
            warn!("bonus tiles are ignored without jing");
        }
        Ok(())
    }

    fn parse_verify(&mut self, input: &str) -> Res {
        if input == "none" {
            self.verify = Some(None);
            return Ok(());
        }
        let v: Vec<Point> = parse_list(input)?;
        if v.len() != 3 {
            Err(format!("invalid payout verify info: {}", input))?;
        }
        let has_discard = self.situation.win_event.is_discard();
        self.verify = Some(Some(PayoutResult::new(v[0], v[1], v[2], has_discard)));
        Ok(())
    }
}

impl Calculator for NanchangCalculator {
    fn parse(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split('/').collect();
        self.parse_situation(exps[0])?;
        if let Some(e) = exps.get(1) {
            self.parse_bonus(e)?;
        }
        if let Some(e) = exps.get(2) {
            self.parse_verify(e)?;
        }
        debug!("{:?}", self);
        Ok(())
    }

    fn run(&self, json: bool) -> Res<Verify> {
        let result = settle(&self.situation, self.bonus);
        if json {
            let v = json!({
                "situation": self.situation,
                "bonus": self.bonus.bonus(),
                "result": &result,
            });
            println!("{}", serde_json::to_string(&v)?);
        } else if let Some(r) = &result {
            println!("{}", r);
            println!(
                "total: {}",
                r.total_for(self.situation.role, self.situation.win_event)
            );
        } else {
            println!("no score for this combination");
        }

        let verify = Verify::check(self.verify.map(|v| v == result));
        println!("verify: {:?}", verify);
        Ok(verify)
    }
}

// ID,ID,...[/FLOWERS][/TOTAL]
#[derive(Debug)]
struct TaiwanCalculator {
    rule: TaiRule,
    selection: Selection,
    flower_count: u32,
    verify: Option<Tai>,
}

impl TaiwanCalculator {
    fn new(rule: TaiRule) -> Self {
        Self {
            rule,
            selection: Selection::new(),
            flower_count: 0,
            verify: None,
        }
    }
}

impl Calculator for TaiwanCalculator {
    fn parse(&mut self, input: &str) -> Res {
        let exps: Vec<&str> = input.split('/').collect();
        for id in exps[0].split(',').filter(|s| !s.is_empty()) {
            if find_item(id).is_none() {
                warn!("unknown item: {}", id);
            }
            self.selection.insert(id);
        }
        if let Some(e) = exps.get(1) {
            self.flower_count = e.parse()?;
        }
        if let Some(e) = exps.get(2) {
            self.verify = Some(e.parse()?);
        }
        debug!("{:?}", self);
        Ok(())
    }

    fn run(&self, json: bool) -> Res<Verify> {
        let result = compute_total_with_rule(&self.selection, self.flower_count, &self.rule);
        let per_player = result.per_player(self.rule.tai_per_unit);
        if json {
            let v = json!({
                "rule": self.rule,
                "result": &result,
                "per_player": per_player,
            });
            println!("{}", serde_json::to_string(&v)?);
        } else {
            let mut items = "".to_string();
            for (item, count) in &result.breakdown {
                let _ = write!(items, "{}x{}, ", item, count);
            }
            println!("items: {}", items);
            println!("{}, per_player: {}", result, per_player);
        }

        let verify = Verify::check(self.verify.map(|v| v == result.total_units));
        println!("verify: {:?}", verify);
        Ok(verify)
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run N EXPRESSION [-d] [-j]
    $ cargo run N -f FILE [-d] [-j]
    $ cargo run T EXPRESSION [-c CAP] [-u TAI_PER_UNIT] [-d] [-j]
    $ cargo run T -f FILE [-c CAP] [-u TAI_PER_UNIT] [-d] [-j]
Options
    -d: print debug info
    -j: print results as json
    -f: read expressions from file instead of a commandline expression
    -c: tai cap (default: 16)
    -u: payment per tai (default: 10)
"
    );
}

#[cfg(test)]
fn replay(variant: Variant, file_path: &str) {
    let app = CalculatorApp::new(variant, vec![]);
    let file = File::open(file_path).unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        if strip_expression(&exp).is_empty() {
            continue;
        }
        let verify = app.process_expression(&exp).unwrap();
        assert_ne!(Verify::Error, verify, "{}", exp);
    }
}

#[test]
fn test_calculator_nanchang() {
    replay(Variant::Nanchang, "tests/nanchang_hands.txt");
}

#[test]
fn test_calculator_taiwan() {
    replay(Variant::Taiwan, "tests/taiwan_hands.txt");
}

#[test]
fn test_calculator_verify_error() {
    let app = CalculatorApp::new(Variant::Nanchang, vec![]);
    let v = app.process_expression("dealer,self_draw,jing,plain/0,0/0,5,0").unwrap();
    assert_eq!(v, Verify::Error);
    let v = app.process_expression("dealer,self_draw,no_jing,bonus_tile_wait//none");
    assert!(v.is_err()); // 空の精指定はパースエラー

    let v = app.process_expression("dealer,self_draw,no_jing,bonus_tile_wait/0,0/none").unwrap();
    assert_eq!(v, Verify::Ok);
    assert!(app.process_expression("dealer,self_draw,plain").is_err());
    assert!(app.process_expression("dealer,self_draw,jing,plain/4,0").is_err());
}

#[test]
fn test_calculator_taiwan_rule() {
    let mut app = CalculatorApp::new(Variant::Taiwan, vec![]);
    app.rule.cap = 8;
    let v = app.process_expression("qing_yi_se,self_draw/0/8").unwrap();
    assert_eq!(v, Verify::Ok);
    let v = app.process_expression("qing_yi_se,self_draw/0/10").unwrap();
    assert_eq!(v, Verify::Error);
}
