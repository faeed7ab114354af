use crate::data::RawCell;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// 日/月顺序约定 (仅影响 dd-mm-yyyy 这类非 ISO 文本)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOrder {
    #[default]
    DayFirst,
    MonthFirst,
}

/// 表格软件日期序列号的零点 (1900 日期系统)
const SERIAL_EPOCH: (i32, u32, u32) = (1899, 12, 30);
/// 9999-12-31
const MAX_SERIAL: f64 = 2_958_465.0;

/// 日期规范化: 无法解析的值返回 None, 从不报错
#[derive(Debug, Clone, Copy, Default)]
pub struct DateNormalizer {
    order: DayOrder,
}

impl DateNormalizer {
    pub fn new(order: DayOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> DayOrder {
        self.order
    }

    /// 解析单个文本日期
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        // 丢弃时间部分: "2023-01-05 00:00:00" / "2023-01-05T08:30"
        let date_part = trimmed.split([' ', 'T']).next()?;
        if date_part.is_empty() {
            return None;
        }

        let parts: Vec<&str> = date_part.split(['-', '/', '.']).collect();
        let [first, second, third] = parts.as_slice() else {
            return None;
        };
        if !parts.iter().all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }

        if first.len() == 4 {
            return NaiveDate::from_ymd_opt(first.parse().ok()?, second.parse().ok()?, third.parse().ok()?);
        }

        let year = expand_year(third)?;
        let a: u32 = first.parse().ok()?;
        let b: u32 = second.parse().ok()?;
        let (day, month) = match self.order {
            DayOrder::DayFirst => (a, b),
            DayOrder::MonthFirst => (b, a),
        };

        // 首选顺序无效时尝试交换 (例如 day-first 下的 "12/31/2024")
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, day, month))
    }

    /// 规范化一个表格单元格
    pub fn normalize_cell(&self, cell: &RawCell) -> Option<NaiveDate> {
        match cell {
            RawCell::Empty => None,
            RawCell::Text(s) => self.parse(s),
            RawCell::Number(serial) => from_serial(*serial),
            RawCell::Date(date) => Some(*date),
        }
    }

    /// 规范化整列文本
    pub fn normalize_column<'a, I>(&self, column: I) -> Vec<Option<NaiveDate>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        column.into_iter().map(|raw| self.parse(raw)).collect()
    }
}

fn expand_year(raw: &str) -> Option<i32> {
    match raw.len() {
        4 => raw.parse().ok(),
        2 => raw.parse::<i32>().ok().map(|yy| 2000 + yy),
        _ => None,
    }
}

/// 表格日期序列号 -> 日期 (忽略小数部分的时间)
pub fn from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    let (y, m, d) = SERIAL_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d)?.checked_add_signed(Duration::days(serial.floor() as i64))
}
