use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

/// 原始单元格 (CSV 只产生 Text/Empty)
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl RawCell {
    /// 文本单元格去空白, 空串视为 Empty
    pub fn text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }

    /// 作为文本读取 (供应商名, 发票号)
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            RawCell::Number(n) => Some(n.to_string()),
            RawCell::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
        }
    }

    /// 作为金额读取, 非数值返回 None
    pub fn as_amount(&self) -> Option<BigDecimal> {
        match self {
            RawCell::Number(n) if n.is_finite() => BigDecimal::from_str(&n.to_string()).ok(),
            RawCell::Text(s) => parse_amount(s),
            _ => None,
        }
    }
}

/// 解析文本金额: "$1.234.567", "1.234,56", "1,234.56", "150.5"
///
/// 同时出现 '.' 和 ',' 时最后出现的为小数点; 多个 '.' 视为千分位;
/// 只有 ',' 时视为小数点 (本地格式).
pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '$' && *c != '\u{a0}')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let last_dot = cleaned.rfind('.');
    let last_comma = cleaned.rfind(',');
    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if dot > comma => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        (None, Some(_)) if cleaned.matches(',').count() == 1 => cleaned.replace(',', "."),
        (None, Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) if cleaned.matches('.').count() > 1 => cleaned.replace('.', ""),
        _ => cleaned,
    };

    BigDecimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_formats() {
        assert_eq!(parse_amount("100"), Some(dec("100")));
        assert_eq!(parse_amount("150.5"), Some(dec("150.5")));
        assert_eq!(parse_amount("$ 1.234.567"), Some(dec("1234567")));
        assert_eq!(parse_amount("1.234,56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("123,45"), Some(dec("123.45")));
        assert_eq!(parse_amount("1,234,567"), Some(dec("1234567")));
        assert_eq!(parse_amount("-50"), Some(dec("-50")));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("n/a"), None);
        assert_eq!(parse_amount("$"), None);
    }

    #[test]
    fn test_cell_as_amount() {
        assert_eq!(RawCell::Number(200.0).as_amount(), Some(dec("200")));
        assert_eq!(RawCell::Number(10.25).as_amount(), Some(dec("10.25")));
        assert_eq!(RawCell::Number(f64::NAN).as_amount(), None);
        assert_eq!(RawCell::Empty.as_amount(), None);
        assert_eq!(RawCell::text("  ").as_amount(), None);
    }

    #[test]
    fn test_cell_as_text() {
        assert_eq!(RawCell::text(" Proveedor A ").as_text(), Some("Proveedor A".to_string()));
        assert_eq!(RawCell::Number(12345.0).as_text(), Some("12345".to_string()));
        assert_eq!(RawCell::Empty.as_text(), None);
    }
}
