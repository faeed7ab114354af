use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

/// 单月金额合计
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthPoint {
    pub month: u32,
    pub amount: BigDecimal,
}

/// 某一年的月度序列, 按月份升序
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySeries {
    pub year: i32,
    /// 是否按截止月截断
    pub partial: bool,
    pub points: Vec<MonthPoint>,
}

impl YearlySeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 相对开票日的阶段划分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// 间隔 <= 0 天
    Issuance,
    Reception,
}

impl Phase {
    pub fn from_lag(lag_days: i64) -> Self {
        if lag_days <= 0 {
            Phase::Issuance
        } else {
            Phase::Reception
        }
    }
}

/// 开票/收票/付款日期散点
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub invoice_number: String,
    pub supplier: String,
    pub issued: NaiveDate,
    pub received: Option<NaiveDate>,
    pub payment_due: Option<NaiveDate>,
    pub reception_lag_days: Option<i64>,
    pub payment_lag_days: Option<i64>,
    pub reception_phase: Option<Phase>,
    pub payment_phase: Option<Phase>,
}
