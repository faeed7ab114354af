use crate::models::{DateField, GroupKey, InvoiceTable, MonthPoint, YearlySeries};
use crate::service::aggregator::{aggregate, GroupBy, Reduction};
use serde::{Deserialize, Serialize};

/// 需要对比的年份; cutoff_month 用于数据不完整的年份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSpec {
    pub year: i32,
    pub cutoff_month: Option<u32>,
}

impl YearSpec {
    pub fn full(year: i32) -> Self {
        Self { year, cutoff_month: None }
    }

    pub fn partial(year: i32, cutoff_month: u32) -> Self {
        Self {
            year,
            cutoff_month: Some(cutoff_month),
        }
    }

    fn includes(&self, month: u32) -> bool {
        self.cutoff_month.map_or(true, |cutoff| month <= cutoff)
    }
}

/// 按年拆分的月度金额序列 (按请求顺序, 每年一条)
///
/// 只包含有发票的月份, 缺失月份不补零; 不完整年份截止月之后的数据丢弃.
pub fn yearly_series(table: &InvoiceTable, field: DateField, years: &[YearSpec]) -> Vec<YearlySeries> {
    let monthly = aggregate(table, GroupBy::Month(field), Reduction::Sum);

    years
        .iter()
        .map(|spec| {
            let points = monthly
                .iter()
                .filter_map(|row| match &row.key {
                    GroupKey::Month(ym) if ym.year == spec.year && spec.includes(ym.month) => Some(MonthPoint {
                        month: ym.month,
                        amount: row.value.clone(),
                    }),
                    _ => None,
                })
                .collect();
            YearlySeries {
                year: spec.year,
                partial: spec.cutoff_month.is_some(),
                points,
            }
        })
        .collect()
}
