use crate::models::{AggregateRow, DateField, GroupKey, InvoiceRecord, InvoiceTable, YearMonth};
use bigdecimal::{BigDecimal, Zero};
use chrono::Datelike;
use indexmap::IndexMap;

/// 分组方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Supplier,
    Day(DateField),
    Month(DateField),
    Year(DateField),
}

impl GroupBy {
    /// 记录的分组键; 日期为空时返回 None (不参与分组)
    pub fn key_of(&self, record: &InvoiceRecord) -> Option<GroupKey> {
        match *self {
            GroupBy::Supplier => Some(GroupKey::Supplier(record.supplier.clone())),
            GroupBy::Day(field) => record.date(field).map(GroupKey::Day),
            GroupBy::Month(field) => record.date(field).map(|d| GroupKey::Month(YearMonth::of(d))),
            GroupBy::Year(field) => record.date(field).map(|d| GroupKey::Year(d.year())),
        }
    }

    pub fn is_calendar(&self) -> bool {
        !matches!(self, GroupBy::Supplier)
    }
}

/// 聚合方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    /// 记录数 (含金额为空的记录)
    Count,
    Sum,
    /// 平均金额, 保留两位小数
    Mean,
}

#[derive(Debug, Default)]
struct Bucket {
    rows: u64,
    amounts: u64,
    sum: BigDecimal,
}

/// 分组聚合: 每个出现过的键一行
///
/// 供应商分组按首次出现顺序输出, 日历分组按时间升序输出.
/// 空金额不计入 Sum/Mean 的分子和分母; 全部金额为空的分组没有平均值, 不输出.
pub fn aggregate(table: &InvoiceTable, group_by: GroupBy, reduction: Reduction) -> Vec<AggregateRow> {
    let mut buckets: IndexMap<GroupKey, Bucket> = IndexMap::new();

    for record in table {
        let Some(key) = group_by.key_of(record) else {
            continue;
        };
        let bucket = buckets.entry(key).or_default();
        bucket.rows += 1;
        if let Some(amount) = &record.amount {
            bucket.amounts += 1;
            bucket.sum += amount;
        }
    }

    if group_by.is_calendar() {
        buckets.sort_keys();
    }

    buckets
        .into_iter()
        .filter_map(|(key, bucket)| {
            let value = match reduction {
                Reduction::Count => BigDecimal::from(bucket.rows),
                Reduction::Sum => bucket.sum,
                Reduction::Mean if bucket.amounts == 0 => return None,
                Reduction::Mean => (bucket.sum / BigDecimal::from(bucket.amounts)).round(2),
            };
            Some(AggregateRow::new(key, value))
        })
        .collect()
}

/// 分组记录数之和 (用于一致性检查)
pub fn total_count(rows: &[AggregateRow]) -> BigDecimal {
    rows.iter().fold(BigDecimal::zero(), |acc, row| acc + &row.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{dec, record, scenario_table};
    use chrono::NaiveDate;

    #[test]
    fn test_supplier_sum_in_encounter_order() {
        let rows = aggregate(&scenario_table(), GroupBy::Supplier, Reduction::Sum);
        assert_eq!(
            rows,
            vec![
                AggregateRow::new(GroupKey::Supplier("A".into()), dec("150")),
                AggregateRow::new(GroupKey::Supplier("B".into()), dec("200")),
            ]
        );
    }

    #[test]
    fn test_month_sum() {
        let rows = aggregate(&scenario_table(), GroupBy::Month(DateField::Issued), Reduction::Sum);
        assert_eq!(rows, vec![AggregateRow::new(GroupKey::Month(YearMonth::new(2023, 1)), dec("350"))]);
    }

    #[test]
    fn test_day_buckets_are_chronological() {
        let table: InvoiceTable = vec![
            record("A", Some("10"), "05-03-2023"),
            record("B", Some("20"), "01-01-2023"),
            record("C", Some("30"), "05-03-2023"),
            record("D", Some("40"), "15-02-2022"),
        ]
        .into_iter()
        .collect();

        let rows = aggregate(&table, GroupBy::Day(DateField::Issued), Reduction::Sum);
        let keys: Vec<GroupKey> = rows.iter().map(|r| r.key.clone()).collect();
        assert_eq!(
            keys,
            vec![
                GroupKey::Day(NaiveDate::from_ymd_opt(2022, 2, 15).unwrap()),
                GroupKey::Day(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
                GroupKey::Day(NaiveDate::from_ymd_opt(2023, 3, 5).unwrap()),
            ]
        );
        assert_eq!(rows[2].value, dec("40"));

        let years = aggregate(&table, GroupBy::Year(DateField::Issued), Reduction::Count);
        assert_eq!(
            years,
            vec![
                AggregateRow::new(GroupKey::Year(2022), dec("1")),
                AggregateRow::new(GroupKey::Year(2023), dec("3")),
            ]
        );
    }

    #[test]
    fn test_unparseable_date_excluded_from_month_but_counted_by_supplier() {
        let table: InvoiceTable = vec![
            record("A", Some("100"), "01-01-2023"),
            record("A", Some("50"), "not-a-date"),
            record("B", Some("200"), "01-01-2023"),
        ]
        .into_iter()
        .collect();

        let months = aggregate(&table, GroupBy::Month(DateField::Issued), Reduction::Count);
        assert_eq!(months, vec![AggregateRow::new(GroupKey::Month(YearMonth::new(2023, 1)), dec("2"))]);

        let suppliers = aggregate(&table, GroupBy::Supplier, Reduction::Count);
        assert_eq!(
            suppliers,
            vec![
                AggregateRow::new(GroupKey::Supplier("A".into()), dec("2")),
                AggregateRow::new(GroupKey::Supplier("B".into()), dec("1")),
            ]
        );
    }

    #[test]
    fn test_null_amounts_skip_sum_and_mean() {
        let table: InvoiceTable = vec![
            record("A", Some("100"), "01-01-2023"),
            record("A", None, "02-01-2023"),
            record("A", Some("50"), "03-01-2023"),
            record("B", None, "01-01-2023"),
        ]
        .into_iter()
        .collect();

        let counts = aggregate(&table, GroupBy::Supplier, Reduction::Count);
        assert_eq!(counts[0].value, dec("3"));
        assert_eq!(counts[1].value, dec("1"));

        let sums = aggregate(&table, GroupBy::Supplier, Reduction::Sum);
        assert_eq!(sums[0].value, dec("150"));
        assert_eq!(sums[1].value, dec("0"));

        let means = aggregate(&table, GroupBy::Supplier, Reduction::Mean);
        assert_eq!(means, vec![AggregateRow::new(GroupKey::Supplier("A".into()), dec("75"))]);
    }

    #[test]
    fn test_mean_rounds_to_cents() {
        let table: InvoiceTable = vec![
            record("A", Some("10"), "01-01-2023"),
            record("A", Some("10"), "01-01-2023"),
            record("A", Some("20"), "01-01-2023"),
        ]
        .into_iter()
        .collect();

        let means = aggregate(&table, GroupBy::Supplier, Reduction::Mean);
        assert_eq!(means[0].value, dec("13.33"));
    }

    #[test]
    fn test_counts_add_up_to_keyed_rows() {
        let table: InvoiceTable = vec![
            record("A", Some("1"), "01-01-2023"),
            record("B", None, ""),
            record("C", Some("3"), "garbage"),
            record("A", Some("4"), "01-02-2024"),
            record("D", Some("5"), "28-02-2024"),
        ]
        .into_iter()
        .collect();

        for group_by in [
            GroupBy::Supplier,
            GroupBy::Day(DateField::Issued),
            GroupBy::Month(DateField::Issued),
            GroupBy::Year(DateField::Issued),
        ] {
            let keyed = table.iter().filter(|r| group_by.key_of(r).is_some()).count();
            let rows = aggregate(&table, group_by, Reduction::Count);
            assert_eq!(total_count(&rows), BigDecimal::from(keyed as u64), "{:?}", group_by);
        }
    }

    #[test]
    fn test_empty_table_yields_no_rows() {
        let table = InvoiceTable::default();
        for reduction in [Reduction::Count, Reduction::Sum, Reduction::Mean] {
            assert!(aggregate(&table, GroupBy::Supplier, reduction).is_empty());
            assert!(aggregate(&table, GroupBy::Month(DateField::Issued), reduction).is_empty());
        }
    }
}
