use crate::models::AggregateRow;

/// 按指标值降序取前 N 行; 值相同时保持输入顺序 (稳定排序)
pub fn top_n(mut rows: Vec<AggregateRow>, n: usize) -> Vec<AggregateRow> {
    rows.sort_by(|a, b| b.value.cmp(&a.value));
    rows.truncate(n);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GroupKey;
    use crate::service::aggregator::{aggregate, GroupBy, Reduction};
    use crate::service::test_support::{dec, scenario_table};

    fn row(supplier: &str, value: &str) -> AggregateRow {
        AggregateRow::new(GroupKey::Supplier(supplier.into()), dec(value))
    }

    #[test]
    fn test_top_one_of_scenario() {
        let sums = aggregate(&scenario_table(), GroupBy::Supplier, Reduction::Sum);
        assert_eq!(top_n(sums, 1), vec![row("B", "200")]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = vec![row("A", "5"), row("B", "9"), row("C", "5"), row("D", "9"), row("E", "1")];
        let ranked = top_n(rows, 4);
        assert_eq!(ranked, vec![row("B", "9"), row("D", "9"), row("A", "5"), row("C", "5")]);
    }

    #[test]
    fn test_fewer_rows_than_limit() {
        let ranked = top_n(vec![row("A", "1"), row("B", "2")], 10);
        assert_eq!(ranked, vec![row("B", "2"), row("A", "1")]);
        assert!(top_n(Vec::new(), 10).is_empty());
        assert!(top_n(vec![row("A", "1")], 0).is_empty());
    }

    #[test]
    fn test_ranked_table_invariants() {
        let rows: Vec<AggregateRow> = (0..37)
            .map(|i| row(&format!("P{}", i), &((i * 7919) % 101).to_string()))
            .collect();
        for n in [0, 1, 10, 36, 37, 50] {
            let ranked = top_n(rows.clone(), n);
            assert!(ranked.len() <= n);
            assert_eq!(ranked.len(), n.min(rows.len()));
            assert!(ranked.windows(2).all(|w| w[0].value >= w[1].value));
        }
    }
}
