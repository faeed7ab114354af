use crate::models::{InvoiceTable, Phase, TimelinePoint};

/// 开票日与收票日/预计付款日的散点数据, 只包含有开票日期的发票
pub fn payment_timeline(table: &InvoiceTable) -> Vec<TimelinePoint> {
    table
        .iter()
        .filter_map(|record| {
            let issued = record.issued?;
            let reception_lag_days = record.received.map(|d| (d - issued).num_days());
            let payment_lag_days = record.payment_due.map(|d| (d - issued).num_days());
            Some(TimelinePoint {
                invoice_number: record.invoice_number.clone(),
                supplier: record.supplier.clone(),
                issued,
                received: record.received,
                payment_due: record.payment_due,
                reception_lag_days,
                payment_lag_days,
                reception_phase: reception_lag_days.map(Phase::from_lag),
                payment_phase: payment_lag_days.map(Phase::from_lag),
            })
        })
        .collect()
}
