use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 发票日期字段选择器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// 开票日期 (Fecha de Emisión)
    Issued,
    /// 收票日期 (Fecha Recepción)
    Received,
    /// 预计付款日期 (Fecha Estimada Pago)
    PaymentDue,
}

/// 供应商发票 - 加载后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub supplier: String,
    pub invoice_number: String,
    pub amount: Option<BigDecimal>,
    pub issued: Option<NaiveDate>,
    pub received: Option<NaiveDate>,
    pub payment_due: Option<NaiveDate>,
}

impl InvoiceRecord {
    pub fn date(&self, field: DateField) -> Option<NaiveDate> {
        match field {
            DateField::Issued => self.issued,
            DateField::Received => self.received,
            DateField::PaymentDue => self.payment_due,
        }
    }
}

/// 发票表: 进程启动时加载一次, 之后只读共享
#[derive(Debug, Clone, Default)]
pub struct InvoiceTable {
    records: Vec<InvoiceRecord>,
}

impl InvoiceTable {
    pub fn new(records: Vec<InvoiceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[InvoiceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InvoiceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<InvoiceRecord> for InvoiceTable {
    fn from_iter<I: IntoIterator<Item = InvoiceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InvoiceTable {
    type Item = &'a InvoiceRecord;
    type IntoIter = std::slice::Iter<'a, InvoiceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
