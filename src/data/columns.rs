use crate::error::LoadError;

/// 必需列及其本地化别名 (比较时忽略大小写和首尾空白)
const SUPPLIER: (&str, &[&str]) = ("Proveedor Facturador", &["proveedor facturador", "proveedor", "supplier"]);
const INVOICE_NUMBER: (&str, &[&str]) = (
    "Nº Factura",
    &["nº factura", "n° factura", "no factura", "numero factura", "número factura", "invoice number"],
);
const AMOUNT: (&str, &[&str]) = ("Monto Total", &["monto total", "total amount", "amount"]);
const ISSUED: (&str, &[&str]) = ("Fecha de Emisión", &["fecha de emisión", "fecha emisión", "fecha de emision", "issuance date"]);
const RECEIVED: (&str, &[&str]) = (
    "Fecha Recepción",
    &["fecha recepción", "fecha de recepción", "fecha recepcion", "reception date"],
);
const PAYMENT_DUE: (&str, &[&str]) = (
    "Fecha Estimada Pago",
    &["fecha estimada pago", "fecha estimada de pago", "estimated payment date"],
);

/// 表头解析结果: 各字段所在列号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub supplier: usize,
    pub invoice_number: usize,
    pub amount: usize,
    pub issued: usize,
    pub received: usize,
    pub payment_due: usize,
}

impl ColumnLayout {
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers.iter().map(|h| h.as_ref().trim().to_lowercase()).collect();
        let find = |(name, aliases): (&'static str, &[&str])| {
            normalized
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            supplier: find(SUPPLIER)?,
            invoice_number: find(INVOICE_NUMBER)?,
            amount: find(AMOUNT)?,
            issued: find(ISSUED)?,
            received: find(RECEIVED)?,
            payment_due: find(PAYMENT_DUE)?,
        })
    }
}
