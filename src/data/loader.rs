use crate::config::DataConfig;
use crate::data::{ColumnLayout, RawCell};
use crate::error::LoadError;
use crate::models::{InvoiceRecord, InvoiceTable};
use crate::service::normalizer::{from_serial, DateNormalizer};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use serde::Serialize;
use std::path::Path;

static EMPTY: RawCell = RawCell::Empty;

/// 源表中的一行: (表格行号, 单元格)
pub type SourceRow = (usize, Vec<RawCell>);

/// 被隔离的行 (不进入发票表)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarantinedRow {
    pub line: usize,
    pub reason: String,
}

/// 加载统计
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// 表头之后的非空行数
    pub rows_read: usize,
    pub records: usize,
    pub quarantined: Vec<QuarantinedRow>,
    /// 有内容但无法解析的日期单元格
    pub unparsed_dates: usize,
    /// 缺失或非数值的金额
    pub missing_amounts: usize,
}

/// 读取发票表格并构建发票表
pub fn load_invoice_table(config: &DataConfig) -> Result<(InvoiceTable, LoadReport), LoadError> {
    let path = config.path.as_path();
    let rows = if is_csv(path) {
        read_csv(path, config.delimiter)?
    } else {
        read_workbook(path, config.sheet.as_deref())?
    };
    tracing::debug!("Read {} raw rows from {}", rows.len(), path.display());

    let (table, report) = build_table(rows, &DateNormalizer::new(config.date_order))?;
    tracing::info!(
        "Loaded {} invoices from {} ({} quarantined, {} unparsed dates, {} missing amounts)",
        report.records,
        path.display(),
        report.quarantined.len(),
        report.unparsed_dates,
        report.missing_amounts
    );
    Ok((table, report))
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn read_csv(path: &Path, delimiter: char) -> Result<Vec<SourceRow>, LoadError> {
    if !delimiter.is_ascii() {
        return Err(LoadError::InvalidDelimiter(delimiter));
    }
    let delimiter = delimiter as u8;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        rows.push((idx + 1, record.iter().map(RawCell::text).collect()));
    }
    Ok(rows)
}

fn read_workbook(path: &Path, sheet: Option<&str>) -> Result<Vec<SourceRow>, LoadError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(name.to_string()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoSheets(path.to_path_buf()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| LoadError::Sheet { sheet: sheet_name.clone(), source })?;

    // 数据不一定从 A1 开始
    let (start_row, _) = range.start().unwrap_or((0, 0));
    Ok(range
        .rows()
        .enumerate()
        .map(|(idx, row)| (start_row as usize + idx + 1, row.iter().map(cell_from_data).collect()))
        .collect())
}

fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::text(s),
        Data::Float(n) => RawCell::Number(*n),
        Data::Int(n) => RawCell::Number(*n as f64),
        Data::Bool(b) => RawCell::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => from_serial(dt.as_f64()).map(RawCell::Date).unwrap_or(RawCell::Empty),
    }
}

/// 由原始行构建发票表: 第一个非空行为表头, 供应商为空的行被隔离
pub fn build_table(
    rows: Vec<SourceRow>,
    normalizer: &DateNormalizer,
) -> Result<(InvoiceTable, LoadReport), LoadError> {
    let mut rows = rows.into_iter().filter(|(_, cells)| !cells.iter().all(RawCell::is_empty));

    let (_, header) = rows.next().ok_or(LoadError::MissingHeader)?;
    let headers: Vec<String> = header
        .iter()
        .map(|cell| cell.as_text().unwrap_or_default().trim_start_matches('\u{feff}').to_string())
        .collect();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut report = LoadReport::default();
    let mut records = Vec::new();

    for (line, cells) in rows {
        report.rows_read += 1;
        let cell = |idx: usize| cells.get(idx).unwrap_or(&EMPTY);

        let Some(supplier) = cell(layout.supplier).as_text() else {
            tracing::warn!("Row {} has no supplier, quarantined", line);
            report.quarantined.push(QuarantinedRow {
                line,
                reason: "missing supplier".to_string(),
            });
            continue;
        };

        let amount = cell(layout.amount).as_amount();
        if amount.is_none() {
            report.missing_amounts += 1;
        }

        let mut date_of = |idx: usize| {
            let raw = cell(idx);
            let date = normalizer.normalize_cell(raw);
            if date.is_none() && !raw.is_empty() {
                report.unparsed_dates += 1;
            }
            date
        };
        let issued = date_of(layout.issued);
        let received = date_of(layout.received);
        let payment_due = date_of(layout.payment_due);

        records.push(InvoiceRecord {
            supplier,
            invoice_number: cell(layout.invoice_number).as_text().unwrap_or_default(),
            amount,
            issued,
            received,
            payment_due,
        });
    }

    report.records = records.len();
    Ok((InvoiceTable::new(records), report))
}
