use crate::config::ReportConfig;
use crate::data::LoadReport;
use crate::models::{AggregateRow, DateField, InvoiceTable, TimelinePoint, YearlySeries};
use crate::service::aggregator::{aggregate, GroupBy, Reduction};
use crate::service::ranker::top_n;
use crate::service::timeline::payment_timeline;
use crate::service::trend::yearly_series;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// 仪表盘视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    TopSuppliers,
    SupplierTotals,
    SupplierAverages,
    DailyTrend,
    MonthlyTrend,
    ComparativeTrend,
    PaymentTimeline,
}

impl ViewKind {
    pub const ALL: [ViewKind; 7] = [
        ViewKind::TopSuppliers,
        ViewKind::SupplierTotals,
        ViewKind::SupplierAverages,
        ViewKind::DailyTrend,
        ViewKind::MonthlyTrend,
        ViewKind::ComparativeTrend,
        ViewKind::PaymentTimeline,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::TopSuppliers => "Top suppliers by number of invoices",
            ViewKind::SupplierTotals => "Suppliers by total amount",
            ViewKind::SupplierAverages => "Suppliers by average amount",
            ViewKind::DailyTrend => "Daily cost trend",
            ViewKind::MonthlyTrend => "Monthly cost trend",
            ViewKind::ComparativeTrend => "Comparative cost trend",
            ViewKind::PaymentTimeline => "Issuance, reception and payment dates",
        }
    }
}

/// 图表数据 (不含样式)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Chart {
    Bar(Vec<AggregateRow>),
    Line(Vec<AggregateRow>),
    Overlay(Vec<YearlySeries>),
    Scatter(Vec<TimelinePoint>),
}

impl Chart {
    pub fn len(&self) -> usize {
        match self {
            Chart::Bar(rows) | Chart::Line(rows) => rows.len(),
            Chart::Overlay(series) => series.len(),
            Chart::Scatter(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub id: ViewKind,
    pub title: &'static str,
    pub chart: Chart,
}

/// 表格概况
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub invoices: usize,
    pub suppliers: usize,
    pub load: LoadReport,
}

/// 仪表盘服务: 每次请求都从只读发票表重新计算
pub struct DashboardService {
    table: Arc<InvoiceTable>,
    load_report: LoadReport,
    settings: ReportConfig,
}

impl DashboardService {
    pub fn new(table: Arc<InvoiceTable>, settings: ReportConfig) -> Self {
        Self::with_load_report(table, LoadReport::default(), settings)
    }

    pub fn with_load_report(table: Arc<InvoiceTable>, load_report: LoadReport, settings: ReportConfig) -> Self {
        Self {
            table,
            load_report,
            settings,
        }
    }

    pub fn table(&self) -> &InvoiceTable {
        &self.table
    }

    pub fn view(&self, kind: ViewKind) -> ChartView {
        let start = Instant::now();
        let table = self.table.as_ref();
        let top = self.settings.top_n;

        let chart = match kind {
            ViewKind::TopSuppliers => Chart::Bar(top_n(aggregate(table, GroupBy::Supplier, Reduction::Count), top)),
            ViewKind::SupplierTotals => Chart::Bar(top_n(aggregate(table, GroupBy::Supplier, Reduction::Sum), top)),
            ViewKind::SupplierAverages => Chart::Bar(top_n(aggregate(table, GroupBy::Supplier, Reduction::Mean), top)),
            ViewKind::DailyTrend => Chart::Line(aggregate(table, GroupBy::Day(DateField::Issued), Reduction::Sum)),
            ViewKind::MonthlyTrend => Chart::Line(aggregate(table, GroupBy::Month(DateField::Issued), Reduction::Sum)),
            ViewKind::ComparativeTrend => {
                Chart::Overlay(yearly_series(table, DateField::Issued, &self.settings.year_specs()))
            }
            ViewKind::PaymentTimeline => Chart::Scatter(payment_timeline(table)),
        };

        tracing::debug!("View {:?}: {} rows in {:?}", kind, chart.len(), start.elapsed());
        ChartView {
            id: kind,
            title: kind.title(),
            chart,
        }
    }

    pub fn views(&self) -> Vec<ChartView> {
        ViewKind::ALL.iter().map(|&kind| self.view(kind)).collect()
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            invoices: self.table.len(),
            suppliers: aggregate(&self.table, GroupBy::Supplier, Reduction::Count).len(),
            load: self.load_report.clone(),
        }
    }
}
