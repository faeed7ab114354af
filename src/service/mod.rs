pub mod aggregator;
pub mod dashboard;
pub mod normalizer;
pub mod ranker;
pub mod timeline;
pub mod trend;

pub use aggregator::{aggregate, GroupBy, Reduction};
pub use dashboard::{Chart, ChartView, DashboardService, TableSummary, ViewKind};
pub use normalizer::{DateNormalizer, DayOrder};
pub use ranker::top_n;
pub use timeline::payment_timeline;
pub use trend::{yearly_series, YearSpec};
