pub mod aggregate;
pub mod invoice;
pub mod series;

pub use aggregate::{AggregateRow, GroupKey, YearMonth};
pub use invoice::{DateField, InvoiceRecord, InvoiceTable};
pub use series::{MonthPoint, Phase, TimelinePoint, YearlySeries};
