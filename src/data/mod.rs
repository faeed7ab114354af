pub mod cell;
pub mod columns;
pub mod loader;

pub use cell::{parse_amount, RawCell};
pub use columns::ColumnLayout;
pub use loader::{build_table, load_invoice_table, LoadReport, QuarantinedRow, SourceRow};
