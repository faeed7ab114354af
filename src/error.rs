use std::path::PathBuf;
use thiserror::Error;

/// 数据源加载错误 - 启动阶段致命
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open spreadsheet '{}': {}", .path.display(), .source)]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Spreadsheet '{}' contains no sheets", .0.display())]
    NoSheets(PathBuf),

    #[error("Sheet '{0}' not found")]
    SheetNotFound(String),

    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("CSV delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error("Spreadsheet has no header row")]
    MissingHeader,

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
}
