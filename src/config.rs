use crate::service::normalizer::DayOrder;
use crate::service::trend::YearSpec;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 调试开关: 日志级别提升到 DEBUG
    pub debug: bool,
}

/// 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub path: PathBuf,
    /// 工作表名, 为空时读取第一个工作表
    pub sheet: Option<String>,
    /// 仅对 .csv 生效
    pub delimiter: char,
    pub date_order: DayOrder,
}

/// 报表参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub top_n: usize,
    pub comparison_years: Vec<i32>,
    /// 数据不完整的年份 (通常是当年)
    pub partial_year: Option<i32>,
    pub partial_cutoff_month: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                debug: false,
            },
            data: DataConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data_proveedores.xlsx"),
            sheet: None,
            delimiter: ',',
            date_order: DayOrder::DayFirst,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            comparison_years: vec![2023, 2024, 2025],
            partial_year: Some(2025),
            partial_cutoff_month: 3,
        }
    }
}

impl ReportConfig {
    /// 对比趋势的年份列表, 不完整年份带截止月
    pub fn year_specs(&self) -> Vec<YearSpec> {
        self.comparison_years
            .iter()
            .map(|&year| YearSpec {
                year,
                cutoff_month: (self.partial_year == Some(year)).then_some(self.partial_cutoff_month),
            })
            .collect()
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> dashboard.toml (可选) -> DASHBOARD_ 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("dashboard")
    }

    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("DASHBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("report.comparison_years")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
