use std::sync::Arc;
use supplier_dashboard::{api, load_invoice_table, AppConfig, DashboardService};
use tracing::{error, info, Level};
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置 (日志级别取决于 debug 开关)
    let config = AppConfig::load()?;

    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .with_max_level(if config.server.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("Starting dashboard with config: {:?}", config);

    // 唯一的数据源, 读取失败则无法启动
    let (table, report) = match load_invoice_table(&config.data) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load {}: {}", config.data.path.display(), e);
            return Err(e.into());
        }
    };

    let dashboard = Arc::new(DashboardService::with_load_report(
        Arc::new(table),
        report,
        config.report.clone(),
    ));
    let app = api::router(dashboard);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/views        - all chart views");
    info!("  GET /api/views/:view  - single chart view");
    info!("  GET /api/summary      - invoice table summary");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
