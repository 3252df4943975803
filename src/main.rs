//! 市场数据桥接服务
//!
//! 统一对外提供A股和全球市场数据的 RESTful API，
//! 数据来源：东方财富、Yahoo Finance

mod config;   // 配置加载
mod handlers; // HTTP 请求处理器
mod models;   // 数据模型定义
mod services; // 业务逻辑服务

use actix_web::{middleware::Logger, App, HttpServer};
use env_logger::Env;

use crate::config::AppConfig;
use crate::services::name_map;

/// 应用程序入口
///
/// 加载配置和名称映射表后启动 HTTP 服务器
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_config = AppConfig::load();
    name_map::init(&app_config.data.name_map_path);

    log::info!("启动市场数据桥接服务，监听 {}", app_config.bind_addr());

    let bind_addr = app_config.bind_addr();
    let workers = app_config.server.workers;

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(Logger::default()) // 添加请求日志中间件
            .configure(handlers::config) // 配置路由
    })
    .bind(bind_addr)?;

    // workers 为 0 时沿用 actix 默认值（CPU 核数）
    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
