//! Yahoo Finance 数据服务（全球市场数据源）
//!
//! 提供美股、港股及全球指数数据的获取和解析逻辑
//!
//! ## 主要功能
//! - 历史K线（v8 chart）
//! - 批量实时报价（v7 quote）
//! - 个股档案（v10 quoteSummary）
//! - 个股新闻（v1 search）
//! - 股票筛选器（v1 screener）

mod chart;
mod common;
mod news;
mod quote;
mod screener;

pub use chart::get_history;
pub use news::get_news;
pub use quote::{get_quotes, get_stock_info, parse_index_quote};
pub use screener::screen;
