//! 东方财富数据服务（中国市场数据源）
//!
//! 提供A股数据的获取和解析逻辑，参考 akshare 对应接口实现
//!
//! ## 主要功能
//! - 全市场实时快照（stock_zh_a_spot_em）
//! - 个股历史K线（stock_zh_a_hist）
//! - 个股新闻和 7×24 快讯（stock_news_em）
//! - 个股概要信息（stock_individual_info_em）

mod common;
mod hist;
mod info;
mod news;
mod spot;

pub use hist::get_history;
pub use info::get_stock_info;
pub use news::{get_stock_news, get_telegraph_news};
pub use spot::get_snapshot;
