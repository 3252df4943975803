//! 新闻数据模型

use serde::{Deserialize, Serialize};

/// 新闻条目
///
/// 个股新闻和大盘快讯共用同一结构
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// 发布时间
    pub published_at: String,
    /// 标题
    pub headline: String,
    /// 原文链接（快讯类新闻可能为空）
    pub url: String,
    /// 摘要（无摘要时回落为标题）
    pub summary: String,
    /// 来源
    pub source: String,
}

/// /news 查询参数
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    /// 股票代码，给出时返回个股新闻
    pub symbol: Option<String>,
    /// 区域（us/cn，默认 us），仅在未给出 symbol 时生效
    pub region: Option<String>,
}
